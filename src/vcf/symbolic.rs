//! Symbolic (long-read style) allele encoding
//!
//! Some long-read structural-variant callers write indels with a marker in the
//! alternate-allele column (`<INS>` or `<DEL>`) and stash the actual bases in a
//! `SEQ=` entry of the info column. Internally every record carries explicit
//! allele sequences, so the marker form is decoded at parse time and restored
//! at serialization time. Any other angle-bracketed marker is an unknown event
//! type and rejected up front.

use crate::alphabet::is_dna_base;

/// Alternate-allele marker for a symbolic insertion
pub const INSERTION_MARKER: &str = "<INS>";

/// Alternate-allele marker for a symbolic deletion
pub const DELETION_MARKER: &str = "<DEL>";

/// Returns true for any angle-bracketed alternate allele, recognized or not
pub(crate) fn looks_symbolic(alt: &str) -> bool {
    alt.len() > 1 && alt.starts_with('<') && alt.ends_with('>')
}

/// Extract the base run from a `SEQ=` entry in an info column.
///
/// Scans for the literal key `SEQ=` and collects the maximal run of DNA bases
/// that follows it, uppercasing as it goes. The run ends at the first
/// character that is not a canonical base. Returns `None` when the key is
/// absent or the run is empty, which callers treat as an undecodable record.
///
/// # Examples
///
/// ```
/// use vcf_leftalign::vcf::seq_annotation;
///
/// assert_eq!(seq_annotation("SVTYPE=INS;SEQ=acgtn;END=100"), Some("ACGT".to_string()));
/// assert_eq!(seq_annotation("SVTYPE=INS;END=100"), None);
/// ```
pub fn seq_annotation(info: &str) -> Option<String> {
    let start = info.find("SEQ=")? + 4;
    let run: String = info[start..]
        .bytes()
        .take_while(|b| is_dna_base(*b))
        .map(|b| b.to_ascii_uppercase() as char)
        .collect();
    if run.is_empty() {
        None
    } else {
        Some(run)
    }
}
