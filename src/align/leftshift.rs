//! The left-shift walk
//!
//! Both walks move the event one base to the left per step and stop as soon
//! as a step would change the event's meaning, or when the record reaches
//! position 1. Insertions test the trailing alternate base against the base
//! that would become the new anchor; deletions test the base just past the
//! deletion window. The walk is a pure function: callers receive a result
//! value and decide what to do with it.

use crate::error::AlignError;
use crate::reference::ChromosomeSequence;
use crate::vcf::VariantKind;
use crate::Result;

/// Outcome of a left-shift walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftResult {
    /// Final 1-based position
    pub pos: u64,
    /// Final reference allele
    pub ref_allele: String,
    /// Final alternate allele
    pub alt_allele: String,
    /// Whether the walk moved the record at all
    pub shifted: bool,
}

/// Left-align one variant against its chromosome sequence.
///
/// Unsupported records (anything that classifies as neither insertion nor
/// deletion) come back unchanged; logging them is the caller's concern.
///
/// # Errors
///
/// Returns [`AlignError::ReferenceMismatch`] when the first base of the
/// reference allele does not equal the chromosome's base at `pos`, which
/// means the variant file and the reference file do not belong together.
///
/// # Examples
///
/// ```
/// use vcf_leftalign::{left_shift, ChromosomeSequence};
///
/// let chrom = ChromosomeSequence::new("chr1", b"ACGTTTTACG".to_vec());
/// // a T inserted inside the T-run at positions 4-7 belongs at the run's left edge
/// let shift = left_shift(5, "T", "TT", &chrom).unwrap();
/// assert_eq!((shift.pos, shift.ref_allele.as_str(), shift.alt_allele.as_str()), (3, "G", "GT"));
/// ```
pub fn left_shift(
    pos: u64,
    ref_allele: &str,
    alt_allele: &str,
    chromosome: &ChromosomeSequence,
) -> Result<ShiftResult> {
    match VariantKind::of(ref_allele, alt_allele) {
        VariantKind::Insertion => shift_insertion(pos, ref_allele, alt_allele, chromosome),
        VariantKind::Deletion => shift_deletion(pos, ref_allele, alt_allele, chromosome),
        VariantKind::Unsupported => Ok(ShiftResult {
            pos,
            ref_allele: ref_allele.to_string(),
            alt_allele: alt_allele.to_string(),
            shifted: false,
        }),
    }
}

/// Verify the anchor base and return it.
///
/// The first base of the reference allele must restate the chromosome's base
/// at the record position; anything else is a mismatched file pair.
fn anchor_check(pos: u64, ref_allele: &str, chromosome: &ChromosomeSequence) -> Result<u8> {
    let expected = ref_allele.as_bytes().first().copied();
    let actual = chromosome.base_at(pos);
    match (expected, actual) {
        (Some(e), Some(a)) if e == a => Ok(e),
        _ => Err(AlignError::ReferenceMismatch {
            chromosome: chromosome.name().to_string(),
            position: pos,
            expected: describe_base(expected),
            found: describe_base(actual),
        }),
    }
}

fn describe_base(base: Option<u8>) -> String {
    match base {
        Some(b) => format!("'{}'", b as char),
        None => "no base".to_string(),
    }
}

/// Insertion walk: rotate the inserted sequence leftward.
///
/// Each step drops the trailing alternate base (which duplicates the base
/// that becomes the new anchor) and prepends the new anchor, so the net
/// inserted sequence is preserved while the anchor moves left.
fn shift_insertion(
    mut pos: u64,
    ref_allele: &str,
    alt_allele: &str,
    chromosome: &ChromosomeSequence,
) -> Result<ShiftResult> {
    let mut ref_base = anchor_check(pos, ref_allele, chromosome)?;
    let mut alt = alt_allele.to_string();
    let start = pos;

    while alt.as_bytes().last() == Some(&ref_base) && pos > 1 {
        let Some(next_base) = chromosome.base_at(pos - 1) else {
            break;
        };
        pos -= 1;
        ref_base = next_base;
        alt.pop();
        alt.insert(0, ref_base as char);
    }

    Ok(ShiftResult {
        pos,
        ref_allele: (ref_base as char).to_string(),
        alt_allele: alt,
        shifted: pos != start,
    })
}

/// Deletion walk: slide the deletion window leftward.
///
/// `last_del_pos` is the coordinate just past the deleted span, i.e. the base
/// that reappears once the deletion collapses. While that base equals the
/// would-be new anchor, the whole window can move one base left.
fn shift_deletion(
    mut pos: u64,
    ref_allele: &str,
    alt_allele: &str,
    chromosome: &ChromosomeSequence,
) -> Result<ShiftResult> {
    let mut ref_base = anchor_check(pos, ref_allele, chromosome)?;
    let mut refa = ref_allele.to_string();
    let mut alt = alt_allele.to_string();
    let event_len = (refa.len() - alt.len()) as u64;
    let start = pos;
    let mut last_del_pos = pos.saturating_add(event_len);

    while chromosome.base_at(last_del_pos) == Some(ref_base) && pos > 1 {
        let Some(next_base) = chromosome.base_at(pos - 1) else {
            break;
        };
        pos -= 1;
        ref_base = next_base;
        refa.pop();
        refa.insert(0, ref_base as char);
        alt.clear();
        alt.push(ref_base as char);
        last_del_pos = pos.saturating_add(event_len);
    }

    Ok(ShiftResult {
        pos,
        ref_allele: refa,
        alt_allele: alt,
        shifted: pos != start,
    })
}
