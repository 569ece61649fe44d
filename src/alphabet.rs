//! DNA alphabet predicates
//!
//! The symbolic-allele decoder collects runs of bases out of free-form
//! annotation text, so it needs a strict definition of "base": one of the four
//! canonical nucleotides, in either case. Ambiguity codes such as `N` or `R`
//! are deliberately not bases here; they terminate a run.

/// Returns true if the byte is one of the four canonical DNA bases,
/// in either case.
///
/// # Examples
///
/// ```
/// use vcf_leftalign::alphabet::is_dna_base;
///
/// assert!(is_dna_base(b'A'));
/// assert!(is_dna_base(b't'));
/// assert!(!is_dna_base(b'N'));
/// assert!(!is_dna_base(b'='));
/// ```
pub fn is_dna_base(base: u8) -> bool {
    matches!(base.to_ascii_uppercase(), b'A' | b'C' | b'G' | b'T')
}
