//! Left-alignment scenarios on synthetic references
//!
//! Each case builds a chromosome small enough that the expected position and
//! allele strings can be verified by eye. Positions are 1-based throughout.

use vcf_leftalign::{left_shift, ChromosomeSequence, VariantRecord};

fn chromosome(bases: &[u8]) -> ChromosomeSequence {
    ChromosomeSequence::new("chr1", bases.to_vec())
}

// =============================================================================
// Insertions
// =============================================================================

#[test]
fn test_insertion_shifts_left_by_one() {
    // bases:        A C G G T A C G T A
    // positions:    1 2 3 4 5 6 7 8 9 10
    // inserting T after the lone T at position 5 is the same event as
    // inserting T after the G at position 4
    let seq = chromosome(b"ACGGTACGTA");
    let shift = left_shift(5, "T", "TT", &seq).unwrap();
    assert_eq!(shift.pos, 4);
    assert_eq!(shift.ref_allele, "G");
    assert_eq!(shift.alt_allele, "GT");
    assert!(shift.shifted);
}

#[test]
fn test_insertion_shifts_across_homopolymer() {
    // the T run spans positions 4-7; the insertion lands on the run's left edge
    let seq = chromosome(b"ACGTTTTACG");
    let shift = left_shift(5, "T", "TT", &seq).unwrap();
    assert_eq!(shift.pos, 3);
    assert_eq!(shift.ref_allele, "G");
    assert_eq!(shift.alt_allele, "GT");
}

#[test]
fn test_insertion_record_roundtrip_after_shift() {
    let seq = chromosome(b"ACGTTTTACG");
    let mut record = VariantRecord::parse("chr1\t5\t.\tT\tTT\t30\tPASS\t.", 1).unwrap();

    let shift = left_shift(record.pos(), record.ref_allele(), record.alt_allele(), &seq).unwrap();
    record.apply(shift.pos, shift.ref_allele, shift.alt_allele);

    assert_eq!(record.to_string(), "chr1\t3\t.\tG\tGT\t30\tPASS\t.");
}

// =============================================================================
// Deletions
// =============================================================================

#[test]
fn test_deletion_shifts_once_per_matching_preceding_base() {
    // bases:        G C T A G T A G T T G C
    // positions:    1 2 3 4 5 6 7 8 9 ...
    // the deleted TAG at positions 6-8 repeats at positions 3-5, so the walk
    // takes exactly three steps and stops
    let seq = chromosome(b"GCTAGTAGTTGC");
    let shift = left_shift(5, "GTAG", "G", &seq).unwrap();
    assert_eq!(shift.pos, 2);
    assert_eq!(shift.ref_allele, "CTAG");
    assert_eq!(shift.alt_allele, "C");
}

#[test]
fn test_deletion_record_roundtrip_after_shift() {
    let seq = chromosome(b"GCTAGTAGTTGC");
    let mut record = VariantRecord::parse("chr1\t5\t.\tGTAG\tG\t30\tPASS\t.", 1).unwrap();

    let shift = left_shift(record.pos(), record.ref_allele(), record.alt_allele(), &seq).unwrap();
    record.apply(shift.pos, shift.ref_allele, shift.alt_allele);

    assert_eq!(record.to_string(), "chr1\t2\t.\tCTAG\tC\t30\tPASS\t.");
}

// =============================================================================
// Position 1 boundary
// =============================================================================

#[test]
fn test_record_at_position_one_does_not_move() {
    // the insertion sits on a T run that starts at position 1; there is
    // nowhere left to go and the record must come back unchanged
    let seq = chromosome(b"TTTTACGT");
    let mut record = VariantRecord::parse("chr1\t1\t.\tT\tTT\t30\tPASS\t.", 1).unwrap();

    let shift = left_shift(record.pos(), record.ref_allele(), record.alt_allele(), &seq).unwrap();
    assert_eq!(shift.pos, 1);
    assert!(!shift.shifted);

    record.apply(shift.pos, shift.ref_allele, shift.alt_allele);
    assert_eq!(record.to_string(), "chr1\t1\t.\tT\tTT\t30\tPASS\t.");
}

#[test]
fn test_walk_into_position_one_stops_there() {
    // the whole prefix matches; the walk must stop exactly at 1, never 0
    let seq = chromosome(b"AAAAAC");
    let shift = left_shift(4, "A", "AA", &seq).unwrap();
    assert_eq!(shift.pos, 1);
    assert_eq!(shift.ref_allele, "A");
    assert_eq!(shift.alt_allele, "AA");
}
