//! End-to-end runs over real files
//!
//! These tests drive the whole pipeline through temporary files: variant file
//! in, reference in, aligned variant file out.

use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use tempfile::{tempdir, TempDir};

use vcf_leftalign::{run, AlignError};

// chr2 deliberately precedes chr1 so that chr1-then-chr2 inputs force the
// cursor to rewind
const REFERENCE: &str = ">chr2 assembled from fragments\nGGAAAAC\n>chr1\nACGTT\nTTACG\n";

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn write_gzipped(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let file = std::fs::File::create(&path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(contents.as_bytes()).unwrap();
    encoder.finish().unwrap();
    path
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

// =============================================================================
// Alignment runs
// =============================================================================

#[test]
fn test_run_shifts_records_and_reports_counts() {
    let dir = tempdir().unwrap();
    let reference = write_file(&dir, "ref.fa", REFERENCE);
    let input = write_file(
        &dir,
        "in.vcf",
        "##fileformat=VCFv4.2\n\
         #CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n\
         chr1\t5\t.\tT\tTT\t30\tPASS\t.\n\
         chr1\t5\t.\tT\t<INS>\t30\tPASS\tSVTYPE=INS;SEQ=TT\n",
    );
    let output = dir.path().join("out.vcf");

    let stats = run(&input, &reference, &output).unwrap();
    assert_eq!(stats.records, 2);
    assert_eq!(stats.shifted, 2);
    assert_eq!(stats.symbolic, 1);
    assert_eq!(stats.unsupported, 0);
    assert_eq!(stats.comments, 2);

    assert_eq!(
        read(&output),
        "##fileformat=VCFv4.2\n\
         #CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n\
         chr1\t3\t.\tG\tGT\t30\tPASS\t.\n\
         chr1\t3\t.\tG\t<INS>\t30\tPASS\tSVTYPE=INS;SEQ=TT\n"
    );
}

#[test]
fn test_rewind_reaches_chromosome_behind_cursor() {
    let dir = tempdir().unwrap();
    let reference = write_file(&dir, "ref.fa", REFERENCE);
    // chr1 is second in the reference, so the cursor sits at end of file when
    // the chr2 record arrives and only a rewind can reach it
    let input = write_file(
        &dir,
        "in.vcf",
        "chr1\t5\t.\tT\tTT\t30\tPASS\t.\n\
         chr2\t4\t.\tAA\tA\t30\tPASS\t.\n",
    );
    let output = dir.path().join("out.vcf");

    let stats = run(&input, &reference, &output).unwrap();
    assert_eq!(stats.records, 2);
    assert_eq!(stats.shifted, 2);

    assert_eq!(
        read(&output),
        "chr1\t3\t.\tG\tGT\t30\tPASS\t.\n\
         chr2\t2\t.\tGA\tG\t30\tPASS\t.\n"
    );
}

#[test]
fn test_comments_pass_through_interleaved() {
    let dir = tempdir().unwrap();
    let reference = write_file(&dir, "ref.fa", REFERENCE);
    // comment lines may appear anywhere and must come out exactly where and
    // as they went in
    let input = write_file(
        &dir,
        "in.vcf",
        "##source=imputation pipeline\n\
         chr1\t5\t.\tT\tTT\t30\tPASS\t.\n\
         ##batch=2 of 7\n\
         chr1\t8\t.\tA\tC\t30\tPASS\t.\n",
    );
    let output = dir.path().join("out.vcf");

    let stats = run(&input, &reference, &output).unwrap();
    assert_eq!(stats.comments, 2);

    assert_eq!(
        read(&output),
        "##source=imputation pipeline\n\
         chr1\t3\t.\tG\tGT\t30\tPASS\t.\n\
         ##batch=2 of 7\n\
         chr1\t8\t.\tA\tC\t30\tPASS\t.\n"
    );
}

#[test]
fn test_unsupported_record_is_copied_with_the_run_continuing() {
    let dir = tempdir().unwrap();
    let reference = write_file(&dir, "ref.fa", REFERENCE);
    let input = write_file(
        &dir,
        "in.vcf",
        "chr1\t2\t.\tCG\tAT\t30\tPASS\t.\n\
         chr1\t5\t.\tT\tTT\t30\tPASS\t.\n",
    );
    let output = dir.path().join("out.vcf");

    let stats = run(&input, &reference, &output).unwrap();
    assert_eq!(stats.unsupported, 1);
    assert_eq!(stats.shifted, 1);

    // the multi-base substitution comes through untouched and the record
    // after it is still aligned
    assert_eq!(
        read(&output),
        "chr1\t2\t.\tCG\tAT\t30\tPASS\t.\n\
         chr1\t3\t.\tG\tGT\t30\tPASS\t.\n"
    );
}

#[test]
fn test_gzipped_input_and_reference() {
    let dir = tempdir().unwrap();
    let reference = write_gzipped(&dir, "ref.fa.gz", REFERENCE);
    let input = write_gzipped(&dir, "in.vcf.gz", "chr1\t5\t.\tT\tTT\t30\tPASS\t.\n");
    let output = dir.path().join("out.vcf");

    let stats = run(&input, &reference, &output).unwrap();
    assert_eq!(stats.shifted, 1);
    assert_eq!(read(&output), "chr1\t3\t.\tG\tGT\t30\tPASS\t.\n");
}

// =============================================================================
// Fatal conditions
// =============================================================================

#[test]
fn test_unknown_chromosome_is_fatal() {
    let dir = tempdir().unwrap();
    let reference = write_file(&dir, "ref.fa", REFERENCE);
    let input = write_file(&dir, "in.vcf", "chr9\t5\t.\tT\tTT\t30\tPASS\t.\n");
    let output = dir.path().join("out.vcf");

    let err = run(&input, &reference, &output).unwrap_err();
    assert_eq!(
        err,
        AlignError::ChromosomeNotFound {
            chromosome: "chr9".to_string(),
            path: reference.display().to_string(),
        }
    );
}

#[test]
fn test_reference_mismatch_is_fatal() {
    let dir = tempdir().unwrap();
    let reference = write_file(&dir, "ref.fa", REFERENCE);
    // chr1 position 5 holds T, not A; the pairing of files is wrong and the
    // run must stop rather than emit more records
    let input = write_file(&dir, "in.vcf", "chr1\t5\t.\tA\tAT\t30\tPASS\t.\n");
    let output = dir.path().join("out.vcf");

    let err = run(&input, &reference, &output).unwrap_err();
    assert!(matches!(err, AlignError::ReferenceMismatch { .. }));
    assert!(err.to_string().contains("chr1:5"));
}

#[test]
fn test_missing_input_file_names_the_path() {
    let dir = tempdir().unwrap();
    let reference = write_file(&dir, "ref.fa", REFERENCE);
    let input = dir.path().join("no-such.vcf");
    let output = dir.path().join("out.vcf");

    let err = run(&input, &reference, &output).unwrap_err();
    assert!(err.to_string().contains("no-such.vcf"));
}

#[test]
fn test_malformed_data_line_is_fatal() {
    let dir = tempdir().unwrap();
    let reference = write_file(&dir, "ref.fa", REFERENCE);
    let input = write_file(&dir, "in.vcf", "chr1\t5\t.\tT\n");
    let output = dir.path().join("out.vcf");

    let err = run(&input, &reference, &output).unwrap_err();
    assert_eq!(err, AlignError::TooFewColumns { line: 1, found: 4 });
}
