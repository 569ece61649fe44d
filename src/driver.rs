//! End-to-end alignment of a variant file against a reference
//!
//! The driver streams the input line by line, keeps exactly one chromosome in
//! memory, and writes every line to the output in input order. Records the
//! aligner cannot handle are copied through unchanged with a warning rather
//! than aborting the run.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info, warn};

use crate::align::left_shift;
use crate::error::AlignError;
use crate::reference::{ChromosomeSequence, ReferenceCursor};
use crate::vcf::{open_variant_file, VariantKind, VcfLine};
use crate::Result;

/// Counters accumulated over one alignment run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Data lines read
    pub records: u64,
    /// Records whose position moved left
    pub shifted: u64,
    /// Records that arrived in the symbolic encoding
    pub symbolic: u64,
    /// Records copied through without alignment
    pub unsupported: u64,
    /// Header and comment lines copied through
    pub comments: u64,
}

/// Left-align every record of `input` against `reference`, writing to `output`.
///
/// Chromosome switches drive the reference cursor forward; a record naming a
/// chromosome behind the cursor triggers one rescan from the top of the file.
/// Output lines appear in input order, headers included.
///
/// # Errors
///
/// Fails on I/O problems, malformed data lines, a reference allele that
/// contradicts the reference sequence, or a chromosome the reference does not
/// contain.
pub fn run(input: &Path, reference: &Path, output: &Path) -> Result<RunStats> {
    let mut reader = open_variant_file(input)?;
    let mut cursor = ReferenceCursor::open(reference)?;
    let file = File::create(output).map_err(|e| AlignError::io(output, e))?;
    let mut writer = BufWriter::new(file);

    let mut stats = RunStats::default();
    // empty name so the first record always triggers a load
    let mut chromosome = ChromosomeSequence::new("", Vec::new());

    while let Some(line) = reader.read_line()? {
        match line {
            VcfLine::Comment(text) => {
                stats.comments += 1;
                writeln!(writer, "{}", text).map_err(|e| AlignError::io(output, e))?;
            }
            VcfLine::Record(mut record) => {
                stats.records += 1;
                if record.is_symbolic() {
                    stats.symbolic += 1;
                }
                if chromosome.name() != record.chrom() {
                    chromosome = load_chromosome(&mut cursor, record.chrom())?;
                }
                if record.kind() == VariantKind::Unsupported {
                    stats.unsupported += 1;
                    warn!(
                        "cannot left-align record {}:{} ({} -> {}); copied through unchanged",
                        record.chrom(),
                        record.pos(),
                        record.ref_allele(),
                        record.alt_allele()
                    );
                } else {
                    let shift = left_shift(
                        record.pos(),
                        record.ref_allele(),
                        record.alt_allele(),
                        &chromosome,
                    )?;
                    if shift.shifted {
                        stats.shifted += 1;
                        debug!(
                            "shifted {}:{} left to position {}",
                            record.chrom(),
                            record.pos(),
                            shift.pos
                        );
                    }
                    record.apply(shift.pos, shift.ref_allele, shift.alt_allele);
                }
                writeln!(writer, "{}", record).map_err(|e| AlignError::io(output, e))?;
            }
        }
    }
    writer.flush().map_err(|e| AlignError::io(output, e))?;
    Ok(stats)
}

/// Load a chromosome by name, rescanning the reference from the top when the
/// forward scan misses.
fn load_chromosome(cursor: &mut ReferenceCursor, name: &str) -> Result<ChromosomeSequence> {
    if let Some(chromosome) = cursor.find(name)? {
        return Ok(chromosome);
    }
    info!(
        "chromosome {} is not ahead of the cursor; rescanning {}",
        name,
        cursor.path().display()
    );
    cursor.restart()?;
    match cursor.find(name)? {
        Some(chromosome) => Ok(chromosome),
        None => Err(AlignError::ChromosomeNotFound {
            chromosome: name.to_string(),
            path: cursor.path().display().to_string(),
        }),
    }
}
