//! VCF record representation
//!
//! One parsed data line of a variant file. The record keeps every raw column
//! so that serialization reproduces the input byte-for-byte apart from the
//! position and allele columns, which are rewritten from the decoded values.

use std::fmt;

use super::symbolic::{self, DELETION_MARKER, INSERTION_MARKER};
use crate::error::AlignError;
use crate::Result;

/// Column index of the position field
const POS_COLUMN: usize = 1;
/// Column index of the reference-allele field
const REF_COLUMN: usize = 3;
/// Column index of the alternate-allele field
const ALT_COLUMN: usize = 4;
/// Column index of the info field
const INFO_COLUMN: usize = 7;
/// Minimum number of tab-delimited columns in a data line
const MIN_COLUMNS: usize = 8;

/// Classification of a variant record by its current allele lengths
///
/// Classification is a function of the allele strings alone and is re-derived
/// wherever it is needed; the left-shift walk rewrites the alleles, so a
/// cached value would go stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantKind {
    /// Single-base reference, multi-base single alternate
    Insertion,
    /// Multi-base reference, single-base alternate
    Deletion,
    /// Anything else: substitutions, multi-allelic records, complex events
    Unsupported,
}

impl VariantKind {
    /// Classify a pair of allele strings.
    ///
    /// A comma in the alternate allele marks a multi-allelic record, which is
    /// never treated as an insertion.
    pub fn of(ref_allele: &str, alt_allele: &str) -> Self {
        if ref_allele.len() > 1 && alt_allele.len() == 1 {
            VariantKind::Deletion
        } else if ref_allele.len() == 1 && alt_allele.len() > 1 && !alt_allele.contains(',') {
            VariantKind::Insertion
        } else {
            VariantKind::Unsupported
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VariantKind::Insertion => "insertion",
            VariantKind::Deletion => "deletion",
            VariantKind::Unsupported => "unsupported",
        };
        write!(f, "{}", name)
    }
}

/// A single data line of a variant file
///
/// The allele fields always hold explicit base sequences: symbolic `<INS>` and
/// `<DEL>` records are decoded during parsing and re-encoded by `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRecord {
    /// All raw columns of the line, in input order
    fields: Vec<String>,

    /// 1-based position of the record
    pos: u64,

    /// Reference allele as explicit bases
    ref_allele: String,

    /// Alternate allele as explicit bases
    alt_allele: String,

    /// Whether the input used the symbolic marker encoding
    symbolic: bool,
}

impl VariantRecord {
    /// Parse one tab-delimited data line.
    ///
    /// `line_number` is used for error reporting only.
    ///
    /// # Errors
    ///
    /// Fails when the line has fewer than 8 columns, when the position column
    /// is not an integer, when an angle-bracketed alternate allele is neither
    /// `<INS>` nor `<DEL>`, or when a symbolic record carries no decodable
    /// `SEQ=` annotation.
    pub fn parse(line: &str, line_number: u64) -> Result<VariantRecord> {
        let fields: Vec<String> = line.split('\t').map(str::to_string).collect();
        if fields.len() < MIN_COLUMNS {
            return Err(AlignError::TooFewColumns {
                line: line_number,
                found: fields.len(),
            });
        }

        let pos: u64 = fields[POS_COLUMN]
            .parse()
            .map_err(|_| AlignError::MalformedPosition {
                line: line_number,
                value: fields[POS_COLUMN].clone(),
            })?;

        let mut ref_allele = fields[REF_COLUMN].clone();
        let mut alt_allele = fields[ALT_COLUMN].clone();
        let mut symbolic = false;

        if alt_allele == INSERTION_MARKER {
            alt_allele = symbolic::seq_annotation(&fields[INFO_COLUMN])
                .ok_or(AlignError::MissingSeqAnnotation { line: line_number })?;
            symbolic = true;
        } else if alt_allele == DELETION_MARKER {
            // the single-base anchor moves to the alternate side and the
            // deleted bases come out of the annotation
            let deleted = symbolic::seq_annotation(&fields[INFO_COLUMN])
                .ok_or(AlignError::MissingSeqAnnotation { line: line_number })?;
            alt_allele = std::mem::replace(&mut ref_allele, deleted);
            symbolic = true;
        } else if symbolic::looks_symbolic(&alt_allele) {
            return Err(AlignError::UnknownSymbolicMarker {
                line: line_number,
                marker: alt_allele,
            });
        }

        Ok(VariantRecord {
            fields,
            pos,
            ref_allele,
            alt_allele,
            symbolic,
        })
    }

    /// Chromosome name (first column)
    pub fn chrom(&self) -> &str {
        &self.fields[0]
    }

    /// Current 1-based position
    pub fn pos(&self) -> u64 {
        self.pos
    }

    /// Current reference allele (explicit bases)
    pub fn ref_allele(&self) -> &str {
        &self.ref_allele
    }

    /// Current alternate allele (explicit bases)
    pub fn alt_allele(&self) -> &str {
        &self.alt_allele
    }

    /// Whether the input line used the symbolic marker encoding
    pub fn is_symbolic(&self) -> bool {
        self.symbolic
    }

    /// Classify the record from its current alleles
    pub fn kind(&self) -> VariantKind {
        VariantKind::of(&self.ref_allele, &self.alt_allele)
    }

    /// Replace position and alleles with the outcome of a left shift
    pub fn apply(&mut self, pos: u64, ref_allele: String, alt_allele: String) {
        self.pos = pos;
        self.ref_allele = ref_allele;
        self.alt_allele = alt_allele;
    }
}

impl fmt::Display for VariantRecord {
    /// Serialize the record back to a tab-delimited line.
    ///
    /// Symbolic records collapse back to a single-base anchor plus marker; the
    /// explicit bases stay internal and are not written into the info column.
    /// Which marker to emit is re-derived from the final allele lengths.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.pos.to_string();
        let (ref_col, alt_col): (&str, &str) = if self.symbolic {
            if self.ref_allele.len() > self.alt_allele.len() {
                (&self.alt_allele, DELETION_MARKER)
            } else {
                (&self.ref_allele, INSERTION_MARKER)
            }
        } else {
            (&self.ref_allele, &self.alt_allele)
        };

        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str("\t")?;
            }
            match i {
                POS_COLUMN => f.write_str(&pos)?,
                REF_COLUMN => f.write_str(ref_col)?,
                ALT_COLUMN => f.write_str(alt_col)?,
                _ => f.write_str(field)?,
            }
        }
        Ok(())
    }
}
