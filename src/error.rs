//! Error types for vcf-leftalign
//!
//! This module provides the crate-wide error handling:
//! - Error codes for categorization
//! - Structured error variants carrying the offending line, column value, or
//!   genomic location
//! - A single conversion point from `std::io::Error`
//!
//! Parse and reference errors are fatal by design: they indicate that the
//! variant file and the reference file do not belong together, which would
//! invalidate every record written after the failure. Only the binary decides
//! what a fatal error means for the process.

use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Error codes for categorizing errors
///
/// These codes can be used for programmatic error handling
/// and for documentation lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // Parse errors (E1xxx)
    /// Data line with fewer than the required columns
    TooFewColumns = 1001,
    /// Position column is not a 1-based integer
    MalformedPosition = 1002,
    /// Symbolic alternate allele with an unrecognized marker
    UnknownSymbolicMarker = 1003,
    /// Symbolic record without a decodable SEQ= annotation
    MissingSeqAnnotation = 1004,

    // Reference errors (E2xxx)
    /// Chromosome not found in the reference, even after rescanning
    ChromosomeNotFound = 2001,

    // Validation errors (E3xxx)
    /// Reference allele does not match the loaded reference sequence
    ReferenceMismatch = 3001,

    // IO errors (E9xxx)
    /// File IO error
    IoError = 9001,
}

impl ErrorCode {
    /// Get the error code as a string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("E{:04}", *self as u16)
    }

    /// Get a brief description of this error code
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::TooFewColumns => "too few columns in data line",
            ErrorCode::MalformedPosition => "malformed position column",
            ErrorCode::UnknownSymbolicMarker => "unknown symbolic allele marker",
            ErrorCode::MissingSeqAnnotation => "missing or empty SEQ= annotation",
            ErrorCode::ChromosomeNotFound => "chromosome not found in reference",
            ErrorCode::ReferenceMismatch => "reference sequence mismatch",
            ErrorCode::IoError => "file I/O error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors produced while left-aligning a variant file
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// Data line with fewer than the required 8 tab-delimited columns
    #[error("line {line}: expected at least 8 tab-delimited columns, found {found}")]
    TooFewColumns { line: u64, found: usize },

    /// Position column that does not parse as a 1-based integer
    #[error("line {line}: position column {value:?} is not a valid position")]
    MalformedPosition { line: u64, value: String },

    /// Angle-bracketed alternate allele other than `<INS>` or `<DEL>`
    #[error("line {line}: unknown symbolic allele marker {marker}")]
    UnknownSymbolicMarker { line: u64, marker: String },

    /// Symbolic record whose info column has no decodable `SEQ=` entry
    #[error("line {line}: symbolic record carries no decodable SEQ=<bases> entry in its info column")]
    MissingSeqAnnotation { line: u64 },

    /// Chromosome absent from the reference after the full rescan
    #[error("chromosome {chromosome} not found in reference {path}")]
    ChromosomeNotFound { chromosome: String, path: String },

    /// Reference allele does not match the reference sequence at the record's position
    #[error("reference mismatch at {chromosome}:{position}: record expects {expected}, reference has {found}")]
    ReferenceMismatch {
        chromosome: String,
        position: u64,
        expected: String,
        found: String,
    },

    /// IO error (for file operations)
    #[error("IO error: {msg}")]
    Io { msg: String },
}

impl AlignError {
    /// Create an IO error that names the file involved
    pub fn io(path: &Path, err: std::io::Error) -> Self {
        AlignError::Io {
            msg: format!("{}: {}", path.display(), err),
        }
    }

    /// Get the error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AlignError::TooFewColumns { .. } => ErrorCode::TooFewColumns,
            AlignError::MalformedPosition { .. } => ErrorCode::MalformedPosition,
            AlignError::UnknownSymbolicMarker { .. } => ErrorCode::UnknownSymbolicMarker,
            AlignError::MissingSeqAnnotation { .. } => ErrorCode::MissingSeqAnnotation,
            AlignError::ChromosomeNotFound { .. } => ErrorCode::ChromosomeNotFound,
            AlignError::ReferenceMismatch { .. } => ErrorCode::ReferenceMismatch,
            AlignError::Io { .. } => ErrorCode::IoError,
        }
    }
}

impl From<std::io::Error> for AlignError {
    fn from(err: std::io::Error) -> Self {
        AlignError::Io {
            msg: err.to_string(),
        }
    }
}
