// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! vcf-leftalign: VCF indel left-aligner
//!
//! Shifts insertions and deletions to their leftmost equivalent position
//! against a reference genome, streaming one chromosome at a time.
//!
//! # Example
//!
//! ```
//! use vcf_leftalign::{left_shift, ChromosomeSequence};
//!
//! // Positions are 1-based; the reference holds one chromosome in memory
//! let chromosome = ChromosomeSequence::new("chr1", b"ACGTTTTACG".to_vec());
//!
//! // A T insertion inside the T homopolymer shifts to the run's left edge
//! let shift = left_shift(5, "T", "TT", &chromosome).unwrap();
//! assert_eq!((shift.pos, shift.ref_allele.as_str(), shift.alt_allele.as_str()), (3, "G", "GT"));
//! ```

pub mod align;
pub mod alphabet;
pub mod driver;
pub mod error;
pub mod reference;
pub mod vcf;

// Re-export commonly used types
pub use align::{left_shift, ShiftResult};
pub use driver::{run, RunStats};
pub use error::{AlignError, ErrorCode};
pub use reference::{ChromosomeSequence, ReferenceCursor};
pub use vcf::{VariantKind, VariantRecord, VcfLine, VcfReader};

/// Result type alias for vcf-leftalign operations
pub type Result<T> = std::result::Result<T, AlignError>;
