//! VCF (Variant Call Format) support
//!
//! This module provides the record model for tab-delimited variant lines:
//! parsing (including the symbolic long-read dialect), classification into
//! insertion/deletion/unsupported, and serialization back to line form.

mod reader;
mod record;
mod symbolic;

pub use reader::{open_variant_file, VcfLine, VcfReader};
pub use record::{VariantKind, VariantRecord};
pub use symbolic::{seq_annotation, DELETION_MARKER, INSERTION_MARKER};
