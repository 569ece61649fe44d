//! Reference sequence access
//!
//! Loads chromosome sequences out of a FASTA-style reference file through a
//! rewindable forward-scanning cursor.

pub mod cursor;
pub mod sequence;

pub use cursor::{open_text_reader, ReferenceCursor};
pub use sequence::ChromosomeSequence;
