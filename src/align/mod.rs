//! Indel left-alignment
//!
//! A variant caller may report an indel anywhere inside a repeat tract; this
//! module shifts insertions and deletions to the leftmost position that keeps
//! their genomic meaning, which is the canonical representation used when
//! comparing call sets.

mod leftshift;

pub use leftshift::{left_shift, ShiftResult};
