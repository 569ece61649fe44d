//! In-memory chromosome sequence
//!
//! Variant records use 1-based genomic coordinates. The sequence stores a
//! sentinel byte at index 0 so a record position indexes the byte vector
//! directly, with no arithmetic at the call sites.

/// Non-informative base stored at index 0
const SENTINEL: u8 = b'N';

/// The full base sequence of one chromosome, addressable by 1-based position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromosomeSequence {
    name: String,
    bases: Vec<u8>,
}

impl ChromosomeSequence {
    /// Build a sequence from raw bases, installing the sentinel at index 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use vcf_leftalign::ChromosomeSequence;
    ///
    /// let chrom = ChromosomeSequence::new("chr1", b"ACGT".to_vec());
    /// assert_eq!(chrom.base_at(1), Some(b'A'));
    /// assert_eq!(chrom.base_at(4), Some(b'T'));
    /// assert_eq!(chrom.base_at(5), None);
    /// ```
    pub fn new(name: impl Into<String>, mut bases: Vec<u8>) -> Self {
        bases.insert(0, SENTINEL);
        ChromosomeSequence {
            name: name.into(),
            bases,
        }
    }

    /// Chromosome name as requested at load time
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of real bases (the sentinel does not count)
    pub fn len(&self) -> u64 {
        (self.bases.len() - 1) as u64
    }

    /// True when the sequence holds no real bases
    pub fn is_empty(&self) -> bool {
        self.bases.len() == 1
    }

    /// Base at a 1-based position; position 0 yields the sentinel.
    ///
    /// Returns `None` past the end of the chromosome.
    pub fn base_at(&self, pos: u64) -> Option<u8> {
        usize::try_from(pos)
            .ok()
            .and_then(|i| self.bases.get(i))
            .copied()
    }
}
