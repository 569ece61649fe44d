//! Line-oriented variant file reading
//!
//! The driver needs comment lines verbatim and data lines parsed, in input
//! order, so the reader yields an enum instead of skipping headers the way
//! most VCF readers do. Input files may be gzip-compressed; compression is
//! detected from the file contents, not the file name.

use std::io::BufRead;
use std::path::Path;

use super::record::VariantRecord;
use crate::reference::open_text_reader;
use crate::Result;

/// One line of a variant file, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcfLine {
    /// Header or comment line (starts with `#`), kept byte-for-byte
    Comment(String),
    /// Parsed data line
    Record(VariantRecord),
}

/// Reader over the lines of a variant file
pub struct VcfReader<R: BufRead> {
    reader: R,
    line_number: u64,
}

impl<R: BufRead> VcfReader<R> {
    /// Create a reader over any buffered source
    pub fn new(reader: R) -> Self {
        VcfReader {
            reader,
            line_number: 0,
        }
    }

    /// Number of the most recently read line (1-based; 0 before any read)
    pub fn line_number(&self) -> u64 {
        self.line_number
    }

    /// Read the next line, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Propagates I/O failures and any parse error from
    /// [`VariantRecord::parse`].
    pub fn read_line(&mut self) -> Result<Option<VcfLine>> {
        let mut buf = String::new();
        let n = self.reader.read_line(&mut buf)?;
        if n == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        if buf.starts_with('#') {
            Ok(Some(VcfLine::Comment(buf)))
        } else {
            let record = VariantRecord::parse(&buf, self.line_number)?;
            Ok(Some(VcfLine::Record(record)))
        }
    }
}

/// Open a variant file from a path, decompressing gzip transparently
pub fn open_variant_file(path: &Path) -> Result<VcfReader<Box<dyn BufRead>>> {
    Ok(VcfReader::new(open_text_reader(path)?))
}
