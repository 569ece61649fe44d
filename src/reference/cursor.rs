//! Rewindable scan over a FASTA-style reference
//!
//! The cursor scans forward from wherever it stands, so loading chromosomes
//! in reference order costs a single pass over the file. When a sought
//! chromosome lies behind the cursor, the caller restarts the scan explicitly
//! with [`ReferenceCursor::restart`] and tries once more; the cursor itself
//! never wraps around silently.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use log::info;

use super::sequence::ChromosomeSequence;
use crate::error::AlignError;
use crate::Result;

/// Open a text file for buffered reading, decompressing gzip transparently.
///
/// Compression is detected from the gzip magic bytes, so a compressed file
/// with a plain name still opens correctly.
pub fn open_text_reader(path: &Path) -> Result<Box<dyn BufRead>> {
    let gzipped = is_gzip_file(path)?;
    let file = File::open(path).map_err(|e| AlignError::io(path, e))?;
    if gzipped {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Check if a file is gzip-compressed by reading its magic bytes
///
/// Gzip files start with the magic bytes 0x1f 0x8b
fn is_gzip_file(path: &Path) -> Result<bool> {
    let mut file = File::open(path).map_err(|e| AlignError::io(path, e))?;
    let mut magic = [0u8; 2];
    match file.read_exact(&mut magic) {
        Ok(()) => Ok(magic == [0x1f, 0x8b]),
        // too small to be gzipped
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(false),
        Err(e) => Err(AlignError::io(path, e)),
    }
}

/// Forward scanner over the records of a reference file
pub struct ReferenceCursor {
    path: PathBuf,
    reader: Box<dyn BufRead>,
    /// Header consumed by a previous scan but belonging to the next record
    pending_header: Option<String>,
}

impl fmt::Debug for ReferenceCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceCursor")
            .field("path", &self.path)
            .field("pending_header", &self.pending_header)
            .finish_non_exhaustive()
    }
}

impl ReferenceCursor {
    /// Open a reference file (plain or gzip-compressed)
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let reader = open_text_reader(&path)?;
        Ok(ReferenceCursor {
            path,
            reader,
            pending_header: None,
        })
    }

    /// Path of the underlying reference file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Restart the scan from the beginning of the reference
    pub fn restart(&mut self) -> Result<()> {
        self.reader = open_text_reader(&self.path)?;
        self.pending_header = None;
        Ok(())
    }

    /// Scan forward for the record named `name` and load its sequence.
    ///
    /// A header matches when the token between `>` and the first whitespace
    /// (or end of line) equals `name` exactly, so `chr1` never matches a
    /// search for `chr11` or vice versa. Sequence lines are concatenated
    /// verbatim until the next header or end of file; that next header is
    /// remembered and examined first by the following `find`, so consecutive
    /// records load without a restart.
    ///
    /// Returns `Ok(None)` when the forward scan reaches end of file without a
    /// match; deciding whether to restart is the caller's job.
    pub fn find(&mut self, name: &str) -> Result<Option<ChromosomeSequence>> {
        let mut copying = false;
        let mut bases: Vec<u8> = Vec::new();

        while let Some(line) = self.next_line()? {
            if let Some(rest) = line.strip_prefix('>') {
                if copying {
                    // this header opens the next record; keep it for later
                    self.pending_header = Some(line);
                    break;
                }
                let token = rest.split_whitespace().next().unwrap_or("");
                if token == name {
                    copying = true;
                }
            } else if copying {
                bases.extend_from_slice(line.as_bytes());
            }
        }

        if copying {
            let sequence = ChromosomeSequence::new(name, bases);
            info!(
                "loaded chromosome {} ({} bases) from {}",
                name,
                sequence.len(),
                self.path.display()
            );
            Ok(Some(sequence))
        } else {
            Ok(None)
        }
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        if let Some(line) = self.pending_header.take() {
            return Ok(Some(line));
        }
        let mut buf = String::new();
        let n = self
            .reader
            .read_line(&mut buf)
            .map_err(|e| AlignError::io(&self.path, e))?;
        if n == 0 {
            return Ok(None);
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(Some(buf))
    }
}
