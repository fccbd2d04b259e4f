//! Line supplier over a byte stream.

use log::warn;
use std::io::{self, BufRead};

const BOM: &[u8] = b"\xef\xbb\xbf";

/// Reads lines from `R`, stripping line terminators and a leading byte order
/// mark.
///
/// A read error ends the stream. The error is kept and returned by
/// [`finish`](LineReader::finish).
///
/// ```
/// use e8tags::reader::LineReader;
/// let mut reader = LineReader::new("a\r\nb\n".as_bytes());
/// assert_eq!(reader.next(), Some(b"a".to_vec()));
/// assert_eq!(reader.next(), Some(b"b".to_vec()));
/// assert_eq!(reader.next(), None);
/// assert_eq!(reader.next(), None);
/// assert!(reader.finish().is_ok());
/// ```
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
    first: bool,
    done: bool,
    error: Option<io::Error>,
}

impl<R: BufRead> LineReader<R> {
    /// Wrap `inner`.
    pub fn new(inner: R) -> LineReader<R> {
        LineReader {
            inner,
            first: true,
            done: false,
            error: None,
        }
    }

    /// Return the error that ended the stream, if any.
    pub fn finish(self) -> io::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        if self.done {
            return None;
        }
        let mut line = Vec::new();
        match self.inner.read_until(b'\n', &mut line) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                if line.last() == Some(&b'\n') {
                    line.pop();
                    if line.last() == Some(&b'\r') {
                        line.pop();
                    }
                }
                if self.first {
                    self.first = false;
                    if line.starts_with(BOM) {
                        line.drain(..BOM.len());
                    }
                }
                Some(line)
            }
            Err(e) => {
                warn!("Read failed: {}", e);
                self.done = true;
                self.error = Some(e);
                None
            }
        }
    }
}
