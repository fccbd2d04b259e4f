//! Scan a single input and print its tags.

use log::debug;
use std::io::BufRead;
use termcolor::WriteColor;

use crate::error::{Error, Result};
use crate::options::Options;
use crate::output::write_tags;
use crate::reader::LineReader;
use crate::scanner::{scan, ScanOptions};
use crate::tag::TagRecord;

/// Scan everything `input` contains.
///
/// ```
/// use e8tags::run::scan_reader;
/// use e8tags::scanner::ScanOptions;
///
/// let source = "\u{feff}Перем А, Б;\r\n";
/// let tags = scan_reader(source.as_bytes(), &ScanOptions::default()).unwrap();
/// assert_eq!(tags.len(), 2);
/// assert_eq!(tags[1].name, "Б");
/// ```
pub fn scan_reader<R: BufRead>(input: R, options: &ScanOptions) -> std::io::Result<Vec<TagRecord>> {
    let mut lines = LineReader::new(input);
    let mut tags = Vec::new();
    scan(&mut lines, &mut tags, options);
    lines.finish()?;
    Ok(tags)
}

/// Scan `input`, named `path`, with `options` and write its tags to `out`.
/// Returns the number of tags written.
pub fn run<R: BufRead, W: WriteColor>(
    options: &Options,
    path: &str,
    input: R,
    out: &mut W,
) -> Result<usize> {
    debug!("Scanning {}", path);
    let tags = scan_reader(input, &options.scan).map_err(|e| Error::io(path, e))?;
    debug!("{} tags in {}", tags.len(), path);
    write_tags(out, options.format, path, &tags)?;
    Ok(tags.len())
}
