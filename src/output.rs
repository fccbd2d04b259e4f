//! Tag output formats.

use serde::Serialize;
use std::io::Write;
use std::str::FromStr;
use termcolor::{ColorSpec, WriteColor};

use crate::error::Result;
use crate::tag::TagRecord;

/// How tags are printed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tags file lines: `name<TAB>path<TAB>line;"<TAB>kind[<TAB>scope]`.
    #[default]
    Ctags,
    /// Human readable cross reference, one tag per line.
    Xref,
    /// One JSON object per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<OutputFormat, String> {
        match s {
            "ctags" => Ok(OutputFormat::Ctags),
            "xref" => Ok(OutputFormat::Xref),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

#[derive(Serialize)]
struct JsonTag<'a> {
    #[serde(rename = "_type")]
    ty: &'static str,
    name: &'a str,
    path: &'a str,
    line: usize,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<&'a str>,
    #[serde(rename = "scopeKind", skip_serializing_if = "Option::is_none")]
    scope_kind: Option<String>,
}

impl<'a> JsonTag<'a> {
    fn new(path: &'a str, tag: &'a TagRecord) -> JsonTag<'a> {
        JsonTag {
            ty: "tag",
            name: &tag.name,
            path,
            line: tag.line,
            kind: tag.kind.name(),
            scope: tag.scope.as_ref().map(|s| s.name.as_str()),
            scope_kind: tag.scope.as_ref().map(|s| s.kind.to_string()),
        }
    }
}

/// Write `tags` found in `path` to `out`.
///
/// ```
/// use e8tags::output::{write_tags, OutputFormat};
/// use e8tags::tag::{TagKind, TagRecord};
///
/// let mut out = termcolor::Buffer::no_color();
/// let tags = vec![TagRecord::new("Foo", TagKind::Function, 3)];
/// write_tags(&mut out, OutputFormat::Ctags, "a.os", &tags).unwrap();
/// assert_eq!(out.as_slice(), b"Foo\ta.os\t3;\"\tf\n");
/// ```
pub fn write_tags<W: WriteColor>(
    out: &mut W,
    format: OutputFormat,
    path: &str,
    tags: &[TagRecord],
) -> Result<()> {
    for tag in tags {
        match format {
            OutputFormat::Ctags => write_ctags(out, path, tag)?,
            OutputFormat::Xref => write_xref(out, path, tag)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &JsonTag::new(path, tag))?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

fn write_ctags<W: Write>(out: &mut W, path: &str, tag: &TagRecord) -> std::io::Result<()> {
    write!(
        out,
        "{}\t{}\t{};\"\t{}",
        tag.name,
        path,
        tag.line,
        tag.kind.letter()
    )?;
    if let Some(scope) = &tag.scope {
        write!(out, "\t{}:{}", scope.kind, scope.name)?;
    }
    writeln!(out)
}

fn write_xref<W: WriteColor>(out: &mut W, path: &str, tag: &TagRecord) -> std::io::Result<()> {
    out.set_color(ColorSpec::new().set_bold(true))?;
    write!(out, "{:<16}", tag.name)?;
    out.reset()?;
    write!(out, " {:<8} {:>4} {}", tag.kind.name(), tag.line, path)?;
    if let Some(scope) = &tag.scope {
        write!(out, " {}:{}", scope.kind, scope.name)?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::{Scope, TagKind};
    use termcolor::Buffer;

    fn sample() -> Vec<TagRecord> {
        vec![
            TagRecord::new("Foo", TagKind::Function, 2),
            TagRecord::new("x", TagKind::Variable, 3).with_scope(Some(Scope::function("Foo"))),
        ]
    }

    fn render(format: OutputFormat) -> String {
        let mut out = Buffer::no_color();
        write_tags(&mut out, format, "m.os", &sample()).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn ctags() {
        assert_eq!(
            render(OutputFormat::Ctags),
            "Foo\tm.os\t2;\"\tf\nx\tm.os\t3;\"\tv\tfunction:Foo\n"
        );
    }

    #[test]
    fn xref() {
        assert_eq!(
            render(OutputFormat::Xref),
            "Foo              function    2 m.os\n\
             x                variable    3 m.os function:Foo\n"
        );
    }

    #[test]
    fn xref_color() {
        let mut out = Buffer::ansi();
        write_tags(&mut out, OutputFormat::Xref, "m.os", &sample()).unwrap();
        let s = String::from_utf8(out.into_inner()).unwrap();
        assert!(s.contains("\x1b[1m"));
        assert!(s.contains("\x1b[0m"));
    }

    #[test]
    fn json() {
        let out = render(OutputFormat::Json);
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["_type"], "tag");
        assert_eq!(lines[0]["name"], "Foo");
        assert_eq!(lines[0]["kind"], "function");
        assert!(lines[0].get("scope").is_none());
        assert_eq!(lines[1]["line"], 3);
        assert_eq!(lines[1]["scope"], "Foo");
        assert_eq!(lines[1]["scopeKind"], "function");
    }

    #[test]
    fn formats_from_str() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("xref".parse::<OutputFormat>(), Ok(OutputFormat::Xref));
        assert!("etags".parse::<OutputFormat>().is_err());
    }
}
