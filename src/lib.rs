#![warn(missing_docs)]
//! e8tags -- Declaration tags for E8Script and OneScript sources.
//!
//! The scanner makes one pass over the source, line by line, and reports
//! functions, procedures and variables declared with Russian or English
//! keywords. Variables declared inside a function body are scoped to it.

pub mod argparse;
pub mod cursor;
pub mod error;
pub mod fold;
pub mod keywords;
pub mod language;
pub mod options;
pub mod output;
pub mod reader;
pub mod run;
pub mod scanner;
pub mod tag;

pub use run::run;
pub use scanner::{scan, LineSource, ScanOptions, TagSink};
pub use tag::{Scope, ScopeKind, TagKind, TagRecord};
