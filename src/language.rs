//! Built-in language database.

use lazy_static::lazy_static;
use log::warn;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::scanner::KindSet;
use crate::tag::TagKind;

/// Name of the only supported language.
pub const E8SCRIPT: &str = "E8Script";

/// A tag kind as registered for a language.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct KindOption {
    /// The kind.
    pub kind: TagKind,
    /// Single-letter code.
    pub letter: char,
    /// Plural description, eg. "functions".
    pub description: String,
    /// Emitted unless disabled on the command line.
    pub enabled: bool,
}

/// Everything the host needs to know about a language.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ParserDefinition {
    /// File extensions, without the dot.
    pub extensions: Vec<String>,
    /// Registered tag kinds.
    pub kinds: Vec<KindOption>,
}

const BUILTIN_DATABASE: &str = include_str!("../config.json");

lazy_static! {
    static ref PARSED_DB: BTreeMap<String, ParserDefinition> =
        serde_json::from_str(BUILTIN_DATABASE).unwrap_or_else(|e| {
            warn!("Built-in JSON database has a syntax error: {}", e);
            BTreeMap::new()
        });
    static ref FALLBACK: ParserDefinition = ParserDefinition::default();
}

/// All languages, by name.
pub fn languages() -> &'static BTreeMap<String, ParserDefinition> {
    &*PARSED_DB
}

impl ParserDefinition {
    /// The E8Script definition.
    ///
    /// ```
    /// use e8tags::language::ParserDefinition;
    /// let def = ParserDefinition::e8script();
    /// assert!(def.handles("Module.os".as_ref()));
    /// assert!(!def.handles("main.c".as_ref()));
    /// ```
    pub fn e8script() -> &'static ParserDefinition {
        PARSED_DB.get(E8SCRIPT).unwrap_or(&*FALLBACK)
    }

    /// Does the extension of `path` belong to this language?
    pub fn handles(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext)))
    }

    /// Kinds enabled by default.
    pub fn default_kinds(&self) -> KindSet {
        if self.kinds.is_empty() {
            return KindSet::all();
        }
        self.kinds
            .iter()
            .filter(|k| k.enabled)
            .map(|k| k.kind)
            .collect()
    }

    /// Look up a registered kind by letter.
    pub fn kind_by_letter(&self, letter: char) -> Option<&KindOption> {
        self.kinds.iter().find(|k| k.letter == letter)
    }
}
