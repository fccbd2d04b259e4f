//! Tag records produced by the scanner.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a declaration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    /// A function or procedure.
    Function,
    /// A variable declared with `var`/`перем`.
    Variable,
}

impl TagKind {
    /// Single-letter code.
    pub fn letter(self) -> char {
        match self {
            TagKind::Function => 'f',
            TagKind::Variable => 'v',
        }
    }

    /// Long name.
    pub fn name(self) -> &'static str {
        match self {
            TagKind::Function => "function",
            TagKind::Variable => "variable",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Kind of an enclosing scope. Functions are the only scopes in the language.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    /// Function or procedure body.
    Function,
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeKind::Function => f.pad("function"),
        }
    }
}

/// The scope a tag was declared in.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Scope {
    /// Scope kind.
    pub kind: ScopeKind,
    /// Name of the enclosing function.
    pub name: String,
}

impl Scope {
    /// Scope of the function `name`.
    pub fn function(name: impl Into<String>) -> Scope {
        Scope {
            kind: ScopeKind::Function,
            name: name.into(),
        }
    }
}

/// A single declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TagRecord {
    /// Declared name, never empty.
    pub name: String,
    /// What was declared.
    pub kind: TagKind,
    /// Line of the name, starting from 1.
    pub line: usize,
    /// Enclosing function of a variable.
    pub scope: Option<Scope>,
    /// Raw argument list. Not collected.
    pub arglist: Option<String>,
    /// Raw variable type. Not collected.
    pub vartype: Option<String>,
}

impl TagRecord {
    /// Create a tag without scope.
    pub fn new(name: impl Into<String>, kind: TagKind, line: usize) -> TagRecord {
        TagRecord {
            name: name.into(),
            kind,
            line,
            scope: None,
            arglist: None,
            vartype: None,
        }
    }

    /// Set the scope of this tag.
    pub fn with_scope(mut self, scope: Option<Scope>) -> TagRecord {
        self.scope = scope;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters() {
        assert_eq!(TagKind::Function.letter(), 'f');
        assert_eq!(TagKind::Variable.letter(), 'v');
    }

    #[test]
    fn kind_serde_names() {
        assert_eq!(
            serde_json::to_string(&TagKind::Function).unwrap(),
            "\"function\""
        );
        assert_eq!(
            serde_json::from_str::<TagKind>("\"variable\"").unwrap(),
            TagKind::Variable
        );
        assert_eq!(TagKind::Variable.to_string(), "variable");
    }

    #[test]
    fn scoped_record() {
        let tag = TagRecord::new("x", TagKind::Variable, 3).with_scope(Some(Scope::function("Foo")));
        assert_eq!(tag.scope.as_ref().map(|s| s.name.as_str()), Some("Foo"));
        assert_eq!(ScopeKind::Function.to_string(), "function");
        assert!(tag.arglist.is_none());
        assert!(tag.vartype.is_none());
    }
}
