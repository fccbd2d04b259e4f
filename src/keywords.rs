//! Keywords recognized by the scanner.
//!
//! Every keyword is a concept with a set of spellings, Russian and English.
//! Spellings are stored lowercase; the source text is folded before comparing.

use crate::cursor::LineCursor;

/// A scanner-recognized concept.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// Variable declaration list.
    Var,
    /// Start of a function or procedure.
    Sub,
    /// End of a function or procedure body.
    EndSub,
}

/// Spellings of each keyword.
pub static KEYWORDS: &[(Keyword, &[&str])] = &[
    (Keyword::Var, &["var", "перем"]),
    (
        Keyword::Sub,
        &["функция", "процедура", "function", "procedure"],
    ),
    (
        Keyword::EndSub,
        &["конецфункции", "конецпроцедуры", "endfunction", "endprocedure"],
    ),
];

impl Keyword {
    /// All spellings of this keyword.
    pub fn spellings(self) -> &'static [&'static str] {
        KEYWORDS
            .iter()
            .find(|(kw, _)| *kw == self)
            .map(|(_, spellings)| *spellings)
            .unwrap_or_default()
    }

    /// Length in bytes of the spelling found under `cursor`, if any.
    ///
    /// ```
    /// use e8tags::cursor::LineCursor;
    /// use e8tags::keywords::Keyword;
    /// let cursor = LineCursor::new("КонецПроцедуры".as_bytes());
    /// assert_eq!(Keyword::EndSub.find(&cursor), Some("конецпроцедуры".len()));
    /// assert_eq!(Keyword::Sub.find(&cursor), None);
    /// ```
    pub fn find(self, cursor: &LineCursor) -> Option<usize> {
        self.spellings()
            .iter()
            .find(|spelling| cursor.matches_word(spelling))
            .map(|spelling| spelling.len())
    }
}
