//! Cursor over a single source line.

use crate::fold::fold_case;

/// A span in the current line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Span {
    /// Starting byte index of the span.
    pub lo: usize,
    /// End byte index of the span, exclusive.
    pub hi: usize,
}

/// Can `b` start a token? ASCII letters and underscore only.
pub fn starts_token(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Can `b` continue a token?
///
/// Every byte >= 0x80 counts as part of a token: all punctuation that separates
/// tokens in this language is ASCII.
pub fn continues_token(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'.' || b >= 0x80
}

/// Does `b` end a token in progress?
///
/// Digits never start a token but never end one either.
pub fn ends_token(b: u8) -> bool {
    !continues_token(b) && !b.is_ascii_digit()
}

/// Length of the non-ASCII whitespace character, such as U+00A0, that `bytes`
/// start with.
fn unicode_space_len(bytes: &[u8]) -> Option<usize> {
    if bytes.first().is_none_or(|&b| b < 0x80) {
        return None;
    }
    let chunk = bytes.utf8_chunks().next()?;
    let c = chunk.valid().chars().next().filter(|c| c.is_whitespace())?;
    Some(c.len_utf8())
}

/// Is `c` a letter from the Cyrillic block (U+0400..U+04FF)?
fn is_cyrillic_letter(c: char) -> bool {
    matches!(c, '\u{0400}'..='\u{04ff}') && c.is_alphabetic()
}

/// Byte cursor over one line of source text.
///
/// The cursor only moves forward. All lookups are bounds-checked: reading past
/// the end of the line yields `None` rather than a terminator byte.
///
/// ```
/// use e8tags::cursor::LineCursor;
/// let mut cursor = LineCursor::new(b"  var x");
/// cursor.skip_whitespace();
/// assert!(cursor.matches_word("var"));
/// cursor.advance(3);
/// cursor.skip_whitespace();
/// assert_eq!(cursor.take_token(), b"x");
/// assert!(cursor.at_end());
/// ```
#[derive(Clone, Debug)]
pub struct LineCursor<'a> {
    line: &'a [u8],
    pos: usize,
}

impl<'a> LineCursor<'a> {
    /// Start at the beginning of `line`. An embedded NUL byte ends the line.
    pub fn new(line: &'a [u8]) -> LineCursor<'a> {
        let end = line.iter().position(|&b| b == 0).unwrap_or(line.len());
        LineCursor {
            line: &line[..end],
            pos: 0,
        }
    }

    /// Current byte offset.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Has the whole line been consumed?
    pub fn at_end(&self) -> bool {
        self.pos >= self.line.len()
    }

    /// The byte under the cursor.
    pub fn peek(&self) -> Option<u8> {
        self.line.get(self.pos).copied()
    }

    /// The unconsumed rest of the line.
    pub fn rest(&self) -> &'a [u8] {
        self.line.get(self.pos..).unwrap_or_default()
    }

    /// Move forward by `n` bytes, stopping at the end of the line.
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.line.len());
    }

    /// Move to the end of the line.
    pub fn skip_line(&mut self) {
        self.pos = self.line.len();
    }

    /// Skip whitespace, including non-ASCII spaces.
    pub fn skip_whitespace(&mut self) {
        loop {
            if self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
                self.pos += 1;
            } else if let Some(len) = unicode_space_len(self.rest()) {
                self.pos += len;
            } else {
                break;
            }
        }
    }

    /// Returns whether the rest of the line starts with `s`.
    pub fn starts_with(&self, s: &[u8]) -> bool {
        self.rest().starts_with(s)
    }

    /// Move past the next occurrence of `needle`. Returns false, leaving the
    /// cursor at the end of the line, if there is none.
    pub fn skip_past(&mut self, needle: &[u8]) -> bool {
        match self
            .rest()
            .windows(needle.len())
            .position(|window| window == needle)
        {
            Some(offset) => {
                self.advance(offset + needle.len());
                true
            }
            None => {
                self.skip_line();
                false
            }
        }
    }

    /// Is the cursor at a word boundary, ie. not in the middle of a token?
    ///
    /// A non-ASCII whitespace character such as U+00A0 is a boundary too.
    pub fn at_word_start(&self) -> bool {
        match self.line[..self.pos].last() {
            None => true,
            Some(&prev) if !continues_token(prev) => true,
            Some(&prev) => prev >= 0x80 && self.prev_char().is_some_and(char::is_whitespace),
        }
    }

    /// The character right before the cursor, if it is valid UTF-8.
    fn prev_char(&self) -> Option<char> {
        let before = &self.line[..self.pos];
        let window = &before[before.len().saturating_sub(4)..];
        let chunk = window.utf8_chunks().last()?;
        if chunk.invalid().is_empty() {
            chunk.valid().chars().next_back()
        } else {
            None
        }
    }

    /// Does a token start under the cursor?
    ///
    /// With `cyrillic` set, a Cyrillic letter also starts a token.
    pub fn at_token_start(&self, cyrillic: bool) -> bool {
        match self.peek() {
            Some(b) if starts_token(b) => true,
            Some(b) if cyrillic && b >= 0x80 => {
                let window = &self.rest()[..self.rest().len().min(2)];
                std::str::from_utf8(window)
                    .ok()
                    .and_then(|s| s.chars().next())
                    .is_some_and(is_cyrillic_letter)
            }
            _ => false,
        }
    }

    /// Case-insensitively match `word` under the cursor, without moving.
    ///
    /// `word` must already be lowercase. The match fails if the byte right
    /// after it continues a token, so `varx` does not match `var`.
    pub fn matches_word(&self, word: &str) -> bool {
        let word = word.as_bytes();
        let rest = self.rest();
        let Some(candidate) = rest.get(..word.len()) else {
            return false;
        };
        let after = rest.get(word.len()..).unwrap_or_default();
        if after.first().is_some_and(|&b| continues_token(b)) && unicode_space_len(after).is_none() {
            return false;
        }
        fold_case(candidate) == word
    }

    /// Consume a token starting under the cursor and return its bytes.
    ///
    /// A non-ASCII space ends the token like an ASCII one.
    pub fn take_token(&mut self) -> &'a [u8] {
        let span = self.token_span();
        self.pos = span.hi;
        &self.line[span.lo..span.hi]
    }

    fn token_span(&self) -> Span {
        let rest = self.rest();
        let mut len = 0;
        while len < rest.len() && !ends_token(rest[len]) && unicode_space_len(&rest[len..]).is_none() {
            len += 1;
        }
        Span {
            lo: self.pos,
            hi: self.pos + len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_classes() {
        assert!(starts_token(b'a'));
        assert!(starts_token(b'_'));
        assert!(!starts_token(b'1'));
        assert!(!starts_token(0xd0));

        assert!(continues_token(b'1'));
        assert!(continues_token(b'.'));
        assert!(continues_token(0xd0));
        assert!(!continues_token(b'('));

        assert!(ends_token(b' '));
        assert!(ends_token(b','));
        assert!(!ends_token(b'7'));
    }

    #[test]
    fn nul_ends_line() {
        let mut cursor = LineCursor::new(b"ab\0cd");
        assert_eq!(cursor.take_token(), b"ab");
        assert!(cursor.at_end());
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn take_token_stops_at_punctuation() {
        let mut cursor = LineCursor::new("Obj.Поле2(x)".as_bytes());
        assert_eq!(cursor.take_token(), "Obj.Поле2".as_bytes());
        assert_eq!(cursor.peek(), Some(b'('));
    }

    #[test]
    fn word_matching_is_prefix_safe() {
        assert!(LineCursor::new(b"VAR a").matches_word("var"));
        assert!(LineCursor::new(b"var").matches_word("var"));
        assert!(LineCursor::new(b"var;").matches_word("var"));
        assert!(!LineCursor::new(b"variance = 1;").matches_word("var"));
        assert!(!LineCursor::new(b"var.x").matches_word("var"));
        assert!(!LineCursor::new(b"va").matches_word("var"));
        assert!(!LineCursor::new("ПеремЖ".as_bytes()).matches_word("перем"));
        assert!(LineCursor::new("ПЕРЕМ ж".as_bytes()).matches_word("перем"));
    }

    #[test]
    fn long_lines_do_not_overflow() {
        let mut line = "Перем ".repeat(200).into_bytes();
        line.extend_from_slice(&[b'x'; 500]);
        let mut cursor = LineCursor::new(&line);
        assert!(cursor.matches_word("перем"));
        cursor.advance(line.len() - 500);
        assert!(!cursor.matches_word(&"x".repeat(501)));
        assert_eq!(cursor.take_token().len(), 500);
    }

    #[test]
    fn word_start() {
        let mut cursor = LineCursor::new(b"myvar var");
        assert!(cursor.at_word_start());
        cursor.advance(2);
        assert!(!cursor.at_word_start());
        cursor.advance(4);
        assert!(cursor.at_word_start());
    }

    #[test]
    fn word_start_after_unicode_space() {
        let line = "x\u{a0}Перем".as_bytes();
        let mut cursor = LineCursor::new(line);
        cursor.advance(3);
        assert!(cursor.at_word_start());
        assert!(cursor.matches_word("перем"));

        assert!(LineCursor::new("перем\u{a0}x".as_bytes()).matches_word("перем"));
        assert!(!LineCursor::new("перем\u{a0}x".as_bytes()).matches_word("пере"));

        let mut cursor = LineCursor::new("Имя\u{a0}\u{2003};".as_bytes());
        assert_eq!(cursor.take_token(), "Имя".as_bytes());
        cursor.skip_whitespace();
        assert_eq!(cursor.peek(), Some(b';'));

        // After a Cyrillic letter, or in the middle of one.
        let mut cursor = LineCursor::new("ЖПерем".as_bytes());
        cursor.advance(2);
        assert!(!cursor.at_word_start());
        cursor.advance(1);
        assert!(!cursor.at_word_start());
    }

    #[test]
    fn cyrillic_token_start() {
        let cursor = LineCursor::new("Привет".as_bytes());
        assert!(!cursor.at_token_start(false));
        assert!(cursor.at_token_start(true));
        assert!(!LineCursor::new("«x»".as_bytes()).at_token_start(true));
        assert!(!LineCursor::new(&[0xd0]).at_token_start(true));
    }

    #[test]
    fn skip_past() {
        let mut cursor = LineCursor::new(b"a */ b");
        assert!(cursor.skip_past(b"*/"));
        assert_eq!(cursor.rest(), b" b");
        assert!(!cursor.skip_past(b"*/"));
        assert!(cursor.at_end());
    }
}
