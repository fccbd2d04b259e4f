//! Case folding for keyword comparison.
//!
//! Keywords come in two alphabets, so folding has to understand both ASCII and
//! the basic Cyrillic uppercase letters. Nothing else is folded: general
//! Unicode case folding would change byte lengths, and keyword matching works
//! on fixed-length byte windows.

/// Lowercase a single character.
///
/// ASCII letters use the usual fold. Cyrillic `А`..=`Я` (U+0410..U+042F) map
/// to `а`..=`я` by adding 0x20 to the code point. Everything else, including
/// `Ё`, is returned unchanged.
///
/// ```
/// use e8tags::fold::fold_char;
/// assert_eq!(fold_char('Q'), 'q');
/// assert_eq!(fold_char('Ж'), 'ж');
/// assert_eq!(fold_char('ж'), 'ж');
/// assert_eq!(fold_char('Ё'), 'Ё');
/// ```
pub fn fold_char(c: char) -> char {
    match c {
        'A'..='Z' => c.to_ascii_lowercase(),
        'А'..='Я' => char::from_u32(c as u32 + 0x20).unwrap_or(c),
        _ => c,
    }
}

/// Lowercase a byte sequence with [`fold_char`].
///
/// Valid UTF-8 runs are folded character by character. Bytes that are not
/// valid UTF-8 (for example a two-byte sequence cut in half by the end of the
/// comparison window) are copied through untouched. The output always has the
/// same length as the input.
///
/// ```
/// use e8tags::fold::fold_case;
/// assert_eq!(fold_case("КонецФункции".as_bytes()), "конецфункции".as_bytes());
/// assert_eq!(fold_case(b"EndProcedure"), b"endprocedure");
/// ```
pub fn fold_case(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        let mut buf = [0; 4];
        for c in chunk.valid().chars() {
            out.extend_from_slice(fold_char(c).encode_utf8(&mut buf).as_bytes());
        }
        out.extend_from_slice(chunk.invalid());
    }
    out
}
