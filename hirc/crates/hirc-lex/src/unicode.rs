//! Byte classification for the scanner.
//!
//! The lexer works on raw bytes. Identifiers are ASCII-only; non-ASCII
//! input is only ever measured as whole UTF-8 sequences so an Illegal token
//! never splits a code point.

/// Checks if a byte can start an identifier: `[A-Za-z_]`
///
/// # Example
///
/// ```
/// use hirc_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start(b'a'));
/// assert!(is_ident_start(b'_'));
/// assert!(!is_ident_start(b'1'));
/// assert!(!is_ident_start(0xCE));
/// ```
#[inline]
pub const fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Checks if a byte can continue an identifier: `[A-Za-z0-9_]`
#[inline]
pub const fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Whitespace skipped between tokens
///
/// Only `\n` advances the line counter.
#[inline]
pub const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n' | 0x0B | 0x0C)
}

/// Checks if a byte is a digit in the given radix (2, 8, 10 or 16)
#[inline]
pub const fn is_digit_in_base(b: u8, radix: u32) -> bool {
    match radix {
        2 => matches!(b, b'0' | b'1'),
        8 => matches!(b, b'0'..=b'7'),
        16 => b.is_ascii_hexdigit(),
        _ => b.is_ascii_digit(),
    }
}

/// Length of the well-formed UTF-8 sequence at the start of `bytes`
///
/// Returns `None` when `bytes` is empty or does not begin with a complete,
/// valid sequence (stray continuation bytes, overlong forms, surrogates,
/// truncation).
///
/// # Example
///
/// ```
/// use hirc_lex::unicode::utf8_sequence_len;
///
/// assert_eq!(utf8_sequence_len(b"a"), Some(1));
/// assert_eq!(utf8_sequence_len("é!".as_bytes()), Some(2));
/// assert_eq!(utf8_sequence_len("😀".as_bytes()), Some(4));
/// assert_eq!(utf8_sequence_len(&[0xE2, 0x82]), None);
/// assert_eq!(utf8_sequence_len(&[0x80]), None);
/// ```
pub fn utf8_sequence_len(bytes: &[u8]) -> Option<usize> {
    let width = match *bytes.first()? {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return None,
    };
    let sequence = bytes.get(..width)?;
    std::str::from_utf8(sequence).ok().map(|_| width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_classes() {
        for b in 0u8..=255 {
            let start = b.is_ascii_alphabetic() || b == b'_';
            assert_eq!(is_ident_start(b), start);
            assert_eq!(is_ident_continue(b), start || b.is_ascii_digit());
        }
    }

    #[test]
    fn test_whitespace() {
        for b in [b' ', b'\t', b'\r', b'\n', 0x0B, 0x0C] {
            assert!(is_whitespace(b));
        }
        assert!(!is_whitespace(0));
        assert!(!is_whitespace(0xA0));
    }

    #[test]
    fn test_digits_in_base() {
        assert!(is_digit_in_base(b'1', 2));
        assert!(!is_digit_in_base(b'2', 2));
        assert!(is_digit_in_base(b'7', 8));
        assert!(!is_digit_in_base(b'8', 8));
        assert!(is_digit_in_base(b'9', 10));
        assert!(is_digit_in_base(b'f', 16));
        assert!(is_digit_in_base(b'F', 16));
        assert!(!is_digit_in_base(b'g', 16));
        assert!(!is_digit_in_base(b'_', 16));
    }

    #[test]
    fn test_utf8_rejects_malformed() {
        // overlong '/'
        assert_eq!(utf8_sequence_len(&[0xC0, 0xAF]), None);
        // UTF-16 surrogate
        assert_eq!(utf8_sequence_len(&[0xED, 0xA0, 0x80]), None);
        // above U+10FFFF
        assert_eq!(utf8_sequence_len(&[0xF5, 0x80, 0x80, 0x80]), None);
        // lead byte followed by ASCII
        assert_eq!(utf8_sequence_len(&[0xE2, b'a', b'b']), None);
        assert_eq!(utf8_sequence_len(&[]), None);
    }

    #[test]
    fn test_utf8_measures_only_the_first_sequence() {
        assert_eq!(utf8_sequence_len("€€".as_bytes()), Some(3));
    }
}
