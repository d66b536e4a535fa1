//! Escape sequence decoding.
//!
//! Shared by string and character literals. The cursor is positioned on the
//! byte after the backslash; on return it sits on the last byte of the
//! sequence, so the caller bumps past it like any ordinary content byte.
//!
//! Recognized escapes: `\xHH`, `\a`, `\b`, `\t`, `\n`, `\v`, `\f`, `\r`, `\0`.
//! Any other byte decodes to itself (`\q` is `q`, `\\` is `\`).

use crate::char_class::hex_value;
use crate::cursor::Cursor;
use crate::lex_error::LexError;

/// Resolve a single-byte escape to its value.
///
/// `x` is not handled here since it needs two more bytes of input.
#[inline]
pub fn resolve_escape(b: u8) -> u8 {
    match b {
        b'a' => 7,
        b'b' => 8,
        b't' => 9,
        b'n' => 10,
        b'v' => 11,
        b'f' => 12,
        b'r' => 13,
        b'0' => 0,
        other => other,
    }
}

/// Decode the escape whose introducing byte is under the cursor.
///
/// The caller has already checked the cursor is not at end of input.
pub(crate) fn decode(cursor: &mut Cursor<'_>, esc: u8) -> Result<u8, LexError> {
    if esc != b'x' {
        return Ok(resolve_escape(esc));
    }

    let line = cursor.line();
    let hi = cursor.bump().and_then(hex_value);
    let lo = hi.and_then(|_| cursor.bump()).and_then(hex_value);
    match (hi, lo) {
        (Some(hi), Some(lo)) => Ok(hi * 16 + lo),
        _ => Err(LexError::malformed_hex_escape(line)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::lex_error::LexErrorKind;

    #[test]
    fn resolve_named_escapes() {
        assert_eq!(resolve_escape(b'a'), 7);
        assert_eq!(resolve_escape(b'b'), 8);
        assert_eq!(resolve_escape(b't'), 9);
        assert_eq!(resolve_escape(b'n'), 10);
        assert_eq!(resolve_escape(b'v'), 11);
        assert_eq!(resolve_escape(b'f'), 12);
        assert_eq!(resolve_escape(b'r'), 13);
        assert_eq!(resolve_escape(b'0'), 0);
    }

    #[test]
    fn unknown_escape_is_literal() {
        assert_eq!(resolve_escape(b'q'), b'q');
        assert_eq!(resolve_escape(b'\\'), b'\\');
        assert_eq!(resolve_escape(b'"'), b'"');
        assert_eq!(resolve_escape(b'\''), b'\'');
    }

    #[test]
    fn hex_escape_combines_digits() {
        let mut cursor = Cursor::new(b"x41'");
        assert_eq!(decode(&mut cursor, b'x'), Ok(65));
        assert_eq!(cursor.current(), Some(b'1'));

        let mut cursor = Cursor::new(b"xfF");
        assert_eq!(decode(&mut cursor, b'x'), Ok(255));
    }

    #[test]
    fn hex_escape_rejects_non_hex() {
        let mut cursor = Cursor::new(b"x4g");
        let err = decode(&mut cursor, b'x').unwrap_err();
        assert_eq!(err.kind, LexErrorKind::MalformedHexEscape);
    }

    #[test]
    fn hex_escape_rejects_truncated_input() {
        let mut cursor = Cursor::new(b"x4");
        assert!(decode(&mut cursor, b'x').is_err());

        let mut cursor = Cursor::new(b"x");
        assert!(decode(&mut cursor, b'x').is_err());
    }

    #[test]
    fn plain_escape_does_not_move_cursor() {
        let mut cursor = Cursor::new(b"n\"");
        assert_eq!(decode(&mut cursor, b'n'), Ok(10));
        assert_eq!(cursor.pos(), 0);
    }
}
