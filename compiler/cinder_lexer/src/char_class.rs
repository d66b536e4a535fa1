//! Byte classification predicates.
//!
//! Every dispatch decision in the scanners is built from these. They are pure
//! functions of a single byte and know nothing about cursor state.

/// Whitespace skipped between tokens: newline, carriage return, space, tab.
#[inline]
pub const fn is_space(b: u8) -> bool {
    is_newline(b) || b == b' ' || b == b'\t'
}

/// Line terminators. A lone `\r` counts as a line break on its own.
#[inline]
pub const fn is_newline(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

/// First byte of an identifier: ASCII letter or underscore.
#[inline]
pub const fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Subsequent identifier bytes.
#[inline]
pub const fn is_ident_continue(b: u8) -> bool {
    is_ident_start(b) || is_decimal_digit(b)
}

#[inline]
pub const fn is_decimal_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

#[inline]
pub const fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

/// Bytes accumulated by the number scanner (digits and the decimal point).
#[inline]
pub const fn is_number_continue(b: u8) -> bool {
    is_decimal_digit(b) || b == b'.'
}

/// Numeric value of a hex digit, `None` for anything else.
#[inline]
pub const fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_includes_line_breaks() {
        for b in [b' ', b'\t', b'\n', b'\r'] {
            assert!(is_space(b), "{b:#04x} should be space");
        }
        assert!(!is_space(0x0b)); // vertical tab
        assert!(!is_space(0x0c)); // form feed
        assert!(!is_space(b'a'));
    }

    #[test]
    fn newline_is_lf_or_cr() {
        assert!(is_newline(b'\n'));
        assert!(is_newline(b'\r'));
        assert!(!is_newline(b' '));
    }

    #[test]
    fn ident_start_rejects_digits() {
        assert!(is_ident_start(b'a'));
        assert!(is_ident_start(b'Z'));
        assert!(is_ident_start(b'_'));
        assert!(!is_ident_start(b'0'));
        assert!(!is_ident_start(b'$'));
        assert!(!is_ident_start(0xc3));
    }

    #[test]
    fn ident_continue_accepts_digits() {
        assert!(is_ident_continue(b'9'));
        assert!(is_ident_continue(b'_'));
        assert!(!is_ident_continue(b'-'));
    }

    #[test]
    fn hex_digits_and_values() {
        assert!(is_hex_digit(b'7'));
        assert!(is_hex_digit(b'c'));
        assert!(is_hex_digit(b'F'));
        assert!(!is_hex_digit(b'g'));
        assert_eq!(hex_value(b'0'), Some(0));
        assert_eq!(hex_value(b'a'), Some(10));
        assert_eq!(hex_value(b'F'), Some(15));
        assert_eq!(hex_value(b'x'), None);
    }

    #[test]
    fn number_continue_includes_dot() {
        assert!(is_number_continue(b'.'));
        assert!(is_number_continue(b'5'));
        assert!(!is_number_continue(b'e'));
    }
}
