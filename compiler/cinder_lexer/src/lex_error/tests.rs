use super::{EndOfInput, LexError, LexErrorKind};

#[test]
fn display_prefixes_line() {
    let err = LexError::unterminated_string(3);
    assert_eq!(err.to_string(), "line 3: unterminated string");
}

#[test]
fn display_unexpected_printable_byte() {
    let err = LexError::unexpected_character(b'$', 7);
    assert_eq!(err.to_string(), "line 7: unexpected character '$'");
}

#[test]
fn display_unexpected_control_byte_as_hex() {
    let err = LexError::unexpected_character(0x01, 1);
    assert_eq!(err.to_string(), "line 1: unexpected character 0x01");
}

#[test]
fn display_payload_kinds() {
    assert_eq!(
        LexError::malformed_number("1.2.3", 2).to_string(),
        "line 2: malformed number literal `1.2.3`"
    );
    assert_eq!(
        LexError::int_overflow("99999999999999999999", 1).to_string(),
        "line 1: integer literal `99999999999999999999` is too large"
    );
    assert_eq!(
        LexError::malformed_hex_escape(4).to_string(),
        "line 4: \\x should be followed by 2 hex digits"
    );
    assert_eq!(
        LexError::invalid_dot_sequence(1).to_string(),
        "line 1: `..` is not valid"
    );
}

#[test]
fn constructors_set_kind() {
    assert_eq!(
        LexError::unterminated_char(5).kind,
        LexErrorKind::UnterminatedChar
    );
    assert_eq!(
        LexError::unterminated_block_comment(9),
        LexError {
            kind: LexErrorKind::UnterminatedBlockComment,
            line: 9,
        }
    );
}

#[test]
fn end_of_input_display() {
    assert_eq!(EndOfInput.to_string(), "end of input");
}
