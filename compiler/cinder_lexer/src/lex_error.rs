//! Lexer error types.
//!
//! Two conditions are distinguishable:
//! - [`EndOfInput`]: the cursor has no byte left to deliver. Expected
//!   termination, surfaced only by [`Cursor::get_char`](crate::Cursor::get_char).
//!   The tokenizer reports it as `Ok(None)` instead.
//! - [`LexError`]: malformed input, fatal for the run, carrying the 1-based
//!   line used in user-facing diagnostics.

use thiserror::Error;

/// The input buffer is exhausted.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
#[error("end of input")]
pub struct EndOfInput;

/// A lexical error with the line it is reported on.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("line {line}: {kind}")]
pub struct LexError {
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHERE: 1-based line. For literals this is the line the literal began.
    pub line: u32,
}

/// What kind of lexical error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// `\x` not followed by two hex digits.
    #[error("\\x should be followed by 2 hex digits")]
    MalformedHexEscape,
    /// Raw line break or end of input before the closing `"`.
    #[error("unterminated string")]
    UnterminatedString,
    /// Missing closing `'` after the single character.
    #[error("unterminated character literal")]
    UnterminatedChar,
    /// End of input before the closing `*/`.
    #[error("unterminated block comment")]
    UnterminatedBlockComment,
    /// `..` not followed by a third `.`.
    #[error("`..` is not valid")]
    InvalidDotSequence,
    /// Digit-and-dot run that does not form a number (e.g. `1.2.3`).
    #[error("malformed number literal `{text}`")]
    MalformedNumber { text: String },
    /// Integer literal does not fit in `u64`.
    #[error("integer literal `{text}` is too large")]
    IntOverflow { text: String },
    /// Byte not matched by any scanner.
    #[error("unexpected character {}", describe_byte(*byte))]
    UnexpectedCharacter { byte: u8 },
}

/// Render a byte for diagnostics: printable ASCII quoted, the rest as hex.
fn describe_byte(byte: u8) -> String {
    if byte.is_ascii_graphic() {
        format!("'{}'", char::from(byte))
    } else {
        format!("0x{byte:02X}")
    }
}

impl LexError {
    #[cold]
    pub fn new(kind: LexErrorKind, line: u32) -> Self {
        Self { kind, line }
    }

    #[cold]
    pub fn malformed_hex_escape(line: u32) -> Self {
        Self::new(LexErrorKind::MalformedHexEscape, line)
    }

    #[cold]
    pub fn unterminated_string(line: u32) -> Self {
        Self::new(LexErrorKind::UnterminatedString, line)
    }

    #[cold]
    pub fn unterminated_char(line: u32) -> Self {
        Self::new(LexErrorKind::UnterminatedChar, line)
    }

    #[cold]
    pub fn unterminated_block_comment(line: u32) -> Self {
        Self::new(LexErrorKind::UnterminatedBlockComment, line)
    }

    #[cold]
    pub fn invalid_dot_sequence(line: u32) -> Self {
        Self::new(LexErrorKind::InvalidDotSequence, line)
    }

    #[cold]
    pub fn malformed_number(text: impl Into<String>, line: u32) -> Self {
        Self::new(LexErrorKind::MalformedNumber { text: text.into() }, line)
    }

    #[cold]
    pub fn int_overflow(text: impl Into<String>, line: u32) -> Self {
        Self::new(LexErrorKind::IntOverflow { text: text.into() }, line)
    }

    #[cold]
    pub fn unexpected_character(byte: u8, line: u32) -> Self {
        Self::new(LexErrorKind::UnexpectedCharacter { byte }, line)
    }
}

#[cfg(test)]
mod tests;
