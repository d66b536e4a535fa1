//! Token scanners, one per token family.
//!
//! Every scanner is entered with the cursor on the first byte of its token and
//! returns with the cursor on the first byte past it. The token's line is the
//! cursor line at entry, so literals spanning line breaks keep the line they
//! began on.
//!
//! # Numbers
//!
//! The number grammar is deliberately small: a run of digits and dots. A run
//! whose value has a non-zero fractional part is a float, anything else is an
//! integer, so `3.0` and `3.` both lex as `Int(3)`. A run starting with `.` is
//! always a float.

use crate::char_class::{is_decimal_digit, is_ident_continue, is_number_continue};
use crate::cursor::Cursor;
use crate::escape;
use crate::lex_error::LexError;
use crate::token::{Span, Token, TokenKind};

/// `2^64` as `f64`; whole values below it convert to `u64` exactly.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Token spanning from `start` to the cursor.
#[inline]
fn finish(cursor: &Cursor<'_>, kind: TokenKind, start: usize, line: u32) -> Token {
    Token::new(kind, line, Span::new(start, cursor.pos()))
}

/// Text of an ASCII-only run (identifiers, numbers).
fn ascii_text(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

// ─── Identifiers ────────────────────────────────────────────────────────

pub(crate) fn identifier(cursor: &mut Cursor<'_>) -> Token {
    let (start, line) = (cursor.pos(), cursor.line());
    cursor.eat_while(is_ident_continue);
    let text = ascii_text(cursor.slice_from(start));
    finish(cursor, TokenKind::Ident(text), start, line)
}

// ─── Numbers ────────────────────────────────────────────────────────────

pub(crate) fn number(cursor: &mut Cursor<'_>) -> Result<Token, LexError> {
    let (start, line) = (cursor.pos(), cursor.line());
    cursor.eat_while(is_number_continue);
    let text = ascii_text(cursor.slice_from(start));
    let kind = classify_number(&text, line)?;
    Ok(finish(cursor, kind, start, line))
}

/// Integer if the value has no fractional remainder, float otherwise.
fn classify_number(text: &str, line: u32) -> Result<TokenKind, LexError> {
    if !text.contains('.') {
        return text
            .parse::<u64>()
            .map(TokenKind::Int)
            .map_err(|_| LexError::int_overflow(text, line));
    }

    let value: f64 = text
        .parse()
        .map_err(|_| LexError::malformed_number(text, line))?;
    if value.fract() != 0.0 {
        return Ok(TokenKind::float(value));
    }
    whole_to_u64(value)
        .map(TokenKind::Int)
        .ok_or_else(|| LexError::int_overflow(text, line))
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is whole, non-negative and below 2^64"
)]
fn whole_to_u64(value: f64) -> Option<u64> {
    (value < U64_LIMIT).then(|| value as u64)
}

// ─── Dot, Ellipsis, Leading-Dot Floats ──────────────────────────────────

pub(crate) fn dot(cursor: &mut Cursor<'_>) -> Result<Token, LexError> {
    let (start, line) = (cursor.pos(), cursor.line());
    let kind = match cursor.bump() {
        Some(b'.') => {
            if cursor.bump() != Some(b'.') {
                return Err(LexError::invalid_dot_sequence(line));
            }
            cursor.bump();
            TokenKind::Ellipsis
        }
        Some(b) if is_decimal_digit(b) => {
            cursor.eat_while(is_number_continue);
            let text = format!("0{}", ascii_text(cursor.slice_from(start)));
            let value: f64 = text
                .parse()
                .map_err(|_| LexError::malformed_number(&text[1..], line))?;
            TokenKind::float(value)
        }
        _ => TokenKind::Dot,
    };
    Ok(finish(cursor, kind, start, line))
}

// ─── String & Character Literals ────────────────────────────────────────

pub(crate) fn string(cursor: &mut Cursor<'_>) -> Result<Token, LexError> {
    let (start, line) = (cursor.pos(), cursor.line());
    let mut value = Vec::new();
    cursor.bump(); // opening '"'

    loop {
        let run = cursor.pos();
        let delim = cursor.skip_to_string_delim();
        value.extend_from_slice(cursor.slice_from(run));
        match delim {
            Some(b'"') => {
                cursor.bump();
                break;
            }
            Some(b'\\') => {
                let esc = cursor
                    .bump()
                    .ok_or_else(|| LexError::unterminated_string(line))?;
                value.push(escape::decode(cursor, esc)?);
                cursor.bump();
            }
            // Raw line break or end of input.
            _ => return Err(LexError::unterminated_string(line)),
        }
    }

    Ok(finish(cursor, TokenKind::Str(value), start, line))
}

/// Exactly one byte, possibly escaped, between single quotes.
///
/// The content byte is taken as-is, so `'''` is a quote character.
pub(crate) fn char_literal(cursor: &mut Cursor<'_>) -> Result<Token, LexError> {
    let (start, line) = (cursor.pos(), cursor.line());
    let unterminated = || LexError::unterminated_char(line);

    let mut value = cursor.bump().ok_or_else(unterminated)?;
    if value == b'\\' {
        let esc = cursor.bump().ok_or_else(unterminated)?;
        value = escape::decode(cursor, esc)?;
    }
    if cursor.bump() != Some(b'\'') {
        return Err(unterminated());
    }
    cursor.bump(); // closing '\''

    Ok(finish(cursor, TokenKind::Char(value), start, line))
}

// ─── Operators ──────────────────────────────────────────────────────────

/// Single-byte token with no lookahead.
#[inline]
pub(crate) fn single(cursor: &mut Cursor<'_>, kind: TokenKind) -> Token {
    let (start, line) = (cursor.pos(), cursor.line());
    cursor.bump();
    finish(cursor, kind, start, line)
}

/// `double` when the byte after the current one is `second`, else `single`.
pub(crate) fn one_or_two(
    cursor: &mut Cursor<'_>,
    second: u8,
    double: TokenKind,
    single: TokenKind,
) -> Token {
    let (start, line) = (cursor.pos(), cursor.line());
    cursor.bump();
    let kind = if cursor.eat(second) { double } else { single };
    finish(cursor, kind, start, line)
}

/// `-`, `--` or `->`.
pub(crate) fn minus_or_arrow(cursor: &mut Cursor<'_>) -> Token {
    let (start, line) = (cursor.pos(), cursor.line());
    let kind = match cursor.bump() {
        Some(b'>') => {
            cursor.bump();
            TokenKind::Arrow
        }
        Some(b'-') => {
            cursor.bump();
            TokenKind::MinusMinus
        }
        _ => TokenKind::Minus,
    };
    finish(cursor, kind, start, line)
}

// ─── Slash & Comments ───────────────────────────────────────────────────

/// `/`, a line comment, or a block comment.
pub(crate) fn slash_or_comment(cursor: &mut Cursor<'_>) -> Result<Token, LexError> {
    let (start, line) = (cursor.pos(), cursor.line());
    let kind = match cursor.bump() {
        Some(b'/') => {
            cursor.eat_until_newline_or_eof();
            TokenKind::LineComment
        }
        Some(b'*') => {
            cursor.bump(); // the opening '*' cannot close the comment
            block_comment_body(cursor, line)?;
            TokenKind::BlockComment
        }
        _ => TokenKind::Slash,
    };
    Ok(finish(cursor, kind, start, line))
}

/// Consume up to and including `*/`.
fn block_comment_body(cursor: &mut Cursor<'_>, line: u32) -> Result<(), LexError> {
    loop {
        if !cursor.skip_to_star() {
            return Err(LexError::unterminated_block_comment(line));
        }
        if cursor.bump() == Some(b'/') {
            cursor.bump();
            return Ok(());
        }
    }
}
