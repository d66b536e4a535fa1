//! Tokenizer facade: whitespace skipping, dispatch, and the batch driver.
//!
//! [`Tokenizer::get_token`] produces one token per call and signals end of
//! input with `Ok(None)`. [`Tokenizer::tokenize`] drains the input and
//! appends the terminal [`TokenKind::Eof`] token.
//!
//! Lexical errors are fatal: once `get_token` fails, every later call returns
//! the same error.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::char_class::{is_decimal_digit, is_ident_start, is_space};
use crate::cursor::{Cursor, CursorState};
use crate::lex_error::LexError;
use crate::scanner;
use crate::token::{Span, Token, TokenKind};

/// Single-pass tokenizer over a fully resident byte buffer.
///
/// Each instance owns its cursor, so independent buffers can be tokenized
/// concurrently with independent tokenizers.
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    /// First error hit; replayed on every later call.
    error: Option<LexError>,
    /// Iterator exhausted (end of input or error already yielded).
    fused: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(source),
            error: None,
            fused: false,
        }
    }

    /// Snapshot of the underlying cursor.
    pub fn state(&self) -> CursorState {
        self.cursor.state()
    }

    /// Current 1-based line.
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Produce the next token, or `Ok(None)` at end of input.
    pub fn get_token(&mut self) -> Result<Option<Token>, LexError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }

        self.cursor.eat_while(is_space);
        let Some(byte) = self.cursor.current() else {
            return Ok(None);
        };

        match self.dispatch(byte) {
            Ok(token) => {
                trace!(kind = ?token.kind, line = token.line, "token");
                Ok(Some(token))
            }
            Err(err) => {
                debug!(%err, pos = self.cursor.pos(), "lexical error");
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Pick the scanner for the byte under the cursor.
    fn dispatch(&mut self, byte: u8) -> Result<Token, LexError> {
        let c = &mut self.cursor;
        let token = match byte {
            b if is_ident_start(b) => scanner::identifier(c),
            b if is_decimal_digit(b) => scanner::number(c)?,
            b'.' => scanner::dot(c)?,
            b'"' => scanner::string(c)?,
            b'\'' => scanner::char_literal(c)?,
            b'=' => scanner::one_or_two(c, b'=', TokenKind::EqEq, TokenKind::Eq),
            b'!' => scanner::one_or_two(c, b'=', TokenKind::NotEq, TokenKind::Bang),
            b'>' => scanner::one_or_two(c, b'=', TokenKind::GtEq, TokenKind::Gt),
            b'<' => scanner::one_or_two(c, b'=', TokenKind::LtEq, TokenKind::Lt),
            b'&' => scanner::one_or_two(c, b'&', TokenKind::AmpAmp, TokenKind::Amp),
            b'|' => scanner::one_or_two(c, b'|', TokenKind::PipePipe, TokenKind::Pipe),
            b'/' => scanner::slash_or_comment(c)?,
            b'-' => scanner::minus_or_arrow(c),
            b'+' => scanner::one_or_two(c, b'+', TokenKind::PlusPlus, TokenKind::Plus),
            b'*' => scanner::single(c, TokenKind::Star),
            b'%' => scanner::single(c, TokenKind::Percent),
            b'(' => scanner::single(c, TokenKind::LParen),
            b')' => scanner::single(c, TokenKind::RParen),
            b'[' => scanner::single(c, TokenKind::LBracket),
            b']' => scanner::single(c, TokenKind::RBracket),
            b'{' => scanner::single(c, TokenKind::LBrace),
            b'}' => scanner::single(c, TokenKind::RBrace),
            b',' => scanner::single(c, TokenKind::Comma),
            b';' => scanner::single(c, TokenKind::Semicolon),
            b'^' => scanner::single(c, TokenKind::Caret),
            b'?' => scanner::single(c, TokenKind::Question),
            b':' => scanner::single(c, TokenKind::Colon),
            b'~' => scanner::single(c, TokenKind::Tilde),
            other => return Err(LexError::unexpected_character(other, c.line())),
        };
        Ok(token)
    }

    /// Drain the remaining input into a token list terminated by `Eof`.
    ///
    /// The `Eof` token carries the final line and an empty span at the end of
    /// input.
    #[tracing::instrument(level = "debug", skip_all, fields(len = self.cursor.source_len()))]
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.get_token()? {
            tokens.push(token);
        }
        let end = self.cursor.pos();
        tokens.push(Token::new(
            TokenKind::Eof,
            self.cursor.line(),
            Span::new(end, end),
        ));
        debug!(count = tokens.len(), lines = self.cursor.line(), "tokenized");
        Ok(tokens)
    }
}

/// Yields tokens up to (not including) `Eof`, then stops. An error is
/// yielded once, after which the iterator is exhausted.
impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.fused {
            return None;
        }
        match self.get_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.fused = true;
                None
            }
            Err(err) => {
                self.fused = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Tokenizer<'_> {}
