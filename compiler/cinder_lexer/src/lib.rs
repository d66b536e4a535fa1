//! Single-pass tokenizer for a small C-like language.
//!
//! Input is a fully resident byte buffer; output is a sequence of
//! [`Token`]s stamped with the 1-based line they start on, terminated by
//! [`TokenKind::Eof`].
//!
//! # Architecture
//!
//! ```text
//! bytes ─► Cursor ─► Tokenizer::get_token ─► dispatch ─► scanner::* ─► Token
//!            ▲                                              │
//!            └──────────── char_class / escape ◄────────────┘
//! ```
//!
//! - [`cursor`]: the only mutable state; tracks offset and line.
//! - [`char_class`]: pure byte predicates.
//! - [`escape`]: backslash escape decoding for string and char literals.
//! - `scanner`: one function per token family, entered on the token's first
//!   byte.
//! - [`tokenizer`]: whitespace skipping, dispatch, batch driver.
//!
//! Keywords are not recognised here; `int` and `return` are identifiers.
//!
//! # Example
//!
//! ```
//! use cinder_lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize(b"x = 1;").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Ident("x".into()));
//! assert_eq!(tokens.last().map(|t| &t.kind), Some(&TokenKind::Eof));
//! ```

pub mod char_class;
pub mod cursor;
pub mod escape;
pub mod lex_error;
mod scanner;
pub mod token;
pub mod tokenizer;

pub use cursor::{Cursor, CursorState};
pub use lex_error::{EndOfInput, LexError, LexErrorKind};
pub use token::{Span, Token, TokenKind};
pub use tokenizer::Tokenizer;

/// Tokenize `source` in one call.
///
/// Shorthand for `Tokenizer::new(source).tokenize()`.
pub fn tokenize(source: &[u8]) -> Result<Vec<Token>, LexError> {
    Tokenizer::new(source).tokenize()
}
