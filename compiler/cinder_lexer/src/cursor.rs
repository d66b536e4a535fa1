//! Byte cursor with line tracking.
//!
//! The cursor is the single piece of mutable state in a tokenization run.
//! Scanners receive it by `&mut` and leave it on the first byte past the
//! token they consumed.
//!
//! # Line Counting
//!
//! `line` is `1 + number of newline bytes consumed`. A byte is consumed when
//! the cursor moves past it, so a token starting on a `\n` byte is still on
//! the line before it. `\r` and `\n` each count, which makes a `\r\n` pair
//! advance the line by two.

use crate::char_class::is_newline;
use crate::lex_error::EndOfInput;

/// Returns the earliest (minimum) of two optional offsets.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Number of line-break bytes in `bytes`, saturated to `u32`.
fn count_newlines(bytes: &[u8]) -> u32 {
    let n = memchr::memchr2_iter(b'\n', b'\r', bytes).count();
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Read-only snapshot of cursor state, for diagnostics and tooling.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CursorState {
    /// Byte offset of the current byte.
    pub cursor: usize,
    /// 1-based line number.
    pub line: u32,
    /// Byte under the cursor, `None` past the end of input.
    pub current: Option<u8>,
    /// Byte immediately before the cursor, `None` at the start.
    pub previous: Option<u8>,
}

/// Cursor over an immutable byte buffer.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned on the first byte, at line 1.
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            line: 1,
        }
    }

    /// The byte under the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// The byte just consumed, or `None` if nothing has been consumed yet.
    #[inline]
    pub fn previous(&self) -> Option<u8> {
        self.pos
            .checked_sub(1)
            .and_then(|p| self.buf.get(p).copied())
    }

    /// The byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos + 1).copied()
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Current 1-based line.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Length of the input in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Consume the current byte and return the new current byte.
    ///
    /// Returns `None` once input is exhausted. Calling `bump` at end of input
    /// is a no-op.
    #[inline]
    pub fn bump(&mut self) -> Option<u8> {
        let consumed = *self.buf.get(self.pos)?;
        if is_newline(consumed) {
            self.line = self.line.saturating_add(1);
        }
        self.pos += 1;
        self.current()
    }

    /// Advance one byte, failing with [`EndOfInput`] when no byte is left to
    /// deliver.
    ///
    /// The byte under the cursor is consumed (and counted toward `line`)
    /// even when the call fails because it was the last one.
    pub fn get_char(&mut self) -> Result<u8, EndOfInput> {
        self.bump().ok_or(EndOfInput)
    }

    /// Consume the current byte if it equals `expected`.
    #[inline]
    pub fn eat(&mut self, expected: u8) -> bool {
        if self.current() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Advance while `pred` holds for the current byte.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.current().is_some_and(&pred) {
            self.bump();
        }
    }

    /// Advance to the next `\n`/`\r` byte, or to end of input.
    ///
    /// The line break itself is not consumed, so `line` is unchanged.
    pub fn eat_until_newline_or_eof(&mut self) {
        let rest = &self.buf[self.pos.min(self.buf.len())..];
        match memchr::memchr2(b'\n', b'\r', rest) {
            Some(off) => self.pos += off,
            None => self.pos = self.buf.len(),
        }
    }

    /// Advance past ordinary string content to the next interesting byte:
    /// `"`, `\`, `\n` or `\r`. Returns that byte, or `None` at end of input.
    ///
    /// The skipped bytes contain no line breaks, so `line` is unchanged.
    pub fn skip_to_string_delim(&mut self) -> Option<u8> {
        let rest = &self.buf[self.pos.min(self.buf.len())..];
        let primary = memchr::memchr3(b'"', b'\\', b'\n', rest);
        let cr = memchr::memchr(b'\r', rest);
        match earliest_of(primary, cr) {
            Some(off) => {
                self.pos += off;
                self.current()
            }
            None => {
                self.pos = self.buf.len();
                None
            }
        }
    }

    /// Advance to the next `*` byte, counting the line breaks skipped over.
    ///
    /// Returns `true` if a `*` was found (the cursor is on it), `false` if the
    /// input ran out first (the cursor is at end of input).
    pub fn skip_to_star(&mut self) -> bool {
        let rest = &self.buf[self.pos.min(self.buf.len())..];
        let (skipped, found) = match memchr::memchr(b'*', rest) {
            Some(off) => (&rest[..off], true),
            None => (rest, false),
        };
        self.line = self.line.saturating_add(count_newlines(skipped));
        self.pos += skipped.len();
        found
    }

    /// Bytes in `start..end`.
    ///
    /// # Contract
    ///
    /// `start <= end <= input length`; the scanners only pass offsets they
    /// recorded from this cursor.
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start..end]
    }

    /// Bytes from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        self.slice(start, self.pos)
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> CursorState {
        CursorState {
            cursor: self.pos,
            line: self.line,
            current: self.current(),
            previous: self.previous(),
        }
    }
}
