//! Token types.
//!
//! A token is a kind (carrying its literal payload, if any), the line its
//! first byte appeared on, and the byte span it covers.

use std::fmt;

/// Half-open byte range `start..end` in the input.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A classified, line-stamped unit of lexical input.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// 1-based line of the token's first byte.
    pub line: u32,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, line: u32, span: Span) -> Self {
        Token { kind, line, span }
    }
}

/// Token kinds.
///
/// Float literals store their bits as `u64` so the enum keeps `Eq` and `Hash`;
/// use [`TokenKind::float`] and [`TokenKind::float_value`] to convert.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Identifier, keywords included: `main`, `int`, `_tmp1`
    Ident(String),
    /// Integer literal: `42`, and `3.0` (no fractional remainder)
    Int(u64),
    /// Float literal bits: `3.14`, `.5`
    Float(u64),
    /// String literal with escapes decoded. Bytes, since `\xHH` can produce
    /// any value.
    Str(Vec<u8>),
    /// Character literal value: `'a'`, `'\n'`, `'\x41'`
    Char(u8),

    Ellipsis, // ...
    Dot,      // .

    Plus,       // +
    PlusPlus,   // ++
    Minus,      // -
    MinusMinus, // --
    Arrow,      // ->
    Star,       // *
    Slash,      // /
    Percent,    // %

    Eq,       // =
    EqEq,     // ==
    Bang,     // !
    NotEq,    // !=
    Gt,       // >
    GtEq,     // >=
    Lt,       // <
    LtEq,     // <=
    Amp,      // &
    AmpAmp,   // &&
    Pipe,     // |
    PipePipe, // ||
    Caret,    // ^
    Tilde,    // ~

    LParen,   // (
    RParen,   // )
    LBracket, // [
    RBracket, // ]
    LBrace,   // {
    RBrace,   // }

    Comma,     // ,
    Semicolon, // ;
    Colon,     // :
    Question,  // ?

    /// `// ...` up to (not including) the line break
    LineComment,
    /// `/* ... */`
    BlockComment,

    /// End of input
    Eof,
}

impl TokenKind {
    /// Float token from a value.
    #[inline]
    pub fn float(value: f64) -> Self {
        TokenKind::Float(value.to_bits())
    }

    /// Value of a float token, `None` for other kinds.
    #[inline]
    pub fn float_value(&self) -> Option<f64> {
        match self {
            TokenKind::Float(bits) => Some(f64::from_bits(*bits)),
            _ => None,
        }
    }

    /// Whether the kind carries a literal payload.
    pub fn has_value(&self) -> bool {
        matches!(
            self,
            TokenKind::Ident(_)
                | TokenKind::Int(_)
                | TokenKind::Float(_)
                | TokenKind::Str(_)
                | TokenKind::Char(_)
        )
    }

    #[inline]
    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }

    /// Short human-readable name of the kind, without payload.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Ident(_) => "identifier",
            TokenKind::Int(_) => "integer",
            TokenKind::Float(_) => "float",
            TokenKind::Str(_) => "string",
            TokenKind::Char(_) => "char",
            TokenKind::Ellipsis => "...",
            TokenKind::Dot => ".",
            TokenKind::Plus => "+",
            TokenKind::PlusPlus => "++",
            TokenKind::Minus => "-",
            TokenKind::MinusMinus => "--",
            TokenKind::Arrow => "->",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Eq => "=",
            TokenKind::EqEq => "==",
            TokenKind::Bang => "!",
            TokenKind::NotEq => "!=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Amp => "&",
            TokenKind::AmpAmp => "&&",
            TokenKind::Pipe => "|",
            TokenKind::PipePipe => "||",
            TokenKind::Caret => "^",
            TokenKind::Tilde => "~",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Question => "?",
            TokenKind::LineComment => "line comment",
            TokenKind::BlockComment => "block comment",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(name) => write!(f, "identifier `{name}`"),
            TokenKind::Int(n) => write!(f, "integer {n}"),
            TokenKind::Float(bits) => write!(f, "float {}", f64::from_bits(*bits)),
            TokenKind::Str(bytes) => write!(f, "string {:?}", String::from_utf8_lossy(bytes)),
            TokenKind::Char(b) => write!(f, "char {b}"),
            TokenKind::LineComment | TokenKind::BlockComment | TokenKind::Eof => {
                f.write_str(self.name())
            }
            _ => write!(f, "`{}`", self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_bits_round_trip() {
        let kind = TokenKind::float(2.75);
        assert_eq!(kind.float_value(), Some(2.75));
        assert_eq!(TokenKind::Int(3).float_value(), None);
    }

    #[test]
    fn payload_kinds_have_values() {
        assert!(TokenKind::Ident("x".into()).has_value());
        assert!(TokenKind::Char(b'a').has_value());
        assert!(TokenKind::Str(Vec::new()).has_value());
        assert!(!TokenKind::Arrow.has_value());
        assert!(!TokenKind::LineComment.has_value());
        assert!(!TokenKind::Eof.has_value());
    }

    #[test]
    fn comment_kinds() {
        assert!(TokenKind::LineComment.is_comment());
        assert!(TokenKind::BlockComment.is_comment());
        assert!(!TokenKind::Slash.is_comment());
    }

    #[test]
    fn display_forms() {
        assert_eq!(TokenKind::Ident("main".into()).to_string(), "identifier `main`");
        assert_eq!(TokenKind::Int(42).to_string(), "integer 42");
        assert_eq!(TokenKind::float(0.5).to_string(), "float 0.5");
        assert_eq!(TokenKind::Str(b"a\nb".to_vec()).to_string(), r#"string "a\nb""#);
        assert_eq!(TokenKind::Char(65).to_string(), "char 65");
        assert_eq!(TokenKind::Arrow.to_string(), "`->`");
        assert_eq!(TokenKind::BlockComment.to_string(), "block comment");
        assert_eq!(TokenKind::Eof.to_string(), "end of input");
    }

    #[test]
    fn span_len() {
        let span = Span::new(3, 7);
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
        assert!(Span::new(2, 2).is_empty());
        assert_eq!(span.to_string(), "3..7");
    }
}
