//! `lex`: print the token stream of a file.

use cinder_lexer::{tokenize, Span, Token, TokenKind};
use serde::Serialize;

use super::{read_source, CliError, OutputFormat};

/// Settings of the `lex` command.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LexOptions {
    /// Drop comment tokens from the output. The lexer still produces them.
    pub skip_comments: bool,
    pub format: OutputFormat,
}

/// Presentation view of a token.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TokenRecord {
    pub line: u32,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub span: Span,
}

impl From<&Token> for TokenRecord {
    fn from(token: &Token) -> Self {
        TokenRecord {
            line: token.line,
            kind: token.kind.name(),
            value: literal_value(&token.kind),
            span: token.span,
        }
    }
}

/// Literal payload as text; non-ASCII and control bytes are escaped.
fn literal_value(kind: &TokenKind) -> Option<String> {
    match kind {
        TokenKind::Ident(name) => Some(name.clone()),
        TokenKind::Int(n) => Some(n.to_string()),
        TokenKind::Float(_) => kind.float_value().map(|v| v.to_string()),
        TokenKind::Str(bytes) => Some(bytes.escape_ascii().to_string()),
        TokenKind::Char(b) => Some(b.escape_ascii().to_string()),
        _ => None,
    }
}

/// Lex a file and render its tokens.
#[tracing::instrument(level = "debug", skip(options))]
pub fn lex_file(path: &str, options: &LexOptions) -> Result<String, CliError> {
    let source = read_source(path)?;
    let tokens = tokenize(&source).map_err(|err| CliError::lex(path, err))?;
    render_tokens(&tokens, options)
}

/// Render tokens in the requested format.
pub fn render_tokens(tokens: &[Token], options: &LexOptions) -> Result<String, CliError> {
    let records: Vec<TokenRecord> = tokens
        .iter()
        .filter(|t| !(options.skip_comments && t.kind.is_comment()))
        .map(TokenRecord::from)
        .collect();

    match options.format {
        OutputFormat::Text => Ok(records.iter().map(text_line).collect()),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&records)?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// `line<TAB>kind[<TAB>value]`
fn text_line(record: &TokenRecord) -> String {
    match &record.value {
        Some(value) => format!("{}\t{}\t{}\n", record.line, record.kind, value),
        None => format!("{}\t{}\n", record.line, record.kind),
    }
}
