//! `chars`: walk the cursor one byte at a time and print its state.

use cinder_lexer::{Cursor, CursorState};

use super::{read_source, CliError, OutputFormat};

pub fn chars_file(path: &str, format: OutputFormat) -> Result<String, CliError> {
    let source = read_source(path)?;
    render_chars(&source, format)
}

/// One state per input byte: the initial state, then one after each
/// successful `get_char`.
pub fn render_chars(source: &[u8], format: OutputFormat) -> Result<String, CliError> {
    let states = walk(source);
    match format {
        OutputFormat::Text => Ok(states.iter().map(text_line).collect()),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&states)?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn walk(source: &[u8]) -> Vec<CursorState> {
    let mut cursor = Cursor::new(source);
    if cursor.is_eof() {
        return Vec::new();
    }
    let mut states = vec![cursor.state()];
    while cursor.get_char().is_ok() {
        states.push(cursor.state());
    }
    states
}

/// `cursor<TAB>line<TAB>current<TAB>previous`
fn text_line(state: &CursorState) -> String {
    format!(
        "{}\t{}\t{}\t{}\n",
        state.cursor,
        state.line,
        describe(state.current),
        describe(state.previous)
    )
}

fn describe(byte: Option<u8>) -> String {
    byte.map_or_else(|| "-".to_owned(), |b| b.escape_ascii().to_string())
}
