//! Command handlers for the `cinder` CLI.
//!
//! Each submodule implements one subcommand. Input loading and the shared
//! error type live here in the module root.

use std::io::{self, Read};

use cinder_lexer::LexError;
use clap::ValueEnum;
use thiserror::Error;
use tracing::debug;

mod chars;
mod lex;

pub use chars::{chars_file, render_chars};
pub use lex::{lex_file, render_tokens, LexOptions, TokenRecord};

/// Path argument that reads standard input.
pub const STDIN_PATH: &str = "-";

/// Output rendering shared by all commands.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated columns, one record per line.
    #[default]
    Text,
    /// Pretty-printed JSON array.
    Json,
}

/// Failure of a CLI command. Every variant ends the process with status 1.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },
    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },
    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    /// Rendered as `path:line N: message`.
    #[error("{path}:{source}")]
    Lex {
        path: String,
        #[source]
        source: LexError,
    },
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    fn read(path: &str, err: io::Error) -> Self {
        let path = display_path(path).to_owned();
        match err.kind() {
            io::ErrorKind::NotFound => CliError::NotFound { path },
            io::ErrorKind::PermissionDenied => CliError::PermissionDenied { path },
            _ => CliError::Read { path, source: err },
        }
    }

    pub(crate) fn lex(path: &str, source: LexError) -> Self {
        CliError::Lex {
            path: display_path(path).to_owned(),
            source,
        }
    }
}

/// Name used for `path` in diagnostics.
pub fn display_path(path: &str) -> &str {
    if path == STDIN_PATH {
        "<stdin>"
    } else {
        path
    }
}

/// Read a whole source file as bytes, or standard input for `-`.
pub fn read_source(path: &str) -> Result<Vec<u8>, CliError> {
    let result = if path == STDIN_PATH {
        let mut buf = Vec::new();
        io::stdin().lock().read_to_end(&mut buf).map(|_| buf)
    } else {
        std::fs::read(path)
    };
    let bytes = result.map_err(|err| CliError::read(path, err))?;
    debug!(path = display_path(path), len = bytes.len(), "read source");
    Ok(bytes)
}
