//! Command-line driver for the Cinder tokenizer.
//!
//! The `cinder` binary is a thin shell over [`commands`]: handlers load the
//! input, run the lexer and render their output to a `String`, leaving
//! printing and exit codes to `main`.

pub mod commands;
pub mod tracing_setup;
