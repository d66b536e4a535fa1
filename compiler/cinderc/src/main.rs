//! Cinder tokenizer CLI.

use std::process;

use cinderc::commands::{chars_file, lex_file, LexOptions, OutputFormat};
use cinderc::tracing_setup::init_tracing;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cinder", about = "Tokenize C-like source files", version)]
struct Cli {
    /// Log filter directives, e.g. `cinder_lexer=trace` (overrides RUST_LOG)
    #[arg(long, global = true, value_name = "FILTER")]
    log: Option<String>,

    /// Render logs as an indented span tree
    #[arg(long, global = true)]
    log_tree: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the token stream of a file
    Lex {
        /// Source file, or `-` for standard input
        path: String,

        /// Leave comment tokens out of the output
        #[arg(long)]
        no_comments: bool,

        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Walk the input byte by byte and print the cursor state
    Chars {
        /// Source file, or `-` for standard input
        path: String,

        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log.as_deref(), cli.log_tree);

    let result = match &cli.command {
        Command::Lex {
            path,
            no_comments,
            format,
        } => {
            let options = LexOptions {
                skip_comments: *no_comments,
                format: *format,
            };
            lex_file(path, &options)
        }
        Command::Chars { path, format } => chars_file(path, *format),
    };

    match result {
        Ok(output) => print!("{output}"),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
