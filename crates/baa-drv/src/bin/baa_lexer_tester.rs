//! Token stream dumper.
//!
//! Prints one line per token, including whitespace, newline and comment
//! tokens, in the form `[NNN] KIND (L<line> C<col> Len<n>) '<lexeme>'`.
//! Without a file argument a built-in demo string is lexed.

use std::path::PathBuf;
use std::process::ExitCode;

use baa_drv::{format_token_line, Session};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Demo input when no file is given.
const DEMO_SOURCE: &str = "  \tمعرف١\n\nمتغير س = ١٠.\n// تعليق يظهر كرمز\n";

/// Dump the token stream of a Baa source file
#[derive(Parser, Debug)]
#[command(name = "baa_lexer_tester")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Dump the token stream of a Baa source file", long_about = None)]
struct Cli {
    /// Source file (UTF-16LE with BOM, or UTF-8); a demo string is used
    /// when omitted
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut session = Session::new();
    let file = match &cli.file {
        Some(path) => match session.load_file(path) {
            Ok(file) => file,
            Err(err) => {
                eprintln!("error: {}", err);
                return ExitCode::FAILURE;
            },
        },
        None => session.add_source("<demo>", DEMO_SOURCE),
    };

    for (index, token) in session.tokenize(file).iter().enumerate() {
        println!("{}", format_token_line(index, token));
    }

    session.report_diagnostics();
    ExitCode::SUCCESS
}
