//! AST dumper.
//!
//! Parses a source file and prints the resulting tree, one node per line
//! with its kind, distinguishing attribute and span. Without a file
//! argument a built-in demo program is parsed.

use std::path::PathBuf;
use std::process::ExitCode;

use baa_drv::Session;
use baa_par::printer::print_program;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Demo input when no file is given.
const DEMO_SOURCE: &str = "\
دالة مربع(س: عدد_صحيح) -> عدد_صحيح {
    إرجع س * س.
}

متغير نتيجة = مربع(٤).
";

/// Print the AST of a Baa source file
#[derive(Parser, Debug)]
#[command(name = "baa_ast_tester")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the AST of a Baa source file", long_about = None)]
struct Cli {
    /// Source file (UTF-16LE with BOM, or UTF-8); a demo program is used
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

    let program = session.parse(file);
    print!("{}", print_program(&program));

    if session.report_diagnostics() > 0 {
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
