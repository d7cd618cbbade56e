//! caret-json command-line interface.
//!
//! Reads JSON from a file or stdin, then lists its tokens, pretty-prints
//! it, or both. Errors are shown as the offending line with a caret under
//! the failing column.

use caret_json::{parse_document_with, tokenize_with, JsonError, ParseOptions, Token, Value};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::any::Any;
use std::io::{self, Read};
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "caret-json")]
#[command(about = "Strict JSON parser with caret-pointed errors", long_about = None)]
#[command(version)]
struct Cli {
    /// Ignore tokens after the top-level value and keep string escapes literally
    #[arg(long, global = true)]
    compat: bool,

    /// Maximum nesting depth of arrays and objects
    #[arg(long, global = true, value_name = "N")]
    max_depth: Option<usize>,

    /// Disable coloured error output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the token list, a blank line, then the pretty-printed value
    Parse {
        /// Input file; stdin when omitted or "-"
        file: Option<PathBuf>,
    },

    /// Pretty-print the value with 4-space indentation
    Format {
        /// Input file; stdin when omitted or "-"
        file: Option<PathBuf>,
    },

    /// Print the token list only
    Tokens {
        /// Input file; stdin when omitted or "-"
        file: Option<PathBuf>,
    },
}

/// Exit status for a document that failed to tokenize or parse.
const EXIT_JSON_ERROR: u8 = 1;
/// Exit status for unreadable or blank input.
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // `guarded` reports panics itself.
    panic::set_hook(Box::new(|_| {}));
    guarded(|| run(cli))
}

fn run(cli: Cli) -> ExitCode {
    let mut options = if cli.compat {
        ParseOptions::compatible()
    } else {
        ParseOptions::strict()
    };
    if let Some(depth) = cli.max_depth {
        options = options.with_max_depth(depth);
    }

    let (file, action) = match &cli.command {
        Commands::Parse { file } => (file, "parse"),
        Commands::Format { file } => (file, "format"),
        Commands::Tokens { file } => (file, "tokenize"),
    };

    let source = match read_input(file.as_ref()) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            return ExitCode::from(EXIT_USAGE);
        }
    };
    if source.trim().is_empty() {
        eprintln!(
            "{}: please enter some JSON to {}",
            "error".red().bold(),
            action
        );
        return ExitCode::from(EXIT_USAGE);
    }

    let result = match cli.command {
        Commands::Parse { .. } => parse_document_with(&source, &options).map(|doc| {
            print_tokens(&doc.tokens);
            println!();
            print_value(&doc.value);
        }),
        Commands::Format { .. } => {
            parse_document_with(&source, &options).map(|doc| print_value(&doc.value))
        }
        Commands::Tokens { .. } => tokenize_with(&source, &options).map(|t| print_tokens(&t)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err, &source);
            ExitCode::from(EXIT_JSON_ERROR)
        }
    }
}

/// Runs `f`, turning a panic into a generic "unexpected error" report
/// instead of a crash.
fn guarded(f: impl FnOnce() -> ExitCode) -> ExitCode {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(code) => code,
        Err(payload) => {
            eprintln!(
                "{}: unexpected error: {}",
                "error".red().bold(),
                panic_message(payload.as_ref())
            );
            ExitCode::from(EXIT_JSON_ERROR)
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown failure")
}

fn read_input(file: Option<&PathBuf>) -> io::Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path).map_err(|e| {
            io::Error::new(e.kind(), format!("cannot read {}: {}", path.display(), e))
        }),
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        println!("{}", token);
    }
}

fn print_value(value: &Value) {
    println!("{}", value.stringify_pretty());
}

/// Writes the error to stderr as a header, the location, and the offending
/// source line with a caret under the column.
fn report(err: &JsonError, source: &str) {
    eprintln!(
        "{}: {}",
        err.kind.label().red().bold(),
        err.message.bold()
    );
    eprintln!("  {} {}", "-->".blue().bold(), err.location.to_string().yellow());
    if let Some(line) = err.source_line(source) {
        eprintln!("{}", line);
        eprintln!("{}", err.pointer().red().bold());
    }
}
