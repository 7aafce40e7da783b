#![doc = include_str!("../README.md")]
//! raddict CLI tool
//!
//! One positional argument: the dictionary file to translate ('-' for
//! stdin). Statements go to stdout, diagnostics to stderr. The run either
//! consumes the whole input or aborts on the first structural error;
//! output already written is not rolled back.

use std::io::{self, Read, Write};

use raddict_parse::{TranslateError, translate};

// ============================================================================
// Exit codes
// ============================================================================

const EXIT_SUCCESS: i32 = 0;
const EXIT_DICT_ERROR: i32 = 1;
const EXIT_IO_ERROR: i32 = 3;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Main entry point
// ============================================================================

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if let Some(first) = args.first() {
        match first.as_str() {
            "--help" | "-h" => {
                print_help();
                std::process::exit(EXIT_SUCCESS);
            }
            "--version" | "-V" => {
                println!("raddict {VERSION}");
                std::process::exit(EXIT_SUCCESS);
            }
            _ => {}
        }
    }

    let [path] = &args[..] else {
        print_help();
        std::process::exit(EXIT_DICT_ERROR);
    };

    match run(path) {
        Ok(()) => std::process::exit(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

fn print_help() {
    eprintln!("raddict {VERSION} - translate a RADIUS dictionary into registry statements\n");
    eprintln!("USAGE:");
    eprintln!("    raddict <dictionary-file>       Translate a dictionary ('-' for stdin)\n");
    eprintln!("    Statements are written to stdout, one per attribute line.");
    eprintln!("    Attribute lines with an out-of-range code are skipped with a warning;");
    eprintln!("    malformed vendor directives abort the run.");
}

fn run(path: &str) -> Result<(), CliError> {
    let source = read_input(path)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = translate(&source, &mut out)?;
    out.flush().map_err(CliError::Io)?;

    for skipped in &summary.skipped {
        eprintln!("warning: {skipped}");
    }

    Ok(())
}

// ============================================================================
// Error handling
// ============================================================================

#[derive(Debug)]
enum CliError {
    Io(io::Error),
    Translate(TranslateError),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Io(_) => EXIT_IO_ERROR,
            CliError::Translate(TranslateError::Io(_)) => EXIT_IO_ERROR,
            CliError::Translate(_) => EXIT_DICT_ERROR,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "{e}"),
            CliError::Translate(e) => write!(f, "{e}"),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<TranslateError> for CliError {
    fn from(e: TranslateError) -> Self {
        CliError::Translate(e)
    }
}

// ============================================================================
// I/O helpers
// ============================================================================

fn read_input(path: &str) -> Result<String, io::Error> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| io::Error::new(e.kind(), format!("{path}: {e}")))
    }
}
