//! Lox CLI - scans Lox source and prints the resulting tokens.
//!
//! With a script argument the file is scanned once; without one an
//! interactive prompt scans each entry. Lexical errors are printed to stderr
//! and turn into exit status 65 for scripts.

mod error;
mod output;
mod repl;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use lox_lexer::{Scanner, ScannerConfig};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use error::{CliError, Result, EXIT_DATA_ERR};
use output::{print_tokens, StderrReporter};

/// Scan Lox source and print its tokens
#[derive(Parser, Debug)]
#[command(name = "lox")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan Lox source and print its tokens", long_about = None)]
struct Cli {
    /// Script to scan. Starts an interactive prompt when omitted.
    script: Option<PathBuf>,

    /// Emit a SLASH token after every `//` comment
    #[arg(long, env = "LOX_LEGACY_COMMENT_SLASH")]
    legacy_comment_slash: bool,

    /// End identifiers at the first digit, so `a1` scans as `a` and `1`
    #[arg(long, env = "LOX_LEGACY_IDENTIFIERS")]
    legacy_identifiers: bool,

    /// Enable debug logging
    #[arg(short, long, env = "LOX_VERBOSE")]
    verbose: bool,
}

impl Cli {
    fn scanner_config(&self) -> ScannerConfig {
        ScannerConfig {
            comment_emits_slash: self.legacy_comment_slash,
            digits_in_identifiers: !self.legacy_identifiers,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.scanner_config();
    let result = match &cli.script {
        Some(path) => run_file(path, config),
        None => repl::start(config),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

/// Logs go to stderr so token dumps on stdout stay clean. `RUST_LOG`
/// overrides the level picked from `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run_file(path: &Path, config: ScannerConfig) -> Result<ExitCode> {
    let bytes = fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = bytes.len(), "scanning file");

    // Invalid UTF-8 becomes U+FFFD, which the scanner reports as an
    // unexpected character.
    let source = String::from_utf8_lossy(&bytes);
    let output = Scanner::with_config(&source, config).scan_tokens();

    print_tokens(&mut io::stdout().lock(), &output.tokens)?;
    output.report(&mut StderrReporter);

    if output.has_errors() {
        Ok(ExitCode::from(EXIT_DATA_ERR))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
