//! Error types for the lox CLI.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use rustyline::error::ReadlineError;
use thiserror::Error;

/// Exit status for input that scanned with lexical errors.
pub const EXIT_DATA_ERR: u8 = 65;
/// Exit status for a script that could not be read.
pub const EXIT_NO_INPUT: u8 = 66;
/// Exit status for terminal or output failures.
pub const EXIT_IO_ERR: u8 = 74;

/// Failures of the CLI itself. Lexical errors in the scanned source are
/// not among them; they only affect the exit status.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("readline error: {0}")]
    Readline(#[from] ReadlineError),
}

impl CliError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Read { .. } => ExitCode::from(EXIT_NO_INPUT),
            CliError::Io(_) | CliError::Readline(_) => ExitCode::from(EXIT_IO_ERR),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
