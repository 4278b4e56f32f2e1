//! Token dumps and diagnostic presentation.

use std::io::{self, Write};

use lox_lexer::{format_diagnostic, Reporter, Token};

/// Write one line per token: the source line, then the token itself.
pub fn print_tokens<W: Write>(out: &mut W, tokens: &[Token]) -> io::Result<()> {
    for token in tokens {
        writeln!(out, "{:>4} {}", token.line, token)?;
    }
    out.flush()
}

/// Reporter that prints diagnostics to stderr.
pub struct StderrReporter;

impl Reporter for StderrReporter {
    fn report(&mut self, line: usize, column: usize, location: &str, message: &str) {
        eprintln!("{}", format_diagnostic(line, column, location, message));
    }
}
