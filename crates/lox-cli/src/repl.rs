//! Interactive token dump.

use std::io;
use std::process::ExitCode;

use lox_lexer::{LexerError, ScanOutput, Scanner, ScannerConfig};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::error::{Result, EXIT_DATA_ERR};
use crate::output::{print_tokens, StderrReporter};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn start(config: ScannerConfig) -> Result<ExitCode> {
    println!("Lox {} - Type 'exit' or Ctrl+D to quit", VERSION);

    let mut rl = DefaultEditor::new()?;
    let mut buffer = String::new();

    loop {
        let prompt = if buffer.is_empty() { "> " } else { ". " };

        match rl.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if buffer.is_empty() {
                    if trimmed.is_empty() {
                        continue;
                    }
                    if trimmed == "exit" || trimmed == "quit" {
                        break;
                    }
                    if is_command(trimmed) {
                        if handle_command(trimmed) {
                            break;
                        }
                        continue;
                    }
                }

                if !buffer.is_empty() {
                    buffer.push('\n');
                }
                buffer.push_str(&line);

                let output = Scanner::with_config(&buffer, config).scan_tokens();
                if inside_open_string(&output) {
                    debug!(lines = output.tokens.last().map_or(0, |t| t.line), "string still open");
                    continue;
                }

                rl.add_history_entry(buffer.as_str()).ok(); // Ignore history errors

                show(&output)?;
                buffer.clear();
            }
            Err(ReadlineError::Interrupted) => {
                buffer.clear();
                println!("^C");
            }
            Err(ReadlineError::Eof) => {
                println!();
                // An entry still waiting for its closing quote is scanned as is.
                if !buffer.is_empty() {
                    let output = Scanner::with_config(&buffer, config).scan_tokens();
                    show(&output)?;
                    if output.has_errors() {
                        return Ok(ExitCode::from(EXIT_DATA_ERR));
                    }
                }
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Print an entry's tokens and report its diagnostics.
fn show(output: &ScanOutput) -> Result<()> {
    print_tokens(&mut io::stdout().lock(), &output.tokens)?;
    output.report(&mut StderrReporter);
    Ok(())
}

/// The entry ends inside a string literal, so more lines may close it.
fn inside_open_string(output: &ScanOutput) -> bool {
    matches!(
        output.errors.last(),
        Some(LexerError::UnterminatedString { .. })
    )
}

/// REPL commands are `/` followed directly by a letter, so `// note` and
/// `/ 2` are scanned as source.
fn is_command(line: &str) -> bool {
    line.strip_prefix('/')
        .and_then(|rest| rest.chars().next())
        .is_some_and(|ch| ch.is_ascii_alphabetic())
}

/// Run a REPL command. Returns true when the REPL should exit.
fn handle_command(cmd: &str) -> bool {
    let command = cmd[1..]
        .split_whitespace()
        .next()
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match command.as_str() {
        "help" => {
            println!(
                r#"
REPL Commands:
  /help     Show this help
  /clear    Clear the screen
  /exit     Exit the REPL

Each entry is scanned and its tokens printed. An entry that ends inside a
string keeps reading lines until the string is closed.
"#
            );
            false
        }
        "clear" => {
            // ANSI escape code to clear screen
            print!("\x1B[2J\x1B[1;1H");
            false
        }
        "exit" | "quit" => true,
        _ => {
            println!(
                "Unknown command: /{}. Type /help for available commands.",
                command
            );
            false
        }
    }
}
