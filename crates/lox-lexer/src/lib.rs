//! Lox lexer - tokenization for the Lox scripting language.
//!
//! This crate provides the scanner for Lox, which converts source code into
//! tokens, along with the token model it produces. Lexical errors never stop
//! a scan; they come back next to the tokens.
//!
//! # Example
//!
//! ```
//! use lox_lexer::{scan_tokens, TokenKind};
//!
//! let output = scan_tokens("var x = 42;");
//! assert_eq!(output.tokens[0].kind, TokenKind::Var);
//! assert_eq!(output.tokens.last().unwrap().kind, TokenKind::Eof);
//! assert!(!output.has_errors());
//! ```

pub mod report;
pub mod scanner;
pub mod token;

pub use report::{format_diagnostic, Collector, Reporter};
pub use scanner::{scan_tokens, tokenize, LexerError, ScanOutput, Scanner, ScannerConfig};
pub use token::{keyword, lookup_identifier, Literal, Token, TokenKind, KEYWORDS};
