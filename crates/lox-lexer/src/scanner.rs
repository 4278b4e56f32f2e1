//! Scanner for the Lox scripting language.

use crate::report::Reporter;
use crate::token::{lookup_identifier, Literal, Token, TokenKind};
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur during scanning.
///
/// Neither error stops the scan. Both are collected into
/// [`ScanOutput::errors`] and scanning resumes after the offending input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("Unterminated string.")]
    UnterminatedString { line: usize, column: usize },

    #[error("Unexpected character: {ch}")]
    UnexpectedCharacter { ch: char, line: usize, column: usize },
}

impl LexerError {
    /// 1-based line where the error was detected.
    pub fn line(&self) -> usize {
        match self {
            LexerError::UnterminatedString { line, .. }
            | LexerError::UnexpectedCharacter { line, .. } => *line,
        }
    }

    /// Column where the error was detected, counted in characters from the
    /// start of the line.
    pub fn column(&self) -> usize {
        match self {
            LexerError::UnterminatedString { column, .. }
            | LexerError::UnexpectedCharacter { column, .. } => *column,
        }
    }

    /// Hand this error to a reporter.
    pub fn report<R: Reporter + ?Sized>(&self, reporter: &mut R) {
        reporter.report(self.line(), self.column(), "", &self.to_string());
    }
}

/// Scanner behavior switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Emit a SLASH token after a `//` comment, whose lexeme is the whole
    /// comment.
    pub comment_emits_slash: bool,
    /// Allow digits after the first character of an identifier.
    pub digits_in_identifiers: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            comment_emits_slash: false,
            digits_in_identifiers: true,
        }
    }
}

impl ScannerConfig {
    /// The historical behavior: comments leave a SLASH behind and
    /// identifiers are letters only, so `a1` scans as `a` then `1`.
    pub fn legacy() -> Self {
        Self {
            comment_emits_slash: true,
            digits_in_identifiers: false,
        }
    }
}

/// Result of one scan pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutput {
    /// Tokens in source order, always terminated by exactly one EOF.
    pub tokens: Vec<Token>,
    /// Diagnostics in the order they were found.
    pub errors: Vec<LexerError>,
}

impl ScanOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Feed every diagnostic to `reporter`, in source order.
    pub fn report<R: Reporter + ?Sized>(&self, reporter: &mut R) {
        for err in &self.errors {
            err.report(reporter);
        }
    }

    /// Tokens if the scan was clean, otherwise every diagnostic.
    pub fn into_result(self) -> Result<Vec<Token>, Vec<LexerError>> {
        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }
}

/// Scanner tokenizes Lox source code.
///
/// A scanner covers exactly one source text; [`Scanner::scan_tokens`]
/// consumes it.
pub struct Scanner<'a> {
    source: &'a str,
    config: ScannerConfig,
    tokens: Vec<Token>,
    errors: Vec<LexerError>,
    start: usize,
    current: usize,
    start_line: usize,
    line: usize,
    column: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner with the default configuration.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, ScannerConfig::default())
    }

    pub fn with_config(source: &'a str, config: ScannerConfig) -> Self {
        Self {
            source,
            config,
            tokens: Vec::new(),
            errors: Vec::new(),
            start: 0,
            current: 0,
            start_line: 1,
            line: 1,
            column: 0,
        }
    }

    /// Scan the whole source.
    pub fn scan_tokens(mut self) -> ScanOutput {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.scan_token();
        }

        self.tokens
            .push(Token::new(TokenKind::Eof, String::new(), self.line, None));

        debug!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            lines = self.line,
            "scan finished"
        );

        ScanOutput {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn scan_token(&mut self) {
        let ch = self.advance();

        match ch {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => self.add_either('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.add_either('=', TokenKind::EqualEqual, TokenKind::Equal),
            '>' => self.add_either('=', TokenKind::GreaterEqual, TokenKind::Greater),
            '<' => self.add_either('=', TokenKind::LessEqual, TokenKind::Less),
            '/' => {
                if self.match_char('/') {
                    self.line_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            ' ' | '\t' | '\r' => {}
            '\n' => self.handle_newline(),
            '"' => self.read_string(),
            c if c.is_ascii_digit() => self.read_number(),
            c if is_identifier_start(c) => self.read_identifier(),
            _ => self.error(LexerError::UnexpectedCharacter {
                ch,
                line: self.line,
                column: self.column,
            }),
        }
    }

    /// Consume the next character. Returns `'\0'` without moving at end of
    /// input.
    fn advance(&mut self) -> char {
        match self.source[self.current..].chars().next() {
            Some(ch) => {
                self.current += ch.len_utf8();
                self.column += 1;
                ch
            }
            None => '\0',
        }
    }

    /// Consume the next character only if it is `expected`.
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }
        self.advance();
        true
    }

    /// Peek at the next character without consuming it.
    fn peek(&self) -> char {
        self.source[self.current..].chars().next().unwrap_or('\0')
    }

    /// Peek one character past [`Scanner::peek`].
    fn peek_next(&self) -> char {
        self.source[self.current..].chars().nth(1).unwrap_or('\0')
    }

    fn handle_newline(&mut self) {
        self.line += 1;
        self.column = 0;
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    fn add_token(&mut self, kind: TokenKind) {
        let lexeme = self.lexeme().to_string();
        self.push_token(kind, lexeme, None);
    }

    /// Longest match: `double` when the next character is `next`, `single`
    /// otherwise.
    fn add_either(&mut self, next: char, double: TokenKind, single: TokenKind) {
        let kind = if self.match_char(next) { double } else { single };
        self.add_token(kind);
    }

    fn push_token(&mut self, kind: TokenKind, lexeme: String, literal: Option<Literal>) {
        trace!(%kind, line = self.start_line, lexeme = %lexeme, "token");
        self.tokens
            .push(Token::new(kind, lexeme, self.start_line, literal));
    }

    fn error(&mut self, err: LexerError) {
        debug!(line = err.line(), column = err.column(), "{}", err);
        self.errors.push(err);
    }

    /// Skip a `//` comment up to, not including, the newline.
    fn line_comment(&mut self) {
        while self.peek() != '\n' && !self.is_at_end() {
            self.advance();
        }

        if self.config.comment_emits_slash {
            self.add_token(TokenKind::Slash);
        }
    }

    /// Read a string literal. The opening quote is already consumed.
    fn read_string(&mut self) {
        while self.peek() != '"' && !self.is_at_end() {
            if self.advance() == '\n' {
                self.handle_newline();
            }
        }

        if self.is_at_end() {
            self.error(LexerError::UnterminatedString {
                line: self.line,
                column: self.column,
            });
            return;
        }

        self.advance(); // closing quote

        let value = &self.source[self.start + 1..self.current - 1];
        self.push_token(
            TokenKind::String,
            value.to_string(),
            Some(Literal::String(value.to_string())),
        );
    }

    /// Read a number literal: digits with an optional fractional part.
    fn read_number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        // A trailing `.` without a digit after it is left for the next token.
        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance(); // consume .
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let text = self.lexeme().to_string();
        self.push_token(TokenKind::Number, text.clone(), Some(Literal::Number(text)));
    }

    /// Read an identifier or keyword.
    fn read_identifier(&mut self) {
        while self.is_identifier_continue(self.peek()) {
            self.advance();
        }
        let kind = lookup_identifier(self.lexeme());
        self.add_token(kind);
    }

    fn is_identifier_continue(&self, ch: char) -> bool {
        is_identifier_start(ch) || (self.config.digits_in_identifiers && ch.is_ascii_digit())
    }
}

/// Check if a character can start an identifier.
fn is_identifier_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

/// Scan `source` with the default configuration.
pub fn scan_tokens(source: &str) -> ScanOutput {
    Scanner::new(source).scan_tokens()
}

/// Tokenize an input string, failing on the first lexical error.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexerError> {
    let output = scan_tokens(source);
    match output.errors.into_iter().next() {
        Some(err) => Err(err),
        None => Ok(output.tokens),
    }
}
