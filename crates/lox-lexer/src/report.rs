//! Diagnostic reporting.
//!
//! The scanner never prints. It records [`LexerError`](crate::LexerError)
//! values and callers hand them to a [`Reporter`], which owns presentation.

/// Receives lexical diagnostics.
pub trait Reporter {
    /// Report one diagnostic. `location` qualifies where in the source the
    /// error applies; the scanner always passes an empty string.
    fn report(&mut self, line: usize, column: usize, location: &str, message: &str);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, line: usize, column: usize, location: &str, message: &str) {
        (**self).report(line, column, location, message);
    }
}

/// Reporter that keeps every diagnostic as a formatted line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Collector {
    pub lines: Vec<String>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Reporter for Collector {
    fn report(&mut self, line: usize, column: usize, location: &str, message: &str) {
        self.lines.push(format_diagnostic(line, column, location, message));
    }
}

/// Standard rendering of a diagnostic: `[line L:C] Error<location>: <message>`.
pub fn format_diagnostic(line: usize, column: usize, location: &str, message: &str) -> String {
    format!("[line {}:{}] Error{}: {}", line, column, location, message)
}
