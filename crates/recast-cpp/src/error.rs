//! Typed translation failures with exact source positions.

use miette::Diagnostic;
use std::fmt;
use thiserror::Error;

/// Result type for translation operations.
pub type Result<T> = std::result::Result<T, TranslateError>;

/// What went wrong. Translation fails fast: the first error in the
/// depth-first walk aborts the whole call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A node kind has no registered writer.
    UnsupportedConstruct,
    /// A primitive type has no safe default target mapping.
    TypeNotSupported,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::UnsupportedConstruct => "UnsupportedConstruct",
            ErrorKind::TypeNotSupported => "TypeNotSupported",
        };
        f.write_str(name)
    }
}

/// A translation failure, positioned at the read cursor when it occurred.
/// Line and column are 1-based.
#[derive(Debug, Clone, Error, Diagnostic)]
#[error("{kind}: {} (line {line}, col {col}): {message}", .file.as_deref().unwrap_or("<unknown-file>"))]
pub struct TranslateError {
    pub kind: ErrorKind,
    pub file: Option<String>,
    pub line: u32,
    pub col: u32,
    pub message: String,
    #[help]
    pub help: Option<String>,
}

impl TranslateError {
    pub fn new(
        kind: ErrorKind,
        file: Option<String>,
        line: u32,
        col: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            file,
            line,
            col,
            message: message.into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_unknown_file() {
        let err = TranslateError::new(ErrorKind::TypeNotSupported, None, 2, 1, "no mapping");
        assert_eq!(
            err.to_string(),
            "TypeNotSupported: <unknown-file> (line 2, col 1): no mapping"
        );
    }

    #[test]
    fn test_display_with_file() {
        let err = TranslateError::new(
            ErrorKind::UnsupportedConstruct,
            Some("Foo.java".to_string()),
            10,
            5,
            "no writer",
        );
        assert_eq!(
            err.to_string(),
            "UnsupportedConstruct: Foo.java (line 10, col 5): no writer"
        );
    }
}
