//! Error and diagnostic types for parsing.
//!
//! Parsing distinguishes two outcomes:
//!
//! - **Fatal errors** ([`Error`]): the input cannot be turned into a tree.
//!   Parsing stops at the first one and no partial tree is returned.
//! - **Recoverable diagnostics** ([`Diagnostic`]): a literal was out of range.
//!   The lexer substitutes a sentinel value, records the diagnostic and keeps
//!   going, so the rest of the document still parses.
//!
//! Every positioned error carries the source name and the 1-based line on
//! which the offending byte sits.
//!
//! ## Examples
//!
//! ```rust
//! use minitoml::{parse, Error};
//!
//! let result = parse("app.toml", "[server\nport = 1");
//! match result {
//!     Err(err @ Error::UnexpectedToken { .. }) => {
//!         assert_eq!(err.line(), Some(2));
//!         assert_eq!(err.file(), Some("app.toml"));
//!     }
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A grammar production expected one token and found another.
    #[error("{file}({line}): expected {expected}, found {found}")]
    UnexpectedToken {
        file: String,
        line: usize,
        expected: String,
        found: String,
    },

    /// Malformed input detected by the lexer or the parser.
    #[error("{file}({line}): {msg}")]
    Syntax {
        file: String,
        line: usize,
        msg: String,
    },

    /// A recoverable diagnostic rejected by [`crate::ParseOptions::deny_warnings`].
    #[error("{0}")]
    Denied(Diagnostic),

    /// IO error while reading the source
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error at the given position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use minitoml::Error;
    ///
    /// let err = Error::syntax("conf", 3, "unterminated string");
    /// assert_eq!(err.to_string(), "conf(3): unterminated string");
    /// ```
    pub fn syntax(file: &str, line: usize, msg: impl Into<String>) -> Self {
        Error::Syntax {
            file: file.to_string(),
            line,
            msg: msg.into(),
        }
    }

    /// Creates an error for a token that does not fit the grammar.
    pub fn unexpected_token(
        file: &str,
        line: usize,
        expected: impl fmt::Display,
        found: impl fmt::Display,
    ) -> Self {
        Error::UnexpectedToken {
            file: file.to_string(),
            line,
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an I/O error for reading failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// The line the error was reported on, if it carries a position.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::UnexpectedToken { line, .. } | Error::Syntax { line, .. } => Some(*line),
            Error::Denied(diagnostic) => Some(diagnostic.line),
            Error::Io(_) | Error::Custom(_) => None,
        }
    }

    /// The source name the error was reported against, if it carries a position.
    #[must_use]
    pub fn file(&self) -> Option<&str> {
        match self {
            Error::UnexpectedToken { file, .. } | Error::Syntax { file, .. } => Some(file),
            Error::Denied(diagnostic) => Some(&diagnostic.file),
            Error::Io(_) | Error::Custom(_) => None,
        }
    }
}

/// The kind of value problem a [`Diagnostic`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Integer literal outside the signed 64-bit range; the value became `0`.
    IntegerOverflow,
    /// Float literal reached the largest representable magnitude.
    FloatOverflow,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::IntegerOverflow => f.write_str("integer literal overflow"),
            DiagnosticKind::FloatOverflow => f.write_str("float literal overflow"),
        }
    }
}

/// A recoverable problem found while lexing.
///
/// Parsing continues after a diagnostic; the affected literal holds a
/// sentinel value instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{file}({line}): {kind}")]
pub struct Diagnostic {
    pub file: String,
    pub line: usize,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(file: &str, line: usize, kind: DiagnosticKind) -> Self {
        Diagnostic {
            file: file.to_string(),
            line,
            kind,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
