//! Contains the `JsonError` type and the `Location` it points at.
//!
//! Every failure produced by the scanner or the parser is a `JsonError`.
//! The `kind` tells callers which stage rejected the input; `render`
//! turns the error into a source excerpt with a caret under the column.
use std::fmt;
use thiserror::Error;

/// A 1-based line/column position inside the source text.
///
/// Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    /// The line number (1-indexed).
    pub line: usize,
    /// The column number (1-indexed).
    pub column: usize,
}

impl Location {
    /// Creates a new `Location`.
    pub const fn new(line: usize, column: usize) -> Self {
        Location { line, column }
    }

    /// The very first position of any source, `1:1`.
    pub const fn start() -> Self {
        Location { line: 1, column: 1 }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Which stage rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Raised by the tokenizer: bad characters, strings or escapes.
    Lexical,
    /// Raised by the parser: the tokens do not form a JSON value.
    Syntactic,
    /// Raised by the parser when arrays/objects nest deeper than allowed.
    NestingTooDeep,
}

impl ErrorKind {
    /// A short lowercase label, used by the CLI.
    pub fn label(&self) -> &'static str {
        match self {
            ErrorKind::Lexical => "lexical error",
            ErrorKind::Syntactic => "syntax error",
            ErrorKind::NestingTooDeep => "nesting error",
        }
    }
}

/// The error type for all tokenizing and parsing operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at {location}")]
pub struct JsonError {
    /// The stage that failed.
    pub kind: ErrorKind,
    /// A description of what went wrong.
    pub message: String,
    /// Where in the source the problem was detected.
    pub location: Location,
}

impl JsonError {
    pub(crate) fn lexical(message: impl Into<String>, location: Location) -> Self {
        JsonError {
            kind: ErrorKind::Lexical,
            message: message.into(),
            location,
        }
    }

    pub(crate) fn syntactic(message: impl Into<String>, location: Location) -> Self {
        JsonError {
            kind: ErrorKind::Syntactic,
            message: message.into(),
            location,
        }
    }

    pub(crate) fn too_deep(location: Location) -> Self {
        JsonError {
            kind: ErrorKind::NestingTooDeep,
            message: "maximum nesting depth exceeded".to_string(),
            location,
        }
    }

    /// True if the tokenizer produced this error.
    pub fn is_lexical(&self) -> bool {
        self.kind == ErrorKind::Lexical
    }

    /// True if the parser rejected the token stream's structure.
    pub fn is_syntactic(&self) -> bool {
        matches!(self.kind, ErrorKind::Syntactic | ErrorKind::NestingTooDeep)
    }

    /// The offending source line, if `location.line` exists in `source`.
    pub fn source_line<'s>(&self, source: &'s str) -> Option<&'s str> {
        self.location
            .line
            .checked_sub(1)
            .and_then(|index| source.lines().nth(index))
    }

    /// The caret line: `column - 1` spaces followed by `^`.
    pub fn pointer(&self) -> String {
        format!("{}^", " ".repeat(self.location.column.saturating_sub(1)))
    }

    /// Renders the message, the offending source line and a caret under
    /// the column. Falls back to the `Display` form when the line is not
    /// part of `source`.
    pub fn render(&self, source: &str) -> String {
        match self.source_line(source) {
            Some(line) => format!("{}\n{}\n{}", self.message, line, self.pointer()),
            None => self.to_string(),
        }
    }
}
