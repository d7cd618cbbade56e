//! Defines the `Token` and `TokenKind` types.
//!
//! These are the intermediate representation between the `Tokenizer`
//! (scanner) and the `Parser`.

use crate::error::Location;
use std::fmt;

/// The class of a `Token`.
///
/// This is a closed set: the parser matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// A string literal, e.g. `"hello"`.
    String,
    /// A number literal, e.g. `-1.5e3`.
    Number,
    /// `true` or `false`
    Boolean,
    /// `null`
    Null,
    /// Any other bare word. Never valid; the parser reports it by name.
    Identifier,
    /// End of input. Always the last token of a sequence.
    End,
}

impl TokenKind {
    /// The upper-case name used in token listings.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::LeftBracket => "LEFT_BRACKET",
            TokenKind::RightBracket => "RIGHT_BRACKET",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Null => "NULL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::End => "EOF",
        }
    }
}

/// A single token produced by the `Tokenizer`.
///
/// `text` is the raw lexeme. For strings it is the content between the
/// quotes with escape sequences left in their two-character source form
/// (`\n` stays a backslash followed by `n`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The class of the token.
    pub kind: TokenKind,
    /// The lexeme (see above for strings). Empty for `End`.
    pub text: String,
    /// Where the token starts. For strings this is the opening quote.
    pub location: Location,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, text: impl Into<String>, location: Location) -> Self {
        Token {
            kind,
            text: text.into(),
            location,
        }
    }

    /// The 1-indexed line the token starts on.
    pub fn line(&self) -> usize {
        self.location.line
    }

    /// The 1-indexed column the token starts at.
    pub fn column(&self) -> usize {
        self.location.column
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token({}, '{}', line={}, col={})",
            self.kind.name(),
            self.text,
            self.location.line,
            self.location.column
        )
    }
}
