//! The scanner (lexer).
//!
//! Consumes the whole source once, left to right, and produces the token
//! sequence terminated by a single `End` token. The first lexical error
//! aborts the scan; no partial sequence is returned.
//! It is *not* part of the public API; use `crate::tokenize`.

use crate::error::{JsonError, Location};
use crate::token::{Token, TokenKind};
use memchr::memchr3;

/// How many characters of surrounding source a lexical error quotes on
/// each side of the failure point.
const CONTEXT_RADIUS: usize = 10;

/// The internal tokenizer.
///
/// Walks the source by `char`, keeping a byte cursor for slicing and a
/// line/column pair (in characters) for locations.
pub(crate) struct Tokenizer<'a> {
    /// The full source text.
    source: &'a str,
    /// The current byte offset into `source`.
    cursor: usize,
    /// The current line number (1-indexed).
    line: usize,
    /// The current column number (1-indexed).
    column: usize,
    /// Tokens produced so far.
    tokens: Vec<Token>,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new `Tokenizer` positioned at the start of `source`.
    pub(crate) fn new(source: &'a str) -> Self {
        Tokenizer {
            source,
            cursor: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
        }
    }

    /// Scans the whole source.
    pub(crate) fn tokenize(mut self) -> Result<Vec<Token>, JsonError> {
        loop {
            self.skip_whitespace();
            let Some(c) = self.peek() else { break };
            if let Err(error) = self.scan_token(c) {
                return Err(self.with_context(error));
            }
        }

        let end = Token::new(TokenKind::End, "", self.location());
        self.tokens.push(end);
        Ok(self.tokens)
    }

    fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }

    fn peek(&self) -> Option<char> {
        self.source[self.cursor..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        self.source[self.cursor..].chars().nth(1)
    }

    /// Consumes one character, updating line/column.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.cursor += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&predicate) {
            self.advance();
        }
    }

    fn skip_whitespace(&mut self) {
        self.advance_while(|c| matches!(c, ' ' | '\t' | '\r' | '\n'));
    }

    fn push(&mut self, kind: TokenKind, text: impl Into<String>, location: Location) {
        self.tokens.push(Token::new(kind, text, location));
    }

    fn scan_token(&mut self, c: char) -> Result<(), JsonError> {
        let start = self.location();
        let structural = match c {
            '{' => Some(TokenKind::LeftBrace),
            '}' => Some(TokenKind::RightBrace),
            '[' => Some(TokenKind::LeftBracket),
            ']' => Some(TokenKind::RightBracket),
            ',' => Some(TokenKind::Comma),
            ':' => Some(TokenKind::Colon),
            _ => None,
        };
        if let Some(kind) = structural {
            self.advance();
            self.push(kind, c, start);
            return Ok(());
        }

        match c {
            '"' => self.lex_string(start),
            '-' | '0'..='9' => {
                self.lex_number(start);
                Ok(())
            }
            c if c.is_alphabetic() => {
                self.lex_word(start);
                Ok(())
            }
            other => {
                // Consumed, so the error context is taken after it.
                self.advance();
                Err(JsonError::lexical(
                    format!("unexpected character: {}", other),
                    start,
                ))
            }
        }
    }

    /// Scans a string literal. Escapes are validated but kept in their
    /// two-character source form.
    fn lex_string(&mut self, start: Location) -> Result<(), JsonError> {
        self.advance(); // opening '"'
        let mut content = String::new();

        loop {
            // Jump over the plain run up to the next quote, backslash or newline.
            let source = self.source;
            let rest = &source.as_bytes()[self.cursor..];
            let Some(offset) = memchr3(b'"', b'\\', b'\n', rest) else {
                return Err(JsonError::lexical("unterminated string", start));
            };
            // `offset` lands on an ASCII byte, so it is a char boundary.
            let run = &source[self.cursor..self.cursor + offset];
            content.push_str(run);
            self.column += run.chars().count();
            self.cursor += offset;

            match rest[offset] {
                b'"' => {
                    self.advance();
                    self.push(TokenKind::String, content, start);
                    return Ok(());
                }
                b'\n' => {
                    return Err(JsonError::lexical(
                        "unterminated string - newline found",
                        self.location(),
                    ));
                }
                _ => {
                    self.advance(); // '\'
                    match self.peek() {
                        None => return Err(JsonError::lexical("unterminated string", start)),
                        Some(escaped @ ('"' | '\\' | 'b' | 'f' | 'n' | 'r' | 't')) => {
                            self.advance();
                            content.push('\\');
                            content.push(escaped);
                        }
                        Some(other) => {
                            let location = self.location();
                            self.advance();
                            return Err(JsonError::lexical(
                                format!("invalid escape sequence: \\{}", other),
                                location,
                            ));
                        }
                    }
                }
            }
        }
    }

    /// Scans a number lexeme. Validation of the shape is left to the
    /// parser's numeric conversion.
    fn lex_number(&mut self, start: Location) {
        let begin = self.cursor;
        if self.peek() == Some('-') {
            self.advance();
        }
        self.advance_while(|c| c.is_ascii_digit());

        // A '.' is only part of the number when a digit follows it.
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            self.advance_while(|c| c.is_ascii_digit());
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            self.advance();
            if matches!(self.peek(), Some('+' | '-')) {
                self.advance();
            }
            self.advance_while(|c| c.is_ascii_digit());
        }

        let source = self.source;
        self.push(TokenKind::Number, &source[begin..self.cursor], start);
    }

    /// Scans a bare word: `true`, `false`, `null`, or an identifier the
    /// parser will reject by name.
    fn lex_word(&mut self, start: Location) {
        let begin = self.cursor;
        self.advance();
        self.advance_while(|c| c.is_alphanumeric() || c == '_');

        let source = self.source;
        let text = &source[begin..self.cursor];
        let kind = match text {
            "true" | "false" => TokenKind::Boolean,
            "null" => TokenKind::Null,
            _ => TokenKind::Identifier,
        };
        self.push(kind, text, start);
    }

    /// Appends the source around the failure point to the message,
    /// keeping the original location.
    fn with_context(&self, error: JsonError) -> JsonError {
        let before = self.source[..self.cursor]
            .char_indices()
            .rev()
            .take(CONTEXT_RADIUS)
            .last()
            .map_or(self.cursor, |(index, _)| index);
        let after = self.source[self.cursor..]
            .char_indices()
            .nth(CONTEXT_RADIUS)
            .map_or(self.source.len(), |(index, _)| self.cursor + index);

        JsonError {
            message: format!("{} near '{}'", error.message, &self.source[before..after]),
            ..error
        }
    }
}
