//! Contains the recursive-descent `Parser`.
//!
//! The parser walks a token sequence produced by the tokenizer with a
//! read-only cursor and builds a `Value` tree. Each grammar rule is one
//! method; nesting depth is bounded by `ParseOptions::max_depth`.

use crate::error::{JsonError, Location};
use crate::options::ParseOptions;
use crate::token::{Token, TokenKind};
use crate::value::{Map, Value};

/// A recursive-descent parser over an `End`-terminated token slice.
///
/// The cursor never moves past the `End` token.
pub struct Parser<'a> {
    /// The token sequence. Never modified.
    tokens: &'a [Token],
    /// Index of the current (not yet consumed) token.
    current: usize,
    /// How many arrays/objects enclose the current position.
    depth: usize,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `tokens` with default options.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self::with_options(tokens, ParseOptions::default())
    }

    /// Creates a parser over `tokens` with the given options.
    pub fn with_options(tokens: &'a [Token], options: ParseOptions) -> Self {
        Parser {
            tokens,
            current: 0,
            depth: 0,
            options,
        }
    }

    /// Parses exactly one value.
    ///
    /// # Errors
    /// A syntactic error if the tokens do not form a value, if tokens
    /// remain after it (unless `allow_trailing_tokens` is set), or if the
    /// sequence is empty or not terminated by `End`.
    pub fn parse(mut self) -> Result<Value, JsonError> {
        let last = match self.tokens.last() {
            Some(last) => last,
            None => return Err(JsonError::syntactic("no tokens to parse", Location::start())),
        };
        if last.kind != TokenKind::End {
            return Err(JsonError::syntactic(
                "token sequence is missing its end marker",
                last.location,
            ));
        }

        let value = self.parse_value()?;

        if !self.options.allow_trailing_tokens && !self.is_at_end() {
            return Err(self.error_at_current("unexpected trailing token"));
        }
        Ok(value)
    }

    // --- Cursor ---

    /// The current token, not consumed.
    fn peek(&self) -> &'a Token {
        let tokens = self.tokens;
        &tokens[self.current]
    }

    /// The most recently consumed token.
    fn previous(&self) -> &'a Token {
        let tokens = self.tokens;
        &tokens[self.current.saturating_sub(1)]
    }

    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::End
    }

    /// Consumes the current token and returns it.
    fn advance(&mut self) -> &'a Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    /// True if the current token is `kind`. Always false at `End`.
    fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    /// Consumes the current token if it is any of `kinds`.
    fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|&kind| self.check(kind)) {
            self.advance();
            return true;
        }
        false
    }

    /// Consumes a token of `kind` or fails with `message` at the current token.
    fn consume(&mut self, kind: TokenKind, message: &str) -> Result<&'a Token, JsonError> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        Err(self.error_at_current(message))
    }

    fn error_at_current(&self, message: impl Into<String>) -> JsonError {
        JsonError::syntactic(message, self.peek().location)
    }

    // --- Grammar ---

    fn parse_value(&mut self) -> Result<Value, JsonError> {
        if self.match_any(&[TokenKind::String]) {
            return Ok(Value::String(self.string_text(self.previous())));
        }
        if self.match_any(&[TokenKind::Number]) {
            return parse_number(self.previous());
        }
        if self.match_any(&[TokenKind::Boolean]) {
            return Ok(Value::Boolean(self.previous().text == "true"));
        }
        if self.match_any(&[TokenKind::Null]) {
            return Ok(Value::Null);
        }
        if self.match_any(&[TokenKind::LeftBrace]) {
            return self.nested(Self::parse_object);
        }
        if self.match_any(&[TokenKind::LeftBracket]) {
            return self.nested(Self::parse_array);
        }
        if self.match_any(&[TokenKind::Identifier]) {
            let token = self.previous();
            return Err(JsonError::syntactic(
                format!("expected value, got identifier: {}", token.text),
                token.location,
            ));
        }
        Err(self.error_at_current("expected value"))
    }

    /// Runs `rule` one nesting level deeper. The opening bracket has just
    /// been consumed and is where a depth error points.
    fn nested(
        &mut self,
        rule: fn(&mut Self) -> Result<Value, JsonError>,
    ) -> Result<Value, JsonError> {
        if self.depth >= self.options.max_depth {
            return Err(JsonError::too_deep(self.previous().location));
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    fn parse_object(&mut self) -> Result<Value, JsonError> {
        let mut map = Map::new();

        if !self.check(TokenKind::RightBrace) {
            loop {
                if !self.check(TokenKind::String) {
                    return Err(self.error_at_current("expected string key"));
                }
                let token = self.advance();
                let key = self.string_text(token);
                self.consume(TokenKind::Colon, "expected ':' after key")?;
                let value = self.parse_value()?;
                // Last write wins; the key keeps its first position.
                map.insert(key, value);

                if !self.match_any(&[TokenKind::Comma]) {
                    break;
                }
            }
        }

        self.consume(TokenKind::RightBrace, "expected '}'")?;
        Ok(Value::Object(map))
    }

    fn parse_array(&mut self) -> Result<Value, JsonError> {
        let mut array = Vec::new();

        if !self.check(TokenKind::RightBracket) {
            loop {
                array.push(self.parse_value()?);
                if !self.match_any(&[TokenKind::Comma]) {
                    break;
                }
            }
        }

        self.consume(TokenKind::RightBracket, "expected ']'")?;
        Ok(Value::Array(array))
    }

    fn string_text(&self, token: &Token) -> String {
        if self.options.decode_escapes {
            unescape(&token.text)
        } else {
            token.text.clone()
        }
    }
}

/// Converts a NUMBER token: a lexeme with `.`, `e` or `E` becomes a float,
/// anything else an integer, widened to a float when it does not fit `i64`.
fn parse_number(token: &Token) -> Result<Value, JsonError> {
    let text = token.text.as_str();
    let invalid = || JsonError::syntactic(format!("invalid number: {}", text), token.location);

    if !text.contains(['.', 'e', 'E']) {
        if let Ok(n) = text.parse::<i64>() {
            return Ok(Value::Integer(n));
        }
    }
    // Fractions, exponents and integers beyond `i64` land here; the latter
    // keep their magnitude but lose precision.
    match text.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(Value::Float(f)),
        _ => Err(invalid()),
    }
}

/// Decodes the two-character escapes the tokenizer leaves in string text.
///
/// The tokenizer only lets `\"`, `\\`, `\b`, `\f`, `\n`, `\r` and `\t`
/// through; anything else is copied as-is.
pub(crate) fn unescape(raw: &str) -> String {
    if !raw.contains('\\') {
        return raw.to_string();
    }

    let mut decoded = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }
        match chars.next() {
            Some('b') => decoded.push('\u{0008}'),
            Some('f') => decoded.push('\u{000C}'),
            Some('n') => decoded.push('\n'),
            Some('r') => decoded.push('\r'),
            Some('t') => decoded.push('\t'),
            Some(other) => decoded.push(other),
            None => decoded.push('\\'),
        }
    }
    decoded
}
