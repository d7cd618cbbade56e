//! # caret-json
//!
//! `caret-json` is a strict JSON scanner and recursive-descent parser
//! whose errors point at the offending character, built in safe Rust.
//!
//! ## Key Features
//!
//! * **Two explicit stages:** `tokenize` turns text into a `Vec<Token>`,
//!   `parse` turns tokens into a `Value`. Both stages are public, so the
//!   token list can be inspected on its own.
//! * **Located errors:** every `JsonError` carries a 1-indexed line and
//!   column, and `JsonError::render` draws the offending line with a caret
//!   under the failure point.
//! * **Bounded:** input size and nesting depth are limited (see
//!   `ParseOptions`).
//! * **Ordered objects:** keys keep their source order when re-serialized.
//!
//! ## Quick Start
//!
//! ```
//! use caret_json::{parse_str, Value};
//!
//! let value = parse_str(r#"{"name": "Babbage", "id": 1815}"#).unwrap();
//! assert_eq!(value.get("id"), Some(&Value::Integer(1815)));
//! assert_eq!(value.stringify(), r#"{"name":"Babbage","id":1815}"#);
//! ```
//!
//! ## Errors
//!
//! ```
//! let source = r#"{"key": }"#;
//! let err = caret_json::parse_str(source).unwrap_err();
//! assert_eq!(err.to_string(), "expected value at line 1, column 9");
//! assert_eq!(err.render(source), "expected value\n{\"key\": }\n        ^");
//! ```
#![deny(clippy::unwrap_used, clippy::expect_used)]

/// Contains `JsonError`, `ErrorKind` and `Location`.
pub mod error;
/// Contains `ParseOptions`.
pub mod options;
/// Contains the recursive-descent `Parser`.
pub mod parser;
/// Contains the `Token` and `TokenKind` types.
pub mod token;
/// Contains the `Value` enum and the serialization logic.
pub mod value;

/// The scanner. Private to the crate; use `tokenize`.
mod tokenizer;

pub use error::{ErrorKind, JsonError, Location};
pub use options::ParseOptions;
pub use parser::Parser;
pub use token::{Token, TokenKind};
pub use value::{Map, Value};

use tokenizer::Tokenizer;

// --- Constants ---
/// The default maximum nesting depth (e.g., `[[[]]]`) to prevent stack overflows.
pub const DEFAULT_MAX_DEPTH: usize = 100;
/// The maximum allowed size of an input JSON (10MB).
pub const MAX_JSON_SIZE_BYTES: usize = 10 * 1024 * 1024;

/// Scans `source` into tokens with default options.
///
/// The returned sequence always ends with exactly one `TokenKind::End`.
///
/// # Errors
/// A lexical `JsonError` for the first character the scanner cannot accept,
/// or if `source` exceeds `MAX_JSON_SIZE_BYTES`.
///
/// # Examples
/// ```
/// use caret_json::{tokenize, TokenKind};
///
/// let tokens = tokenize("[1, true]").unwrap();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::LeftBracket,
///         TokenKind::Number,
///         TokenKind::Comma,
///         TokenKind::Boolean,
///         TokenKind::RightBracket,
///         TokenKind::End,
///     ]
/// );
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, JsonError> {
    tokenize_with(source, &ParseOptions::default())
}

/// Scans `source` into tokens, enforcing `options.max_input_size`.
pub fn tokenize_with(source: &str, options: &ParseOptions) -> Result<Vec<Token>, JsonError> {
    if source.len() > options.max_input_size {
        return Err(JsonError::lexical(
            "input exceeds maximum size limit",
            Location::start(),
        ));
    }
    Tokenizer::new(source).tokenize()
}

/// Parses an `End`-terminated token sequence into a single `Value`.
///
/// # Errors
/// A syntactic `JsonError` located at the token where parsing failed.
pub fn parse(tokens: &[Token]) -> Result<Value, JsonError> {
    parse_with(tokens, &ParseOptions::default())
}

/// Parses tokens with the given options.
pub fn parse_with(tokens: &[Token], options: &ParseOptions) -> Result<Value, JsonError> {
    Parser::with_options(tokens, *options).parse()
}

/// Tokenizes and parses `source` in one go.
pub fn parse_str(source: &str) -> Result<Value, JsonError> {
    parse_str_with(source, &ParseOptions::default())
}

/// Tokenizes and parses `source` with the given options.
pub fn parse_str_with(source: &str, options: &ParseOptions) -> Result<Value, JsonError> {
    let tokens = tokenize_with(source, options)?;
    parse_with(&tokens, options)
}

/// The result of a full parse: the token list alongside the tree built
/// from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub tokens: Vec<Token>,
    pub value: Value,
}

/// Tokenizes and parses `source`, keeping the tokens.
pub fn parse_document(source: &str) -> Result<Document, JsonError> {
    parse_document_with(source, &ParseOptions::default())
}

/// Like `parse_document`, with the given options.
pub fn parse_document_with(source: &str, options: &ParseOptions) -> Result<Document, JsonError> {
    let tokens = tokenize_with(source, options)?;
    let value = parse_with(&tokens, options)?;
    Ok(Document { tokens, value })
}

/// Re-serializes `source` with 4-space indentation.
///
/// # Examples
/// ```
/// let pretty = caret_json::format(r#"{"a":[1,2]}"#).unwrap();
/// assert_eq!(pretty, "{\n    \"a\": [\n        1,\n        2\n    ]\n}");
/// ```
pub fn format(source: &str) -> Result<String, JsonError> {
    format_with(source, &ParseOptions::default())
}

/// Like `format`, with the given options.
pub fn format_with(source: &str, options: &ParseOptions) -> Result<String, JsonError> {
    Ok(parse_str_with(source, options)?.stringify_pretty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value as SerdeValue;

    #[test]
    fn test_parse_nested_document() {
        let input = r#"{"name": "Alice", "age": 30, "scores": [95.5, 87, 92.0], "active": true, "meta": null}"#;
        let value = parse_str(input).unwrap();

        assert_eq!(value.get("name").and_then(Value::as_str), Some("Alice"));
        assert_eq!(value.get("age"), Some(&Value::Integer(30)));
        assert_eq!(
            value.get("scores"),
            Some(&Value::Array(vec![
                Value::Float(95.5),
                Value::Integer(87),
                Value::Float(92.0),
            ]))
        );
        assert_eq!(value.get("active"), Some(&Value::Boolean(true)));
        assert_eq!(value.get("meta"), Some(&Value::Null));
    }

    #[test]
    fn test_token_stream_for_object() {
        let tokens = tokenize(r#"{"key": "value"}"#).unwrap();
        let listed: Vec<String> = tokens.iter().map(Token::to_string).collect();
        assert_eq!(
            listed,
            vec![
                "Token(LEFT_BRACE, '{', line=1, col=1)",
                "Token(STRING, 'key', line=1, col=2)",
                "Token(COLON, ':', line=1, col=7)",
                "Token(STRING, 'value', line=1, col=9)",
                "Token(RIGHT_BRACE, '}', line=1, col=16)",
                "Token(EOF, '', line=1, col=17)",
            ]
        );
    }

    #[test]
    fn test_exactly_one_end_token() {
        for input in ["", "   ", "[1, 2]", "{\n  \"a\": null\n}\n"] {
            let tokens = tokenize(input).unwrap();
            let ends = tokens.iter().filter(|t| t.kind == TokenKind::End).count();
            assert_eq!(ends, 1, "input {:?}", input);
            assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::End));
        }
    }

    #[test]
    fn test_locations_across_lines() {
        let source = "{\n  \"a\": 1,\n  \"b\": [true, nope]\n}";
        let err = parse_str(source).unwrap_err();
        assert_eq!(err.message, "expected value, got identifier: nope");
        assert_eq!(err.location, Location::new(3, 15));
        let pointer = format!("{}^", " ".repeat(14));
        assert_eq!(
            err.render(source),
            format!("expected value, got identifier: nope\n  \"b\": [true, nope]\n{}", pointer)
        );
    }

    #[test]
    fn test_lexical_error_render() {
        let source = r#"{"key": "value"#;
        let err = parse_str(source).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lexical);
        assert!(err.message.starts_with("unterminated string"));
        assert_eq!(err.location, Location::new(1, 9));
        assert!(err.render(source).ends_with("\n        ^"));
    }

    #[test]
    fn test_size_limit() {
        let options = ParseOptions::default().with_max_input_size(4);
        let err = parse_str_with("[1, 2]", &options).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lexical);
        assert_eq!(err.message, "input exceeds maximum size limit");
        assert_eq!(err.location, Location::start());

        assert!(parse_str_with("[1]", &options).is_ok());
    }

    #[test]
    fn test_compatible_mode() {
        let options = ParseOptions::compatible();
        let value = parse_str_with(r#"{"a": "x\ny"} trailing"#, &options).unwrap();
        assert_eq!(value.get("a").and_then(Value::as_str), Some(r"x\ny"));
    }

    #[test]
    fn test_parse_document_keeps_tokens() {
        let doc = parse_document("[1, 2]").unwrap();
        assert_eq!(doc.tokens.len(), 6);
        assert_eq!(doc.value, Value::Array(vec![Value::Integer(1), Value::Integer(2)]));
    }

    #[test]
    fn test_format_layout() {
        let pretty = format(r#"{"key":"value","items":[1,null,{}],"empty":[]}"#).unwrap();
        let expected = r#"{
    "key": "value",
    "items": [
        1,
        null,
        {}
    ],
    "empty": []
}"#;
        assert_eq!(pretty, expected);
    }

    #[test]
    fn test_format_is_idempotent() {
        let inputs = [
            r#"{"b": [1, 2.5, -3e2], "a": {"nested": "tab\there \"quoted\""}}"#,
            r#"[true, false, null, "naïve ☃", "back\\slash"]"#,
            "\"\\b\\f\\r\"",
            "0",
        ];
        for input in inputs {
            let once = format(input).unwrap();
            let twice = format(&once).unwrap();
            assert_eq!(once, twice, "input {:?}", input);
            assert_eq!(parse_str(&once).unwrap(), parse_str(input).unwrap());
        }
    }

    #[test]
    fn test_whitespace_is_insignificant() {
        let compact = r#"{"a":[1,2,{"b":null}],"c":"d e"}"#;
        let spaced = "\n\t{ \"a\" :\r\n [ 1 ,2 , { \"b\":null } ] ,\n \"c\" : \"d e\" }  \n";
        assert_eq!(parse_str(compact).unwrap(), parse_str(spaced).unwrap());
    }

    #[test]
    fn test_agrees_with_serde_json() {
        let inputs = [
            r#"{"name": "Alice", "tags": ["x", "y"], "n": -12, "f": 0.25}"#,
            r#"[[], {}, [[null]], {"k": {"k": false}}]"#,
            r#""line\nbreak \"and\" tab\t""#,
            "1.5e3",
        ];
        for input in inputs {
            let ours: SerdeValue = serde_json::from_str(&parse_str(input).unwrap().stringify())
                .expect("stringify output should be valid JSON");
            let theirs: SerdeValue = serde_json::from_str(input).unwrap();
            assert_eq!(ours, theirs, "input {:?}", input);
        }
    }

    #[test]
    fn test_rejects_what_serde_json_rejects() {
        for input in ["[1, 2,]", "{\"a\": 1,}", "{a: 1}", "[undefined]", "'x'", "[1] 2"] {
            assert!(serde_json::from_str::<SerdeValue>(input).is_err());
            assert!(parse_str(input).is_err(), "input {:?}", input);
        }
    }
}
