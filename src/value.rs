//! Contains the `Value` enum, the in-memory tree a successful parse
//! produces, and the serialization ("stringify") logic that turns a
//! `Value` back into JSON text.
use indexmap::IndexMap;
use std::fmt::{self, Write};

/// Object storage: insertion-ordered, a repeated key keeps its first
/// position and takes the last value.
pub type Map = IndexMap<String, Value>;

/// A parsed JSON value.
///
/// Numbers keep the subtype chosen by the parser: lexemes containing `.`
/// or an exponent become `Float`, everything else `Integer` unless it
/// does not fit an `i64`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// JSON `null`.
    #[default]
    Null,
    /// JSON `true` or `false`.
    Boolean(bool),
    /// A number without fraction or exponent.
    Integer(i64),
    /// A number with a fraction or exponent.
    Float(f64),
    /// A JSON string.
    String(String),
    /// A JSON array.
    Array(Vec<Value>),
    /// A JSON object.
    Object(Map),
}

impl Value {
    /// Returns true if this is `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a boolean.
    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    /// Returns true if this is an integer or a float.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }

    /// Returns true if this is a string.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if this is an object.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the number as `f64`, widening integers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Looks up `key` if this is an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Looks up `index` if this is an array.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|arr| arr.get(index))
    }

    /// The type name used in messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl Value {
    /// Serializes into compact JSON text. Same as `to_string()`.
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// Serializes into indented JSON text: 4 spaces per level, keys in
    /// insertion order.
    pub fn stringify_pretty(&self) -> String {
        let mut output = String::new();
        // Writing into a `String` cannot fail.
        let _ = write_value_pretty(self, &mut output, 0);
        output
    }
}

/// Compact serialization.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(self, f)
    }
}

/// The indentation unit for pretty-printing.
const INDENT: &str = "    ";

fn write_value<W: Write>(value: &Value, w: &mut W) -> fmt::Result {
    match value {
        Value::Array(arr) => {
            w.write_char('[')?;
            for (i, val) in arr.iter().enumerate() {
                if i > 0 {
                    w.write_char(',')?;
                }
                write_value(val, w)?;
            }
            w.write_char(']')
        }
        Value::Object(obj) => {
            w.write_char('{')?;
            for (i, (key, val)) in obj.iter().enumerate() {
                if i > 0 {
                    w.write_char(',')?;
                }
                write_string(key, w)?;
                w.write_char(':')?;
                write_value(val, w)?;
            }
            w.write_char('}')
        }
        scalar => write_scalar(scalar, w),
    }
}

fn write_value_pretty<W: Write>(value: &Value, w: &mut W, depth: usize) -> fmt::Result {
    match value {
        Value::Array(arr) if arr.is_empty() => w.write_str("[]"),
        Value::Object(obj) if obj.is_empty() => w.write_str("{}"),
        Value::Array(arr) => {
            let indent = INDENT.repeat(depth + 1);
            w.write_str("[\n")?;
            for (i, val) in arr.iter().enumerate() {
                if i > 0 {
                    w.write_str(",\n")?;
                }
                w.write_str(&indent)?;
                write_value_pretty(val, w, depth + 1)?;
            }
            write!(w, "\n{}]", INDENT.repeat(depth))
        }
        Value::Object(obj) => {
            let indent = INDENT.repeat(depth + 1);
            w.write_str("{\n")?;
            for (i, (key, val)) in obj.iter().enumerate() {
                if i > 0 {
                    w.write_str(",\n")?;
                }
                w.write_str(&indent)?;
                write_string(key, w)?;
                w.write_str(": ")?;
                write_value_pretty(val, w, depth + 1)?;
            }
            write!(w, "\n{}}}", INDENT.repeat(depth))
        }
        scalar => write_scalar(scalar, w),
    }
}

fn write_scalar<W: Write>(value: &Value, w: &mut W) -> fmt::Result {
    match value {
        Value::Null => w.write_str("null"),
        Value::Boolean(b) => w.write_str(if *b { "true" } else { "false" }),
        Value::Integer(n) => write!(w, "{}", n),
        // NaN and infinities have no JSON form.
        Value::Float(f) if !f.is_finite() => w.write_str("null"),
        // `{:?}` always keeps a '.' or an exponent, so the text re-parses as a float.
        Value::Float(f) => write!(w, "{:?}", f),
        Value::String(s) => write_string(s, w),
        Value::Array(_) | Value::Object(_) => write_value(value, w),
    }
}

/// Writes `s` as a quoted JSON string.
fn write_string<W: Write>(s: &str, w: &mut W) -> fmt::Result {
    w.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => w.write_str("\\\""),
            '\\' => w.write_str("\\\\"),
            '\u{0008}' => w.write_str("\\b"),
            '\u{000C}' => w.write_str("\\f"),
            '\n' => w.write_str("\\n"),
            '\r' => w.write_str("\\r"),
            '\t' => w.write_str("\\t"),
            '\u{0000}'..='\u{001F}' => write!(w, "\\u{:04x}", c as u32),
            _ => w.write_char(c),
        }?;
    }
    w.write_char('"')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(entries: Vec<(&str, Value)>) -> Value {
        Value::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        )
    }

    #[test]
    fn test_stringify_all_types() {
        assert_eq!(Value::Null.stringify(), "null");
        assert_eq!(Value::Boolean(true).stringify(), "true");
        assert_eq!(Value::Boolean(false).stringify(), "false");
        assert_eq!(Value::Integer(-42).stringify(), "-42");
        assert_eq!(Value::Float(123.45).stringify(), "123.45");
        assert_eq!(Value::Float(2.0).stringify(), "2.0");
        assert_eq!(Value::Float(0.000123).stringify(), "0.000123");
        assert_eq!(Value::Float(1e20).stringify(), "1e20");
        assert_eq!(Value::Float(f64::NAN).stringify(), "null");

        assert_eq!(Value::Array(vec![]).stringify(), "[]");
        assert_eq!(Value::Object(Map::new()).stringify(), "{}");

        let arr = Value::Array(vec![
            Value::Integer(1),
            Value::String("test".to_string()),
            Value::Boolean(true),
            Value::Null,
            Value::Object(Map::new()),
        ]);
        assert_eq!(arr.stringify(), r#"[1,"test",true,null,{}]"#);
    }

    #[test]
    fn test_stringify_keeps_insertion_order() {
        let obj = object(vec![
            ("zebra", Value::Integer(1)),
            ("apple", Value::Integer(2)),
            ("mango", Value::Integer(3)),
        ]);
        assert_eq!(obj.stringify(), r#"{"zebra":1,"apple":2,"mango":3}"#);
    }

    #[test]
    fn test_stringify_string_escapes() {
        let s = Value::String("\" \\ / \u{0008} \u{000C} \n \r \t".to_string());
        assert_eq!(s.stringify(), r#""\" \\ / \b \f \n \r \t""#);

        let s = Value::String("hello\u{0001}world".to_string());
        assert_eq!(s.stringify(), r#""hello\u0001world""#);

        let s = Value::String("naïve ☃".to_string());
        assert_eq!(s.stringify(), "\"naïve ☃\"");
    }

    #[test]
    fn test_stringify_pretty_print() {
        let value = object(vec![
            ("key", Value::String("value".to_string())),
            (
                "items",
                Value::Array(vec![
                    Value::Integer(1),
                    Value::Null,
                    object(vec![("sub_key", Value::Float(2.5))]),
                ]),
            ),
            ("empty", Value::Array(vec![])),
        ]);

        let expected = r#"{
    "key": "value",
    "items": [
        1,
        null,
        {
            "sub_key": 2.5
        }
    ],
    "empty": []
}"#;
        assert_eq!(value.stringify_pretty(), expected);
    }

    #[test]
    fn test_stringify_pretty_empty_and_scalars() {
        assert_eq!(Value::Object(Map::new()).stringify_pretty(), "{}");
        assert_eq!(Value::Array(vec![]).stringify_pretty(), "[]");
        assert_eq!(Value::Integer(7).stringify_pretty(), "7");
        assert_eq!(Value::String("x".into()).stringify_pretty(), "\"x\"");
    }

    #[test]
    fn test_accessors() {
        let value = object(vec![
            ("n", Value::Integer(42)),
            ("f", Value::Float(1.5)),
            ("list", Value::Array(vec![Value::Boolean(true)])),
        ]);
        assert!(value.is_object());
        assert_eq!(value.get("n").and_then(Value::as_i64), Some(42));
        assert_eq!(value.get("n").and_then(Value::as_f64), Some(42.0));
        assert_eq!(value.get("f").and_then(Value::as_i64), None);
        assert_eq!(value.get("f").and_then(Value::as_f64), Some(1.5));
        assert_eq!(
            value.get("list").and_then(|l| l.get_index(0)).and_then(Value::as_bool),
            Some(true)
        );
        assert_eq!(value.get("missing"), None);
        assert_eq!(Value::Null.get("n"), None);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::Boolean(false).type_name(), "boolean");
        assert_eq!(Value::Integer(0).type_name(), "integer");
        assert_eq!(Value::Float(0.5).type_name(), "float");
        assert_eq!(Value::String(String::new()).type_name(), "string");
        assert_eq!(Value::Array(vec![]).type_name(), "array");
        assert_eq!(Value::Object(Map::new()).type_name(), "object");
    }
}
