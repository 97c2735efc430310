//! Object-literal tokens: `key=val;other.key=val2`.
//!
//! Each `;`-separated statement is `path=value` where `path` is made of ASCII
//! letters, digits, `_` and `.`. The value is the rest of the statement, so
//! further `=` signs are kept. There is no escaping.

use crate::value::{Map, Value, set_path};

/// Result of decoding a single token.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded<'a> {
    /// The token matched the grammar; dotted paths are expanded.
    Parsed(Map),
    /// The token did not match; callers wrap it as `{value: ...}`.
    Fallback(&'a str),
}

/// Decode an object-literal token.
pub fn decode(token: &str) -> Decoded<'_> {
    let mut out = Map::new();
    for statement in token.split(';') {
        let Some((path, value)) = statement.split_once('=') else {
            return Decoded::Fallback(token);
        };
        if !is_path(path) {
            return Decoded::Fallback(token);
        }
        set_path(&mut out, path, Value::Str(value.to_string()));
    }
    Decoded::Parsed(out)
}

fn is_path(path: &str) -> bool {
    !path.is_empty()
        && path
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(json: serde_json::Value) -> Decoded<'static> {
        Decoded::Parsed(serde_json::from_value(json).unwrap())
    }

    #[test]
    fn decodes_flat_statements() {
        assert_eq!(
            decode("name=demo;level=3"),
            parsed(serde_json::json!({"name": "demo", "level": "3"}))
        );
    }

    #[test]
    fn dotted_paths_nest() {
        assert_eq!(
            decode("a.b.c=1;a.d=x"),
            parsed(serde_json::json!({"a": {"b": {"c": "1"}, "d": "x"}}))
        );
    }

    #[test]
    fn extra_equals_signs_stay_in_the_value() {
        assert_eq!(
            decode("query=a=b=c"),
            parsed(serde_json::json!({"query": "a=b=c"}))
        );
    }

    #[test]
    fn empty_value_is_allowed() {
        assert_eq!(decode("key="), parsed(serde_json::json!({"key": ""})));
    }

    #[test]
    fn later_statements_overwrite_earlier_ones() {
        assert_eq!(
            decode("a=1;a.b=2"),
            parsed(serde_json::json!({"a": {"b": "2"}}))
        );
    }

    #[test]
    fn malformed_tokens_fall_back() {
        for token in ["", "plain", "=x", "bad-key=1", "a=1;", "a=1;b", "has space=1"] {
            assert_eq!(decode(token), Decoded::Fallback(token), "{token:?}");
        }
    }
}
