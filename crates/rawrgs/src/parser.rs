//! The parse loop.
//!
//! Tokens are scanned left to right. Scanning stops at the first token that
//! does not start with `-`, or after a literal `--` (which is dropped).
//! Whatever is left becomes the positional remainder.

use std::collections::VecDeque;

use serde::Serialize;

use crate::coerce::{coerce, coerce_bool, is_numeric};
use crate::object::{self, Decoded};
use crate::schema::{OptionKind, RawOption, Schema};
use crate::value::{Map, Value, merge};

/// Result key holding the positional remainder.
pub const REMAINDER_KEY: &str = "_";

/// Token that ends flag scanning.
pub const SEPARATOR: &str = "--";

/// Parsed options merged over defaults, plus the positional remainder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Parsed {
    values: Map,
}

impl Parsed {
    /// Value stored for `label` (parsed or default).
    pub fn get(&self, label: &str) -> Option<&Value> {
        self.values.get(label)
    }

    /// Tokens left over once flag scanning ended.
    pub fn rest(&self) -> Vec<&str> {
        self.values
            .get(REMAINDER_KEY)
            .and_then(Value::as_list)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// The whole result, remainder included.
    pub fn values(&self) -> &Map {
        &self.values
    }

    pub fn into_map(self) -> Map {
        self.values
    }
}

/// Parse `tokens` against `options`, merging the result over `defaults`.
///
/// `tokens` is copied; the caller's sequence is never modified.
pub fn parse<I, S>(options: &[RawOption], defaults: Map, tokens: I) -> Parsed
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Schema::normalize(options).parse(defaults, tokens)
}

/// Like [`parse`], reading tokens from the process arguments (program path
/// excluded).
pub fn parse_env(options: &[RawOption], defaults: Map) -> Parsed {
    let tokens = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned());
    parse(options, defaults, tokens)
}

/// Whether `token` may be taken as a flag's value.
///
/// Tokens starting with `-` are rejected unless they are numeric, so `-5`
/// is a value but `--verbose` is the next flag.
pub fn accepts_as_value(token: &str) -> bool {
    !token.starts_with('-') || is_numeric(token)
}

impl Schema {
    /// Parse `tokens` with this schema, merging the result over `defaults`.
    pub fn parse<I, S>(&self, defaults: Map, tokens: I) -> Parsed
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut queue: VecDeque<String> = tokens.into_iter().map(Into::into).collect();
        let mut options = Map::new();

        while let Some(front) = queue.front() {
            if !front.starts_with('-') {
                break;
            }
            let Some(token) = queue.pop_front() else {
                break;
            };
            if token == SEPARATOR {
                break;
            }

            let flag = Flag::split(&token);
            let raw = match flag.inline {
                Some(inline) => inline.to_string(),
                None => take_value(&mut queue),
            };

            let Some(spec) = self.resolve(flag.label) else {
                tracing::debug!(flag = %token, "ignoring unknown flag");
                continue;
            };
            spec.kind.store(&mut options, &spec.label, &raw);
        }

        let rest = queue.into_iter().map(Value::Str).collect();
        options.insert(REMAINDER_KEY.to_string(), Value::List(rest));

        let mut values = defaults;
        merge(&mut values, options);
        Parsed { values }
    }
}

/// A flag token split into its raw label and inline value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Flag<'t> {
    label: &'t str,
    inline: Option<&'t str>,
}

impl<'t> Flag<'t> {
    /// `--name`, `--name=value`, `-x` or `-xVALUE`.
    ///
    /// Long flags split at the first `=`, so a label containing `=` can only
    /// be reached through an alias.
    fn split(token: &'t str) -> Self {
        if let Some(long) = token.strip_prefix("--") {
            return match long.split_once('=') {
                Some((label, value)) => Self {
                    label,
                    inline: Some(value),
                },
                None => Self {
                    label: long,
                    inline: None,
                },
            };
        }

        let short = token.strip_prefix('-').unwrap_or(token);
        match short.chars().next() {
            Some(c) => {
                let (label, rest) = short.split_at(c.len_utf8());
                Self {
                    label,
                    inline: (!rest.is_empty()).then_some(rest),
                }
            }
            None => Self {
                label: short,
                inline: None,
            },
        }
    }
}

/// Take the next token as a value, or `""` when there is none to take.
fn take_value(queue: &mut VecDeque<String>) -> String {
    let accept = queue.front().is_some_and(|next| accepts_as_value(next));
    if accept {
        queue.pop_front().unwrap_or_default()
    } else {
        String::new()
    }
}

impl OptionKind {
    /// Coerce `raw` and store it under `label` the way this kind requires.
    fn store(self, options: &mut Map, label: &str, raw: &str) {
        match self {
            Self::Collector => {
                let value = coerce(raw);
                let slot = options
                    .entry(label.to_string())
                    .or_insert_with(|| Value::List(Vec::new()));
                match slot {
                    Value::List(items) => items.push(value),
                    other => *other = Value::List(vec![value]),
                }
            }
            Self::Object => {
                let incoming = decode_object(raw);
                let slot = options
                    .entry(label.to_string())
                    .or_insert_with(|| Value::Map(Map::new()));
                match slot {
                    Value::Map(existing) => merge(existing, incoming),
                    other => *other = Value::Map(incoming),
                }
            }
            Self::Number => match coerce(raw) {
                value @ Value::Int(_) => {
                    options.insert(label.to_string(), value);
                }
                other => {
                    tracing::debug!(label, value = ?other, "dropping non-numeric value");
                }
            },
            Self::Array => {
                let items = raw.split(',').map(coerce).collect();
                options.insert(label.to_string(), Value::List(items));
            }
            Self::Boolean => {
                let value = coerce_bool(&coerce(raw));
                options.insert(label.to_string(), Value::Bool(value));
            }
            Self::Normal => {
                options.insert(label.to_string(), coerce(raw));
            }
        }
    }
}

fn decode_object(raw: &str) -> Map {
    match object::decode(raw) {
        Decoded::Parsed(m) => m,
        Decoded::Fallback(token) => {
            tracing::trace!(token, "object literal fallback");
            let mut m = Map::new();
            m.insert("value".to_string(), coerce(token));
            m
        }
    }
}
