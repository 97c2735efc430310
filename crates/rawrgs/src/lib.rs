//! Schema-driven argument parsing with typed coercion.
//!
//! A flat list of tokens is turned into a mapping from option label to value
//! plus the positional remainder under `_`:
//! - flags are resolved by label or alias against an ordered option schema
//! - values are coerced to booleans, integers, lists or nested mappings
//!   depending on the option's [`OptionKind`]
//! - the result is deep-merged over caller-supplied defaults
//!
//! Malformed input never errors. Unknown flags are consumed and ignored,
//! schema entries without a label are dropped, and object literals that do
//! not parse are wrapped as `{value: ...}`.
//!
//! # Example
//!
//! ```
//! use rawrgs::{Map, OptionKind, OptionSpec, Schema, Value};
//!
//! let schema = Schema::new()
//!     .option(OptionSpec::new("include").alias("I").kind(OptionKind::Collector))
//!     .option(OptionSpec::new("jobs").alias("j").kind(OptionKind::Number));
//!
//! let parsed = schema.parse(Map::new(), ["-Isrc", "-I", "lib", "-j4", "main.rs"]);
//! assert_eq!(
//!     parsed.get("include"),
//!     Some(&Value::List(vec!["src".into(), "lib".into()]))
//! );
//! assert_eq!(parsed.get("jobs"), Some(&Value::Int(4)));
//! assert_eq!(parsed.rest(), vec!["main.rs"]);
//! ```

pub mod coerce;
pub mod object;
pub mod parser;
pub mod schema;
pub mod value;

pub use parser::{Parsed, REMAINDER_KEY, SEPARATOR, parse, parse_env};
pub use schema::{Aliases, OptionKind, OptionRecord, OptionSpec, RawOption, Schema};
pub use value::{Map, Value};
