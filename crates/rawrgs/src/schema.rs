//! Option schema: raw entry forms, normalization and label/alias lookup.

use serde::{Deserialize, Serialize};

/// How a resolved option stores its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum OptionKind {
    /// Store the coerced scalar.
    #[default]
    Normal,
    /// Store `true`/`false`.
    Boolean,
    /// Store an integer; non-numeric values are dropped.
    Number,
    /// Split on `,` and coerce each piece.
    Array,
    /// Decode `key=val;...` and deep-merge across occurrences.
    Object,
    /// Append every occurrence to a list.
    Collector,
}

impl OptionKind {
    pub const ALL: [OptionKind; 6] = [
        Self::Normal,
        Self::Boolean,
        Self::Number,
        Self::Array,
        Self::Object,
        Self::Collector,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::Array => "array",
            Self::Object => "object",
            Self::Collector => "collector",
        }
    }

    /// Look up a kind by its exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == name)
    }
}

impl From<String> for OptionKind {
    /// Unknown names behave like `normal`.
    fn from(name: String) -> Self {
        Self::from_name(&name).unwrap_or_default()
    }
}

/// One alias or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Aliases {
    One(String),
    Many(Vec<String>),
}

impl Aliases {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(alias) => vec![alias],
            Self::Many(aliases) => aliases,
        }
    }
}

/// A partially filled schema record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<OptionKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Aliases>,
}

/// A schema entry as supplied by the caller.
///
/// In JSON this is a bare label string, a record, or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawOption {
    Label(String),
    Record(OptionRecord),
    Empty,
}

impl RawOption {
    /// Fill in defaults. Entries without a non-empty label yield `None`.
    pub fn normalize(&self) -> Option<OptionSpec> {
        let record = match self {
            Self::Label(label) => OptionRecord {
                label: Some(label.clone()),
                ..Default::default()
            },
            Self::Record(record) => record.clone(),
            Self::Empty => return None,
        };

        let label = record.label.filter(|l| !l.is_empty())?;
        Some(OptionSpec {
            label,
            kind: record.kind.unwrap_or_default(),
            aliases: record.aliases.map(Aliases::into_vec).unwrap_or_default(),
        })
    }
}

impl From<&str> for RawOption {
    fn from(label: &str) -> Self {
        Self::Label(label.to_string())
    }
}

impl From<String> for RawOption {
    fn from(label: String) -> Self {
        Self::Label(label)
    }
}

impl From<OptionRecord> for RawOption {
    fn from(record: OptionRecord) -> Self {
        Self::Record(record)
    }
}

impl From<OptionSpec> for RawOption {
    fn from(spec: OptionSpec) -> Self {
        Self::Record(OptionRecord {
            label: Some(spec.label),
            kind: Some(spec.kind),
            aliases: Some(Aliases::Many(spec.aliases)),
        })
    }
}

/// A fully populated schema entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSpec {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: OptionKind,
    pub aliases: Vec<String>,
}

impl OptionSpec {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: OptionKind::Normal,
            aliases: Vec::new(),
        }
    }

    pub fn kind(mut self, kind: OptionKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Whether `raw` names this option by label or alias.
    pub fn matches(&self, raw: &str) -> bool {
        self.label == raw || self.aliases.iter().any(|a| a == raw)
    }
}

/// Normalized, ordered option schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schema {
    options: Vec<OptionSpec>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize caller entries, dropping the ones without a label.
    pub fn normalize(entries: &[RawOption]) -> Self {
        let options = entries
            .iter()
            .filter_map(|entry| {
                let spec = entry.normalize();
                if spec.is_none() {
                    tracing::debug!(?entry, "dropping schema entry without a label");
                }
                spec
            })
            .collect();
        Self { options }
    }

    /// Append an entry (builder style). Entries without a label are ignored.
    pub fn option(mut self, entry: impl Into<RawOption>) -> Self {
        if let Some(spec) = entry.into().normalize() {
            self.options.push(spec);
        }
        self
    }

    pub fn options(&self) -> &[OptionSpec] {
        self.options.as_slice()
    }

    /// Find the first entry whose label or alias equals `raw`.
    pub fn resolve(&self, raw: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|spec| spec.matches(raw))
    }
}
