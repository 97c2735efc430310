use anyhow::{Context, Result, bail};
use rawrgs::{Aliases, Map, OptionKind, OptionRecord, RawOption};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "rawrgs.json";

/// Option schema and defaults fed to the parser.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<RawOption>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub defaults: Map,
}

/// Load the parser config.
///
/// Without an explicit path, `rawrgs.json` in the current directory is used
/// if present. A missing explicit path is an error.
pub fn load_config(config_path: Option<&Path>) -> Result<Option<ParserConfig>> {
    let cwd = std::env::current_dir().context("failed to get current directory")?;

    let (path, explicit) = match config_path {
        Some(p) => (resolve_against(&cwd, p), true),
        None => (cwd.join(DEFAULT_CONFIG_NAME), false),
    };

    if !path.exists() {
        if explicit {
            bail!("config not found: {}", path.display());
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config: ParserConfig = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse config JSON: {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        options = config.options.len(),
        "loaded parser config"
    );
    Ok(Some(config))
}

/// Load a defaults mapping from a JSON object file.
pub fn load_defaults(path: &Path) -> Result<Map> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read defaults: {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("defaults must be a JSON object: {}", path.display()))
}

/// Parse a command-line option entry: `LABEL` or `LABEL:TYPE[:ALIAS,...]`.
pub fn parse_option_spec(spec: &str) -> Result<RawOption> {
    let mut parts = spec.splitn(3, ':');
    let label = parts.next().unwrap_or_default().trim();
    if label.is_empty() {
        bail!("option entry is missing a label: '{spec}'");
    }

    let Some(kind) = parts.next() else {
        return Ok(RawOption::from(label));
    };
    let kind = kind.trim();
    let kind = if kind.is_empty() {
        OptionKind::Normal
    } else {
        OptionKind::from_name(kind).with_context(|| {
            format!(
                "unknown option type '{kind}' (expected one of: {})",
                OptionKind::ALL.map(OptionKind::as_str).join(", ")
            )
        })?
    };

    let aliases: Vec<String> = parts
        .next()
        .map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(RawOption::Record(OptionRecord {
        label: Some(label.to_string()),
        kind: Some(kind),
        aliases: Some(Aliases::Many(aliases)),
    }))
}

fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
