mod config;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{load_config, load_defaults, parse_option_spec};

#[derive(Parser)]
#[command(name = "rawrgs")]
#[command(
    version,
    about = "Parse tokens against an option schema and print the result as JSON",
    long_about = None
)]
struct Cli {
    /// Path to the parser config (default: ./rawrgs.json if present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Extra option entry: LABEL or LABEL:TYPE[:ALIAS,...]
    #[arg(short = 'O', long = "option", value_name = "SPEC")]
    options: Vec<String>,

    /// JSON object with default values (overrides the config's defaults)
    #[arg(short, long, value_name = "FILE")]
    defaults: Option<PathBuf>,

    /// Pretty-print the JSON result
    #[arg(long)]
    pretty: bool,

    /// Tokens to parse, given after `--`
    #[arg(last = true, value_name = "TOKENS")]
    tokens: Vec<String>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    tracing::debug!("executing parse command");

    let mut config = load_config(cli.config.as_deref())?.unwrap_or_default();

    for spec in &cli.options {
        let entry = parse_option_spec(spec)
            .with_context(|| format!("invalid --option value: {spec}"))?;
        config.options.push(entry);
    }

    if let Some(path) = &cli.defaults {
        config.defaults = load_defaults(path)?;
    }

    let parsed = rawrgs::parse(&config.options, config.defaults, cli.tokens);

    let json = if cli.pretty {
        serde_json::to_string_pretty(&parsed)
    } else {
        serde_json::to_string(&parsed)
    }
    .context("failed to serialize parse result")?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("failed to write parse result")?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
