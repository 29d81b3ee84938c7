//! Command-line interface for ndd
//!
//! Loads a store from `--file`, the process environment and `--set`
//! overrides, then prints the value a lookup subcommand asks for.

use anyhow::{Context, Result};
use clap::Parser;
use ndd::ConfigStore;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod lookup;
mod utils;

use lookup::Lookup;

/// Look up deployment configuration scoped by environment and locale
#[derive(Parser)]
#[command(name = "ndd")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Lookup,

    /// Config file (JSON, TOML or YAML; JSON when there is no extension)
    #[arg(short, long, global = true, env = "NDD_CONFIG", default_value = "config.json")]
    file: PathBuf,

    /// Override a key for this run, highest precedence (nested keys use ':')
    #[arg(short, long = "set", value_name = "KEY=VALUE", global = true)]
    set: Vec<String>,

    /// Split environment variable names on this separator to address nested keys
    #[arg(long, value_name = "SEP", global = true)]
    env_separator: Option<String>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let overrides =
        cli.set.iter().map(String::as_str).map(utils::override_arg).collect::<Result<Vec<String>>>()?;

    let mut builder = ConfigStore::builder()
        .args(overrides)
        .envs(ndd::sources::env::process_vars())
        .file(&cli.file);
    if let Some(sep) = &cli.env_separator {
        builder = builder.env_separator(sep.as_str());
    }
    let store = builder
        .build()
        .with_context(|| format!("Failed to load configuration from {}", cli.file.display()))?;

    let value = lookup::run(&store, &cli.command)?;
    println!("{}", utils::render(&value)?);
    Ok(())
}
