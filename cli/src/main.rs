mod cli;
mod commands;

use anyhow::{Context, Result};
use cli::{Cli, Commands};
use commands::{download, run};
use euromap::PipelineConfig;
use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber; `RUST_LOG` wins over the `-v` count.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Config file (or defaults) with command-line overrides applied.
fn resolve_config(cli: &Cli) -> Result<PipelineConfig> {
    let mut config = match &cli.config {
        Some(path) => PipelineConfig::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PipelineConfig::default(),
    };
    if let Some(cache) = &cli.cache {
        config.cache_dir = cache.clone();
    }
    Ok(config)
}

pub fn main() -> Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = resolve_config(&cli)?;

    match &cli.command {
        Commands::Download => download::run(&config),
        Commands::Run(args) => run::run(&config, args),
    }
}
