use std::path::PathBuf;

/// European country-map data pipeline (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "euromap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// JSON pipeline configuration; built-in defaults are used when omitted
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Dataset cache directory, overrides the configured one
    #[arg(long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub cache: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Download and unpack the country dataset into the cache
    Download,

    /// Run the full pipeline and write map-ready outputs
    Run(RunArgs),
}

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// Output directory, defaults to "."
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,
}
