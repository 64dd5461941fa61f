use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;

/// Render the packages installed on a Debian system as HTML or JSON
#[derive(Parser, Debug)]
#[command(name = "dpkg-index")]
#[command(version)]
#[command(
    about = "Render the packages recorded in a dpkg status file as HTML or JSON",
    long_about = None
)]
pub struct Args {
    /// Path to the dpkg status file (defaults to the config value, then /var/lib/dpkg/status)
    #[arg(short, long, value_name = "PATH")]
    pub status: Option<PathBuf>,

    /// Output format: html or json (defaults to the config value, then html)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Render the page of a single package instead of the index
    #[arg(short, long, value_name = "NAME")]
    pub package: Option<String>,

    /// Path to a config file (defaults to ./dpkg-index.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Parses arguments, returning clap's error instead of exiting
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
