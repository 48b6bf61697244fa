pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::RequestedTimestamp;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "raw-locator")]
#[command(about = "Find PSSE .raw snapshots on or closest to given timestamps")]
pub struct CliConfig {
    /// Timestamps in the form dd.mm.YYYYThh:mm
    #[arg(value_name = "DATE", required = true, num_args = 1.., value_parser = RequestedTimestamp::parse)]
    pub timestamps: Vec<RequestedTimestamp>,

    /// Copy the matches into the destination directory
    #[arg(short, long)]
    pub copy: bool,

    /// Settings file with the [global] source and destination
    #[arg(long, default_value = toml_config::DEFAULT_SETTINGS_FILE)]
    pub conf: PathBuf,

    /// Override the source directory from the settings file
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Override the destination directory from the settings file
    #[arg(long)]
    pub destination: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
