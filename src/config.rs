//! Command line and environment configuration.

use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Environment variable naming the log4rs config file.
pub const LOG_CONFIG_ENV: &str = "SUBNET_MERGE_LOG_CONFIG";
const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Merge adjacent IPv4 networks into their parent networks.
#[derive(Parser, Debug)]
#[command(
    version,
    after_help = "FILE must be a sorted list of IP networks. One network each line.\nThe merged list of IP networks will be printed to stdout."
)]
pub struct Cli {
    /// Sorted list of IPv4 networks, one per line
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print a merge summary to stderr
    #[arg(short, long)]
    pub stats: bool,
}

/// Settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub stats: bool,
    pub log_config: PathBuf,
}

impl Config {
    /// Combine parsed arguments with the environment.
    ///
    /// Call `dotenv::dotenv()` first so values from `.env` are visible.
    pub fn from_cli(cli: Cli) -> Config {
        let log_config = std::env::var(LOG_CONFIG_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_string());

        Config {
            input: cli.file,
            format: cli.format,
            stats: cli.stats,
            log_config: PathBuf::from(log_config),
        }
    }
}
