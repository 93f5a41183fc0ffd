//! CLI parse: clap types for prefdir. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// prefdir - merged JSON settings from a directory
#[derive(Parser)]
#[command(name = "prefdir")]
#[command(about = "Merge a directory of JSON settings files and read the result")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root (config files and relative settings directories resolve against it)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Settings directory (overrides configuration)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Settings file extension without the dot (overrides configuration)
    #[arg(long)]
    pub extension: Option<String>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every setting as {key=value, ...}
    Show,
    /// Read one setting (volatile settings reload the directory first)
    Get {
        key: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List settings with their volatility
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show discovery and load counters
    Meta {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Force a full reload of the directory
    Refresh {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
