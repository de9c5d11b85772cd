//! CLI argument parsing for pscan

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pscan")]
#[command(author, version, about = "Discover and group template partial directories", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Root directory to scan (overrides config)
    pub root: Option<PathBuf>,

    /// Extra directories admitted as-is, bypassing classification
    #[arg(short, long = "extra")]
    pub extra_roots: Vec<PathBuf>,

    /// Basenames to exclude from link-discovered directories
    #[arg(short, long = "ignore")]
    pub ignore: Vec<String>,

    /// Only classify these basenames at the root
    #[arg(short, long = "allow")]
    pub allow: Vec<String>,

    /// Template file extension, without the dot
    #[arg(long)]
    pub extension: Option<String>,

    /// Emit JSON instead of human-readable output
    #[arg(long)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}
