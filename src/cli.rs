use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "link-audit")]
#[command(author, version, about = "Report broken local href/src references in static HTML trees")]
#[command(long_about = "Scans a directory tree for HTML files and reports local href/src \
    references that resolve to nonexistent files. External URLs, protocol links \
    (mailto:, tel:, ...) and in-page anchors are ignored.\n\n\
    Exit codes:\n  \
    0 - Scan completed (missing links are reported, not treated as failure)\n  \
    2 - Runtime error (invalid root, unreadable file, bad pattern)")]
pub struct Cli {
    /// Root directory defining the scope of local resolution
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// File extensions to scan (comma-separated)
    #[arg(long, value_delimiter = ',', default_value = "html")]
    pub ext: Vec<String>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Honor .gitignore files during the directory walk
    #[arg(long)]
    pub gitignore: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
