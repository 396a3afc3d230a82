//! CLI argument definitions using clap.
//!
//! pocheck has a single command: scan one or more gettext catalogs and print
//! every empty `msgstr` that is not the header entry. Without `PATHS` the
//! catalogs listed in `.pocheckrc.json` (or the built-in default) are used.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Catalog files, directories or glob patterns to scan (overrides config file)
    pub paths: Vec<String>,

    /// Configuration file to use instead of searching for .pocheckrc.json
    #[arg(long, env = "POCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit with status 1 when missing translations are found
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `Line <n>: ...` blocks with `Context:` lines
    #[default]
    Text,
    /// A JSON array with one object per catalog
    Json,
}
