//! CLI argument parsing for slor
//!
//! Global flags: --root, --store, --catalog, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod combine;
pub mod format;
pub mod output;
pub mod paths;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use combine::CombineCommands;
pub use output::OutputFormat;

/// Slor - select, combine and tag-filter SLOs
#[derive(Parser, Debug)]
#[command(name = "slor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the store
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit store root path
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Catalog file or directory (defaults to the store's catalog dir)
    #[arg(long, global = true, env = "SLOR_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_parser = output::output_format_parser(), default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `info`, `slor_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new slor store
    Init,

    /// List catalog SLOs, marking the combined ones
    List {
        /// Only show SLOs carrying this tag (key=value, repeatable)
        #[arg(long, short, action = clap::ArgAction::Append)]
        tag: Vec<String>,
    },

    /// List the distinct tags across the catalog
    Tags,

    /// Show or change the combined selection
    Combine {
        #[command(subcommand)]
        command: CombineCommands,
    },
}
