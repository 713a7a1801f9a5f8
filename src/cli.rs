//! Command-line definition.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf", about = "Load a GoodReads book dataset and query it", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (TOML, YAML or JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory containing the GoodReads files, overriding configuration
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level, used when RUST_LOG is unset
    #[arg(long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load every file and print how many entities were created
    Load,
    /// List the books of an author (case-insensitive)
    Author {
        /// Author name
        name: String,
    },
    /// Show the book with the highest average rating
    Best,
    /// Count the books tagged with a tag id
    Tag {
        /// Tag id, matched exactly
        tag_id: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}
impl LogLevel {
    pub fn as_directive(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}
