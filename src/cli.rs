//! CLI definitions for passfill.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Passfill CLI.
#[derive(Parser)]
#[command(name = "passfill")]
#[command(about = "Classify autofill fields in screen structure dumps")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (default: ~/.passfill/config.toml)
    #[arg(short, long, env = "PASSFILL_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Classify the fields of one node tree dump
    Scan {
        /// Path to the JSON node tree
        tree: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Hide fields classified as unknown
        #[arg(long)]
        known_only: bool,
    },

    /// Classify every `*.json` dump under a directory
    ScanDir {
        /// Directory to search recursively
        dir: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Maximum number of dumps read and classified at once
        #[arg(short, long, default_value_t = 8, value_parser = clap::value_parser!(u16).range(1..))]
        jobs: u16,
    },

    /// Map an autofill item onto the fields of a node tree dump
    Fill {
        /// Path to the JSON node tree
        tree: PathBuf,

        /// Path to the JSON autofill item
        item: PathBuf,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Validate the configuration file
    Validate,

    /// Print the effective configuration as TOML
    Show,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Json,
}
