//! Passfill - autofill field classification
//!
//! Entry point for the passfill CLI.

mod cli;
mod cmd_config;
mod cmd_fill;
mod cmd_scan;
mod render;

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use passfill_config::{
    default_config_path, Config, ConfigLoader, ConfigValidator, LoggingConfig,
};
use passfill_core::{Node, NodeTraversal};

use crate::cli::{Cli, Commands};

/// Initialize tracing with stderr and optional file output.
///
/// Log files are written to the configured directory with daily rotation.
fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let file_layer = if logging.file {
        let log_dir = logging.log_directory();
        std::fs::create_dir_all(&log_dir)?;

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("passfill")
            .filename_suffix("log")
            .max_log_files(14)
            .build(&log_dir)?;

        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // The guard flushes on drop, so it has to live for the whole program.
        static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
            std::sync::OnceLock::new();
        let _ = GUARD.set(guard);

        Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
    } else {
        None
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    // stdout carries command output; logs go to stderr.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    Ok(())
}

/// Load the configuration named on the command line, or the default one.
fn load_config(path: Option<&Path>) -> Result<(Config, PathBuf), Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok((ConfigLoader::load(path)?, path.to_path_buf())),
        None => {
            let path = default_config_path();
            Ok((ConfigLoader::load_or_default(&path)?, path))
        }
    }
}

/// Read and parse a node tree dump.
pub(crate) async fn load_tree(path: &Path) -> Result<Node, Box<dyn std::error::Error>> {
    let json = tokio::fs::read_to_string(path).await?;
    let tree = Node::from_json(&json)?;
    debug!(path = %path.display(), nodes = tree.count(), "Loaded node tree");
    Ok(tree)
}

/// Validate the classifier section and build a traversal from it.
pub(crate) fn build_traversal(config: &Config) -> Result<NodeTraversal, Box<dyn std::error::Error>> {
    let validation = ConfigValidator::validate(config)?;
    for warning in &validation.warnings {
        warn!("Config warning at {}: {}", warning.path, warning.message);
    }
    validation.into_result()?;

    let traversal = NodeTraversal::new(config.classifier.build_classifier());
    debug!(strategies = ?traversal.classifier().strategy_names(), "Classifier ready");
    Ok(traversal)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let (config, config_path) = load_config(cli.config.as_deref())?;
    init_tracing(&config.logging)?;
    info!("passfill v{}", env!("CARGO_PKG_VERSION"));
    debug!(config = %config_path.display(), "Configuration loaded");

    match cli.command {
        Commands::Scan {
            tree,
            format,
            known_only,
        } => cmd_scan::scan(&config, &tree, format, known_only).await,
        Commands::ScanDir { dir, format, jobs } => {
            cmd_scan::scan_dir(&config, &dir, format, usize::from(jobs)).await
        }
        Commands::Fill { tree, item } => cmd_fill::fill(&config, &tree, &item).await,
        Commands::Config { action } => cmd_config::handle_config_command(action, &config, &config_path),
    }
}
