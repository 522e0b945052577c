//! Config subcommand handlers.

use std::path::Path;

use passfill_config::{Config, ConfigValidator};

use crate::cli::ConfigAction;

/// Handle config subcommands.
pub(crate) fn handle_config_command(
    action: ConfigAction,
    config: &Config,
    config_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Validate => validate(config, config_path),
        ConfigAction::Show => {
            print!("{}", toml::to_string_pretty(config)?);
            Ok(())
        }
    }
}

fn validate(config: &Config, config_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let result = ConfigValidator::validate(config)?;

    println!("Config: {}", config_path.display());
    for error in &result.errors {
        println!("  error   {}: {}", error.path, error.message);
    }
    for warning in &result.warnings {
        println!("  warning {}: {}", warning.path, warning.message);
    }

    if result.is_valid() {
        println!("OK ({} warning(s))", result.warnings.len());
        Ok(())
    } else {
        Err(format!("{} configuration error(s)", result.errors.len()).into())
    }
}
