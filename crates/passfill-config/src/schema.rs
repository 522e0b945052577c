//! Configuration schema definitions.

use std::path::PathBuf;

use passfill_core::{Classifier, FieldType, KeywordTable};
use serde::{Deserialize, Serialize};

use crate::loader::ConfigLoader;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub classifier: ClassifierConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Classifier tables and toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Run the text keyword stage after the markup stage.
    #[serde(default = "default_true")]
    pub keyword_stage: bool,

    /// Explicit hints appended after the built-in hint table.
    #[serde(default)]
    pub extra_hints: Vec<HintMapping>,

    /// Replacement keyword table; empty keeps the built-in one.
    #[serde(default)]
    pub keywords: Vec<KeywordGroup>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            keyword_stage: default_true(),
            extra_hints: Vec::new(),
            keywords: Vec::new(),
        }
    }
}

impl ClassifierConfig {
    /// Build a classifier from this section.
    pub fn build_classifier(&self) -> Classifier {
        let mut builder = Classifier::builder().keyword_stage(self.keyword_stage);

        for mapping in &self.extra_hints {
            builder = builder.hint(mapping.hint.clone(), mapping.field_type);
        }

        if !self.keywords.is_empty() {
            let table = self
                .keywords
                .iter()
                .fold(KeywordTable::new(), |table, group| {
                    table.group(group.field_type, &group.keywords)
                });
            builder = builder.keywords(table);
        }

        builder.build()
    }
}

/// One extra explicit hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintMapping {
    pub hint: String,
    pub field_type: FieldType,
}

/// Keywords for one field type, consulted in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordGroup {
    pub field_type: FieldType,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    /// Write a daily-rolling log file next to console output.
    #[serde(default = "default_true")]
    pub file: bool,

    /// Log directory; defaults to `~/.passfill/logs`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: default_true(),
            directory: None,
        }
    }
}

impl LoggingConfig {
    /// Directory log files are written to, with `~` expanded.
    pub fn log_directory(&self) -> PathBuf {
        match &self.directory {
            Some(dir) => PathBuf::from(ConfigLoader::expand_path(&dir.to_string_lossy())),
            None => passfill_dir().join("logs"),
        }
    }
}

/// The `~/.passfill` directory.
pub fn passfill_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".passfill"))
        .unwrap_or_else(|| PathBuf::from(".passfill"))
}

/// Config file used when none is given on the command line.
pub fn default_config_path() -> PathBuf {
    passfill_dir().join("config.toml")
}

fn default_true() -> bool {
    true
}

fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
