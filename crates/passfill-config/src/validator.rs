//! Configuration validation.

use passfill_core::{ExplicitHintStrategy, FieldType};

use crate::error::ConfigError;
use crate::schema::Config;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Turn the first error into a [`ConfigError`].
    pub fn into_result(self) -> Result<Self, ConfigError> {
        match self.errors.first() {
            Some(err) => Err(ConfigError::InvalidValue {
                field: err.path.clone(),
                message: err.message.clone(),
            }),
            None => Ok(self),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_hints(config, &mut result);
        Self::validate_keywords(config, &mut result);
        Self::validate_logging(config, &mut result);

        Ok(result)
    }

    fn validate_hints(config: &Config, result: &mut ValidationResult) {
        let builtin = ExplicitHintStrategy::default();
        let mut seen = ExplicitHintStrategy::empty();

        for (i, mapping) in config.classifier.extra_hints.iter().enumerate() {
            let path = format!("classifier.extra_hints[{}]", i);

            if !mapping.hint.chars().any(char::is_alphanumeric) {
                result.add_error(ValidationError::new(
                    format!("{}.hint", path),
                    "Hint must contain at least one letter or digit",
                ));
                continue;
            }

            if mapping.field_type == FieldType::Unknown {
                result.add_error(ValidationError::new(
                    format!("{}.field_type", path),
                    "Hints cannot map to 'unknown'",
                ));
            }

            if seen.lookup(&mapping.hint).is_some() {
                result.add_error(ValidationError::new(
                    format!("{}.hint", path),
                    format!("Hint '{}' is mapped more than once", mapping.hint),
                ));
            } else if let Some(existing) = builtin.lookup(&mapping.hint) {
                result.add_warning(ValidationWarning::new(
                    format!("{}.hint", path),
                    format!(
                        "Hint '{}' is built in as '{}' and takes precedence",
                        mapping.hint, existing
                    ),
                ));
            }
            seen.add(&mapping.hint, mapping.field_type);
        }
    }

    fn validate_keywords(config: &Config, result: &mut ValidationResult) {
        let classifier = &config.classifier;

        for (i, group) in classifier.keywords.iter().enumerate() {
            let path = format!("classifier.keywords[{}]", i);

            if group.field_type == FieldType::Unknown {
                result.add_error(ValidationError::new(
                    format!("{}.field_type", path),
                    "Keyword groups cannot map to 'unknown'",
                ));
            }

            let usable = group
                .keywords
                .iter()
                .any(|k| k.chars().any(char::is_alphanumeric));
            if !usable {
                result.add_error(ValidationError::new(
                    format!("{}.keywords", path),
                    "Keyword group has no usable keywords",
                ));
            }
        }

        if !classifier.keyword_stage && !classifier.keywords.is_empty() {
            result.add_warning(ValidationWarning::new(
                "classifier.keywords",
                "Keyword table is set but keyword_stage is disabled",
            ));
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let level = config.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            result.add_warning(ValidationWarning::new(
                "logging.level",
                format!(
                    "'{}' is not a plain level ({:?}); it is passed to the filter as a directive",
                    config.logging.level, LOG_LEVELS
                ),
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
