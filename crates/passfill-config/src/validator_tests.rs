use super::*;
use crate::schema::{HintMapping, KeywordGroup};

fn hint(hint: &str, field_type: FieldType) -> HintMapping {
    HintMapping {
        hint: hint.to_string(),
        field_type,
    }
}

fn group(field_type: FieldType, keywords: &[&str]) -> KeywordGroup {
    KeywordGroup {
        field_type,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

#[test]
fn test_validate_default_config() {
    let result = ConfigValidator::validate(&Config::default()).unwrap();
    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_validate_blank_hint() {
    let mut config = Config::default();
    config.classifier.extra_hints.push(hint(" - ", FieldType::Username));

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(!result.is_valid());
    assert!(result
        .errors
        .iter()
        .any(|e| e.path == "classifier.extra_hints[0].hint"));
}

#[test]
fn test_validate_hint_to_unknown() {
    let mut config = Config::default();
    config.classifier.extra_hints.push(hint("mystery", FieldType::Unknown));

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result
        .errors
        .iter()
        .any(|e| e.path == "classifier.extra_hints[0].field_type"));
}

#[test]
fn test_validate_duplicate_hint() {
    let mut config = Config::default();
    config.classifier.extra_hints.push(hint("loginId", FieldType::Username));
    config.classifier.extra_hints.push(hint("login_id", FieldType::Email));

    let result = ConfigValidator::validate(&config).unwrap();
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].path, "classifier.extra_hints[1].hint");
}

#[test]
fn test_validate_shadowed_builtin_hint_warns() {
    let mut config = Config::default();
    config.classifier.extra_hints.push(hint("Password", FieldType::Other));

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.is_valid());
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].message.contains("password"));
}

#[test]
fn test_validate_empty_keyword_group() {
    let mut config = Config::default();
    config.classifier.keywords.push(group(FieldType::Phone, &[]));
    config.classifier.keywords.push(group(FieldType::Email, &["  "]));

    let result = ConfigValidator::validate(&config).unwrap();
    assert_eq!(result.errors.len(), 2);
}

#[test]
fn test_validate_keyword_group_to_unknown() {
    let mut config = Config::default();
    config.classifier.keywords.push(group(FieldType::Unknown, &["foo"]));

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(!result.is_valid());
}

#[test]
fn test_validate_keywords_with_stage_disabled_warns() {
    let mut config = Config::default();
    config.classifier.keyword_stage = false;
    config.classifier.keywords.push(group(FieldType::Phone, &["telefon"]));

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.is_valid());
    assert!(result
        .warnings
        .iter()
        .any(|w| w.path == "classifier.keywords"));
}

#[test]
fn test_validate_log_level() {
    let mut config = Config::default();
    config.logging.level = "DEBUG".to_string();
    assert!(ConfigValidator::validate(&config).unwrap().warnings.is_empty());

    config.logging.level = "passfill_core=trace".to_string();
    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.is_valid());
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn test_into_result() {
    assert!(ValidationResult::default().into_result().is_ok());

    let mut result = ValidationResult::default();
    result.add_error(ValidationError::new("classifier.keywords[0]", "empty"));
    let err = result.into_result().unwrap_err();
    assert!(err.to_string().contains("classifier.keywords[0]"));
}

#[test]
fn test_validation_warning_new() {
    let warning = ValidationWarning::new("logging.level", "odd");
    assert_eq!(warning.path, "logging.level");
    assert_eq!(warning.message, "odd");
}
