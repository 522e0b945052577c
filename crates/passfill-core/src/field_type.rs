//! Semantic field types and classified fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::node::NodeId;

/// Semantic type of a fillable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Email,
    Username,
    Password,
    Totp,
    FullName,
    Phone,
    CardNumber,
    CardCvv,
    CardExpiration,
    CardholderName,
    Other,
    Unknown,
}

impl FieldType {
    /// Every variant, in declaration order.
    pub const ALL: [FieldType; 12] = [
        FieldType::Email,
        FieldType::Username,
        FieldType::Password,
        FieldType::Totp,
        FieldType::FullName,
        FieldType::Phone,
        FieldType::CardNumber,
        FieldType::CardCvv,
        FieldType::CardExpiration,
        FieldType::CardholderName,
        FieldType::Other,
        FieldType::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Email => "email",
            FieldType::Username => "username",
            FieldType::Password => "password",
            FieldType::Totp => "totp",
            FieldType::FullName => "full_name",
            FieldType::Phone => "phone",
            FieldType::CardNumber => "card_number",
            FieldType::CardCvv => "card_cvv",
            FieldType::CardExpiration => "card_expiration",
            FieldType::CardholderName => "cardholder_name",
            FieldType::Other => "other",
            FieldType::Unknown => "unknown",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, FieldType::Unknown)
    }
}

impl Default for FieldType {
    fn default() -> Self {
        Self::Unknown
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| CoreError::InvalidFieldType(s.to_string()))
    }
}

/// A node that the traversal classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedField {
    /// Identity of the originating node.
    pub field_id: NodeId,
    /// Verdict of the classifier, `Unknown` included.
    pub field_type: FieldType,
}

impl ClassifiedField {
    pub(crate) fn new(field_id: NodeId, field_type: FieldType) -> Self {
        Self {
            field_id,
            field_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_serde_name() {
        for field_type in FieldType::ALL {
            let json = serde_json::to_string(&field_type).unwrap();
            assert_eq!(json, format!("\"{}\"", field_type));
        }
    }

    #[test]
    fn test_from_str_accepts_any_case() {
        assert_eq!("Password".parse::<FieldType>().unwrap(), FieldType::Password);
        assert_eq!(" full_name ".parse::<FieldType>().unwrap(), FieldType::FullName);
    }

    #[test]
    fn test_from_str_rejects_unknown_name() {
        let err = "passcode".parse::<FieldType>().unwrap_err();
        assert!(err.to_string().contains("passcode"));
    }

    #[test]
    fn test_default_is_unknown() {
        assert!(FieldType::default().is_unknown());
        assert!(!FieldType::Other.is_unknown());
    }
}
