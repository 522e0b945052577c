//! Declared input-type flags.

use crate::field_type::FieldType;
use crate::node::{InputTypeHint, Node};

use super::ClassificationStrategy;

/// Classifies nodes by the input class and variation the host declared.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputTypeStrategy;

impl InputTypeStrategy {
    /// Field type for a raw hint, if the class/variation pair is known.
    pub fn lookup(hint: InputTypeHint) -> Option<FieldType> {
        match hint.class() {
            InputTypeHint::CLASS_PHONE => Some(FieldType::Phone),
            InputTypeHint::CLASS_TEXT => match hint.variation() {
                InputTypeHint::TEXT_VARIATION_EMAIL_ADDRESS
                | InputTypeHint::TEXT_VARIATION_WEB_EMAIL_ADDRESS => Some(FieldType::Email),
                InputTypeHint::TEXT_VARIATION_PASSWORD
                | InputTypeHint::TEXT_VARIATION_VISIBLE_PASSWORD
                | InputTypeHint::TEXT_VARIATION_WEB_PASSWORD => Some(FieldType::Password),
                InputTypeHint::TEXT_VARIATION_PERSON_NAME => Some(FieldType::FullName),
                _ => None,
            },
            InputTypeHint::CLASS_NUMBER => match hint.variation() {
                InputTypeHint::NUMBER_VARIATION_PASSWORD => Some(FieldType::Password),
                _ => None,
            },
            _ => None,
        }
    }
}

impl ClassificationStrategy for InputTypeStrategy {
    fn name(&self) -> &'static str {
        "input_type"
    }

    fn classify(&self, node: &Node) -> Option<FieldType> {
        Self::lookup(node.input_type)
    }
}
