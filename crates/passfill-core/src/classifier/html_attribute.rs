//! HTML `type` attribute of web-rendered nodes.

use crate::field_type::FieldType;
use crate::node::Node;

use super::ClassificationStrategy;

/// Classifies web nodes by their first `type` attribute.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlAttributeStrategy;

impl HtmlAttributeStrategy {
    pub fn lookup(type_value: &str) -> Option<FieldType> {
        match type_value.trim().to_ascii_lowercase().as_str() {
            "tel" => Some(FieldType::Phone),
            "email" => Some(FieldType::Email),
            "password" => Some(FieldType::Password),
            "text" => Some(FieldType::Other),
            _ => None,
        }
    }
}

impl ClassificationStrategy for HtmlAttributeStrategy {
    fn name(&self) -> &'static str {
        "html_attribute"
    }

    fn classify(&self, node: &Node) -> Option<FieldType> {
        node.html_attributes
            .iter()
            .find(|(key, _)| key.trim().eq_ignore_ascii_case("type"))
            .and_then(|(_, value)| Self::lookup(value))
    }
}
