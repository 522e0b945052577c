//! Aggregate output of one traversal.

use serde::{Deserialize, Serialize};

use crate::field_type::{ClassifiedField, FieldType};

/// Fields found by a traversal, the resolved page url and the visit count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalResult {
    /// Classified fields in pre-order.
    pub fields: Vec<ClassifiedField>,
    /// Resolved page url for the whole tree.
    pub url: Option<String>,
    /// Every node visited, fillable or not.
    pub visited_node_count: usize,
}

impl TraversalResult {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields of one type, in traversal order.
    pub fn fields_of(&self, field_type: FieldType) -> impl Iterator<Item = &ClassifiedField> {
        self.fields.iter().filter(move |f| f.field_type == field_type)
    }

    /// Fields whose type is anything but `Unknown`.
    pub fn known_fields(&self) -> impl Iterator<Item = &ClassifiedField> {
        self.fields.iter().filter(|f| !f.field_type.is_unknown())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeId;

    fn result() -> TraversalResult {
        TraversalResult {
            fields: vec![
                ClassifiedField::new(NodeId::new("a"), FieldType::Username),
                ClassifiedField::new(NodeId::new("b"), FieldType::Unknown),
                ClassifiedField::new(NodeId::new("c"), FieldType::Password),
                ClassifiedField::new(NodeId::new("d"), FieldType::Password),
            ],
            url: Some("a.example".to_string()),
            visited_node_count: 7,
        }
    }

    #[test]
    fn test_fields_of_keeps_order() {
        let result = result();
        let ids: Vec<_> = result
            .fields_of(FieldType::Password)
            .map(|f| f.field_id.as_str())
            .collect();
        assert_eq!(ids, vec!["c", "d"]);
    }

    #[test]
    fn test_known_fields_skips_unknown() {
        assert_eq!(result().known_fields().count(), 3);
    }

    #[test]
    fn test_default_is_empty() {
        let result = TraversalResult::default();
        assert!(result.is_empty());
        assert!(result.url.is_none());
        assert_eq!(result.visited_node_count, 0);
    }

    #[test]
    fn test_serialization_shape() {
        let json = serde_json::to_value(result()).unwrap();
        assert_eq!(json["url"], "a.example");
        assert_eq!(json["visited_node_count"], 7);
        assert_eq!(json["fields"][0]["field_id"], "a");
        assert_eq!(json["fields"][0]["field_type"], "username");
    }
}
