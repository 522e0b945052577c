use super::*;
use crate::classifier::KeywordTable;
use crate::field_type::FieldType;
use crate::node::{InputTypeHint, NodeId};

fn field(id: &str) -> Node {
    Node::new().with_id(id).important(true)
}

fn email_input() -> InputTypeHint {
    InputTypeHint::of(
        InputTypeHint::CLASS_TEXT,
        InputTypeHint::TEXT_VARIATION_EMAIL_ADDRESS,
    )
}

fn ids(result: &TraversalResult) -> Vec<&str> {
    result.fields.iter().map(|f| f.field_id.as_str()).collect()
}

#[test]
fn test_single_email_node() {
    let root = field("email").with_input_type(email_input());
    let result = NodeTraversal::default().traverse(&root);

    assert_eq!(
        result.fields,
        vec![ClassifiedField::new(NodeId::new("email"), FieldType::Email)]
    );
    assert_eq!(result.url, None);
    assert_eq!(result.visited_node_count, 1);
}

#[test]
fn test_fields_in_pre_order() {
    let root = Node::new()
        .with_child(
            Node::new()
                .with_child(field("a").with_hint("username"))
                .with_child(field("b").with_hint("password")),
        )
        .with_child(field("c").with_hint("phone"))
        .with_child(Node::new().with_child(field("d")));

    let result = NodeTraversal::default().traverse(&root);
    assert_eq!(ids(&result), vec!["a", "b", "c", "d"]);
    assert_eq!(result.fields[3].field_type, FieldType::Unknown);
    assert_eq!(result.visited_node_count, 7);
}

#[test]
fn test_parent_fields_come_before_children() {
    let root = field("outer").with_child(field("inner"));
    let result = NodeTraversal::default().traverse(&root);
    assert_eq!(ids(&result), vec!["outer", "inner"]);
}

#[test]
fn test_unimportant_node_excluded_but_counted() {
    let root = Node::new()
        .with_child(Node::new().with_id("skip").with_hint("password"))
        .with_child(field("keep").with_hint("username"));
    let result = NodeTraversal::default().traverse(&root);
    assert_eq!(ids(&result), vec!["keep"]);
    assert_eq!(result.visited_node_count, 3);
}

#[test]
fn test_unimportant_node_children_still_visited() {
    let root = Node::new()
        .with_id("container")
        .with_child(field("inside").with_hint("password"));
    let result = NodeTraversal::default().traverse(&root);
    assert_eq!(ids(&result), vec!["inside"]);
}

#[test]
fn test_node_without_id_never_classified() {
    let root = Node::new().important(true).with_hint("password");
    let result = NodeTraversal::default().traverse(&root);
    assert!(result.is_empty());
    assert_eq!(result.visited_node_count, 1);
}

#[test]
fn test_ancestor_url_wins() {
    let root = Node::new()
        .with_url("a.example")
        .with_child(Node::new().with_url("b.example"));
    let result = NodeTraversal::default().traverse(&root);
    assert_eq!(result.url.as_deref(), Some("a.example"));
}

#[test]
fn test_first_sibling_url_wins() {
    let root = Node::new()
        .with_child(Node::new().with_url("x.example"))
        .with_child(Node::new().with_url("y.example"));
    let result = NodeTraversal::default().traverse(&root);
    assert_eq!(result.url.as_deref(), Some("x.example"));
}

#[test]
fn test_shallower_url_beats_earlier_deeper_one() {
    let root = Node::new()
        .with_child(Node::new().with_child(Node::new().with_url("deep.example")))
        .with_child(Node::new().with_url("shallow.example"));
    let result = NodeTraversal::default().traverse(&root);
    assert_eq!(result.url.as_deref(), Some("shallow.example"));
}

#[test]
fn test_url_without_id_still_resolves() {
    let root = Node::new().with_child(Node::new().with_url("frame.example").with_child(field("pw").with_hint("password")));
    let result = NodeTraversal::default().traverse(&root);
    assert_eq!(result.url.as_deref(), Some("frame.example"));
    assert_eq!(ids(&result), vec!["pw"]);
}

#[test]
fn test_blank_url_ignored() {
    let root = Node::new()
        .with_url("  ")
        .with_child(Node::new().with_url("real.example"));
    let result = NodeTraversal::default().traverse(&root);
    assert_eq!(result.url.as_deref(), Some("real.example"));
}

#[test]
fn test_custom_classifier_is_used() {
    let classifier = Classifier::builder()
        .keywords(KeywordTable::new().group(FieldType::Username, ["identifiant"]))
        .build();
    let traversal = NodeTraversal::new(classifier);
    let root = field("login").with_text("Identifiant");
    let result = traversal.traverse(&root);
    assert_eq!(result.fields[0].field_type, FieldType::Username);
    assert_eq!(traversal.classifier().strategy_names().len(), 4);
}

#[test]
fn test_traversal_is_idempotent() {
    let root = Node::new()
        .with_url("a.example")
        .with_child(field("u").with_hint("username"))
        .with_child(field("p").with_html_attribute("type", "password"));
    let traversal = NodeTraversal::default();
    assert_eq!(traversal.traverse(&root), traversal.traverse(&root));
}

#[test]
fn test_very_deep_tree() {
    let depth = 50_000;
    let mut node = field("leaf").with_hint("password");
    for _ in 0..depth {
        node = Node::new().with_child(node);
    }
    let root = node.with_url("deep.example");

    let result = NodeTraversal::default().traverse(&root);
    assert_eq!(result.visited_node_count, depth + 1);
    assert_eq!(ids(&result), vec!["leaf"]);
    assert_eq!(result.url.as_deref(), Some("deep.example"));
}
