//! Screen structure nodes as supplied by the host.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Opaque identity of a node, as assigned by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Value currently held by a field on the host side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Text(String),
    Toggle(bool),
    List(usize),
    Date(i64),
}

/// Input-type flags declared by the host toolkit.
///
/// The low nibble holds the input class, bits `0xff0` hold the variation
/// within that class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputTypeHint(pub u32);

impl InputTypeHint {
    pub const MASK_CLASS: u32 = 0x0000_000f;
    pub const MASK_VARIATION: u32 = 0x0000_0ff0;

    pub const CLASS_TEXT: u32 = 0x01;
    pub const CLASS_NUMBER: u32 = 0x02;
    pub const CLASS_PHONE: u32 = 0x03;
    pub const CLASS_DATETIME: u32 = 0x04;

    pub const TEXT_VARIATION_EMAIL_ADDRESS: u32 = 0x20;
    pub const TEXT_VARIATION_EMAIL_SUBJECT: u32 = 0x30;
    pub const TEXT_VARIATION_PERSON_NAME: u32 = 0x60;
    pub const TEXT_VARIATION_PASSWORD: u32 = 0x80;
    pub const TEXT_VARIATION_VISIBLE_PASSWORD: u32 = 0x90;
    pub const TEXT_VARIATION_WEB_EDIT_TEXT: u32 = 0xa0;
    pub const TEXT_VARIATION_WEB_EMAIL_ADDRESS: u32 = 0xd0;
    pub const TEXT_VARIATION_WEB_PASSWORD: u32 = 0xe0;

    pub const NUMBER_VARIATION_PASSWORD: u32 = 0x10;

    pub const NONE: InputTypeHint = InputTypeHint(0);

    /// Combine a class and a variation into one hint.
    pub const fn of(class: u32, variation: u32) -> Self {
        Self((class & Self::MASK_CLASS) | (variation & Self::MASK_VARIATION))
    }

    pub fn class(&self) -> u32 {
        self.0 & Self::MASK_CLASS
    }

    pub fn variation(&self) -> u32 {
        self.0 & Self::MASK_VARIATION
    }

    pub fn is_none(&self) -> bool {
        self.0 == 0
    }
}

/// One element of the host screen structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Identity; nodes without one are never classified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<NodeId>,

    /// Toolkit class name, e.g. `android.widget.EditText`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    /// Whether the host considers this node eligible for autofill.
    #[serde(default)]
    pub is_important: bool,

    /// Visible or associated text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Value already present in the field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,

    /// Declared input-type flags.
    #[serde(default, alias = "inputTypeHint")]
    pub input_type: InputTypeHint,

    /// Explicit autofill hints, in declaration order.
    #[serde(default, alias = "explicitHints")]
    pub autofill_hints: Vec<String>,

    /// Attributes of the originating web element, in declaration order.
    #[serde(default)]
    pub html_attributes: Vec<(String, String)>,

    /// Page or frame url attached to this node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default)]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a node tree from its JSON representation.
    ///
    /// Nesting depth is unbounded; the parser grows its stack on the heap
    /// instead of hitting serde_json's recursion limit.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let mut de = serde_json::Deserializer::from_str(json);
        de.disable_recursion_limit();
        let node = Node::deserialize(serde_stacker::Deserializer::new(&mut de))?;
        de.end()?;
        Ok(node)
    }

    pub fn with_id(mut self, id: impl Into<NodeId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn important(mut self, is_important: bool) -> Self {
        self.is_important = is_important;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_value(mut self, value: FieldValue) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_input_type(mut self, input_type: InputTypeHint) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.autofill_hints.push(hint.into());
        self
    }

    pub fn with_html_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.html_attributes.push((key.into(), value.into()));
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Non-empty url of this node, if any.
    pub fn own_url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }

    /// Whether the traversal hands this node to the classifier.
    pub fn is_fillable(&self) -> bool {
        self.id.is_some() && self.is_important
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        let mut total = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            total += 1;
            stack.extend(node.children.iter());
        }
        total
    }
}

// Flatten on drop so very deep trees do not recurse through the call stack.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut child) = pending.pop() {
            pending.append(&mut child.children);
        }
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
