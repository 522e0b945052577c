//! Depth-first traversal turning a node tree into a [`TraversalResult`].

use tracing::{debug, trace};

use crate::classifier::Classifier;
use crate::field_type::ClassifiedField;
use crate::node::Node;
use crate::result::TraversalResult;

/// Pending node on the explicit traversal stack.
struct Frame<'a> {
    node: &'a Node,
    depth: usize,
    /// An ancestor already carried a url; this node's own url is ignored.
    ancestor_has_url: bool,
}

/// Url candidate seen so far.
struct UrlCandidate<'a> {
    url: &'a str,
    depth: usize,
}

/// Walks a node tree pre-order and classifies every eligible node.
///
/// The walk uses an explicit stack, so tree depth is bounded by memory rather
/// than by the call stack.
#[derive(Debug, Default)]
pub struct NodeTraversal {
    classifier: Classifier,
}

impl NodeTraversal {
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Traverse the tree rooted at `root`.
    ///
    /// Url resolution: a node's url is only a candidate when none of its
    /// ancestors carries one. Among candidates the shallowest wins and equal
    /// depths resolve to the first one in pre-order.
    pub fn traverse(&self, root: &Node) -> TraversalResult {
        let mut fields = Vec::new();
        let mut visited = 0usize;
        let mut resolved: Option<UrlCandidate<'_>> = None;

        let mut stack = vec![Frame {
            node: root,
            depth: 0,
            ancestor_has_url: false,
        }];

        while let Some(Frame {
            node,
            depth,
            ancestor_has_url,
        }) = stack.pop()
        {
            visited += 1;

            let own_url = node.own_url();
            if let (false, Some(url)) = (ancestor_has_url, own_url) {
                let shallower = resolved.as_ref().is_none_or(|c| depth < c.depth);
                if shallower {
                    resolved = Some(UrlCandidate { url, depth });
                }
            }

            if let (Some(id), true) = (&node.id, node.is_important) {
                let field_type = self.classifier.classify(node);
                trace!(field_id = %id, %field_type, depth, "Classified node");
                fields.push(ClassifiedField::new(id.clone(), field_type));
            }

            let carries_url = ancestor_has_url || own_url.is_some();
            stack.extend(node.children.iter().rev().map(|child| Frame {
                node: child,
                depth: depth + 1,
                ancestor_has_url: carries_url,
            }));
        }

        let url = resolved.map(|c| c.url.to_string());
        debug!(
            visited,
            fields = fields.len(),
            url = url.as_deref().unwrap_or("-"),
            "Traversal finished"
        );

        TraversalResult {
            fields,
            url,
            visited_node_count: visited,
        }
    }
}

#[cfg(test)]
#[path = "traversal_tests.rs"]
mod tests;
