//! # Passfill Core
//!
//! Autofill field classification over host-supplied screen structure trees.
//!
//! A host reads its live screen into a [`Node`] tree, hands the root to
//! [`NodeTraversal::traverse`] and receives a [`TraversalResult`]: the ordered
//! list of classified fields plus the page url. Once the user picks an
//! [`AutofillItem`], [`fill::map_fields`] turns it back into per-field values.
//!
//! ## Classification order
//!
//! Each eligible node runs through the [`Classifier`] strategies in a fixed
//! order and the first verdict wins:
//! 1. Explicit autofill hints declared by the host
//! 2. Declared input-type flags
//! 3. HTML `type` attribute (web content)
//! 4. Visible text against the keyword table
//!
//! Nothing in this crate performs I/O or fails on unexpected tree shapes.

pub mod classifier;
mod error;
pub mod field_type;
pub mod fill;
pub mod node;
pub mod result;
pub mod traversal;

pub use classifier::{
    ClassificationStrategy, Classifier, ClassifierBuilder, ExplicitHintStrategy,
    HtmlAttributeStrategy, InputTypeStrategy, KeywordStrategy, KeywordTable,
};
pub use error::CoreError;
pub use field_type::{ClassifiedField, FieldType};
pub use fill::{AutofillItem, FillAssignment, FillResponse};
pub use node::{FieldValue, InputTypeHint, Node, NodeId};
pub use result::TraversalResult;
pub use traversal::NodeTraversal;
