//! Field classification.
//!
//! A [`Classifier`] runs its strategies in a fixed priority order and stops at
//! the first one that returns a verdict:
//!
//! 1. [`ExplicitHintStrategy`] - hints the host declared on the node
//! 2. [`InputTypeStrategy`] - declared input-type flags
//! 3. [`HtmlAttributeStrategy`] - `type` attribute of web elements
//! 4. [`KeywordStrategy`] - visible text against a keyword table
//!
//! When every strategy falls through the node is [`FieldType::Unknown`].

mod explicit_hint;
mod html_attribute;
mod input_type;
mod keyword;

pub use explicit_hint::ExplicitHintStrategy;
pub use html_attribute::HtmlAttributeStrategy;
pub use input_type::InputTypeStrategy;
pub use keyword::{KeywordStrategy, KeywordTable};

use crate::field_type::FieldType;
use crate::node::Node;

/// One independent signal-inspection procedure.
pub trait ClassificationStrategy: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Verdict for `node`, or `None` to let the next strategy decide.
    fn classify(&self, node: &Node) -> Option<FieldType>;
}

/// Ordered set of strategies producing one verdict per node.
pub struct Classifier {
    strategies: Vec<Box<dyn ClassificationStrategy>>,
}

impl Classifier {
    pub fn builder() -> ClassifierBuilder {
        ClassifierBuilder::new()
    }

    /// Build a classifier from an explicit strategy list, consulted in order.
    pub fn with_strategies(strategies: Vec<Box<dyn ClassificationStrategy>>) -> Self {
        Self { strategies }
    }

    /// Names of the installed strategies, in consultation order.
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Classify a single node.
    pub fn classify(&self, node: &Node) -> FieldType {
        self.classify_with_source(node)
            .map(|(field_type, _)| field_type)
            .unwrap_or(FieldType::Unknown)
    }

    /// Verdict together with the name of the strategy that produced it.
    pub fn classify_with_source(&self, node: &Node) -> Option<(FieldType, &'static str)> {
        self.strategies
            .iter()
            .find_map(|strategy| strategy.classify(node).map(|t| (t, strategy.name())))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        ClassifierBuilder::new().build()
    }
}

impl std::fmt::Debug for Classifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifier")
            .field("strategies", &self.strategy_names())
            .finish()
    }
}

/// Builder for [`Classifier`] with the built-in strategy order.
pub struct ClassifierBuilder {
    extra_hints: Vec<(String, FieldType)>,
    keywords: Option<KeywordTable>,
    keyword_stage: bool,
}

impl ClassifierBuilder {
    pub fn new() -> Self {
        Self {
            extra_hints: Vec::new(),
            keywords: None,
            keyword_stage: true,
        }
    }

    /// Map an additional explicit hint. Built-in hints are consulted first.
    pub fn hint(mut self, hint: impl Into<String>, field_type: FieldType) -> Self {
        self.extra_hints.push((hint.into(), field_type));
        self
    }

    /// Replace the built-in keyword table.
    pub fn keywords(mut self, table: KeywordTable) -> Self {
        self.keywords = Some(table);
        self
    }

    /// Enable or disable the text keyword stage.
    pub fn keyword_stage(mut self, enabled: bool) -> Self {
        self.keyword_stage = enabled;
        self
    }

    pub fn build(self) -> Classifier {
        let mut hints = ExplicitHintStrategy::default();
        for (hint, field_type) in self.extra_hints {
            hints.add(&hint, field_type);
        }

        let mut strategies: Vec<Box<dyn ClassificationStrategy>> = vec![
            Box::new(hints),
            Box::new(InputTypeStrategy),
            Box::new(HtmlAttributeStrategy),
        ];
        if self.keyword_stage {
            let table = self.keywords.unwrap_or_default();
            strategies.push(Box::new(KeywordStrategy::new(table)));
        }

        Classifier { strategies }
    }
}

impl Default for ClassifierBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase and drop everything that is not alphanumeric.
pub(crate) fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
