//! Errors raised while adapting host input into the core model.
//!
//! Classification and traversal themselves never fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid field type: {0}")]
    InvalidFieldType(String),

    #[error("Invalid node tree: {0}")]
    InvalidTree(#[from] serde_json::Error),
}
