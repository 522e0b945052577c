//! Fill subcommand handler.

use std::path::Path;

use tracing::info;

use passfill_config::Config;
use passfill_core::fill::map_result;
use passfill_core::AutofillItem;

use crate::{build_traversal, load_tree};

/// Traverse a tree dump, map the item onto its fields and print the assignments.
pub(crate) async fn fill(
    config: &Config,
    tree_path: &Path,
    item_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let traversal = build_traversal(config)?;
    let tree = load_tree(tree_path).await?;
    let item = load_item(item_path).await?;

    let result = traversal.traverse(&tree);
    let response = map_result(&item, &result);
    info!(
        fields = result.fields.len(),
        assignments = response.assignments.len(),
        url = result.url.as_deref().unwrap_or("-"),
        "Fill mapped"
    );

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

async fn load_item(path: &Path) -> Result<AutofillItem, Box<dyn std::error::Error>> {
    let json = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&json)?)
}
