//! Text and JSON rendering of traversal results.

use serde::Serialize;

use passfill_core::TraversalResult;

/// Outcome of scanning one file in a directory scan.
#[derive(Debug, Serialize)]
pub(crate) struct FileReport {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<TraversalResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Drop `Unknown` fields when only known ones were requested.
pub(crate) fn filtered(result: &TraversalResult, known_only: bool) -> TraversalResult {
    if !known_only {
        return result.clone();
    }
    TraversalResult {
        fields: result.known_fields().cloned().collect(),
        url: result.url.clone(),
        visited_node_count: result.visited_node_count,
    }
}

pub(crate) fn result_table(result: &TraversalResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("URL: {}\n", result.url.as_deref().unwrap_or("-")));
    output.push_str(&format!("Visited: {} nodes\n", result.visited_node_count));

    if result.fields.is_empty() {
        output.push_str("No fields\n");
        return output;
    }

    output.push_str("Fields:\n");
    let width = result
        .fields
        .iter()
        .map(|f| f.field_id.as_str().len())
        .max()
        .unwrap_or(0);
    for (i, field) in result.fields.iter().enumerate() {
        output.push_str(&format!(
            "  [{}] {:<width$}  {}\n",
            i,
            field.field_id.as_str(),
            field.field_type,
            width = width
        ));
    }

    output
}

pub(crate) fn dir_table(reports: &[FileReport]) -> String {
    let mut output = String::new();
    for report in reports {
        match (&report.result, &report.error) {
            (Some(result), _) => {
                let known = result.known_fields().count();
                output.push_str(&format!(
                    "{}: {} fields ({} known), {} nodes, url {}\n",
                    report.path,
                    result.fields.len(),
                    known,
                    result.visited_node_count,
                    result.url.as_deref().unwrap_or("-")
                ));
            }
            (None, Some(error)) => {
                output.push_str(&format!("{}: error: {}\n", report.path, error));
            }
            (None, None) => {
                output.push_str(&format!("{}: skipped\n", report.path));
            }
        }
    }
    output
}
