//! Scan subcommand handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::{info, warn};
use walkdir::WalkDir;

use passfill_config::Config;
use passfill_core::{NodeTraversal, TraversalResult};

use crate::cli::OutputFormat;
use crate::render::{self, FileReport};
use crate::{build_traversal, load_tree};

/// Classify one tree dump and print the result.
pub(crate) async fn scan(
    config: &Config,
    tree_path: &Path,
    format: OutputFormat,
    known_only: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let traversal = build_traversal(config)?;
    let tree = load_tree(tree_path).await?;

    let result = traversal.traverse(&tree);
    info!(
        path = %tree_path.display(),
        fields = result.fields.len(),
        visited = result.visited_node_count,
        "Scan complete"
    );

    let result = render::filtered(&result, known_only);
    match format {
        OutputFormat::Table => print!("{}", render::result_table(&result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }
    Ok(())
}

/// Classify every `*.json` dump below `dir`, reporting in path order.
pub(crate) async fn scan_dir(
    config: &Config,
    dir: &Path,
    format: OutputFormat,
    jobs: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let traversal = Arc::new(build_traversal(config)?);
    let paths = collect_dumps(dir)?;
    info!(
        "Scanning {} dump(s) under {} ({} at a time)",
        paths.len(),
        dir.display(),
        jobs
    );

    let reports = scan_paths(traversal, paths, jobs).await?;

    match format {
        OutputFormat::Table => print!("{}", render::dir_table(&reports)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }
    Ok(())
}

/// Scan `paths` with at most `jobs` dumps in flight; reports keep the order of `paths`.
async fn scan_paths(
    traversal: Arc<NodeTraversal>,
    paths: Vec<PathBuf>,
    jobs: usize,
) -> Result<Vec<FileReport>, Box<dyn std::error::Error>> {
    let semaphore = Arc::new(Semaphore::new(jobs.max(1)));

    let handles: Vec<_> = paths
        .into_iter()
        .map(|path| {
            let traversal = traversal.clone();
            let semaphore = semaphore.clone();
            tokio::spawn(async move {
                let outcome = match semaphore.acquire_owned().await {
                    Ok(_permit) => scan_one(&traversal, &path).await,
                    Err(e) => Err(format!("Semaphore error: {}", e)),
                };
                (path, outcome)
            })
        })
        .collect();

    let mut reports = Vec::with_capacity(handles.len());
    for handle in handles {
        let (path, outcome) = handle.await?;
        let path = path.display().to_string();
        let report = match outcome {
            Ok(result) => FileReport {
                path,
                result: Some(result),
                error: None,
            },
            Err(error) => {
                warn!("Failed to scan {}: {}", path, error);
                FileReport {
                    path,
                    result: None,
                    error: Some(error),
                }
            }
        };
        reports.push(report);
    }
    Ok(reports)
}

async fn scan_one(
    traversal: &Arc<NodeTraversal>,
    path: &Path,
) -> Result<TraversalResult, String> {
    let tree = load_tree(path).await.map_err(|e| e.to_string())?;
    let traversal = traversal.clone();
    tokio::task::spawn_blocking(move || traversal.traverse(&tree))
        .await
        .map_err(|e| e.to_string())
}

/// All `*.json` files below `dir`, sorted by path.
fn collect_dumps(dir: &Path) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        let is_json = entry
            .path()
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if entry.file_type().is_file() && is_json {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_collect_dumps_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("a.JSON"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::write(dir.path().join("nested").join("c.json"), "{}").unwrap();

        let names: Vec<_> = collect_dumps(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.JSON", "b.json", "nested/c.json"]);
    }

    #[test]
    fn test_collect_dumps_missing_dir() {
        assert!(collect_dumps(Path::new("/nonexistent/passfill/dumps")).is_err());
    }

    #[tokio::test]
    async fn test_scan_one_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{").unwrap();

        let traversal = Arc::new(NodeTraversal::default());
        let err = scan_one(&traversal, &path).await.unwrap_err();
        assert!(err.contains("Invalid node tree"));
    }

    #[tokio::test]
    async fn test_scan_paths_with_one_job_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut paths = Vec::new();
        for (name, body) in [
            ("a.json", r#"{"url": "a.example"}"#),
            ("b.json", "{"),
            ("c.json", r#"{"children": [{}, {}]}"#),
        ] {
            let path = dir.path().join(name);
            fs::write(&path, body).unwrap();
            paths.push(path);
        }

        let traversal = Arc::new(NodeTraversal::default());
        let reports = scan_paths(traversal, paths.clone(), 1).await.unwrap();

        let names: Vec<_> = reports.iter().map(|r| r.path.clone()).collect();
        let expected: Vec<_> = paths.iter().map(|p| p.display().to_string()).collect();
        assert_eq!(names, expected);
        assert_eq!(reports[0].result.as_ref().unwrap().url.as_deref(), Some("a.example"));
        assert!(reports[1].error.is_some());
        assert_eq!(reports[2].result.as_ref().unwrap().visited_node_count, 3);
    }

    #[tokio::test]
    async fn test_scan_paths_zero_jobs_still_progresses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("only.json");
        fs::write(&path, "{}").unwrap();

        let traversal = Arc::new(NodeTraversal::default());
        let reports = scan_paths(traversal, vec![path], 0).await.unwrap();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].error.is_none());
    }

    #[tokio::test]
    async fn test_scan_one_classifies_dump() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("login.json");
        fs::write(
            &path,
            r#"{"url": "a.example", "children": [{"id": "p", "isImportant": true, "autofillHints": ["password"]}]}"#,
        )
        .unwrap();

        let traversal = Arc::new(NodeTraversal::default());
        let result = scan_one(&traversal, &path).await.unwrap();
        assert_eq!(result.url.as_deref(), Some("a.example"));
        assert_eq!(result.fields.len(), 1);
        assert_eq!(result.visited_node_count, 2);
    }
}
