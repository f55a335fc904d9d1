//! Inspect command handler: prints the details panel for a single resource

use sitegraph::config::Config;
use sitegraph::core::models::ResourceGraph;
use sitegraph::core::view::{DetailsPanel, GraphView, LEARN_MORE_LABEL, RELATED_HEADING};
use sitegraph::{error, info};
use std::fmt::Write;
use std::path::Path;

/// Run the inspect command. Returns `false` on failure.
pub fn run(id: &str, input_file: Option<&Path>, config: &Config) -> bool {
    match inspect(id, input_file, config) {
        Ok(text) => {
            print!("{text}");
            true
        }
        Err(err) => {
            error!("Inspect failed: {err}");
            eprintln!("{err}");
            false
        }
    }
}

fn inspect(id: &str, input_file: Option<&Path>, config: &Config) -> Result<String, String> {
    let input_file = super::resolve_data_file(input_file, config)?;
    let graph = ResourceGraph::load(&input_file)
        .map_err(|e| format!("✗ Failed to load {}: {e}", input_file.display()))?;
    info!("Resource graph loaded: {}", input_file.display());

    let view = GraphView::new(graph);
    let panel = view
        .details_for(id)
        .ok_or_else(|| format!("✗ No resource with id '{id}'"))?;
    Ok(format_panel(&panel))
}

/// Plain-text rendition of the details panel
fn format_panel(panel: &DetailsPanel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n=== {} ===", panel.title);
    if let Some(byline) = &panel.byline {
        let _ = writeln!(out, "{byline}");
    }
    if let Some(description) = &panel.description {
        let _ = writeln!(out, "\n{description}");
    }
    if let Some(url) = &panel.url {
        let _ = writeln!(out, "\n{LEARN_MORE_LABEL} {url}");
    }
    if panel.has_related() {
        let _ = writeln!(out, "\n{RELATED_HEADING}:");
        for item in &panel.related {
            match &item.byline {
                Some(byline) => {
                    let _ = writeln!(out, "  - {} [{}] {byline}", item.title, item.id);
                }
                None => {
                    let _ = writeln!(out, "  - {} [{}]", item.title, item.id);
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const DATA: &str = r#"{
        "nodes": [
            {"id": "ml", "title": "Machine Learning", "description": "Intro texts", "url": "https://example.com/ml"},
            {"id": "islr", "title": "ISLR", "author": "James et al."},
            {"id": "esl", "title": "ESL"}
        ],
        "links": [
            {"source": "ml", "target": "islr", "type": "parent"},
            {"source": "ml", "target": "esl", "type": "related"}
        ]
    }"#;

    #[test]
    fn test_inspect_lists_parent_children_only() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("reading.json");
        fs::write(&path, DATA).expect("write data");

        let text = inspect("ml", Some(&path), &Config::from_defaults()).expect("inspect");
        assert!(text.contains("=== Machine Learning ==="));
        assert!(text.contains("Intro texts"));
        assert!(text.contains("Learn more → https://example.com/ml"));
        assert!(text.contains("Related Items:"));
        assert!(text.contains("ISLR [islr] by James et al."));
        assert!(!text.contains("ESL"));
    }

    #[test]
    fn test_inspect_leaf_has_no_related_section() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("reading.json");
        fs::write(&path, DATA).expect("write data");

        let text = inspect("islr", Some(&path), &Config::from_defaults()).expect("inspect");
        assert!(text.contains("by James et al."));
        assert!(!text.contains("Related Items"));
        assert!(!text.contains("Learn more"));
    }

    #[test]
    fn test_inspect_unknown_id() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("reading.json");
        fs::write(&path, DATA).expect("write data");

        let err = inspect("nope", Some(&path), &Config::from_defaults()).expect_err("unknown");
        assert!(err.contains("No resource with id 'nope'"));
    }
}
