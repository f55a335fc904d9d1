//! Menu output for navigation trees: indented text, nested HTML lists, JSON

use super::{walk, NavNode};
use askama::Template;
use std::error::Error;
use std::fmt::Write;

/// Indented outline, one entry per line: `label  path`
#[must_use]
pub fn render_text(roots: &[NavNode]) -> String {
    let mut out = String::new();
    for (depth, node) in walk(roots) {
        let indent = "  ".repeat(depth);
        match node.path {
            Some(path) => {
                let _ = writeln!(out, "{indent}{}  {path}", node.label);
            }
            None => {
                let _ = writeln!(out, "{indent}{}", node.label);
            }
        }
    }
    out
}

/// Markup element emitted for one line of the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    OpenList,
    OpenItem,
    Link,
    Label,
    CloseItem,
    CloseList,
}

/// One line of the menu; text fields are escaped by the template
struct MenuRow {
    row: Row,
    pad: String,
    class: &'static str,
    id: &'static str,
    label: &'static str,
    path: &'static str,
}

impl MenuRow {
    fn new(row: Row, pad: &str) -> Self {
        Self {
            row,
            pad: pad.to_string(),
            class: "",
            id: "",
            label: "",
            path: "",
        }
    }
}

#[derive(Template)]
#[template(path = "nav_menu.html")]
struct MenuTemplate {
    rows: Vec<MenuRow>,
}

/// Nested `<ul>` menu
///
/// Entries on the way to `current_path` get the `active` class. Sections
/// always emit their child list, even when it is empty.
///
/// # Errors
/// Returns an error if template rendering fails
pub fn render_html(roots: &[NavNode], current_path: Option<&str>) -> Result<String, Box<dyn Error>> {
    let mut rows = Vec::new();
    collect_rows(&mut rows, roots, current_path, 0, "nav-menu");
    Ok(MenuTemplate { rows }.render()?)
}

fn collect_rows(
    rows: &mut Vec<MenuRow>,
    nodes: &[NavNode],
    current: Option<&str>,
    depth: usize,
    class: &'static str,
) {
    let pad = "  ".repeat(depth * 2);
    rows.push(MenuRow {
        class,
        ..MenuRow::new(Row::OpenList, &pad)
    });

    for node in nodes {
        let active = current.is_some_and(|path| node.is_active(path));
        rows.push(MenuRow {
            class: if active { "nav-item active" } else { "nav-item" },
            id: node.id,
            ..MenuRow::new(Row::OpenItem, &pad)
        });
        rows.push(match node.path {
            Some(path) => MenuRow {
                label: node.label,
                path,
                ..MenuRow::new(Row::Link, &pad)
            },
            None => MenuRow {
                label: node.label,
                ..MenuRow::new(Row::Label, &pad)
            },
        });
        if let Some(children) = node.children {
            collect_rows(rows, children, current, depth + 1, "nav-children");
        }
        rows.push(MenuRow::new(Row::CloseItem, &pad));
    }

    rows.push(MenuRow::new(Row::CloseList, &pad));
}

/// Pretty-printed JSON, mirroring the tree shape
///
/// # Errors
/// Returns an error if serialization fails
pub fn render_json(roots: &[NavNode]) -> Result<String, Box<dyn Error>> {
    Ok(serde_json::to_string_pretty(roots)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::{BACKSTAGE_TREE, NAVIGATION_TREE};
    use std::slice;

    #[test]
    fn test_text_outline_indents_children() {
        let text = render_text(NAVIGATION_TREE);
        assert!(text.starts_with("About  /about\n"));
        assert!(text.contains("\n  Cue  /projects/cue\n"));
        assert_eq!(text.lines().count(), 8);
    }

    #[test]
    fn test_html_marks_active_trail() {
        let html = render_html(NAVIGATION_TREE, Some("/projects/cue")).unwrap();
        assert!(html.contains(r#"<li class="nav-item active" data-nav-id="projects">"#));
        assert!(html.contains(r#"<li class="nav-item active" data-nav-id="cue">"#));
        assert!(html.contains(r#"<li class="nav-item" data-nav-id="blank">"#));
        assert!(html.contains(r#"<a href="/contact">Contact</a>"#));
    }

    #[test]
    fn test_html_emits_empty_sections() {
        let html = render_html(NAVIGATION_TREE, None).unwrap();
        // projects, research, resources
        assert_eq!(html.matches("<ul class=\"nav-children\">").count(), 3);
        assert!(!html.contains("active"));
    }

    #[test]
    fn test_json_nests_backstage() {
        let json = render_json(slice::from_ref(&BACKSTAGE_TREE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["label"], "// Backstage");
        assert_eq!(value[0]["children"][1]["children"][0]["id"], "schema");
    }

    #[test]
    fn test_html_escapes_labels_and_routes() {
        const ROOTS: &[NavNode] = &[NavNode::section(
            "qa",
            "Q&A <live>",
            "/qa?x=1&y=2",
            &[NavNode::link("faq", "\"FAQ\"", "/qa/faq")],
        )];
        let html = render_html(ROOTS, None).unwrap();
        assert!(html.contains("Q&amp;A &lt;live&gt;"));
        assert!(html.contains(r#"<a href="/qa?x=1&amp;y=2">"#));
        assert!(html.contains("&quot;FAQ&quot;"));
        assert!(!html.contains("<live>"));
    }
}
