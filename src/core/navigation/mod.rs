//! Static site navigation
//!
//! Two fixed trees of labeled, optionally nested links. They are constants:
//! nothing validates, mutates, or loads them at runtime. The helpers here
//! only read the trees to build menus and breadcrumbs.

pub mod menu;
pub mod site;

pub use site::{BACKSTAGE_TREE, NAVIGATION_TREE};

use serde::Serialize;

/// One entry in a navigation tree
///
/// `children: None` is a plain link; `Some(&[])` is a section that currently
/// has no entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavNode {
    /// Stable identifier
    pub id: &'static str,
    /// Text shown in the menu
    pub label: &'static str,
    /// Route, when the entry is navigable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<&'static str>,
    /// Nested entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<&'static [NavNode]>,
}

impl NavNode {
    /// A leaf link
    #[must_use]
    pub const fn link(id: &'static str, label: &'static str, path: &'static str) -> Self {
        Self {
            id,
            label,
            path: Some(path),
            children: None,
        }
    }

    /// A link that also groups nested entries
    #[must_use]
    pub const fn section(
        id: &'static str,
        label: &'static str,
        path: &'static str,
        children: &'static [Self],
    ) -> Self {
        Self {
            id,
            label,
            path: Some(path),
            children: Some(children),
        }
    }

    /// Nested entries, empty for leaves
    #[must_use]
    pub const fn children(&self) -> &'static [Self] {
        match self.children {
            Some(children) => children,
            None => &[],
        }
    }

    /// Whether this is a plain link with no child list at all
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Whether this entry declares a child list (possibly empty)
    #[must_use]
    pub const fn has_section(&self) -> bool {
        self.children.is_some()
    }

    /// Whether `current_path` is this entry's route or lies beneath it
    #[must_use]
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path.is_some_and(|path| {
            current_path == path
                || current_path
                    .strip_prefix(path)
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }
}

/// Depth-first listing of every entry with its depth (roots are depth 0)
#[must_use]
pub fn walk(roots: &[NavNode]) -> Vec<(usize, &NavNode)> {
    fn visit<'a>(nodes: &'a [NavNode], depth: usize, out: &mut Vec<(usize, &'a NavNode)>) {
        for node in nodes {
            out.push((depth, node));
            visit(node.children(), depth + 1, out);
        }
    }

    let mut out = Vec::new();
    visit(roots, 0, &mut out);
    out
}

/// Find an entry by id anywhere in the tree
#[must_use]
pub fn find<'a>(roots: &'a [NavNode], id: &str) -> Option<&'a NavNode> {
    walk(roots)
        .into_iter()
        .map(|(_, node)| node)
        .find(|node| node.id == id)
}

/// Find the entry whose route is exactly `path`
#[must_use]
pub fn find_by_path<'a>(roots: &'a [NavNode], path: &str) -> Option<&'a NavNode> {
    walk(roots)
        .into_iter()
        .map(|(_, node)| node)
        .find(|node| node.path == Some(path))
}

/// Chain of entries from a root down to the one routed at `path`
///
/// Empty when no entry has that route.
#[must_use]
pub fn breadcrumbs<'a>(roots: &'a [NavNode], path: &str) -> Vec<&'a NavNode> {
    fn search<'a>(nodes: &'a [NavNode], path: &str, trail: &mut Vec<&'a NavNode>) -> bool {
        for node in nodes {
            trail.push(node);
            if node.path == Some(path) || search(node.children(), path, trail) {
                return true;
            }
            trail.pop();
        }
        false
    }

    let mut trail = Vec::new();
    if search(roots, path, &mut trail) {
        trail
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::slice;

    #[test]
    fn test_top_level_order() {
        let ids: Vec<&str> = NAVIGATION_TREE.iter().map(|n| n.id).collect();
        assert_eq!(
            ids,
            vec!["about", "blog", "projects", "research", "resources", "contact"]
        );
    }

    #[test]
    fn test_leaf_versus_empty_section() {
        let about = find(NAVIGATION_TREE, "about").unwrap();
        let research = find(NAVIGATION_TREE, "research").unwrap();

        assert!(about.is_leaf());
        assert!(!about.has_section());
        assert!(research.has_section());
        assert!(research.children().is_empty());
    }

    #[test]
    fn test_walk_is_depth_first() {
        let walked: Vec<(usize, &str)> = walk(slice::from_ref(&BACKSTAGE_TREE))
            .into_iter()
            .map(|(depth, node)| (depth, node.id))
            .collect();
        assert_eq!(
            walked,
            vec![(0, "backstage"), (1, "quotes"), (1, "stats"), (2, "schema")]
        );
    }

    #[test]
    fn test_find_by_path() {
        assert_eq!(
            find_by_path(NAVIGATION_TREE, "/projects/blank").map(|n| n.label),
            Some("Blank")
        );
        assert!(find_by_path(NAVIGATION_TREE, "/nowhere").is_none());
    }

    #[test]
    fn test_breadcrumbs_follow_tree_not_url() {
        // Schema.sql lives under Stats.db even though its route does not
        let labels: Vec<&str> = breadcrumbs(slice::from_ref(&BACKSTAGE_TREE), "/backstage/schema")
            .iter()
            .map(|n| n.label)
            .collect();
        assert_eq!(labels, vec!["// Backstage", "Stats.db", "Schema.sql"]);
        assert!(breadcrumbs(NAVIGATION_TREE, "/missing").is_empty());
    }

    #[test]
    fn test_is_active() {
        let projects = find(NAVIGATION_TREE, "projects").unwrap();
        assert!(projects.is_active("/projects"));
        assert!(projects.is_active("/projects/cue"));
        assert!(!projects.is_active("/projectsx"));
        assert!(!projects.is_active("/about"));
    }

    #[test]
    fn test_serializes_without_absent_fields() {
        let json = serde_json::to_value(find(NAVIGATION_TREE, "cue").unwrap()).unwrap();
        assert_eq!(json["path"], "/projects/cue");
        assert!(json.get("children").is_none());

        let json = serde_json::to_value(find(NAVIGATION_TREE, "research").unwrap()).unwrap();
        assert_eq!(json["children"].as_array().map(Vec::len), Some(0));
    }
}
