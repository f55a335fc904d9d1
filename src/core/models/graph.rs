//! Resource graph: the node/link lists handed to the graph view

use super::{ResourceLink, ResourceNode};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

/// Nodes and directed links of the reading list
///
/// Links are kept as plain id pairs. Nothing checks that ids resolve; lookups
/// that follow a link simply skip targets that are not present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceGraph {
    /// All resource items, in authoring order
    #[serde(default)]
    pub nodes: Vec<ResourceNode>,

    /// Directed relations between node ids
    #[serde(default)]
    pub links: Vec<ResourceLink>,
}

impl ResourceGraph {
    /// Create an empty graph
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Append a node
    pub fn add_node(&mut self, node: ResourceNode) {
        self.nodes.push(node);
    }

    /// Append a link
    pub fn add_link(&mut self, link: ResourceLink) {
        self.links.push(link);
    }

    /// Whether the graph has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of links
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Find a node by id (first match wins)
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&ResourceNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Children of a node
    ///
    /// Scans every link whose source is `id` and whose kind is `parent`, in
    /// link order, and resolves the target. Targets with no matching node are
    /// dropped.
    #[must_use]
    pub fn children_of(&self, id: &str) -> Vec<&ResourceNode> {
        self.links
            .iter()
            .filter(|link| link.source == id && link.is_parent())
            .filter_map(|link| self.node(&link.target))
            .collect()
    }

    /// Links with a source or target that does not name a node
    #[must_use]
    pub fn dangling_links(&self) -> Vec<&ResourceLink> {
        self.links
            .iter()
            .filter(|link| self.node(&link.source).is_none() || self.node(&link.target).is_none())
            .collect()
    }

    /// Parse a graph from TOML (`[[nodes]]` / `[[links]]` tables)
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed or does not match the schema
    pub fn from_toml_str(content: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a graph from JSON (`{"nodes": [...], "links": [...]}`)
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or does not match the schema
    pub fn from_json_str(content: &str) -> Result<Self, Box<dyn Error>> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a graph from disk
    ///
    /// Files ending in `.json` are parsed as JSON, everything else as TOML.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }
}

impl fmt::Display for ResourceGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Resource graph ({} nodes, {} links):",
            self.node_count(),
            self.link_count()
        )?;
        writeln!(f)?;

        for node in &self.nodes {
            let children = self.children_of(&node.id);
            if children.is_empty() {
                writeln!(f, "  {} ({})", node.title, node.id)?;
            } else {
                let ids: Vec<&str> = children.iter().map(|c| c.id.as_str()).collect();
                writeln!(f, "  {} ({}) → {}", node.title, node.id, ids.join(", "))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::LinkKind;

    fn sample() -> ResourceGraph {
        let mut graph = ResourceGraph::new();
        graph.add_node(ResourceNode::new("pl", "Programming Languages"));
        graph.add_node(ResourceNode::new("sicp", "SICP").with_author("Abelson & Sussman"));
        graph.add_node(ResourceNode::new("tapl", "Types and Programming Languages"));
        graph.add_link(ResourceLink::parent("pl", "sicp"));
        graph.add_link(ResourceLink::new("pl", "tapl", LinkKind::Related));
        graph.add_link(ResourceLink::parent("pl", "missing"));
        graph.add_link(ResourceLink::parent("pl", "tapl"));
        graph
    }

    #[test]
    fn test_graph_creation() {
        let graph = ResourceGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.link_count(), 0);
    }

    #[test]
    fn test_children_only_follow_parent_links_in_order() {
        let graph = sample();
        let children: Vec<&str> = graph
            .children_of("pl")
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(children, vec!["sicp", "tapl"]);
    }

    #[test]
    fn test_children_of_leaf_and_unknown() {
        let graph = sample();
        assert!(graph.children_of("sicp").is_empty());
        assert!(graph.children_of("nope").is_empty());
    }

    #[test]
    fn test_children_are_directional() {
        let graph = sample();
        assert!(graph.children_of("tapl").is_empty());
    }

    #[test]
    fn test_dangling_links() {
        let graph = sample();
        let dangling = graph.dangling_links();
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].target, "missing");
    }

    #[test]
    fn test_from_toml() {
        let graph = ResourceGraph::from_toml_str(
            r#"
[[nodes]]
id = "os"
title = "Operating Systems"

[[nodes]]
id = "ostep"
title = "Operating Systems: Three Easy Pieces"
author = "Remzi Arpaci-Dusseau"
url = "https://pages.cs.wisc.edu/~remzi/OSTEP/"

[[links]]
source = "os"
target = "ostep"
type = "parent"
"#,
        )
        .unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.children_of("os").len(), 1);
        assert_eq!(
            graph.node("ostep").and_then(|n| n.author.as_deref()),
            Some("Remzi Arpaci-Dusseau")
        );
    }

    #[test]
    fn test_from_json_without_links() {
        let graph = ResourceGraph::from_json_str(r#"{"nodes":[{"id":"a","title":"A"}]}"#).unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.link_count(), 0);
    }

    #[test]
    fn test_from_json_rejects_missing_title() {
        assert!(ResourceGraph::from_json_str(r#"{"nodes":[{"id":"a"}]}"#).is_err());
    }

    #[test]
    fn test_display_lists_children() {
        let display = format!("{}", sample());
        assert!(display.contains("Resource graph (3 nodes, 4 links)"));
        assert!(display.contains("Programming Languages (pl) → sicp, tapl"));
    }
}
