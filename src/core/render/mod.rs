//! Output formats for a laid-out graph view
//!
//! SVG and the standalone HTML page are rendered through askama templates;
//! JSON is a plain serde export of node positions for client-side drawing.

pub mod html;
pub mod json;
pub mod svg;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use svg::SvgRenderer;

use crate::core::models::LinkKind;
use crate::core::view::GraphView;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    /// Bare SVG canvas
    Svg,
    /// Self-contained page with canvas and details panel
    Html,
    /// Node positions and links as JSON
    Json,
}

impl RenderFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Html => "html",
            Self::Json => "json",
        }
    }

    /// Renderer implementing this format
    #[must_use]
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            Self::Svg => Box::new(SvgRenderer),
            Self::Html => Box::new(HtmlRenderer),
            Self::Json => Box::new(JsonRenderer),
        }
    }
}

impl FromStr for RenderFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "html" | "htm" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown render format: {s}")),
        }
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Trait for output renderers
pub trait Renderer {
    /// Render the view to a string
    ///
    /// # Errors
    /// Returns an error if template rendering or serialization fails
    fn render(&self, view: &GraphView) -> Result<String, Box<dyn Error>>;

    /// Render the view and write it to `output_path`
    ///
    /// # Errors
    /// Returns an error if rendering or writing the file fails
    fn write(&self, view: &GraphView, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(view)?;
        fs::write(output_path, content)?;
        Ok(())
    }
}

/// A node ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Node id
    pub id: String,
    /// Label text
    pub title: String,
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
    /// Circle radius
    pub radius: f64,
    /// Whether the node is the current selection
    pub selected: bool,
    /// Whether the node has children via `parent` links
    pub has_children: bool,
}

/// A link with resolved endpoint coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLink {
    /// Source node id
    pub source: String,
    /// Target node id
    pub target: String,
    /// Relation kind
    pub kind: LinkKind,
    /// Source position
    pub from: (f64, f64),
    /// Target position
    pub to: (f64, f64),
}

/// Snapshot of the current layout, shared by all renderers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    /// Nodes in graph order
    pub nodes: Vec<SceneNode>,
    /// Links whose endpoints both have positions
    pub links: Vec<SceneLink>,
}

impl Scene {
    /// Capture the view's current layout. Empty if the view is not mounted.
    #[must_use]
    pub fn capture(view: &GraphView) -> Self {
        let Some(sim) = view.simulation() else {
            return Self::default();
        };
        let data = view.data();
        let selected = view.selected_node().map(|node| node.id.as_str());

        let nodes = data
            .nodes
            .iter()
            .zip(sim.nodes())
            .map(|(node, placed)| SceneNode {
                id: node.id.clone(),
                title: node.title.clone(),
                x: placed.x,
                y: placed.y,
                radius: view.node_radius(&node.id),
                selected: selected == Some(node.id.as_str()),
                has_children: !data.children_of(&node.id).is_empty(),
            })
            .collect();

        let links = data
            .links
            .iter()
            .filter_map(|link| {
                let from = sim.position(&link.source)?;
                let to = sim.position(&link.target)?;
                Some(SceneLink {
                    source: link.source.clone(),
                    target: link.target.clone(),
                    kind: link.kind,
                    from,
                    to,
                })
            })
            .collect();

        Self { nodes, links }
    }
}

/// Format a coordinate for markup output
pub(crate) fn coord(value: f64) -> String {
    format!("{value:.2}")
}
