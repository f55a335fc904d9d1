//! JSON layout export
//!
//! Positions and links in the shape a browser-side drawing layer expects:
//! `{ width, height, nodes: [{id, title, x, y}], links: [{source, target, type}], selected }`.

use super::{Renderer, Scene};
use crate::core::models::LinkKind;
use crate::core::view::GraphView;
use serde::Serialize;
use std::error::Error;

#[derive(Debug, Serialize)]
struct NodeExport {
    id: String,
    title: String,
    x: f64,
    y: f64,
}

#[derive(Debug, Serialize)]
struct LinkExport {
    source: String,
    target: String,
    #[serde(rename = "type")]
    kind: LinkKind,
}

#[derive(Debug, Serialize)]
struct LayoutExport {
    width: u32,
    height: u32,
    nodes: Vec<NodeExport>,
    links: Vec<LinkExport>,
    selected: Option<String>,
}

/// Exports the current layout as pretty-printed JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    /// Create a new JSON renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, view: &GraphView) -> Result<String, Box<dyn Error>> {
        let scene = Scene::capture(view);
        let export = LayoutExport {
            width: view.width(),
            height: view.height(),
            nodes: scene
                .nodes
                .into_iter()
                .map(|node| NodeExport {
                    id: node.id,
                    title: node.title,
                    x: node.x,
                    y: node.y,
                })
                .collect(),
            links: scene
                .links
                .into_iter()
                .map(|link| LinkExport {
                    source: link.source,
                    target: link.target,
                    kind: link.kind,
                })
                .collect(),
            selected: view.selected_node().map(|node| node.id.clone()),
        };
        Ok(serde_json::to_string_pretty(&export)?)
    }
}
