//! SVG canvas renderer

use super::{coord, Renderer, Scene};
use crate::core::view::GraphView;
use askama::Template;
use std::error::Error;

/// Gap between a node's circle and its label
const LABEL_GAP: f64 = 4.0;

struct LinkMarkup {
    kind: &'static str,
    source: String,
    target: String,
    x1: String,
    y1: String,
    x2: String,
    y2: String,
}

struct NodeMarkup {
    class: String,
    id: String,
    title: String,
    x: String,
    y: String,
    radius: String,
    label_dx: String,
}

#[derive(Template)]
#[template(path = "graph.svg", escape = "html")]
struct SvgTemplate {
    width: u32,
    height: u32,
    visibility: &'static str,
    links: Vec<LinkMarkup>,
    nodes: Vec<NodeMarkup>,
}

impl SvgTemplate {
    fn from_view(view: &GraphView) -> Self {
        let scene = Scene::capture(view);

        let links = scene
            .links
            .into_iter()
            .map(|link| LinkMarkup {
                kind: link.kind.as_str(),
                source: link.source,
                target: link.target,
                x1: coord(link.from.0),
                y1: coord(link.from.1),
                x2: coord(link.to.0),
                y2: coord(link.to.1),
            })
            .collect();

        let nodes = scene
            .nodes
            .into_iter()
            .map(|node| {
                let mut class = String::from("node");
                if node.has_children {
                    class.push_str(" has-children");
                }
                if node.selected {
                    class.push_str(" selected");
                }
                NodeMarkup {
                    class,
                    id: node.id,
                    title: node.title,
                    x: coord(node.x),
                    y: coord(node.y),
                    radius: coord(node.radius),
                    label_dx: coord(node.radius + LABEL_GAP),
                }
            })
            .collect();

        Self {
            width: view.width(),
            height: view.height(),
            visibility: if view.is_ready() { "visible" } else { "hidden" },
            links,
            nodes,
        }
    }
}

/// Renders the canvas as a standalone SVG document
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl SvgRenderer {
    /// Create a new SVG renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, view: &GraphView) -> Result<String, Box<dyn Error>> {
        Ok(SvgTemplate::from_view(view).render()?)
    }
}
