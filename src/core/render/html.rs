//! HTML page renderer
//!
//! Produces a self-contained page: the SVG canvas inside the graph container
//! plus, when a node is selected, the details panel with its related items.

use super::{svg::SvgRenderer, Renderer};
use crate::core::view::{DetailsPanel, GraphView, LEARN_MORE_LABEL, RELATED_HEADING};
use askama::Template;
use std::error::Error;

/// Page title used for every rendered page
const PAGE_TITLE: &str = "Resources";

#[derive(Default)]
struct ChildMarkup {
    id: String,
    title: String,
    byline: String,
}

/// Panel fields flattened to strings; empty means "not shown"
#[derive(Default)]
struct PanelMarkup {
    id: String,
    title: String,
    byline: String,
    description: String,
    url: String,
    related: Vec<ChildMarkup>,
}

impl From<DetailsPanel> for PanelMarkup {
    fn from(panel: DetailsPanel) -> Self {
        Self {
            id: panel.id,
            title: panel.title,
            byline: panel.byline.unwrap_or_default(),
            description: panel.description.unwrap_or_default(),
            url: panel.url.unwrap_or_default(),
            related: panel
                .related
                .into_iter()
                .map(|item| ChildMarkup {
                    id: item.id,
                    title: item.title,
                    byline: item.byline.unwrap_or_default(),
                })
                .collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "graph_page.html")]
struct PageTemplate {
    page_title: &'static str,
    initialized: bool,
    svg: String,
    show_panel: bool,
    panel: PanelMarkup,
    learn_more: &'static str,
    related_heading: &'static str,
}

/// Renders a standalone HTML page with canvas and details panel
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Create a new HTML renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, view: &GraphView) -> Result<String, Box<dyn Error>> {
        let details = view.details();
        let page = PageTemplate {
            page_title: PAGE_TITLE,
            initialized: view.is_initialized(),
            svg: SvgRenderer::new().render(view)?,
            show_panel: details.is_some(),
            panel: details.map(PanelMarkup::from).unwrap_or_default(),
            learn_more: LEARN_MORE_LABEL,
            related_heading: RELATED_HEADING,
        };
        Ok(page.render()?)
    }
}
