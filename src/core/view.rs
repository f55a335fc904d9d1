//! Graph view component
//!
//! Owns the data and canvas size, the live [`Simulation`], and the current
//! selection. Mounting mirrors the lifecycle of the on-page component: the
//! canvas becomes visible (`ready`) as soon as a layout exists, and the
//! container fades in (`initialized`) shortly afterwards.

use crate::core::models::{ResourceGraph, ResourceNode};
use crate::core::simulation::{SimNode, Simulation, SimulationConfig};
use crate::{debug, info};
use std::time::{Duration, Instant};

/// Default canvas width in pixels
pub const DEFAULT_WIDTH: u32 = 800;
/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: u32 = 600;
/// Delay between mounting and the `initialized` state
pub const INITIALIZE_DELAY: Duration = Duration::from_millis(100);

/// Base radius of a node circle
pub const NODE_RADIUS: f64 = 8.0;

/// Text shown for the external link in the details panel
pub const LEARN_MORE_LABEL: &str = "Learn more →";
/// Heading above the list of child nodes
pub const RELATED_HEADING: &str = "Related Items";

/// An entry in the details panel's "Related Items" list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedItem {
    /// Node id; selecting the item selects this node
    pub id: String,
    /// Child title
    pub title: String,
    /// "by …" line, when the child has an author
    pub byline: Option<String>,
}

/// Drill-down panel shown for the selected node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsPanel {
    /// Selected node id
    pub id: String,
    /// Heading
    pub title: String,
    /// "by …" line, when the node has an author
    pub byline: Option<String>,
    /// Description paragraph
    pub description: Option<String>,
    /// External link target for "Learn more →"
    pub url: Option<String>,
    /// Children via `parent` links; the section is hidden when empty
    pub related: Vec<RelatedItem>,
}

impl DetailsPanel {
    fn build(node: &ResourceNode, children: &[&ResourceNode]) -> Self {
        Self {
            id: node.id.clone(),
            title: node.title.clone(),
            byline: node.byline(),
            description: node.description.clone(),
            url: node.url.clone(),
            related: children
                .iter()
                .map(|child| RelatedItem {
                    id: child.id.clone(),
                    title: child.title.clone(),
                    byline: child.byline(),
                })
                .collect(),
        }
    }

    /// Whether the "Related Items" section should be shown
    #[must_use]
    pub fn has_related(&self) -> bool {
        !self.related.is_empty()
    }
}

/// Interactive force-directed view of a [`ResourceGraph`]
#[derive(Debug)]
pub struct GraphView {
    data: ResourceGraph,
    width: u32,
    height: u32,
    base_config: SimulationConfig,
    simulation: Option<Simulation>,
    selected: Option<String>,
    ready: bool,
    initialized: bool,
    mounted_at: Option<Instant>,
}

impl GraphView {
    /// Create an unmounted view with the default canvas size
    #[must_use]
    pub fn new(data: ResourceGraph) -> Self {
        Self {
            data,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            base_config: SimulationConfig::default(),
            simulation: None,
            selected: None,
            ready: false,
            initialized: false,
            mounted_at: None,
        }
    }

    /// Builder: canvas size
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Builder: force parameters (the canvas size always comes from the view)
    #[must_use]
    pub fn with_simulation_config(mut self, config: SimulationConfig) -> Self {
        self.base_config = config;
        self
    }

    /// Graph being shown
    #[must_use]
    pub const fn data(&self) -> &ResourceGraph {
        &self.data
    }

    /// Canvas width
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Whether a layout exists and the canvas should be visible
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.ready
    }

    /// Whether the post-mount delay has elapsed
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Live simulation, present while mounted with data
    #[must_use]
    pub const fn simulation(&self) -> Option<&Simulation> {
        self.simulation.as_ref()
    }

    /// Mutable access for drag interaction
    pub fn simulation_mut(&mut self) -> Option<&mut Simulation> {
        self.simulation.as_mut()
    }

    /// Build a fresh layout
    ///
    /// Any previous simulation is stopped and discarded first. With no nodes
    /// the view stays blank: not ready and without a simulation.
    pub fn mount(&mut self, now: Instant) {
        self.teardown();
        if self.data.is_empty() {
            debug!("Graph view mounted without nodes; nothing to lay out");
            return;
        }

        let config = self
            .base_config
            .with_size(f64::from(self.width), f64::from(self.height));
        self.simulation = Some(Simulation::new(&self.data, config));
        self.ready = true;
        self.mounted_at = Some(now);
        info!(
            "Graph view mounted: {} nodes, {} links on {}x{}",
            self.data.node_count(),
            self.data.link_count(),
            self.width,
            self.height
        );
    }

    /// Advance the clock; flips `initialized` once the delay has passed
    pub fn update(&mut self, now: Instant) {
        if let Some(mounted_at) = self.mounted_at {
            if now.saturating_duration_since(mounted_at) >= INITIALIZE_DELAY {
                self.initialized = true;
                self.mounted_at = None;
            }
        }
    }

    /// Replace the data and re-mount. The selection is kept.
    pub fn set_data(&mut self, data: ResourceGraph, now: Instant) {
        self.data = data;
        self.mount(now);
    }

    /// Change the canvas size and re-mount. The selection is kept.
    pub fn resize(&mut self, width: u32, height: u32, now: Instant) {
        self.width = width;
        self.height = height;
        self.mount(now);
    }

    /// Stop the simulation (component cleanup)
    pub fn unmount(&mut self) {
        if let Some(sim) = self.simulation.as_mut() {
            sim.stop();
        }
        self.mounted_at = None;
    }

    fn teardown(&mut self) {
        self.unmount();
        self.simulation = None;
        self.ready = false;
        self.initialized = false;
    }

    /// One animation-loop step. Returns whether the layout is still moving.
    pub fn tick(&mut self) -> bool {
        self.simulation.as_mut().is_some_and(Simulation::step)
    }

    /// Run the layout until it comes to rest or `max_ticks` is reached
    pub fn settle(&mut self, max_ticks: usize) -> usize {
        self.simulation
            .as_mut()
            .map_or(0, |sim| sim.run(max_ticks))
    }

    /// Select a node by id. Unknown ids clear the selection.
    pub fn select(&mut self, id: &str) {
        self.selected = self.data.node(id).map(|node| node.id.clone());
    }

    /// Follow an entry of the "Related Items" list
    pub fn select_child(&mut self, id: &str) {
        self.select(id);
    }

    /// Close the details panel
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Select whatever node is under `(x, y)`; clicking empty canvas clears
    ///
    /// Returns the selected node, if any.
    pub fn click(&mut self, x: f64, y: f64) -> Option<&ResourceNode> {
        let hit = self
            .simulation
            .as_ref()
            .and_then(|sim| sim.node_within(x, y, |node| self.node_radius(&node.id)))
            .map(|node| node.id.clone());
        match hit {
            Some(id) => self.select(&id),
            None => self.clear_selection(),
        }
        self.selected_node()
    }

    /// Currently selected node
    #[must_use]
    pub fn selected_node(&self) -> Option<&ResourceNode> {
        self.selected.as_deref().and_then(|id| self.data.node(id))
    }

    /// Children of the selected node; empty when nothing is selected
    #[must_use]
    pub fn selected_children(&self) -> Vec<&ResourceNode> {
        self.selected
            .as_deref()
            .map_or_else(Vec::new, |id| self.data.children_of(id))
    }

    /// Details panel for the selected node
    #[must_use]
    pub fn details(&self) -> Option<DetailsPanel> {
        self.selected_node()
            .map(|node| DetailsPanel::build(node, &self.selected_children()))
    }

    /// Details panel for an arbitrary node, regardless of selection
    #[must_use]
    pub fn details_for(&self, id: &str) -> Option<DetailsPanel> {
        self.data
            .node(id)
            .map(|node| DetailsPanel::build(node, &self.data.children_of(id)))
    }

    /// Drawn radius of a node: grows with its number of children
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn node_radius(&self, id: &str) -> f64 {
        let children = self.data.children_of(id).len() as f64;
        children.sqrt().mul_add(2.0, NODE_RADIUS)
    }

    /// Laid-out nodes, empty before mounting
    #[must_use]
    pub fn layout(&self) -> &[SimNode] {
        self.simulation.as_ref().map(Simulation::nodes).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ResourceLink;

    fn reading_list() -> ResourceGraph {
        let mut graph = ResourceGraph::new();
        graph.add_node(
            ResourceNode::new("systems", "Systems")
                .with_description("Operating systems and networks"),
        );
        graph.add_node(
            ResourceNode::new("ostep", "OSTEP")
                .with_author("Remzi Arpaci-Dusseau")
                .with_url("https://pages.cs.wisc.edu/~remzi/OSTEP/"),
        );
        graph.add_node(ResourceNode::new("tcpip", "TCP/IP Illustrated"));
        graph.add_link(ResourceLink::parent("systems", "ostep"));
        graph.add_link(ResourceLink::parent("systems", "tcpip"));
        graph
    }

    #[test]
    fn test_mount_without_nodes_stays_blank() {
        let mut view = GraphView::new(ResourceGraph::new());
        view.mount(Instant::now());
        assert!(!view.is_ready());
        assert!(view.simulation().is_none());
        assert!(!view.tick());
        assert!(view.layout().is_empty());
    }

    #[test]
    fn test_mount_lifecycle() {
        let start = Instant::now();
        let mut view = GraphView::new(reading_list()).with_size(400, 300);
        view.mount(start);

        assert!(view.is_ready());
        assert!(!view.is_initialized());
        assert_eq!(view.layout().len(), 3);

        view.update(start + Duration::from_millis(50));
        assert!(!view.is_initialized());
        view.update(start + INITIALIZE_DELAY);
        assert!(view.is_initialized());

        let config = view.simulation().unwrap().config();
        assert!((config.width - 400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resize_remounts_and_keeps_selection() {
        let start = Instant::now();
        let mut view = GraphView::new(reading_list());
        view.mount(start);
        view.update(start + INITIALIZE_DELAY);
        view.select("ostep");

        view.resize(1024, 768, start + INITIALIZE_DELAY);
        assert!(view.is_ready());
        assert!(!view.is_initialized());
        assert_eq!(view.selected_node().map(|n| n.id.as_str()), Some("ostep"));
    }

    #[test]
    fn test_set_data_to_empty_hides_canvas() {
        let start = Instant::now();
        let mut view = GraphView::new(reading_list());
        view.mount(start);
        view.set_data(ResourceGraph::new(), start);
        assert!(!view.is_ready());
        assert!(view.simulation().is_none());
    }

    #[test]
    fn test_unmount_stops_simulation() {
        let mut view = GraphView::new(reading_list());
        view.mount(Instant::now());
        view.unmount();
        assert!(!view.simulation().unwrap().is_running());
        assert!(!view.tick());
    }

    #[test]
    fn test_select_and_children() {
        let mut view = GraphView::new(reading_list());
        assert!(view.selected_children().is_empty());

        view.select("systems");
        let ids: Vec<&str> = view
            .selected_children()
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(ids, vec!["ostep", "tcpip"]);

        view.select("unknown");
        assert!(view.selected_node().is_none());
    }

    #[test]
    fn test_details_panel() {
        let mut view = GraphView::new(reading_list());
        assert!(view.details().is_none());

        view.select("systems");
        let panel = view.details().unwrap();
        assert_eq!(panel.title, "Systems");
        assert!(panel.byline.is_none());
        assert_eq!(
            panel.description.as_deref(),
            Some("Operating systems and networks")
        );
        assert!(panel.url.is_none());
        assert!(panel.has_related());
        assert_eq!(panel.related[0].byline.as_deref(), Some("by Remzi Arpaci-Dusseau"));
        assert!(panel.related[1].byline.is_none());

        view.select_child("ostep");
        let panel = view.details().unwrap();
        assert_eq!(panel.title, "OSTEP");
        assert!(panel.url.is_some());
        assert!(!panel.has_related());
    }

    #[test]
    fn test_click_selects_and_clears() {
        let mut view = GraphView::new(reading_list());
        view.mount(Instant::now());
        view.settle(1_000);

        let (x, y) = view.simulation().unwrap().position("tcpip").unwrap();
        assert_eq!(view.click(x, y).map(|n| n.id.as_str()), Some("tcpip"));

        assert!(view.click(-1_000.0, -1_000.0).is_none());
        assert!(view.selected_node().is_none());
    }

    #[test]
    fn test_click_outside_leaf_circle_selects_nothing() {
        let mut graph = ResourceGraph::new();
        graph.add_node(ResourceNode::new("hub", "Hub"));
        for i in 0..16 {
            let id = format!("c{i}");
            graph.add_node(ResourceNode::new(id.clone(), id.clone()));
            graph.add_link(ResourceLink::parent("hub", id));
        }
        let mut view = GraphView::new(graph);
        view.mount(Instant::now());
        view.settle(1_000);

        let sim = view.simulation().unwrap();
        let (hx, hy) = sim.position("hub").unwrap();
        let (cx, cy) = sim.position("c0").unwrap();
        let len = (cx - hx).hypot(cy - hy);
        let (ux, uy) = ((cx - hx) / len, (cy - hy) / len);
        assert!(view.node_radius("hub") > view.node_radius("c0"));

        // Just outside c0's own circle, on the side away from the hub
        let outside = NODE_RADIUS + 4.0;
        assert!(view.click(ux.mul_add(outside, cx), uy.mul_add(outside, cy)).is_none());

        let inside = NODE_RADIUS - 2.0;
        assert_eq!(
            view.click(ux.mul_add(inside, cx), uy.mul_add(inside, cy))
                .map(|n| n.id.as_str()),
            Some("c0")
        );
    }

    #[test]
    fn test_node_radius_grows_with_children() {
        let view = GraphView::new(reading_list());
        assert!(view.node_radius("systems") > view.node_radius("ostep"));
        assert!((view.node_radius("ostep") - NODE_RADIUS).abs() < f64::EPSILON);
    }
}
