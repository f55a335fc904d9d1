//! Force-directed layout for the resource graph
//!
//! A small velocity-Verlet simulation with link, many-body, centering, and
//! collision forces. It is driven one step at a time by an animation loop
//! ([`Simulation::step`]) or run to rest for static output ([`Simulation::run`]).

pub mod forces;

use crate::core::models::ResourceGraph;
use crate::warn;
use forces::{Lcg, SimLink};
use std::collections::HashMap;
use std::f64::consts::PI;

/// Radius of the first ring of the initial phyllotaxis placement
const INITIAL_RADIUS: f64 = 10.0;

/// `alpha_target` while a node is being dragged
const DRAG_ALPHA_TARGET: f64 = 0.3;

/// Tunables for a [`Simulation`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Canvas width; the layout is centered on `width / 2`
    pub width: f64,
    /// Canvas height; the layout is centered on `height / 2`
    pub height: f64,
    /// Rest length of link springs
    pub link_distance: f64,
    /// Many-body strength (negative repels)
    pub charge_strength: f64,
    /// Collision radius around each node
    pub collide_radius: f64,
    /// The simulation stops once alpha falls below this
    pub alpha_min: f64,
    /// Fraction of the gap to `alpha_target` closed on each tick
    pub alpha_decay: f64,
    /// Fraction of velocity lost on each tick
    pub velocity_decay: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let alpha_min = 0.001;
        Self {
            width: 800.0,
            height: 600.0,
            link_distance: 100.0,
            charge_strength: -300.0,
            collide_radius: 30.0,
            alpha_min,
            alpha_decay: 1.0 - alpha_min.powf(1.0 / 300.0),
            velocity_decay: 0.4,
        }
    }
}

impl SimulationConfig {
    /// Same settings on a different canvas
    #[must_use]
    pub const fn with_size(self, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }
}

/// A node's state inside the simulation
#[derive(Debug, Clone, PartialEq)]
pub struct SimNode {
    /// Id of the resource node this tracks
    pub id: String,
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
    /// Horizontal velocity
    pub vx: f64,
    /// Vertical velocity
    pub vy: f64,
    /// Pinned horizontal position, if any
    pub fx: Option<f64>,
    /// Pinned vertical position, if any
    pub fy: Option<f64>,
}

impl SimNode {
    /// A resting node at `(x, y)`
    #[must_use]
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            fx: None,
            fy: None,
        }
    }

    fn integrate(&mut self, velocity_decay: f64) {
        if let Some(fx) = self.fx {
            self.x = fx;
            self.vx = 0.0;
        } else {
            self.vx *= 1.0 - velocity_decay;
            self.x += self.vx;
        }
        if let Some(fy) = self.fy {
            self.y = fy;
            self.vy = 0.0;
        } else {
            self.vy *= 1.0 - velocity_decay;
            self.y += self.vy;
        }
    }
}

/// Live force simulation over a graph's nodes
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    nodes: Vec<SimNode>,
    links: Vec<SimLink>,
    index: HashMap<String, usize>,
    alpha: f64,
    alpha_target: f64,
    running: bool,
    ticks: usize,
    rng: Lcg,
}

impl Simulation {
    /// Build a simulation for `graph`
    ///
    /// Nodes start on a phyllotaxis spiral around the canvas center. Links
    /// whose endpoints are not in the graph are skipped.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(graph: &ResourceGraph, config: SimulationConfig) -> Self {
        let (cx, cy) = (config.width / 2.0, config.height / 2.0);
        let angle_step = PI * (3.0 - 5.0_f64.sqrt());

        let mut index = HashMap::new();
        let nodes: Vec<SimNode> = graph
            .nodes
            .iter()
            .enumerate()
            .map(|(i, node)| {
                index.entry(node.id.clone()).or_insert(i);
                let radius = INITIAL_RADIUS * (0.5 + i as f64).sqrt();
                let angle = i as f64 * angle_step;
                SimNode::new(
                    node.id.clone(),
                    radius.mul_add(angle.cos(), cx),
                    radius.mul_add(angle.sin(), cy),
                )
            })
            .collect();

        let pairs: Vec<(usize, usize)> = graph
            .links
            .iter()
            .filter_map(|link| {
                let pair = index.get(&link.source).zip(index.get(&link.target));
                if pair.is_none() {
                    warn!(
                        "Skipping link {} -> {}: endpoint not found",
                        link.source, link.target
                    );
                }
                pair.map(|(&s, &t)| (s, t))
            })
            .collect();
        let links = forces::build_links(&pairs, nodes.len());

        Self {
            config,
            nodes,
            links,
            index,
            alpha: 1.0,
            alpha_target: 0.0,
            running: true,
            ticks: 0,
            rng: Lcg::default(),
        }
    }

    /// Settings this simulation was built with
    #[must_use]
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Advance the layout by one tick, regardless of whether it is running
    pub fn tick(&mut self) {
        self.alpha += (self.alpha_target - self.alpha) * self.config.alpha_decay;
        let alpha = self.alpha;

        forces::apply_links(
            &mut self.nodes,
            &self.links,
            self.config.link_distance,
            alpha,
            &mut self.rng,
        );
        forces::apply_many_body(
            &mut self.nodes,
            self.config.charge_strength,
            alpha,
            &mut self.rng,
        );
        forces::apply_center(
            &mut self.nodes,
            self.config.width / 2.0,
            self.config.height / 2.0,
        );
        forces::apply_collide(&mut self.nodes, self.config.collide_radius, &mut self.rng);

        for node in &mut self.nodes {
            node.integrate(self.config.velocity_decay);
        }
        self.ticks += 1;
    }

    /// One animation-loop step
    ///
    /// Ticks once if running and stops once alpha cools below `alpha_min`.
    /// Returns whether the simulation is still running.
    pub fn step(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.tick();
        if self.alpha < self.config.alpha_min {
            self.running = false;
        }
        self.running
    }

    /// Step until the simulation stops or `max_ticks` steps have run
    ///
    /// Returns the number of ticks performed.
    pub fn run(&mut self, max_ticks: usize) -> usize {
        let mut performed = 0;
        while performed < max_ticks && self.running {
            self.step();
            performed += 1;
        }
        performed
    }

    /// Halt the animation loop
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Resume the animation loop without resetting alpha
    pub fn restart(&mut self) {
        self.running = true;
    }

    /// Whether [`step`](Self::step) will still advance the layout
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Current alpha
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Set alpha directly (e.g. to reheat a cooled layout)
    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
    }

    /// Set the value alpha decays toward
    pub fn set_alpha_target(&mut self, target: f64) {
        self.alpha_target = target;
    }

    /// Ticks performed so far
    #[must_use]
    pub const fn ticks(&self) -> usize {
        self.ticks
    }

    /// All simulated nodes, in graph order
    #[must_use]
    pub fn nodes(&self) -> &[SimNode] {
        &self.nodes
    }

    /// Every node's id and position, in graph order
    #[must_use]
    pub fn positions(&self) -> Vec<(&str, f64, f64)> {
        self.nodes
            .iter()
            .map(|node| (node.id.as_str(), node.x, node.y))
            .collect()
    }

    /// Number of links that resolved to nodes
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Resolved link endpoints as node index pairs
    pub fn link_indices(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.links.iter().map(|link| (link.source, link.target))
    }

    /// Current position of a node
    #[must_use]
    pub fn position(&self, id: &str) -> Option<(f64, f64)> {
        self.index.get(id).map(|&i| (self.nodes[i].x, self.nodes[i].y))
    }

    /// Begin dragging a node: pin it in place and keep the layout warm
    ///
    /// Returns `false` if the id is unknown.
    pub fn drag_start(&mut self, id: &str) -> bool {
        let Some(&i) = self.index.get(id) else {
            return false;
        };
        self.alpha_target = DRAG_ALPHA_TARGET;
        self.restart();
        let node = &mut self.nodes[i];
        node.fx = Some(node.x);
        node.fy = Some(node.y);
        true
    }

    /// Move a dragged node's pin to `(x, y)`
    pub fn drag_to(&mut self, id: &str, x: f64, y: f64) -> bool {
        let Some(&i) = self.index.get(id) else {
            return false;
        };
        self.nodes[i].fx = Some(x);
        self.nodes[i].fy = Some(y);
        true
    }

    /// Release a dragged node and let the layout cool again
    pub fn drag_end(&mut self, id: &str) -> bool {
        let Some(&i) = self.index.get(id) else {
            return false;
        };
        self.alpha_target = 0.0;
        self.nodes[i].fx = None;
        self.nodes[i].fy = None;
        true
    }

    /// The node nearest to `(x, y)` within `radius`, if any
    #[must_use]
    pub fn node_at(&self, x: f64, y: f64, radius: f64) -> Option<&SimNode> {
        self.node_within(x, y, |_| radius)
    }

    /// The nearest node whose own radius covers `(x, y)`, if any
    pub fn node_within<F>(&self, x: f64, y: f64, radius_of: F) -> Option<&SimNode>
    where
        F: Fn(&SimNode) -> f64,
    {
        self.nodes
            .iter()
            .map(|node| (node, (node.x - x).hypot(node.y - y)))
            .filter(|&(node, dist)| dist <= radius_of(node))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(node, _)| node)
    }
}
