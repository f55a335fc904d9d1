//! Force kernels applied on every simulation tick
//!
//! Each kernel adjusts node velocities (or, for centering, positions) in
//! place. They follow the usual d3-force formulation so layouts look the
//! same as their browser counterparts.

use super::SimNode;

/// Minimum squared distance used by the many-body force
const DISTANCE_MIN2: f64 = 1.0;

/// Linear congruential generator used to break exact overlaps
///
/// Deterministic so repeated layouts of the same data are identical.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    const A: u64 = 1_664_525;
    const C: u64 = 1_013_904_223;
    const M: u64 = 4_294_967_296;

    /// Create a generator with the given seed
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            state: seed % Self::M,
        }
    }

    /// Next value in `[0, 1)`
    #[allow(clippy::cast_precision_loss)]
    pub fn next_f64(&mut self) -> f64 {
        self.state = (Self::A * self.state + Self::C) % Self::M;
        self.state as f64 / Self::M as f64
    }

    /// A tiny random offset for coincident coordinates
    pub fn jiggle(&mut self) -> f64 {
        (self.next_f64() - 0.5) * 1e-6
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(1)
    }
}

/// A link resolved to node indices, with its precomputed strength and bias
#[derive(Debug, Clone, PartialEq)]
pub struct SimLink {
    /// Index of the source node
    pub source: usize,
    /// Index of the target node
    pub target: usize,
    /// Spring stiffness, `1 / min(degree(source), degree(target))`
    pub strength: f64,
    /// Share of the correction applied to the target
    pub bias: f64,
}

/// Resolve index pairs into springs weighted by node degree
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn build_links(pairs: &[(usize, usize)], node_count: usize) -> Vec<SimLink> {
    let mut degree = vec![0_usize; node_count];
    for &(s, t) in pairs {
        degree[s] += 1;
        degree[t] += 1;
    }

    pairs
        .iter()
        .map(|&(s, t)| {
            let (ds, dt) = (degree[s] as f64, degree[t] as f64);
            SimLink {
                source: s,
                target: t,
                strength: 1.0 / ds.min(dt),
                bias: ds / (ds + dt),
            }
        })
        .collect()
}

/// Pull linked nodes toward `distance` apart
pub fn apply_links(nodes: &mut [SimNode], links: &[SimLink], distance: f64, alpha: f64, rng: &mut Lcg) {
    for link in links {
        let (s, t) = (link.source, link.target);
        let mut x = nodes[t].x + nodes[t].vx - nodes[s].x - nodes[s].vx;
        let mut y = nodes[t].y + nodes[t].vy - nodes[s].y - nodes[s].vy;
        if x == 0.0 {
            x = rng.jiggle();
        }
        if y == 0.0 {
            y = rng.jiggle();
        }

        let len = x.hypot(y);
        let k = (len - distance) / len * alpha * link.strength;
        x *= k;
        y *= k;

        nodes[t].vx -= x * link.bias;
        nodes[t].vy -= y * link.bias;
        nodes[s].vx += x * (1.0 - link.bias);
        nodes[s].vy += y * (1.0 - link.bias);
    }
}

/// Pairwise charge between every pair of nodes (negative strength repels)
pub fn apply_many_body(nodes: &mut [SimNode], strength: f64, alpha: f64, rng: &mut Lcg) {
    let count = nodes.len();
    let mut deltas = vec![(0.0, 0.0); count];

    for i in 0..count {
        for j in 0..count {
            if i == j {
                continue;
            }
            let mut dx = nodes[j].x - nodes[i].x;
            let mut dy = nodes[j].y - nodes[i].y;
            if dx == 0.0 {
                dx = rng.jiggle();
            }
            if dy == 0.0 {
                dy = rng.jiggle();
            }

            let mut l2 = dx.mul_add(dx, dy * dy);
            if l2 < DISTANCE_MIN2 {
                l2 = (DISTANCE_MIN2 * l2).sqrt();
            }
            let w = strength * alpha / l2;
            deltas[i].0 += dx * w;
            deltas[i].1 += dy * w;
        }
    }

    for (node, (dvx, dvy)) in nodes.iter_mut().zip(deltas) {
        node.vx += dvx;
        node.vy += dvy;
    }
}

/// Translate all nodes so their mean position sits on `(cx, cy)`
#[allow(clippy::cast_precision_loss)]
pub fn apply_center(nodes: &mut [SimNode], cx: f64, cy: f64) {
    if nodes.is_empty() {
        return;
    }
    let n = nodes.len() as f64;
    let sx = nodes.iter().map(|node| node.x).sum::<f64>() / n - cx;
    let sy = nodes.iter().map(|node| node.y).sum::<f64>() / n - cy;

    for node in nodes {
        node.x -= sx;
        node.y -= sy;
    }
}

/// Push apart nodes whose next positions overlap within `radius` each
pub fn apply_collide(nodes: &mut [SimNode], radius: f64, rng: &mut Lcg) {
    if radius <= 0.0 {
        return;
    }
    let reach = radius * 2.0;
    let count = nodes.len();

    for i in 0..count {
        for j in (i + 1)..count {
            let mut x = (nodes[i].x + nodes[i].vx) - (nodes[j].x + nodes[j].vx);
            let mut y = (nodes[i].y + nodes[i].vy) - (nodes[j].y + nodes[j].vy);
            let mut l2 = x.mul_add(x, y * y);
            if l2 >= reach * reach {
                continue;
            }
            if x == 0.0 {
                x = rng.jiggle();
                l2 += x * x;
            }
            if y == 0.0 {
                y = rng.jiggle();
                l2 += y * y;
            }

            let len = l2.sqrt();
            let k = (reach - len) / len;
            x *= k;
            y *= k;

            // Equal radii: each side takes half the correction
            nodes[i].vx += x * 0.5;
            nodes[i].vy += y * 0.5;
            nodes[j].vx -= x * 0.5;
            nodes[j].vy -= y * 0.5;
        }
    }
}
