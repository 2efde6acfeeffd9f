//! Random geometric graphs (unit-square scatter and convex polygons) with replay tokens.
//!
//! Model
//! - `draw_random_graph`: `n` vertices uniform in the unit square; each edge draw
//!   picks a first endpoint, then retries the second until it differs and the
//!   segment is short (`max_edge_length_scaling / n`). The last attempt is kept
//!   regardless of length. Duplicate draws collapse.
//! - `draw_convex_polygon_graph`: vertices of a regular `n`-gon (convex position)
//!   in boundary order, optional boundary edges, plus random chords.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::{Edge, Graph, Vertex};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Unit-square scatter configuration.
#[derive(Clone, Copy, Debug)]
pub struct RandomGraphCfg {
    pub vertices: usize,
    /// Number of edge draws (duplicates collapse, so the graph may hold fewer).
    pub edges: usize,
    /// Maximum edge length in units of `1 / vertices`.
    pub max_edge_length_scaling: f64,
    /// Draws of the second endpoint before the length bound is dropped.
    pub max_attempts: usize,
}
impl Default for RandomGraphCfg {
    fn default() -> Self {
        Self {
            vertices: 30,
            edges: 120,
            max_edge_length_scaling: 3.0,
            max_attempts: 1000,
        }
    }
}

/// Convex polygon configuration.
#[derive(Clone, Copy, Debug)]
pub struct ConvexPolygonCfg {
    pub vertices: usize,
    /// Number of chord draws between random vertex pairs.
    pub chords: usize,
    pub include_boundary: bool,
    /// Random global rotation in [0, 2π)?
    pub random_phase: bool,
}
impl Default for ConvexPolygonCfg {
    fn default() -> Self {
        Self {
            vertices: 12,
            chords: 12,
            include_boundary: true,
            random_phase: true,
        }
    }
}

/// Random geometric graph on vertices `0..cfg.vertices`.
pub fn draw_random_graph(cfg: RandomGraphCfg, tok: ReplayToken) -> Graph<u32> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertices;
    let vertices: Vec<Vertex<u32>> = (0..n)
        .map(|i| Vertex::new(i as u32, rng.gen::<f64>(), rng.gen::<f64>()))
        .collect();
    let mut g = Graph::new();
    for v in &vertices {
        g.add_vertex(v.clone());
    }
    if n < 2 {
        return g;
    }
    let max_len = cfg.max_edge_length_scaling / n as f64;
    let attempts = cfg.max_attempts.max(1);
    for _ in 0..cfg.edges {
        let first = rng.gen_range(0..n);
        let mut chosen = None;
        for attempt in 1..=attempts {
            let second = rng.gen_range(0..n);
            if second == first {
                continue;
            }
            let len = (vertices[second].pos() - vertices[first].pos()).norm();
            if len <= max_len || attempt == attempts {
                chosen = Some(second);
                break;
            }
        }
        if let Some(second) = chosen {
            if let Ok(e) = Edge::new(vertices[first].clone(), vertices[second].clone()) {
                g.add_edge(e);
            }
        }
    }
    g
}

/// Convex polygon graph; returns the graph and its vertex ids in boundary order.
pub fn draw_convex_polygon_graph(cfg: ConvexPolygonCfg, tok: ReplayToken) -> (Graph<u32>, Vec<u32>) {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertices;
    let delta = 2.0 * std::f64::consts::PI / (n.max(1) as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * 2.0 * std::f64::consts::PI
    } else {
        0.0
    };
    let vertices: Vec<Vertex<u32>> = (0..n)
        .map(|k| {
            let th = phase + (k as f64) * delta;
            Vertex::new(k as u32, th.cos(), th.sin())
        })
        .collect();
    let mut g = Graph::new();
    for v in &vertices {
        g.add_vertex(v.clone());
    }
    if n >= 2 && cfg.include_boundary {
        for k in 0..n {
            let next = (k + 1) % n;
            if let Ok(e) = Edge::new(vertices[k].clone(), vertices[next].clone()) {
                g.add_edge(e);
            }
        }
    }
    if n >= 2 {
        for _ in 0..cfg.chords {
            let a = rng.gen_range(0..n);
            let b = rng.gen_range(0..n);
            if let Ok(e) = Edge::new(vertices[a].clone(), vertices[b].clone()) {
                g.add_edge(e);
            }
        }
    }
    (g, (0..n as u32).collect())
}
