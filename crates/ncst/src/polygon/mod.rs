//! Non-crossing spanning trees of graphs drawn inside a simple polygon.
//!
//! Vertices are the polygon corners, given in boundary order. An interval table
//! over sub-chains `[i, j]` records the best structure spanning the chain:
//!
//! - `Tree`: a non-crossing tree spanning `i..=j`.
//! - `Forest`: two trees, one holding `i` and one holding `j`, so the edge
//!   `(i, j)` would close them into a tree.
//! - `NoForest`: only structures with more than two parts.
//! - `Invalid`: the segment `(i, j)` leaves the polygon.
//!
//! Chains split at a point `k` and combine `[i, k]` with `[k, j]`. Only edges
//! whose segment stays in the closed polygon region are ever used.

use std::collections::BTreeSet;

use nalgebra::Point2;
use tracing::debug;

use crate::error::AlgorithmError;
use crate::geometry::segment_in_polygon;
use crate::graph::{Edge, Graph, VertexId};
use crate::search::Outcome;

/// Best structure spanning a polygon sub-chain, ordered from worst to best.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SpanState {
    Invalid,
    NoForest,
    Forest,
    Tree,
}

impl SpanState {
    /// State of `[i, j]` built from `[i, k]` and `[k, j]`.
    pub fn combine(left: SpanState, right: SpanState, closing_edge: bool) -> SpanState {
        use SpanState::*;
        match (left, right) {
            (Invalid, _) | (_, Invalid) => Invalid,
            (Tree, Tree) => Tree,
            (Tree, Forest) | (Forest, Tree) => {
                if closing_edge {
                    Tree
                } else {
                    Forest
                }
            }
            _ => NoForest,
        }
    }
}

/// NCST of `graph` whose vertices form the simple polygon `polygon` (ids in boundary order).
pub fn find_polygon_ncst<V: VertexId>(
    graph: &Graph<V>,
    polygon: &[V],
) -> Result<Outcome<V>, AlgorithmError> {
    if polygon.len() != graph.vertex_count() {
        return Err(AlgorithmError::PolygonMismatch(format!(
            "{} polygon vertices for {} graph vertices",
            polygon.len(),
            graph.vertex_count()
        )));
    }
    let distinct: BTreeSet<&V> = polygon.iter().collect();
    if distinct.len() != polygon.len() {
        return Err(AlgorithmError::PolygonMismatch(
            "polygon repeats a vertex".to_string(),
        ));
    }
    let mut points = Vec::with_capacity(polygon.len());
    for id in polygon {
        match graph.vertex(id) {
            Some(v) => points.push(*v.pos()),
            None => {
                return Err(AlgorithmError::PolygonMismatch(format!(
                    "vertex {id:?} is not in the graph"
                )))
            }
        }
    }
    if polygon.len() <= 1 {
        return Ok(Outcome::Found(graph.clone()));
    }
    let table = SpanTable::build(graph, polygon, &points);
    let last = polygon.len() - 1;
    debug!(n = polygon.len(), state = ?table.state(0, last), "polygon table filled");
    if table.state(0, last) != SpanState::Tree {
        return Ok(Outcome::NoSolution);
    }
    let mut edges = Vec::with_capacity(last);
    table.reconstruct(0, last, &mut edges);
    let mut tree = Graph::new();
    for v in graph.vertices() {
        tree.add_vertex(v.clone());
    }
    for e in edges {
        tree.add_edge(e);
    }
    Ok(Outcome::Found(tree))
}

/// Interval table over polygon positions.
struct SpanTable<V: VertexId> {
    states: Vec<Vec<SpanState>>,
    /// Graph edge between positions `i < j`, if present.
    edges: Vec<Vec<Option<Edge<V>>>>,
}

impl<V: VertexId> SpanTable<V> {
    fn build(graph: &Graph<V>, polygon: &[V], points: &[Point2<f64>]) -> Self {
        let n = polygon.len();
        let mut edges: Vec<Vec<Option<Edge<V>>>> = vec![vec![None; n]; n];
        for i in 0..n {
            for j in i + 1..n {
                edges[i][j] = graph.edge_between(&polygon[i], &polygon[j]);
            }
        }
        let mut table = Self {
            states: vec![vec![SpanState::Invalid; n]; n],
            edges,
        };
        for i in (0..n - 1).rev() {
            table.states[i][i + 1] = if table.edges[i][i + 1].is_some() {
                SpanState::Tree
            } else {
                SpanState::Forest
            };
            for j in i + 2..n {
                table.states[i][j] = if segment_in_polygon(&points[i], &points[j], points) {
                    table.best_split(i, j).1
                } else {
                    SpanState::Invalid
                };
            }
        }
        table
    }

    fn state(&self, i: usize, j: usize) -> SpanState {
        self.states[i][j]
    }

    /// First split point with the best combined state.
    fn best_split(&self, i: usize, j: usize) -> (usize, SpanState) {
        let closing = self.edges[i][j].is_some();
        let mut best = (i + 1, SpanState::Invalid);
        for k in i + 1..j {
            let s = SpanState::combine(self.states[i][k], self.states[k][j], closing);
            if s > best.1 {
                best = (k, s);
            }
        }
        best
    }

    fn reconstruct(&self, i: usize, j: usize, out: &mut Vec<Edge<V>>) {
        if j == i + 1 {
            if let Some(e) = &self.edges[i][j] {
                out.push(e.clone());
            }
            return;
        }
        let (k, state) = self.best_split(i, j);
        let left = self.states[i][k];
        let right = self.states[k][j];
        if state == SpanState::Tree && (left == SpanState::Forest || right == SpanState::Forest) {
            if let Some(e) = &self.edges[i][j] {
                out.push(e.clone());
            }
        }
        self.reconstruct(i, k, out);
        self.reconstruct(k, j, out);
    }
}

#[cfg(test)]
mod tests;
