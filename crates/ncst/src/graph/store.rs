//! Mutation of the graph: vertex/edge insertion and removal with live crossing tracking.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::GraphError;

use super::types::{Edge, Vertex, VertexId};

/// Geometric graph with adjacency and crossing relations kept consistent with the edge set.
///
/// `crossings` only holds entries for edges that cross at least one other edge.
#[derive(Clone, Debug)]
pub struct Graph<V: VertexId> {
    pub(super) vertices: BTreeSet<Vertex<V>>,
    pub(super) edges: BTreeSet<Edge<V>>,
    pub(super) adjacency: BTreeMap<V, BTreeSet<V>>,
    pub(super) crossings: BTreeMap<Edge<V>, BTreeSet<Edge<V>>>,
}

impl<V: VertexId> Default for Graph<V> {
    fn default() -> Self {
        Self {
            vertices: BTreeSet::new(),
            edges: BTreeSet::new(),
            adjacency: BTreeMap::new(),
            crossings: BTreeMap::new(),
        }
    }
}

impl<V: VertexId> Graph<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph holding exactly the given edges and their endpoints.
    pub fn from_edges<I: IntoIterator<Item = Edge<V>>>(edges: I) -> Self {
        let mut g = Self::new();
        for e in edges {
            g.add_edge(e);
        }
        g
    }

    /// Insert a vertex; returns false if a vertex with the same id already exists.
    pub fn add_vertex(&mut self, v: Vertex<V>) -> bool {
        if self.vertices.contains(v.id()) {
            return false;
        }
        self.adjacency.insert(v.id().clone(), BTreeSet::new());
        self.vertices.insert(v);
        true
    }

    /// Remove a vertex and all its incident edges.
    pub fn remove_vertex(&mut self, id: &V) -> bool {
        if !self.vertices.contains(id) {
            return false;
        }
        let incident: Vec<Edge<V>> = self.incident_edges(id).collect();
        for e in &incident {
            self.remove_edge(e);
        }
        self.adjacency.remove(id);
        self.vertices.remove(id);
        true
    }

    /// Insert an edge, registering its crossings with every present edge.
    ///
    /// Endpoints whose id is already present are replaced by the stored vertex.
    /// Returns false if the edge was already present.
    pub fn add_edge(&mut self, edge: Edge<V>) -> bool {
        let edge = self.canonical(edge);
        if self.edges.contains(&edge) {
            return false;
        }
        let (a, b) = (edge.a().clone(), edge.b().clone());
        self.add_vertex(a.clone());
        self.add_vertex(b.clone());
        let partners: BTreeSet<Edge<V>> = self
            .edges
            .iter()
            .filter(|other| edge.crosses(other))
            .cloned()
            .collect();
        for p in &partners {
            self.crossings
                .entry(p.clone())
                .or_default()
                .insert(edge.clone());
        }
        if !partners.is_empty() {
            self.crossings.insert(edge.clone(), partners);
        }
        if let Some(adj) = self.adjacency.get_mut(a.id()) {
            adj.insert(b.id().clone());
        }
        if let Some(adj) = self.adjacency.get_mut(b.id()) {
            adj.insert(a.id().clone());
        }
        self.edges.insert(edge);
        true
    }

    /// Build the edge `a`-`b` and insert it.
    pub fn add_edge_between(&mut self, a: Vertex<V>, b: Vertex<V>) -> Result<bool, GraphError> {
        Ok(self.add_edge(Edge::new(a, b)?))
    }

    /// Remove an edge and drop it from the crossing sets of its former partners.
    pub fn remove_edge(&mut self, edge: &Edge<V>) -> bool {
        if !self.edges.remove(edge) {
            return false;
        }
        let (a, b) = edge.ids();
        if let Some(adj) = self.adjacency.get_mut(a) {
            adj.remove(b);
        }
        if let Some(adj) = self.adjacency.get_mut(b) {
            adj.remove(a);
        }
        if let Some(partners) = self.crossings.remove(edge) {
            for p in partners {
                let emptied = match self.crossings.get_mut(&p) {
                    Some(set) => {
                        set.remove(edge);
                        set.is_empty()
                    }
                    None => false,
                };
                if emptied {
                    self.crossings.remove(&p);
                }
            }
        }
        true
    }

    /// Remove every edge crossing `edge`; returns the removed edges.
    pub fn remove_crossing(&mut self, edge: &Edge<V>) -> Vec<Edge<V>> {
        let partners: Vec<Edge<V>> = self.crossing(edge).cloned().collect();
        for p in &partners {
            self.remove_edge(p);
        }
        partners
    }

    fn canonical(&self, edge: Edge<V>) -> Edge<V> {
        let a = self.vertices.get(edge.a().id());
        let b = self.vertices.get(edge.b().id());
        match (a, b) {
            (None, None) => edge,
            (a, b) => {
                let a = a.cloned().unwrap_or_else(|| edge.a().clone());
                let b = b.cloned().unwrap_or_else(|| edge.b().clone());
                // Ids are distinct and keep their order, so this cannot fail.
                Edge::new(a, b).unwrap_or(edge)
            }
        }
    }
}
