//! Read-only queries: lookups, crossing statistics, connectivity, components, bridges.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt;

use super::store::Graph;
use super::types::{Edge, Vertex, VertexId};

impl<V: VertexId> Graph<V> {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<V>> + '_ {
        self.vertices.iter()
    }

    pub fn vertex_ids(&self) -> BTreeSet<V> {
        self.adjacency.keys().cloned().collect()
    }

    pub fn edges(&self) -> &BTreeSet<Edge<V>> {
        &self.edges
    }

    pub fn vertex(&self, id: &V) -> Option<&Vertex<V>> {
        self.vertices.get(id)
    }

    pub fn contains_vertex(&self, id: &V) -> bool {
        self.vertices.contains(id)
    }

    pub fn contains_edge(&self, edge: &Edge<V>) -> bool {
        self.edges.contains(edge)
    }

    /// The stored edge joining `a` and `b`, if any.
    pub fn edge_between(&self, a: &V, b: &V) -> Option<Edge<V>> {
        if !self.adjacency.get(a)?.contains(b) {
            return None;
        }
        Edge::new(self.vertex(a)?.clone(), self.vertex(b)?.clone()).ok()
    }

    pub fn neighbors(&self, id: &V) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.get(id).into_iter().flatten()
    }

    pub fn degree(&self, id: &V) -> usize {
        self.adjacency.get(id).map_or(0, BTreeSet::len)
    }

    pub fn incident_edges<'a>(&'a self, id: &'a V) -> impl Iterator<Item = Edge<V>> + 'a {
        self.neighbors(id).filter_map(move |n| self.edge_between(id, n))
    }

    /// Edges properly crossing `edge`.
    pub fn crossing(&self, edge: &Edge<V>) -> impl Iterator<Item = &Edge<V>> + '_ {
        self.crossings.get(edge).into_iter().flatten()
    }

    pub fn crossing_count(&self, edge: &Edge<V>) -> usize {
        self.crossings.get(edge).map_or(0, BTreeSet::len)
    }

    pub fn crosses(&self, e: &Edge<V>, f: &Edge<V>) -> bool {
        self.crossings.get(e).is_some_and(|set| set.contains(f))
    }

    /// Number of unordered crossing pairs.
    pub fn crossing_pairs(&self) -> usize {
        self.crossings.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Largest number of edges crossing a single edge.
    pub fn intersection_index(&self) -> usize {
        self.crossings.values().map(BTreeSet::len).max().unwrap_or(0)
    }

    pub fn is_intersecting(&self) -> bool {
        !self.crossings.is_empty()
    }

    /// Edge with the most crossings; ties go to the smallest edge.
    pub fn most_crossing_edge(&self) -> Option<&Edge<V>> {
        let mut best: Option<(&Edge<V>, usize)> = None;
        for (e, set) in &self.crossings {
            if best.map_or(true, |(_, n)| set.len() > n) {
                best = Some((e, set.len()));
            }
        }
        best.map(|(e, _)| e)
    }

    pub fn is_connected(&self) -> bool {
        match self.adjacency.keys().next() {
            None => true,
            Some(start) => self.reachable(start).len() == self.vertex_count(),
        }
    }

    fn reachable<'a>(&'a self, start: &'a V) -> BTreeSet<&'a V> {
        let mut seen = BTreeSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(v) = queue.pop_front() {
            for w in self.neighbors(v) {
                if seen.insert(w) {
                    queue.push_back(w);
                }
            }
        }
        seen
    }

    /// Vertex sets of the connected components, ordered by their smallest id.
    pub fn component_ids(&self) -> Vec<BTreeSet<V>> {
        let mut assigned: BTreeSet<&V> = BTreeSet::new();
        let mut out = Vec::new();
        for v in self.adjacency.keys() {
            if assigned.contains(v) {
                continue;
            }
            let comp = self.reachable(v);
            out.push(comp.iter().map(|&id| id.clone()).collect());
            assigned.extend(comp);
        }
        out
    }

    /// Connected components, each as an independent sub-graph.
    pub fn components(&self) -> Vec<Graph<V>> {
        self.component_ids()
            .iter()
            .map(|ids| self.induced(ids))
            .collect()
    }

    pub fn component_count(&self) -> usize {
        self.component_ids().len()
    }

    /// Sub-graph induced by `ids`; crossings are copied rather than recomputed.
    pub fn induced(&self, ids: &BTreeSet<V>) -> Graph<V> {
        let inside = |e: &Edge<V>| {
            let (a, b) = e.ids();
            ids.contains(a) && ids.contains(b)
        };
        let vertices: BTreeSet<Vertex<V>> = self
            .vertices
            .iter()
            .filter(|v| ids.contains(v.id()))
            .cloned()
            .collect();
        let adjacency: BTreeMap<V, BTreeSet<V>> = self
            .adjacency
            .iter()
            .filter(|(v, _)| ids.contains(*v))
            .map(|(v, ns)| {
                let kept = ns.iter().filter(|n| ids.contains(*n)).cloned().collect();
                (v.clone(), kept)
            })
            .collect();
        let edges: BTreeSet<Edge<V>> = self.edges.iter().filter(|e| inside(*e)).cloned().collect();
        let crossings: BTreeMap<Edge<V>, BTreeSet<Edge<V>>> = self
            .crossings
            .iter()
            .filter(|(e, _)| inside(*e))
            .filter_map(|(e, set)| {
                let kept: BTreeSet<Edge<V>> = set.iter().filter(|f| inside(*f)).cloned().collect();
                (!kept.is_empty()).then(|| (e.clone(), kept))
            })
            .collect();
        Graph {
            vertices,
            edges,
            adjacency,
            crossings,
        }
    }

    /// Every bridge of every component, in ascending order.
    pub fn bridges(&self) -> Vec<Edge<V>> {
        let ids: Vec<&V> = self.adjacency.keys().collect();
        let index: BTreeMap<&V, usize> = ids.iter().enumerate().map(|(i, &v)| (v, i)).collect();
        let adj: Vec<Vec<usize>> = ids
            .iter()
            .map(|v| self.neighbors(v).filter_map(|w| index.get(w).copied()).collect())
            .collect();
        let n = ids.len();
        let mut disc = vec![usize::MAX; n];
        let mut low = vec![0; n];
        let mut timer = 0;
        let mut out = Vec::new();
        for root in 0..n {
            if disc[root] != usize::MAX {
                continue;
            }
            disc[root] = timer;
            low[root] = timer;
            timer += 1;
            // (vertex, parent, next neighbor position)
            let mut stack: Vec<(usize, usize, usize)> = vec![(root, usize::MAX, 0)];
            while let Some(frame) = stack.last_mut() {
                let (v, parent) = (frame.0, frame.1);
                if frame.2 < adj[v].len() {
                    let w = adj[v][frame.2];
                    frame.2 += 1;
                    if w == parent {
                        continue;
                    }
                    if disc[w] == usize::MAX {
                        disc[w] = timer;
                        low[w] = timer;
                        timer += 1;
                        stack.push((w, v, 0));
                    } else {
                        low[v] = low[v].min(disc[w]);
                    }
                } else {
                    stack.pop();
                    if parent != usize::MAX {
                        low[parent] = low[parent].min(low[v]);
                        if low[v] > disc[parent] {
                            if let Some(e) = self.edge_between(ids[parent], ids[v]) {
                                out.push(e);
                            }
                        }
                    }
                }
            }
        }
        out.sort();
        out
    }
}

impl<V: VertexId> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph(n={}, m={}, index={}, crossing_pairs={})",
            self.vertex_count(),
            self.edge_count(),
            self.intersection_index(),
            self.crossing_pairs()
        )
    }
}
