use std::collections::{BTreeMap, BTreeSet};

use crate::graph::{Edge, Graph, VertexId};

/// Forest accumulator backed by union-find with path compression.
#[derive(Clone, Debug)]
pub struct IndependentSet<V: VertexId> {
    parent: BTreeMap<V, V>,
    edges: BTreeSet<Edge<V>>,
}

impl<V: VertexId> Default for IndependentSet<V> {
    fn default() -> Self {
        Self {
            parent: BTreeMap::new(),
            edges: BTreeSet::new(),
        }
    }
}

impl<V: VertexId> IndependentSet<V> {
    pub fn new() -> Self {
        Self::default()
    }

    fn find(&mut self, v: &V) -> V {
        let mut root = v.clone();
        while let Some(p) = self.parent.get(&root) {
            if *p == root {
                break;
            }
            root = p.clone();
        }
        let mut cur = v.clone();
        while cur != root {
            match self.parent.insert(cur, root.clone()) {
                Some(next) => cur = next,
                None => break,
            }
        }
        root
    }

    /// True iff the edge joins two different trees of the forest.
    pub fn can_be_added(&mut self, edge: &Edge<V>) -> bool {
        let (a, b) = edge.ids();
        self.find(a) != self.find(b)
    }

    /// Add `edge` if it keeps the set a forest.
    pub fn add(&mut self, edge: Edge<V>) -> bool {
        let (ra, rb) = {
            let (a, b) = edge.ids();
            (self.find(a), self.find(b))
        };
        if ra == rb {
            return false;
        }
        self.parent.insert(ra, rb);
        self.edges.insert(edge);
        true
    }

    /// Add every edge that keeps the set a forest, in iteration order.
    pub fn add_all<'a, I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = &'a Edge<V>>,
        V: 'a,
    {
        for e in edges {
            self.add(e.clone());
        }
    }

    /// Edges with both endpoints in `vertices`.
    pub fn filter(&self, vertices: &BTreeSet<V>) -> Self {
        let mut out = Self::new();
        out.add_all(self.edges.iter().filter(|e| {
            let (a, b) = e.ids();
            vertices.contains(a) && vertices.contains(b)
        }));
        out
    }

    pub fn edges(&self) -> &BTreeSet<Edge<V>> {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn to_graph(&self) -> Graph<V> {
        Graph::from_edges(self.edges.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::fixtures::*;

    #[test]
    fn rejects_cycle_closing_edge() {
        let g = square_cycle();
        let mut set = IndependentSet::new();
        set.add_all(g.edges());
        assert_eq!(set.len(), 3);
        let missing: Vec<_> = g.edges().difference(set.edges()).cloned().collect();
        assert_eq!(missing.len(), 1);
        assert!(!set.can_be_added(&missing[0]));
        assert!(!set.add(missing[0].clone()));
    }

    #[test]
    fn filter_keeps_internal_edges() {
        let g = star();
        let mut set = IndependentSet::new();
        set.add_all(g.edges());
        let sub = set.filter(&BTreeSet::from([1, 2, 3]));
        assert_eq!(sub.len(), 2);
        let mut sub = sub;
        assert!(sub.can_be_added(&edge((4, 1.0, 0.0, 5, 0.0, -1.0))));
        assert!(!sub.can_be_added(&edge((2, -1.0, 0.0, 3, 0.0, 1.0))));
    }

    #[test]
    fn clones_are_independent() {
        let g = star();
        let mut base = IndependentSet::new();
        let mut branch = base.clone();
        branch.add_all(g.edges());
        assert!(base.is_empty());
        assert!(base.add(edge((2, -1.0, 0.0, 3, 0.0, 1.0))));
        assert_eq!(branch.to_graph().vertex_count(), 5);
    }
}
