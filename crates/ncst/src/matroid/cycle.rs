use std::collections::{BTreeMap, BTreeSet};

use crate::graph::{Edge, Graph, VertexId};

use super::Matroid;

/// Independent sets are forests.
#[derive(Clone, Debug)]
pub struct CycleMatroid<V: VertexId> {
    elements: BTreeSet<Edge<V>>,
}

impl<V: VertexId> CycleMatroid<V> {
    pub fn new(graph: &Graph<V>) -> Self {
        Self {
            elements: graph.edges().clone(),
        }
    }
}

impl<V: VertexId> Matroid<Edge<V>> for CycleMatroid<V> {
    fn elements(&self) -> &BTreeSet<Edge<V>> {
        &self.elements
    }

    /// Depth-first search; the first back edge closes a cycle through the DFS tree.
    fn find_circuit_unchecked(&self, subset: &BTreeSet<Edge<V>>) -> Option<BTreeSet<Edge<V>>> {
        let mut adj: BTreeMap<&V, Vec<(&V, &Edge<V>)>> = BTreeMap::new();
        for e in subset {
            let (a, b) = e.ids();
            adj.entry(a).or_default().push((b, e));
            adj.entry(b).or_default().push((a, e));
        }
        // vertex -> tree edge to its parent (None for roots)
        let mut parent: BTreeMap<&V, Option<(&V, &Edge<V>)>> = BTreeMap::new();
        for &root in adj.keys() {
            if parent.contains_key(root) {
                continue;
            }
            parent.insert(root, None);
            let mut stack: Vec<(&V, usize)> = vec![(root, 0)];
            while let Some(frame) = stack.last_mut() {
                let v = frame.0;
                let nbrs = &adj[v];
                if frame.1 >= nbrs.len() {
                    stack.pop();
                    continue;
                }
                let (w, e) = nbrs[frame.1];
                frame.1 += 1;
                let via = parent.get(v).copied().flatten().map(|(_, pe)| pe);
                if via == Some(e) {
                    continue;
                }
                if parent.contains_key(w) {
                    return Some(close_cycle(&parent, v, w, e));
                }
                parent.insert(w, Some((v, e)));
                stack.push((w, 0));
            }
        }
        None
    }
}

/// Tree path from `v` up to its ancestor `w`, plus the back edge.
fn close_cycle<V: VertexId>(
    parent: &BTreeMap<&V, Option<(&V, &Edge<V>)>>,
    v: &V,
    w: &V,
    back: &Edge<V>,
) -> BTreeSet<Edge<V>> {
    let mut cycle = BTreeSet::from([back.clone()]);
    let mut cur = v;
    while cur != w {
        match parent.get(cur).copied().flatten() {
            Some((up, e)) => {
                cycle.insert(e.clone());
                cur = up;
            }
            None => break,
        }
    }
    cycle
}
