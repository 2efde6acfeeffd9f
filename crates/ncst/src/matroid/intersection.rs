use std::collections::{BTreeMap, BTreeSet};

use crate::error::MatroidError;
use crate::graph::{Edge, Graph, VertexId};

use super::Matroid;

/// Independent sets are pairwise non-crossing edge sets.
///
/// Edges are grouped into classes, the connected components of the crossing
/// relation. This is a partition matroid (at most one edge per class) as long
/// as every class is a clique of mutually crossing edges.
#[derive(Clone, Debug)]
pub struct IntersectionMatroid<V: VertexId> {
    elements: BTreeSet<Edge<V>>,
    class: BTreeMap<Edge<V>, usize>,
}

impl<V: VertexId> IntersectionMatroid<V> {
    /// With `validate`, fails unless every crossing class is a clique.
    pub fn new(graph: &Graph<V>, validate: bool) -> Result<Self, MatroidError> {
        let mut class: BTreeMap<Edge<V>, usize> = BTreeMap::new();
        let mut sizes: Vec<usize> = Vec::new();
        for start in graph.edges() {
            if class.contains_key(start) {
                continue;
            }
            let id = sizes.len();
            class.insert(start.clone(), id);
            let mut size = 1;
            let mut stack = vec![start];
            while let Some(e) = stack.pop() {
                for f in graph.crossing(e) {
                    if !class.contains_key(f) {
                        class.insert(f.clone(), id);
                        size += 1;
                        stack.push(f);
                    }
                }
            }
            sizes.push(size);
        }
        if validate {
            let laminar = class
                .iter()
                .all(|(e, &id)| graph.crossing_count(e) + 1 == sizes[id]);
            if !laminar {
                return Err(MatroidError::NonLaminarCrossings);
            }
        }
        Ok(Self {
            elements: graph.edges().clone(),
            class,
        })
    }
}

impl<V: VertexId> Matroid<Edge<V>> for IntersectionMatroid<V> {
    fn elements(&self) -> &BTreeSet<Edge<V>> {
        &self.elements
    }

    /// The first two subset edges falling into the same class.
    fn find_circuit_unchecked(&self, subset: &BTreeSet<Edge<V>>) -> Option<BTreeSet<Edge<V>>> {
        let mut seen: BTreeMap<usize, &Edge<V>> = BTreeMap::new();
        for e in subset {
            let id = *self.class.get(e)?;
            if let Some(first) = seen.insert(id, e) {
                return Some(BTreeSet::from([first.clone(), e.clone()]));
            }
        }
        None
    }
}
