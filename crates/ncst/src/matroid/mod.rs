//! Matroids over graph edges and maximum common independent sets.
//!
//! A matroid is queried only through its ground set and a circuit query: for an
//! independent `I` and an element `x`, the circuit of `I + x` (if any) tells which
//! elements can be exchanged for `x`. That is all the intersection algorithm needs.
//!
//! - `cycle.rs`: forests of a graph.
//! - `intersection.rs`: pairwise non-crossing edge sets.
//! - `fixed.rs`: contraction by a fixed independent set.
//! - `algorithm.rs`: augmenting-path matroid intersection.

use std::collections::BTreeSet;

use crate::error::MatroidError;
use crate::graph::{Edge, Graph, VertexId};

mod algorithm;
mod cycle;
mod fixed;
mod intersection;

pub use algorithm::find_intersection;
pub use cycle::CycleMatroid;
pub use fixed::FixedElements;
pub use intersection::IntersectionMatroid;

/// Ground set plus circuit query.
pub trait Matroid<E: Ord + Clone> {
    fn elements(&self) -> &BTreeSet<E>;

    /// Circuit contained in `subset`, assuming `subset ⊆ elements()` and non-empty.
    fn find_circuit_unchecked(&self, subset: &BTreeSet<E>) -> Option<BTreeSet<E>>;

    /// Circuit contained in `subset`, or `None` if `subset` is independent.
    fn find_circuit(&self, subset: &BTreeSet<E>) -> Result<Option<BTreeSet<E>>, MatroidError> {
        if !subset.is_subset(self.elements()) {
            return Err(MatroidError::NotSubset);
        }
        if subset.is_empty() {
            return Ok(None);
        }
        Ok(self.find_circuit_unchecked(subset))
    }

    fn is_independent(&self, subset: &BTreeSet<E>) -> Result<bool, MatroidError> {
        Ok(self.find_circuit(subset)?.is_none())
    }
}

/// Cycle matroid of `graph` with `fixed` contracted.
pub fn cycle_matroid_with_fixed<V: VertexId>(
    graph: &Graph<V>,
    fixed: BTreeSet<Edge<V>>,
) -> Result<FixedElements<Edge<V>, CycleMatroid<V>>, MatroidError> {
    FixedElements::new(CycleMatroid::new(graph), fixed)
}

/// Validated intersection matroid of `graph` with `fixed` contracted.
pub fn intersection_matroid_with_fixed<V: VertexId>(
    graph: &Graph<V>,
    fixed: BTreeSet<Edge<V>>,
) -> Result<FixedElements<Edge<V>, IntersectionMatroid<V>>, MatroidError> {
    FixedElements::new(IntersectionMatroid::new(graph, true)?, fixed)
}
