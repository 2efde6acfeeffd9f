//! Branch-and-bound search for non-crossing spanning trees and forests.
//!
//! Purpose
//! - NCST: decide whether a spanning tree without crossings exists and return one.
//! - BNCF: return a largest non-crossing spanning forest; always succeeds.
//!
//! Model
//! - Every recursion node owns a graph snapshot and the edges already fixed by
//!   its ancestors. Index-1 nodes are solved exactly by matroid intersection;
//!   other nodes split on bridges (NCST) or on the most crossing edge.
//! - Siblings run on a rayon pool; the calling thread logs progress counters.

mod engine;
mod independent;
mod types;

pub use engine::Search;
pub use independent::IndependentSet;
pub use types::{Mode, Outcome, Progress, SearchCfg};

use crate::error::AlgorithmError;
use crate::graph::{Graph, VertexId};

/// NCST with the default configuration.
pub fn find_ncst<V: VertexId>(graph: &Graph<V>) -> Result<Outcome<V>, AlgorithmError> {
    Search::default().ncst(graph)
}

/// BNCF with the default configuration.
pub fn find_bncf<V: VertexId>(graph: &Graph<V>) -> Result<Graph<V>, AlgorithmError> {
    Search::default().bncf(graph)
}
