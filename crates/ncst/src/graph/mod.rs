//! Geometric graphs with live crossing tracking.
//!
//! Vertices carry planar coordinates and edges are straight segments. Every edge
//! insertion or removal updates adjacency and the crossing relation in the same
//! operation, so crossing queries never need a rescan.
//!
//! - `types.rs`: `Vertex`, `Edge`, the `VertexId` bound.
//! - `store.rs`: the `Graph` container and its mutations.
//! - `query.rs`: lookups, crossing statistics, connectivity, components, bridges.

mod query;
mod store;
mod types;

pub use store::Graph;
pub use types::{Edge, Vertex, VertexId};

#[cfg(test)]
pub(crate) mod fixtures;
