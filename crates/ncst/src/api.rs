//! Curated boundary surface for callers (CLI, benches, integration tests).
//!
//! Prefer these re-exports over reaching into submodules; the module layout
//! behind them may change.

// Graph model
pub use crate::graph::{Edge, Graph, Vertex, VertexId};
// Errors
pub use crate::error::{AlgorithmError, GraphError, MatroidError};
// Matroids
pub use crate::matroid::{
    cycle_matroid_with_fixed, find_intersection, intersection_matroid_with_fixed, CycleMatroid,
    FixedElements, IntersectionMatroid, Matroid,
};
// Search
pub use crate::polygon::find_polygon_ncst;
pub use crate::search::{find_bncf, find_ncst, Mode, Outcome, Search, SearchCfg};
// Generators
pub use crate::rand::{
    draw_convex_polygon_graph, draw_random_graph, ConvexPolygonCfg, RandomGraphCfg, ReplayToken,
};
// Visualization hook
pub use crate::visual::{visualize_run, Snapshots, Visualizer};
