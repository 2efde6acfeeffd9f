//! Non-crossing spanning trees and forests of geometric graphs.
//!
//! Layout
//! - `graph`: geometric graphs with live crossing tracking.
//! - `matroid`: cycle/intersection matroids, fixed-element contraction, matroid intersection.
//! - `search`: branch-and-bound NCST/BNCF search on a rayon pool.
//! - `polygon`: interval DP for graphs whose vertices form a simple polygon.
//! - `rand`: reproducible random graph generators.
//! - `visual`: read-only hook for dumping graphs.
//!
//! Results are deterministic: vertex ids are ordered and every set/map is a B-tree.

pub mod api;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod matroid;
pub mod polygon;
pub mod rand;
pub mod search;
pub mod visual;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{AlgorithmError, GraphError, MatroidError};
pub use graph::{Edge, Graph, Vertex};
pub use matroid::find_intersection;
pub use polygon::find_polygon_ncst;
pub use search::{find_bncf, find_ncst, Outcome, Search, SearchCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::*;
    pub use nalgebra::Point2;
}
