//! Error kinds for graph construction, matroid construction/queries, and the algorithms.

use thiserror::Error;

/// Graph construction failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("edge endpoints are the same vertex {id}")]
    Loop { id: String },
}

/// Matroid construction or query failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatroidError {
    #[error("subset is not contained in the ground set")]
    NotSubset,
    #[error("fixed elements are not contained in the base ground set")]
    FixedNotInElements,
    #[error("fixed elements are dependent in the base matroid")]
    FixedDependent,
    #[error("crossing relation is not laminar: edges of one crossing class do not all cross")]
    NonLaminarCrossings,
}

/// Failure of one of the search algorithms.
#[derive(Debug, Error)]
pub enum AlgorithmError {
    #[error("matroids have different ground sets")]
    ElementsMismatch,
    #[error(transparent)]
    Matroid(#[from] MatroidError),
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error("polygon does not match the graph: {0}")]
    PolygonMismatch(String),
    #[error("failed to build worker pool")]
    Pool(#[from] rayon::ThreadPoolBuildError),
    #[error("search worker panicked")]
    WorkerPanicked,
    #[error("internal invariant violated: {0}")]
    Invariant(&'static str),
}
