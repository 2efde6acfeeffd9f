//! Search configuration, outcome and progress counters.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::graph::{Graph, VertexId};

/// Which structure the search looks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Non-crossing spanning tree; may end without a result.
    Ncst,
    /// Largest non-crossing spanning forest; always produces a result.
    Bncf,
}

/// Result of a search: a structure or a proof that none exists.
#[derive(Clone, Debug)]
pub enum Outcome<V: VertexId> {
    Found(Graph<V>),
    NoSolution,
}

impl<V: VertexId> Outcome<V> {
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }

    pub fn found(self) -> Option<Graph<V>> {
        match self {
            Outcome::Found(g) => Some(g),
            Outcome::NoSolution => None,
        }
    }

    pub fn as_found(&self) -> Option<&Graph<V>> {
        match self {
            Outcome::Found(g) => Some(g),
            Outcome::NoSolution => None,
        }
    }

    pub(crate) fn edge_count(&self) -> Option<usize> {
        self.as_found().map(Graph::edge_count)
    }
}

/// Search configuration.
#[derive(Clone, Copy, Debug)]
pub struct SearchCfg {
    /// Worker threads; 0 lets rayon decide.
    pub threads: usize,
    /// Period of the progress log while the search runs.
    pub progress_interval: Duration,
    /// Check that crossing classes are cliques before building intersection matroids.
    pub validate_crossings: bool,
}
impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            threads: 0,
            progress_interval: Duration::from_secs(1),
            validate_crossings: true,
        }
    }
}

/// Lock-free node counters, read only for progress reporting.
#[derive(Debug, Default)]
pub struct Progress {
    created: AtomicUsize,
    processed: AtomicUsize,
}

impl Progress {
    pub(crate) fn node_created(&self) {
        self.created.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn node_processed(&self) {
        self.processed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn created(&self) -> usize {
        self.created.load(Ordering::Relaxed)
    }

    pub fn processed(&self) -> usize {
        self.processed.load(Ordering::Relaxed)
    }

    pub fn remaining(&self) -> usize {
        self.created().saturating_sub(self.processed())
    }
}
