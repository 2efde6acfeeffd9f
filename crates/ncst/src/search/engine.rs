//! Branch-and-bound over graph snapshots with fork-join parallelism.
//!
//! Each node decides, in order: trivial graph, disconnection (NCST), no crossings,
//! intersection index 1 (exact via matroid intersection), bridges (NCST), and
//! finally a split on the most crossing edge into exclude/include children.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;

use rayon::prelude::*;
use tracing::{debug, info, trace};

use crate::error::AlgorithmError;
use crate::graph::{Edge, Graph, VertexId};
use crate::matroid::{find_intersection, CycleMatroid, FixedElements, IntersectionMatroid};

use super::independent::IndependentSet;
use super::types::{Mode, Outcome, Progress, SearchCfg};

type NodeResult<V> = Result<Outcome<V>, AlgorithmError>;

/// Configured search entry point.
#[derive(Clone, Copy, Debug, Default)]
pub struct Search {
    cfg: SearchCfg,
}

impl Search {
    pub fn new(cfg: SearchCfg) -> Self {
        Self { cfg }
    }

    pub fn cfg(&self) -> &SearchCfg {
        &self.cfg
    }

    /// Non-crossing spanning tree of `graph`, if one exists.
    pub fn ncst<V: VertexId>(&self, graph: &Graph<V>) -> NodeResult<V> {
        self.run(graph, Mode::Ncst)
    }

    /// Largest non-crossing spanning forest of `graph`.
    pub fn bncf<V: VertexId>(&self, graph: &Graph<V>) -> Result<Graph<V>, AlgorithmError> {
        match self.run(graph, Mode::Bncf)? {
            Outcome::Found(g) => Ok(g),
            Outcome::NoSolution => Err(AlgorithmError::Invariant(
                "forest search ended without a forest",
            )),
        }
    }

    /// Run the recursion on a dedicated pool while this thread reports progress.
    pub fn run<V: VertexId>(&self, graph: &Graph<V>, mode: Mode) -> NodeResult<V> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.cfg.threads)
            .build()?;
        let progress = Progress::default();
        let runner = SearchRunner {
            cfg: &self.cfg,
            mode,
            progress: &progress,
        };
        debug!(?mode, %graph, threads = pool.current_num_threads(), "search start");
        let outcome = thread::scope(|s| {
            let (tx, rx) = mpsc::channel();
            let (pool, runner) = (&pool, &runner);
            let worker = s.spawn(move || {
                let result = pool.install(|| runner.root(graph));
                let _ = tx.send(result);
            });
            let received = loop {
                match rx.recv_timeout(self.cfg.progress_interval) {
                    Ok(result) => break Some(result),
                    Err(RecvTimeoutError::Timeout) => info!(
                        created = progress.created(),
                        processed = progress.processed(),
                        remaining = progress.remaining(),
                        "search progress"
                    ),
                    Err(RecvTimeoutError::Disconnected) => break None,
                }
            };
            match (worker.join(), received) {
                (Ok(()), Some(result)) => result,
                _ => Err(AlgorithmError::WorkerPanicked),
            }
        })?;
        debug!(
            ?mode,
            nodes = progress.processed(),
            found = outcome.is_found(),
            "search done"
        );
        Ok(outcome)
    }
}

/// Shared, read-only context of one search run.
struct SearchRunner<'a> {
    cfg: &'a SearchCfg,
    mode: Mode,
    progress: &'a Progress,
}

impl SearchRunner<'_> {
    fn root<V: VertexId>(&self, graph: &Graph<V>) -> NodeResult<V> {
        self.progress.node_created();
        let outcome = self.node(graph.clone(), IndependentSet::new(), 0, "r".to_string())?;
        match (self.mode, outcome) {
            (Mode::Bncf, Outcome::NoSolution) => Err(AlgorithmError::Invariant(
                "forest search ended without a forest",
            )),
            (_, Outcome::NoSolution) => Ok(Outcome::NoSolution),
            (_, Outcome::Found(mut result)) => {
                for v in graph.vertices() {
                    result.add_vertex(v.clone());
                }
                Ok(Outcome::Found(result))
            }
        }
    }

    fn child<V: VertexId>(
        &self,
        graph: Graph<V>,
        fixed: IndependentSet<V>,
        depth: usize,
        path: String,
    ) -> NodeResult<V> {
        self.progress.node_created();
        self.node(graph, fixed, depth, path)
    }

    fn node<V: VertexId>(
        &self,
        graph: Graph<V>,
        fixed: IndependentSet<V>,
        depth: usize,
        path: String,
    ) -> NodeResult<V> {
        let result = self.decide(graph, fixed, depth, &path);
        self.progress.node_processed();
        result
    }

    fn decide<V: VertexId>(
        &self,
        graph: Graph<V>,
        mut fixed: IndependentSet<V>,
        depth: usize,
        path: &str,
    ) -> NodeResult<V> {
        if graph.vertex_count() <= 1 {
            trace!(depth, path, "trivial");
            return Ok(Outcome::Found(graph));
        }
        if self.mode == Mode::Ncst && !graph.is_connected() {
            trace!(depth, path, "disconnected");
            return Ok(Outcome::NoSolution);
        }
        if !graph.is_intersecting() {
            trace!(depth, path, "non-crossing");
            fixed.add_all(graph.edges());
            return Ok(Outcome::Found(spanning(&graph, fixed.edges())));
        }
        if graph.intersection_index() == 1 {
            trace!(depth, path, "intersection index 1");
            return self.solve_index_one(&graph, &fixed);
        }
        if self.mode == Mode::Ncst {
            let bridges = graph.bridges();
            if !bridges.is_empty() {
                trace!(depth, path, bridges = bridges.len(), "splitting by bridges");
                return self.split_by_bridges(graph, fixed, bridges, depth, path);
            }
        }
        self.split_by_edge(graph, fixed, depth, path)
    }

    /// Exact for index 1: every crossing class is a pair, so the intersection matroid is a matroid.
    fn solve_index_one<V: VertexId>(
        &self,
        graph: &Graph<V>,
        fixed: &IndependentSet<V>,
    ) -> NodeResult<V> {
        let pinned = fixed.edges().clone();
        let m1 = FixedElements::new(CycleMatroid::new(graph), pinned.clone())?;
        let m2 = FixedElements::new(
            IntersectionMatroid::new(graph, self.cfg.validate_crossings)?,
            pinned.clone(),
        )?;
        let chosen = find_intersection(&m1, &m2)?;
        let size = pinned.len() + chosen.len();
        if self.mode == Mode::Ncst && size + 1 != graph.vertex_count() {
            return Ok(Outcome::NoSolution);
        }
        Ok(Outcome::Found(spanning(graph, pinned.iter().chain(&chosen))))
    }

    /// Bridges belong to every spanning tree: drop what crosses them, then solve each side.
    ///
    /// Sides are solved independently only when no crossing pair spans two of them;
    /// otherwise the reduced graph is split on its most crossing edge instead.
    fn split_by_bridges<V: VertexId>(
        &self,
        mut graph: Graph<V>,
        fixed: IndependentSet<V>,
        bridges: Vec<Edge<V>>,
        depth: usize,
        path: &str,
    ) -> NodeResult<V> {
        for (i, b) in bridges.iter().enumerate() {
            if bridges[i + 1..].iter().any(|c| graph.crosses(b, c)) {
                debug!(depth, path, bridge = ?b, "bridges cross each other");
                return Ok(Outcome::NoSolution);
            }
        }
        for b in &bridges {
            graph.remove_crossing(b);
        }
        let mut cut = graph.clone();
        for b in &bridges {
            cut.remove_edge(b);
        }
        let parts = cut.component_ids();
        if parts.len() > bridges.len() + 1 {
            debug!(depth, path, parts = parts.len(), "crossing removal disconnected the graph");
            return Ok(Outcome::NoSolution);
        }
        if parts.len() < bridges.len() + 1 {
            return Err(AlgorithmError::Invariant(
                "removing bridges produced too few components",
            ));
        }
        if crosses_between_parts(&cut, &parts) {
            debug!(depth, path, "crossings span bridge sides, splitting by edge");
            return self.split_by_edge(graph, fixed, depth, path);
        }
        let results: Vec<NodeResult<V>> = parts
            .par_iter()
            .enumerate()
            .map(|(k, ids)| {
                self.child(
                    cut.induced(ids),
                    fixed.filter(ids),
                    depth + 1,
                    format!("{path}b{k}"),
                )
            })
            .collect();
        let mut tree = spanning(&graph, &bridges);
        for r in results {
            match r? {
                Outcome::Found(sub) => {
                    for e in sub.edges() {
                        tree.add_edge(e.clone());
                    }
                }
                Outcome::NoSolution => return Ok(Outcome::NoSolution),
            }
        }
        Ok(Outcome::Found(tree))
    }

    /// Exclude or include the most crossing edge; both children run in parallel.
    fn split_by_edge<V: VertexId>(
        &self,
        graph: Graph<V>,
        mut fixed: IndependentSet<V>,
        depth: usize,
        path: &str,
    ) -> NodeResult<V> {
        let Some(edge) = graph.most_crossing_edge().cloned() else {
            return Err(AlgorithmError::Invariant("intersecting graph has no crossing edge"));
        };
        let mut excluded = graph.clone();
        excluded.remove_edge(&edge);
        let exclude_fixed = fixed.clone();
        let include = if fixed.can_be_added(&edge) {
            let mut included = graph;
            included.remove_crossing(&edge);
            fixed.add(edge.clone());
            trace!(depth, path, ?edge, "splitting by most crossing edge, edge included");
            Some((included, fixed))
        } else {
            trace!(depth, path, ?edge, "splitting by most crossing edge, edge excluded only");
            None
        };
        let (ex, inc) = rayon::join(
            || self.child(excluded, exclude_fixed, depth + 1, format!("{path}e")),
            || match include {
                Some((g, f)) => self.child(g, f, depth + 1, format!("{path}i")).map(Some),
                None => Ok(None),
            },
        );
        let (ex, inc) = (ex?, inc?.unwrap_or(Outcome::NoSolution));
        Ok(match self.mode {
            Mode::Bncf => {
                if inc.edge_count() > ex.edge_count() {
                    inc
                } else {
                    ex
                }
            }
            Mode::Ncst => {
                if ex.is_found() {
                    ex
                } else {
                    inc
                }
            }
        })
    }
}

/// True if some crossing pair of `graph` has its two edges in different `parts`.
pub(super) fn crosses_between_parts<V: VertexId>(
    graph: &Graph<V>,
    parts: &[BTreeSet<V>],
) -> bool {
    let part_of: BTreeMap<&V, usize> = parts
        .iter()
        .enumerate()
        .flat_map(|(k, ids)| ids.iter().map(move |v| (v, k)))
        .collect();
    graph.edges().iter().any(|e| {
        let side = part_of.get(e.a().id());
        graph.crossing(e).any(|f| part_of.get(f.a().id()) != side)
    })
}

/// Graph over all vertices of `graph` holding exactly `edges`.
fn spanning<'a, V, I>(graph: &Graph<V>, edges: I) -> Graph<V>
where
    V: VertexId + 'a,
    I: IntoIterator<Item = &'a Edge<V>>,
{
    let mut out = Graph::new();
    for v in graph.vertices() {
        out.add_vertex(v.clone());
    }
    for e in edges {
        out.add_edge(e.clone());
    }
    out
}
