//! JSON graph documents read and written by the CLI.
//!
//! Shape: `{ "vertices": [{"id", "x", "y"}], "edges": [[a, b]], "polygon": [ids]? }`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use ncst::api::{Edge, Graph, Vertex, Visualizer};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VertexDoc {
    pub id: i64,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphDoc {
    pub vertices: Vec<VertexDoc>,
    pub edges: Vec<[i64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polygon: Option<Vec<i64>>,
}

impl GraphDoc {
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_graph<V: Copy + Into<i64> + ncst::api::VertexId>(graph: &Graph<V>) -> Self {
        Self {
            vertices: graph
                .vertices()
                .map(|v| VertexDoc {
                    id: (*v.id()).into(),
                    x: v.pos().x,
                    y: v.pos().y,
                })
                .collect(),
            edges: graph
                .edges()
                .iter()
                .map(|e| [(*e.a().id()).into(), (*e.b().id()).into()])
                .collect(),
            polygon: None,
        }
    }

    /// Build the graph; edges must reference listed vertices.
    pub fn to_graph(&self) -> Result<Graph<i64>> {
        let mut by_id = BTreeMap::new();
        let mut g = Graph::new();
        for v in &self.vertices {
            let vertex = Vertex::new(v.id, v.x, v.y);
            if by_id.insert(v.id, vertex.clone()).is_some() {
                return Err(anyhow!("duplicate vertex id {}", v.id));
            }
            g.add_vertex(vertex);
        }
        for &[a, b] in &self.edges {
            let va = by_id
                .get(&a)
                .ok_or_else(|| anyhow!("edge {a}-{b} references unknown vertex {a}"))?;
            let vb = by_id
                .get(&b)
                .ok_or_else(|| anyhow!("edge {a}-{b} references unknown vertex {b}"))?;
            let e = Edge::new(va.clone(), vb.clone()).with_context(|| format!("edge {a}-{b}"))?;
            g.add_edge(e);
        }
        Ok(g)
    }
}

/// Result document written by `solve`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SolveDoc {
    pub algo: String,
    pub found: bool,
    pub graph: Option<GraphDoc>,
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

/// Writes every visualized graph to `<dir>/<label>.json`.
pub struct JsonDump {
    dir: PathBuf,
    pub written: Vec<PathBuf>,
    pub errors: Vec<anyhow::Error>,
}

impl JsonDump {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl Visualizer<i64> for JsonDump {
    fn visualize(&mut self, label: &str, graph: &Graph<i64>) {
        let path = self.dir.join(format!("{label}.json"));
        match write_json(&path, &GraphDoc::from_graph(graph)) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "dumped graph");
                self.written.push(path);
            }
            Err(e) => self.errors.push(e),
        }
    }
}
