//! Read-only hook for rendering or dumping graphs.

use crate::graph::{Graph, VertexId};

/// Receives labelled graphs; implementations read vertices and edges only.
pub trait Visualizer<V: VertexId> {
    fn visualize(&mut self, label: &str, graph: &Graph<V>);
}

/// Keeps `(label, vertex count, edge list)` of every visualized graph, in call order.
#[derive(Clone, Debug, Default)]
pub struct Snapshots<V> {
    pub items: Vec<(String, usize, Vec<(V, V)>)>,
}

impl<V: VertexId> Visualizer<V> for Snapshots<V> {
    fn visualize(&mut self, label: &str, graph: &Graph<V>) {
        let edges = graph
            .edges()
            .iter()
            .map(|e| (e.a().id().clone(), e.b().id().clone()))
            .collect();
        self.items
            .push((label.to_string(), graph.vertex_count(), edges));
    }
}

/// Visualize the input graph and, if present, the search result under `<name>_graph` / `<name>_result`.
pub fn visualize_run<V: VertexId, Z: Visualizer<V> + ?Sized>(
    viz: &mut Z,
    name: &str,
    input: &Graph<V>,
    result: Option<&Graph<V>>,
) {
    viz.visualize(&format!("{name}_graph"), input);
    if let Some(r) = result {
        viz.visualize(&format!("{name}_result"), r);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::fixtures::*;
    use crate::search::find_bncf;

    #[test]
    fn snapshots_record_labels_and_edges() {
        let g = index1_without_ncst();
        let forest = find_bncf(&g).unwrap();
        let mut snaps = Snapshots::default();
        visualize_run(&mut snaps, "idx1", &g, Some(&forest));
        assert_eq!(snaps.items.len(), 2);
        assert_eq!(snaps.items[0].0, "idx1_graph");
        assert_eq!(snaps.items[0].2.len(), 4);
        assert_eq!(snaps.items[1].0, "idx1_result");
        assert_eq!(snaps.items[1].1, 5);
        assert_eq!(snaps.items[1].2.len(), 3);
    }
}
