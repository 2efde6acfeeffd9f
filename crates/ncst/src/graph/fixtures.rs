//! Small hand-built graphs shared by the unit tests of several modules.

use super::{Edge, Graph, Vertex};

pub(crate) type Seg = (i32, f64, f64, i32, f64, f64);

pub(crate) fn edge(s: Seg) -> Edge<i32> {
    let (a, ax, ay, b, bx, by) = s;
    Edge::new(Vertex::new(a, ax, ay), Vertex::new(b, bx, by)).unwrap()
}

pub(crate) fn graph_of(segs: &[Seg]) -> Graph<i32> {
    Graph::from_edges(segs.iter().copied().map(edge))
}

pub(crate) fn single_vertex() -> Graph<i32> {
    let mut g = Graph::new();
    g.add_vertex(Vertex::new(1, 1.0, 1.0));
    g
}

pub(crate) fn not_connected() -> Graph<i32> {
    let mut g = graph_of(&[(1, 1.0, 1.0, 2, 2.0, 2.0)]);
    g.add_vertex(Vertex::new(3, 3.0, 3.0));
    g
}

pub(crate) fn star() -> Graph<i32> {
    graph_of(&[
        (1, 0.0, 0.0, 2, -1.0, 0.0),
        (1, 0.0, 0.0, 3, 0.0, 1.0),
        (1, 0.0, 0.0, 4, 1.0, 0.0),
        (1, 0.0, 0.0, 5, 0.0, -1.0),
    ])
}

pub(crate) fn square_cycle() -> Graph<i32> {
    graph_of(&[
        (1, -1.0, -1.0, 2, -1.0, 1.0),
        (2, -1.0, 1.0, 3, 1.0, 1.0),
        (3, 1.0, 1.0, 4, 1.0, -1.0),
        (4, 1.0, -1.0, 1, -1.0, -1.0),
    ])
}

const IDX1_BASE: [Seg; 4] = [
    (1, 0.0, 0.0, 4, 1.0, 1.0),
    (2, 0.0, 1.0, 3, 1.0, 0.0),
    (3, 1.0, 0.0, 4, 1.0, 1.0),
    (4, 1.0, 1.0, 5, 2.0, 1.0),
];
const SIDE_1_2: Seg = (1, 0.0, 0.0, 2, 0.0, 1.0);
const DIAG_1_5: Seg = (1, 0.0, 0.0, 5, 2.0, 1.0);

/// Two crossing diagonals; vertex 2 hangs on the crossing edge only.
pub(crate) fn index1_without_ncst() -> Graph<i32> {
    graph_of(&IDX1_BASE)
}

pub(crate) fn index1_with_ncst() -> Graph<i32> {
    let mut g = graph_of(&IDX1_BASE);
    g.add_edge(edge(SIDE_1_2));
    g
}

pub(crate) fn index2_without_ncst() -> Graph<i32> {
    let mut g = graph_of(&IDX1_BASE);
    g.add_edge(edge(DIAG_1_5));
    g
}

pub(crate) fn index2_with_ncst() -> Graph<i32> {
    let mut g = index1_with_ncst();
    g.add_edge(edge(DIAG_1_5));
    g
}

/// Polygon order for the index-1/2 graphs: 1(0,0) 2(0,1) 4(1,1) 5(2,1) 3(1,0).
pub(crate) const IDX_POLYGON: [i32; 5] = [1, 2, 4, 5, 3];

const BRIDGES_BASE: [Seg; 13] = [
    (0, 0.0, 0.0, 1, 2.0, 0.0),
    (1, 2.0, 0.0, 2, 5.0, 0.0),
    (1, 2.0, 0.0, 3, 2.0, 2.0),
    (3, 2.0, 2.0, 4, 1.0, 2.0),
    (4, 1.0, 2.0, 5, 1.0, -2.0),
    (5, 1.0, -2.0, 6, 2.0, -2.0),
    (6, 2.0, -2.0, 11, 2.0, -1.0),
    (11, 2.0, -1.0, 12, 0.0, -1.0),
    (2, 5.0, 0.0, 7, 5.0, 2.0),
    (7, 5.0, 2.0, 8, 4.0, 2.0),
    (8, 4.0, 2.0, 9, 4.0, -2.0),
    (9, 4.0, -2.0, 10, 5.0, -2.0),
    (10, 5.0, -2.0, 2, 5.0, 0.0),
];

/// Two crossing bridges (0-1 and 4-5) make a spanning tree impossible.
pub(crate) fn bridges_without_ncst() -> Graph<i32> {
    graph_of(&BRIDGES_BASE)
}

/// Closing 11-1 turns the left chain into a cycle, so 4-5 is no longer a bridge.
pub(crate) fn bridges_with_ncst() -> Graph<i32> {
    let mut g = graph_of(&BRIDGES_BASE);
    g.add_edge(edge((11, 2.0, -1.0, 1, 2.0, 0.0)));
    g
}

/// Six vertices whose edges 1-6, 2-5 and 3-4 pairwise cross. Edge order:
/// `[1-2, 1-6, 2-5, 3-4, 3-5, 4-6]`.
pub(crate) fn crossing_clique() -> (Graph<i32>, Vec<Edge<i32>>) {
    let v1 = Vertex::new(1, 1.0, 3.0);
    let v2 = Vertex::new(2, 3.0, 3.0);
    let v3 = Vertex::new(3, 0.0, 1.0);
    let v4 = Vertex::new(4, 4.0, 1.0);
    let v5 = Vertex::new(5, 1.0, 0.0);
    let v6 = Vertex::new(6, 3.0, 0.0);
    let pairs = [
        (&v1, &v2),
        (&v1, &v6),
        (&v2, &v5),
        (&v3, &v4),
        (&v3, &v5),
        (&v4, &v6),
    ];
    let edges: Vec<Edge<i32>> = pairs
        .iter()
        .map(|(a, b)| Edge::new((*a).clone(), (*b).clone()).unwrap())
        .collect();
    (Graph::from_edges(edges.iter().cloned()), edges)
}

/// House-shaped graph without crossings: 5 vertices, 8 edges.
pub(crate) fn no_intersections() -> Graph<i32> {
    let v1 = Vertex::new(1, 0.0, 2.0);
    let v2 = Vertex::new(2, 2.0, 2.0);
    let v3 = Vertex::new(3, 1.0, 1.0);
    let v4 = Vertex::new(4, 0.0, 0.0);
    let v5 = Vertex::new(5, 2.0, 0.0);
    let pairs = [
        (&v1, &v2),
        (&v1, &v3),
        (&v1, &v4),
        (&v2, &v3),
        (&v2, &v5),
        (&v3, &v4),
        (&v3, &v5),
        (&v4, &v5),
    ];
    Graph::from_edges(
        pairs
            .iter()
            .map(|(a, b)| Edge::new((*a).clone(), (*b).clone()).unwrap()),
    )
}

/// True iff no two edges of `g` cross, checked pairwise from coordinates.
pub(crate) fn pairwise_non_crossing(g: &Graph<i32>) -> bool {
    let edges: Vec<&Edge<i32>> = g.edges().iter().collect();
    edges
        .iter()
        .enumerate()
        .all(|(i, e)| edges[i + 1..].iter().all(|f| !e.crosses(f)))
}

/// Triangles 0-1-2 and 3-4-5 joined by the bridge 0-4; 0-1 and 1-2 each cross
/// 3-5 and 4-5, so every spanning tree crosses itself.
pub(crate) fn bridge_with_crossing_sides() -> Graph<i32> {
    let p = [
        (0.679, 0.196),
        (0.256, 0.568),
        (0.168, 0.248),
        (0.826, 0.744),
        (0.582, 0.518),
        (0.008, 0.198),
    ];
    let seg = |a: usize, b: usize| -> Seg {
        (a as i32, p[a].0, p[a].1, b as i32, p[b].0, p[b].1)
    };
    graph_of(&[
        seg(0, 1),
        seg(0, 2),
        seg(0, 4),
        seg(1, 2),
        seg(3, 4),
        seg(3, 5),
        seg(4, 5),
    ])
}
