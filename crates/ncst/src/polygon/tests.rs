use super::*;
use crate::graph::fixtures::*;
use crate::graph::Vertex;

fn exists(g: &Graph<i32>, polygon: &[i32]) -> bool {
    match find_polygon_ncst(g, polygon).unwrap() {
        Outcome::Found(tree) => {
            assert_eq!(tree.vertex_count(), g.vertex_count());
            assert_eq!(tree.edge_count() + 1, g.vertex_count().max(1));
            assert!(tree.is_connected());
            assert!(pairwise_non_crossing(&tree));
            assert!(tree.edges().is_subset(g.edges()));
            true
        }
        Outcome::NoSolution => false,
    }
}

#[test]
fn combine_rule() {
    use SpanState::*;
    assert_eq!(SpanState::combine(Invalid, Tree, true), Invalid);
    assert_eq!(SpanState::combine(Tree, Tree, false), Tree);
    assert_eq!(SpanState::combine(Tree, Forest, true), Tree);
    assert_eq!(SpanState::combine(Forest, Tree, false), Forest);
    assert_eq!(SpanState::combine(Forest, Forest, true), NoForest);
    assert_eq!(SpanState::combine(NoForest, Tree, true), NoForest);
    assert!(Invalid < NoForest && NoForest < Forest && Forest < Tree);
}

#[test]
fn trivial_polygons() {
    assert!(exists(&Graph::new(), &[]));
    assert!(exists(&single_vertex(), &[1]));
}

#[test]
fn not_connected_triangle() {
    let mut g = graph_of(&[(1, 1.0, 1.0, 2, 2.0, 2.0)]);
    g.add_vertex(Vertex::new(3, 3.0, 2.0));
    assert!(!exists(&g, &[1, 2, 3]));
}

#[test]
fn diamond_boundary() {
    let g = graph_of(&[
        (1, -1.0, 0.0, 2, 0.0, 1.0),
        (2, 0.0, 1.0, 3, 1.0, 0.0),
        (3, 1.0, 0.0, 4, 0.0, -1.0),
        (4, 0.0, -1.0, 1, -1.0, 0.0),
    ]);
    assert!(exists(&g, &[1, 2, 3, 4]));
}

#[test]
fn index_scenarios_in_polygon_order() {
    assert!(!exists(&index1_without_ncst(), &IDX_POLYGON));
    assert!(exists(&index1_with_ncst(), &IDX_POLYGON));
    assert!(!exists(&index2_without_ncst(), &IDX_POLYGON));
    assert!(exists(&index2_with_ncst(), &IDX_POLYGON));
}

#[test]
fn reconstructed_tree_for_index1() {
    let tree = find_polygon_ncst(&index1_with_ncst(), &IDX_POLYGON)
        .unwrap()
        .found()
        .unwrap();
    let ids: Vec<(i32, i32)> = tree
        .edges()
        .iter()
        .map(|e| (*e.a().id(), *e.b().id()))
        .collect();
    assert_eq!(ids, vec![(1, 2), (2, 3), (3, 4), (4, 5)]);
}

#[test]
fn chord_outside_a_reflex_polygon_is_unused() {
    // Arrow head: 1(0,0) 2(2,0) 3(2,2) 4(1,1) 5(0,2); chord 3-5 runs outside.
    let g = graph_of(&[
        (1, 0.0, 0.0, 2, 2.0, 0.0),
        (2, 2.0, 0.0, 3, 2.0, 2.0),
        (3, 2.0, 2.0, 5, 0.0, 2.0),
        (4, 1.0, 1.0, 1, 0.0, 0.0),
    ]);
    // Spanning requires the outside chord, so there is no tree inside the polygon.
    assert!(!exists(&g, &[1, 2, 3, 4, 5]));
    let mut g2 = g.clone();
    g2.add_edge(edge((5, 0.0, 2.0, 1, 0.0, 0.0)));
    assert!(exists(&g2, &[1, 2, 3, 4, 5]));
}

#[test]
fn polygon_must_match_graph() {
    let g = star();
    assert!(matches!(
        find_polygon_ncst(&g, &[1, 2, 3]),
        Err(AlgorithmError::PolygonMismatch(_))
    ));
    assert!(matches!(
        find_polygon_ncst(&g, &[1, 2, 3, 4, 9]),
        Err(AlgorithmError::PolygonMismatch(_))
    ));
    assert!(matches!(
        find_polygon_ncst(&g, &[1, 2, 3, 4, 4]),
        Err(AlgorithmError::PolygonMismatch(_))
    ));
}
