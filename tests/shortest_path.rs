//! Shortest path engine tests.

use graph_toolkit::engine::ShortestPathEngine;
use graph_toolkit::graph::{GraphBuilder, GraphOptions};
use graph_toolkit::types::GraphError;

fn labels(path: &[&str]) -> Vec<String> {
    path.iter().map(|s| s.to_string()).collect()
}

// ==================== Path Tests ====================

#[test]
fn test_direct_edge_beats_long_route() {
    let graph = GraphBuilder::new()
        .vertices(["A", "B", "C", "D"])
        .edge("A", "B")
        .edge("B", "C")
        .edge("C", "D")
        .edge("A", "D")
        .build()
        .unwrap();

    let path = ShortestPathEngine::new()
        .path_from_to(&graph, "A", "D")
        .unwrap();
    assert_eq!(path, labels(&["A", "D"]));
}

#[test]
fn test_oriented_path_follows_direction() {
    let graph = GraphBuilder::new()
        .oriented()
        .vertices(["A", "B", "C", "D"])
        .edge("A", "B")
        .edge("B", "D")
        .edge("D", "C")
        .edge("A", "C")
        .build()
        .unwrap();

    let path = ShortestPathEngine::new()
        .path_from_to(&graph, "A", "D")
        .unwrap();
    assert_eq!(path, labels(&["A", "B", "D"]));
}

#[test]
fn test_weighted_detour_beats_expensive_edge() {
    let graph = GraphBuilder::new()
        .weighted()
        .vertices(["A", "B", "C"])
        .weighted_edge("A", "B", 2.0)
        .weighted_edge("B", "C", 5.0)
        .weighted_edge("A", "C", 10.0)
        .build()
        .unwrap();

    let engine = ShortestPathEngine::new();
    assert_eq!(
        engine.path_from_to(&graph, "A", "C").unwrap(),
        labels(&["A", "B", "C"])
    );

    let paths = engine.shortest_paths(&graph, "A").unwrap();
    assert_eq!(paths.distance_to("C").unwrap(), Some(7.0));
    assert_eq!(paths.predecessor_of("C").unwrap(), Some("B"));
    assert_eq!(paths.predecessor_of("A").unwrap(), None);
}

#[test]
fn test_path_to_self() {
    let graph = GraphBuilder::new()
        .vertices(["A", "B"])
        .edge("A", "B")
        .build()
        .unwrap();

    let engine = ShortestPathEngine::new();
    assert_eq!(engine.path_from_to(&graph, "A", "A").unwrap(), labels(&["A"]));
    assert_eq!(engine.path_from_to(&graph, "B", "B").unwrap(), labels(&["B"]));
}

#[test]
fn test_isolated_vertex_path_to_self() {
    let graph = GraphBuilder::new().vertex("Solo").build().unwrap();
    let path = ShortestPathEngine::new()
        .path_from_to(&graph, "Solo", "Solo")
        .unwrap();
    assert_eq!(path, labels(&["Solo"]));
}

#[test]
fn test_unreachable_destination() {
    let graph = GraphBuilder::new()
        .oriented()
        .vertices(["A", "B", "C"])
        .edge("B", "A")
        .edge("C", "B")
        .build()
        .unwrap();

    let engine = ShortestPathEngine::new();
    match engine.path_from_to(&graph, "A", "C") {
        Err(GraphError::Unreachable {
            origin,
            destination,
        }) => {
            assert_eq!(origin, "A");
            assert_eq!(destination, "C");
        }
        other => panic!("expected Unreachable, got {:?}", other),
    }

    let paths = engine.shortest_paths(&graph, "A").unwrap();
    assert_eq!(paths.distance_to("C").unwrap(), None);
    assert_eq!(paths.distance_to("A").unwrap(), Some(0.0));
}

#[test]
fn test_missing_endpoints_fail() {
    let graph = GraphBuilder::new().vertex("A").build().unwrap();
    let engine = ShortestPathEngine::new();

    assert!(matches!(
        engine.path_from_to(&graph, "X", "A"),
        Err(GraphError::VertexNotFound(ref l)) if l == "X"
    ));
    assert!(matches!(
        engine.path_from_to(&graph, "A", "X"),
        Err(GraphError::VertexNotFound(ref l)) if l == "X"
    ));
}

#[test]
fn test_negative_weight_rejected() {
    let graph = GraphBuilder::with_options(GraphOptions::new().weighted(true))
        .vertices(["A", "B"])
        .weighted_edge("A", "B", -1.0)
        .build()
        .unwrap();

    assert!(matches!(
        ShortestPathEngine::new().path_from_to(&graph, "A", "B"),
        Err(GraphError::NegativeWeight { .. })
    ));
}

// ==================== Cost Model Tests ====================

#[test]
fn test_unweighted_cost_is_edge_multiplicity() {
    // Two parallel A-B edges make that hop cost 2, still cheaper than the
    // three-hop A-C-D-B route.
    let graph = GraphBuilder::new()
        .vertices(["A", "B", "C", "D"])
        .edge("A", "B")
        .edge("A", "B")
        .edge("A", "C")
        .edge("C", "D")
        .edge("D", "B")
        .build()
        .unwrap();

    let paths = ShortestPathEngine::new().shortest_paths(&graph, "A").unwrap();
    assert_eq!(paths.distance_to("B").unwrap(), Some(2.0));
    assert_eq!(paths.distance_to("D").unwrap(), Some(2.0));
    assert_eq!(paths.path_to("B").unwrap(), labels(&["A", "B"]));
}

#[test]
fn test_distances_for_every_vertex() {
    let graph = GraphBuilder::new()
        .weighted()
        .vertices(["S", "A", "B", "C", "T"])
        .weighted_edge("S", "A", 4.0)
        .weighted_edge("S", "B", 1.0)
        .weighted_edge("B", "A", 2.0)
        .weighted_edge("A", "C", 1.0)
        .weighted_edge("B", "C", 5.0)
        .weighted_edge("C", "T", 3.0)
        .build()
        .unwrap();

    let paths = ShortestPathEngine::new().shortest_paths(&graph, "S").unwrap();
    assert_eq!(paths.source(), "S");

    let expected = [("S", 0.0), ("A", 3.0), ("B", 1.0), ("C", 4.0), ("T", 7.0)];
    for (vertex, distance) in expected {
        assert_eq!(paths.distance_to(vertex).unwrap(), Some(distance), "{}", vertex);
    }
    assert_eq!(paths.path_to("T").unwrap(), labels(&["S", "B", "A", "C", "T"]));
    assert!(paths.records().iter().all(|r| r.visited));
}
