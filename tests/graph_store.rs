//! Graph store tests: vertices, edges, adjacency lists and the builder.

use graph_toolkit::graph::{Graph, GraphBuilder, GraphOptions};
use graph_toolkit::types::GraphError;

// ==================== Helper ====================

fn two_vertices(options: GraphOptions) -> Graph {
    let mut graph = Graph::new(options);
    graph.add_vertex("A").unwrap();
    graph.add_vertex("B").unwrap();
    graph
}

// ==================== Vertex Tests ====================

#[test]
fn test_add_vertex() {
    let mut graph = Graph::new(GraphOptions::default());
    assert_eq!(graph.add_vertex("A").unwrap(), 0);
    assert_eq!(graph.add_vertex("B").unwrap(), 1);

    assert_eq!(graph.vertices(), &["A".to_string(), "B".to_string()]);
    assert!(graph.has_vertex("A"));
    assert!(!graph.has_vertex("Z"));
    assert_eq!(graph.index_of("B"), Some(1));
    assert_eq!(graph.vertex(0), Some("A"));
    assert_eq!(graph.vertex(2), None);
}

#[test]
fn test_duplicate_vertex_rejected() {
    let mut graph = two_vertices(GraphOptions::default());
    match graph.add_vertex("A") {
        Err(GraphError::DuplicateVertex(label)) => assert_eq!(label, "A"),
        other => panic!("expected DuplicateVertex, got {:?}", other),
    }
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.adjacency_list("A").unwrap(), Vec::<&str>::new());
}

#[test]
fn test_require_vertex_fails_loudly() {
    let graph = two_vertices(GraphOptions::default());
    assert_eq!(graph.require_vertex("B").unwrap(), 1);
    let err = graph.require_vertex("Y").unwrap_err();
    assert_eq!(err.to_string(), "Y does not exist");
}

#[test]
fn test_default_options() {
    let graph = Graph::new(GraphOptions::default());
    assert!(!graph.is_oriented());
    assert!(!graph.is_weighted());
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

// ==================== Edge Tests ====================

#[test]
fn test_add_edge() {
    let mut graph = two_vertices(GraphOptions::default());
    assert_eq!(graph.add_edge("A", "B", None).unwrap(), 0);

    let edges = graph.edges();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].origin, "A");
    assert_eq!(edges[0].destination, "B");
    assert_eq!(edges[0].weight, None);
    assert_eq!(edges[0].endpoints(), (0, 1));
}

#[test]
fn test_undirected_edge_updates_both_lists() {
    let mut graph = two_vertices(GraphOptions::default());
    graph.add_edge("A", "B", None).unwrap();

    assert_eq!(graph.adjacency_list("A").unwrap(), vec!["B"]);
    assert_eq!(graph.adjacency_list("B").unwrap(), vec!["A"]);
}

#[test]
fn test_oriented_edge_updates_origin_only() {
    let mut graph = two_vertices(GraphOptions::new().oriented(true));
    graph.add_edge("A", "B", None).unwrap();

    assert_eq!(graph.adjacency_list("A").unwrap(), vec!["B"]);
    assert!(graph.adjacency_list("B").unwrap().is_empty());
}

#[test]
fn test_undirected_self_loop_listed_twice() {
    let mut graph = two_vertices(GraphOptions::default());
    graph.add_edge("A", "A", None).unwrap();

    assert_eq!(graph.adjacency_list("A").unwrap(), vec!["A", "A"]);
    assert!(graph.edges()[0].is_self_loop());
}

#[test]
fn test_missing_endpoint_leaves_graph_unchanged() {
    for options in [GraphOptions::default(), GraphOptions::new().oriented(true)] {
        let mut graph = two_vertices(options);
        graph.add_edge("A", "B", None).unwrap();

        for (origin, destination) in [("Y", "B"), ("B", "Y")] {
            match graph.add_edge(origin, destination, None) {
                Err(GraphError::VertexNotFound(label)) => assert_eq!(label, "Y"),
                other => panic!("expected VertexNotFound, got {:?}", other),
            }
        }

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.adjacency_list("A").unwrap(), vec!["B"]);
    }
}

#[test]
fn test_missing_error_message_names_vertex() {
    let mut graph = two_vertices(GraphOptions::default());
    let err = graph.add_edge("Y", "B", None).unwrap_err();
    assert_eq!(err.to_string(), "Y does not exist");
}

#[test]
fn test_weighted_edges_keep_weight() {
    let mut graph = two_vertices(GraphOptions::new().weighted(true));
    graph.add_edge("A", "B", Some(3.0)).unwrap();
    graph.add_edge("A", "A", Some(2.0)).unwrap();

    assert_eq!(graph.edges()[0].weight, Some(3.0));
    assert_eq!(graph.edges()[1].weight, Some(2.0));
}

#[test]
fn test_weighted_edge_requires_weight() {
    let mut graph = two_vertices(GraphOptions::new().weighted(true));
    assert!(matches!(
        graph.add_edge("A", "B", None),
        Err(GraphError::MissingWeight { .. })
    ));
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.adjacency_list("A").unwrap().is_empty());
}

#[test]
fn test_non_finite_weight_rejected() {
    let mut graph = two_vertices(GraphOptions::new().weighted(true));
    assert!(matches!(
        graph.add_edge("A", "B", Some(f64::NAN)),
        Err(GraphError::InvalidWeight(_))
    ));
    assert!(matches!(
        graph.add_edge("A", "B", Some(f64::INFINITY)),
        Err(GraphError::InvalidWeight(_))
    ));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_unweighted_graph_ignores_weight() {
    let mut graph = two_vertices(GraphOptions::default());
    graph.add_edge("A", "B", Some(7.0)).unwrap();
    assert_eq!(graph.edges()[0].weight, None);
}

// ==================== Builder Tests ====================

#[test]
fn test_builder_replays_calls() {
    let graph = GraphBuilder::new()
        .weighted()
        .vertices(["A", "B", "C"])
        .weighted_edge("A", "B", 1.5)
        .weighted_edge("B", "C", 2.5)
        .build()
        .unwrap();

    assert!(graph.is_weighted());
    assert!(!graph.is_oriented());
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.adjacency_list("B").unwrap(), vec!["A", "C"]);
}

#[test]
fn test_builder_reports_first_error() {
    let result = GraphBuilder::new()
        .oriented()
        .vertex("A")
        .edge("A", "Q")
        .vertex("A")
        .build();

    match result {
        Err(GraphError::VertexNotFound(label)) => assert_eq!(label, "Q"),
        other => panic!("expected VertexNotFound, got {:?}", other.map(|g| g.edge_count())),
    }
}

#[test]
fn test_options_deserialize_with_defaults() {
    let options: GraphOptions = serde_json::from_str(r#"{"weighted": true}"#).unwrap();
    assert!(options.weighted);
    assert!(!options.oriented);
}
