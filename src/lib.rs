//! Graph toolkit: an in-memory graph store with matrix views, shortest paths
//! and minimum spanning trees.
//!
//! Data flows one way: the [`Graph`] store feeds the matrix builders, which in
//! turn feed the shortest path and spanning tree engines.

pub mod cli;
pub mod engine;
pub mod graph;
pub mod matrix;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{
    DisjointSet, ShortestPathEngine, ShortestPaths, SpanningTreeEngine, VertexRecord,
};
pub use graph::{Graph, GraphBuilder, GraphOptions};
pub use matrix::{AdjacencyMatrix, IncidenceMatrix};
pub use types::{
    edge_column_id, total_weight, tree_weight, Edge, GraphError, GraphResult, Precondition,
    TreeEdge,
};
