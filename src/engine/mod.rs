//! Algorithms over the graph store: shortest paths and spanning trees.

pub mod disjoint_set;
pub mod shortest_path;
pub mod spanning_tree;

pub use disjoint_set::DisjointSet;
pub use shortest_path::{ShortestPathEngine, ShortestPaths, VertexRecord};
pub use spanning_tree::SpanningTreeEngine;
