//! Matrix views derived from the graph store.
//!
//! Both matrices are pure functions of the graph's current vertices and edges;
//! building one never mutates the graph.

pub mod adjacency;
pub mod incidence;

pub use adjacency::AdjacencyMatrix;
pub use incidence::IncidenceMatrix;
