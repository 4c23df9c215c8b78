//! Error types for the graph toolkit.

use thiserror::Error;

/// A structural requirement an algorithm places on the graph configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    /// The graph must not be oriented.
    Undirected,
    /// The graph must carry edge weights.
    Weighted,
}

impl std::fmt::Display for Precondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Undirected => write!(f, "graph must be undirected"),
            Self::Weighted => write!(f, "graph must be weighted"),
        }
    }
}

/// All errors that can occur in the graph toolkit.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A referenced vertex label is not part of the graph.
    #[error("{0} does not exist")]
    VertexNotFound(String),

    /// A vertex with this label was already added.
    #[error("Vertex {0} already exists")]
    DuplicateVertex(String),

    /// A weighted graph received an edge without a weight.
    #[error("Edge {origin} -> {destination} needs a weight in a weighted graph")]
    MissingWeight { origin: String, destination: String },

    /// Weight is NaN or infinite.
    #[error("Edge weight must be finite: {0}")]
    InvalidWeight(f64),

    /// Shortest paths cannot be computed over negative weights.
    #[error("Negative weight {weight} on edge {origin} -> {destination}")]
    NegativeWeight {
        origin: String,
        destination: String,
        weight: f64,
    },

    /// No path connects the two vertices.
    #[error("No path from {origin} to {destination}")]
    Unreachable { origin: String, destination: String },

    /// The graph configuration does not satisfy an algorithm's requirement.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(Precondition),

    /// Malformed graph description or command-line input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
