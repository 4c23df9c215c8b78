//! Edge records produced by the graph store and the spanning tree engine.

use serde::Serialize;

/// A connection between two vertices, in the order it was added.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    /// Origin vertex label (tail for oriented graphs).
    pub origin: String,
    /// Destination vertex label (head for oriented graphs).
    pub destination: String,
    /// Edge weight; `Some` iff the graph is weighted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Vertex indexes of (origin, destination).
    #[serde(skip)]
    pub(crate) endpoints: (usize, usize),
}

impl Edge {
    pub(crate) fn new(
        origin: String,
        destination: String,
        weight: Option<f64>,
        endpoints: (usize, usize),
    ) -> Self {
        Self {
            origin,
            destination,
            weight,
            endpoints,
        }
    }

    /// Vertex indexes of (origin, destination).
    pub fn endpoints(&self) -> (usize, usize) {
        self.endpoints
    }

    /// Whether origin and destination are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.endpoints.0 == self.endpoints.1
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.weight {
            Some(w) => write!(f, "{} - {} ({})", self.origin, self.destination, w),
            None => write!(f, "{} - {}", self.origin, self.destination),
        }
    }
}

/// One vertex's attachment to a vertex-centric spanning tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeEdge {
    /// The vertex that joined the tree.
    pub vertex: String,
    /// The tree vertex it is attached to.
    pub predecessor: String,
    /// Weight of the connecting edge.
    pub weight: f64,
}

/// Sum of edge weights; unweighted edges count as zero.
pub fn total_weight(edges: &[Edge]) -> f64 {
    ascending_sum(edges.iter().filter_map(|e| e.weight).collect())
}

/// Sum of connecting weights of a vertex-centric spanning tree.
pub fn tree_weight(tree: &[TreeEdge]) -> f64 {
    ascending_sum(tree.iter().map(|t| t.weight).collect())
}

/// Summation order is fixed so equal weight multisets give bit-identical totals.
fn ascending_sum(mut weights: Vec<f64>) -> f64 {
    weights.sort_by(f64::total_cmp);
    weights.into_iter().sum()
}
