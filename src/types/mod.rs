//! All data types for the graph toolkit.

pub mod edge;
pub mod error;

pub use edge::{total_weight, tree_weight, Edge, TreeEdge};
pub use error::{GraphError, GraphResult, Precondition};

/// Prefix used for incidence matrix column identifiers (`E1`, `E2`, ...).
pub const EDGE_COLUMN_PREFIX: &str = "E";

/// Column identifier for the edge at `index` (0-based) in insertion order.
pub fn edge_column_id(index: usize) -> String {
    format!("{}{}", EDGE_COLUMN_PREFIX, index + 1)
}
