//! Vertex x edge incidence matrix.

use std::collections::HashMap;

use serde::Serialize;

use crate::graph::Graph;
use crate::types::{edge_column_id, EDGE_COLUMN_PREFIX};

/// Incidence matrix: one row per vertex, one `E{n}` column per edge.
///
/// The origin row of a column holds `+1`. The destination row holds `+1` for
/// undirected graphs and `-1` for oriented ones; for a self-loop the
/// destination value is the one that remains. Weights never appear.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncidenceMatrix {
    vertices: Vec<String>,
    columns: Vec<String>,
    cells: Vec<Vec<i8>>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl IncidenceMatrix {
    /// Build the matrix for the graph's current state.
    pub fn from_graph(graph: &Graph) -> Self {
        let columns: Vec<String> = (0..graph.edge_count()).map(edge_column_id).collect();
        let mut cells = vec![vec![0i8; columns.len()]; graph.vertex_count()];
        let head = if graph.is_oriented() { -1 } else { 1 };

        for (col, edge) in graph.edges().iter().enumerate() {
            let (from, to) = edge.endpoints();
            cells[from][col] = 1;
            cells[to][col] = head;
        }

        Self {
            vertices: graph.vertices().to_vec(),
            columns,
            cells,
            index: graph.index_map().clone(),
        }
    }

    /// Row labels.
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    /// Column identifiers (`E1..En`).
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Raw cells, `cells()[vertex][edge]`.
    pub fn cells(&self) -> &[Vec<i8>] {
        &self.cells
    }

    /// Cell by vertex label and column identifier.
    pub fn get(&self, vertex: &str, column: &str) -> Option<i8> {
        let r = *self.index.get(vertex)?;
        let c = self.column_index(column)?;
        Some(self.cells[r][c])
    }

    /// Full row by vertex label.
    pub fn row(&self, vertex: &str) -> Option<&[i8]> {
        let r = *self.index.get(vertex)?;
        Some(self.cells[r].as_slice())
    }

    /// 0-based edge index for an `E{n}` column identifier.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        let n: usize = column.strip_prefix(EDGE_COLUMN_PREFIX)?.parse().ok()?;
        (1..=self.columns.len())
            .contains(&n)
            .then(|| n - 1)
            .filter(|&c| self.columns[c] == column)
    }

    /// Sum of the entries in a column (by 0-based edge index).
    pub fn column_sum(&self, column: usize) -> i32 {
        self.cells.iter().map(|row| i32::from(row[column])).sum()
    }
}
