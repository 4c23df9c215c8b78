//! Vertex x vertex adjacency matrix.

use std::collections::HashMap;

use serde::Serialize;

use crate::graph::Graph;

/// Adjacency matrix with rows and columns in vertex insertion order.
///
/// Unweighted graphs store edge multiplicities; an undirected self-loop adds 2
/// to its diagonal cell. Weighted graphs store the weight of the last edge
/// added between two vertices (parallel edges overwrite, they do not sum).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjacencyMatrix {
    vertices: Vec<String>,
    cells: Vec<Vec<f64>>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl AdjacencyMatrix {
    /// Build the matrix for the graph's current state.
    pub fn from_graph(graph: &Graph) -> Self {
        let n = graph.vertex_count();
        let mut cells = vec![vec![0.0f64; n]; n];
        let oriented = graph.is_oriented();

        for edge in graph.edges() {
            let (from, to) = edge.endpoints();
            match edge.weight {
                Some(w) if graph.is_weighted() => {
                    cells[from][to] = w;
                    if !oriented {
                        cells[to][from] = w;
                    }
                }
                _ => {
                    cells[from][to] += 1.0;
                    if !oriented {
                        cells[to][from] += 1.0;
                    }
                }
            }
        }

        Self {
            vertices: graph.vertices().to_vec(),
            cells,
            index: graph.index_map().clone(),
        }
    }

    /// Row/column labels.
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    /// Raw cells, `cells()[row][column]`.
    pub fn cells(&self) -> &[Vec<f64>] {
        &self.cells
    }

    /// Cell by vertex index.
    pub fn at(&self, row: usize, column: usize) -> f64 {
        self.cells[row][column]
    }

    /// Cell by vertex label.
    pub fn get(&self, row: &str, column: &str) -> Option<f64> {
        let r = self.position(row)?;
        let c = self.position(column)?;
        Some(self.cells[r][c])
    }

    /// Full row by vertex label.
    pub fn row(&self, label: &str) -> Option<&[f64]> {
        self.position(label).map(|r| self.cells[r].as_slice())
    }

    /// Whether `m[u][v] == m[v][u]` for every pair.
    pub fn is_symmetric(&self) -> bool {
        let n = self.cells.len();
        (0..n).all(|r| (r + 1..n).all(|c| self.cells[r][c] == self.cells[c][r]))
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }
}
