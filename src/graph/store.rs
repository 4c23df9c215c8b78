//! Core graph structure: labelled vertices, ordered edges and adjacency lists.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{Edge, GraphError, GraphResult};

/// Flags fixed for the lifetime of a graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    /// Edges are directional (tail -> head).
    pub oriented: bool,
    /// Edges carry a numeric weight.
    pub weighted: bool,
}

impl GraphOptions {
    /// Undirected, unweighted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the oriented flag.
    pub fn oriented(mut self, oriented: bool) -> Self {
        self.oriented = oriented;
        self
    }

    /// Set the weighted flag.
    pub fn weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }
}

/// The in-memory graph: vertices, edges and the adjacency relation between them.
///
/// Vertices and edges are only ever appended. Every vertex gets a dense index
/// equal to its insertion position; matrices and algorithm state are laid out
/// in that order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    options: GraphOptions,
    /// Vertex labels in insertion order.
    vertices: Vec<String>,
    /// Label -> vertex index.
    index: HashMap<String, usize>,
    /// Edges in insertion order.
    edges: Vec<Edge>,
    /// Vertex index -> neighbour indexes, in edge insertion order.
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// The configuration flags.
    pub fn options(&self) -> GraphOptions {
        self.options
    }

    /// Whether edges are directional.
    pub fn is_oriented(&self) -> bool {
        self.options.oriented
    }

    /// Whether edges carry weights.
    pub fn is_weighted(&self) -> bool {
        self.options.weighted
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Vertex labels in insertion order.
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Label of the vertex at `index`, if present.
    pub fn vertex(&self, index: usize) -> Option<&str> {
        self.vertices.get(index).map(String::as_str)
    }

    /// Label for an index handed out by this graph.
    pub(crate) fn label(&self, index: usize) -> &str {
        &self.vertices[index]
    }

    /// Label -> index map, for views that snapshot the vertex order.
    pub(crate) fn index_map(&self) -> &HashMap<String, usize> {
        &self.index
    }

    /// Index of a vertex, if present.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Whether a vertex with this label exists.
    pub fn has_vertex(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Index of a vertex, failing loudly when it is missing.
    pub fn require_vertex(&self, label: &str) -> GraphResult<usize> {
        self.index_of(label)
            .ok_or_else(|| GraphError::VertexNotFound(label.to_string()))
    }

    /// Neighbour indexes of the vertex at `index`.
    pub fn neighbors(&self, index: usize) -> &[usize] {
        self.adjacency.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Neighbour labels of a vertex, in the order the edges were added.
    pub fn adjacency_list(&self, label: &str) -> GraphResult<Vec<&str>> {
        let idx = self.require_vertex(label)?;
        Ok(self.adjacency[idx].iter().map(|&n| self.label(n)).collect())
    }

    /// Add a vertex, returns its index.
    pub fn add_vertex(&mut self, label: impl Into<String>) -> GraphResult<usize> {
        let label = label.into();
        if self.index.contains_key(&label) {
            return Err(GraphError::DuplicateVertex(label));
        }

        let idx = self.vertices.len();
        log::debug!("add vertex {} at index {}", label, idx);
        self.index.insert(label.clone(), idx);
        self.vertices.push(label);
        self.adjacency.push(Vec::new());

        Ok(idx)
    }

    /// Add an edge between two existing vertices, returns the edge index.
    ///
    /// Nothing is mutated unless every check passes.
    pub fn add_edge(
        &mut self,
        origin: &str,
        destination: &str,
        weight: Option<f64>,
    ) -> GraphResult<usize> {
        let from = self.require_vertex(origin)?;
        let to = self.require_vertex(destination)?;

        let weight = if self.options.weighted {
            let w = weight.ok_or_else(|| GraphError::MissingWeight {
                origin: origin.to_string(),
                destination: destination.to_string(),
            })?;
            if !w.is_finite() {
                return Err(GraphError::InvalidWeight(w));
            }
            Some(w)
        } else {
            if let Some(w) = weight {
                log::warn!(
                    "ignoring weight {} on edge {} -> {}: graph is unweighted",
                    w,
                    origin,
                    destination
                );
            }
            None
        };

        self.adjacency[from].push(to);
        if !self.options.oriented {
            self.adjacency[to].push(from);
        }

        let idx = self.edges.len();
        log::debug!("add edge E{}: {} -> {}", idx + 1, origin, destination);
        self.edges.push(Edge::new(
            origin.to_string(),
            destination.to_string(),
            weight,
            (from, to),
        ));

        Ok(idx)
    }
}
