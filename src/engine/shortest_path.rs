//! Single-source shortest paths (Dijkstra) over the graph store.
//!
//! The selection step scans the per-vertex records linearly instead of using a
//! priority queue; graphs handled here are small enough that O(V²) is fine.
//! Edge costs come from the adjacency matrix, which is built once per run.

use crate::graph::Graph;
use crate::matrix::AdjacencyMatrix;
use crate::types::{GraphError, GraphResult};

/// Per-vertex algorithm state shared by Dijkstra and Prim/Jarník.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexRecord {
    /// Tentative distance (cumulative for Dijkstra, connecting edge for Prim).
    pub distance: f64,
    /// Index of the vertex this one was reached from.
    pub predecessor: Option<usize>,
    /// Whether the vertex has been finalised.
    pub visited: bool,
}

impl VertexRecord {
    fn unreached() -> Self {
        Self {
            distance: f64::INFINITY,
            predecessor: None,
            visited: false,
        }
    }
}

/// Fresh records with `start` at distance 0 and everything else at infinity.
pub(crate) fn init_records(len: usize, start: usize) -> Vec<VertexRecord> {
    let mut records = vec![VertexRecord::unreached(); len];
    records[start].distance = 0.0;
    records
}

/// Unvisited vertex with the smallest finite distance; ties go to the lower index.
pub(crate) fn select_nearest(records: &[VertexRecord]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, record) in records.iter().enumerate() {
        if record.visited || !record.distance.is_finite() {
            continue;
        }
        match best {
            Some(b) if records[b].distance <= record.distance => {}
            _ => best = Some(idx),
        }
    }
    best
}

/// Result of a single-source run: one record per vertex, in vertex order.
#[derive(Debug, Clone)]
pub struct ShortestPaths<'g> {
    graph: &'g Graph,
    source: usize,
    records: Vec<VertexRecord>,
}

impl<'g> ShortestPaths<'g> {
    /// Label of the source vertex.
    pub fn source(&self) -> &'g str {
        self.graph.label(self.source)
    }

    /// Records indexed by vertex index.
    pub fn records(&self) -> &[VertexRecord] {
        &self.records
    }

    /// Distance from the source, `None` when unreachable.
    pub fn distance_to(&self, label: &str) -> GraphResult<Option<f64>> {
        let idx = self.graph.require_vertex(label)?;
        let d = self.records[idx].distance;
        Ok(d.is_finite().then_some(d))
    }

    /// The vertex a shortest path reaches `label` from.
    pub fn predecessor_of(&self, label: &str) -> GraphResult<Option<&'g str>> {
        let idx = self.graph.require_vertex(label)?;
        Ok(self.records[idx].predecessor.map(|p| self.graph.label(p)))
    }

    /// Vertex labels from the source to `destination`, both inclusive.
    pub fn path_to(&self, destination: &str) -> GraphResult<Vec<String>> {
        let target = self.graph.require_vertex(destination)?;
        if !self.records[target].distance.is_finite() {
            return Err(GraphError::Unreachable {
                origin: self.source().to_string(),
                destination: destination.to_string(),
            });
        }

        let mut path = vec![target];
        let mut node = target;
        while let Some(prev) = self.records[node].predecessor {
            path.push(prev);
            node = prev;
        }
        path.reverse();

        Ok(path
            .into_iter()
            .map(|idx| self.graph.label(idx).to_string())
            .collect())
    }
}

/// Shortest path queries.
pub struct ShortestPathEngine;

impl ShortestPathEngine {
    /// Create a new shortest path engine.
    pub fn new() -> Self {
        Self
    }

    /// Run Dijkstra from `source` over the whole graph.
    pub fn shortest_paths<'g>(
        &self,
        graph: &'g Graph,
        source: &str,
    ) -> GraphResult<ShortestPaths<'g>> {
        let start = graph.require_vertex(source)?;
        ensure_non_negative(graph)?;

        let matrix = AdjacencyMatrix::from_graph(graph);
        let mut records = init_records(graph.vertex_count(), start);

        while let Some(current) = select_nearest(&records) {
            records[current].visited = true;
            let base = records[current].distance;
            log::trace!("dijkstra visit {} at {}", graph.label(current), base);

            for &neighbor in graph.neighbors(current) {
                let candidate = base + matrix.at(current, neighbor);
                if candidate < records[neighbor].distance {
                    records[neighbor].distance = candidate;
                    records[neighbor].predecessor = Some(current);
                }
            }
        }

        Ok(ShortestPaths {
            graph,
            source: start,
            records,
        })
    }

    /// Shortest path from `origin` to `destination` as a list of vertex labels.
    ///
    /// `origin == destination` yields `[origin]`; an unreachable destination is
    /// an [`GraphError::Unreachable`] error.
    pub fn path_from_to(
        &self,
        graph: &Graph,
        origin: &str,
        destination: &str,
    ) -> GraphResult<Vec<String>> {
        graph.require_vertex(origin)?;
        graph.require_vertex(destination)?;

        self.shortest_paths(graph, origin)?.path_to(destination)
    }
}

impl Default for ShortestPathEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_non_negative(graph: &Graph) -> GraphResult<()> {
    for edge in graph.edges() {
        if let Some(w) = edge.weight {
            if w < 0.0 {
                return Err(GraphError::NegativeWeight {
                    origin: edge.origin.clone(),
                    destination: edge.destination.clone(),
                    weight: w,
                });
            }
        }
    }
    Ok(())
}
