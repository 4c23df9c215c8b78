//! Minimum spanning trees: edge-centric (Kruskal) and vertex-centric (Prim/Jarník).

use crate::graph::Graph;
use crate::types::{Edge, GraphError, GraphResult, Precondition, TreeEdge};

use super::disjoint_set::DisjointSet;
use super::shortest_path::{init_records, select_nearest};

/// Spanning tree queries. Both algorithms need an undirected, weighted graph.
pub struct SpanningTreeEngine;

impl SpanningTreeEngine {
    /// Create a new spanning tree engine.
    pub fn new() -> Self {
        Self
    }

    /// Kruskal: cheapest edges first, skipping any that would close a cycle.
    ///
    /// Equal weights keep insertion order. Returns `|V| - 1` edges for a
    /// connected graph and a spanning forest otherwise.
    pub fn kruskal(&self, graph: &Graph) -> GraphResult<Vec<Edge>> {
        check_preconditions(graph)?;

        let edges = graph.edges();
        let mut order: Vec<(usize, f64)> = edges
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.weight.map(|w| (i, w)))
            .collect();
        order.sort_by(|a, b| a.1.total_cmp(&b.1));

        let mut forest = DisjointSet::new(graph.vertex_count());
        let mut tree = Vec::with_capacity(graph.vertex_count().saturating_sub(1));

        for (idx, _) in order {
            if forest.set_count() <= 1 {
                break;
            }
            let edge = &edges[idx];
            let (a, b) = edge.endpoints();
            if forest.union(a, b) {
                log::trace!("kruskal keep {}", edge);
                tree.push(edge.clone());
            } else {
                log::trace!("kruskal skip {} (cycle)", edge);
            }
        }

        Ok(tree)
    }

    /// Prim/Jarník: grow a tree from the first vertex, always attaching the
    /// unvisited vertex with the cheapest connecting edge.
    ///
    /// Entries are listed in the order vertices joined the tree. Only the first
    /// vertex's connected component is spanned.
    pub fn prim_jarnik(&self, graph: &Graph) -> GraphResult<Vec<TreeEdge>> {
        check_preconditions(graph)?;

        if graph.vertex_count() == 0 {
            return Ok(Vec::new());
        }

        let cheapest = cheapest_edges(graph);
        let mut records = init_records(graph.vertex_count(), 0);
        let mut tree = Vec::with_capacity(graph.vertex_count() - 1);

        while let Some(current) = select_nearest(&records) {
            records[current].visited = true;

            if let Some(prev) = records[current].predecessor {
                log::trace!(
                    "prim attach {} to {} ({})",
                    graph.label(current),
                    graph.label(prev),
                    records[current].distance
                );
                tree.push(TreeEdge {
                    vertex: graph.label(current).to_string(),
                    predecessor: graph.label(prev).to_string(),
                    weight: records[current].distance,
                });
            }

            for &neighbor in graph.neighbors(current) {
                if records[neighbor].visited {
                    continue;
                }
                let weight = cheapest[current][neighbor];
                if weight < records[neighbor].distance {
                    records[neighbor].distance = weight;
                    records[neighbor].predecessor = Some(current);
                }
            }
        }

        Ok(tree)
    }
}

impl Default for SpanningTreeEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Cheapest weight between every vertex pair; parallel edges keep the minimum.
fn cheapest_edges(graph: &Graph) -> Vec<Vec<f64>> {
    let n = graph.vertex_count();
    let mut cheapest = vec![vec![f64::INFINITY; n]; n];
    for edge in graph.edges() {
        if let Some(w) = edge.weight {
            let (a, b) = edge.endpoints();
            cheapest[a][b] = cheapest[a][b].min(w);
            cheapest[b][a] = cheapest[a][b];
        }
    }
    cheapest
}

fn check_preconditions(graph: &Graph) -> GraphResult<()> {
    if graph.is_oriented() {
        return Err(GraphError::InvalidConfiguration(Precondition::Undirected));
    }
    if !graph.is_weighted() {
        return Err(GraphError::InvalidConfiguration(Precondition::Weighted));
    }
    Ok(())
}
