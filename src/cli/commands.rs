//! CLI command implementations.
//!
//! Every command renders to a `String` in either plain text or JSON; the
//! binary prints the result.

use crate::engine::{ShortestPathEngine, SpanningTreeEngine};
use crate::graph::Graph;
use crate::matrix::{AdjacencyMatrix, IncidenceMatrix};
use crate::types::{total_weight, tree_weight, GraphResult};

/// Graph flags and sizes.
pub fn cmd_info(graph: &Graph, json: bool) -> GraphResult<String> {
    if json {
        let info = serde_json::json!({
            "oriented": graph.is_oriented(),
            "weighted": graph.is_weighted(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
        });
        return Ok(serde_json::to_string_pretty(&info)?);
    }

    Ok(format!(
        "Oriented: {}\nWeighted: {}\nVertices: {}\nEdges: {}",
        graph.is_oriented(),
        graph.is_weighted(),
        graph.vertex_count(),
        graph.edge_count()
    ))
}

/// Each vertex with its neighbours in edge insertion order.
pub fn cmd_adjacency_list(graph: &Graph, json: bool) -> GraphResult<String> {
    let mut rows = Vec::with_capacity(graph.vertex_count());
    for vertex in graph.vertices() {
        rows.push((vertex.as_str(), graph.adjacency_list(vertex)?));
    }

    if json {
        let list: Vec<serde_json::Value> = rows
            .iter()
            .map(|(vertex, neighbors)| {
                serde_json::json!({ "vertex": vertex, "neighbors": neighbors })
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&list)?);
    }

    let width = label_width(graph.vertices());
    let lines: Vec<String> = rows
        .iter()
        .map(|(vertex, neighbors)| format!("{:<width$}  {}", vertex, neighbors.join(" => ")))
        .collect();
    Ok(lines.join("\n"))
}

/// The adjacency matrix as a grid.
pub fn cmd_adjacency_matrix(graph: &Graph, json: bool) -> GraphResult<String> {
    let matrix = AdjacencyMatrix::from_graph(graph);
    if json {
        return Ok(serde_json::to_string_pretty(&matrix)?);
    }

    let rows = matrix
        .vertices()
        .iter()
        .zip(matrix.cells())
        .map(|(v, row)| (v.clone(), row.iter().map(|c| c.to_string()).collect()))
        .collect();
    Ok(format_grid(matrix.vertices(), rows))
}

/// The incidence matrix as a grid with `E1..En` columns.
pub fn cmd_incidence_matrix(graph: &Graph, json: bool) -> GraphResult<String> {
    let matrix = IncidenceMatrix::from_graph(graph);
    if json {
        return Ok(serde_json::to_string_pretty(&matrix)?);
    }

    let rows = matrix
        .vertices()
        .iter()
        .zip(matrix.cells())
        .map(|(v, row)| (v.clone(), row.iter().map(|c| c.to_string()).collect()))
        .collect();
    Ok(format_grid(matrix.columns(), rows))
}

/// Shortest path between two vertices and its cost.
pub fn cmd_path(graph: &Graph, origin: &str, destination: &str, json: bool) -> GraphResult<String> {
    let engine = ShortestPathEngine::new();
    let paths = engine.shortest_paths(graph, origin)?;
    let path = paths.path_to(destination)?;
    let cost = paths.distance_to(destination)?.unwrap_or(f64::INFINITY);

    if json {
        let out = serde_json::json!({ "path": path, "cost": cost });
        return Ok(serde_json::to_string_pretty(&out)?);
    }

    Ok(format!("{}\nCost: {}", path.join(" => "), cost))
}

/// Distance and predecessor of every vertex from `source`.
pub fn cmd_distances(graph: &Graph, source: &str, json: bool) -> GraphResult<String> {
    let engine = ShortestPathEngine::new();
    let paths = engine.shortest_paths(graph, source)?;

    let mut rows = Vec::with_capacity(graph.vertex_count());
    for vertex in graph.vertices() {
        rows.push((
            vertex.as_str(),
            paths.distance_to(vertex)?,
            paths.predecessor_of(vertex)?,
        ));
    }

    if json {
        let list: Vec<serde_json::Value> = rows
            .iter()
            .map(|(vertex, distance, predecessor)| {
                serde_json::json!({
                    "vertex": vertex,
                    "distance": distance,
                    "predecessor": predecessor,
                })
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&list)?);
    }

    let header = vec!["Distance".to_string(), "Previous".to_string()];
    let grid = rows
        .into_iter()
        .map(|(vertex, distance, predecessor)| {
            (
                vertex.to_string(),
                vec![
                    distance.map_or_else(|| "unreachable".to_string(), |d| d.to_string()),
                    predecessor.unwrap_or("-").to_string(),
                ],
            )
        })
        .collect();
    Ok(format_grid(&header, grid))
}

/// Minimum spanning tree via Kruskal.
pub fn cmd_kruskal(graph: &Graph, json: bool) -> GraphResult<String> {
    let tree = SpanningTreeEngine::new().kruskal(graph)?;
    let total = total_weight(&tree);

    if json {
        let out = serde_json::json!({ "edges": tree, "total_weight": total });
        return Ok(serde_json::to_string_pretty(&out)?);
    }

    let mut lines: Vec<String> = tree.iter().map(|e| e.to_string()).collect();
    lines.push(format!("Total weight: {}", total));
    Ok(lines.join("\n"))
}

/// Minimum spanning tree via Prim/Jarník.
pub fn cmd_prim(graph: &Graph, json: bool) -> GraphResult<String> {
    let tree = SpanningTreeEngine::new().prim_jarnik(graph)?;
    let total = tree_weight(&tree);

    if json {
        let out = serde_json::json!({ "edges": tree, "total_weight": total });
        return Ok(serde_json::to_string_pretty(&out)?);
    }

    let mut lines: Vec<String> = tree
        .iter()
        .map(|t| format!("{} - {} ({})", t.predecessor, t.vertex, t.weight))
        .collect();
    lines.push(format!("Total weight: {}", total));
    Ok(lines.join("\n"))
}

fn label_width(labels: &[String]) -> usize {
    labels.iter().map(|l| l.chars().count()).max().unwrap_or(0)
}

/// Right-aligned grid with a header row and one labelled line per row.
fn format_grid(header: &[String], rows: Vec<(String, Vec<String>)>) -> String {
    let row_width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for (_, cells) in &rows {
        for (w, cell) in widths.iter_mut().zip(cells) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&" ".repeat(row_width));
    for (h, w) in header.iter().zip(&widths) {
        out.push_str(&format!("  {:>w$}", h, w = *w));
    }
    for (label, cells) in &rows {
        out.push('\n');
        out.push_str(&format!("{:<w$}", label, w = row_width));
        for (cell, w) in cells.iter().zip(&widths) {
            out.push_str(&format!("  {:>w$}", cell, w = *w));
        }
    }
    out
}
