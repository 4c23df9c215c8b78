//! Graph input for the CLI: JSON description files and the inline text syntax.
//!
//! Inline syntax: vertices as `A, B, C`; edges as `[A,B],[B,C,3]` where the
//! optional third field is the weight. Whitespace is ignored everywhere.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::graph::{Graph, GraphOptions};
use crate::types::{GraphError, GraphResult};

/// One edge in a graph description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdgeDescription {
    /// `{"origin": "A", "destination": "B", "weight": 3}`
    Named {
        origin: String,
        destination: String,
        #[serde(default)]
        weight: Option<f64>,
    },
    /// `["A", "B", 3]`
    Weighted(String, String, f64),
    /// `["A", "B"]`
    Plain(String, String),
}

impl EdgeDescription {
    fn parts(&self) -> (&str, &str, Option<f64>) {
        match self {
            Self::Named {
                origin,
                destination,
                weight,
            } => (origin.as_str(), destination.as_str(), *weight),
            Self::Weighted(o, d, w) => (o.as_str(), d.as_str(), Some(*w)),
            Self::Plain(o, d) => (o.as_str(), d.as_str(), None),
        }
    }
}

/// A whole graph as read from a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDescription {
    #[serde(default)]
    pub oriented: bool,
    #[serde(default)]
    pub weighted: bool,
    #[serde(default)]
    pub vertices: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeDescription>,
}

impl GraphDescription {
    /// Read a description from a JSON file.
    pub fn read_from_file(path: &Path) -> GraphResult<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Replay the description into a graph store.
    pub fn into_graph(self) -> GraphResult<Graph> {
        let options = GraphOptions::new()
            .oriented(self.oriented)
            .weighted(self.weighted);
        let mut graph = Graph::new(options);

        for vertex in self.vertices {
            graph.add_vertex(vertex)?;
        }
        for edge in &self.edges {
            let (origin, destination, weight) = edge.parts();
            graph.add_edge(origin, destination, weight)?;
        }

        Ok(graph)
    }
}

/// Where the CLI takes its graph from.
#[derive(Debug, Clone, Default)]
pub struct GraphSource {
    /// JSON description file.
    pub file: Option<PathBuf>,
    /// Inline vertex list.
    pub vertices: Option<String>,
    /// Inline edge list.
    pub edges: Option<String>,
    /// Force the oriented flag on.
    pub oriented: bool,
    /// Force the weighted flag on.
    pub weighted: bool,
}

/// Build the graph described by a [`GraphSource`].
pub fn load_graph(source: &GraphSource) -> GraphResult<Graph> {
    let inline = source.vertices.is_some() || source.edges.is_some();

    let mut description = match (&source.file, inline) {
        (Some(_), true) => {
            return Err(GraphError::InvalidInput(
                "use either --file or --vertices/--edges, not both".to_string(),
            ))
        }
        (Some(path), false) => GraphDescription::read_from_file(path)?,
        (None, _) => GraphDescription {
            vertices: source
                .vertices
                .as_deref()
                .map(parse_vertices)
                .unwrap_or_default(),
            edges: source
                .edges
                .as_deref()
                .map(parse_edges)
                .transpose()?
                .unwrap_or_default(),
            ..GraphDescription::default()
        },
    };

    description.oriented |= source.oriented;
    description.weighted |= source.weighted;
    log::debug!(
        "loading graph: {} vertices, {} edges, oriented={}, weighted={}",
        description.vertices.len(),
        description.edges.len(),
        description.oriented,
        description.weighted
    );

    description.into_graph()
}

/// Parse `A, B, C` into vertex labels.
pub fn parse_vertices(value: &str) -> Vec<String> {
    strip_whitespace(value)
        .split(',')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse `[A,B],[B,C,3]` into edge descriptions.
///
/// Anything outside brackets is ignored.
pub fn parse_edges(value: &str) -> GraphResult<Vec<EdgeDescription>> {
    let compact = strip_whitespace(value);
    let mut edges = Vec::new();

    for chunk in compact.split('[').skip(1) {
        let body = chunk
            .split_once(']')
            .map(|(body, _)| body)
            .ok_or_else(|| GraphError::InvalidInput(format!("unclosed edge [{}", chunk)))?;

        let fields: Vec<&str> = body.split(',').collect();
        let edge = match fields.as_slice() {
            [o, d] if !o.is_empty() && !d.is_empty() => {
                EdgeDescription::Plain(o.to_string(), d.to_string())
            }
            [o, d, w] if !o.is_empty() && !d.is_empty() => {
                let weight = w
                    .parse::<f64>()
                    .map_err(|_| GraphError::InvalidInput(format!("bad weight in [{}]", body)))?;
                EdgeDescription::Weighted(o.to_string(), d.to_string(), weight)
            }
            _ => {
                return Err(GraphError::InvalidInput(format!(
                    "edge must be [origin,destination] or [origin,destination,weight]: [{}]",
                    body
                )))
            }
        };
        edges.push(edge);
    }

    Ok(edges)
}

fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}
