//! Fluent API for building Graph instances.

use crate::types::GraphResult;

use super::{Graph, GraphOptions};

enum Step {
    Vertex(String),
    Edge(String, String, Option<f64>),
}

/// Fluent builder for constructing a Graph.
///
/// Calls are recorded and replayed through [`Graph::add_vertex`] and
/// [`Graph::add_edge`] on `build`, so the first invalid call is the error returned.
pub struct GraphBuilder {
    options: GraphOptions,
    steps: Vec<Step>,
}

impl GraphBuilder {
    /// Create a builder for an undirected, unweighted graph.
    pub fn new() -> Self {
        Self::with_options(GraphOptions::default())
    }

    /// Create a builder with explicit flags.
    pub fn with_options(options: GraphOptions) -> Self {
        Self {
            options,
            steps: Vec::new(),
        }
    }

    /// Mark the graph as oriented.
    pub fn oriented(mut self) -> Self {
        self.options.oriented = true;
        self
    }

    /// Mark the graph as weighted.
    pub fn weighted(mut self) -> Self {
        self.options.weighted = true;
        self
    }

    /// Add a vertex.
    pub fn vertex(mut self, label: impl Into<String>) -> Self {
        self.steps.push(Step::Vertex(label.into()));
        self
    }

    /// Add several vertices in order.
    pub fn vertices<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps
            .extend(labels.into_iter().map(|l| Step::Vertex(l.into())));
        self
    }

    /// Add an unweighted edge.
    pub fn edge(mut self, origin: impl Into<String>, destination: impl Into<String>) -> Self {
        self.steps
            .push(Step::Edge(origin.into(), destination.into(), None));
        self
    }

    /// Add a weighted edge.
    pub fn weighted_edge(
        mut self,
        origin: impl Into<String>,
        destination: impl Into<String>,
        weight: f64,
    ) -> Self {
        self.steps
            .push(Step::Edge(origin.into(), destination.into(), Some(weight)));
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph> {
        let mut graph = Graph::new(self.options);
        for step in self.steps {
            match step {
                Step::Vertex(label) => {
                    graph.add_vertex(label)?;
                }
                Step::Edge(origin, destination, weight) => {
                    graph.add_edge(&origin, &destination, weight)?;
                }
            }
        }
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
