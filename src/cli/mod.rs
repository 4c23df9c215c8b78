//! Command-line surface: graph input parsing and text/JSON rendering.

pub mod commands;
pub mod input;

pub use input::{
    load_graph, parse_edges, parse_vertices, EdgeDescription, GraphDescription, GraphSource,
};
