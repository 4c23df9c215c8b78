//! In-memory graph store: the core data structure.

pub mod builder;
pub mod store;

pub use builder::GraphBuilder;
pub use store::{Graph, GraphOptions};
