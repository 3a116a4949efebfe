//! Contains logic to derive a complete graph from a sparse one.

mod complete_graph;
pub use self::complete_graph::*;
