//! Core crate contains the building blocks to generate patrol routes for a fleet of agents which
//! must repeatedly visit every node of a weighted graph.
//!
//! The typical flow is:
//!
//! - describe the area to patrol as a [`Graph`](models::Graph) with node positions and edge weights
//! - derive a [`CompleteGraph`](models::CompleteGraph) which holds the shortest distance and the
//!   shortest path between every pair of nodes
//! - pick one of the route generation strategies from [`solver`]: ant colony optimization,
//!   multi objective genetic algorithm or k-means zoning, all of them return one cyclic route per agent
//! - alternatively, drive agents tick by tick with the greedy idleness dispatcher.
//!

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod construction;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
