//! A collection of reusable algorithms without dependencies on any other module in the project
//! except utils.

pub mod clustering;
pub mod geometry;
pub mod nsga2;
pub mod pathfinding;
pub mod structures;
