//! Contains single pair shortest path search algorithms.

mod astar;
pub use self::astar::*;
