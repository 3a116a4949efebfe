//! Contains clustering algorithms.

mod kmeans;
pub use self::kmeans::*;
