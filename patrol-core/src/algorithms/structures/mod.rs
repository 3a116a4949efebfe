//! Contains specific data structures.

mod node_set;
pub use self::node_set::NodeSet;
