//! Contains models which describe a patrolled area and generated routes.

mod graph;
pub use self::graph::*;

mod matrix;
pub use self::matrix::*;

mod paths;
pub use self::paths::*;

mod routes;
pub use self::routes::*;
