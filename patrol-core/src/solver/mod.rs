//! Contains route generation strategies built on top of a complete graph.
//!
//! Batch strategies implement [`RouteStrategy`] and return one cyclic route per agent:
//!
//! - [`aco::AntColonyOptimizer`]: multi-colony ant colony optimization
//! - [`genetic::PatrolGeneticAlgorithm`]: Pareto multi objective genetic algorithm
//! - [`cluster::ClusterPartitioner`]: k-means zoning with single agent optimization per zone
//!
//! [`greedy::GreedyIdlenessDispatcher`] is different: it is stateful and is queried every time an
//! agent reaches a node.

use crate::models::{CompleteGraph, RouteSet};
use crate::utils::{Environment, PatrolError, PatrolResult};

pub mod aco;
pub mod cluster;
pub mod genetic;
pub mod greedy;

mod evaluation;
pub use self::evaluation::*;

mod telemetry;
pub use self::telemetry::Telemetry;

mod termination;
pub use self::termination::ConvergenceTracker;

/// Specifies a batch route generation strategy.
pub trait RouteStrategy {
    /// Returns a human readable name of the strategy.
    fn name(&self) -> &str;

    /// Generates one route per agent which together visit every node of the graph.
    fn solve(&self, graph: &CompleteGraph, agents: usize, environment: &Environment) -> PatrolResult<RouteSet>;
}

/// Checks that amount of agents is positive and does not exceed amount of nodes.
pub fn validate_agents(agents: usize, size: usize) -> PatrolResult<()> {
    if agents == 0 {
        return Err(PatrolError::invalid_parameter("amount of agents must be positive"));
    }

    if agents > size {
        return Err(PatrolError::invalid_parameter(format!(
            "amount of agents {agents} exceeds amount of nodes {size}"
        )));
    }

    Ok(())
}
