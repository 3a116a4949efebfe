//! This module reimports commonly used types.

pub use crate::construction::build_complete_graph;

pub use crate::models::CompleteGraph;
pub use crate::models::CostMatrix;
pub use crate::models::Graph;
pub use crate::models::RouteSet;
pub use crate::models::ShortestPathTable;

pub use crate::algorithms::geometry::Point;

pub use crate::solver::aco::{AcoConfig, AntColonyOptimizer};
pub use crate::solver::cluster::{ClusterConfig, ClusterPartitioner};
pub use crate::solver::genetic::{GeneticConfig, PatrolGeneticAlgorithm};
pub use crate::solver::greedy::GreedyIdlenessDispatcher;
pub use crate::solver::{RouteStrategy, evaluate_routes, simulate_dispatch};

pub use crate::utils::compare_floats;
pub use crate::utils::{DefaultRandom, Random, RandomGen};
pub use crate::utils::{Environment, InfoLogger, Parallelism};
pub use crate::utils::{GenericError, GenericResult, PatrolError, PatrolResult};
