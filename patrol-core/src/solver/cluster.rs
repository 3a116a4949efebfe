//! Contains a strategy which splits the area into one zone per agent using k-means clustering of
//! node positions and optimizes a route inside every zone independently with a single agent
//! genetic algorithm.

#[cfg(test)]
#[path = "../../tests/unit/solver/cluster_test.rs"]
mod cluster_test;

use crate::algorithms::clustering::create_kmeans;
use crate::models::{CompleteGraph, Route, RouteSet};
use crate::solver::aco::check_positive_int;
use crate::solver::genetic::{GeneticConfig, PatrolGeneticAlgorithm};
use crate::solver::{RouteStrategy, Telemetry, validate_agents};
use crate::utils::{Environment, PatrolError, PatrolResult};

/// A configuration of the zoning strategy.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterConfig {
    /// Amount of k-means launches, the partition with the lowest inertia is kept. Default is 10.
    pub launches: usize,
    /// Max amount of k-means iterations per launch. Default is 100.
    pub max_iterations: usize,
    /// A configuration of the single agent genetic algorithm used inside every zone.
    pub genetic: GeneticConfig,
    /// Specifies whether the run is logged.
    pub log_every: Option<usize>,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self { launches: 10, max_iterations: 100, genetic: GeneticConfig::default(), log_every: None }
    }
}

impl ClusterConfig {
    /// Sets amount of k-means launches.
    pub fn with_launches(mut self, launches: usize) -> Self {
        self.launches = launches;
        self
    }

    /// Sets configuration of the zone optimizer.
    pub fn with_genetic(mut self, genetic: GeneticConfig) -> Self {
        self.genetic = genetic;
        self
    }

    /// Validates configuration values.
    pub fn validate(&self) -> PatrolResult<()> {
        check_positive_int("launches", self.launches)?;
        check_positive_int("k-means iterations", self.max_iterations)?;

        self.genetic.validate()
    }
}

/// Generates routes by partitioning nodes into zones, one per agent.
pub struct ClusterPartitioner {
    config: ClusterConfig,
}

impl ClusterPartitioner {
    /// Creates a new instance of `ClusterPartitioner`, fails if configuration is invalid.
    pub fn new(config: ClusterConfig) -> PatrolResult<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Partitions nodes into `agents` zones using k-means clustering of their positions.
    pub fn partition(&self, graph: &CompleteGraph, agents: usize, environment: &Environment) -> PatrolResult<Vec<Route>> {
        validate_agents(agents, graph.size())?;

        create_kmeans(graph.positions(), agents, self.config.launches, self.config.max_iterations, environment.random.as_ref())
            .map(|partition| partition.clusters)
            .filter(|clusters| clusters.iter().all(|cluster| !cluster.is_empty()))
            .ok_or_else(|| PatrolError::invalid_graph(format!("cannot split nodes into {agents} non-empty zones")))
    }
}

impl RouteStrategy for ClusterPartitioner {
    fn name(&self) -> &str {
        "cluster"
    }

    fn solve(&self, graph: &CompleteGraph, agents: usize, environment: &Environment) -> PatrolResult<RouteSet> {
        self.config.validate()?;

        let telemetry = Telemetry::new(environment, self.config.log_every);
        let zones = self.partition(graph, agents, environment)?;

        telemetry.log(&format!(
            "[{}] split {} nodes into zones of sizes {:?}",
            self.name(),
            graph.size(),
            zones.iter().map(|zone| zone.len()).collect::<Vec<_>>()
        ));

        let optimizer = PatrolGeneticAlgorithm::new(self.config.genetic.clone())?;

        zones
            .into_iter()
            .map(|zone| {
                if zone.len() < 2 {
                    return Ok(zone);
                }

                let zone_graph = graph.sub_graph(&zone)?;
                let solution = optimizer.run(&zone_graph, 1, environment)?;

                Ok(solution.routes.into_iter().flatten().map(|local| zone[local]).collect())
            })
            .collect()
    }
}
