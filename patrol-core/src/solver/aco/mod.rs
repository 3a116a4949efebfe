//! Contains a multi-colony ant colony optimization which builds routes for all agents at once.
//!
//! Every iteration, each colony sends one ant per agent. Ants build tours sharing a colony wide tabu
//! list, so each colony produces a complete route set. After all colonies are done, pheromone is
//! evaporated and reinforced on every edge traversed by every ant. The run stops when colony lengths
//! stop changing or iteration limit is reached. The best colony of the final iteration wins.

#[cfg(test)]
#[path = "../../../tests/unit/solver/aco/aco_test.rs"]
mod aco_test;

mod colony;
pub use self::colony::*;

mod config;
pub use self::config::AcoConfig;
pub(crate) use self::config::{check_positive_int, check_positive_real};

mod pheromone;
pub use self::pheromone::PheromoneMatrix;

use crate::models::{CompleteGraph, CostMatrix, RouteSet};
use crate::solver::{ConvergenceTracker, RouteStrategy, Telemetry, validate_agents};
use crate::utils::{Environment, PatrolError, PatrolResult, Random};
use rand::seq::SliceRandom;

/// A result of ant colony optimization run.
#[derive(Clone, Debug)]
pub struct AcoSolution {
    /// Routes of the best colony, one per agent.
    pub routes: RouteSet,
    /// Total length of the best colony's routes.
    pub total_length: f64,
    /// Amount of performed iterations.
    pub iterations: usize,
    /// True if the run stopped because of convergence.
    pub is_converged: bool,
    /// Pheromone matrix after the last update.
    pub pheromone: PheromoneMatrix,
}

/// Generates routes using multi-colony ant colony optimization.
pub struct AntColonyOptimizer {
    config: AcoConfig,
}

impl AntColonyOptimizer {
    /// Creates a new instance of `AntColonyOptimizer`, fails if configuration is invalid.
    pub fn new(config: AcoConfig) -> PatrolResult<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Returns configuration.
    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    /// Runs optimization over given cost matrix.
    pub fn run(&self, matrix: &CostMatrix, agents: usize, environment: &Environment) -> PatrolResult<AcoSolution> {
        let config = &self.config;
        config.validate()?;
        validate_agents(agents, matrix.size())?;
        config.validate_ants(agents)?;

        let mut telemetry = Telemetry::new(environment, config.log_every);
        telemetry.on_start(self.name(), matrix.size(), agents);

        let starts = choose_starts(matrix.size(), agents, environment.random.as_ref());
        let mut pheromone = PheromoneMatrix::new(matrix.size());
        let mut tracker = ConvergenceTracker::new(config.convergence_window, config.convergence_tolerance);

        let mut last_colonies = Vec::new();
        let mut iterations = 0;
        let mut is_converged = false;

        for iteration in 0..config.max_iterations {
            // every colony gets its own generator derived sequentially, so results do not depend on scheduling
            let generators = (0..config.colonies).map(|_| environment.random.get_rng()).collect::<Vec<_>>();

            let colonies = environment
                .parallelism
                .map_collect(generators, |mut rng| construct_colony(matrix, &pheromone, &starts, config, &mut rng))
                .into_iter()
                .collect::<PatrolResult<Vec<_>>>()?;

            update_pheromone(&mut pheromone, &colonies, config);

            iterations = iteration + 1;
            telemetry.on_progress(iteration, get_best_length(&colonies));

            let converged = tracker.add_and_check(colonies.iter().map(|colony| colony.total_length).collect());
            last_colonies = colonies;

            if converged {
                telemetry.on_convergence(iteration);
                is_converged = true;
                break;
            }
        }

        let best = last_colonies
            .into_iter()
            .reduce(|best, colony| if colony.total_length < best.total_length { colony } else { best })
            .ok_or_else(|| PatrolError::invalid_parameter("no iterations were performed"))?;

        telemetry.on_result(iterations, best.total_length);

        Ok(AcoSolution { routes: best.routes, total_length: best.total_length, iterations, is_converged, pheromone })
    }
}

impl RouteStrategy for AntColonyOptimizer {
    fn name(&self) -> &str {
        "aco"
    }

    fn solve(&self, graph: &CompleteGraph, agents: usize, environment: &Environment) -> PatrolResult<RouteSet> {
        self.run(graph.matrix(), agents, environment).map(|solution| solution.routes)
    }
}

/// Evaporates pheromone and deposits `Q / tour length` on every edge traversed by every ant.
pub fn update_pheromone(pheromone: &mut PheromoneMatrix, colonies: &[ColonyTours], config: &AcoConfig) {
    pheromone.evaporate(config.evaporation_rate);

    colonies
        .iter()
        .flat_map(|colony| colony.routes.iter().zip(colony.lengths.iter()))
        .filter(|&(_, &length)| length > 0.)
        .for_each(|(route, &length)| pheromone.deposit(route, config.pheromone_quantity / length));
}

/// Picks a distinct random start node for every ant.
fn choose_starts(size: usize, agents: usize, random: &(dyn Random + Send + Sync)) -> Vec<usize> {
    let mut nodes = (0..size).collect::<Vec<_>>();
    nodes.shuffle(&mut random.get_rng());
    nodes.truncate(agents);

    nodes
}

fn get_best_length(colonies: &[ColonyTours]) -> f64 {
    colonies.iter().map(|colony| colony.total_length).fold(f64::INFINITY, f64::min)
}
