//! Contains a Pareto based genetic algorithm which balances node visitation frequency against
//! route length.
//!
//! An individual keeps one equally sized gene per agent. Every generation, population is ranked
//! into Pareto fronts using bi-objective fitness (mean node occurrence in real routes is maximized,
//! mean route length is minimized), parents are taken front by front and children are produced by
//! block crossover followed by repair, local reordering and mutation.

#[cfg(test)]
#[path = "../../../tests/unit/solver/genetic/genetic_test.rs"]
mod genetic_test;

mod config;
pub use self::config::GeneticConfig;

mod fitness;
pub use self::fitness::*;

mod individual;
pub use self::individual::*;

mod initial;
pub use self::initial::*;

mod operators;
pub use self::operators::*;

use crate::algorithms::nsga2::select_and_rank;
use crate::models::{CompleteGraph, RouteSet, normalize_route};
use crate::solver::{RouteStrategy, Telemetry, validate_agents};
use crate::utils::{Environment, PatrolError, PatrolResult, RandomGen};

/// A result of genetic algorithm run.
#[derive(Clone, Debug)]
pub struct GeneticSolution {
    /// Normalized routes of the best individual.
    pub routes: RouteSet,
    /// Fitness of the best individual.
    pub fitness: Fitness,
    /// Final population.
    pub population: Vec<Individual>,
    /// Fitness of the final population.
    pub population_fitness: Vec<Fitness>,
}

/// Generates routes using Pareto multi objective genetic algorithm.
pub struct PatrolGeneticAlgorithm {
    config: GeneticConfig,
}

impl PatrolGeneticAlgorithm {
    /// Creates a new instance of `PatrolGeneticAlgorithm`, fails if configuration is invalid.
    pub fn new(config: GeneticConfig) -> PatrolResult<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Returns configuration.
    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }

    /// Runs the genetic algorithm.
    pub fn run(&self, graph: &CompleteGraph, agents: usize, environment: &Environment) -> PatrolResult<GeneticSolution> {
        let config = &self.config;
        config.validate()?;
        validate_agents(agents, graph.size())?;

        let mut telemetry = Telemetry::new(environment, config.log_every);
        telemetry.on_start(self.name(), graph.size(), agents);

        let mut rng = environment.random.get_rng();
        let mut population =
            create_initial_population(graph.matrix(), agents, config.population_size, config.init_attempts, &mut rng);

        for generation in 0..config.generations {
            let fitness = evaluate_population(graph, &population, environment);
            telemetry.on_progress(generation, get_best_length(&fitness));

            population = self.create_next_generation(graph, &population, &fitness, &mut rng);
        }

        let fitness = evaluate_population(graph, &population, environment);
        let best_idx = find_best(&fitness)
            .filter(|&idx| population[idx].is_valid(graph.size()))
            .ok_or_else(|| PatrolError::invalid_parameter("no valid individual found"))?;

        let best_fitness = fitness[best_idx];
        telemetry.on_result(config.generations, best_fitness.length);

        Ok(GeneticSolution {
            routes: population[best_idx].genes.iter().map(|gene| normalize_route(gene)).collect(),
            fitness: best_fitness,
            population,
            population_fitness: fitness,
        })
    }

    fn create_next_generation(
        &self,
        graph: &CompleteGraph,
        population: &[Individual],
        fitness: &[Fitness],
        rng: &mut RandomGen,
    ) -> Vec<Individual> {
        let config = &self.config;
        let size = graph.size();

        let mut next = select_and_rank(fitness, config.parent_count(), &PatrolObjective)
            .into_iter()
            .map(|assigned| population[assigned.index].clone())
            .collect::<Vec<_>>();

        let parents = next.len();

        while next.len() < config.population_size {
            let first = rng.uniform_index(parents);
            let second = if parents > 1 { (first + 1 + rng.uniform_index(parents - 1)) % parents } else { first };

            let (left, right) = crossover(&next[first], &next[second], config.crossover_blocks, rng);

            for mut child in [left, right] {
                if next.len() >= config.population_size {
                    break;
                }

                repair(&mut child, size);
                local_optimize(&mut child, graph.matrix());
                mutate(&mut child, config.mutation_probability, rng);

                next.push(child);
            }
        }

        next
    }
}

impl RouteStrategy for PatrolGeneticAlgorithm {
    fn name(&self) -> &str {
        "genetic"
    }

    fn solve(&self, graph: &CompleteGraph, agents: usize, environment: &Environment) -> PatrolResult<RouteSet> {
        self.run(graph, agents, environment).map(|solution| solution.routes)
    }
}

fn evaluate_population(graph: &CompleteGraph, population: &[Individual], environment: &Environment) -> Vec<Fitness> {
    environment.parallelism.map_collect(population.iter().collect(), |individual| evaluate_fitness(graph, individual))
}

fn get_best_length(fitness: &[Fitness]) -> f64 {
    find_best(fitness).map_or(f64::INFINITY, |idx| fitness[idx].length)
}
