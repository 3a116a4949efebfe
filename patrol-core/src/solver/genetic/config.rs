use crate::solver::aco::{check_positive_int, check_positive_real};
use crate::utils::{PatrolError, PatrolResult};

/// A configuration of the patrol genetic algorithm.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneticConfig {
    /// Amount of generations. Default is 100.
    pub generations: usize,
    /// Population size. Default is 30.
    pub population_size: usize,
    /// A share of population selected as parents. Default is 0.5.
    pub parent_ratio: f64,
    /// Amount of column blocks exchanged by crossover. Default is 2.
    pub crossover_blocks: usize,
    /// Probability to mutate a child. Default is 0.3.
    pub mutation_probability: f64,
    /// Max amount of attempts to create a valid initial individual. Default is 20.
    pub init_attempts: usize,
    /// Specifies how often progress is logged. Default is none.
    pub log_every: Option<usize>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            population_size: 30,
            parent_ratio: 0.5,
            crossover_blocks: 2,
            mutation_probability: 0.3,
            init_attempts: 20,
            log_every: None,
        }
    }
}

impl GeneticConfig {
    /// Sets amount of generations.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets population size.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets mutation probability.
    pub fn with_mutation_probability(mut self, mutation_probability: f64) -> Self {
        self.mutation_probability = mutation_probability;
        self
    }

    /// Sets logging interval.
    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = Some(log_every);
        self
    }

    /// Returns amount of parents kept in every generation.
    pub fn parent_count(&self) -> usize {
        ((self.population_size as f64 * self.parent_ratio).round() as usize).clamp(1, self.population_size)
    }

    /// Validates configuration values.
    pub fn validate(&self) -> PatrolResult<()> {
        [
            ("generations", self.generations),
            ("population size", self.population_size),
            ("crossover blocks", self.crossover_blocks),
            ("init attempts", self.init_attempts),
            ("log interval", self.log_every.unwrap_or(1)),
        ]
        .into_iter()
        .try_for_each(|(name, value)| check_positive_int(name, value))?;

        if self.population_size < 2 {
            return Err(PatrolError::invalid_parameter("population size must be at least 2"));
        }

        check_positive_real("parent ratio", self.parent_ratio)?;
        if self.parent_ratio > 1. {
            return Err(PatrolError::invalid_parameter("parent ratio must be in (0, 1]"));
        }

        if !(0. ..=1.).contains(&self.mutation_probability) {
            return Err(PatrolError::invalid_parameter("mutation probability must be in [0, 1]"));
        }

        Ok(())
    }
}
