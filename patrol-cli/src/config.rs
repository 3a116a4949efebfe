//! This module allows to configure route generation strategies from a JSON file.
//!
//! All sections and fields are optional, missing values fall back to the defaults of the
//! corresponding core configuration:
//!
//! ```json
//! {
//!   "aco": { "evaporationRate": 0.5, "alpha": 1, "beta": 2, "colonies": 3, "ants": 2, "maxIterations": 200 },
//!   "genetic": { "generations": 100, "populationSize": 30, "mutationProbability": 0.3 },
//!   "cluster": { "launches": 10 },
//!   "telemetry": { "logging": { "enabled": true, "logEvery": 20 } },
//!   "environment": { "parallelism": { "maxThreads": 4 } }
//! }
//! ```

#[cfg(test)]
#[path = "../tests/unit/config_test.rs"]
mod config_test;

use patrol_core::prelude::*;
use patrol_core::utils::get_cpus;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// An algorithm configuration.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Ant colony optimization settings.
    pub aco: Option<AcoSettings>,
    /// Genetic algorithm settings.
    pub genetic: Option<GeneticSettings>,
    /// Zoning settings.
    pub cluster: Option<ClusterSettings>,
    /// Telemetry settings.
    pub telemetry: Option<TelemetryConfig>,
    /// Environment specific settings.
    pub environment: Option<EnvironmentConfig>,
}

/// Ant colony optimization settings.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AcoSettings {
    /// Evaporation rate, in (0, 1].
    pub evaporation_rate: Option<f64>,
    /// Pheromone influence exponent.
    pub alpha: Option<f64>,
    /// Cost influence exponent.
    pub beta: Option<f64>,
    /// Pheromone deposit quantity.
    pub pheromone_quantity: Option<f64>,
    /// Amount of colonies.
    pub colonies: Option<usize>,
    /// Amount of ants per colony, must be equal to amount of agents.
    pub ants: Option<usize>,
    /// Max amount of iterations.
    pub max_iterations: Option<usize>,
    /// Amount of iterations used to detect convergence.
    pub convergence_window: Option<usize>,
    /// Max difference of colony lengths within convergence window.
    pub convergence_tolerance: Option<f64>,
}

/// Genetic algorithm settings.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GeneticSettings {
    /// Amount of generations.
    pub generations: Option<usize>,
    /// Population size.
    pub population_size: Option<usize>,
    /// A share of population selected as parents.
    pub parent_ratio: Option<f64>,
    /// Amount of column blocks exchanged by crossover.
    pub crossover_blocks: Option<usize>,
    /// Mutation probability.
    pub mutation_probability: Option<f64>,
    /// Max attempts to create a valid initial individual.
    pub init_attempts: Option<usize>,
}

/// Zoning settings. Every zone is optimized with `genetic` settings.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSettings {
    /// Amount of k-means launches.
    pub launches: Option<usize>,
    /// Max amount of k-means iterations per launch.
    pub max_iterations: Option<usize>,
}

/// Specifies a telemetry config.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryConfig {
    /// Logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// Specifies logging configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled. Default is false.
    pub enabled: bool,
    /// Specifies how often progress is logged. Default is 100 (iterations or generations).
    pub log_every: Option<usize>,
}

/// An environment specific settings.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentConfig {
    /// Specifies parallelism settings.
    pub parallelism: Option<ParallelismConfig>,
}

/// Specifies data parallelism settings.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ParallelismConfig {
    /// Max amount of threads used by a run, one means sequential execution. All CPUs are used when
    /// the value exceeds their amount.
    pub max_threads: usize,
}

const DEFAULT_LOG_EVERY: usize = 100;

impl Config {
    /// Returns logging interval if logging is enabled.
    pub fn log_every(&self) -> Option<usize> {
        self.telemetry
            .as_ref()
            .and_then(|telemetry| telemetry.logging.as_ref())
            .filter(|logging| logging.enabled)
            .map(|logging| logging.log_every.unwrap_or(DEFAULT_LOG_EVERY))
    }

    /// Enables logging with given interval unless it is already configured.
    pub fn with_logging(mut self, log_every: usize) -> Self {
        if self.log_every().is_none() {
            self.telemetry =
                Some(TelemetryConfig { logging: Some(LoggingConfig { enabled: true, log_every: Some(log_every) }) });
        }
        self
    }

    /// Creates ant colony optimization config.
    pub fn to_aco_config(&self) -> AcoConfig {
        let defaults = AcoConfig::default();
        let settings = self.aco.clone().unwrap_or_default();

        AcoConfig {
            evaporation_rate: settings.evaporation_rate.unwrap_or(defaults.evaporation_rate),
            alpha: settings.alpha.unwrap_or(defaults.alpha),
            beta: settings.beta.unwrap_or(defaults.beta),
            pheromone_quantity: settings.pheromone_quantity.unwrap_or(defaults.pheromone_quantity),
            colonies: settings.colonies.unwrap_or(defaults.colonies),
            ants: settings.ants.or(defaults.ants),
            max_iterations: settings.max_iterations.unwrap_or(defaults.max_iterations),
            convergence_window: settings.convergence_window.unwrap_or(defaults.convergence_window),
            convergence_tolerance: settings.convergence_tolerance.unwrap_or(defaults.convergence_tolerance),
            log_every: self.log_every(),
        }
    }

    /// Creates genetic algorithm config.
    pub fn to_genetic_config(&self) -> GeneticConfig {
        let defaults = GeneticConfig::default();
        let settings = self.genetic.clone().unwrap_or_default();

        GeneticConfig {
            generations: settings.generations.unwrap_or(defaults.generations),
            population_size: settings.population_size.unwrap_or(defaults.population_size),
            parent_ratio: settings.parent_ratio.unwrap_or(defaults.parent_ratio),
            crossover_blocks: settings.crossover_blocks.unwrap_or(defaults.crossover_blocks),
            mutation_probability: settings.mutation_probability.unwrap_or(defaults.mutation_probability),
            init_attempts: settings.init_attempts.unwrap_or(defaults.init_attempts),
            log_every: self.log_every(),
        }
    }

    /// Creates zoning config, zones are optimized with genetic settings without progress logging.
    pub fn to_cluster_config(&self) -> ClusterConfig {
        let defaults = ClusterConfig::default();
        let settings = self.cluster.clone().unwrap_or_default();

        ClusterConfig {
            launches: settings.launches.unwrap_or(defaults.launches),
            max_iterations: settings.max_iterations.unwrap_or(defaults.max_iterations),
            genetic: GeneticConfig { log_every: None, ..self.to_genetic_config() },
            log_every: self.log_every(),
        }
    }

    /// Creates an environment: seeded random when a seed is given, stdout logger when logging is
    /// enabled.
    pub fn create_environment(&self, seed: Option<u64>) -> Environment {
        let random: Arc<dyn Random + Send + Sync> = match seed {
            Some(seed) => Arc::new(DefaultRandom::new_with_seed(seed)),
            None => Arc::new(DefaultRandom::default()),
        };

        let parallelism = match self.environment.as_ref().and_then(|env| env.parallelism.as_ref()) {
            Some(ParallelismConfig { max_threads }) if *max_threads <= 1 => Parallelism::Sequential,
            Some(ParallelismConfig { max_threads }) if *max_threads >= get_cpus() => Parallelism::Full,
            Some(ParallelismConfig { max_threads }) => Parallelism::Limited { max: *max_threads },
            None => Parallelism::Full,
        };

        let logger: InfoLogger = if self.log_every().is_some() {
            Arc::new(|msg: &str| println!("{msg}"))
        } else {
            Arc::new(|_: &str| {})
        };

        Environment::new(random, parallelism, logger)
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, GenericError> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}
