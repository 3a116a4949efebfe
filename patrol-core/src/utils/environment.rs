#[cfg(test)]
#[path = "../../tests/unit/utils/environment_test.rs"]
mod environment_test;

use crate::utils::{DefaultRandom, Random, ThreadPool, parallel_into_collect};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the solver.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Specifies how independent units of work within one iteration are executed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Parallelism {
    /// Everything runs on the calling thread.
    Sequential,
    /// Work is fanned out on the global rayon thread pool.
    #[default]
    Full,
    /// Work is fanned out on a dedicated pool with a limited amount of threads.
    Limited {
        /// Max amount of threads.
        max: usize,
    },
}

impl Parallelism {
    /// Maps every item of the source with `map_op` and collects results keeping the source order.
    /// Returns only when all items are processed.
    pub fn map_collect<T, F, R>(&self, source: Vec<T>, map_op: F) -> Vec<R>
    where
        T: Send + Sync,
        F: Fn(T) -> R + Sync + Send,
        R: Send,
    {
        match self {
            Self::Sequential => source.into_iter().map(map_op).collect(),
            Self::Full => parallel_into_collect(source, map_op),
            Self::Limited { max } => ThreadPool::new((*max).max(1)).execute(|| parallel_into_collect(source, map_op)),
        }
    }
}

/// Keeps track of the ambient state shared by all parts of a solver run.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random + Send + Sync>,

    /// Specifies how per colony or per individual work is distributed.
    pub parallelism: Parallelism,

    /// A logger used to report progress.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(random: Arc<dyn Random + Send + Sync>, parallelism: Parallelism, logger: InfoLogger) -> Self {
        Self { random, parallelism, logger }
    }

    /// Creates a new instance of `Environment` with repeatable random and silent logger.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { random: Arc::new(DefaultRandom::new_with_seed(seed)), parallelism: Parallelism::Full, logger: silent_logger() }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(DefaultRandom::default()), Parallelism::Full, Arc::new(|msg| println!("{msg}")))
    }
}

/// Returns a logger which ignores all messages.
pub fn silent_logger() -> InfoLogger {
    Arc::new(|_| {})
}

/// Returns amount of CPUs.
pub fn get_cpus() -> usize {
    num_cpus::get()
}
