//! A module which provides simple logging of a solver run progress.

use crate::utils::{Environment, InfoLogger, Timer};

/// Writes information about a solver run into the environment's log.
pub struct Telemetry {
    logger: Option<InfoLogger>,
    log_every: usize,
    time: Timer,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`. Nothing is logged when `log_every` is not set.
    pub fn new(environment: &Environment, log_every: Option<usize>) -> Self {
        Self {
            logger: log_every.map(|_| environment.logger.clone()),
            log_every: log_every.unwrap_or(usize::MAX).max(1),
            time: Timer::start(),
        }
    }

    /// Reports a run start.
    pub fn on_start(&mut self, strategy: &str, nodes: usize, agents: usize) {
        self.time = Timer::start();
        self.log(&format!("[{strategy}] started with {nodes} nodes and {agents} agents"));
    }

    /// Reports progress of an iteration or a generation, only every `log_every` one is logged.
    pub fn on_progress(&self, iteration: usize, best: f64) {
        if iteration % self.log_every == 0 {
            self.log(&format!("[{:.3}s] iteration {iteration}, best value: {best:.3}", self.time.elapsed_secs_as_float()));
        }
    }

    /// Reports a run convergence before iteration limit is reached.
    pub fn on_convergence(&self, iteration: usize) {
        self.log(&format!("[{:.3}s] converged at iteration {iteration}", self.time.elapsed_secs_as_float()));
    }

    /// Reports a run result.
    pub fn on_result(&self, iterations: usize, best: f64) {
        self.log(&format!(
            "[{:.3}s] finished after {iterations} iterations, best value: {best:.3}",
            self.time.elapsed_secs_as_float()
        ));
    }

    /// Writes a message into log.
    pub fn log(&self, message: &str) {
        if let Some(logger) = &self.logger {
            (logger)(message)
        }
    }
}
