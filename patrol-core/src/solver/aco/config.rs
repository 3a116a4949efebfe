use crate::utils::{PatrolError, PatrolResult};

/// A configuration of ant colony optimization. Every colony sends one ant per agent, so an explicit
/// ant count must match the amount of agents of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct AcoConfig {
    /// Evaporation rate, in (0, 1]. Default is 0.5.
    pub evaporation_rate: f64,
    /// Pheromone influence exponent. Default is 1.
    pub alpha: f64,
    /// Cost influence exponent, applied to inverted cost. Default is 2.
    pub beta: f64,
    /// Pheromone quantity deposited by an ant per unit of inverted tour length. Default is 1.
    pub pheromone_quantity: f64,
    /// Amount of colonies. Default is 3.
    pub colonies: usize,
    /// Amount of ants per colony. Default is none, which means one ant per agent.
    pub ants: Option<usize>,
    /// Max amount of iterations. Default is 200.
    pub max_iterations: usize,
    /// Amount of recent iterations used for convergence detection. Default is 10.
    pub convergence_window: usize,
    /// Max difference of colony lengths within convergence window. Default is 1E-2.
    pub convergence_tolerance: f64,
    /// Specifies how often progress is logged. Default is none.
    pub log_every: Option<usize>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            evaporation_rate: 0.5,
            alpha: 1.,
            beta: 2.,
            pheromone_quantity: 1.,
            colonies: 3,
            ants: None,
            max_iterations: 200,
            convergence_window: 10,
            convergence_tolerance: 1E-2,
            log_every: None,
        }
    }
}

impl AcoConfig {
    /// Sets evaporation rate.
    pub fn with_evaporation_rate(mut self, evaporation_rate: f64) -> Self {
        self.evaporation_rate = evaporation_rate;
        self
    }

    /// Sets pheromone and cost influence exponents.
    pub fn with_influence(mut self, alpha: f64, beta: f64) -> Self {
        self.alpha = alpha;
        self.beta = beta;
        self
    }

    /// Sets pheromone quantity.
    pub fn with_pheromone_quantity(mut self, pheromone_quantity: f64) -> Self {
        self.pheromone_quantity = pheromone_quantity;
        self
    }

    /// Sets amount of colonies.
    pub fn with_colonies(mut self, colonies: usize) -> Self {
        self.colonies = colonies;
        self
    }

    /// Sets amount of ants per colony.
    pub fn with_ants(mut self, ants: usize) -> Self {
        self.ants = Some(ants);
        self
    }

    /// Sets max amount of iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets logging interval.
    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = Some(log_every);
        self
    }

    /// Validates configuration values.
    pub fn validate(&self) -> PatrolResult<()> {
        if !(self.evaporation_rate > 0. && self.evaporation_rate <= 1.) {
            return Err(PatrolError::invalid_parameter(format!(
                "evaporation rate must be in (0, 1], got {}",
                self.evaporation_rate
            )));
        }

        [("alpha", self.alpha), ("beta", self.beta), ("pheromone quantity", self.pheromone_quantity)]
            .into_iter()
            .try_for_each(|(name, value)| check_positive_real(name, value))?;

        if !(self.convergence_tolerance >= 0. && self.convergence_tolerance.is_finite()) {
            return Err(PatrolError::invalid_parameter("convergence tolerance must be non-negative"));
        }

        [
            ("colonies", self.colonies),
            ("ants", self.ants.unwrap_or(1)),
            ("max iterations", self.max_iterations),
            ("convergence window", self.convergence_window),
            ("log interval", self.log_every.unwrap_or(1)),
        ]
        .into_iter()
        .try_for_each(|(name, value)| check_positive_int(name, value))
    }

    /// Checks that ant count, if given, matches the amount of agents.
    pub fn validate_ants(&self, agents: usize) -> PatrolResult<()> {
        match self.ants {
            Some(ants) if ants != agents => Err(PatrolError::invalid_parameter(format!(
                "ant count must be equal to amount of agents {agents}, got {ants}"
            ))),
            _ => Ok(()),
        }
    }
}

pub(crate) fn check_positive_real(name: &str, value: f64) -> PatrolResult<()> {
    if value > 0. && value.is_finite() {
        Ok(())
    } else {
        Err(PatrolError::invalid_parameter(format!("{name} must be positive, got {value}")))
    }
}

pub(crate) fn check_positive_int(name: &str, value: usize) -> PatrolResult<()> {
    if value > 0 { Ok(()) } else { Err(PatrolError::invalid_parameter(format!("{name} must be positive"))) }
}
