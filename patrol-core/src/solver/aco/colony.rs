#[cfg(test)]
#[path = "../../../tests/unit/solver/aco/colony_test.rs"]
mod colony_test;

use super::{AcoConfig, PheromoneMatrix};
use crate::algorithms::structures::NodeSet;
use crate::models::{CostMatrix, RouteSet};
use crate::utils::{PatrolError, PatrolResult, RandomGen};

/// Routes built by ants of one colony within one iteration.
#[derive(Clone, Debug)]
pub struct ColonyTours {
    /// One route per ant.
    pub routes: RouteSet,
    /// Closed tour length per ant.
    pub lengths: Vec<f64>,
    /// A sum of all ants' tour lengths.
    pub total_length: f64,
}

/// Builds tours of one colony. The tabu list is shared by all ants of the colony: a node visited by
/// one ant is never visited by another one. The ant with the shortest route so far moves next, so
/// nodes are spread between ants. Construction stops when every node is visited.
pub fn construct_colony(
    matrix: &CostMatrix,
    pheromone: &PheromoneMatrix,
    starts: &[usize],
    config: &AcoConfig,
    rng: &mut RandomGen,
) -> PatrolResult<ColonyTours> {
    let size = matrix.size();
    let mut tabu = NodeSet::from_nodes(size, starts.iter().copied());
    let mut routes: RouteSet = starts.iter().map(|&start| vec![start]).collect();
    let mut open_lengths = vec![0_f64; routes.len()];
    let mut weights = vec![0.; size];

    while !tabu.is_full() {
        let (ant, current) = (0..routes.len())
            .min_by(|&a, &b| open_lengths[a].total_cmp(&open_lengths[b]))
            .and_then(|ant| routes[ant].last().map(|&current| (ant, current)))
            .ok_or_else(|| PatrolError::invalid_parameter("colony has no ants"))?;

        let next = select_next(matrix, pheromone, current, &tabu, config, rng, &mut weights)?;

        tabu.insert(next);
        open_lengths[ant] += matrix.get(current, next);
        routes[ant].push(next);
    }

    let lengths = routes.iter().map(|route| matrix.route_length(route, true)).collect::<Vec<_>>();
    let total_length = lengths.iter().sum();

    Ok(ColonyTours { routes, lengths, total_length })
}

/// Selects the next node using roulette wheel: probability of a move from `current` to an unvisited
/// node is proportional to `pheromone^alpha * (1 / cost)^beta`. Visited nodes have zero probability.
pub fn select_next(
    matrix: &CostMatrix,
    pheromone: &PheromoneMatrix,
    current: usize,
    tabu: &NodeSet,
    config: &AcoConfig,
    rng: &mut RandomGen,
    weights: &mut [f64],
) -> PatrolResult<usize> {
    weights.iter_mut().enumerate().for_each(|(node, weight)| {
        *weight = if node == current || tabu.contains(node) {
            0.
        } else {
            pheromone.get(current, node).powf(config.alpha) * (1. / matrix.get(current, node)).powf(config.beta)
        };
    });

    let total = weights.iter().sum::<f64>();
    if !(total > 0. && total.is_finite()) {
        return Err(PatrolError::NoValidSelection(format!(
            "no node has positive attractiveness from node {current}, total weight is {total}"
        )));
    }

    let threshold = rng.uniform_real(0., total);
    let mut cumulative = 0.;
    let mut last_candidate = None;

    for (node, &weight) in weights.iter().enumerate().filter(|&(_, &weight)| weight > 0.) {
        cumulative += weight;
        last_candidate = Some(node);

        if cumulative > threshold {
            return Ok(node);
        }
    }

    // floating point sum might be slightly less than threshold
    last_candidate.ok_or_else(|| PatrolError::NoValidSelection(format!("roulette has no candidates at node {current}")))
}
