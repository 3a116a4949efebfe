#[cfg(test)]
#[path = "../../../tests/unit/algorithms/nsga2/crowding_distance_test.rs"]
mod crowding_distance_test;

use super::{Front, MultiObjective};

/// Keeps a solution together with its position in the population, its front rank and crowding distance.
pub struct AssignedCrowdingDistance<'a, S>
where
    S: 'a,
{
    /// Index of the solution in the sorted collection.
    pub index: usize,
    /// A reference to the solution.
    pub solution: &'a S,
    /// A rank of the front the solution belongs to.
    pub rank: usize,
    /// A crowding distance, extreme solutions of every objective get infinity.
    pub crowding_distance: f64,
}

/// Assigns a crowding distance to each solution in `front`.
pub fn assign_crowding_distance<'a, S, O>(front: &Front<'a, S>, objective: &O) -> Vec<AssignedCrowdingDistance<'a, S>>
where
    O: MultiObjective<Solution = S>,
{
    let mut assigned: Vec<_> = front
        .iter()
        .map(|(solution, index)| AssignedCrowdingDistance { index, solution, rank: front.rank(), crowding_distance: 0. })
        .collect();

    if assigned.is_empty() {
        return assigned;
    }

    let objective_count = objective.size();

    (0..objective_count).for_each(|idx| {
        assigned.sort_by(|a, b| objective.get_order(a.solution, b.solution, idx).then(a.index.cmp(&b.index)));

        let last = assigned.len() - 1;
        assigned[0].crowding_distance = f64::INFINITY;
        assigned[last].crowding_distance = f64::INFINITY;

        // the distance between the "best" and "worst" solution according to the objective
        let spread = objective.get_distance(assigned[0].solution, assigned[last].solution, idx).abs();

        // non finite spread happens when invalid solutions with infinite fitness are in the front
        if spread > 0. && spread.is_finite() {
            let norm = 1. / (spread * objective_count as f64);

            for i in 1..last {
                let distance = objective.get_distance(assigned[i + 1].solution, assigned[i - 1].solution, idx).abs();
                if distance.is_finite() {
                    assigned[i].crowding_distance += distance * norm;
                }
            }
        }
    });

    assigned
}
