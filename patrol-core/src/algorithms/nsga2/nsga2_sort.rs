#[cfg(test)]
#[path = "../../../tests/unit/algorithms/nsga2/nsga2_sort_test.rs"]
mod nsga2_sort_test;

use super::*;
use crate::utils::compare_floats;

/// Select `n` solutions using the approach taken by NSGA2.
///
/// We first sort the solutions into their corresponding pareto fronts using a non-dominated sort
/// algorithm. Then, we put as many "complete" fronts into the result set, until we cannot fit in a
/// whole front anymore, without exceeding `n` solutions in the result set. For this last front,
/// that does not completely fit into the result set, we sort its solutions according to their
/// crowding distance (higher crowding distance is "better"), and prefer those solutions with the
/// higher crowding distance until we have exactly `n` solutions in the result set.
pub fn select_and_rank<'a, S: 'a, O>(solutions: &'a [S], n: usize, objective: &O) -> Vec<AssignedCrowdingDistance<'a, S>>
where
    O: MultiObjective<Solution = S>,
{
    // cannot select more solutions than we actually have
    let n = solutions.len().min(n);

    let mut result = Vec::with_capacity(n);
    let mut missing_solutions = n;

    let mut front = non_dominated_sort(solutions, objective);

    while !front.is_empty() && missing_solutions > 0 {
        let mut assigned_crowding = assign_crowding_distance(&front, objective);

        if assigned_crowding.len() > missing_solutions {
            // the front does not fit in total, prefer less crowded solutions
            assigned_crowding
                .sort_by(|a, b| compare_floats(b.crowding_distance, a.crowding_distance).then(a.index.cmp(&b.index)));
        } else {
            assigned_crowding.sort_by_key(|assigned| assigned.index);
        }

        let take = assigned_crowding.len().min(missing_solutions);
        result.extend(assigned_crowding.into_iter().take(take));
        missing_solutions -= take;

        front = front.next_front();
    }

    debug_assert_eq!(n, result.len());

    result
}
