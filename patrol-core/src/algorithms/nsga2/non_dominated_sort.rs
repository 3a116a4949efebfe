//! Implementation of the Fast Non-Dominated Sort Algorithm as used by NSGA-II.
//! Time complexity is `O(K * N^2)`, where `K` is the number of objectives and `N` the number of solutions.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/nsga2/non_dominated_sort_test.rs"]
mod non_dominated_sort_test;

use super::MultiObjective;
use std::cmp::Ordering;

/// Represents a single Pareto front within a sorted set of solutions.
#[derive(Debug, Clone)]
pub struct Front<'s, S: 's> {
    dominated_solutions: Vec<Vec<usize>>,
    domination_count: Vec<usize>,
    current_front: Vec<usize>,
    rank: usize,
    solutions: &'s [S],
}

impl<'s, S: 's> Front<'s, S> {
    /// Returns a rank of the front, the first front has rank zero.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Returns indices of solutions in the front in ascending order.
    pub fn indices(&self) -> &[usize] {
        self.current_front.as_slice()
    }

    /// Iterates over the solutions of the front with their indices.
    pub fn iter(&self) -> impl Iterator<Item = (&'s S, usize)> + '_ {
        self.current_front.iter().map(|&idx| (&self.solutions[idx], idx))
    }

    /// Returns true if the front has no solutions.
    pub fn is_empty(&self) -> bool {
        self.current_front.is_empty()
    }

    /// Removes the current front from consideration and builds the next one from solutions
    /// dominated only by removed fronts.
    pub fn next_front(self) -> Self {
        let Front { dominated_solutions, mut domination_count, current_front, rank, solutions } = self;

        let mut next_front = Vec::new();
        for &p_idx in current_front.iter() {
            for &q_idx in dominated_solutions[p_idx].iter() {
                domination_count[q_idx] -= 1;
                if domination_count[q_idx] == 0 {
                    next_front.push(q_idx);
                }
            }
        }
        next_front.sort_unstable();

        Self { dominated_solutions, domination_count, current_front: next_front, rank: rank + 1, solutions }
    }
}

/// Performs a non-dominated sort of `solutions`. Returns the first Pareto front.
pub fn non_dominated_sort<'s, S, O>(solutions: &'s [S], objective: &O) -> Front<'s, S>
where
    O: MultiObjective<Solution = S>,
{
    // the indices of the solutions that are dominated by a solution with given index
    let mut dominated_solutions: Vec<Vec<usize>> = vec![Vec::new(); solutions.len()];
    // the number of solutions that dominate a solution with given index
    let mut domination_count: Vec<usize> = vec![0; solutions.len()];

    for (p_idx, p) in solutions.iter().enumerate() {
        for (q_idx, q) in solutions.iter().enumerate().skip(p_idx + 1) {
            match objective.total_order(p, q) {
                Ordering::Less => {
                    dominated_solutions[p_idx].push(q_idx);
                    domination_count[q_idx] += 1;
                }
                Ordering::Greater => {
                    dominated_solutions[q_idx].push(p_idx);
                    domination_count[p_idx] += 1;
                }
                Ordering::Equal => {}
            }
        }
    }

    let current_front = (0..solutions.len()).filter(|&idx| domination_count[idx] == 0).collect();

    Front { dominated_solutions, domination_count, current_front, rank: 0, solutions }
}

/// Splits all solutions into ranked fronts, each front is a list of solution indices.
pub fn collect_fronts<S, O>(solutions: &[S], objective: &O) -> Vec<Vec<usize>>
where
    O: MultiObjective<Solution = S>,
{
    let mut fronts = Vec::new();
    let mut front = non_dominated_sort(solutions, objective);

    while !front.is_empty() {
        fronts.push(front.indices().to_vec());
        front = front.next_front();
    }

    fronts
}
