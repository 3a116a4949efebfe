#[cfg(test)]
#[path = "../../../tests/unit/solver/genetic/initial_test.rs"]
mod initial_test;

use super::Individual;
use crate::models::CostMatrix;
use crate::utils::RandomGen;

/// Creates initial population. The first individual is built from a nearest neighbour tour split
/// between agents, the others are derived from it by random segment reversals and rotation. Every
/// derived individual is retried up to `max_attempts` times until it visits all nodes, otherwise
/// the last attempt is kept.
pub fn create_initial_population(
    matrix: &CostMatrix,
    agents: usize,
    population_size: usize,
    max_attempts: usize,
    rng: &mut RandomGen,
) -> Vec<Individual> {
    let size = matrix.size();
    let start = rng.uniform_index(size);
    let tour = create_nearest_neighbour_tour(matrix, start);

    let mut population = Vec::with_capacity(population_size);
    population.push(Individual::from_sequence(&tour, agents));

    while population.len() < population_size {
        let mut derived = Individual::from_sequence(&perturb_tour(&tour, rng), agents);

        for _ in 1..max_attempts {
            if derived.is_valid(size) {
                break;
            }
            derived = Individual::from_sequence(&perturb_tour(&tour, rng), agents);
        }

        population.push(derived);
    }

    population
}

/// Builds a tour which always moves to the nearest unvisited node.
pub fn create_nearest_neighbour_tour(matrix: &CostMatrix, start: usize) -> Vec<usize> {
    let size = matrix.size();
    let mut visited = vec![false; size];
    let mut tour = Vec::with_capacity(size);

    let mut current = start;
    loop {
        visited[current] = true;
        tour.push(current);

        match matrix.nearest(current, (0..size).filter(|&node| !visited[node])) {
            Some(next) => current = next,
            None => break,
        }
    }

    tour
}

fn perturb_tour(tour: &[usize], rng: &mut RandomGen) -> Vec<usize> {
    let mut perturbed = tour.to_vec();
    let size = perturbed.len();

    if size < 2 {
        return perturbed;
    }

    let reversals = 1 + rng.uniform_index(3);
    (0..reversals).for_each(|_| {
        let (a, b) = (rng.uniform_index(size), rng.uniform_index(size));
        let (from, to) = if a <= b { (a, b) } else { (b, a) };
        perturbed[from..=to].reverse();
    });

    perturbed.rotate_left(rng.uniform_index(size));

    perturbed
}
