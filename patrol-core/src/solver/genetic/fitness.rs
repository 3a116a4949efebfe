#[cfg(test)]
#[path = "../../../tests/unit/solver/genetic/fitness_test.rs"]
mod fitness_test;

use super::{Fitness, Individual};
use crate::algorithms::nsga2::{MultiObjective, dominance_order};
use crate::models::{CompleteGraph, Route, count_node_occurrences, normalize_route};
use crate::utils::compare_floats;
use std::cmp::Ordering;

/// Evaluates fitness of an individual. An individual which misses some node gets the worst fitness.
pub fn evaluate_fitness(graph: &CompleteGraph, individual: &Individual) -> Fitness {
    let size = graph.size();

    if individual.agents() == 0 || !individual.is_valid(size) {
        return Fitness::worst();
    }

    let real_routes = get_real_routes(graph, individual);
    let occurrences = count_node_occurrences(&real_routes, size);
    let occurrence = occurrences.iter().sum::<usize>() as f64 / size as f64;

    let length = individual.genes.iter().map(|gene| graph.matrix().route_length(gene, true)).sum::<f64>()
        / individual.agents() as f64;

    Fitness { occurrence, length }
}

/// Expands indicative routes of an individual into real ones without repeating the start node at the end.
pub fn get_real_routes(graph: &CompleteGraph, individual: &Individual) -> Vec<Route> {
    individual
        .genes
        .iter()
        .map(|gene| {
            let mut real = graph.paths().expand(&normalize_route(gene), true);
            if real.len() > 1 {
                real.pop();
            }
            real
        })
        .collect()
}

/// Returns index of the best fitness: the highest occurrence, then the shortest length. The lowest
/// index wins ties.
pub fn find_best(fitness: &[Fitness]) -> Option<usize> {
    fitness
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, &Fitness)>, (idx, candidate)| match best {
            Some((_, current)) if !candidate.is_better_than(current) => best,
            _ => Some((idx, candidate)),
        })
        .map(|(idx, _)| idx)
}

/// A bi-objective: occurrence is maximized, length is minimized.
#[derive(Default)]
pub struct PatrolObjective;

impl MultiObjective for PatrolObjective {
    type Solution = Fitness;

    fn total_order(&self, a: &Self::Solution, b: &Self::Solution) -> Ordering {
        dominance_order((0..self.size()).map(|idx| self.get_order(a, b, idx)))
    }

    fn get_order(&self, a: &Self::Solution, b: &Self::Solution, idx: usize) -> Ordering {
        match idx {
            0 => compare_floats(b.occurrence, a.occurrence),
            1 => compare_floats(a.length, b.length),
            _ => Ordering::Equal,
        }
    }

    fn get_distance(&self, a: &Self::Solution, b: &Self::Solution, idx: usize) -> f64 {
        match idx {
            0 => b.occurrence - a.occurrence,
            1 => a.length - b.length,
            _ => 0.,
        }
    }

    fn size(&self) -> usize {
        2
    }
}
