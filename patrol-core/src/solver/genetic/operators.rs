#[cfg(test)]
#[path = "../../../tests/unit/solver/genetic/operators_test.rs"]
mod operators_test;

use super::Individual;
use crate::algorithms::structures::NodeSet;
use crate::models::{CostMatrix, Route};
use crate::utils::RandomGen;
use rand::seq::SliceRandom;

/// Creates two children by exchanging column blocks between parents. Rows of the second parent are
/// shuffled first, so genes are mixed across agents. Even blocks of the first child come from the
/// first parent, odd blocks from the second one. The second child gets the opposite blocks.
pub fn crossover(
    first: &Individual,
    second: &Individual,
    blocks: usize,
    rng: &mut RandomGen,
) -> (Individual, Individual) {
    let mut shuffled = second.genes.clone();
    shuffled.shuffle(rng);

    let gene_length = first.gene_length().min(second.gene_length());
    let blocks = blocks.clamp(1, gene_length.max(1));
    let block_of = |column: usize| column * blocks / gene_length.max(1);

    let (left, right): (Vec<Route>, Vec<Route>) = first
        .genes
        .iter()
        .zip(shuffled.iter())
        .map(|(a, b)| {
            (0..gene_length)
                .map(|column| if block_of(column) % 2 == 0 { (a[column], b[column]) } else { (b[column], a[column]) })
                .unzip::<_, _, Route, Route>()
        })
        .unzip();

    (Individual { genes: left }, Individual { genes: right })
}

/// Replaces repeated nodes with missing ones, so every node is visited at least once. Duplicates
/// are collected in gene-major order after the first occurrence of each node and overwritten with
/// missing nodes in ascending order.
pub fn repair(individual: &mut Individual, size: usize) {
    let visited = individual.visited(size);
    let missing = visited.missing().collect::<Vec<_>>();

    if missing.is_empty() {
        return;
    }

    let mut seen = NodeSet::new(size);
    let duplicates = individual
        .genes
        .iter()
        .enumerate()
        .flat_map(|(row, gene)| gene.iter().enumerate().map(move |(column, &node)| (row, column, node)))
        .filter(|&(_, _, node)| !seen.insert(node))
        .map(|(row, column, _)| (row, column))
        .collect::<Vec<_>>();

    duplicates.into_iter().zip(missing).for_each(|((row, column), node)| individual.genes[row][column] = node);
}

/// Reorders every gene using nearest unvisited neighbour heuristic starting from the gene's first node.
pub fn local_optimize(individual: &mut Individual, matrix: &CostMatrix) {
    individual.genes.iter_mut().for_each(|gene| *gene = reorder_nearest(gene, matrix));
}

/// Reverses a random gene with given probability.
pub fn mutate(individual: &mut Individual, probability: f64, rng: &mut RandomGen) {
    if individual.agents() > 0 && rng.uniform_real(0., 1.) < probability {
        let idx = rng.uniform_index(individual.agents());
        individual.genes[idx].reverse();
    }
}

fn reorder_nearest(gene: &[usize], matrix: &CostMatrix) -> Route {
    let Some((&first, rest)) = gene.split_first() else {
        return Vec::new();
    };

    let mut remaining = rest.to_vec();
    let mut reordered = Vec::with_capacity(gene.len());
    reordered.push(first);

    let mut current = first;
    while !remaining.is_empty() {
        let position = (0..remaining.len())
            .min_by(|&a, &b| matrix.get(current, remaining[a]).total_cmp(&matrix.get(current, remaining[b])))
            .unwrap_or(0);

        current = remaining.remove(position);
        reordered.push(current);
    }

    reordered
}
