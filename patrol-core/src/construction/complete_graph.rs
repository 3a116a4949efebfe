#[cfg(test)]
#[path = "../../tests/unit/construction/complete_graph_test.rs"]
mod complete_graph_test;

use crate::algorithms::pathfinding::{FoundPath, find_path};
use crate::models::{CompleteGraph, CostMatrix, Graph, ShortestPathTable};
use crate::utils::{PatrolError, PatrolResult, parallel_collect};

/// Derives a complete graph: for every pair of nodes, a direct edge is copied with its weight and
/// the trivial path, otherwise A* search is used to find the shortest path over the sparse graph.
///
/// Fails with `PatrolError::Unreachable` if any pair of nodes is not connected: patrolling is
/// undefined on a disconnected graph.
pub fn build_complete_graph(graph: &Graph) -> PatrolResult<CompleteGraph> {
    let size = graph.size();
    let pairs = (0..size).flat_map(|from| ((from + 1)..size).map(move |to| (from, to))).collect::<Vec<_>>();

    let found_paths = parallel_collect(&pairs, |&(from, to)| find_pair_path(graph, from, to))
        .into_iter()
        .collect::<PatrolResult<Vec<_>>>()?;

    let (matrix, paths) = pairs.into_iter().zip(found_paths).fold(
        (CostMatrix::new(size), ShortestPathTable::new(size)),
        |(mut matrix, mut paths), ((from, to), found)| {
            matrix.set_symmetric(from, to, found.cost);
            paths.insert(from, to, found.nodes);

            (matrix, paths)
        },
    );

    CompleteGraph::new(matrix, paths, graph.positions().to_vec())
}

/// Finds a shortest path between two nodes of the sparse graph.
pub fn find_pair_path(graph: &Graph, from: usize, to: usize) -> PatrolResult<FoundPath> {
    if let Some(weight) = graph.weight(from, to) {
        return Ok(FoundPath { nodes: vec![from, to], cost: weight });
    }

    let positions = graph.positions();
    let goal = positions[to];

    find_path(graph.size(), from, to, |a, b| graph.raw_weight(a, b), |node| positions[node].distance_to_point(&goal))
        .ok_or(PatrolError::Unreachable { from, to })
}
