//! A* search over a graph given by a weight function where zero weight means no edge.
//!
//! The open set is scanned linearly for the minimum f-score: node counts of patrol graphs are small
//! enough, so a priority queue does not pay off.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/pathfinding/astar_test.rs"]
mod astar_test;

use crate::algorithms::structures::NodeSet;

/// A path found by search: visited nodes from start to goal inclusive and total cost.
#[derive(Clone, Debug, PartialEq)]
pub struct FoundPath {
    /// Nodes from start to goal.
    pub nodes: Vec<usize>,
    /// A sum of edge weights along the path.
    pub cost: f64,
}

/// Finds a path from `start` to `goal` using A* algorithm.
///
/// - `size`: total amount of nodes, indices are in `[0, size)`
/// - `weight_fn`: returns edge weight between two nodes, the edge exists only if weight is positive
/// - `heuristic_fn`: returns an estimated cost from node to the goal
///
/// Returns `None` when the goal cannot be reached.
pub fn find_path<W, H>(size: usize, start: usize, goal: usize, weight_fn: W, heuristic_fn: H) -> Option<FoundPath>
where
    W: Fn(usize, usize) -> f64,
    H: Fn(usize) -> f64,
{
    if start >= size || goal >= size {
        return None;
    }

    let mut g_score = vec![f64::INFINITY; size];
    let mut f_score = vec![f64::INFINITY; size];
    let mut came_from: Vec<Option<usize>> = vec![None; size];
    let mut open_set = NodeSet::new(size);

    g_score[start] = 0.;
    f_score[start] = heuristic_fn(start);
    open_set.insert(start);

    loop {
        let Some(current) = open_set.iter().min_by(|&a, &b| f_score[a].total_cmp(&f_score[b])) else {
            break;
        };

        if current == goal {
            return Some(FoundPath { nodes: reconstruct_path(&came_from, goal), cost: g_score[goal] });
        }

        open_set.remove(current);

        for neighbour in (0..size).filter(|&node| node != current) {
            let weight = weight_fn(current, neighbour);
            if weight <= 0. {
                continue;
            }

            let tentative = g_score[current] + weight;
            if tentative < g_score[neighbour] {
                came_from[neighbour] = Some(current);
                g_score[neighbour] = tentative;
                f_score[neighbour] = tentative + heuristic_fn(neighbour);
                open_set.insert(neighbour);
            }
        }
    }

    None
}

fn reconstruct_path(came_from: &[Option<usize>], goal: usize) -> Vec<usize> {
    let mut path = vec![goal];
    let mut current = goal;

    while let Some(previous) = came_from[current] {
        path.push(previous);
        current = previous;
    }

    path.reverse();

    path
}
