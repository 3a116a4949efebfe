#[cfg(test)]
#[path = "../../tests/unit/models/routes_test.rs"]
mod routes_test;

use crate::algorithms::structures::NodeSet;

/// A route of a single agent: an ordered sequence of node indices which is patrolled as a cycle.
pub type Route = Vec<usize>;

/// A collection of routes, one per agent.
pub type RouteSet = Vec<Route>;

/// Checks whether routes visit every node in `[0, size)` at least once.
pub fn are_all_nodes_visited(routes: &[Route], size: usize) -> bool {
    let visited = NodeSet::from_nodes(size, routes.iter().flatten().copied().filter(|&node| node < size));

    visited.is_full()
}

/// Counts how many times every node occurs in routes.
pub fn count_node_occurrences(routes: &[Route], size: usize) -> Vec<usize> {
    routes.iter().flatten().filter(|&&node| node < size).fold(vec![0; size], |mut occurrences, &node| {
        occurrences[node] += 1;
        occurrences
    })
}

/// Removes immediately repeated nodes and a last node which equals the route's own start.
pub fn normalize_route(route: &[usize]) -> Route {
    let mut normalized: Route = Vec::with_capacity(route.len());

    route.iter().for_each(|&node| {
        if normalized.last() != Some(&node) {
            normalized.push(node);
        }
    });

    if normalized.len() > 1 && normalized.first() == normalized.last() {
        normalized.pop();
    }

    normalized
}
