#[cfg(test)]
#[path = "../../tests/unit/models/paths_test.rs"]
mod paths_test;

use rustc_hash::FxHashMap;

/// Keeps the shortest path between pairs of nodes. Every path is stored in both directions, so an
/// indicative route can be expanded whatever direction it is traversed in.
#[derive(Clone, Debug, Default)]
pub struct ShortestPathTable {
    size: usize,
    paths: FxHashMap<(usize, usize), Vec<usize>>,
}

impl ShortestPathTable {
    /// Creates a new empty table for graph of given size.
    pub fn new(size: usize) -> Self {
        Self { size, paths: FxHashMap::default() }
    }

    /// Returns amount of nodes in the graph.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Stores a path which starts at `from` and ends at `to` together with its exact reverse.
    pub fn insert(&mut self, from: usize, to: usize, path: Vec<usize>) {
        debug_assert_eq!(path.first(), Some(&from));
        debug_assert_eq!(path.last(), Some(&to));

        let reversed = path.iter().rev().copied().collect();
        self.paths.insert((to, from), reversed);
        self.paths.insert((from, to), path);
    }

    /// Returns the path from `from` to `to`, both ends included.
    pub fn get(&self, from: usize, to: usize) -> Option<&[usize]> {
        self.paths.get(&(from, to)).map(|path| path.as_slice())
    }

    /// Expands an indicative route into a real route where every intermediate node is explicit.
    /// When `is_closed` is set, the hop from the last node back to the first one is expanded too
    /// and the first node is repeated at the end.
    pub fn expand(&self, route: &[usize], is_closed: bool) -> Vec<usize> {
        let Some(&first) = route.first() else {
            return Vec::new();
        };

        let closing = if is_closed && route.len() > 1 { Some(first) } else { None };
        let mut real = vec![first];

        route.iter().skip(1).copied().chain(closing).fold(first, |from, to| {
            match self.get(from, to) {
                Some(path) => real.extend(path.iter().skip(1)),
                None if from != to => real.push(to),
                None => {}
            }

            to
        });

        real
    }
}
