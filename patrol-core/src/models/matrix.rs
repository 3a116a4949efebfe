#[cfg(test)]
#[path = "../../tests/unit/models/matrix_test.rs"]
mod matrix_test;

use crate::utils::{PatrolError, PatrolResult};

/// A square symmetric matrix of travel costs between nodes with zeros on the diagonal.
#[derive(Clone, Debug, PartialEq)]
pub struct CostMatrix {
    size: usize,
    values: Vec<f64>,
}

impl CostMatrix {
    /// Creates a new matrix of given size filled with zeros.
    pub fn new(size: usize) -> Self {
        Self { size, values: vec![0.; size * size] }
    }

    /// Creates a new matrix from rows, checks that it is square, symmetric and has zero diagonal.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> PatrolResult<Self> {
        let size = rows.len();

        if rows.iter().any(|row| row.len() != size) {
            return Err(PatrolError::invalid_graph(format!("cost matrix must be {size}x{size}")));
        }

        let matrix = Self { size, values: rows.into_iter().flatten().collect() };

        if matrix.values.iter().any(|value| !value.is_finite() || *value < 0.) {
            return Err(PatrolError::invalid_graph("cost matrix has negative or non finite values"));
        }

        if (0..size).any(|idx| matrix.get(idx, idx) != 0.) {
            return Err(PatrolError::invalid_graph("cost matrix must have zero diagonal"));
        }

        if !matrix.is_symmetric() {
            return Err(PatrolError::invalid_graph("cost matrix must be symmetric"));
        }

        Ok(matrix)
    }

    /// Returns amount of nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns cost between two nodes.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.values[from * self.size + to]
    }

    /// Sets cost between two nodes in both directions.
    pub fn set_symmetric(&mut self, from: usize, to: usize, value: f64) {
        self.values[from * self.size + to] = value;
        self.values[to * self.size + from] = value;
    }

    /// Returns a row of costs from given node.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.values[from * self.size..(from + 1) * self.size]
    }

    /// Checks whether the matrix is symmetric.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|from| (from + 1..self.size).all(|to| self.get(from, to) == self.get(to, from)))
    }

    /// Returns a length of a route. When `is_closed` is set, the hop from the last node back to the
    /// first one is included.
    pub fn route_length(&self, route: &[usize], is_closed: bool) -> f64 {
        let open_length = route.windows(2).map(|pair| self.get(pair[0], pair[1])).sum::<f64>();

        match (is_closed, route.first(), route.last()) {
            (true, Some(&first), Some(&last)) => open_length + self.get(last, first),
            _ => open_length,
        }
    }

    /// Returns a matrix which contains only given nodes, the order of nodes defines new indices.
    pub fn sub_matrix(&self, nodes: &[usize]) -> CostMatrix {
        let mut sub_matrix = CostMatrix::new(nodes.len());

        for (new_from, &from) in nodes.iter().enumerate() {
            for (new_to, &to) in nodes.iter().enumerate().skip(new_from + 1) {
                sub_matrix.set_symmetric(new_from, new_to, self.get(from, to));
            }
        }

        sub_matrix
    }

    /// Returns the closest node to `from` among candidates. Ties are resolved by the lowest index.
    pub fn nearest(&self, from: usize, candidates: impl Iterator<Item = usize>) -> Option<usize> {
        candidates.min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)).then(a.cmp(&b)))
    }
}
