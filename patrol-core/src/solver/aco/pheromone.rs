use crate::models::Route;

/// A square matrix of pheromone levels between nodes. All values are non-negative and the
/// diagonal is always zero.
#[derive(Clone, Debug, PartialEq)]
pub struct PheromoneMatrix {
    size: usize,
    values: Vec<f64>,
}

impl PheromoneMatrix {
    /// Creates a new matrix with ones everywhere except the diagonal.
    pub fn new(size: usize) -> Self {
        let values = (0..size * size).map(|idx| if idx / size == idx % size { 0. } else { 1. }).collect();

        Self { size, values }
    }

    /// Returns amount of nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns pheromone level between two nodes.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.values[from * self.size + to]
    }

    /// Iterates over all values row by row.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Evaporates all values by `(1 - rate)`.
    pub fn evaporate(&mut self, rate: f64) {
        let factor = 1. - rate;
        self.values.iter_mut().for_each(|value| *value *= factor);
    }

    /// Adds `amount` on every edge of a cyclic route in both directions, including the hop from the
    /// last node back to the first one.
    pub fn deposit(&mut self, route: &Route, amount: f64) {
        if route.len() < 2 {
            return;
        }

        let closing = route.last().copied().zip(route.first().copied());

        route.windows(2).map(|pair| (pair[0], pair[1])).chain(closing).filter(|(from, to)| from != to).for_each(
            |(from, to)| {
                self.values[from * self.size + to] += amount;
                self.values[to * self.size + from] += amount;
            },
        );
    }
}
