#[cfg(test)]
#[path = "../../tests/unit/models/graph_test.rs"]
mod graph_test;

use crate::algorithms::geometry::Point;
use crate::models::{CostMatrix, ShortestPathTable};
use crate::utils::{PatrolError, PatrolResult};

/// A tolerance used to check symmetry of weights.
const SYMMETRY_TOLERANCE: f64 = 1E-9;

/// An undirected weighted graph of the patrolled area. A zero weight between two nodes means
/// there is no edge between them.
#[derive(Clone, Debug)]
pub struct Graph {
    positions: Vec<Point>,
    weights: Vec<f64>,
}

impl Graph {
    /// Creates a new graph from node positions and a square weight matrix.
    pub fn new(positions: Vec<Point>, weights: Vec<Vec<f64>>) -> PatrolResult<Self> {
        let size = positions.len();

        if size == 0 {
            return Err(PatrolError::invalid_graph("graph has no nodes"));
        }

        if weights.len() != size || weights.iter().any(|row| row.len() != size) {
            return Err(PatrolError::invalid_graph(format!(
                "weight matrix must be {size}x{size} to match amount of node positions"
            )));
        }

        for (from, row) in weights.iter().enumerate() {
            for (to, &weight) in row.iter().enumerate() {
                if !weight.is_finite() || weight < 0. {
                    return Err(PatrolError::invalid_graph(format!("edge {from}-{to} has invalid weight {weight}")));
                }

                if from == to && weight != 0. {
                    return Err(PatrolError::invalid_graph(format!("node {from} has a self loop")));
                }

                if (weight - weights[to][from]).abs() > SYMMETRY_TOLERANCE {
                    return Err(PatrolError::invalid_graph(format!("edge {from}-{to} has asymmetric weight")));
                }
            }
        }

        Ok(Self { positions, weights: weights.into_iter().flatten().collect() })
    }

    /// Creates a new graph from node positions and a list of undirected edges `(from, to, weight)`.
    pub fn from_edges(positions: Vec<Point>, edges: &[(usize, usize, f64)]) -> PatrolResult<Self> {
        let size = positions.len();
        let mut weights = vec![vec![0.; size]; size];

        for &(from, to, weight) in edges {
            if from >= size || to >= size {
                return Err(PatrolError::invalid_graph(format!("edge {from}-{to} refers to unknown node")));
            }

            if weight <= 0. {
                return Err(PatrolError::invalid_graph(format!("edge {from}-{to} must have positive weight")));
            }

            weights[from][to] = weight;
            weights[to][from] = weight;
        }

        Self::new(positions, weights)
    }

    /// Returns amount of nodes.
    pub fn size(&self) -> usize {
        self.positions.len()
    }

    /// Returns node positions.
    pub fn positions(&self) -> &[Point] {
        self.positions.as_slice()
    }

    /// Returns a weight of an edge or `None` if there is no edge.
    pub fn weight(&self, from: usize, to: usize) -> Option<f64> {
        let weight = self.raw_weight(from, to);

        (weight > 0.).then_some(weight)
    }

    /// Returns a weight of an edge, zero means no edge.
    pub fn raw_weight(&self, from: usize, to: usize) -> f64 {
        self.weights[from * self.size() + to]
    }

    /// Iterates over adjacent nodes with edge weights.
    pub fn neighbours(&self, node: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        (0..self.size()).filter_map(move |other| self.weight(node, other).map(|weight| (other, weight)))
    }
}

/// A fully connected view on the patrolled area: the shortest distance and the shortest path
/// between every pair of nodes. Produced once and shared read-only by all strategies.
#[derive(Clone, Debug)]
pub struct CompleteGraph {
    matrix: CostMatrix,
    paths: ShortestPathTable,
    positions: Vec<Point>,
}

impl CompleteGraph {
    /// Creates a new instance of `CompleteGraph` from its parts.
    pub fn new(matrix: CostMatrix, paths: ShortestPathTable, positions: Vec<Point>) -> PatrolResult<Self> {
        if matrix.size() != positions.len() {
            return Err(PatrolError::invalid_graph(format!(
                "cost matrix size {} does not match amount of positions {}",
                matrix.size(),
                positions.len()
            )));
        }

        Ok(Self { matrix, paths, positions })
    }

    /// Creates a complete graph from already dense cost matrix where every pair of distinct nodes is
    /// connected directly.
    pub fn from_matrix(matrix: CostMatrix, positions: Vec<Point>) -> PatrolResult<Self> {
        let size = matrix.size();

        if let Some((from, to)) =
            (0..size).flat_map(|from| (0..size).map(move |to| (from, to))).find(|&(from, to)| from != to && matrix.get(from, to) <= 0.)
        {
            return Err(PatrolError::invalid_graph(format!("cost between {from} and {to} must be positive")));
        }

        let mut paths = ShortestPathTable::new(size);
        for from in 0..size {
            for to in (from + 1)..size {
                paths.insert(from, to, vec![from, to]);
            }
        }

        Self::new(matrix, paths, positions)
    }

    /// Returns amount of nodes.
    pub fn size(&self) -> usize {
        self.matrix.size()
    }

    /// Returns the shortest distances between all nodes.
    pub fn matrix(&self) -> &CostMatrix {
        &self.matrix
    }

    /// Returns the shortest paths between all nodes.
    pub fn paths(&self) -> &ShortestPathTable {
        &self.paths
    }

    /// Returns node positions.
    pub fn positions(&self) -> &[Point] {
        self.positions.as_slice()
    }

    /// Returns a complete graph which contains only given distinct nodes, the order of nodes defines
    /// new indices. Shortest paths keep their costs, but their intermediate nodes outside of `nodes`
    /// are skipped.
    pub fn sub_graph(&self, nodes: &[usize]) -> PatrolResult<CompleteGraph> {
        let mut local_indices = vec![None; self.size()];
        for (local, &node) in nodes.iter().enumerate() {
            match local_indices.get_mut(node) {
                Some(index @ None) => *index = Some(local),
                Some(Some(_)) => return Err(PatrolError::invalid_graph(format!("node {node} is listed twice"))),
                None => return Err(PatrolError::invalid_graph(format!("node {node} is out of graph"))),
            }
        }

        let mut paths = ShortestPathTable::new(nodes.len());
        for (from, &global_from) in nodes.iter().enumerate() {
            for (to, &global_to) in nodes.iter().enumerate().skip(from + 1) {
                let path = match self.paths.get(global_from, global_to) {
                    Some(path) => path.iter().filter_map(|&node| local_indices[node]).collect(),
                    None => vec![from, to],
                };
                paths.insert(from, to, path);
            }
        }

        let positions = nodes.iter().map(|&node| self.positions[node]).collect();

        CompleteGraph::new(self.matrix.sub_matrix(nodes), paths, positions)
    }
}
