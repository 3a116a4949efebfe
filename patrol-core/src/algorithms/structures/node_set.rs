//! A fixed size presence set of node indices backed by a bit vector.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/structures/node_set_test.rs"]
mod node_set_test;

use std::fmt::{Display, Formatter};

const BITS_IN_BLOCK: usize = u64::BITS as usize;

/// A set of node indices in `[0, capacity)` range with constant time membership checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeSet {
    blocks: Vec<u64>,
    capacity: usize,
    count: usize,
}

impl NodeSet {
    /// Creates an empty set which can hold indices in `[0, capacity)`.
    pub fn new(capacity: usize) -> Self {
        Self { blocks: vec![0; capacity.div_ceil(BITS_IN_BLOCK)], capacity, count: 0 }
    }

    /// Creates a set with all given indices.
    pub fn from_nodes(capacity: usize, nodes: impl IntoIterator<Item = usize>) -> Self {
        let mut set = Self::new(capacity);
        nodes.into_iter().for_each(|node| {
            set.insert(node);
        });

        set
    }

    /// Adds node to the set. Returns true if it was not present before.
    pub fn insert(&mut self, node: usize) -> bool {
        assert!(node < self.capacity, "node index {node} is out of bounds {}", self.capacity);
        let (block, mask) = Self::locate(node);

        let is_new = self.blocks[block] & mask == 0;
        if is_new {
            self.blocks[block] |= mask;
            self.count += 1;
        }

        is_new
    }

    /// Removes node from the set. Returns true if it was present.
    pub fn remove(&mut self, node: usize) -> bool {
        if !self.contains(node) {
            return false;
        }

        let (block, mask) = Self::locate(node);
        self.blocks[block] &= !mask;
        self.count -= 1;

        true
    }

    /// Checks whether node is in the set. Out of bounds index is never present.
    pub fn contains(&self, node: usize) -> bool {
        let (block, mask) = Self::locate(node);
        node < self.capacity && self.blocks[block] & mask != 0
    }

    /// Returns amount of nodes in the set.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the set has no nodes.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true if every index in `[0, capacity)` is present.
    pub fn is_full(&self) -> bool {
        self.count == self.capacity
    }

    /// Returns max amount of nodes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes all nodes.
    pub fn clear(&mut self) {
        self.blocks.iter_mut().for_each(|block| *block = 0);
        self.count = 0;
    }

    /// Iterates over present nodes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.capacity).filter(move |&node| self.contains(node))
    }

    /// Iterates over absent nodes in ascending order.
    pub fn missing(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.capacity).filter(move |&node| !self.contains(node))
    }

    fn locate(node: usize) -> (usize, u64) {
        (node / BITS_IN_BLOCK, 1 << (node % BITS_IN_BLOCK))
    }
}

impl Display for NodeSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for node in 0..self.capacity {
            write!(f, "{}", if self.contains(node) { 1 } else { 0 })?;
        }
        write!(f, "]")
    }
}
