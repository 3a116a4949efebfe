use crate::algorithms::structures::NodeSet;
use crate::models::{Route, RouteSet, are_all_nodes_visited};

/// A bi-objective fitness of an individual: mean node occurrence in real routes (maximized) and
/// mean indicative path length (minimized).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fitness {
    /// Mean amount of times a node occurs in expanded routes.
    pub occurrence: f64,
    /// Mean closed length of indicative routes.
    pub length: f64,
}

impl Fitness {
    /// Returns the worst possible fitness which is dominated by any valid one.
    pub fn worst() -> Self {
        Self { occurrence: f64::NEG_INFINITY, length: f64::INFINITY }
    }

    /// Returns true if fitness is better than `other` lexicographically: higher occurrence first,
    /// then shorter length.
    pub fn is_better_than(&self, other: &Fitness) -> bool {
        self.occurrence > other.occurrence || (self.occurrence == other.occurrence && self.length < other.length)
    }
}

/// An assignment of nodes to agents: one gene per agent, all genes have the same length.
#[derive(Clone, Debug, PartialEq)]
pub struct Individual {
    /// Indicative routes, one per agent.
    pub genes: RouteSet,
}

impl Individual {
    /// Creates an individual from a node sequence split between `agents` as evenly as possible,
    /// shorter genes are padded with their own last node.
    pub fn from_sequence(sequence: &[usize], agents: usize) -> Self {
        let size = sequence.len();
        let gene_length = size.div_ceil(agents.max(1));

        let (genes, _) = (0..agents).fold((Vec::with_capacity(agents), 0), |(mut genes, offset), agent| {
            let chunk = size / agents + usize::from(agent < size % agents);
            let mut gene: Route = sequence[offset..offset + chunk].to_vec();

            if let Some(&last) = gene.last() {
                gene.resize(gene_length, last);
            }

            genes.push(gene);

            (genes, offset + chunk)
        });

        Self { genes }
    }

    /// Returns amount of genes.
    pub fn agents(&self) -> usize {
        self.genes.len()
    }

    /// Returns length of a gene.
    pub fn gene_length(&self) -> usize {
        self.genes.first().map_or(0, |gene| gene.len())
    }

    /// Checks whether the individual visits every node at least once.
    pub fn is_valid(&self, size: usize) -> bool {
        are_all_nodes_visited(&self.genes, size)
    }

    /// Returns the set of visited nodes.
    pub fn visited(&self, size: usize) -> NodeSet {
        NodeSet::from_nodes(size, self.genes.iter().flatten().copied())
    }
}
