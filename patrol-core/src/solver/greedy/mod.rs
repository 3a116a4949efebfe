//! Contains a stateful greedy dispatcher which sends every agent to the most idle node.
//!
//! Unlike batch strategies, the dispatcher is queried by the caller every time an agent reaches a
//! node. A target is kept until the agent arrives there or the target's idleness drops to zero.
//! Nodes claimed as a target by some agent and nodes occupied by agents are never selected.

#[cfg(test)]
#[path = "../../../tests/unit/solver/greedy/greedy_test.rs"]
mod greedy_test;

use crate::models::CostMatrix;
use crate::solver::validate_agents;
use crate::utils::{PatrolError, PatrolResult};
use std::sync::Arc;

/// A pair of the node an agent is at and the node it heads to, if any.
pub type AgentStep = (usize, Option<usize>);

/// Dispatches agents towards nodes with the highest idleness.
pub struct GreedyIdlenessDispatcher {
    matrix: Arc<CostMatrix>,
    positions: Vec<Option<usize>>,
    targets: Vec<Option<usize>>,
}

impl GreedyIdlenessDispatcher {
    /// Creates a new instance of `GreedyIdlenessDispatcher`.
    pub fn new(matrix: Arc<CostMatrix>, agents: usize) -> PatrolResult<Self> {
        validate_agents(agents, matrix.size())?;

        Ok(Self { matrix, positions: vec![None; agents], targets: vec![None; agents] })
    }

    /// Returns amount of agents.
    pub fn agents(&self) -> usize {
        self.positions.len()
    }

    /// Returns a node where the agent is, if known.
    pub fn position(&self, agent: usize) -> Option<usize> {
        self.positions.get(agent).copied().flatten()
    }

    /// Returns a node the agent heads to, if any.
    pub fn target(&self, agent: usize) -> Option<usize> {
        self.targets.get(agent).copied().flatten()
    }

    /// Forgets positions and targets of all agents.
    pub fn reset(&mut self) {
        self.positions.iter_mut().for_each(|position| *position = None);
        self.targets.iter_mut().for_each(|target| *target = None);
    }

    /// Places the agent at its start node and selects its first target.
    pub fn first_step(&mut self, agent: usize, start: usize, idleness: &[f64]) -> PatrolResult<AgentStep> {
        self.validate_call(agent, start, idleness)?;

        self.positions[agent] = Some(start);
        self.targets[agent] = None;
        self.targets[agent] = self.select_target(agent, idleness);
        self.resolve_conflicts(idleness);

        Ok((start, self.targets[agent]))
    }

    /// Updates the agent's position with a just reached node. The current target is kept unless the
    /// agent has arrived there or the target's idleness is zero.
    pub fn step(&mut self, agent: usize, node: usize, idleness: &[f64]) -> PatrolResult<AgentStep> {
        self.validate_call(agent, node, idleness)?;

        self.positions[agent] = Some(node);

        let keep = self.targets[agent].is_some_and(|target| target != node && idleness[target] > 0.);
        if !keep {
            self.targets[agent] = None;
            self.targets[agent] = self.select_target(agent, idleness);
        }

        self.resolve_conflicts(idleness);

        Ok((node, self.targets[agent]))
    }

    /// Places all agents at given nodes and selects targets for them independently from each other,
    /// then resolves clashing targets.
    pub fn assign_all(&mut self, nodes: &[usize], idleness: &[f64]) -> PatrolResult<Vec<AgentStep>> {
        if nodes.len() != self.agents() {
            return Err(PatrolError::invalid_parameter(format!(
                "expected {} agent positions, got {}",
                self.agents(),
                nodes.len()
            )));
        }

        nodes.iter().enumerate().try_for_each(|(agent, &node)| self.validate_call(agent, node, idleness))?;

        self.positions = nodes.iter().copied().map(Some).collect();
        self.targets.iter_mut().for_each(|target| *target = None);

        let targets = (0..self.agents()).map(|agent| self.select_target(agent, idleness)).collect::<Vec<_>>();
        self.targets = targets;

        self.resolve_conflicts(idleness);

        Ok(nodes.iter().copied().zip(self.targets.iter().copied()).collect())
    }

    /// Selects the most idle node which is neither claimed nor occupied. Ties are resolved by the
    /// shortest distance from the agent's position, then by the lowest index.
    fn select_target(&self, agent: usize, idleness: &[f64]) -> Option<usize> {
        let current = self.positions[agent]?;

        let is_blocked = |node: usize| {
            self.positions.iter().any(|&position| position == Some(node))
                || self
                    .targets
                    .iter()
                    .enumerate()
                    .any(|(other, &target)| other != agent && target == Some(node))
        };

        (0..self.matrix.size()).filter(|&node| !is_blocked(node)).min_by(|&a, &b| {
            idleness[b]
                .total_cmp(&idleness[a])
                .then_with(|| self.matrix.get(current, a).total_cmp(&self.matrix.get(current, b)))
                .then(a.cmp(&b))
        })
    }

    /// Keeps a clashing target only for the agent with the lowest index, others select again
    /// against the updated claims. Repeats until no two agents share a target.
    fn resolve_conflicts(&mut self, idleness: &[f64]) {
        while let Some(losers) = self.find_clash() {
            losers.iter().for_each(|&agent| self.targets[agent] = None);
            losers.into_iter().for_each(|agent| self.targets[agent] = self.select_target(agent, idleness));
        }
    }

    fn find_clash(&self) -> Option<Vec<usize>> {
        self.targets.iter().enumerate().find_map(|(winner, &target)| {
            let target = target?;
            let losers = self
                .targets
                .iter()
                .enumerate()
                .skip(winner + 1)
                .filter(|&(_, &other)| other == Some(target))
                .map(|(agent, _)| agent)
                .collect::<Vec<_>>();

            if losers.is_empty() { None } else { Some(losers) }
        })
    }

    fn validate_call(&self, agent: usize, node: usize, idleness: &[f64]) -> PatrolResult<()> {
        let size = self.matrix.size();

        if agent >= self.agents() {
            return Err(PatrolError::invalid_parameter(format!("unknown agent {agent}")));
        }

        if node >= size {
            return Err(PatrolError::invalid_parameter(format!("node {node} is out of range")));
        }

        if idleness.len() != size {
            return Err(PatrolError::invalid_parameter(format!(
                "expected idleness of {size} nodes, got {}",
                idleness.len()
            )));
        }

        Ok(())
    }
}
