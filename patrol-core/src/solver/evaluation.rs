#[cfg(test)]
#[path = "../../tests/unit/solver/evaluation_test.rs"]
mod evaluation_test;

use crate::models::{CompleteGraph, CostMatrix, Route, normalize_route};
use crate::solver::greedy::GreedyIdlenessDispatcher;
use crate::utils::{PatrolError, PatrolResult, compare_floats_refs};
use rustc_hash::FxHashMap;
use std::iter::once;

/// Idleness statistics of patrolled nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct IdlenessReport {
    /// The highest idleness of any node.
    pub max_idleness: f64,
    /// Time weighted idleness averaged over all nodes.
    pub average_idleness: f64,
    /// The highest idleness of every node.
    pub per_node_max: Vec<f64>,
}

/// A visit of a node by an agent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visit {
    /// Time of arrival.
    pub time: f64,
    /// Agent index.
    pub agent: usize,
    /// Visited node.
    pub node: usize,
}

/// A result of dispatch simulation.
#[derive(Clone, Debug)]
pub struct DispatchTrace {
    /// All visits in chronological order.
    pub visits: Vec<Visit>,
    /// Idleness statistics over the simulated horizon.
    pub report: IdlenessReport,
}

/// Estimates idleness of nodes when all agents walk their routes cyclically and start at the same
/// time. Routes are expanded into real ones, so intermediate nodes count as visited. Gaps between
/// visits are taken from one period of a route, including the gap which wraps around it. When a node
/// lies on several routes, the route with the smallest worst gap defines its idleness. A node which
/// is never visited gets infinite idleness, a node on a route with zero length is never idle.
pub fn evaluate_routes(graph: &CompleteGraph, routes: &[Route]) -> PatrolResult<IdlenessReport> {
    let size = graph.size();
    let matrix = graph.matrix();

    if let Some(&node) = routes.iter().flatten().find(|&&node| node >= size) {
        return Err(PatrolError::invalid_parameter(format!("node {node} is out of range")));
    }

    let mut accumulator = IdlenessAccumulator::new(size);
    let mut best_gaps: Vec<Option<Vec<f64>>> = vec![None; size];

    routes.iter().for_each(|route| {
        let real = graph.paths().expand(&normalize_route(route), true);
        let period = matrix.route_length(&real, false);

        if period <= 0. {
            real.iter().for_each(|&node| accumulator.mark_occupied(node));
            return;
        }

        get_cycle_gaps(matrix, &real, period).into_iter().for_each(|(node, gaps)| {
            let best = &mut best_gaps[node];
            if best.as_ref().is_none_or(|best| get_max_gap(&gaps) < get_max_gap(best)) {
                *best = Some(gaps);
            }
        });
    });

    best_gaps.into_iter().enumerate().for_each(|(node, gaps)| {
        gaps.into_iter().flatten().for_each(|gap| accumulator.add_gap(node, gap));
    });

    Ok(accumulator.into_report())
}

/// Returns intervals between consecutive visits of every node within one period of a closed real
/// route, the last interval wraps around the period.
fn get_cycle_gaps(matrix: &CostMatrix, real: &[usize], period: f64) -> FxHashMap<usize, Vec<f64>> {
    let mut offsets = FxHashMap::<usize, Vec<f64>>::default();

    // the closing node repeats the first one
    real.windows(2)
        .scan(0_f64, |time, pair| {
            let arrival = *time;
            *time += matrix.get(pair[0], pair[1]);
            Some((pair[0], arrival))
        })
        .for_each(|(node, arrival)| offsets.entry(node).or_default().push(arrival));

    offsets
        .into_iter()
        .filter_map(|(node, times)| {
            let (&first, &last) = (times.first()?, times.last()?);
            let gaps = times.windows(2).map(|pair| pair[1] - pair[0]).chain(once(period - last + first)).collect();

            Some((node, gaps))
        })
        .collect()
}

fn get_max_gap(gaps: &[f64]) -> f64 {
    gaps.iter().copied().max_by(compare_floats_refs).unwrap_or(f64::INFINITY)
}

/// Simulates agents driven by the dispatcher up to given time horizon. Agents move hop by hop along
/// shortest paths, the dispatcher is queried on every arrival with the current idleness of nodes.
/// An agent without a target waits for the shortest travel time from its node. All nodes are
/// considered visited at time zero.
pub fn simulate_dispatch(
    graph: &CompleteGraph,
    dispatcher: &mut GreedyIdlenessDispatcher,
    starts: &[usize],
    horizon: f64,
) -> PatrolResult<DispatchTrace> {
    let size = graph.size();
    let matrix = graph.matrix();

    if starts.len() != dispatcher.agents() {
        return Err(PatrolError::invalid_parameter(format!(
            "expected {} start nodes, got {}",
            dispatcher.agents(),
            starts.len()
        )));
    }

    if let Some(&start) = starts.iter().find(|&&start| start >= size) {
        return Err(PatrolError::invalid_parameter(format!("start node {start} is out of range")));
    }

    if !horizon.is_finite() || horizon <= 0. {
        return Err(PatrolError::invalid_parameter("horizon must be positive"));
    }

    dispatcher.reset();

    let wait_time = (0..size)
        .flat_map(|from| matrix.row(from).iter().copied())
        .filter(|&cost| cost > 0.)
        .fold(f64::INFINITY, f64::min);
    let wait_time = if wait_time.is_finite() { wait_time } else { horizon };

    let mut last_visits = vec![0.; size];
    let mut accumulator = IdlenessAccumulator::new(size);
    let mut visits = Vec::new();
    let mut is_started = vec![false; starts.len()];

    // agent's next arrival: (time, node)
    let mut arrivals = starts.iter().map(|&start| (0_f64, start)).collect::<Vec<_>>();

    loop {
        let Some((agent, (time, node))) = arrivals
            .iter()
            .copied()
            .enumerate()
            .min_by(|(a_idx, (a_time, _)), (b_idx, (b_time, _))| a_time.total_cmp(b_time).then(a_idx.cmp(b_idx)))
        else {
            break;
        };

        if time > horizon {
            break;
        }

        accumulator.add_gap(node, time - last_visits[node]);
        last_visits[node] = time;
        visits.push(Visit { time, agent, node });

        let idleness = last_visits.iter().map(|&last| time - last).collect::<Vec<_>>();

        let (_, target) = if is_started[agent] {
            dispatcher.step(agent, node, &idleness)?
        } else {
            is_started[agent] = true;
            dispatcher.first_step(agent, node, &idleness)?
        };

        arrivals[agent] = match target {
            Some(target) => {
                let hop = graph.paths().get(node, target).and_then(|path| path.get(1).copied()).unwrap_or(target);
                (time + matrix.get(node, hop), hop)
            }
            None => (time + wait_time, node),
        };
    }

    last_visits.iter().enumerate().for_each(|(node, &last)| accumulator.add_gap(node, horizon - last));

    Ok(DispatchTrace { visits, report: accumulator.into_report() })
}

/// Collects time intervals between consecutive visits of every node.
struct IdlenessAccumulator {
    max_gaps: Vec<Option<f64>>,
    sum_gaps: Vec<f64>,
    sum_squared_gaps: Vec<f64>,
    occupied: Vec<bool>,
}

impl IdlenessAccumulator {
    fn new(size: usize) -> Self {
        Self {
            max_gaps: vec![None; size],
            sum_gaps: vec![0.; size],
            sum_squared_gaps: vec![0.; size],
            occupied: vec![false; size],
        }
    }

    fn add_gap(&mut self, node: usize, gap: f64) {
        let gap = gap.max(0.);
        self.max_gaps[node] = Some(self.max_gaps[node].map_or(gap, |max| max.max(gap)));
        self.sum_gaps[node] += gap;
        self.sum_squared_gaps[node] += gap * gap;
    }

    fn mark_occupied(&mut self, node: usize) {
        self.occupied[node] = true;
    }

    fn into_report(self) -> IdlenessReport {
        let size = self.max_gaps.len();

        let (per_node_max, per_node_average): (Vec<_>, Vec<_>) = (0..size)
            .map(|node| match (self.occupied[node], self.max_gaps[node]) {
                (true, _) => (0., 0.),
                (false, None) => (f64::INFINITY, f64::INFINITY),
                (false, Some(_)) if self.sum_gaps[node] <= 0. => (0., 0.),
                (false, Some(max)) => (max, self.sum_squared_gaps[node] / (2. * self.sum_gaps[node])),
            })
            .unzip();

        let max_idleness = per_node_max.iter().copied().fold(0., f64::max);
        let average_idleness =
            if size == 0 { 0. } else { per_node_average.iter().sum::<f64>() / size as f64 };

        IdlenessReport { max_idleness, average_idleness, per_node_max }
    }
}
