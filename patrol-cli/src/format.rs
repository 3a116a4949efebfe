//! Contains JSON models of the patrolled graph and of generated routes.
//!
//! A graph is described by node positions and undirected edges, an edge without cost gets the
//! euclidean distance between its nodes:
//!
//! ```json
//! {
//!   "nodes": [ { "x": 0, "y": 0 }, { "x": 3, "y": 4 }, { "x": 3, "y": 0 } ],
//!   "edges": [ { "from": 0, "to": 1 }, { "from": 1, "to": 2, "cost": 4.5 } ]
//! }
//! ```

#[cfg(test)]
#[path = "../tests/unit/format_test.rs"]
mod format_test;

use patrol_core::models::Route;
use patrol_core::prelude::*;
use patrol_core::solver::{DispatchTrace, IdlenessReport};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Read, Write};

/// A node of the patrolled graph.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NodeInput {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

/// An undirected edge of the patrolled graph.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EdgeInput {
    /// One end of the edge.
    pub from: usize,
    /// Another end of the edge.
    pub to: usize,
    /// Edge cost, euclidean distance is used if omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

/// A patrolled graph.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GraphInput {
    /// Graph nodes, node index is its position in the list.
    pub nodes: Vec<NodeInput>,
    /// Graph edges.
    pub edges: Vec<EdgeInput>,
}

/// Idleness statistics of a solution.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdlenessOutput {
    /// The highest idleness of any node, omitted when some node is never visited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Average idleness, omitted when some node is never visited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
}

/// A solution of a batch strategy.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionOutput {
    /// A strategy name.
    pub strategy: String,
    /// One cyclic route per agent.
    pub routes: Vec<Route>,
    /// A sum of closed route lengths.
    pub total_length: f64,
    /// Idleness statistics.
    pub idleness: IdlenessOutput,
}

/// A visit made by an agent during dispatch simulation.
#[derive(Clone, Debug, Serialize)]
pub struct VisitOutput {
    /// Arrival time.
    pub time: f64,
    /// Agent index.
    pub agent: usize,
    /// Visited node.
    pub node: usize,
}

/// A result of dispatch simulation.
#[derive(Clone, Debug, Serialize)]
pub struct DispatchOutput {
    /// Simulated time horizon.
    pub horizon: f64,
    /// Visits in chronological order.
    pub visits: Vec<VisitOutput>,
    /// Idleness statistics.
    pub idleness: IdlenessOutput,
}

impl From<&IdlenessReport> for IdlenessOutput {
    fn from(report: &IdlenessReport) -> Self {
        let finite = |value: f64| if value.is_finite() { Some(value) } else { None };

        Self { max: finite(report.max_idleness), average: finite(report.average_idleness) }
    }
}

impl GraphInput {
    /// Converts the input into the core graph model.
    pub fn to_graph(&self) -> Result<Graph, GenericError> {
        let positions = self.nodes.iter().map(|node| Point::new(node.x, node.y)).collect::<Vec<_>>();

        let edges = self
            .edges
            .iter()
            .map(|edge| {
                let (from, to) = (edge.from, edge.to);
                let (Some(a), Some(b)) = (positions.get(from), positions.get(to)) else {
                    return Err(GenericError::from(format!("edge {from}-{to} refers to unknown node")));
                };

                Ok((from, to, edge.cost.unwrap_or_else(|| a.distance_to_point(b))))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Graph::from_edges(positions, &edges)?)
    }
}

/// Reads a graph from reader.
pub fn read_graph<R: Read>(reader: BufReader<R>) -> Result<Graph, GenericError> {
    let input: GraphInput =
        serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize graph: '{err}'"))?;

    input.to_graph()
}

/// Creates an output of a batch strategy run.
pub fn create_solution_output(
    strategy: &str,
    graph: &CompleteGraph,
    routes: RouteSet,
    report: &IdlenessReport,
) -> SolutionOutput {
    let total_length = routes.iter().map(|route| graph.matrix().route_length(route, true)).sum();

    SolutionOutput { strategy: strategy.to_string(), routes, total_length, idleness: report.into() }
}

/// Creates an output of a dispatch simulation.
pub fn create_dispatch_output(horizon: f64, trace: &DispatchTrace) -> DispatchOutput {
    DispatchOutput {
        horizon,
        visits: trace
            .visits
            .iter()
            .map(|visit| VisitOutput { time: visit.time, agent: visit.agent, node: visit.node })
            .collect(),
        idleness: (&trace.report).into(),
    }
}

/// Writes a serializable output as pretty printed JSON.
pub fn write_output<W: Write, T: Serialize>(writer: &mut BufWriter<W>, output: &T) -> Result<(), GenericError> {
    serde_json::to_writer_pretty(&mut *writer, output).map_err(|err| format!("cannot write output: '{err}'"))?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}
