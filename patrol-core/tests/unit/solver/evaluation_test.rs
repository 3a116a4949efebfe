use super::*;
use crate::helpers::models::{create_grid_complete_graph, create_line_positions};
use std::sync::Arc;

#[test]
fn can_evaluate_single_cyclic_route() {
    let graph = create_grid_complete_graph(4, 1);

    let report = evaluate_routes(&graph, &[vec![0, 1, 2, 3]]).unwrap();

    assert_eq!(report.per_node_max, vec![6., 4., 4., 6.]);
    assert_eq!(report.max_idleness, 6.);
    assert!(report.average_idleness > 0. && report.average_idleness < report.max_idleness);
}

#[test]
fn can_count_intermediate_nodes_as_visited() {
    let graph = create_grid_complete_graph(3, 1);

    let report = evaluate_routes(&graph, &[vec![0, 2]]).unwrap();

    assert!(report.per_node_max.iter().all(|idleness| idleness.is_finite()));
    assert_eq!(report.per_node_max[1], 2.);
}

#[test]
fn can_reduce_idleness_with_more_agents() {
    let graph = create_grid_complete_graph(4, 1);

    let one = evaluate_routes(&graph, &[vec![0, 1, 2, 3]]).unwrap();
    let two = evaluate_routes(&graph, &[vec![0, 1], vec![2, 3]]).unwrap();

    assert!(two.max_idleness < one.max_idleness);
}

#[test]
fn can_evaluate_routes_with_very_different_periods() {
    let mut matrix = CostMatrix::new(4);
    (0..4).flat_map(|from| ((from + 1)..4).map(move |to| (from, to))).for_each(|(from, to)| {
        matrix.set_symmetric(from, to, if (from, to) == (0, 1) { 1E-4 } else { 1E3 });
    });
    let graph = CompleteGraph::from_matrix(matrix, create_line_positions(4)).unwrap();

    let report = evaluate_routes(&graph, &[vec![0, 1], vec![2, 3]]).unwrap();

    assert_eq!(report.per_node_max, vec![2E-4, 2E-4, 2000., 2000.]);
    assert_eq!(report.max_idleness, 2000.);
}

#[test]
fn can_use_most_frequent_route_for_shared_node() {
    let graph = create_grid_complete_graph(4, 1);

    let report = evaluate_routes(&graph, &[vec![1, 2, 3], vec![0, 1]]).unwrap();

    assert_eq!(report.per_node_max, vec![2., 2., 2., 4.]);
    assert_eq!(report.max_idleness, 4.);
}

#[test]
fn can_handle_unvisited_and_stationary_nodes() {
    let graph = create_grid_complete_graph(3, 1);

    let report = evaluate_routes(&graph, &[vec![0], vec![1, 1]]).unwrap();

    assert_eq!(report.per_node_max[0], 0.);
    assert_eq!(report.per_node_max[1], 0.);
    assert_eq!(report.per_node_max[2], f64::INFINITY);
    assert_eq!(report.max_idleness, f64::INFINITY);
}

#[test]
fn can_reject_unknown_nodes() {
    let graph = create_grid_complete_graph(3, 1);

    assert!(matches!(evaluate_routes(&graph, &[vec![0, 7]]), Err(PatrolError::InvalidParameter(_))));
}

#[test]
fn can_simulate_dispatch_visiting_every_node() {
    let graph = create_grid_complete_graph(3, 3);
    let mut dispatcher = GreedyIdlenessDispatcher::new(Arc::new(graph.matrix().clone()), 2).unwrap();

    let trace = simulate_dispatch(&graph, &mut dispatcher, &[0, 8], 40.).unwrap();

    assert!(trace.visits.windows(2).all(|pair| pair[0].time <= pair[1].time));
    assert!(trace.visits.iter().all(|visit| visit.time <= 40.));
    assert_eq!(trace.visits[0], Visit { time: 0., agent: 0, node: 0 });
    assert!((0..graph.size()).all(|node| trace.visits.iter().any(|visit| visit.node == node)));
    assert!(trace.report.max_idleness.is_finite());
    assert!(trace.report.max_idleness <= 40.);
}

#[test]
fn can_move_hop_by_hop_between_adjacent_nodes() {
    let graph = create_grid_complete_graph(3, 3);
    let mut dispatcher = GreedyIdlenessDispatcher::new(Arc::new(graph.matrix().clone()), 1).unwrap();

    let trace = simulate_dispatch(&graph, &mut dispatcher, &[4], 20.).unwrap();

    trace.visits.windows(2).for_each(|pair| {
        let (from, to) = (pair[0].node, pair[1].node);
        assert!(from == to || graph.matrix().get(from, to) == 1.);
    });
}

parameterized_test! {can_reject_invalid_simulation, (starts, horizon), {
    let graph = create_grid_complete_graph(3, 1);
    let mut dispatcher = GreedyIdlenessDispatcher::new(Arc::new(graph.matrix().clone()), 2).unwrap();

    assert!(matches!(simulate_dispatch(&graph, &mut dispatcher, &starts, horizon), Err(PatrolError::InvalidParameter(_))));
}}

can_reject_invalid_simulation! {
    case01_wrong_starts: (vec![0], 10.),
    case02_zero_horizon: (vec![0, 1], 0.),
    case03_infinite_horizon: (vec![0, 1], f64::INFINITY),
    case04_unknown_start: (vec![0, 5], 10.),
}
