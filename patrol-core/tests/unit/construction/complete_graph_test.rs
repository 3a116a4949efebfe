use super::*;
use crate::algorithms::geometry::Point;
use crate::helpers::models::{create_disconnected_graph, create_grid_graph, create_line_positions};

#[test]
fn can_build_symmetric_matrix_with_positive_costs() {
    let graph = create_grid_graph(3, 3);

    let complete = build_complete_graph(&graph).expect("connected graph");
    let matrix = complete.matrix();

    assert_eq!(complete.size(), 9);
    assert!(matrix.is_symmetric());
    (0..9).for_each(|from| {
        assert_eq!(matrix.get(from, from), 0.);
        (0..9).filter(|&to| to != from).for_each(|to| assert!(matrix.get(from, to) > 0.));
    });

    // opposite corners of 3x3 grid
    assert_eq!(matrix.get(0, 8), 4.);
}

#[test]
fn can_store_paths_in_both_directions() {
    let complete = build_complete_graph(&create_grid_graph(3, 1)).expect("connected graph");

    assert_eq!(complete.paths().get(0, 2), Some([0, 1, 2].as_slice()));
    assert_eq!(complete.paths().get(2, 0), Some([2, 1, 0].as_slice()));
    assert_eq!(complete.paths().get(0, 1), Some([0, 1].as_slice()));
}

#[test]
fn can_copy_direct_edge_weight() {
    let graph = Graph::from_edges(create_line_positions(3), &[(0, 1, 1.), (1, 2, 1.), (0, 2, 5.)]).unwrap();

    let found = find_pair_path(&graph, 0, 2).expect("path");

    assert_eq!(found, FoundPath { nodes: vec![0, 2], cost: 5. });
}

#[test]
fn can_fail_on_disconnected_graph() {
    let result = build_complete_graph(&create_disconnected_graph());

    assert!(matches!(result, Err(PatrolError::Unreachable { to: 2, .. }) | Err(PatrolError::Unreachable { from: 2, .. })));
}

#[test]
fn can_build_single_node_graph() {
    let graph = Graph::from_edges(vec![Point::new(0., 0.)], &[]).unwrap();

    let complete = build_complete_graph(&graph).expect("single node graph");

    assert_eq!(complete.size(), 1);
    assert_eq!(complete.matrix().get(0, 0), 0.);
}
