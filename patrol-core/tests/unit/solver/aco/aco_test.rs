use super::*;
use crate::helpers::models::{create_grid_complete_graph, create_line_matrix};
use crate::helpers::utils::{create_logging_environment, create_test_environment, create_test_environment_with_seed};
use crate::models::{are_all_nodes_visited, count_node_occurrences};

fn get_brute_force_cycle_length(matrix: &CostMatrix) -> f64 {
    fn permute(matrix: &CostMatrix, route: &mut Vec<usize>, remaining: &mut Vec<usize>, best: &mut f64) {
        if remaining.is_empty() {
            *best = best.min(matrix.route_length(route, true));
            return;
        }

        for idx in 0..remaining.len() {
            let node = remaining.remove(idx);
            route.push(node);
            permute(matrix, route, remaining, best);
            route.pop();
            remaining.insert(idx, node);
        }
    }

    let mut best = f64::INFINITY;
    permute(matrix, &mut vec![0], &mut (1..matrix.size()).collect(), &mut best);

    best
}

#[test]
fn can_find_optimal_cycle_for_single_agent() {
    let matrix = create_line_matrix();
    let config = AcoConfig::default().with_influence(1., 2.).with_evaporation_rate(0.5).with_colonies(4).with_max_iterations(100);

    let solution = AntColonyOptimizer::new(config).unwrap().run(&matrix, 1, &create_test_environment()).expect("solution");

    assert_eq!(solution.routes.len(), 1);
    assert!(are_all_nodes_visited(&solution.routes, 4));
    assert_eq!(solution.total_length, get_brute_force_cycle_length(&matrix));
    assert_eq!(solution.total_length, 6.);
}

#[test]
fn can_cover_every_node_exactly_once_with_many_agents() {
    let graph = create_grid_complete_graph(4, 4);
    let optimizer = AntColonyOptimizer::new(AcoConfig::default().with_max_iterations(20)).unwrap();

    let routes = optimizer.solve(&graph, 3, &create_test_environment()).expect("routes");

    assert_eq!(routes.len(), 3);
    assert!(routes.iter().all(|route| !route.is_empty()));
    assert_eq!(count_node_occurrences(&routes, graph.size()), vec![1; graph.size()]);
}

#[test]
fn can_repeat_result_with_the_same_seed() {
    let graph = create_grid_complete_graph(3, 3);
    let optimizer = AntColonyOptimizer::new(AcoConfig::default().with_max_iterations(30)).unwrap();

    let first = optimizer.run(graph.matrix(), 2, &create_test_environment_with_seed(17)).unwrap();
    let second = optimizer.run(graph.matrix(), 2, &create_test_environment_with_seed(17)).unwrap();

    assert_eq!(first.total_length, second.total_length);
    assert_eq!(first.routes, second.routes);
    assert_eq!(first.iterations, second.iterations);
}

#[test]
fn can_keep_pheromone_non_negative_with_zero_diagonal() {
    let graph = create_grid_complete_graph(3, 3);
    let optimizer = AntColonyOptimizer::new(AcoConfig::default().with_max_iterations(15)).unwrap();

    let solution = optimizer.run(graph.matrix(), 2, &create_test_environment()).unwrap();
    let pheromone = solution.pheromone;

    assert!(pheromone.values().all(|value| value >= 0.));
    assert!((0..pheromone.size()).all(|node| pheromone.get(node, node) == 0.));
}

#[test]
fn can_converge_before_iteration_limit() {
    let matrix = create_line_matrix();
    let optimizer = AntColonyOptimizer::new(AcoConfig::default().with_max_iterations(1000)).unwrap();

    let solution = optimizer.run(&matrix, 1, &create_test_environment()).unwrap();

    assert!(solution.is_converged);
    assert!(solution.iterations < 1000);
}

#[test]
fn can_evaporate_and_deposit_pheromone() {
    let mut pheromone = PheromoneMatrix::new(3);
    let colonies = vec![ColonyTours { routes: vec![vec![0, 1, 2]], lengths: vec![4.], total_length: 4. }];

    update_pheromone(&mut pheromone, &colonies, &AcoConfig::default());

    (0..3).for_each(|from| {
        (0..3).for_each(|to| assert_eq!(pheromone.get(from, to), if from == to { 0. } else { 0.75 }));
    });
}

#[test]
fn can_skip_deposit_for_single_node_routes() {
    let mut pheromone = PheromoneMatrix::new(2);
    let colonies = vec![ColonyTours { routes: vec![vec![0], vec![1]], lengths: vec![0., 0.], total_length: 0. }];

    update_pheromone(&mut pheromone, &colonies, &AcoConfig::default());

    assert_eq!(pheromone.get(0, 1), 0.5);
}

parameterized_test! {can_reject_invalid_config, config, {
    assert!(matches!(AntColonyOptimizer::new(config), Err(PatrolError::InvalidParameter(_))));
}}

can_reject_invalid_config! {
    case01_zero_evaporation: AcoConfig::default().with_evaporation_rate(0.),
    case02_too_big_evaporation: AcoConfig::default().with_evaporation_rate(1.5),
    case03_negative_alpha: AcoConfig::default().with_influence(-1., 2.),
    case04_zero_beta: AcoConfig::default().with_influence(1., 0.),
    case05_zero_quantity: AcoConfig::default().with_pheromone_quantity(0.),
    case06_zero_colonies: AcoConfig::default().with_colonies(0),
    case07_zero_iterations: AcoConfig::default().with_max_iterations(0),
    case08_zero_log_interval: AcoConfig::default().with_log_every(0),
    case09_zero_ants: AcoConfig::default().with_ants(0),
}

parameterized_test! {can_reject_invalid_agents, agents, {
    let optimizer = AntColonyOptimizer::new(AcoConfig::default()).unwrap();
    let result = optimizer.run(&create_line_matrix(), agents, &create_test_environment());

    assert!(matches!(result, Err(PatrolError::InvalidParameter(_))));
}}

can_reject_invalid_agents! {
    case01_zero: 0,
    case02_more_than_nodes: 5,
}

parameterized_test! {can_check_ant_count_against_agents, (ants, agents, is_ok), {
    let optimizer = AntColonyOptimizer::new(AcoConfig::default().with_ants(ants).with_max_iterations(5)).unwrap();
    let result = optimizer.run(&create_line_matrix(), agents, &create_test_environment());

    match (result, is_ok) {
        (Ok(solution), true) => assert_eq!(solution.routes.len(), agents),
        (Err(PatrolError::InvalidParameter(msg)), false) => assert!(msg.contains("ant count")),
        (other, _) => panic!("unexpected result: {:?}", other.map(|solution| solution.routes)),
    }
}}

can_check_ant_count_against_agents! {
    case01_equal: (2, 2, true),
    case02_less_than_agents: (1, 2, false),
    case03_more_than_agents: (3, 2, false),
}

#[test]
fn can_log_progress() {
    let (environment, messages) = create_logging_environment(3);
    let optimizer = AntColonyOptimizer::new(AcoConfig::default().with_max_iterations(5).with_log_every(1)).unwrap();

    optimizer.run(&create_line_matrix(), 1, &environment).unwrap();

    let messages = messages.lock().unwrap();
    assert!(messages.first().is_some_and(|msg| msg.contains("[aco] started with 4 nodes and 1 agents")));
    assert!(messages.last().is_some_and(|msg| msg.contains("finished after")));
}

#[test]
fn can_accept_evaporation_rate_of_one() {
    assert!(AntColonyOptimizer::new(AcoConfig::default().with_evaporation_rate(1.)).is_ok());
}
