use super::*;
use crate::algorithms::nsga2::{MultiObjective, collect_fronts};
use crate::helpers::models::create_grid_complete_graph;
use crate::helpers::utils::{create_test_environment, create_test_environment_with_seed};
use crate::models::are_all_nodes_visited;
use std::cmp::Ordering;

fn create_config() -> GeneticConfig {
    GeneticConfig::default().with_generations(20).with_population_size(16)
}

#[test]
fn can_cover_every_node() {
    let graph = create_grid_complete_graph(3, 3);
    let algorithm = PatrolGeneticAlgorithm::new(create_config()).unwrap();

    let routes = algorithm.solve(&graph, 2, &create_test_environment()).expect("routes");

    assert_eq!(routes.len(), 2);
    assert!(are_all_nodes_visited(&routes, graph.size()));
    assert!(routes.iter().all(|route| route.len() < 2 || route.first() != route.last()));
}

#[test]
fn can_repeat_result_with_the_same_seed() {
    let graph = create_grid_complete_graph(4, 2);
    let algorithm = PatrolGeneticAlgorithm::new(create_config()).unwrap();

    let first = algorithm.run(&graph, 3, &create_test_environment_with_seed(9)).unwrap();
    let second = algorithm.run(&graph, 3, &create_test_environment_with_seed(9)).unwrap();

    assert_eq!(first.routes, second.routes);
    assert_eq!(first.fitness, second.fitness);
}

#[test]
fn can_keep_valid_population() {
    let graph = create_grid_complete_graph(4, 3);
    let algorithm = PatrolGeneticAlgorithm::new(create_config()).unwrap();

    let solution = algorithm.run(&graph, 3, &create_test_environment()).unwrap();

    assert_eq!(solution.population.len(), 16);
    assert!(solution.population.iter().all(|individual| individual.is_valid(graph.size())));
    assert!(solution.population_fitness.iter().all(|fitness| fitness.occurrence.is_finite()));
}

#[test]
fn can_have_no_dominated_solution_in_first_front() {
    let graph = create_grid_complete_graph(4, 3);
    let algorithm = PatrolGeneticAlgorithm::new(create_config()).unwrap();

    let solution = algorithm.run(&graph, 2, &create_test_environment()).unwrap();
    let fitness = &solution.population_fitness;
    let fronts = collect_fronts(fitness, &PatrolObjective);

    assert!(!fronts.is_empty());
    assert_eq!(fronts.iter().map(|front| front.len()).sum::<usize>(), fitness.len());
    fronts[0].iter().for_each(|&a| {
        fronts[0].iter().for_each(|&b| {
            assert_eq!(PatrolObjective.total_order(&fitness[a], &fitness[b]), Ordering::Equal);
        });
    });
}

#[test]
fn can_return_lexicographically_best_individual() {
    let graph = create_grid_complete_graph(3, 2);
    let algorithm = PatrolGeneticAlgorithm::new(create_config()).unwrap();

    let solution = algorithm.run(&graph, 2, &create_test_environment()).unwrap();

    assert!(solution.population_fitness.iter().all(|fitness| !fitness.is_better_than(&solution.fitness)));
}

#[test]
fn can_assign_single_node_per_agent() {
    let graph = create_grid_complete_graph(2, 2);
    let algorithm = PatrolGeneticAlgorithm::new(create_config()).unwrap();

    let mut routes = algorithm.solve(&graph, 4, &create_test_environment()).unwrap();
    routes.sort();

    assert_eq!(routes, vec![vec![0], vec![1], vec![2], vec![3]]);
}

parameterized_test! {can_reject_invalid_config, config, {
    assert!(matches!(PatrolGeneticAlgorithm::new(config), Err(PatrolError::InvalidParameter(_))));
}}

can_reject_invalid_config! {
    case01_zero_generations: GeneticConfig::default().with_generations(0),
    case02_small_population: GeneticConfig::default().with_population_size(1),
    case03_bad_mutation: GeneticConfig::default().with_mutation_probability(1.5),
    case04_zero_parent_ratio: GeneticConfig { parent_ratio: 0., ..GeneticConfig::default() },
    case05_zero_blocks: GeneticConfig { crossover_blocks: 0, ..GeneticConfig::default() },
}

#[test]
fn can_reject_too_many_agents() {
    let graph = create_grid_complete_graph(2, 1);
    let algorithm = PatrolGeneticAlgorithm::new(create_config()).unwrap();

    assert!(matches!(algorithm.run(&graph, 3, &create_test_environment()), Err(PatrolError::InvalidParameter(_))));
}

#[test]
fn can_calculate_parent_count() {
    assert_eq!(GeneticConfig::default().parent_count(), 15);
    assert_eq!(GeneticConfig::default().with_population_size(2).parent_count(), 1);
}
