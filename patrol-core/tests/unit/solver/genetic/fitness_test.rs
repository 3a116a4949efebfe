use super::*;
use crate::helpers::models::create_grid_complete_graph;

parameterized_test! {can_evaluate_fitness, (size, genes, expected), {
    can_evaluate_fitness_impl(size, genes, expected);
}}

can_evaluate_fitness! {
    case01_single_agent: (4, vec![vec![0, 1, 2, 3]], (1.5, 6.)),
    case02_two_agents: (4, vec![vec![0, 1], vec![2, 3]], (1., 2.)),
    case03_padded_gene: (3, vec![vec![0, 1], vec![2, 2]], (1., 1.)),
    case04_far_waypoints: (4, vec![vec![0, 3], vec![1, 2]], (2., 4.)),
}

fn can_evaluate_fitness_impl(size: usize, genes: Vec<Vec<usize>>, expected: (f64, f64)) {
    let graph = create_grid_complete_graph(size, 1);

    let fitness = evaluate_fitness(&graph, &Individual { genes });

    assert_eq!((fitness.occurrence, fitness.length), expected);
}

#[test]
fn can_assign_worst_fitness_to_invalid_individual() {
    let graph = create_grid_complete_graph(4, 1);

    let fitness = evaluate_fitness(&graph, &Individual { genes: vec![vec![0, 3], vec![3, 0]] });

    assert_eq!(fitness, Fitness::worst());
}

#[test]
fn can_expand_real_routes_without_closing_node() {
    let graph = create_grid_complete_graph(4, 1);

    let routes = get_real_routes(&graph, &Individual { genes: vec![vec![0, 3, 3]] });

    assert_eq!(routes, vec![vec![0, 1, 2, 3, 2, 1]]);
}

#[test]
fn can_find_best_with_lowest_index_on_tie() {
    let fitness = vec![
        Fitness { occurrence: 1., length: 5. },
        Fitness { occurrence: 2., length: 9. },
        Fitness { occurrence: 2., length: 7. },
        Fitness { occurrence: 2., length: 7. },
        Fitness::worst(),
    ];

    assert_eq!(find_best(&fitness), Some(2));
    assert_eq!(find_best(&[]), None);
    assert_eq!(find_best(&[Fitness::worst()]), Some(0));
}

parameterized_test! {can_compare_fitness_by_dominance, (a, b, expected), {
    assert_eq!(PatrolObjective.total_order(&Fitness { occurrence: a.0, length: a.1 }, &Fitness { occurrence: b.0, length: b.1 }), expected);
}}

can_compare_fitness_by_dominance! {
    case01_higher_occurrence: ((2., 5.), (1., 5.), Ordering::Less),
    case02_shorter_length: ((1., 4.), (1., 5.), Ordering::Less),
    case03_both_better: ((2., 4.), (1., 5.), Ordering::Less),
    case04_equal: ((2., 5.), (2., 5.), Ordering::Equal),
    case05_trade_off: ((2., 6.), (1., 5.), Ordering::Equal),
    case06_dominated: ((1., 6.), (2., 5.), Ordering::Greater),
    case07_worst: ((1., 100.), (f64::NEG_INFINITY, f64::INFINITY), Ordering::Less),
}
