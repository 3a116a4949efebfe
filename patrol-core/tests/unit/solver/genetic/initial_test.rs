use super::*;
use crate::helpers::models::{create_grid_complete_graph, create_line_matrix};

#[test]
fn can_build_nearest_neighbour_tour() {
    assert_eq!(create_nearest_neighbour_tour(&create_line_matrix(), 1), vec![1, 0, 2, 3]);
    assert_eq!(create_nearest_neighbour_tour(&create_line_matrix(), 3), vec![3, 2, 1, 0]);
}

parameterized_test! {can_split_sequence_between_agents, (size, agents, expected), {
    let sequence = (0..size).collect::<Vec<_>>();

    assert_eq!(Individual::from_sequence(&sequence, agents).genes, expected);
}}

can_split_sequence_between_agents! {
    case01_even: (4, 2, vec![vec![0, 1], vec![2, 3]]),
    case02_padded: (5, 2, vec![vec![0, 1, 2], vec![3, 4, 4]]),
    case03_many_padded: (5, 4, vec![vec![0, 1], vec![2, 2], vec![3, 3], vec![4, 4]]),
    case04_one_node_per_agent: (3, 3, vec![vec![0], vec![1], vec![2]]),
    case05_single_agent: (3, 1, vec![vec![0, 1, 2]]),
}

#[test]
fn can_create_valid_population_with_equal_genes() {
    let graph = create_grid_complete_graph(4, 3);
    let mut rng = RandomGen::new_with_seed(4);

    let population = create_initial_population(graph.matrix(), 5, 12, 20, &mut rng);

    assert_eq!(population.len(), 12);
    population.iter().for_each(|individual| {
        assert!(individual.is_valid(graph.size()));
        assert_eq!(individual.agents(), 5);
        assert!(individual.genes.iter().all(|gene| gene.len() == 3));
    });
}
