use super::*;
use crate::helpers::models::create_line_matrix;

#[test]
fn can_exchange_column_blocks() {
    let first = Individual { genes: vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7]] };
    let second = Individual { genes: vec![vec![7, 6, 5, 4], vec![3, 2, 1, 0]] };
    let mut rng = RandomGen::new_with_seed(5);

    let (left, right) = crossover(&first, &second, 2, &mut rng);

    assert_eq!(left.gene_length(), 4);
    assert_eq!(right.gene_length(), 4);
    (0..2).for_each(|row| {
        assert_eq!(left.genes[row][..2], first.genes[row][..2]);
        assert_eq!(right.genes[row][2..], first.genes[row][2..]);

        let second_row = right.genes[row][..2].iter().chain(left.genes[row][2..].iter()).copied().collect::<Vec<_>>();
        assert!(second.genes.contains(&second_row));
    });
}

#[test]
fn can_keep_parents_with_single_column() {
    let first = Individual { genes: vec![vec![0], vec![1]] };
    let second = Individual { genes: vec![vec![1], vec![0]] };
    let mut rng = RandomGen::new_with_seed(0);

    let (left, _) = crossover(&first, &second, 3, &mut rng);

    assert_eq!(left, first);
}

#[test]
fn can_repair_duplicates_with_missing_nodes() {
    let mut individual = Individual { genes: vec![vec![0, 1, 1], vec![2, 0, 3]] };

    repair(&mut individual, 5);

    assert_eq!(individual.genes, vec![vec![0, 1, 4], vec![2, 0, 3]]);
    assert!(individual.is_valid(5));
}

#[test]
fn can_repair_many_missing_nodes_in_order() {
    let mut individual = Individual { genes: vec![vec![2, 2, 2], vec![2, 2, 0]] };

    repair(&mut individual, 5);

    assert_eq!(individual.genes, vec![vec![2, 1, 3], vec![4, 2, 0]]);
}

#[test]
fn can_keep_valid_individual_on_repair() {
    let mut individual = Individual { genes: vec![vec![0, 1], vec![2, 2]] };

    repair(&mut individual, 3);

    assert_eq!(individual.genes, vec![vec![0, 1], vec![2, 2]]);
}

#[test]
fn can_reorder_genes_by_nearest_neighbour() {
    let mut individual = Individual { genes: vec![vec![0, 3, 1, 2], vec![3, 0, 2, 2]] };

    local_optimize(&mut individual, &create_line_matrix());

    assert_eq!(individual.genes, vec![vec![0, 1, 2, 3], vec![3, 2, 2, 0]]);
}

parameterized_test! {can_mutate_with_probability, (probability, expected), {
    let mut individual = Individual { genes: vec![vec![0, 1, 2]] };
    let mut rng = RandomGen::new_with_seed(1);

    mutate(&mut individual, probability, &mut rng);

    assert_eq!(individual.genes, expected);
}}

can_mutate_with_probability! {
    case01_always: (1., vec![vec![2, 1, 0]]),
    case02_never: (0., vec![vec![0, 1, 2]]),
}
