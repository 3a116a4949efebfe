use super::*;
use crate::helpers::algorithms::p;
use crate::utils::DefaultRandom;

fn create_two_groups() -> Vec<Point> {
    vec![p(0., 0.), p(10., 10.), p(1., 0.), p(11., 10.), p(0., 1.), p(10., 11.)]
}

#[test]
fn can_split_separated_groups() {
    let random = DefaultRandom::new_with_seed(1);

    let partition = create_kmeans(&create_two_groups(), 2, 5, 100, &random).expect("partition");

    let mut clusters = partition.clusters.clone();
    clusters.sort();
    assert_eq!(clusters, vec![vec![0, 2, 4], vec![1, 3, 5]]);
    assert_close!(partition.inertia, 8. / 3., 1E-9);
}

#[test]
fn can_create_non_empty_clusters_when_k_equals_size() {
    let random = DefaultRandom::new_with_seed(3);
    let points = vec![p(0., 0.), p(0., 0.), p(5., 5.)];

    let partition = create_kmeans(&points, 3, 3, 10, &random).expect("partition");

    assert_eq!(partition.clusters.len(), 3);
    assert!(partition.clusters.iter().all(|cluster| cluster.len() == 1));
}

parameterized_test! {can_reject_invalid_k, (size, k), {
    can_reject_invalid_k_impl(size, k);
}}

can_reject_invalid_k! {
    case01_zero_k: (3, 0),
    case02_too_big_k: (3, 4),
    case03_no_points: (0, 1),
}

fn can_reject_invalid_k_impl(size: usize, k: usize) {
    let random = DefaultRandom::new_with_seed(0);
    let points = (0..size).map(|idx| p(idx as f64, 0.)).collect::<Vec<_>>();

    assert!(create_kmeans(&points, k, 1, 10, &random).is_none());
}
