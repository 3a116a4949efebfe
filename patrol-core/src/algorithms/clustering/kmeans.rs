//! This module contains a basic K-Means algorithm implementation with multiple random launches.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/clustering/kmeans_test.rs"]
mod kmeans_test;

use crate::algorithms::geometry::Point;
use crate::utils::Random;
use rand::seq::SliceRandom;

/// A partition of points produced by K-Means.
#[derive(Clone, Debug)]
pub struct KMeansPartition {
    /// Point indices per cluster, every cluster is non-empty and sorted in ascending order.
    pub clusters: Vec<Vec<usize>>,
    /// Cluster centroids.
    pub centroids: Vec<Point>,
    /// A within-cluster sum of squared distances.
    pub inertia: f64,
}

/// Creates `k` clusters of points using the K-Means algorithm. The algorithm is launched
/// `launches` times from random initial centroids and the partition with the lowest inertia is kept.
///
/// Returns `None` when there are no points, `k` is zero or greater than amount of points.
pub fn create_kmeans(
    points: &[Point],
    k: usize,
    launches: usize,
    max_iterations: usize,
    random: &(dyn Random + Send + Sync),
) -> Option<KMeansPartition> {
    if points.is_empty() || k == 0 || k > points.len() {
        return None;
    }

    let kmeans = KMeans { k, max_iterations: max_iterations.max(1) };

    (0..launches.max(1)).map(|_| kmeans.calculate(points, random)).reduce(|best, candidate| {
        if candidate.inertia < best.inertia { candidate } else { best }
    })
}

struct KMeans {
    k: usize,
    max_iterations: usize,
}

impl KMeans {
    fn calculate(&self, points: &[Point], random: &(dyn Random + Send + Sync)) -> KMeansPartition {
        let mut centroids = self.initialize_centroids(points, random);
        let mut assignment = self.assign_points(points, &centroids);

        for _ in 0..self.max_iterations {
            self.fill_empty_clusters(points, &centroids, &mut assignment);
            centroids = self.update_centroids(points, &assignment, &centroids);

            let next_assignment = self.assign_points(points, &centroids);
            if next_assignment == assignment {
                break;
            }

            assignment = next_assignment;
        }

        self.fill_empty_clusters(points, &centroids, &mut assignment);
        let centroids = self.update_centroids(points, &assignment, &centroids);

        let inertia = points
            .iter()
            .zip(assignment.iter())
            .map(|(point, &cluster)| point.squared_distance_to_point(&centroids[cluster]))
            .sum();

        let clusters = assignment.iter().enumerate().fold(vec![Vec::new(); self.k], |mut clusters, (idx, &cluster)| {
            clusters[cluster].push(idx);
            clusters
        });

        KMeansPartition { clusters, centroids, inertia }
    }

    fn initialize_centroids(&self, points: &[Point], random: &(dyn Random + Send + Sync)) -> Vec<Point> {
        let mut indices = (0..points.len()).collect::<Vec<_>>();
        indices.shuffle(&mut random.get_rng());

        indices.into_iter().take(self.k).map(|idx| points[idx]).collect()
    }

    fn assign_points(&self, points: &[Point], centroids: &[Point]) -> Vec<usize> {
        points
            .iter()
            .map(|point| {
                centroids
                    .iter()
                    .enumerate()
                    .min_by(|(_, a), (_, b)| {
                        point.squared_distance_to_point(a).total_cmp(&point.squared_distance_to_point(b))
                    })
                    .map(|(cluster, _)| cluster)
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Moves the farthest point of a populated cluster into every empty cluster.
    fn fill_empty_clusters(&self, points: &[Point], centroids: &[Point], assignment: &mut [usize]) {
        loop {
            let mut sizes = vec![0_usize; self.k];
            assignment.iter().for_each(|&cluster| sizes[cluster] += 1);

            let Some(empty) = sizes.iter().position(|&size| size == 0) else {
                break;
            };

            let farthest = assignment
                .iter()
                .enumerate()
                .filter(|&(_, &cluster)| sizes[cluster] > 1)
                .max_by(|&(a_idx, &a_cluster), &(b_idx, &b_cluster)| {
                    let a_distance = points[a_idx].squared_distance_to_point(&centroids[a_cluster]);
                    let b_distance = points[b_idx].squared_distance_to_point(&centroids[b_cluster]);

                    a_distance.total_cmp(&b_distance)
                })
                .map(|(idx, _)| idx);

            match farthest {
                Some(idx) => assignment[idx] = empty,
                None => break,
            }
        }
    }

    fn update_centroids(&self, points: &[Point], assignment: &[usize], previous: &[Point]) -> Vec<Point> {
        (0..self.k)
            .map(|cluster| {
                let members = assignment.iter().zip(points.iter()).filter(|&(&c, _)| c == cluster).map(|(_, point)| point);

                Point::centroid(members).unwrap_or(previous[cluster])
            })
            .collect()
    }
}
