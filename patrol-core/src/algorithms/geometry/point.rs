#[cfg(test)]
#[path = "../../../tests/unit/algorithms/geometry/point_test.rs"]
mod point_test;

use std::hash::{Hash, Hasher};

/// Represents a point in 2D space.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    /// X value.
    pub x: f64,
    /// Y value.
    pub y: f64,
}

impl Point {
    /// Creates a new instance of `Point`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Computes distance from given point to `other`.
    pub fn distance_to_point(&self, other: &Point) -> f64 {
        self.squared_distance_to_point(other).sqrt()
    }

    /// Computes squared distance from given point to `other`.
    pub fn squared_distance_to_point(&self, other: &Point) -> f64 {
        let delta_x = self.x - other.x;
        let delta_y = self.y - other.y;

        delta_x * delta_x + delta_y * delta_y
    }

    /// Returns a mean point of given points or `None` if there are no points.
    pub fn centroid<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Point> {
        let (sum_x, sum_y, count) =
            points.into_iter().fold((0., 0., 0_usize), |(sum_x, sum_y, count), p| (sum_x + p.x, sum_y + p.y, count + 1));

        (count > 0).then(|| Point::new(sum_x / count as f64, sum_y / count as f64))
    }

    fn transmute(&self) -> (u64, u64) {
        (self.x.to_bits(), self.y.to_bits())
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (x, y) = self.transmute();
        x.hash(state);
        y.hash(state);
    }
}

impl Eq for Point {}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.transmute() == other.transmute()
    }
}
