use std::cmp::Ordering;

/// A multi objective defines a dominance relation between solutions and gives access to every
/// single objective it is composed of.
pub trait MultiObjective {
    /// The solution value type that we define the objective on.
    type Solution;

    /// Returns `Less` if `a` dominates `b`, `Greater` if `b` dominates `a` and `Equal` when neither
    /// of them dominates the other.
    fn total_order(&self, a: &Self::Solution, b: &Self::Solution) -> Ordering;

    /// Returns order of two solutions using objective with given index only.
    fn get_order(&self, a: &Self::Solution, b: &Self::Solution, idx: usize) -> Ordering;

    /// Returns signed distance between two solutions using objective with given index only.
    fn get_distance(&self, a: &Self::Solution, b: &Self::Solution, idx: usize) -> f64;

    /// Returns amount of objectives.
    fn size(&self) -> usize;
}

/// Calculates dominance order of two solutions from their per objective orders.
pub fn dominance_order(orders: impl Iterator<Item = Ordering>) -> Ordering {
    let (less_cnt, greater_cnt) = orders.fold((0, 0), |(less, greater), order| match order {
        Ordering::Less => (less + 1, greater),
        Ordering::Greater => (less, greater + 1),
        Ordering::Equal => (less, greater),
    });

    match (less_cnt > 0, greater_cnt > 0) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}
