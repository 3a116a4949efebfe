//! This module contains a logic for processing multiple solutions and multi objective optimization
//! based on `Non Dominated Sorting Genetic Algorithm II` algorithm.
//!
//! Solutions are grouped into ranked Pareto fronts: the first front contains all solutions which
//! are not dominated by any other one, the second front contains solutions dominated only by the
//! first front and so on. When the last admitted front does not fit into selection, its members
//! are ordered by crowding distance, so the spread of the front is preserved.
//!
//! For more details regarding NSGA-II algorithm details, check original paper "A fast and elitist
//! multiobjective genetic algorithm: NSGA-II", Kalyanmoy Deb et al. DOI: `0.1109/4235.996017`
//!

mod crowding_distance;
pub use self::crowding_distance::*;

mod non_dominated_sort;
pub use self::non_dominated_sort::*;

mod nsga2_sort;
pub use self::nsga2_sort::select_and_rank;

mod objective;
pub use self::objective::*;
