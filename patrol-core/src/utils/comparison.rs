use std::cmp::Ordering;

/// Compares floating point numbers, NaN is considered as the greatest value.
#[inline]
pub fn compare_floats(a: f64, b: f64) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => match (a.is_nan(), b.is_nan()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        },
    }
}

/// Compares floating point numbers by reference.
#[inline]
pub fn compare_floats_refs(a: &f64, b: &f64) -> Ordering {
    compare_floats(*a, *b)
}
