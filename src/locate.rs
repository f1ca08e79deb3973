use crate::error::SplineError;

/// Floor search over an ascending, duplicate free sequence.
///
/// Returns the largest index `i` with `sorted[i] <= value`. Values below the first
/// element map to `0` and values past the last element map to the last index, so callers
/// that care about the "before everything" case have to check it themselves.
/// An empty sequence yields `0`.
///
/// # Example
/// ```
/// use knot_spline::locate;
///
/// let xs = [0.0, 1.0, 2.5, 4.0];
/// assert_eq!(locate(&xs, 2.5), 2);
/// assert_eq!(locate(&xs, 3.9), 2);
/// assert_eq!(locate(&xs, 10.0), 3);
/// assert_eq!(locate(&xs, -1.0), 0);
/// ```
pub fn locate(sorted: &[f64], value: f64) -> usize {
    if sorted.is_empty() {
        return 0;
    }

    let mut min = 0;
    let mut max = sorted.len() - 1;

    while min != max {
        // upper middle, otherwise `min = mid` would never move for two elements
        let mid = (min + max + 1) / 2;
        if value < sorted[mid] {
            max = mid - 1;
        } else {
            min = mid;
        }
    }
    min
}

/// Index of the element exactly equal to `value`.
///
/// # Errors
/// [SplineError::LocateOutOfBounds] when `value` is not present.
pub fn locate_exact(sorted: &[f64], value: f64) -> Result<usize, SplineError> {
    let index = locate(sorted, value);
    match sorted.get(index) {
        Some(found) if *found == value => Ok(index),
        _ => Err(SplineError::LocateOutOfBounds { value }),
    }
}
