use log::trace;

use crate::{
    error::SplineError,
    locate::{locate, locate_exact},
};

/// Knot represents point through which spline function passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knot {
    x: f64,
    y: f64,
}

impl Knot {
    pub fn new(x: f64, y: f64) -> Self {
        Knot { x, y }
    }

    pub fn get_x(&self) -> f64 {
        self.x
    }

    pub fn get_y(&self) -> f64 {
        self.y
    }
}

/// Ascending, duplicate free sequence of knots.
///
/// Knots can only be added or removed by value, so the store is sorted by `x` at all
/// times. Moving a knot is a removal followed by an insertion.
///
/// # Example
/// ```
/// use knot_spline::KnotStore;
///
/// let mut store = KnotStore::new();
/// store.insert(5.0, 1.0).unwrap();
/// store.insert(2.0, 0.0).unwrap();
/// store.insert(8.0, -1.0).unwrap();
///
/// assert_eq!(store.xs(), vec![2.0, 5.0, 8.0]);
/// assert!(store.insert(5.0, 3.0).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct KnotStore {
    knots: Vec<Knot>,
}

impl KnotStore {
    pub fn new() -> Self {
        KnotStore { knots: Vec::new() }
    }

    /// Inserts knot keeping ascending order and returns its index.
    ///
    /// # Errors
    /// [SplineError::DuplicateAbscissa] when a knot with the same `x` is already stored.
    /// The store is left untouched in that case.
    pub fn insert(&mut self, x: f64, y: f64) -> Result<usize, SplineError> {
        let index = if self.knots.is_empty() {
            0
        } else {
            let xs = self.xs();
            let floor = locate(&xs, x);
            if xs[floor] == x {
                return Err(SplineError::DuplicateAbscissa { x });
            }
            if x < xs[0] {
                0
            } else {
                floor + 1
            }
        };

        trace!("inserting knot ({x}, {y}) at {index}");
        self.knots.insert(index, Knot::new(x, y));
        Ok(index)
    }

    /// Removes knot with abscissa exactly equal to `x`.
    ///
    /// # Errors
    /// [SplineError::LocateOutOfBounds] when there is no such knot.
    pub fn remove(&mut self, x: f64) -> Result<Knot, SplineError> {
        let index = locate_exact(&self.xs(), x)?;
        trace!("removing knot at {index}");
        Ok(self.knots.remove(index))
    }

    /// Smallest distance between two consecutive abscissas, `None` for less than 2 knots.
    pub fn min_gap(&self) -> Option<f64> {
        min_gap(&self.xs())
    }

    pub fn xs(&self) -> Vec<f64> {
        self.knots.iter().map(|k| k.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.knots.iter().map(|k| k.y).collect()
    }

    pub fn get(&self, index: usize) -> Option<&Knot> {
        self.knots.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Knot> {
        self.knots.iter()
    }

    pub fn len(&self) -> usize {
        self.knots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    pub fn clear(&mut self) {
        self.knots.clear();
    }
}

/// Smallest difference of consecutive elements of an ascending sequence.
pub(crate) fn min_gap(xs: &[f64]) -> Option<f64> {
    xs.windows(2)
        .map(|w| w[1] - w[0])
        .min_by(|a, b| a.total_cmp(b))
}
