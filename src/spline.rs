use log::debug;

use crate::{
    error::SplineError,
    knot::KnotStore,
    locate::locate,
    polynomial::Polynomial,
    system::{boundary_conditions, solve_segments, BoundaryCondition},
};

pub const MIN_DEGREE: usize = 3;
pub const MAX_DEGREE: usize = 13;
pub const DEFAULT_DEGREE: usize = 3;

/// Piecewise polynomial interpolating a set of knots with continuous derivatives up to
/// `degree - 1`.
///
/// Spline is an immutable value: it is solved once in the constructor and afterwards only
/// evaluated, so it can be shared between any number of readers.
#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    xs: Vec<f64>,
    polynomials: Vec<Polynomial>,
    degree: usize,
}

impl Spline {
    /// Builds spline of given `degree` through knots `(xs[i], ys[i])` with the default
    /// boundary conditions, see [boundary_conditions].
    ///
    /// # Example
    /// ```
    /// use knot_spline::Spline;
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let spline = Spline::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0], 3).unwrap();
    ///
    /// assert_approx_eq!(1.0, spline.evaluate(1.0), 1e-9);
    /// assert_approx_eq!(0.6875, spline.evaluate(0.5), 1e-9);
    /// ```
    /// # Errors
    /// - [SplineError::DegreeOutOfRange] when `degree` is not within [MIN_DEGREE]..=[MAX_DEGREE],
    /// - [SplineError::InsufficientKnots] for less than 2 knots,
    /// - [SplineError::DuplicateAbscissa] when `xs` is not strictly ascending,
    /// - [SplineError::SingularSystem] when the linear system can not be solved.
    pub fn new(xs: &[f64], ys: &[f64], degree: usize) -> Result<Self, SplineError> {
        Spline::check_degree(degree)?;
        Spline::with_boundary_conditions(xs, ys, degree, &boundary_conditions(degree))
    }

    /// Builds spline from the knots of `store`.
    pub fn from_store(store: &KnotStore, degree: usize) -> Result<Self, SplineError> {
        Spline::new(&store.xs(), &store.ys(), degree)
    }

    /// Builds spline closed with explicitly given boundary conditions instead of the default
    /// ones. There must be exactly `degree - 1` of them. Degree is not limited to
    /// [MIN_DEGREE]..=[MAX_DEGREE] here. When `xs` and `ys` differ in length the surplus of
    /// the longer one is ignored.
    pub fn with_boundary_conditions(
        xs: &[f64],
        ys: &[f64],
        degree: usize,
        conditions: &[BoundaryCondition],
    ) -> Result<Self, SplineError> {
        let found = xs.len().min(ys.len());
        if found < 2 {
            return Err(SplineError::InsufficientKnots { found });
        }
        if let Some(w) = xs[..found].windows(2).find(|w| w[1] <= w[0]) {
            return Err(SplineError::DuplicateAbscissa { x: w[1] });
        }

        let xs = &xs[..found];
        let polynomials = solve_segments(xs, &ys[..found], degree, conditions)?;
        debug!("built spline of degree {degree} through {found} knots");

        Ok(Spline { xs: xs.to_vec(), polynomials, degree })
    }

    /// # Errors
    /// [SplineError::DegreeOutOfRange] when `degree` is not within [MIN_DEGREE]..=[MAX_DEGREE].
    pub fn check_degree(degree: usize) -> Result<(), SplineError> {
        if (MIN_DEGREE..=MAX_DEGREE).contains(&degree) {
            Ok(())
        } else {
            Err(SplineError::DegreeOutOfRange { degree, min: MIN_DEGREE, max: MAX_DEGREE })
        }
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn knots_x(&self) -> &[f64] {
        &self.xs
    }

    pub fn segments(&self) -> &[Polynomial] {
        &self.polynomials
    }

    /// First and last knot abscissa.
    pub fn domain(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Index of the segment used to evaluate `x`. Values outside of the domain belong to the
    /// first or the last segment.
    pub fn segment_index(&self, x: f64) -> usize {
        locate(&self.xs, x).min(self.polynomials.len() - 1)
    }

    /// Value at `x`. Outside of the domain the end segments are extrapolated.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.polynomials[self.segment_index(x)].evaluate(x)
    }

    pub fn derivative(&self, order: usize, x: f64) -> f64 {
        self.polynomials[self.segment_index(x)].derivative(order, x)
    }

    /// Values at every abscissa of ascending `xs`.
    ///
    /// Ascending order lets the segment of the previous abscissa serve as a starting hint,
    /// so full bisection runs only when the hint and its successor both miss.
    pub fn evaluate_sorted(&self, xs: &[f64]) -> Vec<f64> {
        let mut results = Vec::with_capacity(xs.len());
        let mut index = 0;

        for x in xs {
            index = self.find_segment_index_with_hint(index, *x);
            results.push(self.polynomials[index].evaluate(*x));
        }
        results
    }

    fn find_segment_index_with_hint(&self, index_hint: usize, x: f64) -> usize {
        if !self.is_in_segment_range(index_hint, x) {
            if index_hint + 1 < self.polynomials.len() && self.is_in_segment_range(index_hint + 1, x) {
                return index_hint + 1;
            } else {
                return self.segment_index(x);
            }
        }
        index_hint
    }

    fn is_in_segment_range(&self, segment: usize, x: f64) -> bool {
        self.xs[segment] <= x && x < self.xs[segment + 1]
    }
}
