use log::{debug, warn};
use nalgebra::{DMatrix, DVector};

use crate::{
    error::SplineError,
    polynomial::{falling_factorial, Polynomial},
};

/// Largest accepted relative mismatch of a solved spline in its knots, see [is_close].
pub(crate) const TOLERANCE: f64 = 1e-6;

/// Spline end at which a boundary condition is imposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Boundary condition `f^(order)(x) = 0` at the first (`Left`) or last (`Right`) knot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryCondition {
    pub order: usize,
    pub side: Side,
}

impl BoundaryCondition {
    pub fn new(order: usize, side: Side) -> Self {
        BoundaryCondition { order, side }
    }
}

/// The `degree - 1` boundary conditions closing the system of a spline of given degree.
///
/// Conditions are split between both ends with increasing derivative order: `f''` vanishes
/// on the left and on the right, then `f'''` on the left and on the right, and so on. For
/// degree 3 this is the natural cubic spline. Even degree has one slot left over, which
/// is spent on `f'(x0) = 0`.
///
/// # Example
/// ```
/// use knot_spline::{boundary_conditions, BoundaryCondition, Side};
///
/// assert_eq!(
///     boundary_conditions(3),
///     vec![BoundaryCondition::new(2, Side::Left), BoundaryCondition::new(2, Side::Right)]
/// );
/// ```
pub fn boundary_conditions(degree: usize) -> Vec<BoundaryCondition> {
    let mut conditions = Vec::with_capacity(degree.saturating_sub(1));
    let mut order = 2;

    for slot in 1..degree {
        if slot == degree - 1 && degree % 2 == 0 {
            conditions.push(BoundaryCondition::new(1, Side::Left));
        } else if slot % 2 == 1 {
            conditions.push(BoundaryCondition::new(order, Side::Left));
        } else {
            conditions.push(BoundaryCondition::new(order, Side::Right));
            order += 1;
        }
    }
    conditions
}

/// Solves for polynomials of given `degree`, one per pair of consecutive knots, which pass
/// through all knots, have continuous derivatives up to `degree - 1` in every inner knot and
/// satisfy given boundary `conditions`.
///
/// `xs` must be strictly ascending and as long as `ys`, with at least 2 knots.
///
/// # Errors
/// [SplineError::SingularSystem] when the system has no unique solution, including the case of
/// `conditions` not matching `degree - 1` in number.
pub fn solve_segments(
    xs: &[f64],
    ys: &[f64],
    degree: usize,
    conditions: &[BoundaryCondition],
) -> Result<Vec<Polynomial>, SplineError> {
    if xs.len() < 2 || xs.len() != ys.len() {
        return Err(SplineError::InsufficientKnots { found: xs.len().min(ys.len()) });
    }
    if conditions.len() + 1 != degree {
        warn!(
            "{} boundary conditions do not close system of degree {degree}",
            conditions.len()
        );
        return Err(SplineError::SingularSystem);
    }

    let system = SplineSystem::assemble(xs, ys, degree, conditions);
    debug!("solving spline system of size {}", system.size());
    let polynomials = system.solve(xs)?;
    check_solution(xs, ys, degree, conditions, &polynomials)?;
    Ok(polynomials)
}

/// `|a - b| <= TOLERANCE * (1 + max(|a|, |b|))`
pub(crate) fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE * (1.0 + a.abs().max(b.abs()))
}

/// Verifies solved polynomials against every equation of the system, evaluated the way
/// callers evaluate the spline. Rounding in an ill-conditioned system shows up here.
fn check_solution(
    xs: &[f64],
    ys: &[f64],
    degree: usize,
    conditions: &[BoundaryCondition],
    polynomials: &[Polynomial],
) -> Result<(), SplineError> {
    let last = polynomials.len() - 1;

    for (i, polynomial) in polynomials.iter().enumerate() {
        for knot in [i, i + 1] {
            let value = polynomial.evaluate(xs[knot]);
            if !is_close(value, ys[knot]) {
                warn!("segment {i} misses knot {knot}: {value} instead of {}", ys[knot]);
                return Err(SplineError::SingularSystem);
            }
        }
        if i == last {
            continue;
        }
        let next = &polynomials[i + 1];
        for order in 1..degree {
            let left = polynomial.derivative(order, xs[i + 1]);
            let right = next.derivative(order, xs[i + 1]);
            if !is_close(left, right) {
                warn!("derivative {order} jumps in knot {}: {left} to {right}", i + 1);
                return Err(SplineError::SingularSystem);
            }
        }
    }

    for condition in conditions {
        let value = match condition.side {
            Side::Left => polynomials[0].derivative(condition.order, xs[0]),
            Side::Right => polynomials[last].derivative(condition.order, xs[last + 1]),
        };
        if !is_close(value, 0.0) {
            warn!("boundary condition {condition:?} violated: {value}");
            return Err(SplineError::SingularSystem);
        }
    }
    Ok(())
}

/// Dense system in the monomial basis. Unknowns are coefficients of all segments laid out
/// segment after segment, each in ascending power order of the segment's local variable
/// `s = (x - x_i) / (x_(i+1) - x_i)`.
///
/// With `s` running over `[0, 1]` every entry is bounded by `degree!`, whatever the abscissas.
/// Derivatives with respect to `s` differ from those with respect to `x` by a power of the
/// segment width, which continuity equations weight in and zero boundary conditions ignore.
pub(crate) struct SplineSystem {
    matrix: DMatrix<f64>,
    rhs: DVector<f64>,
    number_of_segments: usize,
    number_of_coefficients: usize,
}

impl SplineSystem {
    pub(crate) fn assemble(
        xs: &[f64],
        ys: &[f64],
        degree: usize,
        conditions: &[BoundaryCondition],
    ) -> Self {
        let number_of_segments = xs.len() - 1;
        let number_of_coefficients = degree + 1;
        let size = number_of_segments * number_of_coefficients;

        let mut system = SplineSystem {
            matrix: DMatrix::<f64>::zeros(size, size),
            rhs: DVector::<f64>::zeros(size),
            number_of_segments,
            number_of_coefficients,
        };
        let mut equation_counter = 0;

        let start_pow = powers(0.0, number_of_coefficients);
        let end_pow = powers(1.0, number_of_coefficients);

        for i in 0..number_of_segments {
            system.value_equation(i, &start_pow, ys[i], &mut equation_counter);
            system.value_equation(i, &end_pow, ys[i + 1], &mut equation_counter);

            if i < number_of_segments - 1 {
                let width_ratio = (xs[i + 1] - xs[i]) / (xs[i + 2] - xs[i + 1]);
                for order in 1..degree {
                    let (weight_0, weight_1) = continuity_weights(width_ratio, order);
                    system.continuity_equation(
                        i,
                        order,
                        (end_pow.as_slice(), weight_0),
                        (start_pow.as_slice(), weight_1),
                        &mut equation_counter,
                    );
                }
            }
        }

        for condition in conditions {
            let (segment, x_pow) = match condition.side {
                Side::Left => (0, &start_pow),
                Side::Right => (number_of_segments - 1, &end_pow),
            };
            system.derivative_equation(segment, condition.order, x_pow, &mut equation_counter);
        }

        system
    }

    /// Solves the system, segment `i` of the result is local to `[xs[i], xs[i + 1]]`.
    pub(crate) fn solve(&self, xs: &[f64]) -> Result<Vec<Polynomial>, SplineError> {
        let solution = match self.matrix.clone().lu().solve(&self.rhs) {
            Some(solution) => solution,
            None => {
                warn!("spline system has a zero pivot");
                return Err(SplineError::SingularSystem);
            }
        };

        if solution.iter().any(|c| !c.is_finite()) {
            warn!("spline system solution is not finite");
            return Err(SplineError::SingularSystem);
        }

        Ok(solution
            .as_slice()
            .chunks(self.number_of_coefficients)
            .zip(xs.windows(2))
            .map(|(chunk, knots)| Polynomial::local(chunk.to_vec(), knots[0], knots[1] - knots[0]))
            .collect())
    }

    pub(crate) fn size(&self) -> usize {
        self.number_of_segments * self.number_of_coefficients
    }

    fn index_start(&self, segment: usize) -> usize {
        segment * self.number_of_coefficients
    }

    fn value_equation(
        &mut self,
        segment: usize,
        x_pow: &[f64],
        y_value: f64,
        equation_counter: &mut usize,
    ) {
        let index_start = self.index_start(segment);
        for c in 0..self.number_of_coefficients {
            self.matrix[(*equation_counter, index_start + c)] = x_pow[c];
        }
        self.rhs[*equation_counter] = y_value;
        *equation_counter += 1;
    }

    /// `w_0 f_segment^(order)(1) - w_1 f_(segment+1)^(order)(0) = 0` in local variables, each
    /// side given as its powers of `s` and its weight `w`.
    fn continuity_equation(
        &mut self,
        segment: usize,
        order: usize,
        (x_pow_0, weight_0): (&[f64], f64),
        (x_pow_1, weight_1): (&[f64], f64),
        equation_counter: &mut usize,
    ) {
        let index_start_0 = self.index_start(segment);
        let index_start_1 = self.index_start(segment + 1);
        for c in order..self.number_of_coefficients {
            self.matrix[(*equation_counter, index_start_0 + c)] =
                weight_0 * derivative_equation_coefficient(c, order, x_pow_0);
            self.matrix[(*equation_counter, index_start_1 + c)] =
                -weight_1 * derivative_equation_coefficient(c, order, x_pow_1);
        }
        self.rhs[*equation_counter] = 0.0;
        *equation_counter += 1;
    }

    /// `f_segment^(order)(s) = 0`.
    fn derivative_equation(
        &mut self,
        segment: usize,
        order: usize,
        x_pow: &[f64],
        equation_counter: &mut usize,
    ) {
        let index_start = self.index_start(segment);
        for c in order..self.number_of_coefficients {
            self.matrix[(*equation_counter, index_start + c)] =
                derivative_equation_coefficient(c, order, x_pow);
        }
        self.rhs[*equation_counter] = 0.0;
        *equation_counter += 1;
    }
}

/// Weights of both sides of a continuity equation between segments of widths `h_0` and
/// `h_1` with `width_ratio = h_0 / h_1`. Derivative of `order` in `x` is `h^-order` times
/// the one in `s`, the equation is multiplied by the smaller `h^order` so no weight
/// exceeds 1.
fn continuity_weights(width_ratio: f64, order: usize) -> (f64, f64) {
    if width_ratio <= 1.0 {
        (1.0, width_ratio.powi(order as i32))
    } else {
        (width_ratio.recip().powi(order as i32), 1.0)
    }
}

fn powers(x: f64, count: usize) -> Vec<f64> {
    (0..count).map(|p| x.powi(p as i32)).collect()
}

fn derivative_equation_coefficient(power: usize, order: usize, x_pow: &[f64]) -> f64 {
    if power < order {
        0.0
    } else {
        x_pow[power - order] * falling_factorial(power, order)
    }
}
