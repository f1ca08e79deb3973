//! Fixed degree splines built without the general assembler, kept as oracles for it.

use nalgebra::{DMatrix, DVector};

use crate::{locate::locate, polynomial::Polynomial};

/// Natural cubic spline in the classical second-derivative ("moments") form.
pub(crate) struct NaturalCubic {
    xs: Vec<f64>,
    ys: Vec<f64>,
    moments: Vec<f64>,
}

/// Solves the tridiagonal moments system with `M_0 = M_n = 0` by forward elimination and
/// back substitution.
pub(crate) fn natural_cubic(xs: &[f64], ys: &[f64]) -> NaturalCubic {
    let n = xs.len() - 1;
    let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let mut moments = vec![0.0; n + 1];

    if n >= 2 {
        let size = n - 1;
        let mut diagonal = Vec::with_capacity(size);
        let mut rhs = Vec::with_capacity(size);
        for i in 1..n {
            diagonal.push(2.0 * (h[i - 1] + h[i]));
            rhs.push(6.0 * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]));
        }

        for k in 1..size {
            let factor = h[k] / diagonal[k - 1];
            diagonal[k] -= factor * h[k];
            rhs[k] -= factor * rhs[k - 1];
        }

        moments[size] = rhs[size - 1] / diagonal[size - 1];
        for k in (0..size - 1).rev() {
            moments[k + 1] = (rhs[k] - h[k + 1] * moments[k + 2]) / diagonal[k];
        }
    }

    NaturalCubic { xs: xs.to_vec(), ys: ys.to_vec(), moments }
}

impl NaturalCubic {
    pub(crate) fn evaluate(&self, t: f64) -> f64 {
        let i = locate(&self.xs, t).min(self.xs.len() - 2);
        let h = self.xs[i + 1] - self.xs[i];
        let a = self.xs[i + 1] - t;
        let b = t - self.xs[i];
        let (m0, m1) = (self.moments[i], self.moments[i + 1]);

        m0 * a.powi(3) / (6.0 * h)
            + m1 * b.powi(3) / (6.0 * h)
            + (self.ys[i] / h - m0 * h / 6.0) * a
            + (self.ys[i + 1] / h - m1 * h / 6.0) * b
    }

    pub(crate) fn second_derivative(&self, t: f64) -> f64 {
        let i = locate(&self.xs, t).min(self.xs.len() - 2);
        let h = self.xs[i + 1] - self.xs[i];
        (self.moments[i] * (self.xs[i + 1] - t) + self.moments[i + 1] * (t - self.xs[i])) / h
    }
}

/// Quartic spline with `f'''(x0) = f'''(xn) = 0` and `f''(x0) = 0`, rows written out by hand.
pub(crate) fn quartic(xs: &[f64], ys: &[f64]) -> Option<Vec<Polynomial>> {
    let n = xs.len() - 1;
    let mut matrix = DMatrix::<f64>::zeros(5 * n, 5 * n);
    let mut rhs = DVector::<f64>::zeros(5 * n);

    let mut row = 0;
    for i in 0..n {
        for (x, y) in [(xs[i], ys[i]), (xs[i + 1], ys[i + 1])] {
            let values = [1.0, x, x * x, x.powi(3), x.powi(4)];
            for (c, value) in values.iter().enumerate() {
                matrix[(row, 5 * i + c)] = *value;
            }
            rhs[row] = y;
            row += 1;
        }
    }

    for i in 0..n.saturating_sub(1) {
        let x = xs[i + 1];
        let first = [0.0, 1.0, 2.0 * x, 3.0 * x * x, 4.0 * x.powi(3)];
        let second = [0.0, 0.0, 2.0, 6.0 * x, 12.0 * x * x];
        let third = [0.0, 0.0, 0.0, 6.0, 24.0 * x];
        for derivative in [first, second, third] {
            for c in 0..5 {
                matrix[(row, 5 * i + c)] = derivative[c];
                matrix[(row, 5 * (i + 1) + c)] = -derivative[c];
            }
            row += 1;
        }
    }

    let (x0, xn) = (xs[0], xs[n]);
    for (c, value) in [6.0, 24.0 * x0].iter().enumerate() {
        matrix[(row, 3 + c)] = *value;
    }
    row += 1;
    for (c, value) in [6.0, 24.0 * xn].iter().enumerate() {
        matrix[(row, 5 * (n - 1) + 3 + c)] = *value;
    }
    row += 1;
    for (c, value) in [2.0, 6.0 * x0, 12.0 * x0 * x0].iter().enumerate() {
        matrix[(row, 2 + c)] = *value;
    }

    let solution = matrix.lu().solve(&rhs)?;
    Some(
        solution
            .as_slice()
            .chunks(5)
            .map(|chunk| Polynomial::new(chunk.to_vec()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn natural_cubic_through_three_points() {
        let eps = 1e-12;
        let spline = natural_cubic(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]);

        assert_approx_eq!(spline.evaluate(0.0), 0.0, eps);
        assert_approx_eq!(spline.evaluate(1.0), 1.0, eps);
        assert_approx_eq!(spline.evaluate(2.0), 0.0, eps);
        // symmetric data: M_1 = -3, f(0.5) = 11/16
        assert_approx_eq!(spline.second_derivative(1.0), -3.0, eps);
        assert_approx_eq!(spline.evaluate(0.5), 0.6875, eps);
        assert_approx_eq!(spline.second_derivative(0.0), 0.0, eps);
        assert_approx_eq!(spline.second_derivative(2.0), 0.0, eps);
    }

    #[test]
    fn quartic_boundary_conditions() {
        let eps = 1e-7;
        let xs = [0.0, 1.0, 2.5, 3.0];
        let ys = [1.0, -1.0, 0.5, 2.0];
        let polynomials = quartic(&xs, &ys).unwrap();

        assert_eq!(polynomials.len(), 3);
        assert_approx_eq!(polynomials[0].derivative(3, 0.0), 0.0, eps);
        assert_approx_eq!(polynomials[0].derivative(2, 0.0), 0.0, eps);
        assert_approx_eq!(polynomials[2].derivative(3, 3.0), 0.0, eps);
        for (i, polynomial) in polynomials.iter().enumerate() {
            assert_approx_eq!(polynomial.evaluate(xs[i]), ys[i], eps);
            assert_approx_eq!(polynomial.evaluate(xs[i + 1]), ys[i + 1], eps);
        }
    }
}
