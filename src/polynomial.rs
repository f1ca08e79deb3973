/// Polynomial in the variable `s = (x - origin) / scale`, coefficients stored in ascending
/// power order.
///
/// Spline segments use their left knot as `origin` and their width as `scale`, so `s` runs
/// over `[0, 1]` on the segment and coefficients stay comparable to the knot ordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
    origin: f64,
    scale: f64,
}

impl Polynomial {
    /// Polynomial in plain `x`.
    pub fn new(coefficients: Vec<f64>) -> Self {
        Polynomial::local(coefficients, 0.0, 1.0)
    }

    pub fn local(coefficients: Vec<f64>, origin: f64, scale: f64) -> Self {
        Polynomial { coefficients, origin, scale }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn origin(&self) -> f64 {
        self.origin
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Highest power present, `0` for an empty coefficient vector.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Horner evaluation.
    pub fn evaluate(&self, x: f64) -> f64 {
        let s = self.to_local(x);
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, c| acc * s + c)
    }

    /// Value of derivative of given `order` with respect to `x` at `x`.
    pub fn derivative(&self, order: usize, x: f64) -> f64 {
        let s = self.to_local(x);
        let local_derivative = self
            .coefficients
            .iter()
            .enumerate()
            .skip(order)
            .rev()
            .fold(0.0, |acc, (power, c)| {
                acc * s + c * falling_factorial(power, order)
            });
        local_derivative / self.scale.powi(order as i32)
    }

    fn to_local(&self, x: f64) -> f64 {
        (x - self.origin) / self.scale
    }
}

/// `power * (power - 1) * ... * (power - order + 1)`, the factor that `order`-th derivative
/// brings down in front of `x^(power - order)`.
pub(crate) fn falling_factorial(power: usize, order: usize) -> f64 {
    if power < order {
        return 0.0;
    }
    let mut multiplier = 1.0;
    let mut coeff = power as f64;
    for _ in 0..order {
        multiplier *= coeff;
        coeff -= 1.0;
    }
    multiplier
}
