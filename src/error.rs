use thiserror::Error;

/// Errors reported by knot bookkeeping and spline construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    /// A spline needs at least two knots.
    #[error("spline must have at least 2 knots, found {found}")]
    InsufficientKnots { found: usize },

    #[error("degree {degree} is outside of the supported range {min}..={max}")]
    DegreeOutOfRange { degree: usize, min: usize, max: usize },

    /// Two knots share the same abscissa or knots are not in ascending order.
    #[error("knot abscissa {x} is already taken")]
    DuplicateAbscissa { x: f64 },

    /// The assembled linear system has no unique, numerically usable solution.
    #[error("spline system is singular or too ill-conditioned to solve")]
    SingularSystem,

    #[error("no knot at abscissa {value}")]
    LocateOutOfBounds { value: f64 },
}
