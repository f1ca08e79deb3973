//! Maximally smooth interpolating splines for interactive curve editors.
//!
//! Spline of degree `D` through `n + 1` knots consists of `n` polynomials of degree `D`, one
//! per pair of consecutive knots, with derivatives up to `D - 1` continuous in every inner
//! knot. The remaining `D - 1` degrees of freedom are removed by boundary conditions, split
//! between both ends (see [boundary_conditions]); for `D = 3` this is the natural cubic spline.
//!
//! Besides building splines, the crate keeps knots ordered ([KnotStore]) and chooses
//! abscissas at which a curve should be drawn for the current view ([sample]).
//!
//! # Example
//! ```
//! use knot_spline::{InteractionMode, SplineEditor, Viewport};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let mut editor = SplineEditor::new();
//! editor.insert_knot(5.0, 1.0).unwrap();
//! editor.insert_knot(2.0, 0.0).unwrap();
//! editor.insert_knot(8.0, 3.0).unwrap();
//!
//! let spline = editor.build(5).unwrap();
//! assert_approx_eq!(1.0, spline.evaluate(5.0), 1e-9);
//!
//! let polyline = editor.sample_and_evaluate(&spline, Viewport::new(0.0, 10.0), 1000, InteractionMode::Idle);
//! assert_eq!((2.0, spline.evaluate(2.0)), polyline[0]);
//! ```

mod editor;
mod error;
mod knot;
mod locate;
mod polynomial;
#[cfg(test)]
mod reference;
mod sampler;
mod spline;
mod system;

pub use editor::SplineEditor;
pub use error::SplineError;
pub use knot::{Knot, KnotStore};
pub use locate::{locate, locate_exact};
pub use polynomial::Polynomial;
pub use sampler::{sample, InteractionMode, SamplerConfig, Viewport};
pub use spline::{Spline, DEFAULT_DEGREE, MAX_DEGREE, MIN_DEGREE};
pub use system::{boundary_conditions, solve_segments, BoundaryCondition, Side};
