use log::debug;

use crate::{
    error::SplineError,
    knot::{Knot, KnotStore},
    sampler::{sample, InteractionMode, SamplerConfig, Viewport},
    spline::Spline,
};

/// Entry point for an interactive front end: owns the knots, builds splines from them and
/// turns a spline into a polyline ready to be drawn.
///
/// Every mutation is synchronous; callers rebuild after each change and keep drawing the
/// previous [Spline] until the new one is ready.
///
/// # Example
/// ```
/// use knot_spline::{InteractionMode, SplineEditor, Viewport};
///
/// let mut editor = SplineEditor::new();
/// editor.insert_knot(0.0, 0.0).unwrap();
/// editor.insert_knot(2.0, 0.0).unwrap();
/// editor.insert_knot(1.0, 1.0).unwrap();
///
/// let spline = editor.build(3).unwrap();
/// let polyline = editor.sample_and_evaluate(&spline, Viewport::new(-1.0, 3.0), 400, InteractionMode::Idle);
///
/// assert!(polyline.contains(&(1.0, spline.evaluate(1.0))));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SplineEditor {
    knots: KnotStore,
    config: SamplerConfig,
}

impl SplineEditor {
    pub fn new() -> Self {
        SplineEditor::with_config(SamplerConfig::default())
    }

    pub fn with_config(config: SamplerConfig) -> Self {
        SplineEditor { knots: KnotStore::new(), config }
    }

    pub fn knots(&self) -> &KnotStore {
        &self.knots
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// # Errors
    /// [SplineError::DuplicateAbscissa] when abscissa `x` is taken, knots stay unchanged.
    pub fn insert_knot(&mut self, x: f64, y: f64) -> Result<usize, SplineError> {
        self.knots.insert(x, y)
    }

    /// # Errors
    /// [SplineError::LocateOutOfBounds] when there is no knot at `x`.
    pub fn remove_knot(&mut self, x: f64) -> Result<Knot, SplineError> {
        self.knots.remove(x)
    }

    /// Replaces knot at `from_x` with `(to_x, to_y)` and returns its new index.
    ///
    /// # Errors
    /// [SplineError::LocateOutOfBounds] when there is no knot at `from_x`,
    /// [SplineError::DuplicateAbscissa] when `to_x` is taken by another knot.
    /// Knots stay unchanged on error.
    pub fn move_knot(&mut self, from_x: f64, to_x: f64, to_y: f64) -> Result<usize, SplineError> {
        let removed = self.knots.remove(from_x)?;
        match self.knots.insert(to_x, to_y) {
            Ok(index) => Ok(index),
            Err(error) => {
                self.knots.insert(removed.get_x(), removed.get_y())?;
                Err(error)
            }
        }
    }

    /// # Errors
    /// See [Spline::new].
    pub fn build(&self, degree: usize) -> Result<Spline, SplineError> {
        Spline::check_degree(degree)?;
        if self.knots.len() < 2 {
            return Err(SplineError::InsufficientKnots { found: self.knots.len() });
        }
        Spline::from_store(&self.knots, degree)
    }

    /// Points `(x, spline(x))` of the curve for the given view, see [sample].
    pub fn sample_and_evaluate(
        &self,
        spline: &Spline,
        viewport: Viewport,
        budget: usize,
        mode: InteractionMode,
    ) -> Vec<(f64, f64)> {
        let xs = sample(spline.knots_x(), viewport, budget, mode, &self.config);
        let ys = spline.evaluate_sorted(&xs);
        debug!("evaluated {} points in {mode:?} mode", xs.len());
        xs.into_iter().zip(ys).collect()
    }
}
