use itertools::Itertools;
use log::trace;

use crate::knot::min_gap;

/// What the user is doing while the curve is redrawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    /// Nothing moves. Only the visible part of the curve is sampled, at screen resolution.
    Idle,
    /// The view is being dragged or zoomed. The whole curve is sampled densely once so the
    /// view can move without resampling.
    Panning,
    /// The view is fitted to the knots, the whole curve is on screen.
    AutoFit,
}

/// Visible range of abscissas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
}

impl Viewport {
    pub fn new(x_min: f64, x_max: f64) -> Self {
        Viewport { x_min, x_max }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }
}

/// Tuning of [sample].
#[derive(Debug, Clone, PartialEq)]
pub struct SamplerConfig {
    /// Lowest density in points per unit of `x` while panning.
    pub min_frequency: f64,
    /// Points placed between the two closest knots while panning.
    pub points_per_min_gap: f64,
    /// Upper bound of the sample length in every mode.
    pub max_samples: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerConfig {
            min_frequency: 100.0,
            points_per_min_gap: 100.0,
            max_samples: 1 << 18,
        }
    }
}

/// Ascending, duplicate free abscissas at which the curve through knots `knots_x` is drawn.
///
/// The result always contains every knot abscissa, so segment ends are drawn exactly, plus a
/// regular grid whose extent and density depend on `mode`. `budget` is the number of points
/// the viewport can show, usually its width in pixels. The result is never longer than
/// [SamplerConfig::max_samples] unless the knots alone are.
///
/// # Example
/// ```
/// use knot_spline::{sample, InteractionMode, SamplerConfig, Viewport};
///
/// let knots = [0.0, 1.0, 4.0];
/// let xs = sample(&knots, Viewport::new(-10.0, 10.0), 8, InteractionMode::AutoFit, &SamplerConfig::default());
///
/// assert_eq!(xs, vec![0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0]);
/// ```
pub fn sample(
    knots_x: &[f64],
    viewport: Viewport,
    budget: usize,
    mode: InteractionMode,
    config: &SamplerConfig,
) -> Vec<f64> {
    if knots_x.len() < 2 {
        return knots_x.to_vec();
    }

    let first = knots_x[0];
    let last = knots_x[knots_x.len() - 1];
    let span = last - first;

    let (start, end, count) = match mode {
        InteractionMode::AutoFit => (first, last, budget.saturating_add(1)),
        InteractionMode::Idle => {
            let start = viewport.x_min.max(first);
            let end = viewport.x_max.min(last);
            if end < start || viewport.width() <= 0.0 {
                // curve is entirely off screen
                (start, end, 0)
            } else {
                let visible = (end - start) / viewport.width();
                (start, end, ((visible * budget as f64) as usize).saturating_add(1))
            }
        }
        InteractionMode::Panning => {
            let frequency = panning_frequency(knots_x, span, config);
            trace!("panning frequency {frequency}");
            (first, last, 1 + (frequency * span) as usize)
        }
    };

    let count = count.min(config.max_samples.saturating_sub(knots_x.len()));
    trace!("sampling {mode:?} with {count} grid points over [{start}, {end}]");

    knots_x
        .iter()
        .copied()
        .merge(linspace(start, end, count))
        .dedup()
        .collect()
}

/// Points per unit of `x` that put [SamplerConfig::points_per_min_gap] points between the
/// two closest knots, but not less than [SamplerConfig::min_frequency] and not more than
/// fits [SamplerConfig::max_samples] over the whole `span`.
fn panning_frequency(knots_x: &[f64], span: f64, config: &SamplerConfig) -> f64 {
    let by_gap = match min_gap(knots_x) {
        Some(gap) if gap > 0.0 => config.points_per_min_gap / gap,
        _ => config.min_frequency,
    };
    by_gap
        .max(config.min_frequency)
        .min(config.max_samples as f64 / span)
}

fn linspace(start: f64, end: f64, count: usize) -> impl Iterator<Item = f64> {
    let step = if count > 1 { (end - start) / (count - 1) as f64 } else { 0.0 };
    (0..count).map(move |i| {
        if i + 1 == count && count > 1 {
            end
        } else {
            start + step * i as f64
        }
    })
}
