//! Scatter chart of score vs. chance of admission with a least-squares trendline.
//!
//! A pass is split into explicit steps composed by [`render::render_scatter`]:
//! axis ranges and the regression fit are computed independently, bundled
//! into a [`RenderContext`] together with the coordinate mapper, and only then
//! is anything drawn.

pub mod axes;
pub mod mapper;
pub mod primitives;
pub mod ranges;
pub mod render;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use axes::{AxisTicks, Tick};
pub use mapper::CoordinateMapper;
pub use ranges::{compute_axis_ranges, AxisRange, AxisRanges};
pub use render::{fit_regression, render_scatter, render_to_figure, RenderContext, RenderOutcome};

/// One input record: a test score and the matching admission probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Observation {
    /// Independent value, integer valued
    pub score: f64,
    /// Dependent value in [0, 1]
    pub chance: f64,
}

impl Observation {
    pub fn new(score: f64, chance: f64) -> Self {
        Observation { score, chance }
    }
}

/// A position on the drawing surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

/// Round half up (toward positive infinity) to `decimals` places.
pub(crate) fn round_half_up(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor + 0.5).floor() / factor
}
