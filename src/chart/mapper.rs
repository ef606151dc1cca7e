//! Data-space to pixel-space transform.

use super::{round_half_up, AxisRanges, CanvasPoint};
use crate::config::Layout;

/// Score shown at the origin pixel of the reference chart.
pub const REFERENCE_SCORE_ORIGIN: f64 = 91.0;
/// Chance shown at the origin pixel of the reference chart.
pub const REFERENCE_CHANCE_ORIGIN: f64 = 0.3;
/// Scores at which the reference chart evaluates its trendline.
pub const REFERENCE_REGRESSION_DOMAIN: (f64, f64) = (91.0, 121.0);

/// Affine map from (score, chance) to canvas pixels.
///
/// `x = origin_px.x + (score - score_origin) * x_scale`
/// `y = origin_px.y - (chance - chance_origin) * y_scale`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    pub score_origin: f64,
    pub chance_origin: f64,
    pub origin_px: CanvasPoint,
    pub x_scale: f64,
    pub y_scale: f64,
}

impl CoordinateMapper {
    /// The reference transform on `layout`. With the default layout this is
    /// `x = (score - 91) * 25 + 50`, `y = 450 - (chance - 0.3) * 500`.
    pub fn reference(layout: &Layout) -> Self {
        Self::with_origins(REFERENCE_SCORE_ORIGIN, REFERENCE_CHANCE_ORIGIN, layout)
    }

    /// A transform with the given data origins and the layout's scales.
    pub fn with_origins(score_origin: f64, chance_origin: f64, layout: &Layout) -> Self {
        CoordinateMapper {
            score_origin,
            chance_origin,
            origin_px: CanvasPoint {
                x: layout.origin_x,
                y: layout.origin_y,
            },
            x_scale: layout.score_ticks.px_per_unit,
            y_scale: layout.chance_ticks.px_per_unit,
        }
    }

    /// Place the origins so the mapper agrees with the tick marks.
    ///
    /// The first tick of each axis is drawn one stride from the origin pixel
    /// and labelled with the (rounded) axis minimum, so the origin value sits
    /// one value step below it.
    pub fn derived(ranges: &AxisRanges, layout: &Layout) -> Self {
        let score_ticks = &layout.score_ticks;
        let chance_ticks = &layout.chance_ticks;

        let score_origin = first_label(ranges.score.min, score_ticks.label_decimals)
            - score_ticks.value_step;
        let chance_origin = first_label(ranges.chance.min, chance_ticks.label_decimals)
            - chance_ticks.value_step;

        // Undo the drift of the subtraction (0.4 - 0.1) when labels are rounded
        let score_origin = first_label(score_origin, score_ticks.label_decimals);
        let chance_origin = first_label(chance_origin, chance_ticks.label_decimals);

        Self::with_origins(score_origin, chance_origin, layout)
    }

    /// Whether the reference window holds both axis ranges: scores within the
    /// reference trendline domain, chances between the reference origin and
    /// the top of the vertical axis.
    pub fn reference_fits(ranges: &AxisRanges, layout: &Layout) -> bool {
        let chance_top = REFERENCE_CHANCE_ORIGIN
            + (layout.origin_y - layout.axis_y_end) / layout.chance_ticks.px_per_unit;
        let (score_lo, score_hi) = REFERENCE_REGRESSION_DOMAIN;

        ranges.score.min >= score_lo
            && ranges.score.max <= score_hi
            && ranges.chance.min >= REFERENCE_CHANCE_ORIGIN
            && ranges.chance.max <= chance_top
    }

    /// Map a data point to canvas pixels.
    pub fn to_canvas(&self, score: f64, chance: f64) -> CanvasPoint {
        CanvasPoint {
            x: (score - self.score_origin) * self.x_scale + self.origin_px.x,
            y: self.origin_px.y - (chance - self.chance_origin) * self.y_scale,
        }
    }
}

fn first_label(value: f64, decimals: Option<u32>) -> f64 {
    match decimals {
        Some(d) => round_half_up(value, d),
        None => value,
    }
}
