//! Plot configuration.
//!
//! Every field has a default reproducing the reference TOEFL chart, so a
//! configuration file only needs the keys it overrides:
//!
//! ```json
//! { "marker": { "radius": 4, "fill": "#d62728" }, "frame": "reference" }
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;

use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::style::{Color, MarkerStyle, TextStyle};

// ============================================================================
// Frame selection
// ============================================================================

/// How data values are placed on the canvas.
#[derive(
    Deserialize, Serialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FrameMode {
    /// Reference origins while the data fits the reference window, otherwise
    /// origins follow the computed axis ranges, aligned with the tick marks
    #[default]
    Derived,
    /// Fixed origins at score 91 / chance 0.3, trendline over 91..121
    Reference,
}

// ============================================================================
// Layout
// ============================================================================

/// Geometry of the ticks along one axis.
///
/// The pixel cursor starts at `first_px` and moves by `stride_px` per tick
/// (negative strides move up the screen) until it reaches `limit_px`. Each
/// step advances the labelled value by `value_step`. An override in a
/// configuration file replaces the whole tick layout of that axis.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TickLayout {
    /// Pixel position of the first tick along the axis
    pub first_px: f64,
    /// Signed pixel distance between ticks
    pub stride_px: f64,
    /// Ticks stop before the cursor reaches this pixel
    pub limit_px: f64,
    /// Value increment per tick
    pub value_step: f64,
    /// Pixels per data unit used by the coordinate mapper
    pub px_per_unit: f64,
    /// Round the running label to this many decimals before each tick
    pub label_decimals: Option<u32>,
    /// Tick mark extent across the axis (absolute pixels)
    pub mark_from: f64,
    pub mark_to: f64,
    /// Label offset along the axis, relative to the tick
    pub label_shift: f64,
    /// Label position across the axis (absolute pixels)
    pub label_cross: f64,
}

impl TickLayout {
    /// Whether the cursor has not yet reached the limit.
    pub fn in_bounds(&self, px: f64) -> bool {
        if self.stride_px > 0.0 {
            px < self.limit_px
        } else {
            px > self.limit_px
        }
    }

    fn score_default() -> Self {
        TickLayout {
            first_px: 75.0,
            stride_px: 25.0,
            limit_px: 850.0,
            value_step: 1.0,
            px_per_unit: 25.0,
            label_decimals: None,
            mark_from: 440.0,
            mark_to: 460.0,
            label_shift: -5.0,
            label_cross: 470.0,
        }
    }

    fn chance_default() -> Self {
        TickLayout {
            first_px: 400.0,
            stride_px: -50.0,
            limit_px: 50.0,
            value_step: 0.1,
            px_per_unit: 500.0,
            label_decimals: Some(1),
            mark_from: 40.0,
            mark_to: 60.0,
            label_shift: 5.0,
            label_cross: 15.0,
        }
    }

    fn validate(&self, axis: &str) -> PlotResult<()> {
        if self.stride_px == 0.0 || !self.stride_px.is_finite() {
            return Err(PlotError::InvalidConfig(format!(
                "{} tick stride must be a non-zero number",
                axis
            )));
        }
        if !(self.value_step > 0.0) || !(self.px_per_unit > 0.0) {
            return Err(PlotError::InvalidConfig(format!(
                "{} value step and pixels per unit must be positive",
                axis
            )));
        }
        Ok(())
    }
}

/// Fixed pixel anchors of the chart.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Layout {
    /// Pixel where the two axis lines meet
    pub origin_x: f64,
    pub origin_y: f64,
    /// Right end of the horizontal axis line
    pub axis_x_end: f64,
    /// Top end of the vertical axis line
    pub axis_y_end: f64,
    pub score_ticks: TickLayout,
    pub chance_ticks: TickLayout,
    pub score_title_x: f64,
    pub score_title_y: f64,
    pub chance_title_x: f64,
    /// The chance title's y pixel is the chance-axis max value plus this
    pub chance_title_dy: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            origin_x: 50.0,
            origin_y: 450.0,
            axis_x_end: 850.0,
            axis_y_end: 50.0,
            score_ticks: TickLayout::score_default(),
            chance_ticks: TickLayout::chance_default(),
            score_title_x: 450.0,
            score_title_y: 500.0,
            chance_title_x: 10.0,
            chance_title_dy: 30.0,
        }
    }
}

// ============================================================================
// Input fields and titles
// ============================================================================

/// Keys of the two numeric fields in each input record.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FieldNames {
    pub score: String,
    pub chance: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        FieldNames {
            score: "TOEFL Score".to_string(),
            chance: "Chance of Admit".to_string(),
        }
    }
}

// ============================================================================
// Plot Configuration
// ============================================================================

/// Complete configuration of one rendering pass.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PlotConfig {
    /// Canvas size in pixels
    pub width: f64,
    pub height: f64,
    pub background: Color,
    pub frame: FrameMode,
    pub layout: Layout,
    pub marker: MarkerStyle,
    pub font: TextStyle,
    pub fields: FieldNames,
    pub score_title: String,
    pub chance_title: String,
    /// Decimals kept when evaluating the trendline at its endpoints
    pub regression_decimals: Option<u32>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            width: 900.0,
            height: 520.0,
            background: Color::WHITE,
            frame: FrameMode::Derived,
            layout: Layout::default(),
            marker: MarkerStyle::default(),
            font: TextStyle::default(),
            fields: FieldNames::default(),
            score_title: "TOEFL Score".to_string(),
            chance_title: "Chance of Admit".to_string(),
            regression_decimals: Some(2),
        }
    }
}

impl PlotConfig {
    /// Load plot configuration from a JSON file
    pub fn load(path: &str) -> std::io::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: PlotConfig = serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        config
            .validate()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        Ok(config)
    }

    /// Reject settings that would make the tick loops or the mapper degenerate.
    pub fn validate(&self) -> PlotResult<()> {
        if !(self.width > 0.0) || !(self.height > 0.0) {
            return Err(PlotError::InvalidConfig(
                "canvas width and height must be positive".to_string(),
            ));
        }
        self.layout.score_ticks.validate("score")?;
        self.layout.chance_ticks.validate("chance")?;
        Ok(())
    }
}
