//! Render summary structures
//!
//! A summary records what one rendering pass computed and drew, so the
//! chart can be checked or post-processed without parsing the SVG.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::chart::{AxisRanges, AxisTicks, CanvasPoint};
use crate::config::FrameMode;
use crate::stats::RegressionModel;

/// Top-level summary of one rendering pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RenderSummary {
    /// Program version
    pub version: String,

    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,

    /// Data file the observations were read from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Number of observations plotted
    pub observations: usize,

    /// Frame the coordinate mapper was built from
    pub frame: FrameMode,

    /// Rounded bounds per axis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_ranges: Option<AxisRanges>,

    /// Least-squares fit of chance on score
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regression: Option<RegressionModel>,

    /// Data origins of the coordinate mapper
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<DataOrigin>,

    /// Ticks drawn on both axes
    #[serde(default)]
    pub ticks: AxisTicks,

    /// Marker centers in pixels, in observation order
    #[serde(default)]
    pub markers: Vec<CanvasPoint>,

    /// Trendline endpoints in pixels
    #[serde(default)]
    pub regression_line: Vec<CanvasPoint>,
}

/// Data values mapped to the axis corner pixel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DataOrigin {
    pub score: f64,
    pub chance: f64,
}
