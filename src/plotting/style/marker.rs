//! Marker style for scatter observations.

use serde::Deserialize;

use super::color::Color;

/// Appearance of an observation marker: a filled circle with an outline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarkerStyle {
    /// Circle radius in pixels
    pub radius: f64,
    /// Fill color
    pub fill: Color,
    /// Outline color
    pub edge_color: Color,
    /// Outline width in pixels
    pub edge_width: f64,
}

/// 3px blue dot with a 1px dark green outline.
impl Default for MarkerStyle {
    fn default() -> Self {
        MarkerStyle {
            radius: 3.0,
            fill: Color::Rgb(0x42, 0x86, 0xf4),
            edge_color: Color::Rgb(0x00, 0x33, 0x00),
            edge_width: 1.0,
        }
    }
}
