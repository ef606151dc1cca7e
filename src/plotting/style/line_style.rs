//! Stroke styling for lines and outlines.

use super::color::Color;

/// Stroke state of the canvas: color and width in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    pub width: f64,
}

impl LineStyle {
    /// Generate SVG style attributes.
    pub fn to_svg_style(&self) -> String {
        format!(
            "fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"",
            self.color.to_svg_string(),
            self.width
        )
    }
}

/// Matches the initial state of a 2D canvas context: 1px black.
impl Default for LineStyle {
    fn default() -> Self {
        LineStyle {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}
