//! Fill styling for closed shapes.

use super::color::Color;

/// Fill state of the canvas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FillStyle {
    pub color: Color,
}

impl FillStyle {
    pub fn new(color: Color) -> Self {
        FillStyle { color }
    }

    /// Generate SVG style attributes. Fills never carry a stroke; outlines are
    /// emitted as their own stroked element.
    pub fn to_svg_style(&self) -> String {
        format!("fill=\"{}\" stroke=\"none\"", self.color.to_svg_string())
    }
}
