//! Text styling options.

use serde::Deserialize;

/// Text anchor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    /// Anchor at the start (left for LTR text)
    #[default]
    Start,
    /// Anchor at the middle
    Middle,
    /// Anchor at the end (right for LTR text)
    End,
}

impl TextAnchor {
    pub fn to_svg_string(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Font settings for text drawn on the canvas. The text color is not part of
/// the style: like a 2D canvas context, text is painted with the current fill.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    /// Font family (e.g., "Arial", "sans-serif")
    pub font_family: String,
    /// Font size in pixels
    pub font_size: f64,
    /// Horizontal anchor
    pub anchor: TextAnchor,
}

impl TextStyle {
    /// Generate SVG font attributes (excluding position and fill).
    pub fn to_svg_attrs(&self) -> String {
        let mut attrs = vec![
            format!("font-family=\"{}\"", self.font_family),
            format!("font-size=\"{}\"", self.font_size),
        ];
        if self.anchor != TextAnchor::Start {
            attrs.push(format!("text-anchor=\"{}\"", self.anchor.to_svg_string()));
        }
        attrs.join(" ")
    }
}

/// `10px sans-serif`, the initial font of a 2D canvas context.
impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            font_family: "sans-serif".to_string(),
            font_size: 10.0,
            anchor: TextAnchor::Start,
        }
    }
}
