//! Styling module.
//!
//! Colors, stroke and fill styles, fonts and the observation marker.

pub mod color;
pub mod fill_style;
pub mod line_style;
pub mod marker;
pub mod text_style;

pub use color::Color;
pub use fill_style::FillStyle;
pub use line_style::LineStyle;
pub use marker::MarkerStyle;
pub use text_style::{TextAnchor, TextStyle};
