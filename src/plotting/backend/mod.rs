//! Drawing surfaces.
//!
//! The chart is drawn through [`Canvas2d`], an immediate-mode interface shaped
//! after a browser 2D context: build a path, then fill or stroke it with the
//! current state. [`SvgBackend`] records those calls as SVG elements.

mod svg;

pub use svg::SvgBackend;

use crate::plotting::style::{Color, TextStyle};

/// Immediate-mode 2D drawing context.
///
/// Style setters change state for every later call until set again; nothing
/// is reset between paths.
pub trait Canvas2d {
    /// Discard the current path and start a new one.
    fn begin_path(&mut self);

    /// Start a new subpath at the given point.
    fn move_to(&mut self, x: f64, y: f64);

    /// Add a straight segment from the current point.
    fn line_to(&mut self, x: f64, y: f64);

    /// Add a clockwise circular arc centered at `(x, y)`. Angles are in
    /// radians, measured from the positive x axis.
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);

    /// Set the color used by `fill` and `fill_text`.
    fn set_fill_style(&mut self, color: &Color);

    /// Set the color used by `stroke`.
    fn set_stroke_style(&mut self, color: &Color);

    /// Set the stroke width in pixels.
    fn set_line_width(&mut self, width: f64);

    /// Set the font used by `fill_text`.
    fn set_font(&mut self, style: &TextStyle);

    /// Fill the current path.
    fn fill(&mut self);

    /// Stroke the current path.
    fn stroke(&mut self);

    /// Paint text with its baseline origin at `(x, y)`.
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}
