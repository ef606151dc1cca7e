//! SVG rendering backend.

use std::f64::consts::{PI, TAU};
use std::fmt::Write as _;

use super::Canvas2d;
use crate::plotting::element::escape_xml;
use crate::plotting::style::{Color, FillStyle, LineStyle, TextStyle};

/// One command of the path under construction.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PathOp {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Arc {
        cx: f64,
        cy: f64,
        r: f64,
        start: f64,
        end: f64,
    },
}

/// SVG rendering backend.
///
/// Every `fill`, `stroke` and `fill_text` call appends one SVG element, so the
/// document keeps the painter's order of the drawing calls.
#[derive(Debug)]
pub struct SvgBackend {
    /// Image width in pixels
    pub width: f64,
    /// Image height in pixels
    pub height: f64,
    /// SVG elements accumulated during rendering
    content: Vec<String>,
    /// Path built since the last `begin_path`
    path: Vec<PathOp>,
    fill: FillStyle,
    line: LineStyle,
    font: TextStyle,
}

impl SvgBackend {
    /// Create a new SVG backend with the given dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        SvgBackend {
            width,
            height,
            content: Vec::new(),
            path: Vec::new(),
            fill: FillStyle::default(),
            line: LineStyle::default(),
            font: TextStyle::default(),
        }
    }

    /// Paint the whole surface with a solid color.
    pub fn background(&mut self, color: &Color) {
        self.content.push(format!(
            "<rect width=\"{}\" height=\"{}\" {}/>",
            self.width,
            self.height,
            FillStyle::new(color.clone()).to_svg_style()
        ));
    }

    /// Elements emitted so far, in drawing order.
    pub fn elements(&self) -> &[String] {
        &self.content
    }

    /// Render the final SVG document.
    pub fn render(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">
  {}
</svg>"#,
            self.width,
            self.height,
            self.width,
            self.height,
            self.content.join("\n  ")
        )
    }

    fn emit_path(&mut self, style: String) {
        if let Some(element) = shape_element(&self.path, &style) {
            self.content.push(element);
        }
    }
}

impl Default for SvgBackend {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl Canvas2d for SvgBackend {
    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.push(PathOp::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.push(PathOp::LineTo(x, y));
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.path.push(PathOp::Arc {
            cx: x,
            cy: y,
            r: radius,
            start: start_angle,
            end: end_angle,
        });
    }

    fn set_fill_style(&mut self, color: &Color) {
        self.fill.color = color.clone();
    }

    fn set_stroke_style(&mut self, color: &Color) {
        self.line.color = color.clone();
    }

    fn set_line_width(&mut self, width: f64) {
        self.line.width = width;
    }

    fn set_font(&mut self, style: &TextStyle) {
        self.font = style.clone();
    }

    fn fill(&mut self) {
        let style = self.fill.to_svg_style();
        self.emit_path(style);
    }

    fn stroke(&mut self) {
        let style = self.line.to_svg_style();
        self.emit_path(style);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.content.push(format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" {} fill=\"{}\">{}</text>",
            x,
            y,
            self.font.to_svg_attrs(),
            self.fill.color.to_svg_string(),
            escape_xml(text)
        ));
    }
}

/// Pick the simplest SVG element that draws `path`.
fn shape_element(path: &[PathOp], style: &str) -> Option<String> {
    match path {
        [] => None,
        [PathOp::Arc { cx, cy, r, start, end }] if (end - start).abs() >= TAU => Some(format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" {}/>",
            cx, cy, r, style
        )),
        [PathOp::MoveTo(x1, y1), PathOp::LineTo(x2, y2)] => Some(format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>",
            x1, y1, x2, y2, style
        )),
        _ => Some(format!("<path d=\"{}\" {}/>", path_data(path), style)),
    }
}

fn path_data(path: &[PathOp]) -> String {
    let mut d = String::new();
    let mut has_current = false;
    for op in path {
        match *op {
            PathOp::MoveTo(x, y) => {
                let _ = write!(d, "M{:.2},{:.2}", x, y);
            }
            // A lineTo without a current point behaves as moveTo
            PathOp::LineTo(x, y) => {
                let cmd = if has_current { 'L' } else { 'M' };
                let _ = write!(d, "{}{:.2},{:.2}", cmd, x, y);
            }
            PathOp::Arc { cx, cy, r, start, end } => {
                let point = |angle: f64| (cx + r * angle.cos(), cy + r * angle.sin());
                let (sx, sy) = point(start);
                let cmd = if has_current { 'L' } else { 'M' };
                let _ = write!(d, "{}{:.2},{:.2}", cmd, sx, sy);

                let sweep = end - start;
                if sweep.abs() >= TAU {
                    // SVG cannot draw a closed arc in one command
                    let (mx, my) = point(start + PI);
                    let _ = write!(d, "A{:.2},{:.2} 0 1,1 {:.2},{:.2}", r, r, mx, my);
                    let _ = write!(d, "A{:.2},{:.2} 0 1,1 {:.2},{:.2}", r, r, sx, sy);
                } else {
                    let sweep = sweep.rem_euclid(TAU);
                    let (ex, ey) = point(start + sweep);
                    let large = if sweep > PI { 1 } else { 0 };
                    let _ = write!(d, "A{:.2},{:.2} 0 {},1 {:.2},{:.2}", r, r, large, ex, ey);
                }
            }
        }
        has_current = true;
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_becomes_line_element() {
        let mut svg = SvgBackend::new(100.0, 100.0);
        svg.begin_path();
        svg.move_to(50.0, 50.0);
        svg.line_to(50.0, 450.0);
        svg.stroke();

        assert_eq!(
            svg.elements(),
            &["<line x1=\"50.00\" y1=\"50.00\" x2=\"50.00\" y2=\"450.00\" fill=\"none\" stroke=\"#000000\" stroke-width=\"1\"/>".to_string()]
        );
    }

    #[test]
    fn test_full_arc_fill_then_stroke_emits_two_circles() {
        let mut svg = SvgBackend::new(100.0, 100.0);
        svg.begin_path();
        svg.arc(10.0, 20.0, 3.0, 0.0, TAU);
        svg.set_fill_style(&Color::Rgb(0x42, 0x86, 0xf4));
        svg.fill();
        svg.set_line_width(1.0);
        svg.set_stroke_style(&Color::Rgb(0, 0x33, 0));
        svg.stroke();

        let elements = svg.elements();
        assert_eq!(elements.len(), 2);
        assert!(elements[0].starts_with("<circle cx=\"10.00\" cy=\"20.00\" r=\"3.00\" fill=\"#4286f4\""));
        assert!(elements[1].contains("fill=\"none\" stroke=\"#003300\""));
    }

    #[test]
    fn test_state_persists_across_paths() {
        let mut svg = SvgBackend::new(100.0, 100.0);
        svg.set_stroke_style(&Color::Rgb(0, 0x33, 0));
        svg.begin_path();
        svg.move_to(0.0, 0.0);
        svg.line_to(1.0, 1.0);
        svg.stroke();
        svg.begin_path();
        svg.move_to(2.0, 2.0);
        svg.line_to(3.0, 3.0);
        svg.stroke();

        assert!(svg.elements().iter().all(|e| e.contains("stroke=\"#003300\"")));
    }

    #[test]
    fn test_polyline_and_partial_arc_use_path_data() {
        let mut svg = SvgBackend::new(100.0, 100.0);
        svg.begin_path();
        svg.line_to(0.0, 0.0);
        svg.line_to(10.0, 0.0);
        svg.arc(10.0, 10.0, 10.0, -PI / 2.0, 0.0);
        svg.stroke();

        assert_eq!(
            svg.elements()[0],
            "<path d=\"M0.00,0.00L10.00,0.00L10.00,0.00A10.00,10.00 0 0,1 20.00,10.00\" fill=\"none\" stroke=\"#000000\" stroke-width=\"1\"/>"
        );
    }

    #[test]
    fn test_text_is_escaped_and_uses_fill_color() {
        let mut svg = SvgBackend::new(100.0, 100.0);
        svg.fill_text("a<b", 15.0, 405.0);
        let doc = svg.render();
        assert!(doc.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg"));
        assert!(doc.contains(
            "<text x=\"15.00\" y=\"405.00\" font-family=\"sans-serif\" font-size=\"10\" fill=\"#000000\">a&lt;b</text>"
        ));
    }
}
