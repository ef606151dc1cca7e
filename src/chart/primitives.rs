//! Drawing primitives: observation markers, straight segments and the trendline.

use std::f64::consts::TAU;

use super::{round_half_up, CanvasPoint, CoordinateMapper, Observation};
use crate::plotting::backend::Canvas2d;
use crate::plotting::style::MarkerStyle;
use crate::stats::RegressionModel;

/// Stroke a straight segment with the canvas' current stroke state.
pub fn draw_line(canvas: &mut dyn Canvas2d, x1: f64, y1: f64, x2: f64, y2: f64) {
    canvas.begin_path();
    canvas.move_to(x1, y1);
    canvas.line_to(x2, y2);
    canvas.stroke();
}

/// Draw a filled, outlined circle centered at `point`.
///
/// Leaves the marker's fill and stroke settings on the canvas, so segments
/// stroked afterwards (the trendline) use the marker outline color.
pub fn draw_marker(canvas: &mut dyn Canvas2d, style: &MarkerStyle, point: CanvasPoint) {
    canvas.begin_path();
    canvas.arc(point.x, point.y, style.radius, 0.0, TAU);
    canvas.set_fill_style(&style.fill);
    canvas.fill();
    canvas.set_line_width(style.edge_width);
    canvas.set_stroke_style(&style.edge_color);
    canvas.stroke();
}

/// Synthetic observation on the trendline at `score`, with the predicted
/// chance optionally rounded to `decimals`.
pub fn regression_point(model: &RegressionModel, score: f64, decimals: Option<u32>) -> Observation {
    let chance = model.predict(score);
    let chance = match decimals {
        Some(d) => round_half_up(chance, d),
        None => chance,
    };
    Observation::new(score, chance)
}

/// Evaluate the trendline at both ends of `domain`, map the two points to
/// pixels and stroke the segment between them. Returns the pixel endpoints.
pub fn draw_regression_line(
    canvas: &mut dyn Canvas2d,
    model: &RegressionModel,
    mapper: &CoordinateMapper,
    domain: (f64, f64),
    decimals: Option<u32>,
) -> [CanvasPoint; 2] {
    let start = regression_point(model, domain.0, decimals);
    let end = regression_point(model, domain.1, decimals);

    let start = mapper.to_canvas(start.score, start.chance);
    let end = mapper.to_canvas(end.score, end.chance);

    draw_line(canvas, start.x, start.y, end.x, end.y);
    [start, end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::backend::SvgBackend;

    #[test]
    fn test_marker_is_filled_then_outlined() {
        let mut svg = SvgBackend::default();
        draw_marker(&mut svg, &MarkerStyle::default(), CanvasPoint { x: 75.0, y: 430.0 });

        let elements = svg.elements();
        assert_eq!(elements.len(), 2);
        assert_eq!(
            elements[0],
            "<circle cx=\"75.00\" cy=\"430.00\" r=\"3.00\" fill=\"#4286f4\" stroke=\"none\"/>"
        );
        assert_eq!(
            elements[1],
            "<circle cx=\"75.00\" cy=\"430.00\" r=\"3.00\" fill=\"none\" stroke=\"#003300\" stroke-width=\"1\"/>"
        );
    }

    #[test]
    fn test_regression_point_rounds_prediction() {
        let model = RegressionModel { slope: 0.0123, intercept: -0.5 };
        let p = regression_point(&model, 100.0, Some(2));
        assert_eq!(p.chance, 0.73);
        assert_eq!(p.score, 100.0);

        let p = regression_point(&model, 100.0, None);
        assert!((p.chance - 0.73).abs() < 1e-12);
    }

    #[test]
    fn test_regression_line_endpoints() {
        let mut svg = SvgBackend::default();
        // chance = 0.02 * score - 1.52: 0.30 at 91, 0.90 at 121
        let model = RegressionModel { slope: 0.02, intercept: -1.52 };
        let [start, end] = draw_regression_line(
            &mut svg,
            &model,
            &CoordinateMapper::reference(&crate::config::Layout::default()),
            (91.0, 121.0),
            Some(2),
        );

        assert!((start.x - 50.0).abs() < 1e-9 && (start.y - 450.0).abs() < 1e-9);
        assert!((end.x - 800.0).abs() < 1e-9 && (end.y - 150.0).abs() < 1e-9);
        assert!(svg.elements()[0].starts_with("<line x1=\"50.00\" y1=\"450.00\" x2=\"800.00\" y2=\"150.00\""));
    }
}
