//! Axis lines, tick marks and axis titles.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::primitives::draw_line;
use super::{round_half_up, AxisRange, AxisRanges};
use crate::config::{Layout, TickLayout};
use crate::plotting::backend::Canvas2d;
use crate::plotting::element::format_label;

/// A tick that was drawn: its labelled value and its pixel along the axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Tick {
    pub value: f64,
    pub pixel: f64,
}

/// Ticks drawn on both axes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AxisTicks {
    pub score: Vec<Tick>,
    pub chance: Vec<Tick>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Horizontal,
    Vertical,
}

/// Draw the vertical and horizontal axis lines meeting at the origin pixel.
pub fn draw_axes_lines(canvas: &mut dyn Canvas2d, layout: &Layout) {
    draw_line(canvas, layout.origin_x, layout.axis_y_end, layout.origin_x, layout.origin_y);
    draw_line(canvas, layout.origin_x, layout.origin_y, layout.axis_x_end, layout.origin_y);
}

/// Draw tick marks and labels on both axes.
pub fn draw_axes_ticks(canvas: &mut dyn Canvas2d, layout: &Layout, ranges: &AxisRanges) -> AxisTicks {
    AxisTicks {
        score: draw_tick_run(canvas, &layout.score_ticks, &ranges.score, Orientation::Horizontal),
        chance: draw_tick_run(canvas, &layout.chance_ticks, &ranges.chance, Orientation::Vertical),
    }
}

/// Draw both axis titles. The chance title's height follows the chance
/// axis maximum.
pub fn draw_axis_titles(
    canvas: &mut dyn Canvas2d,
    layout: &Layout,
    ranges: &AxisRanges,
    score_title: &str,
    chance_title: &str,
) {
    canvas.fill_text(score_title, layout.score_title_x, layout.score_title_y);
    canvas.fill_text(
        chance_title,
        layout.chance_title_x,
        ranges.chance.max + layout.chance_title_dy,
    );
}

/// Step a pixel cursor and a value counter together, stopping at whichever
/// bound is hit first: the cursor reaching the limit pixel or the value
/// exceeding the axis maximum.
fn draw_tick_run(
    canvas: &mut dyn Canvas2d,
    ticks: &TickLayout,
    range: &AxisRange,
    orientation: Orientation,
) -> Vec<Tick> {
    let mut drawn = Vec::new();
    let mut value = range.min;
    let mut px = ticks.first_px;

    while ticks.in_bounds(px) {
        if let Some(decimals) = ticks.label_decimals {
            value = round_half_up(value, decimals);
        }
        if value > range.max {
            break;
        }

        let label = format_label(value);
        match orientation {
            Orientation::Horizontal => {
                draw_line(canvas, px, ticks.mark_from, px, ticks.mark_to);
                canvas.fill_text(&label, px + ticks.label_shift, ticks.label_cross);
            }
            Orientation::Vertical => {
                draw_line(canvas, ticks.mark_from, px, ticks.mark_to, px);
                canvas.fill_text(&label, ticks.label_cross, px + ticks.label_shift);
            }
        }
        drawn.push(Tick { value, pixel: px });

        value += ticks.value_step;
        px += ticks.stride_px;
    }

    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::backend::SvgBackend;

    fn ranges(score: (f64, f64), chance: (f64, f64)) -> AxisRanges {
        AxisRanges {
            score: AxisRange { min: score.0, max: score.1 },
            chance: AxisRange { min: chance.0, max: chance.1 },
        }
    }

    #[test]
    fn test_score_ticks_stop_at_axis_max() {
        let mut svg = SvgBackend::default();
        let ticks = draw_axes_ticks(&mut svg, &Layout::default(), &ranges((91.0, 120.0), (0.35, 0.95)));

        assert_eq!(ticks.score.len(), 30);
        assert_eq!(ticks.score[0], Tick { value: 91.0, pixel: 75.0 });
        assert_eq!(ticks.score[29], Tick { value: 120.0, pixel: 800.0 });
    }

    #[test]
    fn test_score_ticks_stop_at_pixel_limit() {
        let mut svg = SvgBackend::default();
        let ticks = draw_axes_ticks(&mut svg, &Layout::default(), &ranges((0.0, 100.0), (0.35, 0.95)));

        // Cursor runs 75, 100, ..., 825
        assert_eq!(ticks.score.len(), 31);
        assert_eq!(ticks.score.last().unwrap().pixel, 825.0);
    }

    #[test]
    fn test_chance_labels_are_rounded_before_drawing() {
        let mut svg = SvgBackend::default();
        let ticks = draw_axes_ticks(&mut svg, &Layout::default(), &ranges((91.0, 120.0), (0.35, 0.95)));

        let values: Vec<f64> = ticks.chance.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![0.4, 0.5, 0.6, 0.7, 0.8, 0.9]);
        let pixels: Vec<f64> = ticks.chance.iter().map(|t| t.pixel).collect();
        assert_eq!(pixels, vec![400.0, 350.0, 300.0, 250.0, 200.0, 150.0]);

        let labels: Vec<&String> = svg
            .elements()
            .iter()
            .filter(|e| e.starts_with("<text x=\"15.00\""))
            .collect();
        assert_eq!(labels.len(), 6);
        assert!(labels[0].contains("y=\"405.00\"") && labels[0].ends_with(">0.4</text>"));
    }

    #[test]
    fn test_tick_marks_and_labels_geometry() {
        let mut svg = SvgBackend::default();
        draw_axes_ticks(&mut svg, &Layout::default(), &ranges((92.0, 92.0), (0.5, 0.5)));

        // One tick per axis: mark then label
        let elements = svg.elements();
        assert_eq!(elements.len(), 4);
        assert!(elements[0].starts_with("<line x1=\"75.00\" y1=\"440.00\" x2=\"75.00\" y2=\"460.00\""));
        assert!(elements[1].starts_with("<text x=\"70.00\" y=\"470.00\""));
        assert!(elements[1].ends_with(">92</text>"));
        assert!(elements[2].starts_with("<line x1=\"40.00\" y1=\"400.00\" x2=\"60.00\" y2=\"400.00\""));
        assert!(elements[3].starts_with("<text x=\"15.00\" y=\"405.00\""));
        assert!(elements[3].ends_with(">0.5</text>"));
    }

    #[test]
    fn test_axes_lines_and_titles() {
        let mut svg = SvgBackend::default();
        let layout = Layout::default();
        draw_axes_lines(&mut svg, &layout);
        draw_axis_titles(&mut svg, &layout, &ranges((91.0, 120.0), (0.35, 1.0)), "TOEFL Score", "Chance of Admit");

        let elements = svg.elements();
        assert!(elements[0].starts_with("<line x1=\"50.00\" y1=\"50.00\" x2=\"50.00\" y2=\"450.00\""));
        assert!(elements[1].starts_with("<line x1=\"50.00\" y1=\"450.00\" x2=\"850.00\" y2=\"450.00\""));
        assert!(elements[2].starts_with("<text x=\"450.00\" y=\"500.00\""));
        assert!(elements[3].starts_with("<text x=\"10.00\" y=\"31.00\""));
    }
}
