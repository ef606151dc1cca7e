use std::io::Cursor;

use admitplot::chart::{
    compute_axis_ranges, render_to_figure, CanvasPoint, CoordinateMapper, RenderContext,
};
use admitplot::config::{FieldNames, FrameMode, PlotConfig};
use admitplot::input::read_observations;
use admitplot::output::schema::{validate, validate_summary};
use admitplot::output::SummaryCollector;

const DATA: &str = r#"[
    {"Serial No.": 1, "TOEFL Score": 91, "Chance of Admit": 0.34},
    {"Serial No.": 2, "TOEFL Score": "95", "Chance of Admit": "0.52"},
    {"Serial No.": 3, "TOEFL Score": 100, "Chance of Admit": 0.73},
    {"Serial No.": 4, "TOEFL Score": 120, "Chance of Admit": 0.91}
]"#;

// Extremes of the full admissions file: scores 92..120, chances 0.34..0.97
const FULL_RANGE: &str = r#"[
    {"Serial No.": 1, "TOEFL Score": 92, "Chance of Admit": 0.34},
    {"Serial No.": 2, "TOEFL Score": "104", "Chance of Admit": "0.72"},
    {"Serial No.": 3, "TOEFL Score": 110, "Chance of Admit": 0.8},
    {"Serial No.": 4, "TOEFL Score": 120, "Chance of Admit": 0.97}
]"#;

fn round2(v: f64) -> f64 {
    (v * 100.0 + 0.5).floor() / 100.0
}

#[test]
fn test_two_passes_are_identical() {
    let config = PlotConfig::default();
    let observations = read_observations(Cursor::new(DATA), &FieldNames::default()).unwrap();

    let (first_fig, first_ctx, first) = render_to_figure(&observations, &config).unwrap();
    let (second_fig, second_ctx, second) = render_to_figure(&observations, &config).unwrap();

    assert_eq!(first_ctx.ranges, second_ctx.ranges);
    assert_eq!(first_ctx.model, second_ctx.model);
    assert_eq!(first, second);
    assert_eq!(first_fig.render(), second_fig.render());
}

#[test]
fn test_default_config_draws_reference_pixels() {
    let config = PlotConfig::default();
    let observations = read_observations(Cursor::new(DATA), &FieldNames::default()).unwrap();
    let (_, ctx, outcome) = render_to_figure(&observations, &config).unwrap();

    assert_eq!(ctx.frame, FrameMode::Reference);
    assert_eq!(ctx.mapper.to_canvas(91.0, 0.3), CanvasPoint { x: 50.0, y: 450.0 });

    let expected: Vec<CanvasPoint> = observations
        .iter()
        .map(|o| CanvasPoint {
            x: (o.score - 91.0) * 25.0 + 50.0,
            y: 450.0 - (o.chance - 0.3) * 500.0,
        })
        .collect();
    assert_eq!(outcome.markers, expected);
    assert_eq!(outcome.markers[0].x, 50.0);

    // Trendline evaluated at scores 91 and 121
    assert_eq!(ctx.regression_domain, (91.0, 121.0));
    let [start, end] = outcome.regression_line;
    assert_eq!(start.x, 50.0);
    assert_eq!(end.x, 800.0);
    assert_eq!(start.y, 450.0 - (round2(ctx.model.predict(91.0)) - 0.3) * 500.0);
    assert_eq!(end.y, 450.0 - (round2(ctx.model.predict(121.0)) - 0.3) * 500.0);
}

#[test]
fn test_reference_frame_places_origin_at_axis_corner() {
    let config = PlotConfig {
        frame: FrameMode::Reference,
        ..PlotConfig::default()
    };
    let observations = read_observations(Cursor::new(DATA), &FieldNames::default()).unwrap();
    let ctx = RenderContext::build(&observations, &config).unwrap();

    assert_eq!(ctx.mapper, CoordinateMapper::reference(&config.layout));
    assert_eq!(ctx.mapper.to_canvas(91.0, 0.3), CanvasPoint { x: 50.0, y: 450.0 });
}

#[test]
fn test_derived_frame_matches_reference_on_full_range() {
    let observations = read_observations(Cursor::new(FULL_RANGE), &FieldNames::default()).unwrap();
    let ranges = compute_axis_ranges(&observations).unwrap();
    let layout = PlotConfig::default().layout;
    assert_eq!(
        CoordinateMapper::derived(&ranges, &layout),
        CoordinateMapper::reference(&layout)
    );

    let (_, _, outcome) = render_to_figure(&observations, &PlotConfig::default()).unwrap();
    assert_eq!(outcome.ticks.score.first().map(|t| t.value), Some(92.0));
    assert_eq!(outcome.ticks.score.last().map(|t| t.value), Some(120.0));
}

#[test]
fn test_svg_document_contents() {
    let config = PlotConfig::default();
    let observations = read_observations(Cursor::new(DATA), &FieldNames::default()).unwrap();
    let (figure, _, outcome) = render_to_figure(&observations, &config).unwrap();
    let svg = figure.render();

    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains("width=\"900\" height=\"520\""));
    assert!(svg.contains(">TOEFL Score</text>"));
    assert!(svg.contains(">Chance of Admit</text>"));
    // Fill then outline per marker
    assert_eq!(svg.matches("<circle").count(), 2 * observations.len());
    assert_eq!(outcome.markers.len(), observations.len());
    assert!(svg.contains("fill=\"#4286f4\""));
}

#[test]
fn test_summary_validates_against_schema() {
    let config = PlotConfig::default();
    let observations = read_observations(Cursor::new(DATA), &FieldNames::default()).unwrap();
    let (_, ctx, outcome) = render_to_figure(&observations, &config).unwrap();

    let summary = SummaryCollector::new()
        .with_source("admissions.json")
        .with_context(&ctx)
        .with_outcome(&outcome)
        .build();
    assert!(validate_summary(&summary).is_ok());
    let value = serde_json::to_value(&summary).unwrap();
    assert!(validate(&value).is_ok());
    assert_eq!(value["frame"], "reference");
    assert_eq!(value["observations"], 4);
}
