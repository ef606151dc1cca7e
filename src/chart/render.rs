//! One rendering pass: ranges, fit, axes, markers, trendline.

use log::{debug, info};

use super::axes::{draw_axes_lines, draw_axes_ticks, draw_axis_titles, AxisTicks};
use super::mapper::REFERENCE_REGRESSION_DOMAIN;
use super::primitives::{draw_marker, draw_regression_line};
use super::{compute_axis_ranges, AxisRanges, CanvasPoint, CoordinateMapper, Observation};
use crate::config::{FrameMode, PlotConfig};
use crate::plotting::backend::Canvas2d;
use crate::plotting::error::PlotResult;
use crate::plotting::figure::Figure;
use crate::stats::{linear_regression, RegressionModel};

/// Fit the trendline of chance on score over all observations.
pub fn fit_regression(observations: &[Observation]) -> PlotResult<RegressionModel> {
    let scores: Vec<f64> = observations.iter().map(|o| o.score).collect();
    let chances: Vec<f64> = observations.iter().map(|o| o.chance).collect();
    linear_regression(&scores, &chances)
}

/// Everything a pass needs before it draws, computed once up front.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub ranges: AxisRanges,
    pub model: RegressionModel,
    pub mapper: CoordinateMapper,
    /// Frame the mapper was built from, after falling back to the reference
    /// frame when the data fits it
    pub frame: FrameMode,
    /// Scores at which the trendline is evaluated
    pub regression_domain: (f64, f64),
    pub config: &'a PlotConfig,
}

impl<'a> RenderContext<'a> {
    /// Compute ranges and the regression fit for `observations`.
    pub fn build(observations: &[Observation], config: &'a PlotConfig) -> PlotResult<Self> {
        config.validate()?;
        let ranges = compute_axis_ranges(observations)?;
        let model = fit_regression(observations)?;
        Ok(Self::new(ranges, model, config))
    }

    /// Assemble a context from precomputed ranges and fit.
    ///
    /// A derived frame whose ranges fit the reference window uses the
    /// reference origins and trendline domain, so reference data keeps its
    /// reference pixels.
    pub fn new(ranges: AxisRanges, model: RegressionModel, config: &'a PlotConfig) -> Self {
        let layout = &config.layout;
        let frame = match config.frame {
            FrameMode::Derived if CoordinateMapper::reference_fits(&ranges, layout) => {
                FrameMode::Reference
            }
            frame => frame,
        };
        let (mapper, regression_domain) = match frame {
            FrameMode::Reference => (CoordinateMapper::reference(layout), REFERENCE_REGRESSION_DOMAIN),
            FrameMode::Derived => {
                let step = layout.score_ticks.value_step;
                (
                    CoordinateMapper::derived(&ranges, layout),
                    (ranges.score.min - step, ranges.score.max + step),
                )
            }
        };
        debug!("Using {:?} frame (configured {:?})", frame, config.frame);

        RenderContext {
            ranges,
            model,
            mapper,
            frame,
            regression_domain,
            config,
        }
    }
}

/// What a pass drew, in canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutcome {
    pub ticks: AxisTicks,
    pub markers: Vec<CanvasPoint>,
    pub regression_line: [CanvasPoint; 2],
}

/// Draw the complete chart for `observations` onto `canvas`.
pub fn render_scatter(
    canvas: &mut dyn Canvas2d,
    observations: &[Observation],
    ctx: &RenderContext<'_>,
) -> RenderOutcome {
    let config = ctx.config;
    let layout = &config.layout;

    canvas.set_font(&config.font);
    draw_axes_lines(canvas, layout);
    let ticks = draw_axes_ticks(canvas, layout, &ctx.ranges);
    draw_axis_titles(
        canvas,
        layout,
        &ctx.ranges,
        &config.score_title,
        &config.chance_title,
    );
    debug!(
        "Drew {} score ticks and {} chance ticks",
        ticks.score.len(),
        ticks.chance.len()
    );

    let markers: Vec<CanvasPoint> = observations
        .iter()
        .map(|o| {
            let point = ctx.mapper.to_canvas(o.score, o.chance);
            draw_marker(canvas, &config.marker, point);
            point
        })
        .collect();

    let regression_line = draw_regression_line(
        canvas,
        &ctx.model,
        &ctx.mapper,
        ctx.regression_domain,
        config.regression_decimals,
    );

    RenderOutcome {
        ticks,
        markers,
        regression_line,
    }
}

/// Run a full pass onto a new figure sized by `config`.
pub fn render_to_figure<'a>(
    observations: &[Observation],
    config: &'a PlotConfig,
) -> PlotResult<(Figure, RenderContext<'a>, RenderOutcome)> {
    let ctx = RenderContext::build(observations, config)?;
    info!(
        "Axis ranges: score {}..{}, chance {}..{}",
        ctx.ranges.score.min, ctx.ranges.score.max, ctx.ranges.chance.min, ctx.ranges.chance.max
    );
    info!(
        "Trendline: chance = {:.6} * score + {:.6}",
        ctx.model.slope, ctx.model.intercept
    );

    let mut figure = Figure::with_background(config.width, config.height, &config.background);
    let outcome = render_scatter(figure.canvas(), observations, &ctx);
    info!("Plotted {} observations", outcome.markers.len());

    Ok((figure, ctx, outcome))
}
