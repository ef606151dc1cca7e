//! Builder filling a `RenderSummary` from the results of a rendering pass.

use std::fs::File;
use std::io::BufReader;

use anyhow::Context;
use log::{debug, warn};

use crate::chart::{RenderContext, RenderOutcome};

use super::types::{DataOrigin, RenderSummary};

/// Builder for collecting pass results into a summary
pub struct SummaryCollector {
    summary: RenderSummary,
}

impl SummaryCollector {
    /// Create a new collector with version and timestamp
    pub fn new() -> Self {
        Self {
            summary: RenderSummary {
                version: env!("CARGO_PKG_VERSION").to_string(),
                timestamp: crate::utils::time::utc_now_iso8601(),
                ..Default::default()
            },
        }
    }

    /// Record the data file the observations came from
    pub fn with_source(mut self, path: &str) -> Self {
        self.summary.source = Some(path.to_string());
        self
    }

    /// Record ranges, fit, frame and mapper origins of a pass
    pub fn with_context(mut self, ctx: &RenderContext<'_>) -> Self {
        self.summary.frame = ctx.frame;
        self.summary.axis_ranges = Some(ctx.ranges);
        self.summary.regression = Some(ctx.model);
        self.summary.origin = Some(DataOrigin {
            score: ctx.mapper.score_origin,
            chance: ctx.mapper.chance_origin,
        });
        self
    }

    /// Record what a pass drew
    pub fn with_outcome(mut self, outcome: &RenderOutcome) -> Self {
        self.summary.observations = outcome.markers.len();
        self.summary.ticks = outcome.ticks.clone();
        self.summary.markers = outcome.markers.clone();
        self.summary.regression_line = outcome.regression_line.to_vec();
        self
    }

    /// Build and return the final summary
    pub fn build(self) -> RenderSummary {
        self.summary
    }

    /// Write the summary JSON to `path`
    pub fn write_json(&self, path: &str) -> std::io::Result<()> {
        self.summary.write_json(path)
    }
}

impl Default for SummaryCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSummary {
    /// Write this summary to a JSON file, validating it first when enabled
    pub fn write_json(&self, path: &str) -> std::io::Result<()> {
        if super::schema::should_validate() {
            if let Err(msg) = super::schema::validate_summary(self) {
                warn!("Schema validation failed for {}: {}", path, msg);
                if cfg!(debug_assertions) {
                    return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, msg));
                }
            }
        }
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self).map_err(std::io::Error::other)?;
        debug!("Wrote render summary to {}", path);
        Ok(())
    }

    /// Load a summary from a JSON file
    pub fn load_json(path: &str) -> anyhow::Result<Self> {
        let file = File::open(path).with_context(|| format!("Failed to open summary {}", path))?;
        let summary: Self = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse summary {}", path))?;
        Ok(summary)
    }
}
