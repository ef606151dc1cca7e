//! Render summary output
//!
//! This module provides:
//! - `RenderSummary`: what one rendering pass computed and drew
//! - `SummaryCollector`: a builder filling the summary from pass results
//!
//! # Example
//!
//! ```ignore
//! use admitplot::output::SummaryCollector;
//!
//! let collector = SummaryCollector::new()
//!     .with_source("admissions.json")
//!     .with_context(&ctx)
//!     .with_outcome(&outcome);
//!
//! collector.write_json("chart.summary.json")?;
//! ```

pub mod collector;
pub mod schema;
pub mod types;

pub use collector::SummaryCollector;
pub use types::{DataOrigin, RenderSummary};
