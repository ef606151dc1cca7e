//! JSON Schema generation and runtime validation for render summaries

use std::sync::LazyLock;

use schemars::schema_for;
use serde_json::Value;

use super::types::RenderSummary;

/// Cached JSON Schema for RenderSummary.
static SCHEMA: LazyLock<schemars::Schema> = LazyLock::new(|| schema_for!(RenderSummary));

/// Returns the JSON Schema as a pretty-printed JSON string.
pub fn schema_json_pretty() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&*SCHEMA)
}

/// Validate a JSON value against the RenderSummary schema.
///
/// Returns `Err` with every validation error, one per line.
pub fn validate(value: &Value) -> Result<(), String> {
    let schema_val = serde_json::to_value(&*SCHEMA)
        .map_err(|e| format!("Failed to serialize schema: {}", e))?;
    let validator = jsonschema::validator_for(&schema_val)
        .map_err(|e| format!("Failed to compile schema: {}", e))?;

    let errors: Vec<String> = validator
        .iter_errors(value)
        .map(|e| format!("  - {}: {}", e.instance_path, e))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(format!(
            "Summary JSON failed schema validation ({} errors):\n{}",
            errors.len(),
            errors.join("\n")
        ))
    }
}

/// Validate a summary against the schema and against its own counts.
///
/// A summary is consistent when it holds one marker per observation, either
/// no trendline (nothing rendered yet) or both endpoints, and axis ranges with
/// `min <= max`.
pub fn validate_summary(summary: &RenderSummary) -> Result<(), String> {
    let value = serde_json::to_value(summary)
        .map_err(|e| format!("Failed to serialize summary: {}", e))?;
    validate(&value)?;

    let mut errors = Vec::new();
    if summary.markers.len() != summary.observations {
        errors.push(format!(
            "  - /markers: {} markers for {} observations",
            summary.markers.len(),
            summary.observations
        ));
    }
    if !matches!(summary.regression_line.len(), 0 | 2) {
        errors.push(format!(
            "  - /regression_line: expected 2 endpoints, found {}",
            summary.regression_line.len()
        ));
    }
    if let Some(ranges) = &summary.axis_ranges {
        for (axis, range) in [("score", &ranges.score), ("chance", &ranges.chance)] {
            if !(range.min <= range.max) {
                errors.push(format!(
                    "  - /axis_ranges/{}: min {} exceeds max {}",
                    axis, range.min, range.max
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(format!(
            "Summary is inconsistent ({} errors):\n{}",
            errors.len(),
            errors.join("\n")
        ))
    }
}

/// Returns true if runtime validation should be performed.
///
/// Always true in debug builds. In release builds, true only if `ADMITPLOT_VALIDATE_OUTPUT=1`.
pub fn should_validate() -> bool {
    if cfg!(debug_assertions) {
        true
    } else {
        std::env::var("ADMITPLOT_VALIDATE_OUTPUT")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }
}
