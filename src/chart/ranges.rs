//! Axis bounds from the observation set.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{round_half_up, Observation};
use crate::plotting::error::{InvalidInput, PlotResult};

/// Rounded bounds of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

/// Bounds of both axes for one rendering pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AxisRanges {
    /// Independent (horizontal) axis
    pub score: AxisRange,
    /// Dependent (vertical) axis
    pub chance: AxisRange,
}

/// Compute the rounded axis bounds of `observations`.
///
/// Scores keep one decimal. Chances are snapped up to the next multiple of
/// 0.05 at BOTH ends, so the lowest observation can sit below the axis
/// minimum (0.34 gives a minimum of 0.35).
pub fn compute_axis_ranges(observations: &[Observation]) -> PlotResult<AxisRanges> {
    let (score_min, score_max) = extent(observations.iter().map(|o| o.score))?;
    let (chance_min, chance_max) = extent(observations.iter().map(|o| o.chance))?;

    Ok(AxisRanges {
        score: AxisRange {
            min: round_half_up(score_min, 1),
            max: round_half_up(score_max, 1),
        },
        chance: AxisRange {
            min: snap_up_to_twentieth(chance_min),
            max: snap_up_to_twentieth(chance_max),
        },
    })
}

/// `ceil(v * 20) / 20`, fixed to two decimals.
pub(crate) fn snap_up_to_twentieth(value: f64) -> f64 {
    let snapped = (value * 20.0).ceil() / 20.0;
    round_half_up(snapped, 2)
}

fn extent(values: impl Iterator<Item = f64>) -> PlotResult<(f64, f64)> {
    let mut bounds: Option<(f64, f64)> = None;
    for v in values {
        bounds = Some(match bounds {
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
            None => (v, v),
        });
    }
    bounds.ok_or_else(|| InvalidInput::EmptySequence.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::error::PlotError;

    fn obs(pairs: &[(f64, f64)]) -> Vec<Observation> {
        pairs.iter().map(|&(s, c)| Observation::new(s, c)).collect()
    }

    #[test]
    fn test_score_bounds_keep_one_decimal() {
        let data = obs(&[(91.0, 0.5), (95.0, 0.5), (100.0, 0.5), (120.0, 0.5)]);
        let ranges = compute_axis_ranges(&data).unwrap();
        assert_eq!(ranges.score, AxisRange { min: 91.0, max: 120.0 });

        let data = obs(&[(91.04, 0.5), (119.95, 0.5)]);
        let ranges = compute_axis_ranges(&data).unwrap();
        assert_eq!(ranges.score.min, 91.0);
        assert_eq!(ranges.score.max, 120.0);
    }

    #[test]
    fn test_chance_bounds_snap_up_at_both_ends() {
        let data = obs(&[(100.0, 0.34), (110.0, 0.91)]);
        let ranges = compute_axis_ranges(&data).unwrap();
        assert_eq!(ranges.chance, AxisRange { min: 0.35, max: 0.95 });
    }

    #[test]
    fn test_exact_twentieths_are_kept() {
        assert_eq!(snap_up_to_twentieth(0.45), 0.45);
        assert_eq!(snap_up_to_twentieth(0.97), 1.0);
    }

    #[test]
    fn test_empty_observations_are_invalid() {
        assert!(matches!(
            compute_axis_ranges(&[]),
            Err(PlotError::InvalidInput(InvalidInput::EmptySequence))
        ));
    }
}
