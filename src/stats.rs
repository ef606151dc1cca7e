//! Descriptive statistics and ordinary least squares.
//!
//! All functions take whole slices and make a single pass per statistic. The
//! degenerate cases (no elements, paired slices of different length, constant
//! independent values) are reported as [`InvalidInput`] instead of letting a
//! NaN or infinity flow into pixel coordinates.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::plotting::error::{InvalidInput, PlotResult};

/// Trendline `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RegressionModel {
    pub slope: f64,
    pub intercept: f64,
}

impl RegressionModel {
    /// Evaluate the trendline at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> PlotResult<f64> {
    if values.is_empty() {
        return Err(InvalidInput::EmptySequence.into());
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean of the element-wise products of two equal-length slices.
pub fn mean_of_products(a: &[f64], b: &[f64]) -> PlotResult<f64> {
    check_paired(a, b)?;
    let products: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    Ok(products / a.len() as f64)
}

/// Population variance as mean of squares minus square of mean.
///
/// Loses precision when the values are large relative to their spread; the
/// datasets plotted here are a few hundred small numbers.
pub fn variance(values: &[f64]) -> PlotResult<f64> {
    let mean_of_squares = mean_of_products(values, values)?;
    let m = mean(values)?;
    Ok(mean_of_squares - m * m)
}

/// Fit `dependent = slope * independent + intercept` by least squares.
///
/// Constant independent values are [`InvalidInput::ZeroVariance`]. The
/// variance uses the mean-of-squares formula, so for large values spread
/// over a small range it can cancel to zero or below even though the values
/// differ; that case is reported as `ZeroVariance` as well.
pub fn linear_regression(independent: &[f64], dependent: &[f64]) -> PlotResult<RegressionModel> {
    check_paired(independent, dependent)?;

    let x_mean = mean(independent)?;
    let y_mean = mean(dependent)?;
    let products_mean = mean_of_products(independent, dependent)?;
    let x_variance = variance(independent)?;

    if independent.iter().all(|&x| x == independent[0]) {
        return Err(InvalidInput::ZeroVariance.into());
    }
    // Numerical guard: cancellation in the variance of distinct values
    if !(x_variance > 0.0) {
        return Err(InvalidInput::ZeroVariance.into());
    }

    let slope = (products_mean - x_mean * y_mean) / x_variance;
    let intercept = y_mean - slope * x_mean;

    Ok(RegressionModel { slope, intercept })
}

fn check_paired(a: &[f64], b: &[f64]) -> PlotResult<()> {
    if a.len() != b.len() {
        return Err(InvalidInput::LengthMismatch {
            left: a.len(),
            right: b.len(),
        }
        .into());
    }
    if a.is_empty() {
        return Err(InvalidInput::EmptySequence.into());
    }
    Ok(())
}
