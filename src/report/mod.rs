//! Reporting utilities: residuals, fit quality, and formatted terminal output.

pub mod format;

pub use format::*;

use crate::domain::FitQuality;
use crate::models::LinearCombination;

/// Residuals `y_i - ŷ(x_i)` in sample order.
///
/// Sample arrays are expected to have equal length; extra entries are ignored.
pub fn compute_residuals(spline: &LinearCombination, x: &[f64], y: &[f64]) -> Vec<f64> {
    spline
        .evaluate(x)
        .iter()
        .zip(y)
        .map(|(fit, obs)| obs - fit)
        .collect()
}

/// Summary statistics of a residual vector.
pub fn fit_quality(residuals: &[f64]) -> FitQuality {
    let n = residuals.len();
    let sse: f64 = residuals.iter().map(|r| r * r).sum();
    let rmse = if n > 0 { (sse / n as f64).sqrt() } else { 0.0 };
    let max_abs_residual = residuals.iter().fold(0.0_f64, |m, r| m.max(r.abs()));
    FitQuality {
        sse,
        rmse,
        max_abs_residual,
        n,
    }
}
