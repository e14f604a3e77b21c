//! Read/write curve JSON files.
//!
//! Curve JSON is the "portable" representation of a fitted curve:
//! - basis recipe (kind + knots/order) and coefficients
//! - fit quality on the original samples
//! - a precomputed grid for quick plotting
//!
//! The schema is defined by `domain::CurveFile`.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use log::info;

use crate::data::linspace;
use crate::domain::{CurveFile, CurveGrid, FitResult};
use crate::error::AppError;
use crate::models::LinearCombination;

/// Rebuild the evaluable spline described by a fit result.
pub fn spline_from_fit(fit: &FitResult) -> Result<LinearCombination, AppError> {
    let basis = Arc::new(fit.basis.build()?);
    Ok(LinearCombination::new(basis, fit.coefficients.clone())?)
}

/// Build the in-memory curve file for `fit`, sampled on `[x_min, x_max]`.
pub fn build_curve_file(fit: &FitResult, x_min: f64, x_max: f64, n: usize) -> Result<CurveFile, AppError> {
    if !(x_min.is_finite() && x_max.is_finite() && x_max > x_min) {
        return Err(AppError::new(
            2,
            format!("Invalid curve range: min={x_min}, max={x_max} (must be finite and max>min)."),
        ));
    }
    let spline = spline_from_fit(fit)?;
    let x = linspace(x_min, x_max, n.max(2));
    let y = spline.evaluate(&x);

    Ok(CurveFile {
        tool: "splinefit".to_string(),
        generated: Utc::now(),
        fit: fit.clone(),
        grid: CurveGrid { x, y },
    })
}

/// Write a curve JSON file.
pub fn write_curve_json(path: &Path, curve: &CurveFile) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create curve JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, curve)
        .map_err(|e| AppError::new(2, format!("Failed to write curve JSON: {e}")))?;

    info!("wrote curve {} to {}", curve.fit.basis.label(), path.display());
    Ok(())
}

/// Read a curve JSON file.
///
/// The stored basis is rebuilt to check that the coefficients still match it.
pub fn read_curve_json(path: &Path) -> Result<CurveFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open curve JSON '{}': {e}", path.display())))?;
    let curve: CurveFile =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid curve JSON: {e}")))?;
    spline_from_fit(&curve.fit)?;
    if curve.grid.x.len() != curve.grid.y.len() {
        return Err(AppError::new(2, "Invalid curve JSON: grid x/y lengths differ."));
    }
    Ok(curve)
}
