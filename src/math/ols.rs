//! Ordinary least squares.
//!
//! The coefficients are the minimizer of `‖X c - y‖²`, i.e. the solution of
//! the normal equations
//!
//! ```text
//! (XᵗX) c = Xᵗy
//! ```
//!
//! We never form `XᵗX`: that squares the condition number, and polynomial
//! bases on samples far from the origin (say `x ∈ [1000, 1003]`) would be
//! rejected as singular even though `X` itself has full column rank. Instead
//! the design matrix is decomposed with an SVD and solved directly.
//!
//! Rank deficiency is read off the singular values. A value at or below
//! `RANK_TOL · σ_max` means a column is (numerically) a combination of the
//! others, and the system is reported as singular.

use log::debug;
use nalgebra::{DMatrix, DVector};

use crate::error::FitError;

/// Relative singular-value threshold below which `X` counts as rank deficient.
const RANK_TOL: f64 = 1e-14;

/// Least-squares solve for the design matrix `x` (n × k) and targets `y`.
///
/// Fails with `SingularMatrix` unless `x` has full column rank `k`; that
/// includes every case with fewer samples than basis functions.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Result<DVector<f64>, FitError> {
    let (n, k) = x.shape();
    let singular = FitError::SingularMatrix { n, k };

    if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return Err(FitError::NonFinite("design matrix"));
    }

    let svd = x.clone().svd(true, true);
    let sigma_max = svd.singular_values.iter().copied().fold(0.0_f64, f64::max);
    let tol = sigma_max * RANK_TOL.max(n.max(k) as f64 * f64::EPSILON);
    let rank = svd.singular_values.iter().filter(|&&s| s > tol).count();
    if sigma_max <= 0.0 || rank < k {
        debug!("least squares: rank {rank} < {k} for {n}x{k} design matrix (sigma_max = {sigma_max:e})");
        return Err(singular);
    }

    let coeffs = svd.solve(y, tol).map_err(|e| {
        debug!("least squares: SVD solve failed: {e}");
        singular.clone()
    })?;
    if coeffs.iter().any(|v| !v.is_finite()) {
        return Err(singular);
    }
    Ok(coeffs)
}
