//! Least-squares fitting of a basis to sample points.
//!
//! Given:
//! - a basis `f_1 .. f_k`
//! - sample abscissas `x_i` and observed values `y_i`
//!
//! we assemble the design matrix `X_ij = f_j(x_i)` and solve the least-squares
//! problem (the normal equations, via an SVD of `X`) for the coefficients.
//! The result is an ordinary `LinearCombination`; the coefficients never
//! change after construction.

use std::sync::Arc;

use log::{debug, warn};
use nalgebra::DVector;
use rayon::prelude::*;

use crate::basis::BasisSet;
use crate::domain::{BasisSpec, FitQuality, FitResult};
use crate::error::FitError;
use crate::math::solve_least_squares;
use crate::models::LinearCombination;
use crate::report::{compute_residuals, fit_quality};

/// A linear combination whose coefficients minimize the squared residuals
/// on the samples it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct LeastSquaresFit {
    combination: LinearCombination,
    n_samples: usize,
}

impl LeastSquaresFit {
    /// Fit `basis` to the samples `(x, y)`.
    ///
    /// Fails with `SingularMatrix` when `X` lacks full column rank, i.e. `XᵗX`
    /// is not invertible (too few distinct samples, collinear basis columns,
    /// empty supports).
    pub fn new(basis: Arc<BasisSet>, x: &[f64], y: &[f64]) -> Result<Self, FitError> {
        if x.len() != y.len() {
            return Err(FitError::SampleLengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        if x.iter().chain(y).any(|v| !v.is_finite()) {
            return Err(FitError::NonFinite("samples"));
        }

        let design = basis.evaluate(x);
        debug!(
            "least squares: design matrix {}x{} for {}",
            design.nrows(),
            design.ncols(),
            basis
        );
        let coeffs = solve_least_squares(&design, &DVector::from_column_slice(y))?;
        let combination = LinearCombination::from_vector(basis, coeffs)?;

        Ok(Self {
            combination,
            n_samples: x.len(),
        })
    }

    pub fn evaluate(&self, x: &[f64]) -> Vec<f64> {
        self.combination.evaluate(x)
    }

    pub fn evaluate_point(&self, x: f64) -> f64 {
        self.combination.evaluate_point(x)
    }

    pub fn coefficients(&self) -> &[f64] {
        self.combination.coefficients()
    }

    pub fn basis(&self) -> &Arc<BasisSet> {
        self.combination.basis()
    }

    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Residuals `y_i - ŷ(x_i)` against the given samples, in sample order.
    pub fn residuals(&self, x: &[f64], y: &[f64]) -> Vec<f64> {
        compute_residuals(&self.combination, x, y)
    }

    /// SSE, RMSE and largest absolute residual against the given samples.
    pub fn quality(&self, x: &[f64], y: &[f64]) -> FitQuality {
        fit_quality(&self.residuals(x, y))
    }

    pub fn into_combination(self) -> LinearCombination {
        self.combination
    }
}

impl AsRef<LinearCombination> for LeastSquaresFit {
    fn as_ref(&self) -> &LinearCombination {
        &self.combination
    }
}

/// Fit a basis described by `spec` and summarize the result.
pub fn fit_spec(spec: &BasisSpec, x: &[f64], y: &[f64]) -> Result<FitResult, FitError> {
    let basis = Arc::new(spec.build()?);
    let fit = LeastSquaresFit::new(basis, x, y)?;
    Ok(FitResult {
        basis: spec.clone(),
        coefficients: fit.coefficients().to_vec(),
        quality: fit.quality(x, y),
    })
}

/// Fit several bases to the same samples (in parallel).
///
/// Each fit is independent; failures are reported per basis and do not
/// affect the others. Output order follows `specs`.
pub fn fit_all(specs: &[BasisSpec], x: &[f64], y: &[f64]) -> Vec<(BasisSpec, Result<FitResult, FitError>)> {
    specs
        .par_iter()
        .map(|spec| {
            let result = fit_spec(spec, x, y);
            if let Err(e) = &result {
                warn!("fit of {} failed: {e}", spec.label());
            }
            (spec.clone(), result)
        })
        .collect()
}
