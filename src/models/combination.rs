//! Linear combination of basis functions.
//!
//! `y(x) = Σ c_j f_j(x)`, evaluated for a batch of points as the
//! matrix-vector product of the design matrix and the coefficients.

use std::sync::Arc;

use nalgebra::DVector;

use crate::basis::BasisSet;
use crate::error::FitError;

/// A basis (shared, read-only) together with one coefficient per function.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearCombination {
    basis: Arc<BasisSet>,
    coefficients: DVector<f64>,
}

impl LinearCombination {
    /// Fails with `SizeMismatch` unless there is exactly one coefficient per function.
    pub fn new(basis: Arc<BasisSet>, coefficients: Vec<f64>) -> Result<Self, FitError> {
        Self::from_vector(basis, DVector::from_vec(coefficients))
    }

    pub(crate) fn from_vector(basis: Arc<BasisSet>, coefficients: DVector<f64>) -> Result<Self, FitError> {
        if coefficients.len() != basis.len() {
            return Err(FitError::SizeMismatch {
                expected: basis.len(),
                got: coefficients.len(),
            });
        }
        Ok(Self {
            basis,
            coefficients,
        })
    }

    pub fn basis(&self) -> &Arc<BasisSet> {
        &self.basis
    }

    pub fn coefficients(&self) -> &[f64] {
        self.coefficients.as_slice()
    }

    /// Predicted values, one per query point, in input order.
    pub fn evaluate(&self, x: &[f64]) -> Vec<f64> {
        let design = self.basis.evaluate(x);
        (design * &self.coefficients).iter().copied().collect()
    }

    pub fn evaluate_point(&self, x: f64) -> f64 {
        self.basis
            .functions()
            .iter()
            .zip(self.coefficients.iter())
            .map(|(f, c)| f.eval(x) * c)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basis::{hat_basis, polynomial_basis};

    #[test]
    fn size_mismatch_is_rejected() {
        let basis = Arc::new(polynomial_basis(2));
        let err = LinearCombination::new(basis, vec![1.0, 2.0]).unwrap_err();
        assert_eq!(err, FitError::SizeMismatch { expected: 3, got: 2 });
    }

    #[test]
    fn evaluates_polynomial() {
        // 1 + 2x + 3x^2
        let basis = Arc::new(polynomial_basis(2));
        let lc = LinearCombination::new(basis, vec![1.0, 2.0, 3.0]).unwrap();
        let y = lc.evaluate(&[0.0, 1.0, -2.0]);
        assert_eq!(y, vec![1.0, 6.0, 9.0]);
        assert_eq!(lc.evaluate_point(-2.0), 9.0);
    }

    #[test]
    fn hat_combination_interpolates_linearly() {
        let basis = Arc::new(hat_basis(&[0.0, 1.0, 2.0, 3.0]).unwrap());
        let lc = LinearCombination::new(basis, vec![0.0, 1.0, 0.0, 1.0]).unwrap();
        let y = lc.evaluate(&[0.5, 1.5, 2.5, -1.0, 4.0]);
        let expected = [0.5, 0.5, 0.5, 0.0, 1.0];
        for (a, b) in y.iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-12, "{a} vs {b}");
        }
    }

    #[test]
    fn point_evaluation_matches_batch() {
        let basis = Arc::new(hat_basis(&[0.0, 1.0, 2.0, 3.0]).unwrap());
        let lc = LinearCombination::new(basis, vec![2.0, -1.0, 0.5, 3.0]).unwrap();
        let xs = [-2.0, 0.0, 0.3, 1.7, 2.5, 3.0, 9.0];
        for (x, batch) in xs.iter().zip(lc.evaluate(&xs)) {
            assert!((lc.evaluate_point(*x) - batch).abs() < 1e-12);
        }
    }

    #[test]
    fn empty_query_gives_empty_output() {
        let basis = Arc::new(polynomial_basis(1));
        let lc = LinearCombination::new(basis, vec![1.0, 1.0]).unwrap();
        assert!(lc.evaluate(&[]).is_empty());
    }
}
