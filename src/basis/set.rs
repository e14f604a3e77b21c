//! Ordered collection of basis functions and design-matrix assembly.

use std::fmt;

use nalgebra::DMatrix;

use crate::error::FitError;
use crate::math::MonoFunction;

/// Immutable, non-empty ordered list of basis functions.
///
/// Bases are cheap to share behind an `Arc` and are only ever read after
/// construction, so several fits may use the same instance concurrently.
#[derive(Debug, Clone, PartialEq)]
pub struct BasisSet {
    pub(super) functions: Vec<MonoFunction>,
}

impl BasisSet {
    pub fn new(functions: Vec<MonoFunction>) -> Result<Self, FitError> {
        if functions.is_empty() {
            return Err(FitError::EmptyBasis);
        }
        Ok(Self { functions })
    }

    /// Number of basis functions (`lt`).
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn functions(&self) -> &[MonoFunction] {
        &self.functions
    }

    /// Build the design matrix: one row per query point, one column per function.
    pub fn evaluate(&self, x: &[f64]) -> DMatrix<f64> {
        DMatrix::from_fn(x.len(), self.functions.len(), |i, j| self.functions[j].eval(x[i]))
    }
}

impl fmt::Display for BasisSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.functions.iter().map(|m| m.to_string()).collect();
        write!(f, "basis [{}]", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_basis_is_rejected() {
        assert_eq!(BasisSet::new(Vec::new()), Err(FitError::EmptyBasis));
    }

    #[test]
    fn design_matrix_has_one_column_per_function() {
        let basis = BasisSet::new(vec![
            MonoFunction::monomial(0),
            MonoFunction::monomial(1),
            MonoFunction::absolute_value(1.0),
        ])
        .unwrap();
        let x = [0.0, 2.0, 5.0, -1.0];
        let m = basis.evaluate(&x);
        assert_eq!(m.shape(), (4, 3));
        for (i, &xi) in x.iter().enumerate() {
            assert_eq!(m[(i, 0)], 1.0);
            assert_eq!(m[(i, 1)], xi);
            assert_eq!(m[(i, 2)], (xi - 1.0).abs());
        }
    }

    #[test]
    fn display_lists_functions_in_order() {
        let basis = BasisSet::new(vec![MonoFunction::monomial(0), MonoFunction::monomial(1)]).unwrap();
        assert_eq!(basis.to_string(), "basis [x^0, x^1]");
    }
}
