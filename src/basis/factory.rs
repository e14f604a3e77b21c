//! Strategies building a `BasisSet` from breakpoints or a polynomial order.
//!
//! - `polynomial_basis(n)`: `x^0 .. x^n`
//! - `absolute_value_basis(bp)`: `|x - b|` per breakpoint
//! - `hat_basis(bp)`: piecewise-linear interpolation basis with flat extrapolation
//! - `natural_cubic_basis(bp)`: `1, x` then `|x - b|^3` per breakpoint

use crate::basis::BasisSet;
use crate::error::FitError;
use crate::math::MonoFunction;

/// All polynomials of degree `<= order` (`order + 1` functions).
pub fn polynomial_basis(order: u32) -> BasisSet {
    let functions = (0..=order).map(MonoFunction::monomial).collect();
    BasisSet { functions }
}

/// One `|x - b|` per breakpoint, in the given order.
pub fn absolute_value_basis(breakpoints: &[f64]) -> Result<BasisSet, FitError> {
    check_finite(breakpoints)?;
    BasisSet::new(
        breakpoints
            .iter()
            .map(|&b| MonoFunction::absolute_value(b))
            .collect(),
    )
}

/// Hat functions centered on each breakpoint.
///
/// Breakpoints must be strictly ascending. The hat on `b_i` ramps from
/// `b_{i-1}` up to `b_i` and down to `b_{i+1}`; the first and last hats keep a
/// flat plateau at 1 outside `[b_0, b_{k-1}]` (their outer neighbour is the
/// breakpoint itself, which disables that ramp).
pub fn hat_basis(breakpoints: &[f64]) -> Result<BasisSet, FitError> {
    check_finite(breakpoints)?;
    if let Some(index) = breakpoints.windows(2).position(|w| w[0] >= w[1]) {
        return Err(FitError::UnsortedBreakpoints { index: index + 1 });
    }
    let (Some(&first), Some(&last)) = (breakpoints.first(), breakpoints.last()) else {
        return Err(FitError::EmptyBasis);
    };

    let mut extended = Vec::with_capacity(breakpoints.len() + 2);
    extended.push(first);
    extended.extend_from_slice(breakpoints);
    extended.push(last);

    let functions = extended
        .windows(3)
        .map(|w| MonoFunction::hat(w[0], w[2], w[1]))
        .collect();
    BasisSet::new(functions)
}

/// Affine part followed by one truncated cubic per breakpoint.
pub fn natural_cubic_basis(breakpoints: &[f64]) -> Result<BasisSet, FitError> {
    check_finite(breakpoints)?;
    let mut functions = Vec::with_capacity(breakpoints.len() + 2);
    functions.push(MonoFunction::monomial(0));
    functions.push(MonoFunction::monomial(1));
    functions.extend(breakpoints.iter().map(|&b| MonoFunction::truncated_cubic(b)));
    BasisSet::new(functions)
}

fn check_finite(breakpoints: &[f64]) -> Result<(), FitError> {
    if breakpoints.iter().all(|b| b.is_finite()) {
        Ok(())
    } else {
        Err(FitError::NonFinite("breakpoints"))
    }
}
