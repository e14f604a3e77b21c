//! Scalar basis functions ("mono" functions) of one real variable.
//!
//! The set of variants is closed:
//!
//! - `x^n` (monomial)
//! - `|x - c|` (absolute value, kink at `c`)
//! - `|x - c|^3` (truncated cubic, C² at `c`, building block of natural cubic splines)
//! - normalized hat (triangle) peaking at 1 on its center
//!
//! Every variant is a pure function of its construction parameters.

use std::fmt;

/// Normalized triangular function peaking at 1 on `center`.
///
/// Ramps are stored relative to the center (`left_ramp <= 0 < right_ramp`).
/// A degenerate side (`left >= center` or `right <= center`) becomes an
/// infinite ramp, i.e. a flat plateau at 1 extending outward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hat {
    left_ramp: f64,
    right_ramp: f64,
    center: f64,
}

impl Hat {
    pub fn new(left: f64, right: f64, center: f64) -> Self {
        let mut left_ramp = left - center;
        let mut right_ramp = right - center;
        if left_ramp >= 0.0 {
            left_ramp = f64::NEG_INFINITY;
        }
        if right_ramp <= 0.0 {
            right_ramp = f64::INFINITY;
        }
        Self {
            left_ramp,
            right_ramp,
            center,
        }
    }

    pub fn center(&self) -> f64 {
        self.center
    }

    /// Left support end (`-inf` for a left plateau).
    pub fn left(&self) -> f64 {
        self.left_ramp + self.center
    }

    /// Right support end (`+inf` for a right plateau).
    pub fn right(&self) -> f64 {
        self.right_ramp + self.center
    }

    pub fn eval(&self, x: f64) -> f64 {
        let dx = x - self.center;
        if dx > self.left_ramp && dx <= 0.0 {
            // x / -inf is -0.0 on the plateau, giving exactly 1.
            1.0 - dx / self.left_ramp
        } else if dx > 0.0 && dx < self.right_ramp {
            1.0 - dx / self.right_ramp
        } else {
            0.0
        }
    }
}

/// One basis function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MonoFunction {
    /// `x^order`; order 0 is the constant 1.
    Monomial { order: u32 },
    /// `|x - center|`.
    AbsoluteValue { center: f64 },
    /// `|x - center|^3`.
    TruncatedCubic { center: f64 },
    Hat(Hat),
}

impl MonoFunction {
    pub fn monomial(order: u32) -> Self {
        MonoFunction::Monomial { order }
    }

    pub fn absolute_value(center: f64) -> Self {
        MonoFunction::AbsoluteValue { center }
    }

    pub fn truncated_cubic(center: f64) -> Self {
        MonoFunction::TruncatedCubic { center }
    }

    pub fn hat(left: f64, right: f64, center: f64) -> Self {
        MonoFunction::Hat(Hat::new(left, right, center))
    }

    /// Evaluate at a single point.
    pub fn eval(&self, x: f64) -> f64 {
        match *self {
            MonoFunction::Monomial { order } => pow_u32(x, order),
            MonoFunction::AbsoluteValue { center } => (x - center).abs(),
            MonoFunction::TruncatedCubic { center } => {
                let d = (x - center).abs();
                d * d * d
            }
            MonoFunction::Hat(hat) => hat.eval(x),
        }
    }

    /// Evaluate elementwise; the output has the same length as `x`.
    pub fn evaluate(&self, x: &[f64]) -> Vec<f64> {
        x.iter().map(|&v| self.eval(v)).collect()
    }
}

fn pow_u32(x: f64, n: u32) -> f64 {
    match i32::try_from(n) {
        Ok(n) => x.powi(n),
        Err(_) => x.powf(f64::from(n)),
    }
}

impl fmt::Display for MonoFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonoFunction::Monomial { order } => write!(f, "x^{order}"),
            MonoFunction::AbsoluteValue { center } => write!(f, "|x-{center}|"),
            MonoFunction::TruncatedCubic { center } => write!(f, "|x-{center}|^3"),
            MonoFunction::Hat(hat) => {
                write!(f, "hat({}, {}, {})", hat.left(), hat.center(), hat.right())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hat_is_triangular_inside_support() {
        let h = Hat::new(0.0, 2.0, 1.0);
        assert_eq!(h.eval(0.0), 0.0);
        assert!((h.eval(0.5) - 0.5).abs() < 1e-15);
        assert_eq!(h.eval(1.0), 1.0);
        assert!((h.eval(1.5) - 0.5).abs() < 1e-15);
        assert_eq!(h.eval(2.0), 0.0);
        assert_eq!(h.eval(-3.0), 0.0);
        assert_eq!(h.eval(7.0), 0.0);
    }

    #[test]
    fn hat_degenerate_sides_become_plateaus() {
        let first = Hat::new(0.0, 1.0, 0.0);
        assert_eq!(first.left(), f64::NEG_INFINITY);
        assert_eq!(first.eval(-5.0), 1.0);
        assert_eq!(first.eval(0.5), 0.5);

        let last = Hat::new(2.0, 3.0, 3.0);
        assert_eq!(last.right(), f64::INFINITY);
        assert_eq!(last.eval(10.0), 1.0);
        assert_eq!(last.eval(2.5), 0.5);
    }

    #[test]
    fn hat_with_both_sides_degenerate_is_constant() {
        let h = Hat::new(4.0, 4.0, 4.0);
        for x in [-100.0, 0.0, 4.0, 4.5, 1e6] {
            assert_eq!(h.eval(x), 1.0, "x={x}");
        }
    }

    #[test]
    fn monomial_order_zero_is_one() {
        let m = MonoFunction::monomial(0);
        assert_eq!(m.evaluate(&[-2.0, 0.0, 3.5]), vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn kinked_functions_match_formulas() {
        let a = MonoFunction::absolute_value(1.0);
        let c = MonoFunction::truncated_cubic(1.0);
        assert_eq!(a.evaluate(&[-1.0, 1.0, 4.0]), vec![2.0, 0.0, 3.0]);
        assert_eq!(c.evaluate(&[-1.0, 1.0, 4.0]), vec![8.0, 0.0, 27.0]);
        assert_eq!(MonoFunction::monomial(3).eval(-2.0), -8.0);
    }

    #[test]
    fn display_names() {
        assert_eq!(MonoFunction::monomial(2).to_string(), "x^2");
        assert_eq!(MonoFunction::absolute_value(1.5).to_string(), "|x-1.5|");
        assert_eq!(MonoFunction::truncated_cubic(2.0).to_string(), "|x-2|^3");
        assert_eq!(MonoFunction::hat(0.0, 2.0, 1.0).to_string(), "hat(0, 1, 2)");
        assert_eq!(MonoFunction::hat(0.0, 1.0, 0.0).to_string(), "hat(-inf, 0, 1)");
    }
}
