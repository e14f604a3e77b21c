//! Demo samples and evenly spaced query grids.
//!
//! The demo data set is the classic self-test: nine unevenly spaced points on
//! `[0, 3]` with `y = sin(x / 1.5)`, optionally perturbed by seeded Gaussian
//! noise so runs are reproducible.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use crate::error::AppError;

/// Abscissas of the demo data set.
pub const DEMO_X: [f64; 9] = [0.0, 0.1, 1.0, 1.5, 2.0, 2.3, 2.6, 2.9, 3.0];

/// Knots used by the demo bases.
pub const DEMO_KNOTS: [f64; 4] = [0.0, 1.0, 2.0, 3.0];

#[derive(Debug, Clone, PartialEq)]
pub struct SampleData {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Build the demo sample; `noise` is the standard deviation (0 disables it).
pub fn demo_sample(noise: f64, seed: u64) -> Result<SampleData, AppError> {
    if !(noise.is_finite() && noise >= 0.0) {
        return Err(AppError::new(2, format!("Invalid noise level: {noise} (must be finite and >= 0).")));
    }

    let x = DEMO_X.to_vec();
    let mut y: Vec<f64> = x.iter().map(|v| (v / 1.5).sin()).collect();

    if noise > 0.0 {
        let mut rng = StdRng::seed_from_u64(seed);
        let normal = Normal::new(0.0, noise)
            .map_err(|e| AppError::new(4, format!("Noise distribution error: {e}")))?;
        for v in &mut y {
            *v += normal.sample(&mut rng);
        }
    }

    Ok(SampleData { x, y })
}

/// `n` evenly spaced points from `min` to `max` (inclusive).
pub fn linspace(min: f64, max: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / (n as f64 - 1.0);
            (0..n)
                .map(|i| if i + 1 == n { max } else { min + step * i as f64 })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_endpoints() {
        let v = linspace(-0.5, 3.5, 200);
        assert_eq!(v.len(), 200);
        assert_eq!(v[0], -0.5);
        assert_eq!(v[199], 3.5);
        assert!(v.windows(2).all(|w| w[1] > w[0]));
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
    }

    #[test]
    fn demo_sample_without_noise_is_sine() {
        let s = demo_sample(0.0, 1).unwrap();
        assert_eq!(s.x.len(), 9);
        assert_eq!(s.y[0], 0.0);
        assert!((s.y[8] - 2.0_f64.sin()).abs() < 1e-15);
    }

    #[test]
    fn demo_noise_is_reproducible() {
        let a = demo_sample(0.1, 7).unwrap();
        let b = demo_sample(0.1, 7).unwrap();
        let c = demo_sample(0.1, 8).unwrap();
        assert_eq!(a, b);
        assert_ne!(a.y, c.y);
        assert!(demo_sample(-1.0, 7).is_err());
    }
}
