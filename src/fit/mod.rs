//! Least-squares fitting.
//!
//! Responsibilities:
//!
//! - assemble the design matrix and solve the normal equations (`LeastSquaresFit`)
//! - fit several bases to one sample in parallel (`fit_all`)

pub mod fitter;

pub use fitter::*;
