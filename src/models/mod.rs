//! Fitted-function representations.
//!
//! A spline here is a plain linear combination of basis functions; the
//! least-squares fitter in `fit` only decides the coefficients.

pub mod combination;

pub use combination::*;
