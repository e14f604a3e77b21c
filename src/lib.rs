//! `splinefit` library crate.
//!
//! Fits a scalar function `y = f(x)` as a linear combination of basis
//! functions (hat, absolute value, polynomial or natural cubic) by ordinary
//! least squares, then evaluates the fitted spline anywhere.
//!
//! ```
//! use std::sync::Arc;
//! use splinefit::basis::hat_basis;
//! use splinefit::fit::LeastSquaresFit;
//!
//! let basis = Arc::new(hat_basis(&[0.0, 1.0, 2.0, 3.0]).unwrap());
//! let fit = LeastSquaresFit::new(basis, &[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 0.0, 1.0]).unwrap();
//! let y = fit.evaluate(&[0.5, 1.5, 2.5]);
//! assert!(y.iter().all(|v| (v - 0.5).abs() < 1e-12));
//! ```
//!
//! The binary (`splinefit`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the fitting core has no dependency on the CLI or plotting

pub mod app;
pub mod basis;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
