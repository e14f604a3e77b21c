//! Domain types used throughout the tool.
//!
//! This module defines:
//!
//! - basis descriptions (`BasisKind`, `BasisSpec`)
//! - fit outputs (`FitQuality`, `FitResult`, `CurveFile`)
//! - runtime configuration (`RunConfig`)

pub mod types;

pub use types::*;
