//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - passed between the fitter, reports and plots
//! - exported to JSON
//! - reloaded later for plotting

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::basis::{
    BasisSet, absolute_value_basis, hat_basis, natural_cubic_basis, polynomial_basis,
};
use crate::error::FitError;

/// Which basis family to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BasisKind {
    /// Triangular (hat) functions on sorted knots.
    Hat,
    /// `|x - b|` per knot.
    Abs,
    /// Monomials `x^0 .. x^order`.
    Poly,
    /// Natural cubic: `1`, `x`, `|x - b|^3` per knot.
    Cubic,
}

impl BasisKind {
    pub const ALL: [BasisKind; 4] = [BasisKind::Hat, BasisKind::Poly, BasisKind::Abs, BasisKind::Cubic];

    pub fn display_name(self) -> &'static str {
        match self {
            BasisKind::Hat => "hat",
            BasisKind::Abs => "abs",
            BasisKind::Poly => "polynomial",
            BasisKind::Cubic => "cubic spline",
        }
    }

    /// Single-character marker used by the ASCII plot.
    pub fn marker(self) -> char {
        match self {
            BasisKind::Hat => 'h',
            BasisKind::Abs => 'a',
            BasisKind::Poly => 'p',
            BasisKind::Cubic => 'c',
        }
    }
}

/// Construction recipe of a basis.
///
/// This is what gets persisted rather than the evaluated functions: hat
/// functions carry infinite ramps, which JSON cannot represent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasisSpec {
    pub kind: BasisKind,
    /// Knots for `hat`, `abs` and `cubic`; ignored for `poly`.
    #[serde(default)]
    pub breakpoints: Vec<f64>,
    /// Polynomial order for `poly`; ignored otherwise.
    #[serde(default)]
    pub order: u32,
}

impl BasisSpec {
    pub fn new(kind: BasisKind, breakpoints: Vec<f64>, order: u32) -> Self {
        Self {
            kind,
            breakpoints,
            order,
        }
    }

    pub fn build(&self) -> Result<BasisSet, FitError> {
        match self.kind {
            BasisKind::Hat => hat_basis(&self.breakpoints),
            BasisKind::Abs => absolute_value_basis(&self.breakpoints),
            BasisKind::Poly => Ok(polynomial_basis(self.order)),
            BasisKind::Cubic => natural_cubic_basis(&self.breakpoints),
        }
    }

    pub fn label(&self) -> String {
        match self.kind {
            BasisKind::Poly => format!("{} (order {})", self.kind.display_name(), self.order),
            _ => format!("{} ({} knots)", self.kind.display_name(), self.breakpoints.len()),
        }
    }
}

/// Residual statistics of a fit on its own samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitQuality {
    pub sse: f64,
    pub rmse: f64,
    pub max_abs_residual: f64,
    pub n: usize,
}

/// A successful fit, detached from the basis instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    pub basis: BasisSpec,
    pub coefficients: Vec<f64>,
    pub quality: FitQuality,
}

/// Precomputed curve values for quick plotting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveGrid {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Portable representation of a fitted curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveFile {
    pub tool: String,
    pub generated: DateTime<Utc>,
    pub fit: FitResult,
    pub grid: CurveGrid,
}

/// Runtime settings resolved from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub bases: Vec<BasisSpec>,
    /// Standard deviation of Gaussian noise added to demo samples (0 = none).
    pub noise: f64,
    pub seed: u64,
    /// Query range for curve grids and plots.
    pub x_min: f64,
    pub x_max: f64,
    pub grid_points: usize,
    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
    pub export_curve: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_builds_expected_sizes() {
        let knots = vec![0.0, 1.0, 2.0, 3.0];
        assert_eq!(BasisSpec::new(BasisKind::Hat, knots.clone(), 0).build().unwrap().len(), 4);
        assert_eq!(BasisSpec::new(BasisKind::Abs, knots.clone(), 0).build().unwrap().len(), 4);
        assert_eq!(BasisSpec::new(BasisKind::Cubic, knots, 0).build().unwrap().len(), 6);
        assert_eq!(BasisSpec::new(BasisKind::Poly, Vec::new(), 2).build().unwrap().len(), 3);
    }

    #[test]
    fn spec_json_uses_lowercase_kind() {
        let spec = BasisSpec::new(BasisKind::Cubic, vec![0.5], 0);
        let json = serde_json::to_string(&spec).unwrap();
        assert!(json.contains("\"kind\":\"cubic\""), "{json}");
        let back: BasisSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }

    #[test]
    fn spec_defaults_missing_fields() {
        let spec: BasisSpec = serde_json::from_str(r#"{"kind":"poly","order":3}"#).unwrap();
        assert!(spec.breakpoints.is_empty());
        assert_eq!(spec.build().unwrap().len(), 4);
    }
}
