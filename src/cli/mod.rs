//! Command-line parsing for the spline fitter.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the fitting code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::BasisKind;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "splinefit", version, about = "Least-squares fitting on hat, abs, polynomial and natural cubic bases")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit all four bases to the sin(x/1.5) self-test data and compare them.
    Demo(DemoArgs),
    /// Fit one basis to the given samples and print coefficients/predictions.
    Fit(FitArgs),
    /// Plot a previously exported curve JSON.
    Plot(PlotArgs),
}

/// Plot and grid options shared by `demo` and `fit`.
#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    /// Lower end of the evaluation grid (defaults to the sample range).
    #[arg(long, allow_hyphen_values = true)]
    pub x_min: Option<f64>,

    /// Upper end of the evaluation grid (defaults to the sample range).
    #[arg(long, allow_hyphen_values = true)]
    pub x_max: Option<f64>,

    /// Number of points in the evaluation grid.
    #[arg(long, default_value_t = 200)]
    pub grid_points: usize,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export the fitted curve (basis + coefficients + grid) to JSON.
    ///
    /// For `demo`, the best fit (lowest SSE) is exported.
    #[arg(long = "export-curve")]
    pub export_curve: Option<PathBuf>,
}

/// Options for the self-test demo.
#[derive(Debug, Args, Clone)]
pub struct DemoArgs {
    /// Standard deviation of Gaussian noise added to the samples.
    #[arg(long, default_value_t = 0.0)]
    pub noise: f64,

    /// Random seed for the noise.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Options for a single fit.
#[derive(Debug, Args, Clone)]
pub struct FitArgs {
    /// Basis family.
    #[arg(short = 'b', long, value_enum, default_value_t = BasisKind::Hat)]
    pub basis: BasisKind,

    /// Knots (comma separated) for hat/abs/cubic bases.
    #[arg(short = 'k', long, value_delimiter = ',', allow_hyphen_values = true)]
    pub knots: Vec<f64>,

    /// Polynomial order for the poly basis.
    #[arg(short = 'o', long, default_value_t = 2)]
    pub order: u32,

    /// Sample abscissas (comma separated).
    #[arg(short = 'x', long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
    pub x: Vec<f64>,

    /// Sample values (comma separated).
    #[arg(short = 'y', long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
    pub y: Vec<f64>,

    /// Points at which to print predictions (comma separated).
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub at: Vec<f64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Options for plotting a saved curve.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Curve JSON file produced by `--export-curve`.
    #[arg(long, value_name = "JSON")]
    pub curve: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fit_lists() {
        let cli = Cli::parse_from([
            "splinefit", "fit", "--basis", "poly", "--order", "1", "-x", "0,1,2", "-y", "-1,1,3", "--at", "0.5",
        ]);
        let Command::Fit(args) = cli.command else {
            panic!("expected fit subcommand");
        };
        assert_eq!(args.basis, BasisKind::Poly);
        assert_eq!(args.order, 1);
        assert_eq!(args.x, vec![0.0, 1.0, 2.0]);
        assert_eq!(args.y, vec![-1.0, 1.0, 3.0]);
        assert_eq!(args.at, vec![0.5]);
        assert!(args.knots.is_empty());
    }

    #[test]
    fn demo_defaults() {
        let cli = Cli::parse_from(["splinefit", "demo", "--no-plot"]);
        let Command::Demo(args) = cli.command else {
            panic!("expected demo subcommand");
        };
        assert_eq!(args.noise, 0.0);
        assert!(args.output.no_plot);
        assert_eq!(args.output.grid_points, 200);
    }
}
