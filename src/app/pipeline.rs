//! Shared "fit pipeline" logic used by the `demo` and `fit` commands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! samples -> fits (parallel) -> curve grids + residuals at the samples
//!
//! The commands can then focus on presentation.

use log::debug;

use crate::data::{SampleData, linspace};
use crate::domain::{BasisSpec, FitResult, RunConfig};
use crate::error::{AppError, FitError};
use crate::fit::fit_all;
use crate::io::spline_from_fit;
use crate::plot::CurveSeries;
use crate::report::compute_residuals;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub sample: SampleData,
    pub results: Vec<(BasisSpec, Result<FitResult, FitError>)>,
    /// Evaluation grid shared by all curves.
    pub grid: Vec<f64>,
    /// One curve per successful fit, in basis order.
    pub curves: Vec<CurveSeries>,
    /// Residuals `y - ŷ` at the samples, one series per successful fit,
    /// with points sorted by x.
    pub residuals: Vec<CurveSeries>,
}

impl RunOutput {
    /// Successful fit with the lowest SSE.
    pub fn best(&self) -> Option<&FitResult> {
        self.results
            .iter()
            .filter_map(|(_, r)| r.as_ref().ok())
            .min_by(|a, b| {
                a.quality
                    .sse
                    .partial_cmp(&b.quality.sse)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }
}

/// Fit every configured basis to `sample` and evaluate the curves on the grid.
pub fn run_fits(config: &RunConfig, sample: SampleData) -> Result<RunOutput, AppError> {
    if config.bases.is_empty() {
        return Err(AppError::new(2, "No basis to fit."));
    }
    if !(config.x_min.is_finite() && config.x_max.is_finite() && config.x_max > config.x_min) {
        return Err(AppError::new(
            2,
            format!(
                "Invalid evaluation range: min={}, max={} (must be finite and max>min).",
                config.x_min, config.x_max
            ),
        ));
    }

    let results = fit_all(&config.bases, &sample.x, &sample.y);
    let grid = linspace(config.x_min, config.x_max, config.grid_points.max(2));
    debug!(
        "pipeline: {} fits on {} samples, grid of {} points",
        results.len(),
        sample.x.len(),
        grid.len()
    );

    let mut curves = Vec::new();
    let mut residuals = Vec::new();
    for (spec, result) in &results {
        if let Ok(fit) = result {
            let spline = spline_from_fit(fit)?;
            let y = spline.evaluate(&grid);
            curves.push(CurveSeries::from_xy(spec.label(), spec.kind.marker(), &grid, &y));

            let r = compute_residuals(&spline, &sample.x, &sample.y);
            let mut series = CurveSeries::from_xy(spec.label(), spec.kind.marker(), &sample.x, &r);
            series.points.sort_by(|a, b| a.0.total_cmp(&b.0));
            residuals.push(series);
        }
    }

    Ok(RunOutput {
        sample,
        results,
        grid,
        curves,
        residuals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::demo_sample;
    use crate::domain::BasisKind;

    fn config(bases: Vec<BasisSpec>) -> RunConfig {
        RunConfig {
            bases,
            noise: 0.0,
            seed: 0,
            x_min: -0.5,
            x_max: 3.5,
            grid_points: 50,
            plot: false,
            plot_width: 80,
            plot_height: 20,
            export_curve: None,
        }
    }

    #[test]
    fn demo_pipeline_fits_all_four_bases() {
        let knots = vec![0.0, 1.0, 2.0, 3.0];
        let cfg = config(vec![
            BasisSpec::new(BasisKind::Hat, knots.clone(), 0),
            BasisSpec::new(BasisKind::Poly, Vec::new(), 2),
            BasisSpec::new(BasisKind::Abs, knots.clone(), 0),
            BasisSpec::new(BasisKind::Cubic, knots, 0),
        ]);
        let run = run_fits(&cfg, demo_sample(0.0, 0).unwrap()).unwrap();
        assert_eq!(run.results.len(), 4);
        assert!(run.results.iter().all(|(_, r)| r.is_ok()));
        assert_eq!(run.curves.len(), 4);
        assert!(run.curves.iter().all(|c| c.points.len() == 50));
        // sin(x/1.5) on [0, 3] is smooth; every basis should track it closely.
        for (_, r) in &run.results {
            assert!(r.as_ref().unwrap().quality.max_abs_residual < 0.1);
        }
        assert!(run.best().is_some());
    }

    #[test]
    fn demo_pipeline_keeps_residuals_at_each_sample() {
        let knots = vec![0.0, 1.0, 2.0, 3.0];
        let cfg = config(vec![
            BasisSpec::new(BasisKind::Hat, knots.clone(), 0),
            BasisSpec::new(BasisKind::Poly, Vec::new(), 2),
            BasisSpec::new(BasisKind::Abs, knots.clone(), 0),
            BasisSpec::new(BasisKind::Cubic, knots, 0),
        ]);
        let sample = demo_sample(0.0, 0).unwrap();
        let run = run_fits(&cfg, sample.clone()).unwrap();

        assert_eq!(run.residuals.len(), 4);
        for ((_, result), series) in run.results.iter().zip(&run.residuals) {
            let fit = result.as_ref().unwrap();
            assert_eq!(series.points.len(), sample.x.len());
            assert_eq!(series.marker, fit.basis.kind.marker());

            let spline = spline_from_fit(fit).unwrap();
            let mut sse = 0.0;
            for (&(x, r), &xs) in series.points.iter().zip(&sample.x) {
                assert_eq!(x, xs);
                let i = sample.x.iter().position(|&v| v == x).unwrap();
                assert!((r - (sample.y[i] - spline.evaluate_point(x))).abs() < 1e-12);
                sse += r * r;
            }
            assert!((sse - fit.quality.sse).abs() < 1e-12);
        }
    }

    #[test]
    fn failed_fits_produce_no_curve() {
        let cfg = config(vec![BasisSpec::new(BasisKind::Poly, Vec::new(), 5)]);
        let sample = SampleData {
            x: vec![0.0, 1.0],
            y: vec![1.0, 2.0],
        };
        let run = run_fits(&cfg, sample).unwrap();
        assert!(run.results[0].1.is_err());
        assert!(run.curves.is_empty());
        assert!(run.residuals.is_empty());
        assert!(run.best().is_none());
    }

    #[test]
    fn invalid_range_is_rejected() {
        let mut cfg = config(vec![BasisSpec::new(BasisKind::Poly, Vec::new(), 1)]);
        cfg.x_max = cfg.x_min;
        assert!(run_fits(&cfg, demo_sample(0.0, 0).unwrap()).is_err());
    }
}
