//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and initializes logging
//! - parses CLI arguments
//! - builds samples and runs the fits
//! - prints summaries/plots
//! - writes optional curve exports

use clap::Parser;
use env_logger::{Builder, Env};
use log::info;

use crate::cli::{Command, DemoArgs, FitArgs, OutputArgs, PlotArgs};
use crate::data::{DEMO_KNOTS, DEMO_X, SampleData, demo_sample};
use crate::domain::{BasisKind, BasisSpec, RunConfig};
use crate::error::AppError;
use crate::io::{build_curve_file, read_curve_json, spline_from_fit, write_curve_json};

pub mod pipeline;

/// Environment variable holding the log filter (`env_logger` syntax).
pub const LOG_ENV: &str = "SPLINEFIT_LOG";

/// Demo evaluation range: the sample range widened by 0.5 on both sides.
const DEMO_MARGIN: f64 = 0.5;

/// Entry point for the `splinefit` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = crate::cli::Cli::parse();
    match cli.command {
        Command::Demo(args) => handle_demo(args),
        Command::Fit(args) => handle_fit(args),
        Command::Plot(args) => handle_plot(args),
    }
}

/// Initialize `env_logger` from `SPLINEFIT_LOG` (default `warn`).
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let env = Env::new().filter_or(LOG_ENV, "warn");
    let mut builder = Builder::from_env(env);
    builder.target(env_logger::Target::Stderr);
    builder.try_init().ok();
}

fn handle_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = demo_config_from_args(&args);
    let sample = demo_sample(config.noise, config.seed)?;
    let run = pipeline::run_fits(&config, sample)?;

    println!("{}", crate::report::format_fit_summary(&run.results, run.sample.x.len()));
    println!("{}", crate::report::format_residual_table(&run.residuals));
    render_and_export(&config, &run)
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let config = fit_config_from_args(&args)?;
    let sample = SampleData {
        x: args.x.clone(),
        y: args.y.clone(),
    };
    let run = pipeline::run_fits(&config, sample)?;

    println!("{}", crate::report::format_fit_summary(&run.results, run.sample.x.len()));

    // A single basis was requested, so its failure is the command's failure.
    let (_, result) = &run.results[0];
    let fit = result.clone()?;

    if !args.at.is_empty() {
        let spline = spline_from_fit(&fit)?;
        let y = spline.evaluate(&args.at);
        println!("{}", crate::report::format_predictions(&args.at, &y));
    }

    render_and_export(&config, &run)
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let curve = read_curve_json(&args.curve)?;
    let plot = crate::plot::render_curve_file(&curve, args.width, args.height);
    println!("{plot}");
    Ok(())
}

fn render_and_export(config: &RunConfig, run: &pipeline::RunOutput) -> Result<(), AppError> {
    if config.plot {
        let samples: Vec<(f64, f64)> = run
            .sample
            .x
            .iter()
            .copied()
            .zip(run.sample.y.iter().copied())
            .collect();
        let plot = crate::plot::render_ascii_plot(&samples, &run.curves, config.plot_width, config.plot_height);
        println!("{plot}");

        if !run.residuals.is_empty() {
            let plot = crate::plot::render_ascii_plot(&[], &run.residuals, config.plot_width, config.plot_height / 2);
            println!("Residuals y - fit at the samples\n{plot}");
        }
    }

    if let Some(path) = &config.export_curve {
        let best = run
            .best()
            .ok_or_else(|| AppError::new(4, "No successful fit to export."))?;
        let curve = build_curve_file(best, config.x_min, config.x_max, config.grid_points)?;
        write_curve_json(path, &curve)?;
        info!("exported {}", best.basis.label());
    }

    Ok(())
}

/// Demo configuration: the four classic bases on knots `0..3`.
pub fn demo_config_from_args(args: &DemoArgs) -> RunConfig {
    let knots = DEMO_KNOTS.to_vec();
    let bases = BasisKind::ALL
        .iter()
        .map(|&kind| match kind {
            BasisKind::Poly => BasisSpec::new(kind, Vec::new(), 2),
            _ => BasisSpec::new(kind, knots.clone(), 0),
        })
        .collect();

    let lo = DEMO_X[0] - DEMO_MARGIN;
    let hi = DEMO_X[DEMO_X.len() - 1] + DEMO_MARGIN;
    run_config(bases, args.noise, args.seed, &args.output, (lo, hi))
}

/// Single-fit configuration; the default evaluation range pads the samples by 10%.
pub fn fit_config_from_args(args: &FitArgs) -> Result<RunConfig, AppError> {
    if args.basis != BasisKind::Poly && args.knots.is_empty() {
        return Err(AppError::new(
            2,
            format!("Basis '{}' requires --knots.", args.basis.display_name()),
        ));
    }
    let breakpoints = if args.basis == BasisKind::Poly {
        Vec::new()
    } else {
        args.knots.clone()
    };
    let spec = BasisSpec::new(args.basis, breakpoints, args.order);

    let lo = args.x.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = args.x.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let pad = if hi > lo { 0.1 * (hi - lo) } else { 1.0 };
    Ok(run_config(vec![spec], 0.0, 0, &args.output, (lo - pad, hi + pad)))
}

fn run_config(bases: Vec<BasisSpec>, noise: f64, seed: u64, output: &OutputArgs, default_range: (f64, f64)) -> RunConfig {
    RunConfig {
        bases,
        noise,
        seed,
        x_min: output.x_min.unwrap_or(default_range.0),
        x_max: output.x_max.unwrap_or(default_range.1),
        grid_points: output.grid_points,
        plot: !output.no_plot,
        plot_width: output.width,
        plot_height: output.height,
        export_curve: output.export_curve.clone(),
    }
}
