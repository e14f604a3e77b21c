//! Formatted terminal output for fits.
//!
//! Formatting lives here so the math/fitting code stays clean and output
//! changes stay localized.

use crate::domain::{BasisSpec, FitResult};
use crate::error::FitError;
use crate::plot::CurveSeries;

/// One line per attempted basis, marking the lowest-SSE fit with `*`.
pub fn format_fit_summary(results: &[(BasisSpec, Result<FitResult, FitError>)], n_samples: usize) -> String {
    let mut out = String::new();

    out.push_str("=== splinefit - least-squares basis fits ===\n");
    out.push_str(&format!("Samples: n={n_samples}\n"));
    out.push_str("\nFit diagnostics:\n");

    let best = results
        .iter()
        .enumerate()
        .filter_map(|(i, (_, r))| r.as_ref().ok().map(|f| (i, f.quality.sse)))
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i);

    for (i, (spec, result)) in results.iter().enumerate() {
        match result {
            Ok(fit) => {
                let chosen = if Some(i) == best { "*" } else { " " };
                out.push_str(&format!(
                    "{chosen} [{}] {:<22} SSE={:.6e} RMSE={:.6e} max|r|={:.6e}\n",
                    spec.kind.marker(),
                    spec.label(),
                    fit.quality.sse,
                    fit.quality.rmse,
                    fit.quality.max_abs_residual,
                ));
                out.push_str(&format!("      coefficients: {}\n", fmt_vec(&fit.coefficients)));
            }
            Err(e) => {
                out.push_str(&format!("  (failed {}) {e}\n", spec.label()));
            }
        }
    }

    out
}

/// Two-column table of query points and predictions.
pub fn format_predictions(x: &[f64], y: &[f64]) -> String {
    let mut out = String::new();
    out.push_str(format!("{:>14} {:>14}\n", "x", "y_fit").trim_end());
    out.push('\n');
    out.push_str(format!("{:-<14} {:-<14}\n", "", "").trim_end());
    out.push('\n');
    for (xi, yi) in x.iter().zip(y) {
        out.push_str(&format!("{xi:>14.6} {yi:>14.6}\n"));
    }
    out
}

/// Residual `y - ŷ` at every sample, one column per fit (headed by its marker).
///
/// All series are expected to share the same sample abscissas in the same order.
pub fn format_residual_table(series: &[CurveSeries]) -> String {
    let Some(first) = series.first() else {
        return String::new();
    };

    let mut out = String::from("Residuals y - fit at the samples:\n");
    let mut header = format!("{:>10}", "x");
    for s in series {
        header.push_str(&format!(" {:>13}", format!("[{}]", s.marker)));
    }
    out.push_str(&header);
    out.push('\n');

    for (i, &(x, _)) in first.points.iter().enumerate() {
        let mut row = format!("{x:>10.4}");
        for s in series {
            match s.points.get(i) {
                Some(&(_, r)) => row.push_str(&format!(" {r:>13.4e}")),
                None => row.push_str(&format!(" {:>13}", "-")),
            }
        }
        out.push_str(&row);
        out.push('\n');
    }
    out
}

fn fmt_vec(v: &[f64]) -> String {
    let parts: Vec<String> = v.iter().map(|x| format!("{x:.6}")).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BasisKind, FitQuality};

    #[test]
    fn summary_marks_best_and_lists_failures() {
        let quality = |sse: f64| FitQuality {
            sse,
            rmse: sse.sqrt(),
            max_abs_residual: sse.sqrt(),
            n: 3,
        };
        let hat = BasisSpec::new(BasisKind::Hat, vec![0.0, 1.0], 0);
        let poly = BasisSpec::new(BasisKind::Poly, Vec::new(), 1);
        let bad = BasisSpec::new(BasisKind::Poly, Vec::new(), 9);
        let results = vec![
            (
                hat.clone(),
                Ok(FitResult {
                    basis: hat,
                    coefficients: vec![1.0, 2.0],
                    quality: quality(0.5),
                }),
            ),
            (
                poly.clone(),
                Ok(FitResult {
                    basis: poly,
                    coefficients: vec![0.0, 1.0],
                    quality: quality(0.1),
                }),
            ),
            (bad, Err(FitError::SingularMatrix { n: 3, k: 10 })),
        ];

        let txt = format_fit_summary(&results, 3);
        assert!(txt.contains("Samples: n=3"));
        assert!(txt.contains("  [h] hat (2 knots)"), "{txt}");
        assert!(txt.contains("* [p] polynomial (order 1)"), "{txt}");
        assert!(txt.contains("coefficients: [1.000000, 2.000000]"));
        assert!(txt.contains("(failed polynomial (order 9))"));
    }

    #[test]
    fn residual_table_has_one_column_per_fit() {
        let hat = CurveSeries::from_xy("hat", 'h', &[0.0, 1.5], &[0.0, -0.25]);
        let poly = CurveSeries::from_xy("poly", 'p', &[0.0, 1.5], &[0.125, 0.5]);
        let txt = format_residual_table(&[hat, poly]);
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines.len(), 4, "{txt}");
        assert!(lines[1].contains("[h]") && lines[1].contains("[p]"));
        assert!(lines[2].trim_start().starts_with("0.0000"));
        assert!(lines[2].ends_with("1.2500e-1"), "{txt}");
        assert!(lines[3].contains("-2.5000e-1"), "{txt}");
        assert!(format_residual_table(&[]).is_empty());
    }

    #[test]
    fn predictions_table_has_one_row_per_point() {
        let txt = format_predictions(&[0.5, 1.5], &[0.25, 0.75]);
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].ends_with("0.250000"));
        assert!(lines[3].trim_start().starts_with("1.500000"));
    }
}
