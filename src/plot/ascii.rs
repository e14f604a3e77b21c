//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - sample points: `o`
//! - fitted curves: one marker character per curve, drawn as lines

use crate::domain::CurveFile;

/// One curve to draw.
#[derive(Debug, Clone)]
pub struct CurveSeries {
    pub label: String,
    pub marker: char,
    pub points: Vec<(f64, f64)>,
}

impl CurveSeries {
    /// Pair query points with predicted values.
    pub fn from_xy(label: impl Into<String>, marker: char, x: &[f64], y: &[f64]) -> Self {
        Self {
            label: label.into(),
            marker,
            points: x.iter().copied().zip(y.iter().copied()).collect(),
        }
    }
}

/// Render samples and curves on a shared grid.
///
/// Curves are drawn in order (earlier curves win where they overlap), then
/// samples are overlaid.
pub fn render_ascii_plot(samples: &[(f64, f64)], curves: &[CurveSeries], width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (x_min, x_max) = x_range(samples, curves).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = y_range(samples, curves).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    for curve in curves {
        draw_curve(&mut grid, curve, x_min, x_max, y_min, y_max);
    }

    for &(x, y) in samples {
        if !(x.is_finite() && y.is_finite()) {
            continue;
        }
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        grid[row][col] = 'o';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: x=[{x_min:.3}, {x_max:.3}] | y=[{y_min:.3}, {y_max:.3}]\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    let mut legend: Vec<String> = Vec::new();
    if !samples.is_empty() {
        legend.push("o samples".to_string());
    }
    legend.extend(curves.iter().map(|c| format!("{} {}", c.marker, c.label)));
    if !legend.is_empty() {
        out.push_str(&format!("Legend: {}\n", legend.join(" | ")));
    }

    out
}

/// Render the stored grid of a saved curve file.
pub fn render_curve_file(curve: &CurveFile, width: usize, height: usize) -> String {
    let series = CurveSeries::from_xy(
        curve.fit.basis.label(),
        curve.fit.basis.kind.marker(),
        &curve.grid.x,
        &curve.grid.y,
    );
    render_ascii_plot(&[], &[series], width, height)
}

fn all_points<'a>(samples: &'a [(f64, f64)], curves: &'a [CurveSeries]) -> impl Iterator<Item = (f64, f64)> + 'a {
    samples
        .iter()
        .chain(curves.iter().flat_map(|c| c.points.iter()))
        .copied()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
}

fn x_range(samples: &[(f64, f64)], curves: &[CurveSeries]) -> Option<(f64, f64)> {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    for (x, _) in all_points(samples, curves) {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
    }
    if min_x.is_finite() && max_x.is_finite() && max_x > min_x {
        Some((min_x, max_x))
    } else {
        None
    }
}

fn y_range(samples: &[(f64, f64)], curves: &[CurveSeries]) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for (_, y) in all_points(samples, curves) {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    if !(min_y.is_finite() && max_y.is_finite()) {
        return None;
    }
    if max_y > min_y {
        Some((min_y, max_y))
    } else {
        // Flat curve: center it.
        Some((min_y - 0.5, max_y + 0.5))
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &CurveSeries, x_min: f64, x_max: f64, y_min: f64, y_max: f64) {
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in &curve.points {
        if !(x.is_finite() && y.is_finite()) {
            prev = None;
            continue;
        }
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        if let Some((c0, r0)) = prev {
            draw_line(grid, c0, r0, col, row, curve.marker);
        } else if grid[row][col] == ' ' {
            grid[row][col] = curve.marker;
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
