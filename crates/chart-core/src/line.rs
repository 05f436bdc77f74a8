// File: crates/chart-core/src/line.rs
// Summary: Line geometry: vertices, connecting polyline, baseline-closed area.

use crate::axis::{y_axis_labels, AxisLabel};
use crate::series::{max_value, SeriesItem};
use crate::types::Frame;

/// One vertex in canvas space plus the data it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub name: String,
    pub value: f64,
    pub idx: usize,
}

/// Everything needed to draw one line chart.
#[derive(Clone, Debug, PartialEq)]
pub struct LineGeometry {
    pub points: Vec<LinePoint>,
    /// Space-separated `x,y` pairs for an SVG polyline.
    pub polyline_points: String,
    /// Fill path bounded above by the line and below by the baseline.
    pub area_path: String,
    pub labels: Vec<AxisLabel>,
}

/// Place vertices left to right in series order. The maximum value maps to
/// the top of the plot area (`y == pad`) and value 0 to the baseline; a
/// single point is centered horizontally.
///
/// `series` must be non-empty with a positive, finite maximum; the dispatch
/// in [`crate::geometry::compute_geometry`] guards degenerate inputs.
pub fn build_line(series: &[SeriesItem], frame: &Frame) -> LineGeometry {
    let max = max_value(series);
    let w = frame.plot_width();
    let h = frame.plot_height();
    let n = series.len();
    let step = if n > 1 { w / (n - 1) as f64 } else { w / 2.0 };

    let points: Vec<LinePoint> = series
        .iter()
        .enumerate()
        .map(|(i, item)| LinePoint {
            x: frame.pad + if n > 1 { i as f64 * step } else { w / 2.0 },
            y: frame.pad + h - (item.value / max) * h,
            color: item.color.clone(),
            name: item.name.clone(),
            value: item.value,
            idx: i,
        })
        .collect();

    let polyline_points = points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");

    // Area path: down to the baseline under the first point, along the
    // vertices, then back down under the last point and close.
    let baseline = frame.baseline();
    let first = &points[0];
    let last = &points[n - 1];
    let spine = points
        .iter()
        .map(|p| format!("L {} {}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");
    let area_path = format!("M {} {baseline} {spine} L {} {baseline} Z", first.x, last.x);

    LineGeometry {
        points,
        polyline_points,
        area_path,
        labels: y_axis_labels(max, frame),
    }
}
