// File: crates/chart-core/src/pie.rs
// Summary: Pie geometry: contiguous wedge paths, label anchors, percentages.

use std::f64::consts::PI;

use crate::series::SeriesItem;
use crate::types::PieLayout;

/// Fraction of the radius at which slice labels are anchored.
const LABEL_RADIUS_FACTOR: f64 = 0.65;

/// One pie wedge: an SVG path plus the data it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    /// Path: move to center, line to the arc start, clockwise arc of radius
    /// r to the arc end, close back to center.
    pub d: String,
    pub color: String,
    pub name: String,
    pub value: f64,
    /// Rounded share of the total, in percent. Slices round independently,
    /// so the column of percentages need not sum to exactly 100.
    pub pct: u32,
    /// Label anchor on the slice bisector.
    pub label_x: f64,
    pub label_y: f64,
    /// Angular span in radians, screen convention (+y down, -PI/2 is up).
    pub start_angle: f64,
    pub end_angle: f64,
    /// Index of the source item in the spec's series.
    pub idx: usize,
}

/// Build wedges for every item in series order, starting at 12 o'clock.
/// Each slice's sweep is its share of the total; the next slice starts where
/// the previous one ended, so together they cover 2*PI up to float
/// accumulation (no gap/overlap correction is applied).
///
/// `series` must be non-empty with a positive, finite total; the dispatch in
/// [`crate::geometry::compute_geometry`] guards degenerate inputs.
pub fn build_pie(series: &[SeriesItem], layout: &PieLayout) -> Vec<PieSlice> {
    let total: f64 = series.iter().map(|s| s.value).sum();
    let mut start = -PI / 2.0;
    series
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let end = start + (item.value / total) * 2.0 * PI;
            let slice = make_slice(start, end, item, idx, total, layout);
            start = end;
            slice
        })
        .collect()
}

fn make_slice(
    start: f64,
    end: f64,
    item: &SeriesItem,
    idx: usize,
    total: f64,
    layout: &PieLayout,
) -> PieSlice {
    let PieLayout { cx, cy, radius: r } = *layout;
    let x1 = cx + r * start.cos();
    let y1 = cy + r * start.sin();
    let x2 = cx + r * end.cos();
    let y2 = cy + r * end.sin();
    // Arcs longer than a half-circle need the large-arc variant.
    let large = if end - start > PI { 1 } else { 0 };
    let mid = (start + end) / 2.0;
    let label_r = r * LABEL_RADIUS_FACTOR;
    PieSlice {
        d: format!("M {cx} {cy} L {x1} {y1} A {r} {r} 0 {large} 1 {x2} {y2} Z"),
        color: item.color.clone(),
        name: item.name.clone(),
        value: item.value,
        pct: ((item.value / total) * 100.0).round() as u32,
        label_x: cx + label_r * mid.cos(),
        label_y: cy + label_r * mid.sin(),
        start_angle: start,
        end_angle: end,
        idx,
    }
}
