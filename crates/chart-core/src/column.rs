// File: crates/chart-core/src/column.rs
// Summary: Column geometry: slot layout, capped bar widths, shared baseline.

use crate::axis::{y_axis_labels, AxisLabel};
use crate::series::{max_value, SeriesItem};
use crate::types::Frame;

/// Bars never grow thicker than this, regardless of how few there are.
pub const MAX_BAR_WIDTH: f64 = 60.0;

/// One bar rectangle plus the data it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnBar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub name: String,
    pub value: f64,
    pub idx: usize,
}

/// Everything needed to draw one column chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnGeometry {
    pub bars: Vec<ColumnBar>,
    pub labels: Vec<AxisLabel>,
}

/// Each item gets an equal horizontal slot; the bar fills 60% of it (capped
/// at [`MAX_BAR_WIDTH`]) and is centered within the slot. All bars share the
/// baseline at `pad + h` and the tallest reaches `height == h`.
///
/// `series` must be non-empty with a positive, finite maximum; the dispatch
/// in [`crate::geometry::compute_geometry`] guards degenerate inputs.
pub fn build_column(series: &[SeriesItem], frame: &Frame) -> ColumnGeometry {
    let max = max_value(series);
    let w = frame.plot_width();
    let h = frame.plot_height();
    let gap = w / series.len() as f64;
    let bar_w = MAX_BAR_WIDTH.min(gap * 0.6);

    let bars = series
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let bar_h = (item.value / max) * h;
            ColumnBar {
                x: frame.pad + gap * i as f64 + (gap - bar_w) / 2.0,
                y: frame.pad + h - bar_h,
                width: bar_w,
                height: bar_h,
                color: item.color.clone(),
                name: item.name.clone(),
                value: item.value,
                idx: i,
            }
        })
        .collect();

    ColumnGeometry { bars, labels: y_axis_labels(max, frame) }
}
