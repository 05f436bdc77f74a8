// File: crates/chart-core/src/axis.rs
// Summary: Y-axis tick labels shared by the line and column builders.

use crate::types::Frame;

/// Number of intervals on the Y axis; produces `TICK_STEPS + 1` labels.
pub const TICK_STEPS: usize = 5;

/// One Y-axis tick: rounded display value and its canvas y position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLabel {
    pub value: i64,
    pub y: f64,
}

/// Evenly spaced ticks from `max_value` at the top of the plot area down to
/// 0 at the baseline. Values are rounded independently per tick.
pub fn y_axis_labels(max_value: f64, frame: &Frame) -> Vec<AxisLabel> {
    let h = frame.plot_height();
    (0..=TICK_STEPS)
        .map(|i| AxisLabel {
            value: (max_value / TICK_STEPS as f64 * (TICK_STEPS - i) as f64).round() as i64,
            y: frame.pad + (i as f64 / TICK_STEPS as f64) * h,
        })
        .collect()
}
