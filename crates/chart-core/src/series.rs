// File: crates/chart-core/src/series.rs
// Summary: Series item model: one named, colored data point.

/// One data point. `color` is an opaque token (e.g. a CSS color) passed
/// through to the rendering surface unmodified.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesItem {
    pub name: String,
    pub value: f64,
    pub color: String,
}

impl SeriesItem {
    pub fn new(name: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self { name: name.into(), value, color: color.into() }
    }
}

/// Largest value in the series, or NEG_INFINITY when empty.
pub fn max_value(series: &[SeriesItem]) -> f64 {
    series.iter().fold(f64::NEG_INFINITY, |m, s| m.max(s.value))
}
