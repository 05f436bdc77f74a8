// File: crates/chart-core/src/spec.rs
// Summary: Chart specification (kind, title, series) and its validity rules.

use thiserror::Error;

use crate::series::SeriesItem;

/// The three supported chart geometries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Column,
    Pie,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Line, ChartKind::Column, ChartKind::Pie];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Column => "column",
            ChartKind::Pie => "pie",
        }
    }
}

/// Why a spec is not renderable. Consumers that only need a yes/no answer
/// use [`ChartSpec::is_valid`]; nothing in the geometry layer raises.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("chart title is empty")]
    EmptyTitle,
    #[error("chart series is empty")]
    EmptySeries,
}

/// The validated description of what to draw. Constructed wholesale by the
/// caller and replaced wholesale on every dataset or kind switch; series
/// order determines angular order (pie) and x-position order (line/column).
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub series: Vec<SeriesItem>,
}

impl ChartSpec {
    pub fn new(kind: ChartKind, title: impl Into<String>, series: Vec<SeriesItem>) -> Self {
        Self { kind, title: title.into(), series }
    }

    /// Structured validity check: non-empty title, non-empty series.
    /// The kind is always known by construction.
    pub fn check(&self) -> Result<(), SpecError> {
        if self.title.is_empty() {
            return Err(SpecError::EmptyTitle);
        }
        if self.series.is_empty() {
            return Err(SpecError::EmptySeries);
        }
        Ok(())
    }

    /// Boolean predicate consumed by renderers before computing geometry.
    /// An invalid spec means "nothing to render", never an error.
    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }

    /// Sum of all series values, exposed for display alongside the chart.
    pub fn total_value(&self) -> f64 {
        self.series.iter().map(|s| s.value).sum()
    }
}
