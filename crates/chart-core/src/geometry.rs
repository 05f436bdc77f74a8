// File: crates/chart-core/src/geometry.rs
// Summary: Tagged geometry result and the single computation entry point.

use crate::column::{build_column, ColumnGeometry};
use crate::line::{build_line, LineGeometry};
use crate::pie::{build_pie, PieSlice};
use crate::series::max_value;
use crate::spec::{ChartKind, ChartSpec};
use crate::types::Layout;

/// Computed drawing primitives for one chart render, tagged by kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Pie(Vec<PieSlice>),
    Line(LineGeometry),
    Column(ColumnGeometry),
}

impl Geometry {
    pub fn kind(&self) -> ChartKind {
        match self {
            Geometry::Pie(_) => ChartKind::Pie,
            Geometry::Line(_) => ChartKind::Line,
            Geometry::Column(_) => ChartKind::Column,
        }
    }
}

/// Compute the full geometry for one spec, or `None` when there is nothing
/// to render: invalid spec, non-finite values, or a degenerate series whose
/// total (pie) or maximum (line/column) is not positive. Pure and
/// deterministic; identical inputs yield identical results.
pub fn compute_geometry(spec: &ChartSpec, layout: &Layout) -> Option<Geometry> {
    if !spec.is_valid() {
        return None;
    }
    if !spec.series.iter().all(|s| s.value.is_finite()) {
        return None;
    }
    // All-zero (or negative) data would divide by zero in the builders;
    // treated as "nothing to render" rather than producing NaN geometry.
    match spec.kind {
        ChartKind::Pie => {
            if spec.total_value() <= 0.0 {
                return None;
            }
            Some(Geometry::Pie(build_pie(&spec.series, &layout.pie)))
        }
        ChartKind::Line => {
            if max_value(&spec.series) <= 0.0 {
                return None;
            }
            Some(Geometry::Line(build_line(&spec.series, &layout.frame)))
        }
        ChartKind::Column => {
            if max_value(&spec.series) <= 0.0 {
                return None;
            }
            Some(Geometry::Column(build_column(&spec.series, &layout.frame)))
        }
    }
}
