// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the spec model and geometry builders.

pub mod axis;
pub mod column;
pub mod geometry;
pub mod hover;
pub mod line;
pub mod pie;
pub mod series;
pub mod spec;
pub mod types;

pub use axis::{y_axis_labels, AxisLabel};
pub use column::{ColumnBar, ColumnGeometry};
pub use geometry::{compute_geometry, Geometry};
pub use hover::HoverState;
pub use line::{LineGeometry, LinePoint};
pub use pie::PieSlice;
pub use series::SeriesItem;
pub use spec::{ChartKind, ChartSpec, SpecError};
pub use types::{Frame, Layout, PieLayout};
