// File: crates/chart-core/src/types.rs
// Summary: Fixed layout constants (canvas sizes, padding, pie placement).

/// Default Cartesian canvas width in pixels.
pub const FRAME_WIDTH: f64 = 560.0;
/// Default Cartesian canvas height in pixels.
pub const FRAME_HEIGHT: f64 = 300.0;
/// Default padding on every side of the Cartesian plot area.
pub const FRAME_PAD: f64 = 50.0;

/// Default pie center and radius.
pub const PIE_CX: f64 = 160.0;
pub const PIE_CY: f64 = 160.0;
pub const PIE_RADIUS: f64 = 130.0;

/// Canvas frame for the line and column charts.
/// Contract: `width > 2 * pad` and `height > 2 * pad`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub pad: f64,
}

impl Frame {
    pub const fn new(width: f64, height: f64, pad: f64) -> Self {
        Self { width, height, pad }
    }

    /// Usable drawing width after padding.
    pub fn plot_width(&self) -> f64 {
        self.width - 2.0 * self.pad
    }

    /// Usable drawing height after padding.
    pub fn plot_height(&self) -> f64 {
        self.height - 2.0 * self.pad
    }

    /// Y coordinate of value 0 (bars and area fills grow up from here).
    pub fn baseline(&self) -> f64 {
        self.pad + self.plot_height()
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(FRAME_WIDTH, FRAME_HEIGHT, FRAME_PAD)
    }
}

/// Pie placement: center point and radius, in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieLayout {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl PieLayout {
    pub const fn new(cx: f64, cy: f64, radius: f64) -> Self {
        Self { cx, cy, radius }
    }
}

impl Default for PieLayout {
    fn default() -> Self {
        Self::new(PIE_CX, PIE_CY, PIE_RADIUS)
    }
}

/// Per-chart-kind layout constants, bundled so one value covers all three
/// builders. Passed by reference into geometry computation; never global.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Layout {
    pub frame: Frame,
    pub pie: PieLayout,
}
