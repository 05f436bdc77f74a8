// File: crates/chart-render-svg/src/theme.rs
// Summary: Light/Dark theming for the SVG chart surface.

/// Surface colors as CSS color strings. Series colors are not themed; they
/// travel with each series item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub grid: &'static str,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#121214",
            text: "#ebebf5",
            muted: "#9696a0",
            grid: "#28282d",
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: "#fafafc",
            text: "#14141e",
            muted: "#64646e",
            grid: "#e6e6eb",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
