// File: crates/chart-core/src/hover.rs
// Summary: Hover selection state keyed by series index.

/// The currently hovered series index, or none. A weak back-reference into
/// the active spec's series: it never owns the item, and the owner must
/// clear it whenever the active spec is replaced so no stale index survives
/// a dataset or kind switch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    hovered: Option<usize>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, idx: usize) {
        self.hovered = Some(idx);
    }

    pub fn clear(&mut self) {
        self.hovered = None;
    }

    pub fn is_hovered(&self, idx: usize) -> bool {
        self.hovered == Some(idx)
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }
}
