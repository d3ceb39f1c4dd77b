/// Alignment used by scroll-to-index computations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    /// Minimal movement: scroll only as far as needed for the row to be fully
    /// visible, keeping the current offset when it already is.
    Auto,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Size on the scroll axis (e.g. height for vertical lists).
    pub main: u32,
    /// Size on the cross axis (e.g. width for vertical lists).
    pub cross: u32,
}

/// A half-open index range into the record list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl WindowRange {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }
}

/// One row of the current window: index into the record list, rendered pixel
/// size, and cumulative start offset (sum of sizes of all preceding rows).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRow {
    pub index: usize,
    pub start: u64,
    pub size: u32,
}

impl VisibleRow {
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.size as u64)
    }
}
