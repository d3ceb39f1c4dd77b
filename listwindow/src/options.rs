use alloc::sync::Arc;

use crate::window::ListWindow;
use crate::Rect;

/// A callback fired when the window's state changes.
pub type OnChangeCallback = Arc<dyn Fn(&ListWindow) + Send + Sync>;

/// Initial scroll offset configuration.
#[derive(Clone)]
pub enum InitialOffset {
    /// A fixed initial offset.
    Value(u64),
    /// A lazily evaluated initial offset provider (called by `ListWindow::new`).
    Provider(Arc<dyn Fn() -> u64 + Send + Sync>),
}

impl InitialOffset {
    pub(crate) fn resolve(&self) -> u64 {
        match self {
            Self::Value(v) => *v,
            Self::Provider(f) => f(),
        }
    }
}

impl Default for InitialOffset {
    fn default() -> Self {
        Self::Value(0)
    }
}

impl core::fmt::Debug for InitialOffset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// Configuration for [`crate::ListWindow`].
///
/// Cheap to clone: the only heavy fields are `Arc`-stored callbacks, so
/// adapters can tweak a field and rebuild without reallocating closures.
pub struct WindowOptions {
    /// Number of records in the list.
    pub count: usize,

    /// Fixed per-row size on the scroll axis, in pixels.
    ///
    /// Every range computation is O(1) arithmetic on this value; a size of 0
    /// degenerates to an empty window.
    pub row_size: u32,

    /// Rows rendered beyond the visible viewport on each side, to mask
    /// scroll-triggered recomputation latency.
    pub overscan: usize,

    /// Enables/disables the window. When disabled, query methods return empty
    /// results and `total_size` reports 0.
    pub enabled: bool,

    /// The initial size of the scrollable area, where `main` is the windowed
    /// axis (e.g. height for vertical lists).
    pub initial_rect: Option<Rect>,

    /// Initial scroll offset.
    pub initial_offset: InitialOffset,

    /// Optional callback fired when the window's internal state changes.
    pub on_change: Option<OnChangeCallback>,
}

impl Clone for WindowOptions {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            row_size: self.row_size,
            overscan: self.overscan,
            enabled: self.enabled,
            initial_rect: self.initial_rect,
            initial_offset: self.initial_offset.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

impl WindowOptions {
    /// Creates options for a list of `count` rows of `row_size` pixels each.
    pub fn new(count: usize, row_size: u32) -> Self {
        Self {
            count,
            row_size,
            overscan: 1,
            enabled: true,
            initial_rect: None,
            initial_offset: InitialOffset::default(),
            on_change: None,
        }
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the initial viewport rectangle.
    pub fn with_initial_rect(mut self, initial_rect: Option<Rect>) -> Self {
        self.initial_rect = initial_rect;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: InitialOffset) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_initial_offset_value(mut self, initial_offset: u64) -> Self {
        self.initial_offset = InitialOffset::Value(initial_offset);
        self
    }

    pub fn with_initial_offset_provider(
        mut self,
        initial_offset: impl Fn() -> u64 + Send + Sync + 'static,
    ) -> Self {
        self.initial_offset = InitialOffset::Provider(Arc::new(initial_offset));
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&ListWindow) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for WindowOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowOptions")
            .field("count", &self.count)
            .field("row_size", &self.row_size)
            .field("overscan", &self.overscan)
            .field("enabled", &self.enabled)
            .field("initial_rect", &self.initial_rect)
            .field("initial_offset", &self.initial_offset)
            .finish_non_exhaustive()
    }
}
