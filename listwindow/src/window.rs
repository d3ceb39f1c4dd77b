use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;
use core::cmp;

use crate::{Align, Rect, VisibleRow, WindowOptions, WindowRange};

/// A headless list-windowing engine for fixed-size rows.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects or record data.
/// - Your adapter drives it by providing viewport geometry and scroll offsets.
/// - Rendering is exposed via zero-allocation iteration APIs (`for_each_visible_row`).
///
/// Because every row has the same size, all range queries are O(1) arithmetic:
/// a row's start offset is `index * row_size` and the total content size is
/// `count * row_size` (used by hosts to size a full-height scrollbar spacer).
#[derive(Clone, Debug)]
pub struct ListWindow {
    options: WindowOptions,
    viewport_size: u32,
    scroll_offset: u64,
    scroll_rect: Rect,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl ListWindow {
    /// Creates a new window from options.
    ///
    /// If `options.initial_rect` and/or `options.initial_offset` are set, those
    /// values are applied immediately.
    pub fn new(options: WindowOptions) -> Self {
        let scroll_rect = options.initial_rect.unwrap_or_default();
        let scroll_offset = options.initial_offset.resolve();
        lwdebug!(
            count = options.count,
            row_size = options.row_size,
            overscan = options.overscan,
            enabled = options.enabled,
            "ListWindow::new"
        );
        Self {
            viewport_size: scroll_rect.main,
            scroll_offset,
            scroll_rect,
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    fn reset_to_initial(&mut self) {
        self.scroll_offset = self.options.initial_offset.resolve();
        self.scroll_rect = self.options.initial_rect.unwrap_or_default();
        self.viewport_size = self.scroll_rect.main;
    }

    pub fn set_options(&mut self, options: WindowOptions) {
        let was_enabled = self.options.enabled;
        self.options = options;
        lwtrace!(
            count = self.options.count,
            row_size = self.options.row_size,
            overscan = self.options.overscan,
            enabled = self.options.enabled,
            "ListWindow::set_options"
        );

        if !self.options.enabled {
            self.viewport_size = 0;
            self.scroll_offset = self.options.initial_offset.resolve();
            self.scroll_rect = Rect::default();
        } else if !was_enabled {
            self.reset_to_initial();
        }

        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut WindowOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&ListWindow) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Recommended for UI adapters: on a typical event you might update the
    /// viewport rect and the scroll offset together. Without batching, each
    /// setter may trigger `on_change`, which can be expensive if the callback
    /// drives rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn row_size(&self) -> u32 {
        self.options.row_size
    }

    pub fn overscan(&self) -> usize {
        self.options.overscan
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.options.enabled == enabled {
            return;
        }
        self.options.enabled = enabled;
        if !enabled {
            self.viewport_size = 0;
            self.scroll_offset = self.options.initial_offset.resolve();
            self.scroll_rect = Rect::default();
        } else {
            self.reset_to_initial();
        }
        self.notify();
    }

    pub fn viewport_size(&self) -> u32 {
        self.viewport_size
    }

    pub fn scroll_rect(&self) -> Rect {
        self.scroll_rect
    }

    pub fn set_scroll_rect(&mut self, rect: Rect) {
        if self.scroll_rect == rect {
            return;
        }
        self.scroll_rect = rect;
        self.viewport_size = rect.main;
        self.notify();
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn set_viewport_size(&mut self, size: u32) {
        if self.viewport_size == size && self.scroll_rect.main == size {
            return;
        }
        self.viewport_size = size;
        self.scroll_rect.main = size;
        self.notify();
    }

    pub fn set_scroll_offset(&mut self, offset: u64) {
        if self.scroll_offset == offset {
            return;
        }
        lwtrace!(offset, "set_scroll_offset");
        self.scroll_offset = offset;
        self.notify();
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: u64) {
        let clamped = self.clamp_scroll_offset(offset);
        self.set_scroll_offset(clamped);
    }

    pub fn set_viewport_and_scroll(&mut self, viewport_size: u32, scroll_offset: u64) {
        self.batch_update(|w| {
            w.set_viewport_size(viewport_size);
            w.set_scroll_offset(scroll_offset);
        });
    }

    pub fn set_viewport_and_scroll_clamped(&mut self, viewport_size: u32, scroll_offset: u64) {
        self.batch_update(|w| {
            w.set_viewport_size(viewport_size);
            w.set_scroll_offset_clamped(scroll_offset);
        });
    }

    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        lwdebug!(count, "set_count");
        self.options.count = count;
        self.notify();
    }

    pub fn set_row_size(&mut self, row_size: u32) {
        if self.options.row_size == row_size {
            return;
        }
        self.options.row_size = row_size;
        self.notify();
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        if self.options.overscan == overscan {
            return;
        }
        self.options.overscan = overscan;
        self.notify();
    }

    /// Total content size on the scroll axis: `count * row_size`.
    ///
    /// Hosts use this to size a full-height spacer so native scrollbars behave
    /// as if all rows were rendered.
    pub fn total_size(&self) -> u64 {
        if !self.options.enabled {
            return 0;
        }
        (self.options.count as u64).saturating_mul(self.options.row_size as u64)
    }

    /// The minimal contiguous index range whose rows cover the viewport's
    /// visible pixel extent (no overscan).
    pub fn visible_range(&self) -> WindowRange {
        if !self.options.enabled {
            return WindowRange {
                start_index: 0,
                end_index: 0,
            };
        }
        self.compute_visible_range(self.scroll_offset, self.viewport_size)
    }

    pub fn visible_range_for(&self, scroll_offset: u64, viewport_size: u32) -> WindowRange {
        if !self.options.enabled {
            return WindowRange {
                start_index: 0,
                end_index: 0,
            };
        }
        self.compute_visible_range(scroll_offset, viewport_size)
    }

    /// The visible range expanded by `overscan` rows on each side, clamped to
    /// `[0, count)`.
    pub fn window_range(&self) -> WindowRange {
        if !self.options.enabled {
            return WindowRange {
                start_index: 0,
                end_index: 0,
            };
        }
        self.compute_window_range(self.scroll_offset, self.viewport_size)
    }

    pub fn window_range_for(&self, scroll_offset: u64, viewport_size: u32) -> WindowRange {
        if !self.options.enabled {
            return WindowRange {
                start_index: 0,
                end_index: 0,
            };
        }
        self.compute_window_range(scroll_offset, viewport_size)
    }

    /// Calls `f` with a [`VisibleRow`] for every row in the current window
    /// range, in index order.
    pub fn for_each_visible_row(&self, f: impl FnMut(VisibleRow)) {
        self.for_each_visible_row_for(self.scroll_offset, self.viewport_size, f);
    }

    pub fn for_each_visible_row_for(
        &self,
        scroll_offset: u64,
        viewport_size: u32,
        mut f: impl FnMut(VisibleRow),
    ) {
        if !self.options.enabled {
            return;
        }

        let range = self.compute_window_range(scroll_offset, viewport_size);
        if range.is_empty() {
            return;
        }

        let size = self.options.row_size;
        let mut start = (range.start_index as u64).saturating_mul(size as u64);
        for index in range.start_index..range.end_index {
            f(VisibleRow { index, start, size });
            start = start.saturating_add(size as u64);
        }
    }

    /// Collects the current window's rows into `out` (clears `out` first).
    ///
    /// Convenience wrapper around [`Self::for_each_visible_row`]; for maximum
    /// performance, reuse a scratch buffer in your adapter.
    pub fn collect_visible_rows(&self, out: &mut Vec<VisibleRow>) {
        out.clear();
        self.for_each_visible_row(|row| out.push(row));
    }

    /// Returns the row at `index`, or `None` when disabled or out of bounds.
    pub fn row(&self, index: usize) -> Option<VisibleRow> {
        if !self.options.enabled || index >= self.options.count {
            return None;
        }
        let size = self.options.row_size;
        Some(VisibleRow {
            index,
            start: (index as u64).saturating_mul(size as u64),
            size,
        })
    }

    /// Maps a pixel offset to the index of the row covering it.
    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        if !self.options.enabled || self.options.count == 0 || self.options.row_size == 0 {
            return None;
        }
        let index = (offset / self.options.row_size as u64) as usize;
        Some(index.min(self.options.count - 1))
    }

    /// Programmatically scrolls to an index.
    ///
    /// Sets the internal `scroll_offset` to the computed (clamped) target and
    /// triggers `on_change`. Returns the applied offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> u64 {
        let offset = self.scroll_to_index_offset(index, align);
        self.set_scroll_offset(offset);
        offset
    }

    /// Computes the clamped scroll offset that brings `index` into view
    /// according to `align`, without applying it.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> u64 {
        if !self.options.enabled {
            return self.options.initial_offset.resolve();
        }
        if self.options.count == 0 {
            return 0;
        }
        let index = index.min(self.options.count - 1);
        let size = self.options.row_size;
        let start = (index as u64).saturating_mul(size as u64);
        let end = start.saturating_add(size as u64);
        let view = self.viewport_size as u64;

        let target = match align {
            Align::Start => start,
            Align::End => end.saturating_sub(view),
            Align::Center => {
                let center = start.saturating_add(size as u64 / 2);
                center.saturating_sub(view / 2)
            }
            Align::Auto => {
                let cur = self.scroll_offset;
                let cur_end = cur.saturating_add(view);
                if start >= cur && end <= cur_end {
                    cur
                } else if start < cur {
                    start
                } else {
                    end.saturating_sub(view)
                }
            }
        };

        self.clamp_scroll_offset(target)
    }

    pub fn max_scroll_offset(&self) -> u64 {
        if !self.options.enabled {
            return self.options.initial_offset.resolve();
        }
        self.total_size().saturating_sub(self.viewport_size as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    fn compute_window_range(&self, scroll_offset: u64, viewport_size: u32) -> WindowRange {
        let mut range = self.compute_visible_range(scroll_offset, viewport_size);
        if range.is_empty() {
            return range;
        }

        let overscan = self.options.overscan;
        range.start_index = range.start_index.saturating_sub(overscan);
        range.end_index = cmp::min(self.options.count, range.end_index.saturating_add(overscan));
        range
    }

    fn compute_visible_range(&self, scroll_offset: u64, viewport_size: u32) -> WindowRange {
        let count = self.options.count;
        let size = self.options.row_size;
        if count == 0 || viewport_size == 0 || size == 0 {
            return WindowRange {
                start_index: 0,
                end_index: 0,
            };
        }

        let size = size as u64;
        let view = viewport_size as u64;
        let total = self.total_size();

        let max_scroll = total.saturating_sub(view);
        let scroll_offset = scroll_offset.min(max_scroll);

        // Last visible pixel is scroll_offset + view - 1; the row covering it
        // is the last visible row.
        let start = (scroll_offset / size) as usize;
        let last_pixel = scroll_offset.saturating_add(view).saturating_sub(1);
        let end = (last_pixel / size) as usize + 1;

        WindowRange {
            start_index: start.min(count),
            end_index: end.min(count),
        }
    }
}
