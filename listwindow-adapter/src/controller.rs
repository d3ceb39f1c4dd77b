use alloc::string::String;
use alloc::vec::Vec;

use listwindow::{Align, ListWindow, WindowOptions};

use crate::{
    ComboboxOptions, ComboboxState, QuerySession, QueryToken, RowKey, RowProps, RowRenderCache,
};

/// One windowed row of a render pass.
///
/// `rerender` is `false` when the row's [`RowProps`] tuple is unchanged since
/// the previous pass; the host must then reuse its previous output for this
/// row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowPass<K> {
    pub key: K,
    pub props: RowProps,
    pub rerender: bool,
}

/// A framework-neutral controller for a filtered, windowed, selectable list.
///
/// Owns a [`ListWindow`], a [`QuerySession`], a [`ComboboxState`], and a
/// [`RowRenderCache`], and keeps them consistent:
/// - query results update the window's row count (last-request-wins)
/// - highlight moves scroll the window so the row is fully visible
/// - [`render_pass`](Self::render_pass) emits the windowed rows with their
///   per-row re-render decision
///
/// This type does not hold any UI objects and performs no async work itself.
/// The host dispatches fetches for the tokens it gets back and feeds results
/// in, processing each event fully before asking for the next render pass.
pub struct SearchListController<R, K> {
    window: ListWindow,
    query: QuerySession<R>,
    combobox: ComboboxState<R, K>,
    cache: RowRenderCache<K>,
}

impl<R, K: RowKey + Clone> SearchListController<R, K> {
    pub fn new(window_options: WindowOptions, combobox_options: ComboboxOptions<R, K>) -> Self {
        Self {
            window: ListWindow::new(window_options),
            query: QuerySession::new(),
            combobox: ComboboxState::new(combobox_options),
            cache: RowRenderCache::new(),
        }
    }

    pub fn window(&self) -> &ListWindow {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut ListWindow {
        &mut self.window
    }

    pub fn combobox(&self) -> &ComboboxState<R, K> {
        &self.combobox
    }

    pub fn query(&self) -> &QuerySession<R> {
        &self.query
    }

    pub fn records(&self) -> &[R] {
        self.query.records()
    }

    /// Spacer height for native scrollbars.
    pub fn total_size(&self) -> u64 {
        self.window.total_size()
    }

    /// The live query text changed. Returns the token for the fetch the host
    /// must dispatch (`None` when the text is unchanged).
    pub fn on_input(&mut self, text: &str) -> Option<QueryToken> {
        self.query.set_query(text)
    }

    /// A record fetch resolved. Applied only when `token` is still the latest
    /// query's; superseded results are dropped and `false` is returned.
    pub fn on_results(&mut self, token: QueryToken, records: Vec<R>) -> bool {
        if !self.query.resolve(token, records) {
            return false;
        }
        let count = self.query.len();
        self.window.set_count(count);
        self.combobox.clamp_highlight(count);
        true
    }

    /// A record fetch failed. Terminal for that query; the previous record
    /// list stays on screen and no retry is issued.
    pub fn on_query_error(&mut self, token: QueryToken, message: impl Into<String>) -> bool {
        self.query.fail(token, message)
    }

    pub fn on_viewport_size(&mut self, main: u32) {
        self.window.set_viewport_size(main);
    }

    /// The host's scroll container moved (wheel/drag/scrollbar).
    pub fn on_scroll(&mut self, offset: u64) {
        self.window.set_scroll_offset_clamped(offset);
    }

    /// Keyboard: highlight the next row (wraps) and scroll it into view.
    pub fn highlight_next(&mut self) -> Option<usize> {
        let next = self.combobox.highlight_next(self.query.len());
        self.follow_highlight(next);
        next
    }

    /// Keyboard: highlight the previous row (wraps) and scroll it into view.
    pub fn highlight_prev(&mut self) -> Option<usize> {
        let next = self.combobox.highlight_prev(self.query.len());
        self.follow_highlight(next);
        next
    }

    /// Pointer: highlight a specific row (e.g. hover). Out-of-range clears.
    pub fn set_highlight(&mut self, index: Option<usize>) {
        let changed = self.combobox.set_highlight(index, self.query.len());
        self.follow_highlight(changed);
    }

    fn follow_highlight(&mut self, index: Option<usize>) {
        if let Some(i) = index {
            self.window.scroll_to_index(i, Align::Auto);
        }
    }

    /// Selects the highlighted record, if any, firing the selection callback.
    pub fn select_highlighted(&mut self) -> bool {
        let Some(index) = self.combobox.highlighted() else {
            return false;
        };
        let Some(record) = self.query.records().get(index) else {
            return false;
        };
        self.combobox.select(record);
        true
    }

    /// Selects the record at `index`, firing the selection callback.
    pub fn select_index(&mut self, index: usize) -> bool {
        let Some(record) = self.query.records().get(index) else {
            return false;
        };
        self.combobox.select(record);
        true
    }

    /// Clears the selection, firing the selection callback with `None`.
    pub fn clear_selection(&mut self) {
        self.combobox.clear_selection();
    }

    /// Emits the current window's rows into `out` (cleared first), one
    /// [`RowPass`] per windowed record, in index order.
    ///
    /// Rows whose index has no record yet (a fetch resolved mid-scroll) are
    /// skipped. The cache is pruned to the emitted keys afterwards, so a row
    /// that scrolls out and back in renders again.
    pub fn render_pass(&mut self, out: &mut Vec<RowPass<K>>) {
        out.clear();

        let Self {
            window,
            query,
            combobox,
            cache,
        } = self;

        let records = query.records();
        window.for_each_visible_row(|row| {
            let Some(record) = records.get(row.index) else {
                return;
            };
            let key = (combobox.options().item_key)(record);
            let props = RowProps {
                index: row.index,
                size: row.size,
                start: row.start,
                selected: combobox.is_selected(record),
                highlighted: combobox.is_highlighted(row.index),
            };
            let rerender = cache.update(key.clone(), props);
            out.push(RowPass {
                key,
                props,
                rerender,
            });
        });

        cache.retain(|k| out.iter().any(|p| p.key == *k));
    }
}
