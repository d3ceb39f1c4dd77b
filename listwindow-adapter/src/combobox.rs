use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

/// Fired whenever the selection changes: `Some` on select, `None` on clear.
///
/// This is the injection point for session-level side effects (status lines,
/// dialogs, ...) instead of hardwiring them to a platform facility.
pub type SelectionCallback<R> = Arc<dyn Fn(Option<&R>) + Send + Sync>;

/// Configuration for [`ComboboxState`].
///
/// Cheap to clone: callbacks are `Arc`-stored.
pub struct ComboboxOptions<R, K> {
    /// Stable identity of a record, used for selection comparison and as the
    /// row cache key.
    pub item_key: Arc<dyn Fn(&R) -> K + Send + Sync>,
    /// Display label of a record (e.g. to echo the selection into an input).
    pub item_label: Arc<dyn Fn(&R) -> String + Send + Sync>,
    pub on_selection_change: Option<SelectionCallback<R>>,
}

impl<R, K> Clone for ComboboxOptions<R, K> {
    fn clone(&self) -> Self {
        Self {
            item_key: Arc::clone(&self.item_key),
            item_label: Arc::clone(&self.item_label),
            on_selection_change: self.on_selection_change.clone(),
        }
    }
}

impl<R, K> ComboboxOptions<R, K> {
    pub fn new(
        item_key: impl Fn(&R) -> K + Send + Sync + 'static,
        item_label: impl Fn(&R) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            item_key: Arc::new(item_key),
            item_label: Arc::new(item_label),
            on_selection_change: None,
        }
    }

    pub fn with_on_selection_change(
        mut self,
        on_selection_change: Option<impl Fn(Option<&R>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_selection_change = on_selection_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<R, K> fmt::Debug for ComboboxOptions<R, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComboboxOptions").finish_non_exhaustive()
    }
}

/// Selection and highlight state for a filtered list.
///
/// At most one record is selected and at most one index is highlighted; the
/// two are independent. The state holds record *keys*, never the records
/// themselves, so a refetched list keeps the selection as long as the record
/// is still present.
pub struct ComboboxState<R, K> {
    options: ComboboxOptions<R, K>,
    highlighted: Option<usize>,
    selected_key: Option<K>,
    selected_label: Option<String>,
}

impl<R, K> ComboboxState<R, K> {
    pub fn new(options: ComboboxOptions<R, K>) -> Self {
        Self {
            options,
            highlighted: None,
            selected_key: None,
            selected_label: None,
        }
    }

    pub fn options(&self) -> &ComboboxOptions<R, K> {
        &self.options
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted == Some(index)
    }

    pub fn selected_key(&self) -> Option<&K> {
        self.selected_key.as_ref()
    }

    /// Display label of the current selection, if any.
    pub fn selected_label(&self) -> Option<&str> {
        self.selected_label.as_deref()
    }

    /// Sets the highlight. Out-of-range indexes clear it.
    ///
    /// Returns the new highlight when it changed.
    pub fn set_highlight(&mut self, index: Option<usize>, count: usize) -> Option<usize> {
        let next = index.filter(|&i| i < count);
        if next == self.highlighted {
            return None;
        }
        self.highlighted = next;
        next
    }

    /// Moves the highlight down one row, wrapping at the end.
    ///
    /// Returns the new highlight (`None` on an empty list).
    pub fn highlight_next(&mut self, count: usize) -> Option<usize> {
        if count == 0 {
            self.highlighted = None;
            return None;
        }
        let next = match self.highlighted {
            None => 0,
            Some(i) => (i + 1) % count,
        };
        self.highlighted = Some(next);
        Some(next)
    }

    /// Moves the highlight up one row, wrapping at the start.
    pub fn highlight_prev(&mut self, count: usize) -> Option<usize> {
        if count == 0 {
            self.highlighted = None;
            return None;
        }
        let next = match self.highlighted {
            None | Some(0) => count - 1,
            Some(i) => i - 1,
        };
        self.highlighted = Some(next);
        Some(next)
    }

    /// Drops the highlight when the record list shrank beneath it.
    pub fn clamp_highlight(&mut self, count: usize) {
        if let Some(i) = self.highlighted {
            if i >= count {
                self.highlighted = None;
            }
        }
    }

    /// Selects `record` and fires the selection callback.
    pub fn select(&mut self, record: &R) {
        self.selected_key = Some((self.options.item_key)(record));
        self.selected_label = Some((self.options.item_label)(record));
        if let Some(cb) = &self.options.on_selection_change {
            cb(Some(record));
        }
    }

    /// Clears the selection and fires the selection callback with `None`.
    ///
    /// A distinct explicit action: deselecting is never implied by anything
    /// else.
    pub fn clear_selection(&mut self) {
        self.selected_key = None;
        self.selected_label = None;
        if let Some(cb) = &self.options.on_selection_change {
            cb(None);
        }
    }
}

impl<R, K: PartialEq> ComboboxState<R, K> {
    pub fn is_selected(&self, record: &R) -> bool {
        match &self.selected_key {
            Some(key) => *key == (self.options.item_key)(record),
            None => false,
        }
    }
}

impl<R, K: fmt::Debug> fmt::Debug for ComboboxState<R, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComboboxState")
            .field("highlighted", &self.highlighted)
            .field("selected_key", &self.selected_key)
            .field("selected_label", &self.selected_label)
            .finish()
    }
}
