use core::fmt;

use crate::RowKey;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
type PropsMap<K> = HashMap<K, RowProps>;
#[cfg(not(feature = "std"))]
type PropsMap<K> = BTreeMap<K, RowProps>;

/// The semantic inputs a rendered row is a pure function of.
///
/// Staleness is decided by an explicit equality check on this whole tuple,
/// never by object identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowProps {
    pub index: usize,
    pub size: u32,
    pub start: u64,
    pub selected: bool,
    pub highlighted: bool,
}

/// A pure-function render cache keyed by record identity.
///
/// A row must skip re-rendering when none of its [`RowProps`] changed between
/// passes, even if sibling rows changed. This is a behavioral contract for
/// hosts, not an optional optimization, so [`update`](Self::update) is the
/// single source of truth for "does this row need drawing".
pub struct RowRenderCache<K> {
    map: PropsMap<K>,
    renders: u64,
}

impl<K: RowKey> Default for RowRenderCache<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: RowKey> RowRenderCache<K> {
    pub fn new() -> Self {
        Self {
            map: PropsMap::new(),
            renders: 0,
        }
    }

    /// Records `props` for `key` and reports whether the row must re-render:
    /// `true` for a key not seen since the last prune or when any field of the
    /// tuple changed, `false` when the tuple is identical to the last pass.
    pub fn update(&mut self, key: K, props: RowProps) -> bool {
        match self.map.get_mut(&key) {
            Some(prev) if *prev == props => false,
            Some(prev) => {
                *prev = props;
                self.renders = self.renders.saturating_add(1);
                true
            }
            None => {
                self.map.insert(key, props);
                self.renders = self.renders.saturating_add(1);
                true
            }
        }
    }

    /// Last-known props for `key`, if it is still cached.
    pub fn get(&self, key: &K) -> Option<&RowProps> {
        self.map.get(key)
    }

    /// Drops entries for rows that left the window, keeping the cache bounded
    /// by the window size.
    pub fn retain(&mut self, mut keep: impl FnMut(&K) -> bool) {
        self.map.retain(|k, _| keep(k));
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Total number of re-renders reported so far. Useful to assert that
    /// unrelated sibling updates did not invalidate a row.
    pub fn renders(&self) -> u64 {
        self.renders
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}

impl<K: RowKey + fmt::Debug> fmt::Debug for RowRenderCache<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowRenderCache")
            .field("rows", &self.map.len())
            .field("renders", &self.renders)
            .finish()
    }
}
