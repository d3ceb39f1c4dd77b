//! Adapter state machines for the `listwindow` crate.
//!
//! The `listwindow` crate is UI-agnostic and focuses on the windowing math.
//! This crate provides the framework-neutral state a host typically wires
//! around it:
//!
//! - Deferred view loading with an optional warm-up (prefetch) hint
//! - Last-request-wins query coordination for async record fetches
//! - Combobox selection/highlight state with an injected selection callback
//! - A pure-function row render cache (explicit tuple equality, not identity)
//! - A controller tying all of the above to a `ListWindow`
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings):
//! the host dispatches the actual async work and feeds completions back in.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod combobox;
mod controller;
mod key;
mod loader;
mod query;
mod rowcache;


pub use combobox::{ComboboxOptions, ComboboxState, SelectionCallback};
pub use controller::{RowPass, SearchListController};
pub use key::RowKey;
pub use loader::{DeferredLoader, LoadState, ViewState};
pub use query::{QuerySession, QueryStatus, QueryToken};
pub use rowcache::{RowProps, RowRenderCache};
