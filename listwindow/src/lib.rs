//! A headless windowing engine for large fixed-row-size lists.
//!
//! For adapter-level state machines (deferred view loading, query coordination,
//! combobox selection), see the `listwindow-adapter` crate.
//!
//! This crate focuses on the index-range math needed to render only the rows of
//! a large list that are currently scrolled into view: offset → index mapping,
//! overscanned visible ranges, total content size for scrollbar spacers, and
//! scroll-to-index alignment.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport size (height/width)
//! - scroll offset
//! - the row count and the fixed per-row size
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod options;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use options::{InitialOffset, OnChangeCallback, WindowOptions};
pub use types::{Align, Rect, VisibleRow, WindowRange};
pub use window::ListWindow;
