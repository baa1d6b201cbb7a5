//! Layout of the toolbar button row.
//!
//! The toolbar lays its buttons out in a single horizontal row. The host
//! reports the width of each button once it has measured it; until then the
//! engine falls back to a configured width. See [`ToolbarLayoutEngine`].

mod toolbar_layout;

pub use toolbar_layout::{LayoutMode, Measurable, ToolbarLayout, ToolbarLayoutEngine};
