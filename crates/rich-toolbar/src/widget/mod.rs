//! Toolbar widget layer.
//!
//! - [`widgets`]: the toolbar, its buttons and the option model
//! - [`layout`]: width computation for the button row
//! - [`EditingTarget`]: the editing surface stock commands act on

mod editor;
pub mod layout;
pub mod widgets;

pub use editor::EditingTarget;
