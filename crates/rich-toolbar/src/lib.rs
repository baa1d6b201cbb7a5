//! Rich Toolbar - an action toolbar for rich-text editors.
//!
//! A toolbar is built from an ordered list of options. Each option becomes a
//! button; pressing it either applies a formatting command to the bound
//! editing surface or asks the host, through a delegate, to show UI such as
//! a color picker.
//!
//! # Example
//!
//! ```
//! use rich_toolbar::prelude::*;
//!
//! let toolbar = RichEditorToolbar::new(Rect::new(0.0, 0.0, 200.0, 44.0));
//! toolbar.set_options(DefaultOption::all_options());
//!
//! // 26 unmeasured buttons overflow a 200-wide toolbar and scroll.
//! assert_eq!(toolbar.content_width(), 26.0 * 50.0);
//! assert!(toolbar.layout().is_scrollable());
//! ```

pub use rich_toolbar_core::*;

/// Geometry, color and image types.
pub mod render {
    pub use rich_toolbar_render::*;
}

pub mod config;
pub mod error;
pub mod prelude;
pub mod widget;

pub use config::ToolbarConfig;
pub use error::{ConfigError, Result};
