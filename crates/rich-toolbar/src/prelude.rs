//! Prelude module for Rich Toolbar.
//!
//! ```ignore
//! use rich_toolbar::prelude::*;
//! ```

// ============================================================================
// Signal/Slot and Property System
// ============================================================================

pub use rich_toolbar_core::{ConnectionId, Property, Signal};

// ============================================================================
// Geometry and Images
// ============================================================================

pub use rich_toolbar_render::{Color, Image, Point, Rect, Size};

// ============================================================================
// Toolbar
// ============================================================================

pub use crate::widget::EditingTarget;
pub use crate::widget::layout::{LayoutMode, ToolbarLayout, ToolbarLayoutEngine};
pub use crate::widget::widgets::{
    ActionButton, CustomOption, DefaultOption, DelegateRequest, RichEditorOption,
    RichEditorToolbar, ToolbarDelegate,
};

// ============================================================================
// Configuration
// ============================================================================

pub use crate::config::ToolbarConfig;
pub use crate::error::ConfigError;
