//! Toolbar widgets.
//!
//! - [`RichEditorToolbar`]: the toolbar itself
//! - [`ActionButton`]: one button per option
//! - [`CustomOption`] and [`DefaultOption`]: what the buttons stand for
//! - [`ToolbarDelegate`]: callbacks for commands that need host UI

mod action_button;
mod default_option;
mod delegate;
mod option;
mod rich_editor_toolbar;

pub use action_button::{ActionButton, ButtonElement, PressHandler};
pub use default_option::DefaultOption;
pub use delegate::{DelegateOptionSlot, DelegateRequest, DelegateSlot, ToolbarDelegate};
pub use option::{CustomOption, OptionAction, OptionVisual, RichEditorOption};
pub use rich_editor_toolbar::RichEditorToolbar;
