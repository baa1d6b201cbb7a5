//! Delegate for actions the toolbar cannot resolve on its own.
//!
//! Picking a color, choosing an image or entering a link needs UI the
//! toolbar does not own. Such commands are forwarded to a
//! [`ToolbarDelegate`], a set of independently optional callbacks supplied by
//! the host. The toolbar holds the delegate weakly, so the host keeps it
//! alive for as long as it wants to receive requests.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use rich_toolbar::render::Rect;
//! use rich_toolbar::widget::widgets::{DelegateRequest, RichEditorToolbar, ToolbarDelegate};
//!
//! let delegate = Arc::new(
//!     ToolbarDelegate::new().on_insert_link(|_toolbar| println!("show link dialog")),
//! );
//!
//! let toolbar = RichEditorToolbar::new(Rect::new(0.0, 0.0, 320.0, 44.0));
//! toolbar.set_delegate(&delegate);
//!
//! assert!(toolbar.request(DelegateRequest::InsertLink));
//! assert!(!toolbar.request(DelegateRequest::InsertImage));
//! ```

use std::fmt;
use std::sync::Arc;

use super::default_option::DefaultOption;
use super::rich_editor_toolbar::RichEditorToolbar;

/// A delegate callback.
pub type DelegateSlot = Arc<dyn Fn(&RichEditorToolbar) + Send + Sync>;

/// A delegate callback that also receives the triggering stock command.
pub type DelegateOptionSlot = Arc<dyn Fn(&RichEditorToolbar, &DefaultOption) + Send + Sync>;

/// A request forwarded to the delegate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelegateRequest {
    /// Show a text color picker, optionally for a specific stock command.
    ChangeTextColor(Option<DefaultOption>),
    /// Show a background color picker.
    ChangeBackgroundColor,
    /// Show an image chooser.
    InsertImage,
    /// Show a link editor.
    InsertLink,
}

/// Callbacks for delegated toolbar requests.
///
/// Every slot is optional; a request whose slot is missing does nothing.
#[derive(Clone, Default)]
pub struct ToolbarDelegate {
    change_text_color: Option<DelegateSlot>,
    change_text_color_for_option: Option<DelegateOptionSlot>,
    change_background_color: Option<DelegateSlot>,
    insert_image: Option<DelegateSlot>,
    insert_link: Option<DelegateSlot>,
}

impl ToolbarDelegate {
    /// Create a delegate with no slots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text color slot using builder pattern.
    pub fn on_change_text_color<F>(mut self, slot: F) -> Self
    where
        F: Fn(&RichEditorToolbar) + Send + Sync + 'static,
    {
        self.change_text_color = Some(Arc::new(slot));
        self
    }

    /// Set the option-aware text color slot using builder pattern.
    ///
    /// Takes precedence over the plain text color slot when the request
    /// carries a stock command.
    pub fn on_change_text_color_for_option<F>(mut self, slot: F) -> Self
    where
        F: Fn(&RichEditorToolbar, &DefaultOption) + Send + Sync + 'static,
    {
        self.change_text_color_for_option = Some(Arc::new(slot));
        self
    }

    /// Set the background color slot using builder pattern.
    pub fn on_change_background_color<F>(mut self, slot: F) -> Self
    where
        F: Fn(&RichEditorToolbar) + Send + Sync + 'static,
    {
        self.change_background_color = Some(Arc::new(slot));
        self
    }

    /// Set the image insertion slot using builder pattern.
    pub fn on_insert_image<F>(mut self, slot: F) -> Self
    where
        F: Fn(&RichEditorToolbar) + Send + Sync + 'static,
    {
        self.insert_image = Some(Arc::new(slot));
        self
    }

    /// Set the link insertion slot using builder pattern.
    pub fn on_insert_link<F>(mut self, slot: F) -> Self
    where
        F: Fn(&RichEditorToolbar) + Send + Sync + 'static,
    {
        self.insert_link = Some(Arc::new(slot));
        self
    }

    /// Whether a slot exists that would handle `request`.
    pub fn handles(&self, request: DelegateRequest) -> bool {
        match request {
            DelegateRequest::ChangeTextColor(Some(_)) => {
                self.change_text_color_for_option.is_some() || self.change_text_color.is_some()
            }
            DelegateRequest::ChangeTextColor(None) => self.change_text_color.is_some(),
            DelegateRequest::ChangeBackgroundColor => self.change_background_color.is_some(),
            DelegateRequest::InsertImage => self.insert_image.is_some(),
            DelegateRequest::InsertLink => self.insert_link.is_some(),
        }
    }

    /// Invoke the slot for `request`. Returns whether a slot ran.
    pub fn dispatch(&self, toolbar: &RichEditorToolbar, request: DelegateRequest) -> bool {
        let slot = match request {
            DelegateRequest::ChangeTextColor(Some(option)) => {
                if let Some(slot) = &self.change_text_color_for_option {
                    slot(toolbar, &option);
                    return true;
                }
                &self.change_text_color
            }
            DelegateRequest::ChangeTextColor(None) => &self.change_text_color,
            DelegateRequest::ChangeBackgroundColor => &self.change_background_color,
            DelegateRequest::InsertImage => &self.insert_image,
            DelegateRequest::InsertLink => &self.insert_link,
        };

        match slot {
            Some(slot) => {
                slot(toolbar);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for ToolbarDelegate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolbarDelegate")
            .field("change_text_color", &self.change_text_color.is_some())
            .field(
                "change_text_color_for_option",
                &self.change_text_color_for_option.is_some(),
            )
            .field("change_background_color", &self.change_background_color.is_some())
            .field("insert_image", &self.insert_image.is_some())
            .field("insert_link", &self.insert_link.is_some())
            .finish()
    }
}

static_assertions::assert_impl_all!(ToolbarDelegate: Send, Sync);
