//! Toolbar option model.
//!
//! An option is one entry of a toolbar: what its button shows and what
//! happens when the button is pressed. The toolbar holds options as
//! `Arc<dyn RichEditorOption>`, in left-to-right order.
//!
//! Two shapes are provided:
//!
//! - [`DefaultOption`]: the stock formatting commands.
//! - [`CustomOption`]: an application-defined entry with an image or a text
//!   label and an arbitrary action.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use rich_toolbar::render::{Image, Rect, Size};
//! use rich_toolbar::widget::widgets::{CustomOption, RichEditorOption, RichEditorToolbar};
//!
//! let save = CustomOption::text("Save", |_toolbar, _item| {
//!     println!("save requested");
//! });
//!
//! let star = CustomOption::image(Image::named("star", Size::new(24.0, 24.0)), |_, _| {})
//!     .with_selected_image(Image::named("star-filled", Size::new(24.0, 24.0)))
//!     .with_tag(7);
//!
//! let toolbar = RichEditorToolbar::new(Rect::new(0.0, 0.0, 320.0, 44.0));
//! let options = vec![Arc::new(save) as Arc<dyn RichEditorOption>, Arc::new(star)];
//! toolbar.set_options(options);
//! assert_eq!(toolbar.button_count(), 2);
//! ```

use std::fmt;
use std::sync::Arc;

use rich_toolbar_core::logging::targets;
use rich_toolbar_render::Image;

use super::default_option::DefaultOption;
use super::rich_editor_toolbar::RichEditorToolbar;

/// The action run when an option's button is pressed.
///
/// Receives the toolbar that owns the button and, for stock commands, the
/// triggering [`DefaultOption`].
pub type OptionAction = Arc<dyn Fn(&RichEditorToolbar, Option<&DefaultOption>) + Send + Sync>;

// ============================================================================
// RichEditorOption
// ============================================================================

/// A toolbar entry.
///
/// An option is either image-backed ([`image`](Self::image) returns `Some`)
/// or text-backed, in which case its button shows [`title`](Self::title).
/// A text-backed option should carry a non-empty title.
pub trait RichEditorOption: Send + Sync {
    /// The image shown in the normal state, if image-backed.
    fn image(&self) -> Option<&Image> {
        None
    }

    /// The image shown while the button is selected.
    fn selected_image(&self) -> Option<&Image> {
        None
    }

    /// The text label.
    fn title(&self) -> &str;

    /// An identifying tag. Tags need not be unique.
    fn tag(&self) -> i32 {
        0
    }

    /// The stock command this option stands for, if any.
    ///
    /// When present it is passed to [`action`](Self::action) as the
    /// triggering item.
    fn default_option(&self) -> Option<DefaultOption> {
        None
    }

    /// Run the option against `toolbar`.
    fn action(&self, toolbar: &RichEditorToolbar, item: Option<&DefaultOption>);
}

// ============================================================================
// CustomOption
// ============================================================================

/// How a [`CustomOption`] is presented.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionVisual {
    /// An image pair.
    Image {
        normal: Image,
        selected: Option<Image>,
    },
    /// A text label.
    Text(String),
}

/// An application-defined toolbar entry.
#[derive(Clone)]
pub struct CustomOption {
    visual: OptionVisual,
    title: String,
    tag: i32,
    default_option: Option<DefaultOption>,
    action: Option<OptionAction>,
}

impl CustomOption {
    /// Create an image-backed option.
    pub fn image<F>(normal: Image, action: F) -> Self
    where
        F: Fn(&RichEditorToolbar, Option<&DefaultOption>) + Send + Sync + 'static,
    {
        Self {
            visual: OptionVisual::Image {
                normal,
                selected: None,
            },
            title: String::new(),
            tag: 0,
            default_option: None,
            action: Some(Arc::new(action)),
        }
    }

    /// Create a text-backed option.
    pub fn text<F>(label: impl Into<String>, action: F) -> Self
    where
        F: Fn(&RichEditorToolbar, Option<&DefaultOption>) + Send + Sync + 'static,
    {
        Self {
            visual: OptionVisual::Text(label.into()),
            title: String::new(),
            tag: 0,
            default_option: None,
            action: Some(Arc::new(action)),
        }
    }

    /// Create an image-backed stand-in for a stock command.
    ///
    /// The option keeps the command's title and tag and performs the stock
    /// command when pressed.
    pub fn themed(option: DefaultOption, normal: Image) -> Self {
        Self {
            visual: OptionVisual::Image {
                normal,
                selected: None,
            },
            title: option.label().to_owned(),
            tag: option.tag(),
            default_option: Some(option),
            action: None,
        }
    }

    /// Set the selected-state image using builder pattern.
    ///
    /// Has no effect on text-backed options.
    pub fn with_selected_image(mut self, image: Image) -> Self {
        if let OptionVisual::Image { selected, .. } = &mut self.visual {
            *selected = Some(image);
        }
        self
    }

    /// Set the tag using builder pattern.
    pub fn with_tag(mut self, tag: i32) -> Self {
        self.tag = tag;
        self
    }

    /// Set the title of an image-backed option using builder pattern.
    ///
    /// For text-backed options this replaces the label.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        match &mut self.visual {
            OptionVisual::Text(label) => *label = title.into(),
            OptionVisual::Image { .. } => self.title = title.into(),
        }
        self
    }

    /// Mark this option as standing for a stock command.
    ///
    /// The command becomes the triggering item passed to the action.
    pub fn for_default(mut self, option: DefaultOption) -> Self {
        self.default_option = Some(option);
        self
    }

    /// The presentation of this option.
    pub fn visual(&self) -> &OptionVisual {
        &self.visual
    }
}

impl RichEditorOption for CustomOption {
    fn image(&self) -> Option<&Image> {
        match &self.visual {
            OptionVisual::Image { normal, .. } => Some(normal),
            OptionVisual::Text(_) => None,
        }
    }

    fn selected_image(&self) -> Option<&Image> {
        match &self.visual {
            OptionVisual::Image { selected, .. } => selected.as_ref(),
            OptionVisual::Text(_) => None,
        }
    }

    fn title(&self) -> &str {
        match &self.visual {
            OptionVisual::Text(label) => label,
            OptionVisual::Image { .. } => &self.title,
        }
    }

    fn tag(&self) -> i32 {
        self.tag
    }

    fn default_option(&self) -> Option<DefaultOption> {
        self.default_option
    }

    fn action(&self, toolbar: &RichEditorToolbar, item: Option<&DefaultOption>) {
        match (&self.action, self.default_option) {
            (Some(action), _) => action(toolbar, item),
            (None, Some(option)) => option.perform(toolbar),
            (None, None) => {
                tracing::trace!(target: targets::DISPATCH, title = self.title(), "option has no action");
            }
        }
    }
}

impl fmt::Debug for CustomOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomOption")
            .field("visual", &self.visual)
            .field("title", &self.title)
            .field("tag", &self.tag)
            .field("default_option", &self.default_option)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

static_assertions::assert_impl_all!(CustomOption: Send, Sync);
