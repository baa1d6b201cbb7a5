//! Toolbar button bound to one option.
//!
//! An [`ActionButton`] is created by the toolbar for every option it holds.
//! It remembers what to show (an image pair or a text label), tracks a
//! selected state for image buttons, and runs a press handler that invokes
//! the option's action.
//!
//! # Signals
//!
//! - `clicked(bool)`: Emitted after every press with the selected state
//! - `toggled(bool)`: Emitted when the selected state changes

use std::fmt;
use std::sync::Arc;

use rich_toolbar_core::logging::targets;
use rich_toolbar_core::{Property, Signal};
use rich_toolbar_render::Image;

use super::option::RichEditorOption;
use crate::widget::layout::Measurable;

/// Handler run when a button is pressed.
pub type PressHandler = Arc<dyn Fn() + Send + Sync>;

/// What an [`ActionButton`] displays.
#[derive(Debug, Clone, PartialEq)]
pub enum ButtonElement {
    /// An image, swapped for `selected_image` while selected.
    Image {
        image: Image,
        selected_image: Option<Image>,
    },
    /// A text label.
    Text { title: String },
}

/// A pressable toolbar element.
pub struct ActionButton {
    element: ButtonElement,
    tag: i32,
    selected: Property<bool>,
    measured_width: Property<Option<f32>>,
    handler: Option<PressHandler>,

    /// Signal emitted after a press, carrying the selected state.
    pub clicked: Signal<bool>,

    /// Signal emitted when the selected state changes.
    pub toggled: Signal<bool>,
}

impl ActionButton {
    /// Create a button showing an image.
    pub fn image_button(image: Image, selected_image: Option<Image>) -> Self {
        Self::from_element(ButtonElement::Image {
            image,
            selected_image,
        })
    }

    /// Create a button showing a text label.
    pub fn text_button(title: impl Into<String>) -> Self {
        Self::from_element(ButtonElement::Text {
            title: title.into(),
        })
    }

    fn from_element(element: ButtonElement) -> Self {
        Self {
            element,
            tag: 0,
            selected: Property::new(false),
            measured_width: Property::new(None),
            handler: None,
            clicked: Signal::new(),
            toggled: Signal::new(),
        }
    }

    /// Create the button for `option`.
    ///
    /// Image-backed options produce an image button carrying the option's
    /// tag; all other options produce a text button labelled with the
    /// option's title.
    pub fn for_option(option: &dyn RichEditorOption) -> Self {
        let button = match option.image() {
            Some(image) => {
                Self::image_button(image.clone(), option.selected_image().cloned())
            }
            None => Self::text_button(option.title()),
        };
        button.with_tag(option.tag())
    }

    /// Set the tag using builder pattern.
    pub fn with_tag(mut self, tag: i32) -> Self {
        self.tag = tag;
        self
    }

    /// Set the press handler using builder pattern.
    pub fn with_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.handler = Some(Arc::new(handler));
        self
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// What the button displays.
    pub fn element(&self) -> &ButtonElement {
        &self.element
    }

    /// The button tag.
    pub fn tag(&self) -> i32 {
        self.tag
    }

    /// The text label, for text buttons.
    pub fn title(&self) -> Option<&str> {
        match &self.element {
            ButtonElement::Text { title } => Some(title),
            ButtonElement::Image { .. } => None,
        }
    }

    /// The image currently displayed.
    ///
    /// While selected this is the selected image when one was provided,
    /// otherwise the normal image. Text buttons have no image.
    pub fn displayed_image(&self) -> Option<&Image> {
        match &self.element {
            ButtonElement::Image {
                image,
                selected_image,
            } => {
                if self.is_selected() {
                    selected_image.as_ref().or(Some(image))
                } else {
                    Some(image)
                }
            }
            ButtonElement::Text { .. } => None,
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Whether pressing the button flips its selected state.
    pub fn is_toggleable(&self) -> bool {
        matches!(self.element, ButtonElement::Image { .. })
    }

    /// The selected state.
    pub fn is_selected(&self) -> bool {
        self.selected.get()
    }

    /// Set the selected state. Ignored for buttons that cannot toggle.
    pub fn set_selected(&self, selected: bool) {
        if self.is_toggleable() && self.selected.set(selected) {
            self.toggled.emit(selected);
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// The width reported by the host, if it has measured the button.
    pub fn measured_width(&self) -> Option<f32> {
        self.measured_width.get()
    }

    /// Report the width the host measured for this button.
    ///
    /// The toolbar picks the new width up on its next layout pass.
    pub fn set_measured_width(&self, width: f32) {
        self.measured_width.set(Some(width));
    }

    /// Forget the measured width.
    pub fn clear_measured_width(&self) {
        self.measured_width.set(None);
    }

    // =========================================================================
    // Press
    // =========================================================================

    /// Press the button.
    ///
    /// Toggle-capable buttons flip their selected state first. The press
    /// handler then runs, and `clicked` is emitted with the resulting state.
    pub fn press(&self) {
        let selected = if self.is_toggleable() {
            let selected = self.selected.update(|s| !s);
            self.toggled.emit(selected);
            selected
        } else {
            self.is_selected()
        };

        tracing::trace!(target: targets::DISPATCH, tag = self.tag, selected, "button pressed");

        if let Some(handler) = &self.handler {
            handler();
        }

        self.clicked.emit(selected);
    }
}

impl Measurable for ActionButton {
    fn measured_width(&self) -> Option<f32> {
        ActionButton::measured_width(self)
    }

    fn layout_tag(&self) -> Option<i32> {
        Some(self.tag)
    }
}

impl fmt::Debug for ActionButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionButton")
            .field("element", &self.element)
            .field("tag", &self.tag)
            .field("selected", &self.is_selected())
            .field("measured_width", &self.measured_width())
            .finish()
    }
}

static_assertions::assert_impl_all!(ActionButton: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use parking_lot::Mutex;
    use rich_toolbar_render::Size;

    use crate::widget::widgets::{CustomOption, DefaultOption};

    fn icon(name: &str) -> Image {
        Image::named(name, Size::new(24.0, 24.0))
    }

    #[test]
    fn test_image_option_produces_image_button() {
        let option = CustomOption::image(icon("bold"), |_, _| {})
            .with_selected_image(icon("bold-on"))
            .with_tag(4);
        let button = ActionButton::for_option(&option);

        assert!(button.is_toggleable());
        assert_eq!(button.tag(), 4);
        assert_eq!(button.title(), None);
        assert_eq!(button.displayed_image(), Some(&icon("bold")));
    }

    #[test]
    fn test_text_option_produces_text_button() {
        let button = ActionButton::for_option(&DefaultOption::Underline);

        assert!(!button.is_toggleable());
        assert_eq!(button.title(), Some("Underline"));
        assert_eq!(button.displayed_image(), None);
    }

    #[test]
    fn test_press_toggles_and_swaps_image() {
        let button = ActionButton::image_button(icon("star"), Some(icon("star-filled")));

        button.press();
        assert!(button.is_selected());
        assert_eq!(button.displayed_image(), Some(&icon("star-filled")));

        button.press();
        assert!(!button.is_selected());
        assert_eq!(button.displayed_image(), Some(&icon("star")));
    }

    #[test]
    fn test_selected_without_selected_image_keeps_normal() {
        let button = ActionButton::image_button(icon("star"), None);
        button.press();
        assert!(button.is_selected());
        assert_eq!(button.displayed_image(), Some(&icon("star")));
    }

    #[test]
    fn test_text_button_never_selects() {
        let button = ActionButton::text_button("Clear");
        button.press();
        button.set_selected(true);
        assert!(!button.is_selected());
    }

    #[test]
    fn test_press_runs_handler_once() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        let button = ActionButton::text_button("Go").with_handler(move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        button.press();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_press_emits_signals() {
        let button = ActionButton::image_button(icon("a"), None);
        let events = Arc::new(Mutex::new(Vec::new()));

        let events_clone = events.clone();
        button.toggled.connect(move |&on| events_clone.lock().push(("toggled", on)));
        let events_clone = events.clone();
        button.clicked.connect(move |&on| events_clone.lock().push(("clicked", on)));

        button.press();
        button.set_selected(true);
        button.set_selected(false);

        assert_eq!(
            *events.lock(),
            vec![("toggled", true), ("clicked", true), ("toggled", false)]
        );
    }

    #[test]
    fn test_measured_width() {
        let button = ActionButton::text_button("Bold");
        assert_eq!(button.measured_width(), None);

        button.set_measured_width(42.0);
        assert_eq!(button.measured_width(), Some(42.0));
        assert_eq!(Measurable::layout_tag(&button), Some(0));

        button.clear_measured_width();
        assert_eq!(button.measured_width(), None);
    }
}
