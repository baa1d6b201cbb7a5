//! Rich-text editor toolbar.
//!
//! [`RichEditorToolbar`] turns an ordered list of options into a row of
//! [`ActionButton`]s, lays the row out inside a horizontally scrolling
//! region, and routes button presses either to the bound
//! [`EditingTarget`] or to a [`ToolbarDelegate`].
//!
//! The toolbar is always shared behind an `Arc`: button handlers hold it
//! weakly so that pressing a button after the toolbar is gone does nothing.
//!
//! # Layers
//!
//! The toolbar has three stacked layers, all reported through geometry only:
//!
//! - a background layer filling the toolbar frame, tinted with
//!   [`bar_tint_color`](RichEditorToolbar::bar_tint_color)
//! - a scroll region of the same size whose content width is the summed
//!   button width
//! - the button row inside the scroll region, filled with
//!   [`background_color`](RichEditorToolbar::background_color)
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use rich_toolbar::render::Rect;
//! use rich_toolbar::widget::EditingTarget;
//! use rich_toolbar::widget::widgets::{DefaultOption, RichEditorOption, RichEditorToolbar};
//!
//! struct Editor;
//! impl EditingTarget for Editor {
//!     fn bold(&self) {
//!         println!("bold!");
//!     }
//! }
//!
//! let editor = Arc::new(Editor);
//! let toolbar = RichEditorToolbar::new(Rect::new(0.0, 0.0, 320.0, 44.0));
//! toolbar.bind(&editor);
//! toolbar.set_options(vec![
//!     Arc::new(DefaultOption::Bold) as Arc<dyn RichEditorOption>,
//!     Arc::new(DefaultOption::Italic) as Arc<dyn RichEditorOption>,
//! ]);
//!
//! // Two unmeasured buttons are 100 wide, so the row is stretched.
//! assert_eq!(toolbar.content_width(), 320.0);
//! assert!(toolbar.press(0));
//! ```
//!
//! # Signals
//!
//! - `options_changed(usize)`: Emitted after every rebuild with the button count
//! - `layout_changed(ToolbarLayout)`: Emitted when a layout pass changes the layout
//! - `bar_tint_color_changed(Option<Color>)`: Emitted when the tint changes

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use rich_toolbar_core::logging::{span_names, targets};
use rich_toolbar_core::{PerfSpan, Property, Signal};
use rich_toolbar_render::{Color, Rect};

use super::action_button::ActionButton;
use super::delegate::{DelegateRequest, ToolbarDelegate};
use super::option::RichEditorOption;
use crate::config::ToolbarConfig;
use crate::error::Result;
use crate::widget::editor::EditingTarget;
use crate::widget::layout::{ToolbarLayout, ToolbarLayoutEngine};

/// Options, buttons and layout, always replaced together.
struct ToolbarState {
    options: Vec<Arc<dyn RichEditorOption>>,
    buttons: Vec<Arc<ActionButton>>,
    layout: ToolbarLayout,
}

/// A horizontally scrolling toolbar for a rich-text editor.
pub struct RichEditorToolbar {
    this: Weak<RichEditorToolbar>,
    state: RwLock<ToolbarState>,
    frame: Property<Rect>,
    bar_tint_color: Property<Option<Color>>,
    background_color: Property<Color>,
    engine: RwLock<ToolbarLayoutEngine>,
    editor: RwLock<Option<Weak<dyn EditingTarget>>>,
    delegate: RwLock<Weak<ToolbarDelegate>>,

    /// Signal emitted after the button set is rebuilt.
    pub options_changed: Signal<usize>,

    /// Signal emitted when the layout changes.
    pub layout_changed: Signal<ToolbarLayout>,

    /// Signal emitted when the bar tint color changes.
    pub bar_tint_color_changed: Signal<Option<Color>>,
}

impl RichEditorToolbar {
    /// Create an empty toolbar with a transparent button row.
    pub fn new(frame: Rect) -> Arc<Self> {
        Self::build(frame, Color::TRANSPARENT, ToolbarLayoutEngine::new(), None)
    }

    /// Create an empty toolbar whose button row is filled with `color`.
    pub fn with_background_color(frame: Rect, color: Color) -> Arc<Self> {
        Self::build(frame, color, ToolbarLayoutEngine::new(), None)
    }

    /// Create an empty toolbar from a configuration.
    pub fn with_config(frame: Rect, config: &ToolbarConfig) -> Result<Arc<Self>> {
        config.validate()?;
        let background = config.background_color()?.unwrap_or(Color::TRANSPARENT);
        let tint = config.bar_tint_color()?;
        Ok(Self::build(frame, background, config.layout_engine(), tint))
    }

    fn build(
        frame: Rect,
        background_color: Color,
        engine: ToolbarLayoutEngine,
        bar_tint_color: Option<Color>,
    ) -> Arc<Self> {
        Arc::new_cyclic(|this| Self {
            this: this.clone(),
            state: RwLock::new(ToolbarState {
                options: Vec::new(),
                buttons: Vec::new(),
                layout: ToolbarLayout::empty(frame.height()),
            }),
            frame: Property::new(frame),
            bar_tint_color: Property::new(bar_tint_color),
            background_color: Property::new(background_color),
            engine: RwLock::new(engine),
            editor: RwLock::new(None),
            delegate: RwLock::new(Weak::new()),
            options_changed: Signal::new(),
            layout_changed: Signal::new(),
            bar_tint_color_changed: Signal::new(),
        })
    }

    // =========================================================================
    // Options
    // =========================================================================

    /// Replace the options and rebuild every button.
    ///
    /// The old buttons are discarded, one button is created per option in
    /// order, and the layout is recomputed. Readers never observe the new
    /// options with old buttons or a stale layout.
    #[tracing::instrument(
        skip_all,
        target = "rich_toolbar::toolbar",
        level = "debug",
        fields(count = options.len())
    )]
    pub fn set_options(&self, options: Vec<Arc<dyn RichEditorOption>>) {
        let _perf = PerfSpan::new(span_names::REBUILD);

        let buttons: Vec<Arc<ActionButton>> = options
            .iter()
            .map(|option| Arc::new(self.make_button(option)))
            .collect();
        let count = buttons.len();

        let layout = {
            let mut state = self.state.write();
            let layout = self.engine.read().compute(buttons.iter(), self.frame.get().size);
            *state = ToolbarState {
                options,
                buttons,
                layout,
            };
            layout
        };

        tracing::debug!(
            target: targets::TOOLBAR,
            count,
            content_width = layout.content_width(),
            "rebuilt toolbar buttons"
        );

        self.options_changed.emit(count);
        self.layout_changed.emit(layout);
    }

    fn make_button(&self, option: &Arc<dyn RichEditorOption>) -> ActionButton {
        let toolbar = self.this.clone();
        let option_for_handler = Arc::clone(option);

        ActionButton::for_option(option.as_ref()).with_handler(move || {
            let Some(toolbar) = toolbar.upgrade() else {
                tracing::trace!(target: targets::DISPATCH, "toolbar dropped, ignoring press");
                return;
            };
            let item = option_for_handler.default_option();
            option_for_handler.action(&toolbar, item.as_ref());
        })
    }

    /// The current options, in button order.
    pub fn options(&self) -> Vec<Arc<dyn RichEditorOption>> {
        self.state.read().options.clone()
    }

    /// The current buttons, one per option.
    pub fn buttons(&self) -> Vec<Arc<ActionButton>> {
        self.state.read().buttons.clone()
    }

    /// The button at `index`.
    pub fn button(&self, index: usize) -> Option<Arc<ActionButton>> {
        self.state.read().buttons.get(index).cloned()
    }

    /// Number of buttons.
    pub fn button_count(&self) -> usize {
        self.state.read().buttons.len()
    }

    /// Whether the toolbar has no buttons.
    pub fn is_empty(&self) -> bool {
        self.state.read().buttons.is_empty()
    }

    /// Press the button at `index` as if the user tapped it.
    ///
    /// Returns `false` if there is no such button.
    pub fn press(&self, index: usize) -> bool {
        let _perf = PerfSpan::new(span_names::DISPATCH);

        let Some(button) = self.button(index) else {
            tracing::trace!(target: targets::DISPATCH, index, "no button to press");
            return false;
        };
        button.press();
        true
    }

    // =========================================================================
    // Editing Target
    // =========================================================================

    /// Bind the editing surface the stock commands act on.
    ///
    /// The toolbar holds it weakly.
    pub fn bind<E: EditingTarget + 'static>(&self, editor: &Arc<E>) {
        let editor: Weak<E> = Arc::downgrade(editor);
        *self.editor.write() = Some(editor as Weak<dyn EditingTarget>);
    }

    /// Bind an editing surface that is already type-erased.
    pub fn bind_dyn(&self, editor: &Arc<dyn EditingTarget>) {
        *self.editor.write() = Some(Arc::downgrade(editor));
    }

    /// Forget the editing surface.
    pub fn unbind(&self) {
        *self.editor.write() = None;
    }

    /// The bound editing surface, if it is still alive.
    pub fn editor(&self) -> Option<Arc<dyn EditingTarget>> {
        let editor = self.editor.read().clone();
        editor.and_then(|weak| weak.upgrade())
    }

    /// Run `f` on the bound editing surface. Returns whether one was bound.
    pub fn with_editor<F>(&self, f: F) -> bool
    where
        F: FnOnce(&dyn EditingTarget),
    {
        match self.editor() {
            Some(editor) => {
                f(editor.as_ref());
                true
            }
            None => {
                tracing::trace!(target: targets::DISPATCH, "no editing target bound");
                false
            }
        }
    }

    // =========================================================================
    // Delegate
    // =========================================================================

    /// Set the delegate. The toolbar holds it weakly.
    pub fn set_delegate(&self, delegate: &Arc<ToolbarDelegate>) {
        *self.delegate.write() = Arc::downgrade(delegate);
    }

    /// Forget the delegate.
    pub fn clear_delegate(&self) {
        *self.delegate.write() = Weak::new();
    }

    /// The delegate, if it is still alive.
    pub fn delegate(&self) -> Option<Arc<ToolbarDelegate>> {
        self.delegate.read().upgrade()
    }

    /// Forward `request` to the delegate.
    ///
    /// Returns whether a delegate slot handled it.
    pub fn request(&self, request: DelegateRequest) -> bool {
        let Some(delegate) = self.delegate() else {
            tracing::trace!(target: targets::DISPATCH, ?request, "no delegate");
            return false;
        };

        let handled = delegate.dispatch(self, request);
        if !handled {
            tracing::trace!(target: targets::DISPATCH, ?request, "delegate has no slot");
        }
        handled
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// The toolbar frame.
    pub fn frame(&self) -> Rect {
        self.frame.get()
    }

    /// Resize the toolbar and recompute the layout.
    pub fn set_frame(&self, frame: Rect) {
        if self.frame.set(frame) {
            self.relayout();
        }
    }

    /// Frame of the background layer, which fills the toolbar.
    pub fn background_frame(&self) -> Rect {
        self.frame.get().bounds()
    }

    /// The layout engine settings.
    pub fn layout_engine(&self) -> ToolbarLayoutEngine {
        self.engine.read().clone()
    }

    /// Replace the layout engine settings and recompute the layout.
    pub fn set_layout_engine(&self, engine: ToolbarLayoutEngine) {
        *self.engine.write() = engine;
        self.relayout();
    }

    /// Recompute the layout from the current buttons.
    ///
    /// Call after the host reports new measured widths.
    pub fn relayout(&self) {
        let changed = {
            let mut state = self.state.write();
            let layout = self
                .engine
                .read()
                .compute(state.buttons.iter(), self.frame.get().size);
            let changed = state.layout != layout;
            state.layout = layout;
            changed.then_some(layout)
        };

        if let Some(layout) = changed {
            self.layout_changed.emit(layout);
        }
    }

    /// The current layout.
    pub fn layout(&self) -> ToolbarLayout {
        self.state.read().layout
    }

    /// Width of the button row.
    pub fn content_width(&self) -> f32 {
        self.layout().content_width()
    }

    /// Content width of the scroll region.
    pub fn scroll_content_width(&self) -> f32 {
        self.layout().scroll_content_size().width
    }

    // =========================================================================
    // Styling
    // =========================================================================

    /// Fill of the background layer.
    pub fn bar_tint_color(&self) -> Option<Color> {
        self.bar_tint_color.get()
    }

    /// Set the fill of the background layer.
    ///
    /// Buttons and layout are unaffected.
    pub fn set_bar_tint_color(&self, color: Option<Color>) {
        if self.bar_tint_color.set(color) {
            self.bar_tint_color_changed.emit(color);
        }
    }

    /// Fill of the button row.
    pub fn background_color(&self) -> Color {
        self.background_color.get()
    }
}

impl fmt::Debug for RichEditorToolbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RichEditorToolbar")
            .field("frame", &self.frame())
            .field("button_count", &self.button_count())
            .field("layout", &self.layout())
            .field("bar_tint_color", &self.bar_tint_color())
            .field("has_editor", &self.editor().is_some())
            .field("has_delegate", &self.delegate().is_some())
            .finish()
    }
}

static_assertions::assert_impl_all!(RichEditorToolbar: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use parking_lot::Mutex;
    use rich_toolbar_render::{Image, Size};

    use crate::widget::layout::LayoutMode;
    use crate::widget::widgets::{CustomOption, DefaultOption};

    fn frame(width: f32) -> Rect {
        Rect::new(0.0, 0.0, width, 44.0)
    }

    fn text_options(count: usize) -> Vec<Arc<dyn RichEditorOption>> {
        (0..count)
            .map(|i| Arc::new(CustomOption::text(format!("Item {i}"), |_, _| {})) as Arc<dyn RichEditorOption>)
            .collect()
    }

    #[test]
    fn test_new_toolbar_is_empty() {
        let toolbar = RichEditorToolbar::new(frame(320.0));
        assert!(toolbar.is_empty());
        assert_eq!(toolbar.content_width(), 0.0);
        assert_eq!(toolbar.layout().mode(), LayoutMode::Empty);
        assert_eq!(toolbar.background_color(), Color::TRANSPARENT);
        assert_eq!(toolbar.bar_tint_color(), None);
    }

    #[test]
    fn test_set_options_builds_one_button_per_option() {
        let toolbar = RichEditorToolbar::new(frame(320.0));
        toolbar.set_options(text_options(4));

        let titles: Vec<_> = toolbar
            .buttons()
            .iter()
            .map(|b| b.title().map(str::to_owned))
            .collect();
        assert_eq!(toolbar.options().len(), 4);
        assert_eq!(
            titles,
            vec![
                Some("Item 0".to_owned()),
                Some("Item 1".to_owned()),
                Some("Item 2".to_owned()),
                Some("Item 3".to_owned()),
            ]
        );
    }

    #[test]
    fn test_rebuild_replaces_buttons() {
        let toolbar = RichEditorToolbar::new(frame(320.0));
        toolbar.set_options(text_options(2));
        let first = toolbar.button(0).unwrap();

        toolbar.set_options(text_options(2));
        let second = toolbar.button(0).unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(toolbar.button_count(), 2);
    }

    #[test]
    fn test_empty_options_reset_layout() {
        let toolbar = RichEditorToolbar::new(frame(200.0));
        toolbar.set_options(text_options(6));
        assert_eq!(toolbar.content_width(), 300.0);

        toolbar.set_options(Vec::new());
        assert!(toolbar.is_empty());
        assert_eq!(toolbar.content_width(), 0.0);
    }

    #[test]
    fn test_set_frame_relayouts() {
        let toolbar = RichEditorToolbar::new(frame(320.0));
        toolbar.set_options(text_options(3));
        assert_eq!(toolbar.content_width(), 320.0);

        toolbar.set_frame(frame(100.0));
        assert_eq!(toolbar.content_width(), 150.0);
        assert_eq!(toolbar.scroll_content_width(), 150.0);
        assert_eq!(toolbar.background_frame(), frame(100.0));
    }

    #[test]
    fn test_relayout_picks_up_measured_widths() {
        let toolbar = RichEditorToolbar::new(frame(100.0));
        toolbar.set_options(text_options(2));
        assert_eq!(toolbar.content_width(), 100.0);

        let changes = Arc::new(AtomicUsize::new(0));
        let changes_clone = changes.clone();
        toolbar.layout_changed.connect(move |_| {
            changes_clone.fetch_add(1, Ordering::SeqCst);
        });

        for button in toolbar.buttons() {
            button.set_measured_width(80.0);
        }
        toolbar.relayout();
        toolbar.relayout();

        assert_eq!(toolbar.content_width(), 160.0);
        assert_eq!(changes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_nan_measured_width_falls_back() {
        let toolbar = RichEditorToolbar::new(frame(320.0));
        toolbar.set_options(vec![Arc::new(DefaultOption::Bold) as Arc<dyn RichEditorOption>]);

        toolbar.button(0).unwrap().set_measured_width(f32::NAN);
        toolbar.relayout();

        assert_eq!(toolbar.layout().total_width(), 50.0);
        assert_eq!(toolbar.content_width(), 320.0);
        assert_eq!(toolbar.layout().mode(), LayoutMode::Stretched);
    }

    #[test]
    fn test_bar_tint_does_not_touch_buttons() {
        let toolbar = RichEditorToolbar::new(frame(320.0));
        toolbar.set_options(text_options(3));
        let buttons = toolbar.buttons();
        let layout = toolbar.layout();

        let tints = Arc::new(Mutex::new(Vec::new()));
        let tints_clone = tints.clone();
        toolbar
            .bar_tint_color_changed
            .connect(move |c| tints_clone.lock().push(*c));

        toolbar.set_bar_tint_color(Some(Color::WHITE));
        toolbar.set_bar_tint_color(Some(Color::WHITE));

        assert_eq!(toolbar.bar_tint_color(), Some(Color::WHITE));
        assert_eq!(*tints.lock(), vec![Some(Color::WHITE)]);
        assert_eq!(toolbar.layout(), layout);
        assert!(Arc::ptr_eq(&buttons[0], &toolbar.buttons()[0]));
    }

    #[test]
    fn test_press_out_of_range() {
        let toolbar = RichEditorToolbar::new(frame(320.0));
        assert!(!toolbar.press(0));
    }

    #[test]
    fn test_press_passes_toolbar_and_item() {
        let toolbar = RichEditorToolbar::new(frame(320.0));
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_clone = seen.clone();
        let option = CustomOption::text("Colour", move |tb, item| {
            seen_clone.lock().push((tb.button_count(), item.copied()));
        })
        .for_default(DefaultOption::TextColor);
        toolbar.set_options(vec![Arc::new(option) as Arc<dyn RichEditorOption>]);

        assert!(toolbar.press(0));
        assert_eq!(*seen.lock(), vec![(1, Some(DefaultOption::TextColor))]);
    }

    #[test]
    fn test_press_after_toolbar_dropped_is_noop() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();
        let option = CustomOption::image(Image::named("x", Size::new(24.0, 24.0)), move |_, _| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        let toolbar = RichEditorToolbar::new(frame(320.0));
        toolbar.set_options(vec![Arc::new(option) as Arc<dyn RichEditorOption>]);
        let button = toolbar.button(0).unwrap();
        drop(toolbar);

        button.press();
        assert!(button.is_selected());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_action_may_rebuild_toolbar() {
        let toolbar = RichEditorToolbar::new(frame(320.0));
        let option = CustomOption::text("Reset", |tb, _| {
            tb.set_options(Vec::new());
        });
        toolbar.set_options(vec![Arc::new(option) as Arc<dyn RichEditorOption>]);

        assert!(toolbar.press(0));
        assert!(toolbar.is_empty());
    }

    #[test]
    fn test_editor_is_weak() {
        struct Editor;
        impl EditingTarget for Editor {}

        let toolbar = RichEditorToolbar::new(frame(320.0));
        let editor = Arc::new(Editor);
        toolbar.bind(&editor);
        assert!(toolbar.editor().is_some());

        drop(editor);
        assert!(toolbar.editor().is_none());
        assert!(!toolbar.with_editor(|e| e.bold()));
    }

    #[test]
    fn test_bind_concrete_editor_receives_commands() {
        #[derive(Default)]
        struct Counter {
            bolds: AtomicUsize,
        }
        impl EditingTarget for Counter {
            fn bold(&self) {
                self.bolds.fetch_add(1, Ordering::SeqCst);
            }
        }

        let toolbar = RichEditorToolbar::new(frame(320.0));
        let editor: Arc<Counter> = Arc::new(Counter::default());
        toolbar.bind(&editor);
        toolbar.set_options(vec![Arc::new(DefaultOption::Bold) as Arc<dyn RichEditorOption>]);

        assert!(toolbar.press(0));
        assert_eq!(editor.bolds.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_with_config_applies_settings() {
        let config = ToolbarConfig {
            default_button_width: 40.0,
            button_margin: 5.0,
            bar_tint_color: Some("#000000".into()),
            background_color: Some("#FFFFFF".into()),
            ..ToolbarConfig::default()
        };
        let toolbar = RichEditorToolbar::with_config(frame(10.0), &config).unwrap();
        toolbar.set_options(text_options(2));

        assert_eq!(toolbar.content_width(), 90.0);
        assert_eq!(toolbar.bar_tint_color(), Some(Color::BLACK));
        assert_eq!(toolbar.background_color(), Color::WHITE);
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let config = ToolbarConfig {
            default_button_width: f32::NAN,
            ..ToolbarConfig::default()
        };
        assert!(RichEditorToolbar::with_config(frame(10.0), &config).is_err());
    }
}
