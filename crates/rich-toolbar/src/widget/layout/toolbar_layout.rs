//! Single-row layout for toolbar buttons.
//!
//! [`ToolbarLayoutEngine`] sums the widths of a row of buttons and decides
//! whether the row is stretched to fill the toolbar frame or left at its
//! natural width inside a horizontally scrolling region.
//!
//! # Algorithm
//!
//! 1. For every item in order, take its measured width when the host has
//!    reported one, otherwise a fallback width (a per-tag override when one
//!    is configured, else [`ToolbarLayoutEngine::DEFAULT_BUTTON_WIDTH`]).
//! 2. Add the configured margin once per item.
//! 3. If the sum is smaller than the frame width, stretch the row to the
//!    frame width. Otherwise the row is exactly as wide as the sum and the
//!    scroll region scrolls.
//!
//! The row is always as tall as the background layer, which tracks the
//! toolbar frame height.
//!
//! # Example
//!
//! ```
//! use rich_toolbar::widget::layout::{LayoutMode, ToolbarLayoutEngine};
//! use rich_toolbar::render::Size;
//!
//! let engine = ToolbarLayoutEngine::new();
//! // Three buttons the host has not measured yet.
//! let widths: [Option<f32>; 3] = [None, None, None];
//! let layout = engine.compute(widths, Size::new(320.0, 44.0));
//!
//! assert_eq!(layout.total_width(), 150.0);
//! assert_eq!(layout.content_width(), 320.0);
//! assert_eq!(layout.mode(), LayoutMode::Stretched);
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use rich_toolbar_core::PerfSpan;
use rich_toolbar_core::logging::{span_names, targets};
use rich_toolbar_render::{Rect, Size};

// ============================================================================
// Measurable
// ============================================================================

/// Something the layout engine can place in the button row.
///
/// The width query is explicit: `None` means the host has not laid the
/// element out yet and the engine substitutes a fallback width.
pub trait Measurable {
    /// The width reported by the host, if any.
    fn measured_width(&self) -> Option<f32>;

    /// The tag used to look up a per-tag fallback width.
    fn layout_tag(&self) -> Option<i32> {
        None
    }
}

impl Measurable for Option<f32> {
    fn measured_width(&self) -> Option<f32> {
        *self
    }
}

impl<T: Measurable + ?Sized> Measurable for &T {
    fn measured_width(&self) -> Option<f32> {
        (**self).measured_width()
    }

    fn layout_tag(&self) -> Option<i32> {
        (**self).layout_tag()
    }
}

impl<T: Measurable + ?Sized> Measurable for Arc<T> {
    fn measured_width(&self) -> Option<f32> {
        (**self).measured_width()
    }

    fn layout_tag(&self) -> Option<i32> {
        (**self).layout_tag()
    }
}

// ============================================================================
// ToolbarLayout
// ============================================================================

/// How the button row relates to the toolbar frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// No buttons; nothing is laid out.
    #[default]
    Empty,
    /// The buttons fit; the row is stretched to the frame width.
    Stretched,
    /// The buttons do not fit; the row keeps its natural width and scrolls.
    Scrolling,
}

/// The result of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ToolbarLayout {
    mode: LayoutMode,
    total_width: f32,
    row_frame: Rect,
    scroll_content_size: Size,
}

impl ToolbarLayout {
    /// Layout of a toolbar without buttons.
    ///
    /// Nothing is laid out, so the content width is zero; the row still
    /// tracks the background height.
    pub fn empty(height: f32) -> Self {
        Self {
            mode: LayoutMode::Empty,
            total_width: 0.0,
            row_frame: Rect::new(0.0, 0.0, 0.0, height),
            scroll_content_size: Size::new(0.0, height),
        }
    }

    /// Stretch-vs-scroll decision.
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Sum of button widths plus margins.
    pub fn total_width(&self) -> f32 {
        self.total_width
    }

    /// Frame of the button row inside the scroll region.
    pub fn row_frame(&self) -> Rect {
        self.row_frame
    }

    /// Width of the button row: the frame width when stretched, the
    /// summed width when scrolling, zero when empty.
    pub fn content_width(&self) -> f32 {
        self.row_frame.width()
    }

    /// Content size of the scroll region. Its width is always the summed width.
    pub fn scroll_content_size(&self) -> Size {
        self.scroll_content_size
    }

    /// Whether the scroll region has anything to scroll.
    pub fn is_scrollable(&self) -> bool {
        self.mode == LayoutMode::Scrolling
    }
}

// ============================================================================
// ToolbarLayoutEngine
// ============================================================================

/// Computes the single-row layout of a toolbar.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarLayoutEngine {
    default_button_width: f32,
    button_margin: f32,
    fallback_widths: HashMap<i32, f32>,
}

impl Default for ToolbarLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolbarLayoutEngine {
    /// Width assumed for a button the host has not measured.
    pub const DEFAULT_BUTTON_WIDTH: f32 = 50.0;

    /// Margin added per button unless configured otherwise.
    pub const DEFAULT_BUTTON_MARGIN: f32 = 0.0;

    /// Create an engine with the default fallback width and no margin.
    pub fn new() -> Self {
        Self {
            default_button_width: Self::DEFAULT_BUTTON_WIDTH,
            button_margin: Self::DEFAULT_BUTTON_MARGIN,
            fallback_widths: HashMap::new(),
        }
    }

    /// Set the fallback width using builder pattern.
    pub fn with_default_button_width(mut self, width: f32) -> Self {
        self.default_button_width = width;
        self
    }

    /// Set the per-button margin using builder pattern.
    pub fn with_button_margin(mut self, margin: f32) -> Self {
        self.button_margin = margin;
        self
    }

    /// Override the fallback width for unmeasured buttons carrying `tag`.
    pub fn with_fallback_width(mut self, tag: i32, width: f32) -> Self {
        self.fallback_widths.insert(tag, width);
        self
    }

    /// The fallback width for unmeasured buttons without a tag override.
    pub fn default_button_width(&self) -> f32 {
        self.default_button_width
    }

    /// The margin added once per button.
    pub fn button_margin(&self) -> f32 {
        self.button_margin
    }

    /// The fallback width for an unmeasured button with the given tag.
    pub fn fallback_width(&self, tag: Option<i32>) -> f32 {
        tag.and_then(|tag| self.fallback_widths.get(&tag).copied())
            .unwrap_or(self.default_button_width)
    }

    /// The width one item contributes to the row, margin included.
    ///
    /// A measured width that is negative or not finite counts as unmeasured.
    pub fn item_width<M: Measurable>(&self, item: &M) -> f32 {
        let width = item
            .measured_width()
            .filter(|w| w.is_finite() && *w >= 0.0)
            .unwrap_or_else(|| self.fallback_width(item.layout_tag()));
        width + self.button_margin
    }

    /// Lay out `items` in order inside a toolbar of size `frame`.
    pub fn compute<I>(&self, items: I, frame: Size) -> ToolbarLayout
    where
        I: IntoIterator,
        I::Item: Measurable,
    {
        let _perf = PerfSpan::new(span_names::LAYOUT);

        let mut count = 0usize;
        let total_width: f32 = items
            .into_iter()
            .inspect(|_| count += 1)
            .map(|item| self.item_width(&item))
            .sum();

        if count == 0 {
            tracing::debug!(target: targets::LAYOUT, "no buttons, empty layout");
            return ToolbarLayout::empty(frame.height);
        }

        let (mode, row_width) = if total_width < frame.width {
            (LayoutMode::Stretched, frame.width)
        } else {
            (LayoutMode::Scrolling, total_width)
        };

        tracing::debug!(
            target: targets::LAYOUT,
            count,
            total_width,
            frame_width = frame.width,
            row_width,
            ?mode,
            "computed toolbar layout"
        );

        ToolbarLayout {
            mode,
            total_width,
            row_frame: Rect::new(0.0, 0.0, row_width, frame.height),
            scroll_content_size: Size::new(total_width, frame.height),
        }
    }
}
