//! Stock formatting commands.
//!
//! [`DefaultOption`] is the catalogue of commands every rich-text toolbar
//! offers out of the box. Formatting commands go straight to the bound
//! [`EditingTarget`](crate::widget::EditingTarget); commands that need custom
//! UI (colors, images, links) are forwarded to the toolbar's delegate.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use rich_toolbar::render::Rect;
//! use rich_toolbar::widget::widgets::{DefaultOption, RichEditorOption, RichEditorToolbar};
//!
//! let toolbar = RichEditorToolbar::new(Rect::new(0.0, 0.0, 320.0, 44.0));
//! toolbar.set_options(DefaultOption::all_options());
//!
//! assert_eq!(toolbar.button_count(), DefaultOption::all().len());
//! assert_eq!(DefaultOption::Header(2).title(), "H2");
//! ```

use std::sync::Arc;

use rich_toolbar_core::logging::targets;

use super::delegate::DelegateRequest;
use super::option::RichEditorOption;
use super::rich_editor_toolbar::RichEditorToolbar;

/// A stock toolbar command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultOption {
    Clear,
    Undo,
    Redo,
    Bold,
    Italic,
    Subscript,
    Superscript,
    Strike,
    Underline,
    TextColor,
    TextBackgroundColor,
    /// A header level, 1 through 6. Levels outside that range are clamped.
    Header(u8),
    Indent,
    Outdent,
    OrderedList,
    UnorderedList,
    AlignLeft,
    AlignCenter,
    AlignRight,
    Image,
    Link,
}

const ALL: [DefaultOption; 26] = [
    DefaultOption::Clear,
    DefaultOption::Undo,
    DefaultOption::Redo,
    DefaultOption::Bold,
    DefaultOption::Italic,
    DefaultOption::Subscript,
    DefaultOption::Superscript,
    DefaultOption::Strike,
    DefaultOption::Underline,
    DefaultOption::TextColor,
    DefaultOption::TextBackgroundColor,
    DefaultOption::Header(1),
    DefaultOption::Header(2),
    DefaultOption::Header(3),
    DefaultOption::Header(4),
    DefaultOption::Header(5),
    DefaultOption::Header(6),
    DefaultOption::Indent,
    DefaultOption::Outdent,
    DefaultOption::OrderedList,
    DefaultOption::UnorderedList,
    DefaultOption::AlignLeft,
    DefaultOption::AlignCenter,
    DefaultOption::AlignRight,
    DefaultOption::Image,
    DefaultOption::Link,
];

impl DefaultOption {
    /// Highest header level.
    pub const MAX_HEADER_LEVEL: u8 = 6;

    /// Every stock command, headers 1 through 6 included, in toolbar order.
    pub fn all() -> &'static [DefaultOption] {
        &ALL
    }

    /// [`DefaultOption::all`] as shareable toolbar options.
    pub fn all_options() -> Vec<Arc<dyn RichEditorOption>> {
        ALL.iter()
            .map(|option| Arc::new(*option) as Arc<dyn RichEditorOption>)
            .collect()
    }

    /// A header command, or `None` if `level` is not between 1 and 6.
    pub fn header(level: u8) -> Option<Self> {
        (1..=Self::MAX_HEADER_LEVEL)
            .contains(&level)
            .then_some(DefaultOption::Header(level))
    }

    fn clamp_header(level: u8) -> u8 {
        level.clamp(1, Self::MAX_HEADER_LEVEL)
    }

    /// The button label.
    pub fn label(self) -> &'static str {
        match self {
            DefaultOption::Clear => "Clear",
            DefaultOption::Undo => "Undo",
            DefaultOption::Redo => "Redo",
            DefaultOption::Bold => "Bold",
            DefaultOption::Italic => "Italic",
            DefaultOption::Subscript => "Sub",
            DefaultOption::Superscript => "Super",
            DefaultOption::Strike => "Strike",
            DefaultOption::Underline => "Underline",
            DefaultOption::TextColor => "Color",
            DefaultOption::TextBackgroundColor => "BG Color",
            DefaultOption::Header(level) => match Self::clamp_header(level) {
                1 => "H1",
                2 => "H2",
                3 => "H3",
                4 => "H4",
                5 => "H5",
                _ => "H6",
            },
            DefaultOption::Indent => "Indent",
            DefaultOption::Outdent => "Outdent",
            DefaultOption::OrderedList => "Ordered List",
            DefaultOption::UnorderedList => "Unordered List",
            DefaultOption::AlignLeft => "Left",
            DefaultOption::AlignCenter => "Center",
            DefaultOption::AlignRight => "Right",
            DefaultOption::Image => "Image",
            DefaultOption::Link => "Link",
        }
    }

    /// Position in [`DefaultOption::all`].
    pub fn index(self) -> usize {
        match self {
            DefaultOption::Header(level) => {
                10 + usize::from(Self::clamp_header(level))
            }
            other => ALL.iter().position(|o| *o == other).unwrap_or_default(),
        }
    }

    /// Whether the command is resolved by the delegate rather than the editor.
    pub fn is_delegated(self) -> bool {
        matches!(
            self,
            DefaultOption::TextColor
                | DefaultOption::TextBackgroundColor
                | DefaultOption::Image
                | DefaultOption::Link
        )
    }

    /// Run the command against `toolbar`.
    ///
    /// Formatting commands are applied to the bound editor and do nothing
    /// when none is bound. Delegated commands invoke the matching delegate
    /// slot, if any.
    pub fn perform(self, toolbar: &RichEditorToolbar) {
        tracing::trace!(target: targets::DISPATCH, option = ?self, "performing stock command");

        let applied = match self {
            DefaultOption::Clear => toolbar.with_editor(|e| e.remove_format()),
            DefaultOption::Undo => toolbar.with_editor(|e| e.undo()),
            DefaultOption::Redo => toolbar.with_editor(|e| e.redo()),
            DefaultOption::Bold => toolbar.with_editor(|e| e.bold()),
            DefaultOption::Italic => toolbar.with_editor(|e| e.italic()),
            DefaultOption::Subscript => toolbar.with_editor(|e| e.subscript()),
            DefaultOption::Superscript => toolbar.with_editor(|e| e.superscript()),
            DefaultOption::Strike => toolbar.with_editor(|e| e.strikethrough()),
            DefaultOption::Underline => toolbar.with_editor(|e| e.underline()),
            DefaultOption::Header(level) => {
                toolbar.with_editor(|e| e.header(Self::clamp_header(level)))
            }
            DefaultOption::Indent => toolbar.with_editor(|e| e.indent()),
            DefaultOption::Outdent => toolbar.with_editor(|e| e.outdent()),
            DefaultOption::OrderedList => toolbar.with_editor(|e| e.ordered_list()),
            DefaultOption::UnorderedList => toolbar.with_editor(|e| e.unordered_list()),
            DefaultOption::AlignLeft => toolbar.with_editor(|e| e.align_left()),
            DefaultOption::AlignCenter => toolbar.with_editor(|e| e.align_center()),
            DefaultOption::AlignRight => toolbar.with_editor(|e| e.align_right()),
            DefaultOption::TextColor => {
                toolbar.request(DelegateRequest::ChangeTextColor(Some(self)))
            }
            DefaultOption::TextBackgroundColor => {
                toolbar.request(DelegateRequest::ChangeBackgroundColor)
            }
            DefaultOption::Image => toolbar.request(DelegateRequest::InsertImage),
            DefaultOption::Link => toolbar.request(DelegateRequest::InsertLink),
        };

        if !applied {
            tracing::trace!(target: targets::DISPATCH, option = ?self, "no receiver for stock command");
        }
    }
}

impl RichEditorOption for DefaultOption {
    fn title(&self) -> &str {
        self.label()
    }

    fn tag(&self) -> i32 {
        i32::try_from(self.index()).unwrap_or_default()
    }

    fn default_option(&self) -> Option<DefaultOption> {
        Some(*self)
    }

    fn action(&self, toolbar: &RichEditorToolbar, _item: Option<&DefaultOption>) {
        self.perform(toolbar);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_every_command_in_order() {
        let all = DefaultOption::all();
        assert_eq!(all.len(), 26);
        assert_eq!(all[0], DefaultOption::Clear);
        assert_eq!(all[11], DefaultOption::Header(1));
        assert_eq!(all[16], DefaultOption::Header(6));
        assert_eq!(all[25], DefaultOption::Link);
    }

    #[test]
    fn test_labels() {
        assert_eq!(DefaultOption::Subscript.label(), "Sub");
        assert_eq!(DefaultOption::Superscript.label(), "Super");
        assert_eq!(DefaultOption::TextBackgroundColor.label(), "BG Color");
        assert_eq!(DefaultOption::UnorderedList.label(), "Unordered List");
        assert_eq!(DefaultOption::AlignCenter.label(), "Center");
        assert_eq!(DefaultOption::Header(4).title(), "H4");
    }

    #[test]
    fn test_index_matches_position() {
        for (i, option) in DefaultOption::all().iter().enumerate() {
            assert_eq!(option.index(), i);
            assert_eq!(option.tag(), i as i32);
        }
        assert_eq!(DefaultOption::Header(9).index(), 16);
    }

    #[test]
    fn test_out_of_range_header_is_clamped() {
        assert_eq!(DefaultOption::Header(0).label(), "H1");
        assert_eq!(DefaultOption::Header(0).tag(), DefaultOption::Header(1).tag());
        assert_eq!(DefaultOption::Header(42).label(), "H6");
        assert_eq!(DefaultOption::Header(42).tag(), DefaultOption::Header(6).tag());
    }

    #[test]
    fn test_header_constructor_validates_level() {
        assert_eq!(DefaultOption::header(3), Some(DefaultOption::Header(3)));
        assert_eq!(DefaultOption::header(0), None);
        assert_eq!(DefaultOption::header(7), None);
    }

    #[test]
    fn test_delegated_commands() {
        let delegated: Vec<_> = DefaultOption::all()
            .iter()
            .copied()
            .filter(|o| o.is_delegated())
            .collect();
        assert_eq!(
            delegated,
            vec![
                DefaultOption::TextColor,
                DefaultOption::TextBackgroundColor,
                DefaultOption::Image,
                DefaultOption::Link,
            ]
        );
    }

    #[test]
    fn test_default_options_are_text_backed() {
        let option: &dyn RichEditorOption = &DefaultOption::Bold;
        assert!(option.image().is_none());
        assert_eq!(option.default_option(), Some(DefaultOption::Bold));
    }
}
