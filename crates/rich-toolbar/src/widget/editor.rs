//! The editing surface a toolbar drives.
//!
//! The toolbar never edits text itself. Stock formatting commands are
//! forwarded to whatever implements [`EditingTarget`] and is currently bound
//! to the toolbar. Every method has a no-op default so an editor only needs
//! to implement the commands it supports.

/// An editing surface that can apply formatting commands.
///
/// The toolbar holds its target weakly; implementors are owned elsewhere.
/// Methods take `&self` so a target can be shared behind an `Arc` and use
/// interior mutability for its document state.
pub trait EditingTarget: Send + Sync {
    /// Strip all formatting from the current selection.
    fn remove_format(&self) {}

    /// Undo the last edit.
    fn undo(&self) {}

    /// Redo the last undone edit.
    fn redo(&self) {}

    /// Toggle bold.
    fn bold(&self) {}

    /// Toggle italic.
    fn italic(&self) {}

    /// Toggle subscript.
    fn subscript(&self) {}

    /// Toggle superscript.
    fn superscript(&self) {}

    /// Toggle strikethrough.
    fn strikethrough(&self) {}

    /// Toggle underline.
    fn underline(&self) {}

    /// Turn the current block into a header of the given level (1-6).
    fn header(&self, level: u8) {
        let _ = level;
    }

    /// Increase indentation.
    fn indent(&self) {}

    /// Decrease indentation.
    fn outdent(&self) {}

    /// Toggle a numbered list.
    fn ordered_list(&self) {}

    /// Toggle a bulleted list.
    fn unordered_list(&self) {}

    /// Left-align the current block.
    fn align_left(&self) {}

    /// Center the current block.
    fn align_center(&self) {}

    /// Right-align the current block.
    fn align_right(&self) {}
}
