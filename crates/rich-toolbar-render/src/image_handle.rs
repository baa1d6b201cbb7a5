//! Image handles for image-backed toolbar options.
//!
//! The toolbar never decodes or draws pixels; it only needs to know *which*
//! image a button shows. [`Image`] is a cheap, clonable handle naming an
//! asset the host resolves to real pixels at paint time.
//!
//! # Example
//!
//! ```
//! use rich_toolbar_render::{Image, Size};
//!
//! // A themed asset the host knows how to resolve
//! let bold = Image::named("format-bold", Size::new(24.0, 24.0));
//! assert_eq!(bold.name(), "format-bold");
//! ```

use std::sync::Arc;

use crate::types::Size;

/// A handle to a named image shown by a toolbar button.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    name: Arc<str>,
    size: Size,
}

impl Image {
    /// Create a handle to a named asset with its intrinsic size.
    pub fn named(name: impl Into<Arc<str>>, size: Size) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// The asset name in the host's icon catalogue.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The intrinsic size reported by the host.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_image() {
        let image = Image::named("format-italic", Size::new(24.0, 24.0));
        assert_eq!(image.name(), "format-italic");
        assert_eq!(image.size(), Size::new(24.0, 24.0));
    }

    #[test]
    fn test_images_compare_by_name_and_size() {
        let a = Image::named("bold", Size::new(24.0, 24.0));
        let b = Image::named("bold", Size::new(24.0, 24.0));
        let c = Image::named("bold-selected", Size::new(24.0, 24.0));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
