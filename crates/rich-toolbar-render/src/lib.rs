//! Value types shared between Rich Toolbar and its host.
//!
//! The toolbar does not draw anything itself. This crate holds the small
//! vocabulary it uses to talk about what the host draws:
//!
//! - [`Point`], [`Size`], [`Rect`]: frames and extents in host units
//! - [`Color`]: fills for the background layer and the button row
//! - [`Image`]: a named handle to the pixels an image-backed button shows
//!
//! # Example
//!
//! ```
//! use rich_toolbar_render::{Color, Rect};
//!
//! let frame = Rect::new(0.0, 0.0, 320.0, 44.0);
//! let tint = Color::from_hex("#F5F5F5").unwrap();
//! assert_eq!(frame.width(), 320.0);
//! assert!(!tint.is_transparent());
//! ```

mod image_handle;
mod types;

pub use image_handle::Image;
pub use types::{Color, Point, Rect, Size};
