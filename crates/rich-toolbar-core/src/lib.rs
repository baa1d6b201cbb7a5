//! Core systems for Rich Toolbar.
//!
//! This crate provides the foundational pieces shared by the toolbar crates:
//!
//! - **Signal/Slot System**: Type-safe, synchronous change notification
//! - **Property System**: Values that report whether a write changed them
//! - **Logging**: `tracing` targets, span names and a perf span guard
//!
//! # Signal/Slot Example
//!
//! ```
//! use rich_toolbar_core::Signal;
//!
//! // Create a signal that notifies when a button toggles
//! let toggled = Signal::<bool>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = toggled.connect(|selected| {
//!     println!("Selected: {}", selected);
//! });
//!
//! // Emit the signal
//! toggled.emit(true);
//!
//! // Disconnect when done
//! toggled.disconnect(conn_id);
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use logging::PerfSpan;
pub use property::Property;
pub use signal::{ConnectionId, Signal};
