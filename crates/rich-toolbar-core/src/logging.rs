//! Logging facilities for Rich Toolbar.
//!
//! Rich Toolbar uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("rich_toolbar=debug")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! The [`targets`] constants can be used in filter directives to narrow
//! output to one subsystem, for example `rich_toolbar::layout=debug`.

/// Span names used throughout Rich Toolbar for tracing.
pub mod span_names {
    /// Button-set rebuild span.
    pub const REBUILD: &str = "rich_toolbar::rebuild";
    /// Layout computation span.
    pub const LAYOUT: &str = "rich_toolbar::layout";
    /// Press dispatch span.
    pub const DISPATCH: &str = "rich_toolbar::dispatch";
}

/// Target names for log filtering.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "rich_toolbar_core::signal";
    /// Toolbar orchestration target.
    pub const TOOLBAR: &str = "rich_toolbar::toolbar";
    /// Layout engine target.
    pub const LAYOUT: &str = "rich_toolbar::layout";
    /// Press handling and delegate dispatch target.
    pub const DISPATCH: &str = "rich_toolbar::dispatch";
    /// Configuration loading target.
    pub const CONFIG: &str = "rich_toolbar::config";
    /// Performance spans target.
    pub const PERF: &str = "rich_toolbar::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Useful for tracking the duration of an operation such as a rebuild.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let _span = PerfSpan::new("test_operation");
        tracing::debug!(target: targets::TOOLBAR, answer = 42, "inside perf span");
    }

    #[test]
    fn test_targets_are_namespaced() {
        for target in [targets::TOOLBAR, targets::LAYOUT, targets::DISPATCH, targets::CONFIG] {
            assert!(target.starts_with("rich_toolbar::"));
        }
        assert!(targets::SIGNAL.starts_with("rich_toolbar_core::"));
        assert!(targets::PERF.starts_with("rich_toolbar::"));
        assert!(span_names::LAYOUT.ends_with("layout"));
    }
}
