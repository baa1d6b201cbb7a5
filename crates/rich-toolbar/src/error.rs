//! Error types for toolbar configuration.

use std::path::PathBuf;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading or applying a toolbar configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("Failed to read toolbar config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or schema error.
    #[error("Invalid toolbar config: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML generation error.
    #[error("Failed to serialize toolbar config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A color that is not `#RRGGBB` or `#RRGGBBAA`.
    #[error("Invalid color for '{field}': '{value}'")]
    InvalidColor { field: String, value: String },

    /// A negative or non-finite width.
    #[error("Invalid width for '{field}': {value}")]
    InvalidWidth { field: String, value: f32 },
}

impl ConfigError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a color error.
    pub fn invalid_color(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidColor {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a width error.
    pub fn invalid_width(field: impl Into<String>, value: f32) -> Self {
        Self::InvalidWidth {
            field: field.into(),
            value,
        }
    }
}
