//! Toolbar configuration.
//!
//! A [`ToolbarConfig`] carries the layout constants and colors a host may
//! want to tune without recompiling. It is usually read from a TOML file:
//!
//! ```toml
//! default_button_width = 50.0
//! button_margin = 4.0
//! bar_tint_color = "#F2F2F7"
//! background_color = "#00000000"
//!
//! [[fallback_widths]]
//! tag = 11
//! width = 36.0
//! ```
//!
//! Every field is optional; missing fields take their defaults.
//!
//! # Example
//!
//! ```
//! use rich_toolbar::config::ToolbarConfig;
//! use rich_toolbar::render::Rect;
//! use rich_toolbar::widget::widgets::RichEditorToolbar;
//!
//! let config = ToolbarConfig::from_toml_str("button_margin = 4.0").unwrap();
//! let toolbar = RichEditorToolbar::with_config(Rect::new(0.0, 0.0, 320.0, 44.0), &config).unwrap();
//! assert_eq!(toolbar.layout_engine().button_margin(), 4.0);
//! ```

use std::path::Path;

use rich_toolbar_core::logging::targets;
use rich_toolbar_render::Color;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::widget::layout::ToolbarLayoutEngine;

/// Fallback width for unmeasured buttons with a given tag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TagWidth {
    pub tag: i32,
    pub width: f32,
}

/// Tunable toolbar settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarConfig {
    /// Width assumed for a button the host has not measured.
    pub default_button_width: f32,
    /// Margin added once per button.
    pub button_margin: f32,
    /// Fill of the background layer, as a hex string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_tint_color: Option<String>,
    /// Fill of the button row, as a hex string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Per-tag overrides of `default_button_width`.
    pub fallback_widths: Vec<TagWidth>,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            default_button_width: ToolbarLayoutEngine::DEFAULT_BUTTON_WIDTH,
            button_margin: ToolbarLayoutEngine::DEFAULT_BUTTON_MARGIN,
            bar_tint_color: None,
            background_color: None,
            fallback_widths: Vec::new(),
        }
    }
}

impl ToolbarConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: ToolbarConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let config = Self::from_toml_str(&text)?;

        tracing::debug!(
            target: targets::CONFIG,
            path = %path.display(),
            fallback_widths = config.fallback_widths.len(),
            "loaded toolbar config"
        );

        Ok(config)
    }

    /// Serialize to pretty-printed TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the configuration to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = self.to_toml_string()?;
        std::fs::write(path, text).map_err(|e| ConfigError::io(path, e))
    }

    /// Check widths and colors.
    pub fn validate(&self) -> Result<()> {
        check_width("default_button_width", self.default_button_width)?;
        check_width("button_margin", self.button_margin)?;
        for entry in &self.fallback_widths {
            check_width(&format!("fallback_widths[{}]", entry.tag), entry.width)?;
        }
        self.bar_tint_color()?;
        self.background_color()?;
        Ok(())
    }

    /// The parsed bar tint color.
    pub fn bar_tint_color(&self) -> Result<Option<Color>> {
        parse_color("bar_tint_color", self.bar_tint_color.as_deref())
    }

    /// The parsed button row background color.
    pub fn background_color(&self) -> Result<Option<Color>> {
        parse_color("background_color", self.background_color.as_deref())
    }

    /// A layout engine using these settings.
    pub fn layout_engine(&self) -> ToolbarLayoutEngine {
        self.fallback_widths.iter().fold(
            ToolbarLayoutEngine::new()
                .with_default_button_width(self.default_button_width)
                .with_button_margin(self.button_margin),
            |engine, entry| engine.with_fallback_width(entry.tag, entry.width),
        )
    }
}

fn check_width(field: &str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid_width(field, value))
    }
}

fn parse_color(field: &str, value: Option<&str>) -> Result<Option<Color>> {
    value
        .map(|hex| Color::from_hex(hex).ok_or_else(|| ConfigError::invalid_color(field, hex)))
        .transpose()
}
