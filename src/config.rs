//! Rendering configuration and color palettes
//!
//! Colors passed to the snippet functions may be symbolic tokens (e.g.
//! `truth`, `predicted`) that a [`Palette`] maps to concrete CSS values.
//! Unmapped colors are emitted as given, so plain CSS names and hex values
//! keep working without any palette.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Side length of a landmark marker, in pixels
pub const DEFAULT_MARKER_SIZE: f64 = 8.0;

/// Border width of a bounding box, in pixels
pub const DEFAULT_BORDER_WIDTH: f64 = 2.0;

/// Color used when the caller does not pick one
pub const DEFAULT_COLOR: &str = "green";

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A mapping from symbolic color tokens to CSS color values
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Optional name for the palette
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color mappings: token -> CSS color
    pub colors: HashMap<String, String>,
}

impl Palette {
    /// Create an empty palette
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a token mapping
    pub fn with_color(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.colors.insert(token.into(), value.into());
        self
    }

    /// Resolve a token to its mapped value, if the palette defines it
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a token, falling back to the token itself
    pub fn resolve_or_literal<'a>(&'a self, token: &'a str) -> &'a str {
        self.resolve(token).unwrap_or(token)
    }
}

/// Configuration options for HTML output
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HtmlConfig {
    /// Side length of landmark markers
    pub marker_size: f64,

    /// Border width of bounding boxes
    pub border_width: f64,

    /// Color for landmarks and boxes that don't specify one
    pub default_color: String,

    /// Symbolic color mappings
    pub palette: Palette,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            marker_size: DEFAULT_MARKER_SIZE,
            border_width: DEFAULT_BORDER_WIDTH,
            default_color: DEFAULT_COLOR.to_string(),
            palette: Palette::default(),
        }
    }
}

impl HtmlConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML string
    ///
    /// Missing keys keep their default values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the landmark marker size
    pub fn with_marker_size(mut self, size: f64) -> Self {
        self.marker_size = size;
        self
    }

    /// Set the bounding box border width
    pub fn with_border_width(mut self, width: f64) -> Self {
        self.border_width = width;
        self
    }

    /// Set the fallback color
    pub fn with_default_color(mut self, color: impl Into<String>) -> Self {
        self.default_color = color.into();
        self
    }

    /// Set the palette for color resolution
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Resolve a color through the palette
    pub fn color<'a>(&'a self, token: &'a str) -> &'a str {
        self.palette.resolve_or_literal(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HtmlConfig::default();
        assert_eq!(config.marker_size, 8.0);
        assert_eq!(config.border_width, 2.0);
        assert_eq!(config.default_color, "green");
        assert!(config.palette.colors.is_empty());
    }

    #[test]
    fn test_builder_pattern() {
        let config = HtmlConfig::new()
            .with_marker_size(6.0)
            .with_border_width(1.0)
            .with_default_color("red")
            .with_palette(Palette::new().with_color("truth", "#00ff00"));

        assert_eq!(config.marker_size, 6.0);
        assert_eq!(config.border_width, 1.0);
        assert_eq!(config.default_color, "red");
        assert_eq!(config.color("truth"), "#00ff00");
    }

    #[test]
    fn test_resolve_missing_token_is_literal() {
        let palette = Palette::new().with_color("truth", "#00ff00");
        assert_eq!(palette.resolve("blue"), None);
        assert_eq!(palette.resolve_or_literal("blue"), "blue");
    }

    #[test]
    fn test_parse_toml_full() {
        let toml_str = r##"
marker_size = 10
border_width = 3
default_color = "yellow"

[palette]
name = "eval"
description = "ground truth vs predictions"

[palette.colors]
truth = "#00ff00"
predicted = "#ff0000"
"##;
        let config = HtmlConfig::from_toml_str(toml_str).expect("Should parse");
        assert_eq!(config.marker_size, 10.0);
        assert_eq!(config.border_width, 3.0);
        assert_eq!(config.default_color, "yellow");
        assert_eq!(config.palette.name, Some("eval".to_string()));
        assert_eq!(config.color("predicted"), "#ff0000");
    }

    #[test]
    fn test_parse_toml_partial_keeps_defaults() {
        let config = HtmlConfig::from_toml_str("default_color = \"blue\"").expect("Should parse");
        assert_eq!(config.marker_size, 8.0);
        assert_eq!(config.border_width, 2.0);
        assert_eq!(config.default_color, "blue");
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = HtmlConfig::from_toml_str("this is not valid toml {{{{");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = HtmlConfig::from_file(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
