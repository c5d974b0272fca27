//! Configuration types for chord diagram rendering.
//!
//! This module provides configuration structures that control diagram
//! defaults and visual styling. All types implement [`serde::Deserialize`]
//! for flexible loading from external sources (the CLI loads them from
//! TOML).
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining diagram and style settings.
//! - [`DiagramConfig`] - Default visible fret count and sheet column count.
//! - [`StyleConfig`] - Visual styling options such as background color and font.
//!
//! # Example
//!
//! ```
//! # use capo::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.diagram().frets_visible(), 5);
//! assert_eq!(config.diagram().columns(), 4);
//! ```

use serde::Deserialize;

use capo_core::color::Color;

/// Top-level application configuration combining diagram and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Diagram defaults section.
    #[serde(default)]
    diagram: DiagramConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified diagram and style
    /// configurations.
    pub fn new(diagram: DiagramConfig, style: StyleConfig) -> Self {
        Self { diagram, style }
    }

    /// Returns the diagram defaults.
    pub fn diagram(&self) -> &DiagramConfig {
        &self.diagram
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Default values applied when a request leaves them unspecified.
#[derive(Debug, Clone, Deserialize)]
pub struct DiagramConfig {
    /// Number of fret rows shown in a diagram window.
    #[serde(default = "default_frets_visible")]
    frets_visible: u32,

    /// Number of columns in a sheet of diagrams.
    #[serde(default = "default_columns")]
    columns: u32,
}

fn default_frets_visible() -> u32 {
    5
}

fn default_columns() -> u32 {
    4
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            frets_visible: default_frets_visible(),
            columns: default_columns(),
        }
    }
}

impl DiagramConfig {
    /// Returns the default number of visible fret rows.
    pub fn frets_visible(&self) -> u32 {
        self.frets_visible
    }

    /// Returns the default sheet column count.
    pub fn columns(&self) -> u32 {
        self.columns
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Fields that are not set fall back to renderer defaults (white background,
/// Arial).
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`] for diagrams, as a CSS color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Font family used for the title and glyph text.
    #[serde(default)]
    font_family: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the configured font family, or the renderer default.
    pub fn font_family(&self) -> &str {
        self.font_family.as_deref().unwrap_or("Arial")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.diagram().frets_visible(), 5);
        assert_eq!(config.diagram().columns(), 4);
        assert!(config.style().background_color().unwrap().is_none());
        assert_eq!(config.style().font_family(), "Arial");
    }

    #[test]
    fn test_invalid_background_color_is_reported() {
        let style: StyleConfig =
            serde_json::from_str(r#"{"background_color": "definitely-wrong"}"#).unwrap();
        let err = style.background_color().unwrap_err();
        assert!(err.contains("definitely-wrong"));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"diagram": {"columns": 6}}"#).unwrap();
        assert_eq!(config.diagram().columns(), 6);
        assert_eq!(config.diagram().frets_visible(), 5);
    }
}
