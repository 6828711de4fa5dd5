//! Configuration types for issue graph rendering.
//!
//! This module provides configuration structures that control how issue
//! graphs are fetched and laid out. All types implement
//! [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`LayoutConfig`] - Layout style and node spacing.
//! - [`GithubConfig`] - Where issues are fetched from.
//!
//! # Example
//!
//! ```
//! # use issue_graph::{config::AppConfig, layout::LayoutStyle};
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.layout().style(), LayoutStyle::Tree);
//! assert_eq!(config.layout().x_spacing(), 200);
//! assert_eq!(config.github().api_url(), "https://api.github.com");
//! ```

use serde::Deserialize;

use crate::layout::LayoutStyle;

const DEFAULT_X_SPACING: i32 = 200;
const DEFAULT_Y_SPACING: i32 = 100;
/// Largest accepted spacing in either direction.
pub const MAX_SPACING: i32 = 10_000;
const DEFAULT_API_URL: &str = "https://api.github.com";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// GitHub configuration section.
    #[serde(default)]
    github: GithubConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(layout: LayoutConfig, github: GithubConfig) -> Self {
        Self { layout, github }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the GitHub configuration.
    pub fn github(&self) -> &GithubConfig {
        &self.github
    }

    /// Replaces the configured layout style.
    pub fn with_layout_style(mut self, style: LayoutStyle) -> Self {
        self.layout.style = style;
        self
    }

    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first offending value.
    pub fn validate(&self) -> Result<(), String> {
        validate_spacing("layout.x_spacing", self.layout.x_spacing)?;
        validate_spacing("layout.y_spacing", self.layout.y_spacing)?;
        if self.github.api_url.trim().is_empty() {
            return Err("github.api_url must not be empty".to_string());
        }
        Ok(())
    }
}

/// Layout style and spacing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LayoutConfig {
    /// Layout style, `tree` or `radial`.
    #[serde(default)]
    style: LayoutStyle,

    /// Horizontal distance between neighbouring leaves.
    #[serde(default = "default_x_spacing")]
    x_spacing: i32,

    /// Vertical distance between levels.
    #[serde(default = "default_y_spacing")]
    y_spacing: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(LayoutStyle::default(), DEFAULT_X_SPACING, DEFAULT_Y_SPACING)
    }
}

impl LayoutConfig {
    pub fn new(style: LayoutStyle, x_spacing: i32, y_spacing: i32) -> Self {
        Self {
            style,
            x_spacing,
            y_spacing,
        }
    }

    pub fn style(&self) -> LayoutStyle {
        self.style
    }

    pub fn x_spacing(&self) -> i32 {
        self.x_spacing
    }

    pub fn y_spacing(&self) -> i32 {
        self.y_spacing
    }
}

/// GitHub REST API settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GithubConfig {
    /// Base URL of the REST API, without a trailing slash.
    #[serde(default = "default_api_url")]
    api_url: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl GithubConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }

    /// Returns the API base URL with any trailing slash removed.
    pub fn api_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }
}

fn validate_spacing(name: &str, value: i32) -> Result<(), String> {
    if !(1..=MAX_SPACING).contains(&value) {
        return Err(format!(
            "{name} must be between 1 and {MAX_SPACING}, got {value}"
        ));
    }
    Ok(())
}

fn default_x_spacing() -> i32 {
    DEFAULT_X_SPACING
}

fn default_y_spacing() -> i32 {
    DEFAULT_Y_SPACING
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(AppConfig::default().validate().is_ok());

        let config = AppConfig::new(
            LayoutConfig::new(LayoutStyle::Tree, 0, 100),
            GithubConfig::default(),
        );
        assert!(config.validate().unwrap_err().contains("x_spacing"));

        let config = AppConfig::new(LayoutConfig::default(), GithubConfig::new(" "));
        assert!(config.validate().unwrap_err().contains("api_url"));
    }

    #[test]
    fn test_validate_rejects_huge_spacing() {
        let config = AppConfig::new(
            LayoutConfig::new(LayoutStyle::Tree, i32::MAX, 100),
            GithubConfig::default(),
        );
        assert_eq!(
            config.validate().unwrap_err(),
            format!("layout.x_spacing must be between 1 and 10000, got {}", i32::MAX)
        );

        let config = AppConfig::new(
            LayoutConfig::new(LayoutStyle::Tree, 200, MAX_SPACING + 1),
            GithubConfig::default(),
        );
        assert!(config.validate().unwrap_err().contains("y_spacing"));

        let config = AppConfig::new(
            LayoutConfig::new(LayoutStyle::Tree, MAX_SPACING, MAX_SPACING),
            GithubConfig::default(),
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_layout_style() {
        let config = AppConfig::default().with_layout_style(LayoutStyle::Radial);
        assert_eq!(config.layout().style(), LayoutStyle::Radial);
        assert_eq!(config.layout().y_spacing(), 100);
    }

    #[test]
    fn test_api_url_trailing_slash() {
        let github = GithubConfig::new("https://ghe.example.com/api/v3/");
        assert_eq!(github.api_url(), "https://ghe.example.com/api/v3");
    }
}
