//! Color handling for issue graph nodes
//!
//! This module provides the [`Color`] type, a CSS color string that has been
//! validated with the `DynamicColor` parser from the color crate. The original
//! spelling is kept so that rendered SVG attributes match the label colors
//! reported by GitHub.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// Fill of regular issues and of the "Task" legend entry.
const TASK: &str = "#cccccc";
/// Fill of the "Epic" legend entry.
const EPIC: &str = "#6f42c1";
/// Fill of the "Workstream" legend entry.
const WORKSTREAM: &str = "#1d76db";
/// Fill of the synthetic "All Issues" root.
const ROOT: &str = "#000000";

/// A validated CSS color string
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Color {
    css: String,
}

impl Color {
    /// Create a new `Color` from a CSS color string
    /// This accepts strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use issue_graph_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// assert_eq!(red.to_string(), "#ff0000");
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(_) => Ok(Self {
                css: color_str.to_string(),
            }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Create a `Color` from a GitHub label color, which is a hex triplet
    /// without the leading `#`.
    ///
    /// # Examples
    ///
    /// ```
    /// use issue_graph_core::color::Color;
    ///
    /// let epic = Color::from_label_hex("6f42c1").unwrap();
    /// assert_eq!(epic.to_string(), "#6f42c1");
    /// ```
    pub fn from_label_hex(hex: &str) -> Result<Self, String> {
        Self::new(&format!("#{}", hex.trim_start_matches('#')))
    }

    /// The gray used for regular issues.
    pub fn task() -> Self {
        Self::trusted(TASK)
    }

    /// The purple shown for epics in the legend.
    pub fn epic() -> Self {
        Self::trusted(EPIC)
    }

    /// The blue shown for workstreams in the legend.
    pub fn workstream() -> Self {
        Self::trusted(WORKSTREAM)
    }

    /// The fill of the synthetic "All Issues" root.
    pub fn root() -> Self {
        Self::trusted(ROOT)
    }

    /// Returns `true` if this is the regular issue gray.
    pub fn is_task(&self) -> bool {
        self.css.eq_ignore_ascii_case(TASK)
    }

    /// Text color that stays readable on top of this fill.
    ///
    /// Only the light task gray gets black text; label colors and the root
    /// fill get white text.
    pub fn contrasting_text(&self) -> &'static str {
        if self.is_task() { "#000000" } else { "#ffffff" }
    }

    /// Returns the CSS string as given on construction.
    pub fn as_str(&self) -> &str {
        &self.css
    }

    fn trusted(css: &'static str) -> Self {
        Self {
            css: css.to_string(),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::task()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#ff0000").is_ok());
        assert!(Color::new("blue").is_ok());
        assert!(Color::new("not-a-color").is_err());
    }

    #[test]
    fn test_color_default_is_task_gray() {
        let color = Color::default();
        assert_eq!(color.to_string(), "#cccccc");
        assert!(color.is_task());
    }

    #[test]
    fn test_from_label_hex() {
        let color = Color::from_label_hex("1d76db").unwrap();
        assert_eq!(color, Color::workstream());

        // A leading hash is tolerated
        let color = Color::from_label_hex("#6f42c1").unwrap();
        assert_eq!(color, Color::epic());

        assert!(Color::from_label_hex("zzzzzz").is_err());
    }

    #[test]
    fn test_contrasting_text() {
        assert_eq!(Color::task().contrasting_text(), "#000000");
        assert_eq!(Color::new("#CCCCCC").unwrap().contrasting_text(), "#000000");
        assert_eq!(Color::epic().contrasting_text(), "#ffffff");
        assert_eq!(Color::root().contrasting_text(), "#ffffff");
    }
}
