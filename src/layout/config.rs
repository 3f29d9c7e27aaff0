//! Configuration for the layout engines
//!
//! Settings are loaded once per layout invocation (usually from TOML) and
//! passed down by reference; nothing in the engines mutates them.

use std::path::Path;

use log::warn;
use serde::Deserialize;
use thiserror::Error;

use super::types::{Direction, Offsets};

/// Errors that can occur when loading settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse settings TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Which layout engine arranges the hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutType {
    /// Nested visible groups built from axis groups
    #[default]
    Nested,
    /// Column-wrapped rows of subtrees
    Hierarchy,
}

impl LayoutType {
    /// Resolve a layout selector, falling back to [`LayoutType::Nested`]
    ///
    /// Accepts the names `nested` and `hierarchy` (any case) as well as the
    /// legacy numeric codes `10` and `40`.
    pub fn from_selector(selector: &str) -> Self {
        match selector.trim().to_ascii_lowercase().as_str() {
            "nested" | "10" => LayoutType::Nested,
            "hierarchy" | "40" => LayoutType::Hierarchy,
            other => {
                warn!("unsupported layout type '{}', using nested layout", other);
                LayoutType::Nested
            }
        }
    }
}

/// Fixed measures used by the hierarchical engine
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SizeReference {
    /// Width of a leaf box
    pub default_width: f64,
    /// Height of a leaf box
    pub default_height: f64,
    /// Horizontal page margin around the root rows
    pub padding_x: f64,
    /// Vertical page margin and per-row spacing in the dimension pass
    pub padding_y: f64,
    /// Horizontal gap between sibling boxes
    pub margin_x: f64,
    /// Vertical gap between wrapped rows
    pub margin_y: f64,
    /// Header band above the children of an inner node
    pub inner_top_padding_y: f64,
    /// Space below the last row of children
    pub inner_bottom_padding_y: f64,
}

impl Default for SizeReference {
    fn default() -> Self {
        Self {
            default_width: 140.0,
            default_height: 50.0,
            padding_x: 12.0,
            padding_y: 12.0,
            margin_x: 12.0,
            margin_y: 10.0,
            inner_top_padding_y: 38.0,
            inner_bottom_padding_y: 5.0,
        }
    }
}

impl SizeReference {
    /// Horizontal room one column takes in the placement pass
    pub fn element_unit_width(&self) -> f64 {
        self.default_width + 2.0 * self.margin_x
    }
}

/// Configuration options for layout computation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Layout engine selector (see [`LayoutType::from_selector`])
    pub layout_type: String,

    /// Stacking direction of nested groups
    pub direction: Direction,

    /// Column budget of the root level
    pub max_horizontal_count: usize,

    /// Default column budget handed to nested levels
    pub max_child_horizontal_count: usize,

    /// Spacing between sibling elements in a group
    pub space_between: f64,

    pub left_padding: f64,
    pub right_padding: f64,
    pub top_padding: f64,
    pub bottom_padding: f64,

    /// Gap between a group's outer label and its content
    pub space_to_outer_label: f64,

    /// Room reserved for a lateral label
    pub label_width: f64,

    /// Room reserved for a top label
    pub label_height: f64,

    /// Place visible group labels on the left instead of on top
    pub lateral_label: bool,

    /// Measures for the hierarchical engine
    pub size_reference: SizeReference,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layout_type: "nested".to_string(),
            direction: Direction::Horizontal,
            max_horizontal_count: 5,
            max_child_horizontal_count: 2,
            space_between: 5.0,
            left_padding: 5.0,
            right_padding: 5.0,
            top_padding: 5.0,
            bottom_padding: 5.0,
            space_to_outer_label: 10.0,
            label_width: 140.0,
            label_height: 20.0,
            lateral_label: false,
            size_reference: SizeReference::default(),
        }
    }
}

impl Settings {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load settings from a TOML string; missing keys keep their defaults
    pub fn from_str(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Resolved layout engine selector
    pub fn layout(&self) -> LayoutType {
        LayoutType::from_selector(&self.layout_type)
    }

    /// Set the layout engine selector
    pub fn with_layout_type(mut self, layout_type: impl Into<String>) -> Self {
        self.layout_type = layout_type.into();
        self
    }

    /// Set the stacking direction of nested groups
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the root and nested column budgets
    pub fn with_column_counts(mut self, max: usize, max_child: usize) -> Self {
        self.max_horizontal_count = max;
        self.max_child_horizontal_count = max_child;
        self
    }

    /// Set the spacing between sibling elements
    pub fn with_space_between(mut self, spacing: f64) -> Self {
        self.space_between = spacing;
        self
    }

    /// Set the same padding on all four sides
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.left_padding = padding;
        self.right_padding = padding;
        self.top_padding = padding;
        self.bottom_padding = padding;
        self
    }

    /// Set the outer label geometry
    pub fn with_label(mut self, width: f64, height: f64, gap: f64) -> Self {
        self.label_width = width;
        self.label_height = height;
        self.space_to_outer_label = gap;
        self
    }

    /// Place visible group labels on the left
    pub fn with_lateral_label(mut self, lateral: bool) -> Self {
        self.lateral_label = lateral;
        self
    }

    /// Offsets of a labelled group: paddings plus room for its label
    pub fn labelled_offsets(&self, lateral_label: bool) -> Offsets {
        let top = if lateral_label {
            self.top_padding
        } else {
            self.top_padding + self.label_height + self.space_to_outer_label
        };
        let left = if lateral_label {
            self.left_padding + self.label_width + self.space_to_outer_label
        } else {
            self.left_padding
        };
        Offsets::new(top, left, self.bottom_padding, self.right_padding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.layout(), LayoutType::Nested);
        assert_eq!(settings.direction, Direction::Horizontal);
        assert_eq!(settings.max_horizontal_count, 5);
        assert_eq!(settings.max_child_horizontal_count, 2);
        assert_eq!(settings.space_between, 5.0);
        assert_eq!(settings.size_reference.default_width, 140.0);
        assert_eq!(settings.size_reference.element_unit_width(), 164.0);
    }

    #[test]
    fn test_from_toml_keeps_defaults() {
        let settings = Settings::from_str(
            r#"
            layout_type = "hierarchy"
            max_horizontal_count = 4
            direction = "vertical"

            [size_reference]
            default_width = 100.0
            "#,
        )
        .unwrap();

        assert_eq!(settings.layout(), LayoutType::Hierarchy);
        assert_eq!(settings.max_horizontal_count, 4);
        assert_eq!(settings.max_child_horizontal_count, 2);
        assert_eq!(settings.direction, Direction::Vertical);
        assert_eq!(settings.size_reference.default_width, 100.0);
        assert_eq!(settings.size_reference.default_height, 50.0);
    }

    #[test]
    fn test_invalid_toml() {
        let err = Settings::from_str("max_horizontal_count = \"many\"").unwrap_err();
        assert!(matches!(err, SettingsError::ParseError(_)));
    }

    #[test]
    fn test_layout_selector_fallback() {
        assert_eq!(LayoutType::from_selector("HIERARCHY"), LayoutType::Hierarchy);
        assert_eq!(LayoutType::from_selector("40"), LayoutType::Hierarchy);
        assert_eq!(LayoutType::from_selector("nested"), LayoutType::Nested);
        assert_eq!(LayoutType::from_selector("process_flow"), LayoutType::Nested);
        assert_eq!(LayoutType::from_selector(""), LayoutType::Nested);
    }

    #[test]
    fn test_labelled_offsets() {
        let settings = Settings::new().with_padding(5.0).with_label(100.0, 20.0, 10.0);

        let top = settings.labelled_offsets(false);
        assert_eq!(top, Offsets::new(35.0, 5.0, 5.0, 5.0));

        let lateral = settings.labelled_offsets(true);
        assert_eq!(lateral, Offsets::new(5.0, 115.0, 5.0, 5.0));
    }
}
