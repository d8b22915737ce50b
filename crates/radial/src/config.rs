//! Configuration types for Radial diagram rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are styled and how the output page is set up. All types implement
//! [`serde::Deserialize`] for loading from external sources; every field is
//! optional and falls back to its default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining style and page settings.
//! - [`StyleConfig`] - Label size, stroke color and width, arrowheads.
//! - [`PageConfig`] - Page size and margins of the output document.
//! - [`NodeStyle`] - The resolved subset of [`StyleConfig`] used while drawing nodes.
//!
//! # Example
//!
//! ```
//! # use radial::config::AppConfig;
//! let config: AppConfig = toml::from_str(
//!     r#"
//!     [style]
//!     font_size = 20
//!
//!     [page]
//!     margin = 72.0
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.style().font_size(), 20);
//! assert_eq!(config.page().margin(), 72.0);
//! assert_eq!(config.page().width(), 612.0);
//! ```

use serde::Deserialize;

use radial_core::{color::Color, geometry::Point};

/// Top-level application configuration combining style and page settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Page configuration section.
    #[serde(default)]
    page: PageConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified style and page configurations.
    pub fn new(style: StyleConfig, page: PageConfig) -> Self {
        Self { style, page }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the page configuration.
    pub fn page(&self) -> &PageConfig {
        &self.page
    }
}

/// Visual styling configuration for rendered diagrams.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Label font size in points.
    font_size: u16,

    /// Stroke color as a CSS color string. Black when unset.
    stroke_color: Option<String>,

    /// Stroke width in points.
    line_width: f32,

    /// Whether connectors end in a filled arrowhead.
    arrowheads: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_size: 16,
            stroke_color: None,
            line_width: 1.0,
            arrowheads: false,
        }
    }
}

impl StyleConfig {
    /// Returns the label font size in points
    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Returns the stroke width in points
    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    /// Returns whether connectors end in an arrowhead
    pub fn arrowheads(&self) -> bool {
        self.arrowheads
    }

    /// Returns the parsed stroke [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn stroke_color(&self) -> Result<Option<Color>, String> {
        self.stroke_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid stroke color in config: {err}"))
    }

    /// Returns the style applied while drawing nodes and connectors.
    pub fn node_style(&self) -> NodeStyle {
        NodeStyle::new(self.font_size, self.arrowheads)
    }
}

/// Size and margins of the output page, in points.
///
/// Defaults to US Letter (612 × 792) with 36 point margins. Diagram
/// coordinates are measured from the bottom-left corner of the area inside
/// the margins.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    width: f32,
    height: f32,
    margin: f32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            margin: 36.0,
        }
    }
}

impl PageConfig {
    pub fn new(width: f32, height: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Returns the page width
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the page height
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns the margin applied on every side
    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Maps a diagram-space point to top-left-origin page coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radial::config::PageConfig;
    /// # use radial_core::geometry::Point;
    /// let page = PageConfig::default();
    /// assert_eq!(page.to_page(Point::new(0.0, 0.0)), Point::new(36.0, 756.0));
    /// ```
    pub fn to_page(&self, point: Point) -> Point {
        Point::new(
            self.margin + point.x(),
            self.height - self.margin - point.y(),
        )
    }

    /// Checks that the page has room for content.
    ///
    /// # Errors
    ///
    /// Returns a message when a dimension is not a positive finite number or
    /// the margins leave no content area.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("page {name} must be positive, got {value}"));
            }
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(format!("page margin must not be negative, got {}", self.margin));
        }
        if 2.0 * self.margin >= self.width.min(self.height) {
            return Err(format!(
                "page margin {} leaves no content area on a {}x{} page",
                self.margin, self.width, self.height
            ));
        }
        Ok(())
    }
}

/// Style values consulted while drawing nodes and connectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStyle {
    font_size: u16,
    arrowheads: bool,
}

impl Default for NodeStyle {
    fn default() -> Self {
        StyleConfig::default().node_style()
    }
}

impl NodeStyle {
    pub fn new(font_size: u16, arrowheads: bool) -> Self {
        Self {
            font_size,
            arrowheads,
        }
    }

    /// Returns the label font size in points
    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Returns whether connectors end in an arrowhead
    pub fn arrowheads(&self) -> bool {
        self.arrowheads
    }
}
