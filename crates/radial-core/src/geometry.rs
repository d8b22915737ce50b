//! Geometric primitives for radial diagram layout.
//!
//! This module provides the coordinate type and the direction table shared by
//! node placement and connector trimming.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Direction`] - A cardinal attachment slot (left, right, top, bottom)
//! - [`RADIUS`] - Radius of every node circle
//! - [`OFFSET`] - Center-to-center distance between a node and an attached child
//!
//! # Coordinate System
//!
//! Radial uses the coordinate system of a PDF page:
//!
//! ```text
//!    +Y
//!     ▲
//!     │
//!     │
//!     │
//!   (0,0) ────────► +X
//! ```
//!
//! - **Origin**: Bottom-left corner of the page content area
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases upward, so [`Direction::Top`] moves a child up the page
//!
//! All lengths are in points (1/72 inch).

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Radius of every node circle.
pub const RADIUS: f32 = 50.0;

/// Center-to-center spacing between a node and a child attached to it.
pub const OFFSET: f32 = 200.0;

// Circles of a parent and its child must not overlap.
const _: () = assert!(OFFSET > 2.0 * RADIUS);

/// A 2D point representing a position in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use radial_core::geometry::Point;
/// let mut p = Point::new(10.0, 20.0);
/// p.translate(Point::new(5.0, 5.0)).translate(Point::new(1.0, 0.0));
///
/// assert_eq!(p.to_pair(), (16.0, 25.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    /// Adds `delta` into this point in place and returns the point for chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radial_core::geometry::Point;
    /// let mut center = Point::new(250.0, 450.0);
    /// center.translate(Point::new(-200.0, 0.0));
    ///
    /// assert_eq!(center.x(), 50.0);
    /// assert_eq!(center.y(), 450.0);
    /// ```
    pub fn translate(&mut self, delta: Point) -> &mut Self {
        self.x += delta.x;
        self.y += delta.y;
        self
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns the coordinates as an `(x, y)` pair
    pub fn to_pair(self) -> (f32, f32) {
        (self.x, self.y)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// The cardinal slot at which a child is attached to its parent.
///
/// A root node has no direction; nodes carry an `Option<Direction>` and only
/// attached children hold `Some`.
///
/// Every piece of direction-dependent geometry derives from [`Direction::unit`],
/// so node placement and connector trimming cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Top,
    Bottom,
}

impl Direction {
    /// All directions in canonical attachment order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Top,
        Direction::Bottom,
    ];

    /// Returns the unit vector pointing from a parent towards a child attached
    /// in this direction.
    ///
    /// | Direction | Unit vector |
    /// |-----------|-------------|
    /// | Left      | (-1, 0)     |
    /// | Right     | (+1, 0)     |
    /// | Top       | (0, +1)     |
    /// | Bottom    | (0, -1)     |
    pub fn unit(self) -> Point {
        match self {
            Direction::Left => Point::new(-1.0, 0.0),
            Direction::Right => Point::new(1.0, 0.0),
            Direction::Top => Point::new(0.0, 1.0),
            Direction::Bottom => Point::new(0.0, -1.0),
        }
    }

    /// Returns the center-to-center offset of a child attached in this direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radial_core::geometry::{Direction, OFFSET};
    /// let offset = Direction::Bottom.offset();
    /// assert_eq!(offset.to_pair(), (0.0, -OFFSET));
    /// ```
    pub fn offset(self) -> Point {
        self.unit().scale(OFFSET)
    }

    /// Returns the lowercase name used in tree descriptions
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Top => "top",
            Direction::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            _ => Err(format!(
                "invalid direction `{s}`, valid values: left, right, top, bottom"
            )),
        }
    }
}
