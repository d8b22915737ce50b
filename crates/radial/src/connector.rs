//! Straight connectors between a node and one of its children.
//!
//! A connector runs from the edge of the parent's circle to the edge of the
//! child's circle. Both ends are trimmed by [`RADIUS`] along the unit vector
//! of the child's [`Direction`]:
//!
//! | Child direction | Start adjustment | End adjustment |
//! |-----------------|------------------|----------------|
//! | left            | (-R, 0)          | (+R, 0)        |
//! | right           | (+R, 0)          | (-R, 0)        |
//! | top             | (0, +R)          | (0, -R)        |
//! | bottom          | (0, -R)          | (0, +R)        |

use radial_core::{
    draw::DrawingSurface,
    geometry::{Direction, Point, RADIUS},
};

use crate::{config::NodeStyle, node::Node};

/// Length of an arrowhead from base to tip.
const ARROWHEAD_LENGTH: f32 = 12.0;

/// Half the width of an arrowhead's base.
const ARROWHEAD_HALF_WIDTH: f32 = 5.0;

/// A trimmed line segment from a parent circle to a child circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    from: Point,
    to: Point,
    direction: Direction,
}

impl Connector {
    /// Creates a connector between two centers, entering the target from the
    /// side given by `direction`.
    pub fn new(from: Point, to: Point, direction: Direction) -> Self {
        Self {
            from,
            to,
            direction,
        }
    }

    /// Creates the connector from `from` to its child `to`.
    ///
    /// Returns `None` when `to` is a root, since a root has no side to enter.
    pub fn between(from: &Node, to: &Node) -> Option<Self> {
        to.direction()
            .map(|direction| Self::new(from.center(), to.center(), direction))
    }

    /// Returns the side the connector enters its target from
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the start point on the parent's circle.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radial::Connector;
    /// # use radial_core::geometry::{Direction, Point};
    /// let connector = Connector::new(Point::new(0.0, 0.0), Point::new(200.0, 0.0), Direction::Right);
    /// assert_eq!(connector.start(), Point::new(50.0, 0.0));
    /// assert_eq!(connector.end(), Point::new(150.0, 0.0));
    /// ```
    pub fn start(&self) -> Point {
        self.from.add_point(self.direction.unit().scale(RADIUS))
    }

    /// Returns the end point on the child's circle
    pub fn end(&self) -> Point {
        self.to.sub_point(self.direction.unit().scale(RADIUS))
    }

    /// Returns the arrowhead triangle at the end point, tip first.
    pub fn arrowhead(&self) -> [Point; 3] {
        let unit = self.direction.unit();
        let tip = self.end();
        let base = tip.sub_point(unit.scale(ARROWHEAD_LENGTH));
        let normal = Point::new(-unit.y(), unit.x()).scale(ARROWHEAD_HALF_WIDTH);

        [tip, base.add_point(normal), base.sub_point(normal)]
    }

    /// Draws the connector as a single straight segment.
    ///
    /// When the style enables arrowheads, a filled triangle is added at the
    /// end point.
    pub fn draw<S: DrawingSurface + ?Sized>(&self, surface: &mut S, style: &NodeStyle) {
        surface.move_to(self.start());
        surface.line_to(self.end());

        if style.arrowheads() {
            surface.fill_polygon(&self.arrowhead());
        }
    }
}
