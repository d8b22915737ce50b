//! The built-in flow diagram.
//!
//! [`flow_diagram`] assembles the seven-node tree rendered when no tree
//! description is supplied:
//!
//! ```text
//!                 top
//!                  │
//!       left ──── base ──── right
//!                  │
//!                bottom ──── right
//!                  │
//!                bottom
//! ```

use radial_core::geometry::{Direction, Point};

use crate::node::Node;

/// Default center of a root node.
pub const ROOT_CENTER: Point = Point::new(250.0, 450.0);

/// Builds the built-in flow diagram.
///
/// The root "base" sits at [`ROOT_CENTER`] with "left", "right", "top" and
/// "bottom" attached in that order. The "bottom" child in turn carries a
/// "bottom" and a "right" child.
pub fn flow_diagram() -> Node {
    let mut root = Node::root(ROOT_CENTER, "base");

    root.attach("left", Direction::Left);
    root.attach("right", Direction::Right);
    root.attach("top", Direction::Top);
    let bottom = root.attach("bottom", Direction::Bottom);

    bottom.attach("bottom", Direction::Bottom);
    bottom.attach("right", Direction::Right);

    root
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_diagram_centers() {
        let root = flow_diagram();

        let centers: Vec<_> = root
            .iter()
            .map(|node| (node.label(), node.center().to_pair()))
            .collect();

        assert_eq!(
            centers,
            [
                ("base", (250.0, 450.0)),
                ("left", (50.0, 450.0)),
                ("right", (450.0, 450.0)),
                ("top", (250.0, 650.0)),
                ("bottom", (250.0, 250.0)),
                ("bottom", (250.0, 50.0)),
                ("right", (450.0, 250.0)),
            ]
        );
    }

    #[test]
    fn test_flow_diagram_directions() {
        let root = flow_diagram();
        let directions: Vec<_> = root.iter().map(Node::direction).collect();

        assert_eq!(
            directions,
            [
                None,
                Some(Direction::Left),
                Some(Direction::Right),
                Some(Direction::Top),
                Some(Direction::Bottom),
                Some(Direction::Bottom),
                Some(Direction::Right),
            ]
        );
        assert_eq!(root.node_count(), 7);
    }
}
