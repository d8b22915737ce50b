//! Circular diagram nodes and the tree they form.
//!
//! A diagram is a tree of [`Node`]s grown from a single root. Children are
//! only ever created by their parent through [`Node::attach`], which places
//! the child at the parent's center plus the offset for the chosen
//! [`Direction`]. Once created, a node's center never changes.

use log::trace;

use radial_core::{
    draw::{DrawingSurface, TextOptions},
    geometry::{Direction, Point, RADIUS},
};

use crate::{config::NodeStyle, connector::Connector};

/// A labeled circle owning the nodes attached to it.
///
/// # Examples
///
/// ```
/// # use radial::Node;
/// # use radial_core::geometry::{Direction, Point};
/// let mut root = Node::root(Point::new(0.0, 0.0), "root");
/// let right = root.attach("right", Direction::Right);
/// right.attach("below", Direction::Bottom);
///
/// assert_eq!(root.children()[0].center(), Point::new(200.0, 0.0));
/// assert_eq!(root.children()[0].children()[0].center(), Point::new(200.0, -200.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    center: Point,
    label: String,
    direction: Option<Direction>,
    children: Vec<Node>,
}

impl Node {
    /// Creates a root node at `center`.
    pub fn root(center: Point, label: impl Into<String>) -> Self {
        Self {
            center,
            label: label.into(),
            direction: None,
            children: Vec::new(),
        }
    }

    /// Creates a child labeled `label` in the `direction` slot of this node and
    /// returns it, so that further nodes can be attached to it.
    ///
    /// The child is centered at this node's center plus
    /// [`Direction::offset`]. Children keep the order in which they were
    /// attached, and that order is the draw order.
    pub fn attach(&mut self, label: impl Into<String>, direction: Direction) -> &mut Node {
        let mut center = self.center;
        center.translate(direction.offset());

        let child = Node {
            center,
            label: label.into(),
            direction: Some(direction),
            children: Vec::new(),
        };
        trace!(label = child.label.as_str(), direction = direction.as_str(); "Attached node");

        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Returns the center of the node's circle
    pub fn center(&self) -> Point {
        self.center
    }

    /// Returns the node's label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the slot this node occupies on its parent, or `None` for a root
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Returns the attached children in attachment order
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_root(&self) -> bool {
        self.direction.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Counts this node and all of its descendants.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }

    /// Iterates over this node and its descendants in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// Draws the subtree rooted at this node with the default style.
    pub fn draw<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        self.draw_with_style(surface, &NodeStyle::default());
    }

    /// Draws the subtree rooted at this node.
    ///
    /// The node's circle and label come first. Then, for each child in
    /// attachment order, the connector to the child is drawn before the
    /// child's own subtree.
    pub fn draw_with_style<S: DrawingSurface + ?Sized>(&self, surface: &mut S, style: &NodeStyle) {
        surface.stroke_circle(self.center, RADIUS);

        let anchor = self.center.with_x(self.center.x() - RADIUS / 2.0);
        surface.draw_text(&self.label, &TextOptions::new(style.font_size(), anchor));

        for child in &self.children {
            if let Some(connector) = Connector::between(self, child) {
                connector.draw(surface, style);
            }
            child.draw_with_style(surface, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use radial_core::draw::{RecordingSurface, SurfaceCall};

    use super::*;

    #[test]
    fn test_root_has_no_direction() {
        let root = Node::root(Point::new(1.0, 2.0), "root");

        assert!(root.is_root());
        assert!(root.is_leaf());
        assert_eq!(root.direction(), None);
        assert_eq!(root.label(), "root");
        assert_eq!(root.node_count(), 1);
    }

    #[test]
    fn test_attach_offsets_child_once() {
        let mut root = Node::root(Point::new(250.0, 450.0), "base");
        let left = root.attach("left", Direction::Left);

        assert_approx_eq!(f32, left.center().x(), 50.0);
        assert_approx_eq!(f32, left.center().y(), 450.0);
        assert_eq!(left.direction(), Some(Direction::Left));
        assert!(!left.is_root());

        // The parent's own center is untouched.
        assert_eq!(root.center(), Point::new(250.0, 450.0));
    }

    #[test]
    fn test_attach_preserves_order() {
        let mut root = Node::root(Point::default(), "root");
        for direction in Direction::ALL {
            root.attach(direction.as_str(), direction);
        }

        let labels: Vec<_> = root.children().iter().map(Node::label).collect();
        assert_eq!(labels, ["left", "right", "top", "bottom"]);
        assert_eq!(root.node_count(), 5);
    }

    #[test]
    fn test_iter_is_pre_order() {
        let mut root = Node::root(Point::default(), "a");
        let b = root.attach("b", Direction::Left);
        b.attach("c", Direction::Top);
        root.attach("d", Direction::Right);

        let labels: Vec<_> = root.iter().map(Node::label).collect();
        assert_eq!(labels, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_leaf_draws_circle_and_text_only() {
        let leaf = Node::root(Point::new(10.0, 20.0), "leaf");
        let mut surface = RecordingSurface::new();
        leaf.draw(&mut surface);

        assert_eq!(
            surface.calls(),
            [
                SurfaceCall::StrokeCircle {
                    center: Point::new(10.0, 20.0),
                    radius: RADIUS,
                },
                SurfaceCall::DrawText {
                    text: "leaf".to_string(),
                    options: TextOptions::new(16, Point::new(-15.0, 20.0)),
                },
            ]
        );
        assert_eq!(surface.line_count(), 0);
    }

    #[test]
    fn test_draw_emits_connector_before_child() {
        let mut root = Node::root(Point::new(0.0, 0.0), "parent");
        root.attach("child", Direction::Right);

        let mut surface = RecordingSurface::new();
        root.draw(&mut surface);

        let calls = surface.calls();
        assert_eq!(calls.len(), 6);
        assert_eq!(calls[2], SurfaceCall::MoveTo(Point::new(50.0, 0.0)));
        assert_eq!(calls[3], SurfaceCall::LineTo(Point::new(150.0, 0.0)));
        assert_eq!(
            calls[4],
            SurfaceCall::StrokeCircle {
                center: Point::new(200.0, 0.0),
                radius: RADIUS,
            }
        );
    }

    #[test]
    fn test_draw_uses_configured_font_size() {
        let root = Node::root(Point::default(), "big");
        let style = NodeStyle::new(24, false);

        let mut surface = RecordingSurface::new();
        root.draw_with_style(&mut surface, &style);

        match &surface.calls()[1] {
            SurfaceCall::DrawText { options, .. } => assert_eq!(options.size(), 24),
            other => panic!("Expected text call, got {other:?}"),
        }
    }
}
