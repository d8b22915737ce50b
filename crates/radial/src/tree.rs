//! TOML tree descriptions.
//!
//! A description names the root and nests children under `children` tables,
//! each with the direction it is attached in:
//!
//! ```toml
//! label = "base"
//! center = [250.0, 450.0]
//!
//! [[children]]
//! direction = "bottom"
//! label = "bottom"
//!
//! [[children.children]]
//! direction = "right"
//! label = "right"
//! ```
//!
//! `center` is optional and defaults to
//! [`ROOT_CENTER`](crate::composition::ROOT_CENTER). Children never carry a
//! center: their position follows from the parent and the direction.

use log::debug;
use serde::Deserialize;

use radial_core::geometry::{Direction, Point};

use crate::{composition::ROOT_CENTER, node::Node};

/// The root of a tree description.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TreeDescription {
    label: String,
    #[serde(default)]
    center: Option<[f32; 2]>,
    #[serde(default)]
    children: Vec<ChildDescription>,
}

/// A node attached to its parent in `direction`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChildDescription {
    direction: Direction,
    label: String,
    #[serde(default)]
    children: Vec<ChildDescription>,
}

impl TreeDescription {
    /// Parses a description from TOML source.
    ///
    /// # Errors
    ///
    /// Returns the TOML error for malformed input, unknown fields or an
    /// unknown direction name.
    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Builds the node tree this description describes.
    pub fn into_node(self) -> Node {
        let center = self
            .center
            .map_or(ROOT_CENTER, |[x, y]| Point::new(x, y));
        let mut root = Node::root(center, self.label);
        attach_all(&mut root, self.children);

        debug!(nodes_count = root.node_count(); "Tree built from description");
        root
    }
}

fn attach_all(parent: &mut Node, children: Vec<ChildDescription>) {
    for child in children {
        let node = parent.attach(child.label, child.direction);
        attach_all(node, child.children);
    }
}
