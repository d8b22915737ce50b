//! Radial - labeled circles connected in a directional tree.
//!
//! A diagram is a tree of circular nodes. Each child sits a fixed offset
//! away from its parent in one of four directions and is joined to it by a
//! straight connector trimmed to the two circles. Trees are built in code
//! through [`Node::attach`] or loaded from a TOML description, and drawn
//! onto any [`DrawingSurface`](draw::DrawingSurface): PDF, SVG, or a plain
//! listing of the primitive calls.

pub mod composition;
pub mod config;
pub mod export;
pub mod tree;

mod connector;
mod error;
mod node;

pub use radial_core::{color, draw, geometry};

pub use connector::Connector;
pub use error::RadialError;
pub use node::Node;

use std::path::Path;

use log::{debug, info, trace};

use config::AppConfig;
use draw::DrawingSurface;
use export::{Format, svg::SvgSurface};
use tree::TreeDescription;

/// Builder for parsing and rendering Radial diagrams.
///
/// # Examples
///
/// ```rust,no_run
/// use radial::{DiagramBuilder, config::AppConfig, export::Format};
///
/// let source = r#"
/// label = "base"
///
/// [[children]]
/// direction = "right"
/// label = "right"
/// "#;
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let root = builder.parse(source).expect("Failed to parse");
///
/// let svg = builder.render_svg(&root).expect("Failed to render");
/// builder
///     .render_to_file(&root, "diagram.pdf".as_ref(), Format::Pdf)
///     .expect("Failed to write");
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration the builder renders with
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a TOML tree description into its root node.
    ///
    /// # Errors
    ///
    /// Returns [`RadialError::Parse`] with the source attached when the
    /// description is malformed.
    pub fn parse(&self, source: &str) -> Result<Node, RadialError> {
        info!("Parsing tree description");

        let description = TreeDescription::from_toml(source)
            .map_err(|err| RadialError::new_parse_error(err, source))?;
        let root = description.into_node();

        debug!(nodes_count = root.node_count(); "Tree description parsed successfully");
        trace!(root:?; "Parsed tree");

        Ok(root)
    }

    /// Draw the tree rooted at `root` onto `surface` with the configured style.
    pub fn draw<S: DrawingSurface + ?Sized>(&self, root: &Node, surface: &mut S) {
        debug!(nodes_count = root.node_count(); "Drawing tree");
        root.draw_with_style(surface, &self.config.style().node_style());
    }

    /// Render the tree rooted at `root` to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`RadialError::Config`] if the configuration cannot describe a
    /// page.
    pub fn render_svg(&self, root: &Node) -> Result<String, RadialError> {
        let mut surface = SvgSurface::from_config(&self.config).map_err(RadialError::Config)?;
        self.draw(root, &mut surface);

        let svg = surface.finish_to_string();
        info!("SVG rendered successfully");
        Ok(svg)
    }

    /// Render the tree rooted at `root` to `path` in the given format.
    ///
    /// # Errors
    ///
    /// Returns [`RadialError::Config`] for an unusable configuration and
    /// [`RadialError::Export`] if the document cannot be produced or written.
    pub fn render_to_file(
        &self,
        root: &Node,
        path: &Path,
        format: Format,
    ) -> Result<(), RadialError> {
        info!(format = format.as_str(), path = path.display().to_string(); "Rendering diagram");

        let mut surface = format.surface(&self.config)?;
        self.draw(root, surface.as_mut());
        surface.render_to_file(path)?;

        info!("Diagram rendered successfully");
        Ok(())
    }
}
