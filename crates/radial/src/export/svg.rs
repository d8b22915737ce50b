//! SVG page surface.

use std::{fs::File, io::Write, path::Path};

use log::{debug, error, info, warn};
use svg::{
    Document,
    node::element::{self as svg_element, path::Data},
};

use radial_core::{
    color::Color,
    draw::{self, DrawingSurface, TextOptions},
    geometry::Point,
};

use crate::config::{AppConfig, PageConfig};

/// Font stack for labels.
const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";

/// A [`DrawingSurface`] that builds a single SVG page.
///
/// Diagram coordinates are mapped onto the page through
/// [`PageConfig::to_page`]. Segments added with `move_to`/`line_to` collect
/// in a current path which is stroked by the next `stroke_circle`, or when
/// the document is finished.
#[derive(Debug)]
pub struct SvgSurface {
    page: PageConfig,
    stroke_color: Color,
    line_width: f32,
    elements: Vec<Box<dyn svg::Node>>,
    current_path: Option<Data>,
}

impl SvgSurface {
    /// Creates an empty page with the given geometry and stroke settings.
    pub fn new(page: PageConfig, stroke_color: Color, line_width: f32) -> Self {
        Self {
            page,
            stroke_color,
            line_width,
            elements: Vec::new(),
            current_path: None,
        }
    }

    /// Creates an empty page from application configuration.
    ///
    /// # Errors
    ///
    /// Returns a message if the configured stroke color is invalid or the
    /// page has no content area.
    pub fn from_config(config: &AppConfig) -> Result<Self, String> {
        config.page().validate()?;
        let stroke_color = config.style().stroke_color()?.unwrap_or_default();
        Ok(Self::new(
            *config.page(),
            stroke_color,
            config.style().line_width(),
        ))
    }

    /// Returns the number of elements placed on the page so far
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Finishes the page and returns it as an SVG document.
    ///
    /// The page contents move into the document, leaving the surface empty.
    pub fn finish(&mut self) -> Document {
        self.stroke_current_path();

        let (width, height) = (self.page.width(), self.page.height());
        let doc = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0.0, 0.0, width, height));

        std::mem::take(&mut self.elements)
            .into_iter()
            .fold(doc, |doc, element| doc.add(element))
    }

    /// Finishes the page and returns the SVG markup.
    pub fn finish_to_string(&mut self) -> String {
        self.finish().to_string()
    }

    fn page_point(&self, point: Point) -> (f32, f32) {
        self.page.to_page(point).to_pair()
    }

    fn stroke_current_path(&mut self) {
        let Some(data) = self.current_path.take() else {
            return;
        };

        let path = svg_element::Path::new()
            .set("d", data)
            .set("fill", "none")
            .set("stroke", &self.stroke_color)
            .set("stroke-width", self.line_width);
        self.elements.push(Box::new(path));
    }
}

impl DrawingSurface for SvgSurface {
    fn stroke_circle(&mut self, center: Point, radius: f32) {
        self.stroke_current_path();

        let (cx, cy) = self.page_point(center);
        let circle = svg_element::Circle::new()
            .set("cx", cx)
            .set("cy", cy)
            .set("r", radius)
            .set("fill", "none")
            .set("stroke", &self.stroke_color)
            .set("stroke-width", self.line_width);
        self.elements.push(Box::new(circle));
    }

    fn draw_text(&mut self, text: &str, options: &TextOptions) {
        let (x, y) = self.page_point(options.at());
        let text = svg_element::Text::new(text)
            .set("x", x)
            .set("y", y)
            .set("font-family", FONT_FAMILY)
            .set("font-size", options.size())
            .set("fill", &self.stroke_color);
        self.elements.push(Box::new(text));
    }

    fn move_to(&mut self, point: Point) {
        let target = self.page_point(point);
        let data = self.current_path.take().unwrap_or_else(Data::new);
        self.current_path = Some(data.move_to(target));
    }

    fn line_to(&mut self, point: Point) {
        let target = self.page_point(point);
        let data = match self.current_path.take() {
            Some(data) => data.line_to(target),
            None => {
                warn!("line_to without a current point, starting a new path");
                Data::new().move_to(target)
            }
        };
        self.current_path = Some(data);
    }

    fn fill_polygon(&mut self, points: &[Point]) {
        self.stroke_current_path();

        let points = points
            .iter()
            .map(|point| {
                let (x, y) = self.page_point(*point);
                format!("{x},{y}")
            })
            .collect::<Vec<_>>()
            .join(" ");

        let polygon = svg_element::Polygon::new()
            .set("points", points)
            .set("fill", &self.stroke_color)
            .set("stroke", "none");
        self.elements.push(Box::new(polygon));
    }

    fn render_to_file(&mut self, path: &Path) -> Result<(), draw::Error> {
        let elements_len = self.element_count();
        let doc = self.finish();
        debug!(elements_len; "SVG document rendered");

        let file_name = path.display().to_string();
        info!(file_name; "Creating SVG file");
        let mut file = match File::create(path) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name, err:err; "Failed to create SVG file");
                return Err(err.into());
            }
        };

        if let Err(err) = write!(file, "{doc}") {
            error!(file_name, err:err; "Failed to write SVG content");
            return Err(err.into());
        }

        Ok(())
    }
}
