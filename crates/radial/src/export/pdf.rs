//! PDF page surface.
//!
//! The page is laid out as SVG by [`SvgSurface`] and converted to a
//! single-page PDF when it is emitted.

use std::{fs, path::Path, sync::Arc};

use log::{debug, error, info, warn};
use svg2pdf::usvg::{
    self,
    fontdb::{Database, Family, Query},
};

use radial_core::{
    draw::{self, DrawingSurface, TextOptions},
    geometry::Point,
};

use super::svg::SvgSurface;
use crate::config::AppConfig;

/// A [`DrawingSurface`] that emits a PDF document.
///
/// Labels are drawn in the installed face that the generic `sans-serif`
/// family resolves to. When no such face exists the first installed family
/// takes its place, and a page with labels but no fonts at all fails to
/// render instead of silently losing its text.
#[derive(Debug)]
pub struct PdfSurface {
    page: SvgSurface,
    has_text: bool,
}

impl PdfSurface {
    pub fn new(page: SvgSurface) -> Self {
        Self {
            page,
            has_text: false,
        }
    }

    /// Creates an empty page from application configuration.
    ///
    /// # Errors
    ///
    /// Returns a message if the configuration cannot describe a page.
    pub fn from_config(config: &AppConfig) -> Result<Self, String> {
        SvgSurface::from_config(config).map(Self::new)
    }

    /// Finishes the page and returns the encoded PDF, using the system fonts.
    ///
    /// # Errors
    ///
    /// Returns [`draw::Error::Render`] if the page cannot be converted or has
    /// labels but no font is installed.
    pub fn finish_to_bytes(&mut self) -> Result<Vec<u8>, draw::Error> {
        let mut fontdb = Database::new();
        fontdb.load_system_fonts();
        debug!(faces_len = fontdb.len(); "System fonts loaded");

        self.finish_with_fonts(fontdb)
    }

    /// Finishes the page and returns the encoded PDF, drawing labels with the
    /// faces in `fontdb`.
    ///
    /// # Errors
    ///
    /// Same as [`finish_to_bytes`](Self::finish_to_bytes).
    pub fn finish_with_fonts(&mut self, mut fontdb: Database) -> Result<Vec<u8>, draw::Error> {
        let has_text = std::mem::take(&mut self.has_text);
        let svg = self.page.finish_to_string();

        let mut options = usvg::Options::default();
        match resolve_label_family(&mut fontdb) {
            Some(family) => options.font_family = family,
            None if has_text => {
                return Err(draw::Error::Render(
                    "no installed font available to draw labels".to_string(),
                ));
            }
            None => {}
        }
        options.fontdb = Arc::new(fontdb);

        svg_to_pdf(&svg, &options)
    }
}

/// Returns the family labels are drawn in, pointing the generic `sans-serif`
/// family at an installed face when its default is missing.
fn resolve_label_family(fontdb: &mut Database) -> Option<String> {
    let query = Query {
        families: &[Family::SansSerif],
        ..Query::default()
    };
    if let Some(face) = fontdb.query(&query).and_then(|id| fontdb.face(id)) {
        return face.families.first().map(|(name, _)| name.clone());
    }

    let family = fontdb
        .faces()
        .find_map(|face| face.families.first().map(|(name, _)| name.clone()))?;
    warn!(family = family.as_str(); "No sans-serif font installed, drawing labels with fallback family");
    fontdb.set_sans_serif_family(family.clone());
    Some(family)
}

fn svg_to_pdf(svg: &str, options: &usvg::Options) -> Result<Vec<u8>, draw::Error> {
    let tree = usvg::Tree::from_str(svg, options)
        .map_err(|err| draw::Error::Render(format!("failed to parse page for PDF: {err}")))?;

    svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|err| draw::Error::Render(format!("failed to convert page to PDF: {err:?}")))
}

impl DrawingSurface for PdfSurface {
    fn stroke_circle(&mut self, center: Point, radius: f32) {
        self.page.stroke_circle(center, radius);
    }

    fn draw_text(&mut self, text: &str, options: &TextOptions) {
        self.has_text = true;
        self.page.draw_text(text, options);
    }

    fn move_to(&mut self, point: Point) {
        self.page.move_to(point);
    }

    fn line_to(&mut self, point: Point) {
        self.page.line_to(point);
    }

    fn fill_polygon(&mut self, points: &[Point]) {
        self.page.fill_polygon(points);
    }

    fn render_to_file(&mut self, path: &Path) -> Result<(), draw::Error> {
        let bytes = self.finish_to_bytes()?;
        debug!(bytes_len = bytes.len(); "PDF document rendered");

        let file_name = path.display().to_string();
        info!(file_name; "Writing PDF file");
        if let Err(err) = fs::write(path, &bytes) {
            error!(file_name, err:err; "Failed to write PDF file");
            return Err(err.into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use radial_core::color::Color;

    use super::*;
    use crate::{composition::flow_diagram, config::PageConfig};

    fn surface() -> PdfSurface {
        PdfSurface::new(SvgSurface::new(PageConfig::default(), Color::default(), 1.0))
    }

    fn contains(bytes: &[u8], needle: &[u8]) -> bool {
        bytes.windows(needle.len()).any(|window| window == needle)
    }

    fn system_fonts() -> Database {
        let mut fontdb = Database::new();
        fontdb.load_system_fonts();
        fontdb
    }

    #[test]
    fn test_pdf_header() {
        let mut surface = surface();
        surface.stroke_circle(Point::new(250.0, 450.0), 50.0);
        surface.move_to(Point::new(200.0, 450.0));
        surface.line_to(Point::new(100.0, 450.0));
        surface.stroke_circle(Point::new(50.0, 450.0), 50.0);

        let bytes = surface.finish_to_bytes().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_labels_embed_a_font() {
        let fontdb = system_fonts();
        let has_fonts = !fontdb.is_empty();

        let mut surface = surface();
        flow_diagram().draw(&mut surface);
        let result = surface.finish_with_fonts(fontdb);

        if has_fonts {
            let bytes = result.unwrap();
            assert!(contains(&bytes, b"/Font"), "labels were dropped from the PDF");
        } else {
            assert!(matches!(result, Err(draw::Error::Render(_))));
        }
    }

    #[test]
    fn test_labels_without_fonts_fail() {
        let mut surface = surface();
        surface.stroke_circle(Point::new(0.0, 0.0), 50.0);
        surface.draw_text("base", &TextOptions::new(16, Point::new(-25.0, 0.0)));

        let err = surface.finish_with_fonts(Database::new()).unwrap_err();
        match err {
            draw::Error::Render(message) => assert!(message.contains("font")),
            other => panic!("expected a render error, got {other:?}"),
        }
    }

    #[test]
    fn test_page_without_labels_needs_no_fonts() {
        let mut surface = surface();
        surface.stroke_circle(Point::new(0.0, 0.0), 50.0);

        let bytes = surface.finish_with_fonts(Database::new()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_sans_serif_falls_back_to_installed_family() {
        let mut fontdb = system_fonts();
        let Some(first) = fontdb
            .faces()
            .find_map(|face| face.families.first().map(|(name, _)| name.clone()))
        else {
            return;
        };
        fontdb.set_sans_serif_family("No Such Family For Labels");

        assert_eq!(resolve_label_family(&mut fontdb), Some(first));
        assert_eq!(resolve_label_family(&mut Database::new()), None);
    }

    #[test]
    fn test_render_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flow_diagram.pdf");

        let mut surface = surface();
        surface.stroke_circle(Point::new(0.0, 0.0), 50.0);
        surface.render_to_file(&path).unwrap();

        let content = fs::read(&path).unwrap();
        assert!(content.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.pdf");

        let err = surface().render_to_file(&path).unwrap_err();
        assert!(matches!(err, draw::Error::Io(_)));
    }
}
