//! A [`DrawingSurface`] that records every primitive call.

use std::{fmt, fs, path::Path};

use log::{debug, info};

use crate::{
    draw::{DrawingSurface, Error, TextOptions},
    geometry::Point,
};

/// One primitive call issued against a surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    StrokeCircle { center: Point, radius: f32 },
    DrawText { text: String, options: TextOptions },
    MoveTo(Point),
    LineTo(Point),
    FillPolygon(Vec<Point>),
}

impl fmt::Display for SurfaceCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StrokeCircle { center, radius } => {
                write!(f, "stroke_circle {} {} {radius}", center.x(), center.y())
            }
            Self::DrawText { text, options } => write!(
                f,
                "draw_text {text:?} size={} at={} {}",
                options.size(),
                options.at().x(),
                options.at().y()
            ),
            Self::MoveTo(point) => write!(f, "move_to {} {}", point.x(), point.y()),
            Self::LineTo(point) => write!(f, "line_to {} {}", point.x(), point.y()),
            Self::FillPolygon(points) => {
                write!(f, "fill_polygon")?;
                for point in points {
                    write!(f, " {},{}", point.x(), point.y())?;
                }
                Ok(())
            }
        }
    }
}

/// Records calls in issue order.
///
/// Rendering writes one call per line, which makes the draw order of a
/// diagram easy to inspect and diff.
///
/// # Examples
///
/// ```
/// # use radial_core::draw::{DrawingSurface, RecordingSurface, SurfaceCall};
/// # use radial_core::geometry::Point;
/// let mut surface = RecordingSurface::new();
/// surface.move_to(Point::new(0.0, 0.0));
/// surface.line_to(Point::new(10.0, 0.0));
///
/// assert_eq!(surface.calls().len(), 2);
/// assert_eq!(surface.calls()[1], SurfaceCall::LineTo(Point::new(10.0, 0.0)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded calls in issue order
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Consumes the surface and returns its calls
    pub fn into_calls(self) -> Vec<SurfaceCall> {
        self.calls
    }

    /// Number of circles stroked so far
    pub fn circle_count(&self) -> usize {
        self.count(|call| matches!(call, SurfaceCall::StrokeCircle { .. }))
    }

    /// Number of text calls so far
    pub fn text_count(&self) -> usize {
        self.count(|call| matches!(call, SurfaceCall::DrawText { .. }))
    }

    /// Number of straight segments drawn so far
    pub fn line_count(&self) -> usize {
        self.count(|call| matches!(call, SurfaceCall::LineTo(_)))
    }

    /// Renders all calls as text, one per line.
    pub fn to_listing(&self) -> String {
        self.calls.iter().map(|call| format!("{call}\n")).collect()
    }

    fn count(&self, predicate: impl Fn(&SurfaceCall) -> bool) -> usize {
        self.calls.iter().filter(|call| predicate(call)).count()
    }
}

impl DrawingSurface for RecordingSurface {
    fn stroke_circle(&mut self, center: Point, radius: f32) {
        self.calls.push(SurfaceCall::StrokeCircle { center, radius });
    }

    fn draw_text(&mut self, text: &str, options: &TextOptions) {
        self.calls.push(SurfaceCall::DrawText {
            text: text.to_string(),
            options: *options,
        });
    }

    fn move_to(&mut self, point: Point) {
        self.calls.push(SurfaceCall::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.calls.push(SurfaceCall::LineTo(point));
    }

    fn fill_polygon(&mut self, points: &[Point]) {
        self.calls.push(SurfaceCall::FillPolygon(points.to_vec()));
    }

    fn render_to_file(&mut self, path: &Path) -> Result<(), Error> {
        info!(path = path.display().to_string(), calls = self.calls.len(); "Writing call listing");
        fs::write(path, self.to_listing())?;
        debug!("Call listing written");
        Ok(())
    }
}
