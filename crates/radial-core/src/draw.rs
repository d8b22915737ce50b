//! Drawing-surface abstraction for diagram rendering.
//!
//! Diagram elements never produce output themselves. They compute coordinates
//! and issue primitive calls against a [`DrawingSurface`], which owns the
//! document being built and emits it once with
//! [`render_to_file`](DrawingSurface::render_to_file).
//!
//! # Overview
//!
//! - [`DrawingSurface`] - The primitive sink: circles, text, paths and polygons
//! - [`TextOptions`] - Font size and anchor point for a text call
//! - [`RecordingSurface`] - A surface that records calls as [`SurfaceCall`]s
//! - [`Error`] - Failures raised while emitting the document
//!
//! Path semantics follow PDF: [`move_to`](DrawingSurface::move_to) and
//! [`line_to`](DrawingSurface::line_to) extend the current path, and the path
//! is painted by the next stroking operation.

mod recording;

pub use recording::{RecordingSurface, SurfaceCall};

use std::{io, path::Path};

use thiserror::Error;

use crate::geometry::Point;

/// Errors raised by a surface while emitting its document.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Render error: {0}")]
    Render(String),
}

/// Placement and size of a text call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextOptions {
    size: u16,
    at: Point,
}

impl TextOptions {
    /// Creates text options anchored at `at`, the left end of the baseline.
    pub fn new(size: u16, at: Point) -> Self {
        Self { size, at }
    }

    /// Returns the font size in points
    pub fn size(&self) -> u16 {
        self.size
    }

    /// Returns the baseline anchor point
    pub fn at(&self) -> Point {
        self.at
    }
}

/// A sink for the vector primitives a diagram is made of.
///
/// Coordinates are in diagram space (see [`crate::geometry`]). Drawing calls
/// are infallible; a surface buffers them and reports failures only from
/// [`render_to_file`](DrawingSurface::render_to_file).
pub trait DrawingSurface {
    /// Strokes a circle of `radius` centered at `center`.
    fn stroke_circle(&mut self, center: Point, radius: f32);

    /// Draws `text` with its baseline starting at `options.at()`.
    fn draw_text(&mut self, text: &str, options: &TextOptions);

    /// Begins a new subpath at `point`.
    fn move_to(&mut self, point: Point);

    /// Extends the current subpath with a straight segment to `point`.
    fn line_to(&mut self, point: Point);

    /// Fills the closed polygon through `points`.
    fn fill_polygon(&mut self, points: &[Point]);

    /// Emits the finished document to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be written and
    /// [`Error::Render`] if the document cannot be produced.
    fn render_to_file(&mut self, path: &Path) -> Result<(), Error>;
}
