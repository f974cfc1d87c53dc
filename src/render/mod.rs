//! Drawing a board onto a 2D surface.
//!
//! [`RenderBoard`] turns a topology (and optionally its node table) into
//! draw calls on any [`Canvas`]. [`RasterCanvas`] is the PNG-producing
//! implementation; [`BoardJob`] ties both to the built-in boards.

mod board;
pub(crate) mod font;
mod job;
mod nodes;
mod options;
mod raster;
pub mod style;

pub use board::{RenderBoard, RenderSummary};
pub use job::BoardJob;
pub use nodes::NodePositions;
pub use options::RenderOptions;
pub use raster::RasterCanvas;
pub use style::{Color, LegendEntry, Palette, ShapeStyle, Stroke, TextStyle};

use crate::error::Result;
use crate::math::{Bounds2, Point2};

/// A 2D drawing surface in world coordinates.
///
/// Implementations decide how world units map to output; the renderer only
/// relies on this capability set. Any error aborts the rendering pass.
pub trait Canvas {
    /// Fixes the visible world region. Called once, before any drawing.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot cover `bounds`.
    fn set_bounds(&mut self, bounds: Bounds2) -> Result<()>;

    /// Fills (and optionally outlines) a closed polygon.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be drawn on.
    fn fill_polygon(&mut self, points: &[Point2], style: &ShapeStyle) -> Result<()>;

    /// Fills (and optionally outlines) a circle of world radius `radius`.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be drawn on.
    fn fill_circle(&mut self, center: Point2, radius: f64, style: &ShapeStyle) -> Result<()>;

    /// Draws `text` centered on `position`.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be drawn on.
    fn text(&mut self, position: Point2, text: &str, style: &TextStyle) -> Result<()>;

    /// Draws an image title.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be drawn on.
    fn title(&mut self, text: &str) -> Result<()>;

    /// Draws a color key.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be drawn on.
    fn legend(&mut self, entries: &[LegendEntry]) -> Result<()>;

    /// Draws a block of summary text.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be drawn on.
    fn annotation(&mut self, lines: &[String]) -> Result<()>;

    /// Completes the drawing and exports it.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn finish(&mut self) -> Result<()>;
}
