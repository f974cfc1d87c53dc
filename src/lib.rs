//! Static diagrams of hex-tile boards.
//!
//! Tiles are placed by cube coordinate on a flat-top hex layout
//! ([`geometry`]), drawn with their node (vertex) identifiers through a
//! [`render::Canvas`], and written to PNG by [`render::RasterCanvas`].

pub mod coords;
pub mod error;
pub mod geometry;
pub mod math;
pub mod render;
pub mod topology;

pub use error::{BoardvizError, Result};
