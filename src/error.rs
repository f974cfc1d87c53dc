use thiserror::Error;

use crate::coords::CubeCoord;

/// Top-level error type for board rendering.
#[derive(Debug, Error)]
pub enum BoardvizError {
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors related to hex grid coordinates.
#[derive(Debug, Error)]
pub enum CoordinateError {
    #[error("cube coordinate ({x}, {y}, {z}) does not sum to zero")]
    InvalidCoordinate { x: i32, y: i32, z: i32 },

    #[error("coordinate system of {layers} layers exceeds the limit of {max}")]
    TooManyLayers { layers: u32, max: u32 },
}

/// Errors related to board layouts.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("topology {0:?} has no tiles")]
    Empty(String),

    #[error("topology {topology:?} needs more than {max} node ids")]
    TooManyNodes { topology: String, max: u32 },

    #[error("port at {0} is not a port tile of the topology")]
    PortOffBoard(CubeCoord),
}

/// Errors raised while drawing or exporting an image.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid render options: {0}")]
    InvalidOptions(String),

    #[error("drawing bounds are empty")]
    EmptyBounds,

    #[error("image of {width}x{height} pixels exceeds the size limit")]
    ImageTooLarge { width: u32, height: u32 },

    #[error("canvas was drawn on before its bounds were set")]
    NotFramed,

    #[error("drawing backend failed: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RenderError {
    /// Wraps an error raised by the plotting backend.
    pub(crate) fn backend<E>(err: E) -> BoardvizError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(err)).into()
    }
}

/// Convenience type alias for results using [`BoardvizError`].
pub type Result<T> = std::result::Result<T, BoardvizError>;
