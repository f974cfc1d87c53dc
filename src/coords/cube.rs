use std::fmt;

use super::Direction;
use crate::error::{CoordinateError, Result};

/// A hex tile position in cube coordinates.
///
/// The three components always sum to zero; the constructor rejects anything
/// else, so every value in circulation is a valid tile position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CubeCoord {
    x: i32,
    y: i32,
    z: i32,
}

impl CubeCoord {
    /// Creates a coordinate.
    ///
    /// # Errors
    ///
    /// Returns `CoordinateError::InvalidCoordinate` if `x + y + z != 0`.
    pub fn new(x: i32, y: i32, z: i32) -> Result<Self> {
        if i64::from(x) + i64::from(y) + i64::from(z) != 0 {
            return Err(CoordinateError::InvalidCoordinate { x, y, z }.into());
        }
        Ok(Self { x, y, z })
    }

    /// The center tile `(0, 0, 0)`.
    #[must_use]
    pub fn origin() -> Self {
        Self { x: 0, y: 0, z: 0 }
    }

    // z is implied by the invariant.
    pub(crate) fn from_axes(x: i32, y: i32) -> Self {
        Self { x, y, z: -x - y }
    }

    #[must_use]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> i32 {
        self.y
    }

    #[must_use]
    pub fn z(&self) -> i32 {
        self.z
    }

    /// The adjacent tile in `direction`.
    ///
    /// Returns `None` when a component would leave the `i32` range.
    #[must_use]
    pub fn neighbor(self, direction: Direction) -> Option<Self> {
        let (dx, dy, dz) = direction.unit_vector();
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
            z: self.z.checked_add(dz)?,
        })
    }

    /// Every existing neighbor, in [`Direction::ALL`] order.
    pub fn neighbors(self) -> impl Iterator<Item = (Direction, Self)> {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| Some((dir, self.neighbor(dir)?)))
    }

    /// Number of tile steps between two coordinates.
    #[must_use]
    pub fn distance(self, other: Self) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        let dz = self.z.abs_diff(other.z);
        dx.max(dy).max(dz)
    }

    /// Axial `(q, r)` form, dropping the redundant y axis.
    #[must_use]
    pub fn to_axial(self) -> (i32, i32) {
        (self.x, self.z)
    }

    /// Even-row offset `(col, row)` form.
    #[must_use]
    pub fn to_offset(self) -> (i32, i32) {
        let col = self.x + (self.z - (self.z & 1)) / 2;
        (col, self.z)
    }

    /// Inverse of [`CubeCoord::to_offset`].
    ///
    /// Returns `None` if the cube form does not fit in `i32`.
    #[must_use]
    pub fn from_offset((col, row): (i32, i32)) -> Option<Self> {
        let (col, row) = (i64::from(col), i64::from(row));
        let x = col - (row - (row & 1)) / 2;
        Some(Self {
            x: i32::try_from(x).ok()?,
            y: i32::try_from(-x - row).ok()?,
            z: i32::try_from(row).ok()?,
        })
    }
}

impl Default for CubeCoord {
    fn default() -> Self {
        Self::origin()
    }
}

impl fmt::Display for CubeCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl TryFrom<(i32, i32, i32)> for CubeCoord {
    type Error = crate::error::BoardvizError;

    fn try_from((x, y, z): (i32, i32, i32)) -> Result<Self> {
        Self::new(x, y, z)
    }
}
