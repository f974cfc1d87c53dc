use std::fmt;

/// The six edge-adjacent neighbors of a hex tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    East,
    SouthEast,
    SouthWest,
    West,
    NorthWest,
    NorthEast,
}

impl Direction {
    /// All directions, clockwise from East.
    pub const ALL: [Self; 6] = [
        Self::East,
        Self::SouthEast,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
        Self::NorthEast,
    ];

    /// Cube offset `(dx, dy, dz)` to the neighbor in this direction.
    #[must_use]
    pub fn unit_vector(self) -> (i32, i32, i32) {
        match self {
            Self::East => (1, -1, 0),
            Self::SouthEast => (0, -1, 1),
            Self::SouthWest => (-1, 0, 1),
            Self::West => (-1, 1, 0),
            Self::NorthWest => (0, 1, -1),
            Self::NorthEast => (1, 0, -1),
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::East => Self::West,
            Self::SouthEast => Self::NorthWest,
            Self::SouthWest => Self::NorthEast,
            Self::West => Self::East,
            Self::NorthWest => Self::SouthEast,
            Self::NorthEast => Self::SouthWest,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_vectors_sum_to_zero() {
        for dir in Direction::ALL {
            let (x, y, z) = dir.unit_vector();
            assert_eq!(x + y + z, 0, "{dir}");
        }
    }

    #[test]
    fn opposites_cancel() {
        for dir in Direction::ALL {
            let (ax, ay, az) = dir.unit_vector();
            let (bx, by, bz) = dir.opposite().unit_vector();
            assert_eq!((ax + bx, ay + by, az + bz), (0, 0, 0));
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }
}
