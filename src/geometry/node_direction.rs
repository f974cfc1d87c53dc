use std::f64::consts::{FRAC_PI_2, FRAC_PI_6};
use std::fmt;

/// A corner of a hexagon, named by compass heading from its center.
///
/// Variants are declared clockwise starting at North.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeDirection {
    North,
    NorthEast,
    SouthEast,
    South,
    SouthWest,
    NorthWest,
}

impl NodeDirection {
    /// All corners, clockwise from North.
    pub const ALL: [Self; 6] = [
        Self::North,
        Self::NorthEast,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::NorthWest,
    ];

    /// Angle of the corner from the hexagon center, in radians.
    ///
    /// Corner `k` in [`NodeDirection::ALL`] sits at `-pi/2 + k * pi/3`. With
    /// y pointing down the image, that runs clockwise from straight up.
    #[must_use]
    pub fn angle(self) -> f64 {
        match self {
            Self::North => -FRAC_PI_2,
            Self::NorthEast => -FRAC_PI_6,
            Self::SouthEast => FRAC_PI_6,
            Self::South => FRAC_PI_2,
            Self::SouthWest => 5.0 * FRAC_PI_6,
            Self::NorthWest => -5.0 * FRAC_PI_6,
        }
    }

    /// Position in clockwise order, North being 0.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for NodeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
