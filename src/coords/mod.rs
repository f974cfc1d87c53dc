mod cube;
mod direction;

pub use cube::CubeCoord;
pub use direction::Direction;

use crate::error::{CoordinateError, Result};

/// Largest ring count [`coordinate_system`] accepts.
pub const MAX_LAYERS: u32 = 1024;

/// Every coordinate within `layers` rings of the origin, origin included.
///
/// Ordered by x, then y. A board of `n` layers holds `1 + 3n(n+1)` tiles.
///
/// # Errors
///
/// Returns `CoordinateError::TooManyLayers` if `layers` exceeds [`MAX_LAYERS`].
pub fn coordinate_system(layers: u32) -> Result<Vec<CubeCoord>> {
    let too_many = || CoordinateError::TooManyLayers {
        layers,
        max: MAX_LAYERS,
    };
    if layers > MAX_LAYERS {
        return Err(too_many().into());
    }
    let n = i32::try_from(layers).map_err(|_| too_many())?;
    let mut coords = Vec::with_capacity(1 + 3 * layers as usize * (layers as usize + 1));
    for x in -n..=n {
        for y in (-n).max(-x - n)..=n.min(-x + n) {
            coords.push(CubeCoord::from_axes(x, y));
        }
    }
    Ok(coords)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::BoardvizError;
    use std::collections::HashSet;

    #[test]
    fn zero_layers_is_origin() {
        assert_eq!(coordinate_system(0).unwrap(), vec![CubeCoord::origin()]);
    }

    #[test]
    fn tile_counts_per_layer() {
        assert_eq!(coordinate_system(1).unwrap().len(), 7);
        assert_eq!(coordinate_system(2).unwrap().len(), 19);
        assert_eq!(coordinate_system(3).unwrap().len(), 37);
    }

    #[test]
    fn layer_count_is_capped() {
        let err = coordinate_system(MAX_LAYERS + 1).unwrap_err();
        assert!(matches!(
            err,
            BoardvizError::Coordinate(CoordinateError::TooManyLayers { max: MAX_LAYERS, .. })
        ));
        assert!(coordinate_system(u32::MAX).is_err());
    }

    #[test]
    fn layers_are_closed_under_distance() {
        let coords = coordinate_system(2).unwrap();
        let unique: HashSet<_> = coords.iter().copied().collect();
        assert_eq!(unique.len(), coords.len());
        assert!(coords.iter().all(|c| c.distance(CubeCoord::origin()) <= 2));
    }
}
