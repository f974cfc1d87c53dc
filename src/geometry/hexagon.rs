//! Flat-top hexagon layout.
//!
//! Tile centers follow `x = size * (sqrt(3) * cx + sqrt(3)/2 * cz)`,
//! `y = size * 1.5 * cz`, and corners sit `size` away from the center at the
//! angles given by [`NodeDirection::angle`].

use super::NodeDirection;
use crate::coords::{CubeCoord, Direction};
use crate::math::{Point2, Vector2};

/// Pixel-space center of the tile at `coord` for hexagons of circumradius `size`.
#[must_use]
pub fn center_of(coord: CubeCoord, size: f64) -> Point2 {
    let sqrt3 = 3.0_f64.sqrt();
    let cx = f64::from(coord.x());
    let cz = f64::from(coord.z());
    Point2::new(size * (sqrt3 * cx + sqrt3 / 2.0 * cz), size * (1.5 * cz))
}

/// The six corners of the hexagon around `center`, in [`NodeDirection::ALL`] order.
#[must_use]
pub fn corners_of(center: Point2, size: f64) -> [Point2; 6] {
    NodeDirection::ALL.map(|dir| node_position(center, size, dir))
}

/// Position of a single corner.
#[must_use]
pub fn node_position(center: Point2, size: f64, direction: NodeDirection) -> Point2 {
    let angle = direction.angle();
    center + Vector2::new(angle.cos(), angle.sin()) * size
}

/// Corners a tile has in common with its neighbor in `direction`.
///
/// Each pair is `(own corner, neighbor's corner)`.
#[must_use]
pub fn shared_corners(direction: Direction) -> [(NodeDirection, NodeDirection); 2] {
    use NodeDirection::{North, NorthEast, NorthWest, South, SouthEast, SouthWest};
    match direction {
        Direction::East => [(NorthEast, NorthWest), (SouthEast, SouthWest)],
        Direction::SouthEast => [(South, NorthWest), (SouthEast, North)],
        Direction::SouthWest => [(South, NorthEast), (SouthWest, North)],
        Direction::West => [(NorthWest, NorthEast), (SouthWest, SouthEast)],
        Direction::NorthWest => [(North, SouthEast), (NorthWest, South)],
        Direction::NorthEast => [(North, SouthWest), (NorthEast, South)],
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::coords::coordinate_system;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-9;

    fn coord(x: i32, y: i32, z: i32) -> CubeCoord {
        CubeCoord::new(x, y, z).unwrap()
    }

    #[test]
    fn origin_maps_to_zero_for_any_size() {
        for size in [0.5, 1.0, 48.0, 1e6] {
            let c = center_of(CubeCoord::origin(), size);
            assert_eq!(c, Point2::origin());
        }
    }

    #[test]
    fn east_neighbor_at_unit_size() {
        let c = center_of(coord(1, -1, 0), 1.0);
        assert_relative_eq!(c.x, 3.0_f64.sqrt(), epsilon = TOL);
        assert_relative_eq!(c.y, 0.0, epsilon = TOL);
    }

    #[test]
    fn matches_closed_form() {
        let sqrt3 = 3.0_f64.sqrt();
        for c in coordinate_system(3).unwrap() {
            for size in [0.5, 0.6, 2.0] {
                let p = center_of(c, size);
                let cx = f64::from(c.x());
                let cz = f64::from(c.z());
                assert_relative_eq!(p.x, size * (sqrt3 * cx + sqrt3 / 2.0 * cz), epsilon = TOL);
                assert_relative_eq!(p.y, size * 1.5 * cz, epsilon = TOL);
            }
        }
    }

    #[test]
    fn south_east_step_moves_down() {
        let c = center_of(coord(0, -1, 1), 1.0);
        assert_relative_eq!(c.x, 3.0_f64.sqrt() / 2.0, epsilon = TOL);
        assert_relative_eq!(c.y, 1.5, epsilon = TOL);
    }

    #[test]
    fn six_corners_at_circumradius() {
        let center = Point2::new(3.0, -2.0);
        let corners = corners_of(center, 0.75);
        assert_eq!(corners.len(), 6);
        for p in corners {
            assert_relative_eq!((p - center).norm(), 0.75, epsilon = TOL);
        }
    }

    #[test]
    fn corners_run_clockwise_from_north() {
        let center = Point2::new(1.0, 1.0);
        let corners = corners_of(center, 1.0);

        // North is straight up (negative y), the rest follow at 60 degree steps.
        assert_relative_eq!(corners[0].x, 1.0, epsilon = TOL);
        assert_relative_eq!(corners[0].y, 0.0, epsilon = TOL);
        let mut prev = -std::f64::consts::FRAC_PI_2;
        for p in &corners[1..] {
            let d = p - center;
            let mut angle = d.y.atan2(d.x);
            while angle < prev {
                angle += std::f64::consts::TAU;
            }
            assert_relative_eq!(angle - prev, std::f64::consts::FRAC_PI_3, epsilon = TOL);
            prev = angle;
        }
    }

    #[test]
    fn node_position_agrees_with_corner_table() {
        let center = Point2::new(-0.5, 4.0);
        let corners = corners_of(center, 2.0);
        for dir in NodeDirection::ALL {
            assert_eq!(node_position(center, 2.0, dir), corners[dir.index()]);
        }
    }

    #[test]
    fn shared_corners_coincide() {
        let size = 1.0;
        let here = coord(0, 0, 0);
        let c = center_of(here, size);
        assert_eq!(here.neighbors().count(), 6);
        for (dir, neighbor) in here.neighbors() {
            let nc = center_of(neighbor, size);
            for (own, theirs) in shared_corners(dir) {
                let a = node_position(c, size, own);
                let b = node_position(nc, size, theirs);
                assert!((a - b).norm() < TOL, "{dir}: {own} vs {theirs}");
            }
        }
    }
}
