pub mod bounds_2d;

pub use bounds_2d::Bounds2;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Arithmetic mean of a set of points, x and y averaged independently.
///
/// Returns `None` for an empty slice. A single point is returned unchanged.
#[must_use]
pub fn centroid(points: &[Point2]) -> Option<Point2> {
    match points {
        [] => None,
        [only] => Some(*only),
        _ => {
            let (sum_x, sum_y) = points
                .iter()
                .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
            #[allow(clippy::cast_precision_loss)]
            let n = points.len() as f64;
            Some(Point2::new(sum_x / n, sum_y / n))
        }
    }
}
