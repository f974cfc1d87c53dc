use super::{Point2, Vector2};

/// An axis-aligned bounding box in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2 {
    /// Minimum corner.
    pub min: Point2,
    /// Maximum corner.
    pub max: Point2,
}

impl Bounds2 {
    /// Smallest box containing every point, or `None` if there are none.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point2>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(
            Self {
                min: first,
                max: first,
            },
            |b, p| Self {
                min: Point2::new(b.min.x.min(p.x), b.min.y.min(p.y)),
                max: Point2::new(b.max.x.max(p.x), b.max.y.max(p.y)),
            },
        ))
    }

    /// Grows the box by `padding` on every side.
    #[must_use]
    pub fn padded(&self, padding: f64) -> Self {
        let pad = Vector2::new(padding, padding);
        Self {
            min: self.min - pad,
            max: self.max + pad,
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        (self.min.x..=self.max.x).contains(&p.x) && (self.min.y..=self.max.y).contains(&p.y)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn empty_has_no_bounds() {
        let none: [Point2; 0] = [];
        assert!(Bounds2::from_points(&none).is_none());
    }

    #[test]
    fn single_point_is_degenerate() {
        let b = Bounds2::from_points(&[Point2::new(1.0, 2.0)]).unwrap();
        assert!(b.width().abs() < TOLERANCE);
        assert!(b.height().abs() < TOLERANCE);
    }

    #[test]
    fn spans_all_points() {
        let pts = [
            Point2::new(1.0, -2.0),
            Point2::new(-3.0, 4.0),
            Point2::new(0.5, 0.5),
        ];
        let b = Bounds2::from_points(&pts).unwrap();
        assert_eq!(b.min, Point2::new(-3.0, -2.0));
        assert_eq!(b.max, Point2::new(1.0, 4.0));
        assert!(pts.iter().all(|p| b.contains(p)));
    }

    #[test]
    fn padding_grows_each_side() {
        let b = Bounds2::from_points(&[Point2::new(0.0, 0.0), Point2::new(2.0, 1.0)])
            .unwrap()
            .padded(0.5);
        assert!((b.width() - 3.0).abs() < TOLERANCE);
        assert!((b.height() - 2.0).abs() < TOLERANCE);
        assert!((b.min.x + 0.5).abs() < TOLERANCE);
    }
}
