//! A rectangle in layout coordinates. Mainly used as bounding box.

use rstar::primitives::Rectangle as RStarRectangle;
use serde::{Deserialize, Serialize};

use crate::{transform::AffineTransform, vector::Vector};

/// An axis aligned rectangle in layout coordinates. Mainly used as bounding box.
#[allow(missing_copy_implementations)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// One corner of the rectangle.
    pub corner_a: Vector,
    /// The opposite corner of the rectangle.
    pub corner_b: Vector,
}

impl Rectangle {
    /// Create the smallest rectangle containing all points.
    /// Fails for an empty iterator (first `next` returns `None`).
    pub fn from_points(mut points: impl Iterator<Item = Vector>) -> Option<Self> {
        let first = points.next()?;
        let (min, max) = points.fold((first, first), min_max);
        Some(Rectangle { corner_a: min, corner_b: max })
    }

    /// Create a rectangle containing both `self` and `other`.
    #[must_use]
    pub fn enclosing(self, other: &Self) -> Self {
        let (min, max) = [other.corner_a, other.corner_b]
            .into_iter()
            .fold((self.min_corner(), self.max_corner()), min_max);
        Rectangle { corner_a: min, corner_b: max }
    }

    /// Grow the rectangle by `margin` in every direction.
    #[must_use]
    // Like f64: worst case is a loss of precision.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn expanded(self, margin: f64) -> Self {
        let offset = Vector { x: margin, y: margin };
        Rectangle { corner_a: self.min_corner() - offset, corner_b: self.max_corner() + offset }
    }

    /// The axis aligned bounding box of the transformed rectangle.
    #[must_use]
    pub fn transformed(&self, transform: &AffineTransform) -> Self {
        let min = self.min_corner();
        let max = self.max_corner();
        let corners = [min, Vector { x: min.x, y: max.y }, max, Vector { x: max.x, y: min.y }];
        let (min, max) = corners
            .into_iter()
            .map(|corner| transform.apply_to_point(corner))
            .fold((transform.apply_to_point(min), transform.apply_to_point(min)), min_max);
        Rectangle { corner_a: min, corner_b: max }
    }

    /// Is the point inside the rectangle (boundary included)?
    #[must_use]
    pub fn contains(&self, point: Vector) -> bool {
        let min = self.min_corner();
        let max = self.max_corner();
        (min.x..=max.x).contains(&point.x) && (min.y..=max.y).contains(&point.y)
    }

    /// Size of the rectangle.
    #[must_use]
    pub fn size(&self) -> Vector {
        Vector {
            x: (self.corner_a.x - self.corner_b.x).abs(),
            y: (self.corner_a.y - self.corner_b.y).abs(),
        }
    }

    /// Corner with the minimal coordinates.
    #[must_use]
    pub fn min_corner(&self) -> Vector {
        Vector { x: self.corner_a.x.min(self.corner_b.x), y: self.corner_a.y.min(self.corner_b.y) }
    }

    /// Corner with the maximal coordinates.
    #[must_use]
    pub fn max_corner(&self) -> Vector {
        Vector { x: self.corner_a.x.max(self.corner_b.x), y: self.corner_a.y.max(self.corner_b.y) }
    }
}

/// Accumulate the component-wise minimum and maximum.
fn min_max((min, max): (Vector, Vector), value: Vector) -> (Vector, Vector) {
    (
        Vector { x: min.x.min(value.x), y: min.y.min(value.y) },
        Vector { x: max.x.max(value.x), y: max.y.max(value.y) },
    )
}

impl From<Rectangle> for RStarRectangle<Vector> {
    fn from(input: Rectangle) -> Self {
        RStarRectangle::from_corners(input.corner_a, input.corner_b)
    }
}
