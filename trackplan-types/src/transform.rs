//! 2D affine transformations (rotation, translation, scaling).

// Like f64: worst case is a loss of precision.
#![allow(clippy::arithmetic_side_effects)]

use serde::{Deserialize, Serialize};

use crate::{
    angle::{Angle, Trigonometry},
    vector::Vector,
};

/// An affine transformation `[x'; y'] = [[a, c], [b, d]] · [x; y] + [e; f]`.
///
/// All operations are immutable and return a new transformation.
/// Composition reads left-to-right in application order:
/// `translate(..).rotate(..)` applied to a point first rotates, then translates it.
#[allow(clippy::min_ident_chars)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    /// Scale/rotation coefficient of x for x'.
    pub a: f64,
    /// Skew/rotation coefficient of x for y'.
    pub b: f64,
    /// Skew/rotation coefficient of y for x'.
    pub c: f64,
    /// Scale/rotation coefficient of y for y'.
    pub d: f64,
    /// Translation in x direction.
    pub e: f64,
    /// Translation in y direction.
    pub f: f64,
}

impl Default for AffineTransform {
    fn default() -> Self {
        AffineTransform::identity()
    }
}

impl AffineTransform {
    /// The identity transformation, composing with it is a no-op.
    #[must_use]
    pub const fn identity() -> Self {
        AffineTransform { a: 1., b: 0., c: 0., d: 1., e: 0., f: 0. }
    }

    /// Post-compose `self` with `other`, i.e. the matrix product `self · other`.
    ///
    /// The result applies `other` first, then `self`.
    #[must_use]
    pub fn compose(self, other: AffineTransform) -> Self {
        let AffineTransform { a, b, c, d, e, f } = self;
        AffineTransform {
            a: a * other.a + c * other.b,
            b: b * other.a + d * other.b,
            c: a * other.c + c * other.d,
            d: b * other.c + d * other.d,
            e: a * other.e + c * other.f + e,
            f: b * other.e + d * other.f + f,
        }
    }

    /// Compose with a translation by `(tx, ty)`.
    #[must_use]
    pub fn translate(self, tx: f64, ty: f64) -> Self {
        self.compose(AffineTransform { a: 1., b: 0., c: 0., d: 1., e: tx, f: ty })
    }

    /// Compose with a translation by `offset`.
    #[must_use]
    pub fn translate_by(self, offset: Vector) -> Self {
        self.translate(offset.x, offset.y)
    }

    /// Compose with a scaling by `(sx, sy)`.
    #[must_use]
    pub fn scale(self, sx: f64, sy: f64) -> Self {
        self.compose(AffineTransform { a: sx, b: 0., c: 0., d: sy, e: 0., f: 0. })
    }

    /// Compose with a rotation around the origin.
    ///
    /// Accepts [`Angle`] as well as [`Degrees`](crate::angle::Degrees).
    #[must_use]
    pub fn rotate(self, angle: impl Into<Angle>) -> Self {
        let angle = angle.into();
        let cos = angle.cos();
        let sin = angle.sin();
        self.compose(AffineTransform { a: cos, b: sin, c: -sin, d: cos, e: 0., f: 0. })
    }

    /// Compose with a rotation around the origin, so that the x axis points along `(dx, dy)`.
    #[must_use]
    pub fn rotate_from_vector(self, dx: f64, dy: f64) -> Self {
        self.rotate(Angle::atan2(dy, dx))
    }

    /// Compose with a rotation around `pivot`.
    #[must_use]
    pub fn rotate_around(self, pivot: Vector, angle: impl Into<Angle>) -> Self {
        self.translate_by(pivot).rotate(angle).translate_by(-pivot)
    }

    /// The inverse transformation, if the transformation is invertible.
    #[must_use]
    pub fn inverse(self) -> Option<Self> {
        let AffineTransform { a, b, c, d, e, f } = self;
        let determinant = a * d - b * c;
        if determinant == 0. || !determinant.is_finite() {
            return None;
        }
        Some(AffineTransform {
            a: d / determinant,
            b: -b / determinant,
            c: -c / determinant,
            d: a / determinant,
            e: (c * f - d * e) / determinant,
            f: (b * e - a * f) / determinant,
        })
    }

    /// Apply the transformation to a point.
    #[must_use]
    pub fn apply_to_point(&self, point: Vector) -> Vector {
        let AffineTransform { a, b, c, d, e, f } = *self;
        Vector { x: point.x * a + point.y * c + e, y: point.x * b + point.y * d + f }
    }

    /// Apply the transformation to all present points.
    ///
    /// Absent points (e.g. the center of a straight path) stay absent.
    #[must_use]
    pub fn apply_to_array(&self, points: &[Option<Vector>]) -> Vec<Option<Vector>> {
        points.iter().map(|point| point.map(|point| self.apply_to_point(point))).collect()
    }

    /// The rotation part of the transformation, assuming it contains no scaling or skew.
    #[must_use]
    pub fn rotation(&self) -> Angle {
        Angle::atan2(self.b, self.a)
    }

    /// The translation part of the transformation, i.e. the image of the origin.
    #[must_use]
    pub fn translation(&self) -> Vector {
        Vector { x: self.e, y: self.f }
    }
}

#[cfg(test)]
mod test;
