//! Vectors over [`f64`] with all functions of a 2-dimensional vector space.

// Like f64: worst case is a loss of precision or a NaN.
#![allow(clippy::arithmetic_side_effects)]

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::angle::{Angle, Trigonometry};

/// Vectors over [`f64`] with all functions of a 2-dimensional vector space.
///
/// Addition between vectors forms an abelian group
/// with the [`ZERO`](Vector::ZERO) vector as neutral element.
///
/// Multiplication with a scalar follows the distributive laws with vector addition.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    /// x coordinate of the vector.
    pub x: f64,
    /// y coordinate of the vector.
    pub y: f64,
}

impl Vector {
    /// Zero vector, the additive neutral element.
    pub const ZERO: Vector = Vector { x: 0., y: 0. };

    /// Unit vector in x direction.
    pub const EX: Vector = Vector { x: 1., y: 0. };

    /// Unit vector in y direction.
    pub const EY: Vector = Vector { x: 0., y: 1. };

    /// Create a new vector.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Vector { x, y }
    }

    /// Create a vector from its polar coordinates.
    ///
    /// Angles grow clockwise, since y coordinates grow downwards.
    #[must_use]
    pub fn polar(radius: f64, angle: Angle) -> Self {
        Vector { x: radius * angle.cos(), y: radius * angle.sin() }
    }

    /// Normalise the vector to length `1.`.
    ///
    /// Produces a [NaN](f64::NAN) value when applied to a vector with [length](Vector::length) `0`.
    pub fn normalize(&mut self) {
        *self /= self.length();
    }

    /// Unit vector with identical direction.
    ///
    /// Produces a [NaN](f64::NAN) value when applied to a vector with [length](Vector::length) `0`.
    #[must_use]
    pub fn unit(mut self) -> Self {
        self.normalize();
        self
    }

    /// Dot product of two vectors.
    ///
    /// `self.dot(other) == self.length() * other.length() * self.angle(other).cos()` holds.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// z component of the cross product of the two vectors, extended into 3 dimensions.
    ///
    /// Positive, if `other` is rotated clockwise (on screen) relative to `self`.
    #[must_use]
    pub fn cross(&self, other: &Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Length of a vector (euclidean metric).
    #[must_use]
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance between two points.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        (*other - *self).length()
    }

    /// Direction of the vector, measured from the x axis.
    #[must_use]
    pub fn direction(&self) -> Angle {
        Angle::atan2(self.y, self.x)
    }

    /// Angle between two vectors, in `[0, π]`.
    ///
    /// Produces a [NaN](f64::NAN) value if a vector with [length](Vector::length) `0` is involved.
    #[must_use]
    pub fn angle(&self, other: &Self) -> Angle {
        Angle::acos((self.dot(other) / (self.length() * other.length())).clamp(-1., 1.))
    }

    /// Rotate a vector clockwise by `angle`.
    pub fn rotate(&mut self, angle: Angle) {
        let Vector { x, y } = *self;
        let cos = angle.cos();
        let sin = angle.sin();
        self.x = cos * x - sin * y;
        self.y = sin * x + cos * y;
    }

    /// Create a vector rotated clockwise by `angle`.
    #[must_use]
    pub fn rotated(mut self, angle: Angle) -> Self {
        self.rotate(angle);
        self
    }
}

// A vector space is an (additive) abelian group
impl AddAssign<Self> for Vector {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl AddAssign<&Self> for Vector {
    fn add_assign(&mut self, rhs: &Self) {
        *self += *rhs;
    }
}

impl<T> Add<T> for Vector
where
    Vector: AddAssign<T>,
{
    type Output = Self;

    fn add(mut self, rhs: T) -> Self::Output {
        self += rhs;
        self
    }
}

impl SubAssign<Self> for Vector {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl SubAssign<&Self> for Vector {
    fn sub_assign(&mut self, rhs: &Self) {
        *self -= *rhs;
    }
}

impl<T> Sub<T> for Vector
where
    Vector: SubAssign<T>,
{
    type Output = Self;

    fn sub(mut self, rhs: T) -> Self::Output {
        self -= rhs;
        self
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Vector { x: -self.x, y: -self.y }
    }
}

// Scalar multiplication
impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Mul<f64> for Vector {
    type Output = Self;

    fn mul(mut self, rhs: f64) -> Self::Output {
        self *= rhs;
        self
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Self::Output {
        rhs * self
    }
}

impl DivAssign<f64> for Vector {
    fn div_assign(&mut self, rhs: f64) {
        // Like f64: at worst a NaN value is created.
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl Div<f64> for Vector {
    type Output = Self;

    fn div(mut self, rhs: f64) -> Self::Output {
        self /= rhs;
        self
    }
}

impl rstar::Point for Vector {
    type Scalar = f64;

    const DIMENSIONS: usize = 2;

    fn generate(mut generator: impl FnMut(usize) -> Self::Scalar) -> Self {
        Vector { x: generator(0), y: generator(1) }
    }

    fn nth(&self, index: usize) -> Self::Scalar {
        match index {
            0 => self.x,
            1 => self.y,
            _ => unreachable!(),
        }
    }

    fn nth_mut(&mut self, index: usize) -> &mut Self::Scalar {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => unreachable!(),
        }
    }
}
