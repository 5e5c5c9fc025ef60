//! Angles in radians and degrees.

// Like f64: worst case is a loss of precision.
#![allow(clippy::arithmetic_side_effects)]

use std::cmp::Ordering;
use std::f64::consts;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Trigonometric functions (+ abs) for angles.
pub trait Trigonometry {
    /// Absolute value.
    #[must_use]
    fn abs(&self) -> Self;
    /// Normalised into the equivalent range [-π,π).
    #[must_use]
    fn normalized(self) -> Self;
    /// Cosine
    #[must_use]
    fn cos(&self) -> f64;
    /// Sine
    #[must_use]
    fn sin(&self) -> f64;
    /// Tangent
    #[must_use]
    fn tan(&self) -> f64;
    /// Inverse cosine
    #[must_use]
    fn acos(input: f64) -> Self;
    /// Inverse sine
    #[must_use]
    fn asin(input: f64) -> Self;
    /// Inverse tangent
    #[must_use]
    fn atan(input: f64) -> Self;
}

/// τ = 2. * π, a full turn.
pub const TAU: Angle = Angle(consts::TAU);

/// π, half a turn.
pub const PI: Angle = Angle(consts::PI);

/// π / 2., a quarter turn.
pub const FRAC_PI_2: Angle = Angle(consts::FRAC_PI_2);

/// 0
pub const ZERO: Angle = Angle(0.);

/// Angle \[radians\]
///
/// The [`PartialEq`] and [`PartialOrd`] instances are derived and do NOT normalise the angles
/// before comparing them.
#[derive(Debug, PartialEq, Clone, Copy, PartialOrd, Default, Serialize, Deserialize)]
pub struct Angle(pub f64);

impl Angle {
    /// Four quadrant inverse tangent of `y / x`, see [`f64::atan2`].
    #[must_use]
    pub fn atan2(y: f64, x: f64) -> Self {
        Angle(y.atan2(x))
    }

    /// The angle in degrees.
    #[must_use]
    pub fn to_degrees(self) -> Degrees {
        Degrees::from(self)
    }
}

impl From<Degrees> for Angle {
    fn from(Degrees(degrees): Degrees) -> Angle {
        Angle(degrees.to_radians())
    }
}

impl PartialEq<Degrees> for Angle {
    fn eq(&self, other: &Degrees) -> bool {
        self.eq(&Angle::from(*other))
    }
}

impl PartialOrd<Degrees> for Angle {
    fn partial_cmp(&self, other: &Degrees) -> Option<Ordering> {
        self.partial_cmp(&Angle::from(*other))
    }
}

impl AddAssign<Angle> for Angle {
    fn add_assign(&mut self, Angle(other): Angle) {
        self.0 += other;
    }
}

impl AddAssign<Degrees> for Angle {
    fn add_assign(&mut self, rhs: Degrees) {
        *self += Angle::from(rhs);
    }
}

impl<T> Add<T> for Angle
where
    Angle: AddAssign<T>,
{
    type Output = Self;

    fn add(mut self, other: T) -> Angle {
        self += other;
        self
    }
}

impl SubAssign<Angle> for Angle {
    fn sub_assign(&mut self, Angle(other): Angle) {
        self.0 -= other;
    }
}

impl SubAssign<Degrees> for Angle {
    fn sub_assign(&mut self, rhs: Degrees) {
        *self -= Angle::from(rhs);
    }
}

impl<T> Sub<T> for Angle
where
    Angle: SubAssign<T>,
{
    type Output = Self;

    fn sub(mut self, other: T) -> Self::Output {
        self -= other;
        self
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Angle(-self.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Self;

    fn mul(self, other: f64) -> Self {
        Angle(self.0 * other)
    }
}

impl Mul<Angle> for f64 {
    type Output = Angle;

    fn mul(self, other: Angle) -> Angle {
        other * self
    }
}

impl Div<f64> for Angle {
    type Output = Self;

    fn div(self, other: f64) -> Self {
        // Like f64: at worst a NaN value is created.
        Angle(self.0 / other)
    }
}

impl Trigonometry for Angle {
    fn abs(&self) -> Angle {
        Angle(self.0.abs())
    }

    fn normalized(self) -> Self {
        Angle((self.0 + consts::PI).rem_euclid(consts::TAU) - consts::PI)
    }

    fn cos(&self) -> f64 {
        self.0.cos()
    }

    fn sin(&self) -> f64 {
        self.0.sin()
    }

    fn tan(&self) -> f64 {
        self.0.tan()
    }

    fn acos(input: f64) -> Self {
        Angle(input.acos())
    }

    fn asin(input: f64) -> Self {
        Angle(input.asin())
    }

    fn atan(input: f64) -> Self {
        Angle(input.atan())
    }
}

/// Angle \[degrees\].
///
/// The [`PartialEq`] and [`PartialOrd`] instances are derived and do NOT normalise the angles
/// before comparing them.
#[derive(Debug, PartialEq, Clone, Copy, PartialOrd, Serialize, Deserialize)]
pub struct Degrees(pub f64);

impl From<Angle> for Degrees {
    fn from(Angle(radians): Angle) -> Degrees {
        Degrees(radians.to_degrees())
    }
}

impl PartialEq<Angle> for Degrees {
    fn eq(&self, other: &Angle) -> bool {
        Angle::from(*self).eq(other)
    }
}

impl PartialOrd<Angle> for Degrees {
    fn partial_cmp(&self, other: &Angle) -> Option<Ordering> {
        Angle::from(*self).partial_cmp(other)
    }
}
