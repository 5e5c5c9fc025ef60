//! Tests for affine transformations.

// Expected values are calculated with f64 geometry.
#![allow(clippy::arithmetic_side_effects)]

use trackplan_test_util::{expect_close, expect_eq, expect_true, init_test_logging, Expectation};

use crate::{
    angle::{Angle, Degrees, FRAC_PI_2},
    transform::AffineTransform,
    vector::Vector,
};

fn expect_point(actual: Vector, expected: Vector) -> Result<(), Expectation> {
    expect_close(actual.x, expected.x)?;
    expect_close(actual.y, expected.y)?;
    Ok(())
}

#[test]
fn identity() -> Result<(), Expectation> {
    init_test_logging();

    let identity = AffineTransform::identity();
    expect_eq(identity, AffineTransform { a: 1., b: 0., c: 0., d: 1., e: 0., f: 0. })?;
    for point in [Vector::new(0., 0.), Vector::new(-3.5, 12.25), Vector::new(1e6, -1e-6)] {
        expect_eq(identity.apply_to_point(point), point)?;
    }
    let transform = AffineTransform::identity().translate(3., 4.).rotate(Angle(0.7));
    expect_eq(identity.compose(transform), transform)?;
    expect_eq(transform.compose(identity), transform)?;
    Ok(())
}

#[test]
fn translate() -> Result<(), Expectation> {
    init_test_logging();

    let transform = AffineTransform::identity().translate(12., 13.);
    expect_eq(transform.apply_to_point(Vector::ZERO), Vector::new(12., 13.))?;
    Ok(())
}

#[test]
fn scale() -> Result<(), Expectation> {
    init_test_logging();

    let transform = AffineTransform::identity().scale(2., 3.);
    expect_eq(transform.apply_to_point(Vector::new(1., 1.)), Vector::new(2., 3.))?;
    Ok(())
}

#[test]
fn rotate() -> Result<(), Expectation> {
    init_test_logging();

    let angle = Angle::atan2(4., 3.) - Angle::atan2(3., 4.);
    let transform = AffineTransform::identity().rotate(angle);
    expect_point(transform.apply_to_point(Vector::new(4., 3.)), Vector::new(3., 4.))?;

    let degrees = AffineTransform::identity().rotate(Degrees(90.));
    expect_point(degrees.apply_to_point(Vector::EX), Vector::EY)?;

    let from_vector = AffineTransform::identity().rotate_from_vector(0., 2.);
    expect_point(from_vector.apply_to_point(Vector::EX), Vector::EY)?;
    expect_close(from_vector.rotation().0, FRAC_PI_2.0)?;
    Ok(())
}

#[test]
fn rotate_preserves_norm() -> Result<(), Expectation> {
    init_test_logging();

    let point = Vector::new(-7.5, 2.25);
    for step in 0..24 {
        let angle = Angle(f64::from(step) * 0.37 - 3.);
        let rotated = AffineTransform::identity().rotate(angle).apply_to_point(point);
        expect_close(rotated.length(), point.length())?;
    }
    Ok(())
}

#[test]
fn chained_operations() -> Result<(), Expectation> {
    init_test_logging();

    let angle = Angle::atan2(12., 5.) - Angle::atan2(5., 12.);
    let transform =
        AffineTransform::identity().translate(2., 12.).rotate(angle).translate(3., 4.);
    expect_point(transform.apply_to_point(Vector::new(9., 1.)), Vector::new(7., 24.))?;
    Ok(())
}

#[test]
fn rotate_around_pivot() -> Result<(), Expectation> {
    init_test_logging();

    let pivot = Vector::new(10., -5.);
    let transform = AffineTransform::identity().rotate_around(pivot, Angle(1.1));
    expect_point(transform.apply_to_point(pivot), pivot)?;
    expect_point(
        transform.apply_to_point(pivot + Vector::EX),
        pivot + Vector::EX.rotated(Angle(1.1)),
    )?;
    Ok(())
}

#[test]
fn inverse() -> Result<(), Expectation> {
    init_test_logging();

    let transform = AffineTransform::identity().translate(-4., 9.).rotate(Angle(2.3)).scale(2., 0.5);
    let inverse = transform.inverse();
    expect_true(inverse.is_some())?;
    if let Some(inverse) = inverse {
        let point = Vector::new(3., -8.);
        expect_point(inverse.apply_to_point(transform.apply_to_point(point)), point)?;
    }
    expect_eq(AffineTransform::identity().scale(0., 1.).inverse(), None)?;
    Ok(())
}

#[test]
fn apply_to_array_passes_absent_points() -> Result<(), Expectation> {
    init_test_logging();

    let transform = AffineTransform::identity().translate(1., 2.);
    let points = [Some(Vector::new(1., 1.)), None, Some(Vector::ZERO)];
    expect_eq(
        transform.apply_to_array(&points),
        vec![Some(Vector::new(2., 3.)), None, Some(Vector::new(1., 2.))],
    )?;
    Ok(())
}
