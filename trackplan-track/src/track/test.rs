//! Tests for the track factories.

// Expected values are calculated with f64 geometry.
#![allow(clippy::arithmetic_side_effects)]

use nonempty::nonempty;

use trackplan_test_util::{
    expect_close, expect_eq, expect_true, init_test_logging, ExpectTrue, Expectation,
};
use trackplan_types::{
    angle::{Angle, Degrees, Trigonometry},
    vector::Vector,
};

use crate::{
    path::{Circle, TrackPath},
    scale::HALF_SCALE_WIDTH,
    track::{PieceKind, Side, Track, TrackType},
};

fn expect_point(actual: Vector, x: f64, y: f64) -> Result<(), Expectation> {
    expect_close(actual.x, x)?;
    expect_close(actual.y, y)?;
    Ok(())
}

fn expect_same_direction(a: Angle, b: Angle) -> Result<(), Expectation> {
    expect_close((a - b).normalized().abs().0, 0.)?;
    Ok(())
}

fn circle_of(path: &TrackPath) -> Result<Circle, Expectation> {
    Ok(path.curvature().ok_or(ExpectTrue)?)
}

#[test]
fn straight_track() -> Result<(), Expectation> {
    init_test_logging();

    let track = Track::straight(80.);
    expect_eq(track.kind(), PieceKind::Straight)?;
    expect_eq(track.track_type(), TrackType::Straight)?;
    expect_eq(track.paths().len(), 1)?;
    expect_point(track.paths().head.start, -40., 0.)?;
    expect_point(track.paths().head.end, 40., 0.)?;
    let corners: Vec<Vector> = track.outline().points().collect();
    expect_eq(
        corners,
        vec![
            Vector::new(-40., -HALF_SCALE_WIDTH),
            Vector::new(40., -HALF_SCALE_WIDTH),
            Vector::new(40., HALF_SCALE_WIDTH),
            Vector::new(-40., HALF_SCALE_WIDTH),
        ],
    )?;
    Ok(())
}

#[test]
fn curve_track() -> Result<(), Expectation> {
    init_test_logging();

    let track = Track::curve(200., Angle::from(Degrees(22.5)));
    expect_eq(track.track_type(), TrackType::Curve)?;
    expect_eq(track.paths().len(), 1)?;
    expect_close(track.paths().head.sweep().0, Angle::from(Degrees(22.5)).0)?;
    expect_eq(track.outline().commands().len(), 5)?;
    Ok(())
}

#[test]
fn left_turnout() -> Result<(), Expectation> {
    init_test_logging();

    let track = Track::turnout(80., 5., Side::Left);
    expect_eq(track.kind(), PieceKind::LeftTurnout)?;
    expect_eq(track.track_type(), TrackType::Turnout)?;
    let main = track.paths().head;
    let branch = track.paths().tail.first().copied().ok_or(ExpectTrue)?;
    expect_point(main.start, -40., 0.)?;
    expect_point(main.end, 40., 0.)?;
    expect_point(branch.start, -38.446, 15.689)?;
    expect_point(branch.end, 40., 0.)?;
    let Circle { center, radius } = circle_of(&branch)?;
    expect_point(center, 40., 203.961)?;
    expect_close(radius, 203.961)?;
    // both routes leave the frog in the same direction
    expect_same_direction(main.angle_at_point(main.end), branch.angle_at_point(branch.end))?;
    Ok(())
}

#[test]
fn right_turnout() -> Result<(), Expectation> {
    init_test_logging();

    let track = Track::turnout(80., 5., Side::Right);
    expect_eq(track.kind(), PieceKind::RightTurnout)?;
    let main = track.paths().head;
    let branch = track.paths().tail.first().copied().ok_or(ExpectTrue)?;
    expect_point(branch.start, -40., 0.)?;
    expect_point(branch.end, 38.446, 15.689)?;
    let Circle { center, radius } = circle_of(&branch)?;
    expect_point(center, -40., 203.961)?;
    expect_close(radius, 203.961)?;
    expect_close(branch.sweep().0, 2. * Angle::atan2(1., 5.).0)?;
    expect_same_direction(main.angle_at_point(main.start), branch.angle_at_point(branch.start))?;
    Ok(())
}

#[test]
fn crossing() -> Result<(), Expectation> {
    init_test_logging();

    let angle = Angle::from(Degrees(30.));
    let track = Track::crossing(60., angle);
    expect_eq(track.track_type(), TrackType::Crossing)?;
    expect_eq(track.paths().len(), 2)?;
    let mut directions = Vec::new();
    for path in track.paths() {
        let midpoint = (path.start + path.end) / 2.;
        expect_point(midpoint, 0., 0.)?;
        expect_close(path.length(), 60.)?;
        directions.push(path.angle_at_point(path.start).0);
    }
    expect_close(directions.first().copied().unwrap_or_default(), angle.0 / 2.)?;
    expect_close(directions.get(1).copied().unwrap_or_default(), -angle.0 / 2.)?;
    Ok(())
}

#[test]
fn curve_turnout() -> Result<(), Expectation> {
    init_test_logging();

    let sweep = Angle::from(Degrees(15.));
    for (side, kind) in
        [(Side::Left, PieceKind::LeftCurvedTurnout), (Side::Right, PieceKind::RightCurvedTurnout)]
    {
        let track = Track::curve_turnout(200., 150., sweep, side);
        expect_eq(track.kind(), kind)?;
        let main = track.paths().head;
        let branch =
            track.paths().tail.first().copied().ok_or(ExpectTrue)?;
        expect_close(circle_of(&main)?.radius, 200.)?;
        expect_close(circle_of(&branch)?.radius, 150.)?;
        expect_close(branch.sweep().0, sweep.0 * 2.)?;
        let (main_frog, branch_frog) = match side {
            Side::Left => (main.end, branch.end),
            Side::Right => (main.start, branch.start),
        };
        expect_point(branch_frog, main_frog.x, main_frog.y)?;
        expect_same_direction(main.angle_at_point(main_frog), branch.angle_at_point(branch_frog))?;
    }
    Ok(())
}

#[test]
fn wye_turnout() -> Result<(), Expectation> {
    init_test_logging();

    let track = Track::wye_turnout(80., 4.);
    expect_eq(track.kind(), PieceKind::WyeTurnout)?;
    expect_eq(track.track_type(), TrackType::Turnout)?;
    let right = track.paths().head;
    let left = track.paths().tail.first().copied().ok_or(ExpectTrue)?;
    expect_point(right.start, -40., 0.)?;
    expect_point(left.end, -40., 0.)?;
    // same tangent at the common point
    expect_close(right.angle_at_point(right.start).0, 0.)?;
    expect_close(left.angle_at_point(left.end).normalized().0, 0.)?;
    // mirrored far ends
    expect_close(right.end.x, left.start.x)?;
    expect_close(right.end.y, -left.start.y)?;
    expect_true(right.end.y.abs() > 1.)?;
    // half the frog angle of a single turnout
    expect_close(right.sweep().0, Angle::atan2(1., 4.).0)?;
    expect_close(left.sweep().0, Angle::atan2(1., 4.).0)?;
    Ok(())
}

#[test]
fn set_paths_regenerates_outline() -> Result<(), Expectation> {
    init_test_logging();

    let mut track = Track::straight(80.).with_label("yard lead");
    track.set_paths(PieceKind::Curve, nonempty![TrackPath::curve(100., Angle(0.5))]);
    expect_eq(track.label().to_owned(), String::from("yard lead"))?;
    expect_eq(track.track_type(), TrackType::Curve)?;
    expect_eq(track.outline().clone(), TrackPath::curve(100., Angle(0.5)).outline())?;

    track.replace_geometry(Track::turnout(80., 6., Side::Right));
    expect_eq(track.label().to_owned(), String::from("yard lead"))?;
    expect_eq(track.paths().len(), 2)?;
    expect_eq(track.outline().clone(), Track::turnout(80., 6., Side::Right).outline().clone())?;
    Ok(())
}

#[test]
fn connections_follow_path_order() -> Result<(), Expectation> {
    init_test_logging();

    let track = Track::turnout(80., 5., Side::Left);
    let positions: Vec<Vector> = track.connections().map(|connection| connection.position).collect();
    expect_eq(positions, track.endpoints().collect::<Vec<_>>())?;
    expect_eq(track.connections().count(), 4)?;
    expect_true(track.contains(Vector::new(0., 0.)))?;
    expect_true(!track.contains(Vector::new(0., 60.)))?;
    let bounding_box = track.bounding_box();
    expect_true(bounding_box.contains(Vector::new(-40., 0.)))?;
    expect_true(bounding_box.contains(Vector::new(-38.4, 15.6)))?;
    Ok(())
}
