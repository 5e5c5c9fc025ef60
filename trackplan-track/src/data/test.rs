//! Tests for the data records.

use trackplan_test_util::{expect_eq, expect_ok, expect_true, init_test_logging, Expectation};
use trackplan_types::{
    angle::{Angle, Degrees},
    outline::Outline,
};

use crate::{
    data::{DataError, TrackData, TrackPathData},
    track::{PieceKind, Side, Track, TrackId, TrackType},
};

fn sample_tracks() -> Vec<Track> {
    let mut tracks = vec![
        Track::straight(80.),
        Track::curve(203.96, Angle::from(Degrees(22.5))),
        Track::crossing(60., Angle::from(Degrees(30.))),
        Track::turnout(80., 5., Side::Left),
        Track::turnout(80., 6., Side::Right),
        Track::curve_turnout(200., 150., Angle::from(Degrees(15.)), Side::Right),
        Track::wye_turnout(80., 4.),
    ];
    for (id, track) in (1..).zip(tracks.iter_mut()) {
        track.set_id(TrackId(id));
    }
    tracks
}

#[test]
fn round_trip() -> Result<(), Expectation> {
    init_test_logging();

    for track in sample_tracks() {
        let data = track.to_data();
        expect_eq(data.paths.len(), track.paths().len())?;
        let restored = Track::from_data(data);
        expect_eq(restored, Ok(track))?;
    }
    Ok(())
}

#[test]
fn straight_record_has_no_arc() -> Result<(), Expectation> {
    init_test_logging();

    let data = Track::straight(80.).to_data();
    expect_eq(data.track_type, TrackType::Straight)?;
    expect_eq(
        data.paths,
        vec![TrackPathData { x1: -40., y1: 0., x2: 40., y2: 0., xc: None, yc: None, r: None }],
    )?;
    Ok(())
}

#[test]
fn bincode_round_trip() -> Result<(), Expectation> {
    init_test_logging();

    for track in sample_tracks() {
        let data = track.to_data();
        let bytes = expect_ok(bincode::serialize(&data))?;
        let decoded: TrackData = expect_ok(bincode::deserialize(&bytes))?;
        expect_eq(decoded, data)?;
    }
    Ok(())
}

#[test]
fn invalid_records() -> Result<(), Expectation> {
    init_test_logging();

    let valid = Track::curve(100., Angle(0.5)).to_data();

    let mut partial = valid.clone();
    if let Some(path) = partial.paths.first_mut() {
        path.r = None;
    }
    expect_eq(
        Track::from_data(partial),
        Err(DataError::PartialArc { id: TrackId(0), index: 0 }),
    )?;

    let mut empty = valid.clone();
    empty.paths.clear();
    expect_eq(Track::from_data(empty), Err(DataError::NoPaths(TrackId(0))))?;

    let mut mismatch = valid;
    mismatch.kind = PieceKind::LeftTurnout;
    expect_eq(
        Track::from_data(mismatch),
        Err(DataError::TypeMismatch {
            id: TrackId(0),
            kind: PieceKind::LeftTurnout,
            track_type: TrackType::Curve,
        }),
    )?;
    Ok(())
}

#[test]
fn stale_outline_is_replaced() -> Result<(), Expectation> {
    init_test_logging();

    let track = Track::straight(80.);
    let mut data = track.to_data();
    data.outline = Outline::default();
    let restored = expect_ok(Track::from_data(data))?;
    expect_true(!restored.outline().is_empty())?;
    expect_eq(restored.outline().clone(), track.outline().clone())?;
    Ok(())
}
