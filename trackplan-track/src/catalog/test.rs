//! Tests for the standard library.

// Expected values are calculated with f64 geometry.
#![allow(clippy::arithmetic_side_effects)]

use std::collections::BTreeSet;

use trackplan_test_util::{
    expect_close, expect_eq, expect_true, init_test_logging, ExpectTrue, Expectation,
};

use crate::{
    catalog::standard_library,
    scale::Scale,
    track::{PieceKind, TrackId, TrackType},
};

#[test]
fn ids_are_unique_and_consecutive() -> Result<(), Expectation> {
    init_test_logging();

    let library = standard_library(&Scale::N);
    let ids: BTreeSet<TrackId> = library.iter().map(|track| track.id()).collect();
    expect_eq(ids.len(), library.len())?;
    expect_eq(ids.first().copied(), Some(TrackId(1)))?;
    expect_true(library.iter().all(|track| !track.label().is_empty()))?;
    Ok(())
}

#[test]
fn every_type_is_present() -> Result<(), Expectation> {
    init_test_logging();

    let library = standard_library(&Scale::HO);
    for track_type in [TrackType::Straight, TrackType::Curve, TrackType::Crossing, TrackType::Turnout]
    {
        expect_true(library.iter().any(|track| track.track_type() == track_type))?;
    }
    expect_true(library.iter().any(|track| track.kind() == PieceKind::WyeTurnout))?;
    Ok(())
}

#[test]
fn dimensions_follow_scale() -> Result<(), Expectation> {
    init_test_logging();

    for (_name, scale) in Scale::PRESETS {
        let library = standard_library(&scale);
        let first = library.first().ok_or(ExpectTrue)?;
        expect_eq(first.kind(), PieceKind::Straight)?;
        expect_close(first.paths().head.length(), scale.ratio * 5. / 12.)?;
    }
    Ok(())
}
