//! Tests for pointer gestures.

use trackplan_test_util::{
    expect_close, expect_eq, expect_ok, expect_true, init_test_logging, ExpectTrue, Expectation,
};
use trackplan_track::track::Track;
use trackplan_types::{angle::Angle, vector::Vector};

use crate::{
    gesture::{DragGesture, DragState, PointerDown},
    layout::Layout,
    placement::PlacementId,
};

/// Two straights, the second one far right of the first.
fn two_straights() -> Result<(Layout, PlacementId, PlacementId), Expectation> {
    let mut layout = Layout::new("Test", 1200., 600.);
    let track = expect_ok(layout.add_track(Track::straight(80.)))?;
    let first = expect_ok(layout.place(track, Vector::ZERO, Angle(0.)))?;
    let second = expect_ok(layout.place(track, Vector::new(200., 0.), Angle(0.)))?;
    Ok((layout, first, second))
}

#[test]
fn drag_and_snap() -> Result<(), Expectation> {
    init_test_logging();

    let (mut layout, first, second) = two_straights()?;
    let mut gesture = DragGesture::new();
    expect_eq(gesture.offset(), None)?;
    expect_eq(
        gesture.pointer_down(&mut layout, Vector::new(200., 0.), false),
        PointerDown::DragStarted(second),
    )?;
    expect_true(gesture.is_dragging())?;
    expect_eq(layout.selected().collect::<Vec<_>>(), vec![second])?;

    expect_eq(gesture.pointer_move(Vector::new(100., 2.)), Some(Vector::new(-100., 2.)))?;
    expect_eq(gesture.pointer_move(Vector::new(85., 2.)), Some(Vector::new(-115., 2.)))?;
    expect_eq(
        gesture.state(),
        DragState::Dragging { start: Vector::new(200., 0.), current: Vector::new(85., 2.) },
    )?;
    // nothing moves before the pointer is released
    let unmoved = layout.placement(second).ok_or(ExpectTrue)?;
    expect_eq(unmoved.position, Vector::new(200., 0.))?;

    let snap = gesture.pointer_up(&mut layout, Vector::new(85., 2.)).ok_or(ExpectTrue)?;
    expect_eq(snap.target, Vector::new(40., 0.))?;
    expect_eq(gesture.state(), DragState::Idle)?;
    let moved = layout.placement(second).ok_or(ExpectTrue)?;
    expect_close(moved.position.x, 80.)?;
    expect_close(moved.position.y, 0.)?;
    let stationary = layout.placement(first).ok_or(ExpectTrue)?;
    expect_eq(stationary.position, Vector::ZERO)?;
    Ok(())
}

#[test]
fn cancel_keeps_layout() -> Result<(), Expectation> {
    init_test_logging();

    let (mut layout, _first, second) = two_straights()?;
    let before = layout.to_data();
    let mut gesture = DragGesture::new();
    let _ = gesture.pointer_down(&mut layout, Vector::new(210., 1.), false);
    let _ = gesture.pointer_move(Vector::new(90., 1.));
    gesture.cancel();
    expect_true(!gesture.is_dragging())?;
    expect_eq(gesture.pointer_move(Vector::new(0., 0.)), None)?;
    expect_eq(gesture.pointer_up(&mut layout, Vector::new(90., 1.)), None)?;
    expect_eq(layout.to_data(), before)?;
    // the press still selected the placement
    expect_eq(layout.selected().collect::<Vec<_>>(), vec![second])?;
    Ok(())
}

#[test]
fn shift_toggles_selection() -> Result<(), Expectation> {
    init_test_logging();

    let (mut layout, first, _second) = two_straights()?;
    let mut gesture = DragGesture::new();
    expect_eq(
        gesture.pointer_down(&mut layout, Vector::new(5., 0.), true),
        PointerDown::Toggled(first, true),
    )?;
    expect_true(!gesture.is_dragging())?;
    expect_eq(
        gesture.pointer_down(&mut layout, Vector::new(5., 0.), true),
        PointerDown::Toggled(first, false),
    )?;
    expect_eq(gesture.pointer_down(&mut layout, Vector::new(100., 100.), true), PointerDown::Ignored)?;
    expect_eq(layout.selected().count(), 0)?;
    Ok(())
}

#[test]
fn press_on_empty_space_deselects() -> Result<(), Expectation> {
    init_test_logging();

    let (mut layout, first, second) = two_straights()?;
    expect_ok(layout.select(first))?;
    expect_ok(layout.select(second))?;
    let mut gesture = DragGesture::new();
    expect_eq(
        gesture.pointer_down(&mut layout, Vector::new(100., 300.), false),
        PointerDown::Deselected,
    )?;
    expect_true(!gesture.is_dragging())?;
    expect_eq(layout.selected().count(), 0)?;
    Ok(())
}
