//! Pointer gestures selecting and dragging placements.

use std::mem;

use log::debug;

use trackplan_types::vector::Vector;

use crate::{layout::Layout, placement::PlacementId, snap::Snap};

/// State of a [`DragGesture`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No pointer is pressed on a placement.
    #[default]
    Idle,
    /// The selection is dragged.
    Dragging {
        /// Position of the pointer when it was pressed.
        start: Vector,
        /// Latest position of the pointer.
        current: Vector,
    },
}

/// What a pointer press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerDown {
    /// The selection of the placement was toggled (shift pressed), no drag was started.
    Toggled(PlacementId, bool),
    /// The placement was selected and dragging the selection started.
    DragStarted(PlacementId),
    /// Nothing under the pointer, all placements were deselected.
    Deselected,
    /// Shift pressed over empty space, nothing changed.
    Ignored,
}

/// Drives selection and dragging of placements from pointer events.
///
/// While dragging only a candidate offset is tracked, the layout changes when the pointer is released.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragGesture {
    /// Current state.
    state: DragState,
}

impl DragGesture {
    /// A new, idle gesture.
    #[must_use]
    pub fn new() -> Self {
        DragGesture::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Is the selection being dragged?
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// The pointer was pressed at the layout `point`.
    ///
    /// With `shift` the selection of the placement under the pointer is toggled.
    /// Otherwise the placement under the pointer is selected and a drag starts,
    /// a press on empty space deselects everything.
    pub fn pointer_down(&mut self, layout: &mut Layout, point: Vector, shift: bool) -> PointerDown {
        let hit = layout.placement_at(point);
        let result = match (hit, shift) {
            (Some(id), true) => match layout.toggle_selection(id) {
                Ok(selected) => PointerDown::Toggled(id, selected),
                Err(_error) => PointerDown::Ignored,
            },
            (None, true) => PointerDown::Ignored,
            (Some(id), false) => match layout.select(id) {
                Ok(()) => {
                    self.state = DragState::Dragging { start: point, current: point };
                    PointerDown::DragStarted(id)
                },
                Err(_error) => PointerDown::Ignored,
            },
            (None, false) => {
                layout.deselect_all();
                PointerDown::Deselected
            },
        };
        debug!("Pointer down at {point:?}: {result:?}");
        result
    }

    /// The pointer moved to the layout `point`.
    ///
    /// Returns the candidate offset of the selection while dragging.
    // Like f64: worst case is a loss of precision.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn pointer_move(&mut self, point: Vector) -> Option<Vector> {
        match &mut self.state {
            DragState::Idle => None,
            DragState::Dragging { start, current } => {
                *current = point;
                Some(point - *start)
            },
        }
    }

    /// Candidate offset of the selection, [`None`] while idle.
    #[must_use]
    // Like f64: worst case is a loss of precision.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn offset(&self) -> Option<Vector> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { start, current } => Some(current - start),
        }
    }

    /// The pointer was released at the layout `point`.
    ///
    /// Commits the drag: the selection is moved and snapped to the closest unselected placement.
    /// Returns the applied snap correction.
    // Like f64: worst case is a loss of precision.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn pointer_up(&mut self, layout: &mut Layout, point: Vector) -> Option<Snap> {
        let DragState::Dragging { start, .. } = mem::take(&mut self.state) else {
            return None;
        };
        layout.commit_drag(point - start)
    }

    /// Abort a drag without changing the layout.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            debug!("Drag cancelled.");
        }
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod test;
