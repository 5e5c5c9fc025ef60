//! Positioned and rotated instances of library tracks.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use trackplan_track::{
    connection::Connection,
    path::TrackPath,
    track::{Track, TrackId},
};
use trackplan_types::{
    angle::Angle, outline::Outline, rectangle::Rectangle, transform::AffineTransform,
    vector::Vector,
};

/// Identifier of a placement in a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlacementId(pub u32);

impl Display for PlacementId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "@{}", self.0)
    }
}

/// A library track, placed into a layout.
///
/// The track is referenced by its [`TrackId`], edits of the library track
/// are seen by every placement referencing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Identifier in the layout.
    pub id: PlacementId,
    /// The placed library track.
    pub track: TrackId,
    /// Position of the track's local origin, in layout coordinates.
    pub position: Vector,
    /// Rotation around the track's local origin.
    pub rotation: Angle,
    /// Is the placement currently selected?
    pub selected: bool,
}

impl Placement {
    /// Create a new, unselected placement.
    #[must_use]
    pub fn new(id: PlacementId, track: TrackId, position: Vector, rotation: Angle) -> Self {
        Placement { id, track, position, rotation, selected: false }
    }

    /// Transform from the track's local coordinates into layout coordinates:
    /// rotate around the local origin, then translate to the position.
    #[must_use]
    pub fn transform(&self) -> AffineTransform {
        AffineTransform::identity().translate_by(self.position).rotate(self.rotation)
    }

    /// Move by `delta`.
    // Like f64: worst case is a loss of precision.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn move_by(&mut self, delta: Vector) {
        self.position += delta;
    }

    /// Rotate around the local origin.
    // Like f64: worst case is a loss of precision.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn rotate_by(&mut self, angle: Angle) {
        self.rotation += angle;
    }

    /// Map the position through `correction` and add `rotation`.
    ///
    /// `correction` has to rotate by `rotation`, afterwards all points of the placed track
    /// are mapped by `correction`.
    // Like f64: worst case is a loss of precision.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn apply_correction(&mut self, correction: &AffineTransform, rotation: Angle) {
        self.position = correction.apply_to_point(self.position);
        self.rotation += rotation;
    }

    /// Select the placement.
    pub fn select(&mut self) {
        self.selected = true;
    }

    /// Deselect the placement.
    pub fn deselect(&mut self) {
        self.selected = false;
    }

    /// Toggle the selection, returns the new state.
    pub fn toggle_selection(&mut self) -> bool {
        self.selected = !self.selected;
        self.selected
    }
}

/// A [`Placement`] together with its [`Track`].
#[derive(Debug, Clone, Copy)]
pub struct Placed<'t> {
    /// The placement.
    pub placement: &'t Placement,
    /// The referenced track.
    pub track: &'t Track,
}

impl<'t> Placed<'t> {
    /// Identifier of the placement.
    #[must_use]
    pub fn id(&self) -> PlacementId {
        self.placement.id
    }

    /// All paths in layout coordinates.
    pub fn paths(&self) -> impl Iterator<Item = TrackPath> + 't {
        let transform = self.placement.transform();
        let track: &'t Track = self.track;
        track.paths().iter().map(move |path| path.transformed(&transform))
    }

    /// Connections of all paths in layout coordinates, in path order.
    pub fn connections(&self) -> impl Iterator<Item = Connection> + 't {
        self.paths().flat_map(|path| path.connections())
    }

    /// End points of all paths in layout coordinates, in path order.
    pub fn endpoints(&self) -> impl Iterator<Item = Vector> + 't {
        self.paths().flat_map(|path| path.endpoints())
    }

    /// Outline in layout coordinates.
    #[must_use]
    pub fn outline(&self) -> Outline {
        self.track.outline().transformed(&self.placement.transform())
    }

    /// Axis aligned bounding box in layout coordinates.
    #[must_use]
    pub fn bounding_box(&self) -> Rectangle {
        self.track.bounding_box().transformed(&self.placement.transform())
    }

    /// Is the layout `point` on the placed track?
    #[must_use]
    pub fn contains(&self, point: Vector) -> bool {
        self.placement
            .transform()
            .inverse()
            .is_some_and(|inverse| self.track.contains(inverse.apply_to_point(point)))
    }
}
