//! Track pieces and the factories computing their geometry.

// Like f64: worst case is a loss of precision.
#![allow(clippy::arithmetic_side_effects)]

use std::fmt::{self, Display, Formatter};

use log::debug;
use nonempty::{nonempty, NonEmpty};
use serde::{Deserialize, Serialize};

use trackplan_types::{
    angle::{Angle, FRAC_PI_2, PI},
    outline::Outline,
    rectangle::Rectangle,
    transform::AffineTransform,
    vector::Vector,
};

use crate::{connection::Connection, path::TrackPath};

/// Identifier of a track in a track library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct TrackId(pub u32);

impl Display for TrackId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{}", self.0)
    }
}

/// The type of a track, as seen by the snapping engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackType {
    /// A single straight path.
    Straight,
    /// A single curved path.
    Curve,
    /// Two crossing straight paths.
    Crossing,
    /// A main path with one or more diverging branches.
    Turnout,
}

/// The exact kind of a track piece, including the direction of turnouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PieceKind {
    /// [`Track::straight`]
    Straight,
    /// [`Track::curve`]
    Curve,
    /// [`Track::crossing`]
    Crossing,
    /// [`Track::turnout`] with [`Side::Left`]
    LeftTurnout,
    /// [`Track::turnout`] with [`Side::Right`]
    RightTurnout,
    /// [`Track::wye_turnout`]
    WyeTurnout,
    /// [`Track::curve_turnout`] with [`Side::Left`]
    LeftCurvedTurnout,
    /// [`Track::curve_turnout`] with [`Side::Right`]
    RightCurvedTurnout,
}

impl PieceKind {
    /// The [`TrackType`] of this kind.
    #[must_use]
    pub fn track_type(self) -> TrackType {
        match self {
            PieceKind::Straight => TrackType::Straight,
            PieceKind::Curve => TrackType::Curve,
            PieceKind::Crossing => TrackType::Crossing,
            PieceKind::LeftTurnout
            | PieceKind::RightTurnout
            | PieceKind::WyeTurnout
            | PieceKind::LeftCurvedTurnout
            | PieceKind::RightCurvedTurnout => TrackType::Turnout,
        }
    }
}

/// The side a turnout branch diverges to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The branch ends at the far end of the main path.
    Left,
    /// The branch starts at the near end of the main path.
    Right,
}

/// A track piece: identified, typed and labeled centerline paths plus their outline.
///
/// The outline is always derived from the paths, changing the paths regenerates it.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Identifier in the track library.
    id: TrackId,
    /// Human readable name.
    label: String,
    /// Exact kind of the piece.
    kind: PieceKind,
    /// Centerlines, in order.
    paths: NonEmpty<TrackPath>,
    /// Outline of all paths.
    outline: Outline,
}

/// The combined outline of all paths.
fn derive_outline(paths: &NonEmpty<TrackPath>) -> Outline {
    paths.iter().map(TrackPath::outline).collect()
}

/// Radius and sweep of a turnout branch of `length` diverging with `frog_angle`.
fn frog_geometry(length: f64, frog_angle: Angle) -> (f64, Angle) {
    let complement = FRAC_PI_2 - frog_angle;
    let radius = length / (2. * complement.0.cos());
    let sweep = PI - complement * 2.;
    (radius, sweep)
}

/// Move `branch` so that its end (for [`Side::Left`]) or start (for [`Side::Right`])
/// coincides with the corresponding point of `main`.
fn attach_branch(main: &TrackPath, branch: TrackPath, side: Side) -> TrackPath {
    let offset = match side {
        Side::Left => main.end - branch.end,
        Side::Right => main.start - branch.start,
    };
    branch.transformed(&AffineTransform::identity().translate_by(offset))
}

impl Track {
    /// Create a track from its parts, deriving the outline.
    #[must_use]
    pub fn from_parts(id: TrackId, label: String, kind: PieceKind, paths: NonEmpty<TrackPath>) -> Self {
        let outline = derive_outline(&paths);
        Track { id, label, kind, paths, outline }
    }

    /// A single straight path of the given `length`.
    #[must_use]
    pub fn straight(length: f64) -> Self {
        Track::from_parts(
            TrackId::default(),
            format!("Straight {length:.1}"),
            PieceKind::Straight,
            nonempty![TrackPath::straight(length)],
        )
    }

    /// A single curved path with `radius` and `sweep`.
    #[must_use]
    pub fn curve(radius: f64, sweep: Angle) -> Self {
        Track::from_parts(
            TrackId::default(),
            format!("Curve R{radius:.1} {:.1}°", sweep.to_degrees().0),
            PieceKind::Curve,
            nonempty![TrackPath::curve(radius, sweep)],
        )
    }

    /// Two straight paths of the same `length`, crossing at the origin with the given `angle`.
    #[must_use]
    pub fn crossing(length: f64, angle: Angle) -> Self {
        let half_angle = angle / 2.;
        let path = TrackPath::straight(length);
        Track::from_parts(
            TrackId::default(),
            format!("Crossing {length:.1} {:.1}°", angle.to_degrees().0),
            PieceKind::Crossing,
            nonempty![
                path.transformed(&AffineTransform::identity().rotate(half_angle)),
                path.transformed(&AffineTransform::identity().rotate(-half_angle))
            ],
        )
    }

    /// A straight main path of `length`, plus a curved branch diverging to `side`.
    ///
    /// The frog angle is `atan2(1, turnout_number)`, it determines radius and sweep of the branch.
    #[must_use]
    pub fn turnout(length: f64, turnout_number: f64, side: Side) -> Self {
        let frog_angle = Angle::atan2(1., turnout_number);
        let (radius, sweep) = frog_geometry(length, frog_angle);
        debug!("turnout #{turnout_number}: frog angle {frog_angle:?}, radius {radius}, sweep {sweep:?}");
        let main = TrackPath::straight(length);
        let rotation = match side {
            Side::Left => -frog_angle,
            Side::Right => frog_angle,
        };
        let branch = TrackPath::curve(radius, sweep)
            .transformed(&AffineTransform::identity().rotate(rotation));
        let branch = attach_branch(&main, branch, side);
        let kind = match side {
            Side::Left => PieceKind::LeftTurnout,
            Side::Right => PieceKind::RightTurnout,
        };
        Track::from_parts(
            TrackId::default(),
            format!("{side:?} turnout #{turnout_number} {length:.1}"),
            kind,
            nonempty![main, branch],
        )
    }

    /// A curved main path with `main_radius` and `sweep`,
    /// plus a branch with `branch_radius` diverging to `side`.
    ///
    /// The branch is an approximation, not the exact intersection of both circles:
    /// it has twice the sweep of the main path, is rotated by half of `sweep`
    /// and shares the frog end with the main path.
    #[must_use]
    pub fn curve_turnout(main_radius: f64, branch_radius: f64, sweep: Angle, side: Side) -> Self {
        let main = TrackPath::curve(main_radius, sweep);
        let half_sweep = sweep / 2.;
        let rotation = match side {
            Side::Left => -half_sweep,
            Side::Right => half_sweep,
        };
        let branch = TrackPath::curve(branch_radius, sweep * 2.)
            .transformed(&AffineTransform::identity().rotate(rotation));
        let branch = attach_branch(&main, branch, side);
        let kind = match side {
            Side::Left => PieceKind::LeftCurvedTurnout,
            Side::Right => PieceKind::RightCurvedTurnout,
        };
        Track::from_parts(
            TrackId::default(),
            format!(
                "{side:?} curved turnout R{main_radius:.1}/R{branch_radius:.1} {:.1}°",
                sweep.to_degrees().0
            ),
            kind,
            nonempty![main, branch],
        )
    }

    /// Two symmetric curved paths, each diverging with half the frog angle of a
    /// [`turnout`](Track::turnout) with the same `turnout_number`.
    ///
    /// Both paths meet at `(-length/2, 0)` with identical tangents and diverge mirrored
    /// to both sides of the x axis.
    /// The branches start from this shared tangent and only separate laterally,
    /// unlike the straight main path of a regular turnout.
    #[must_use]
    pub fn wye_turnout(length: f64, turnout_number: f64) -> Self {
        let half_frog_angle = Angle::atan2(1., turnout_number) / 2.;
        let (radius, sweep) = frog_geometry(length, half_frog_angle);
        let reference = TrackPath::straight(length);
        let curve = TrackPath::curve(radius, sweep);
        let right = attach_branch(
            &reference,
            curve.transformed(&AffineTransform::identity().rotate(half_frog_angle)),
            Side::Right,
        );
        // a left branch ending at the far end, turned around the origin
        let left = attach_branch(
            &reference,
            curve.transformed(&AffineTransform::identity().rotate(-half_frog_angle)),
            Side::Left,
        )
        .transformed(&AffineTransform::identity().rotate(PI));
        Track::from_parts(
            TrackId::default(),
            format!("Wye turnout #{turnout_number} {length:.1}"),
            PieceKind::WyeTurnout,
            nonempty![right, left],
        )
    }

    /// Identifier in the track library.
    #[must_use]
    pub fn id(&self) -> TrackId {
        self.id
    }

    /// Set the identifier.
    pub fn set_id(&mut self, id: TrackId) {
        self.id = id;
    }

    /// Human readable name.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Exact kind of the piece.
    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Type of the piece.
    #[must_use]
    pub fn track_type(&self) -> TrackType {
        self.kind.track_type()
    }

    /// Centerlines, in order.
    #[must_use]
    pub fn paths(&self) -> &NonEmpty<TrackPath> {
        &self.paths
    }

    /// Outline of all paths.
    #[must_use]
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// Replace the paths and regenerate the outline.
    pub fn set_paths(&mut self, kind: PieceKind, paths: NonEmpty<TrackPath>) {
        self.outline = derive_outline(&paths);
        self.kind = kind;
        self.paths = paths;
    }

    /// Replace kind, paths and outline with those of `geometry`, keeping id and label.
    pub fn replace_geometry(&mut self, geometry: Track) {
        let Track { kind, paths, outline, .. } = geometry;
        self.kind = kind;
        self.paths = paths;
        self.outline = outline;
    }

    /// Connections at both end points of every path, in path order.
    pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
        self.paths.iter().flat_map(TrackPath::connections)
    }

    /// End points of every path, in path order.
    pub fn endpoints(&self) -> impl Iterator<Item = Vector> + '_ {
        self.paths.iter().flat_map(TrackPath::endpoints)
    }

    /// Is `point` (in local coordinates) on any path's ribbon?
    #[must_use]
    pub fn contains(&self, point: Vector) -> bool {
        self.paths.iter().any(|path| path.contains(point))
    }

    /// Axis aligned bounding box of all paths (in local coordinates).
    #[must_use]
    pub fn bounding_box(&self) -> Rectangle {
        let NonEmpty { head, tail } = &self.paths;
        tail.iter().fold(head.bounding_box(), |bounding_box, path| {
            bounding_box.enclosing(&path.bounding_box())
        })
    }
}

#[cfg(test)]
mod test;
