//! Snap a moved placement to the closest connection of a stationary one.

use itertools::iproduct;
use log::debug;
use serde::{Deserialize, Serialize};

use trackplan_track::{connection::Connection, scale::SCALE_WIDTH};
use trackplan_types::{
    angle::{Angle, PI},
    transform::AffineTransform,
    vector::Vector,
};

use crate::placement::{Placed, Placement, PlacementId};

/// Settings of the snap engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapSettings {
    /// Connections closer than this distance snap together.
    pub threshold: f64,
}

impl Default for SnapSettings {
    fn default() -> Self {
        SnapSettings { threshold: 2. * SCALE_WIDTH }
    }
}

/// The closest pair of points, one from each list, as `(index_a, index_b, distance)`.
///
/// Ties are resolved in favour of the pair found first
/// (iterating `points_a` in the outer and `points_b` in the inner loop).
/// [`None`] if one of the lists is empty.
#[must_use]
pub fn closest_points(points_a: &[Vector], points_b: &[Vector]) -> Option<(usize, usize, f64)> {
    iproduct!(points_a.iter().enumerate(), points_b.iter().enumerate()).fold(
        None,
        |closest, ((index_a, point_a), (index_b, point_b))| {
            let distance = point_a.distance(point_b);
            match closest {
                Some((_, _, min)) if min <= distance => closest,
                Some(_) | None => Some((index_a, index_b, distance)),
            }
        },
    )
}

/// The pair of placements (one `moving`, one `stationary`) with the closest end points.
///
/// Ties are resolved in favour of the pair found first
/// (iterating `moving` in the outer and `stationary` in the inner loop).
/// [`None`] if one of the lists is empty.
#[must_use]
pub fn find_closest_pair(
    moving: &[Placed<'_>],
    stationary: &[Placed<'_>],
) -> Option<(PlacementId, PlacementId)> {
    let endpoints = |placed: &Placed<'_>| placed.endpoints().collect::<Vec<_>>();
    let moving: Vec<_> = moving.iter().map(|placed| (placed.id(), endpoints(placed))).collect();
    let stationary: Vec<_> =
        stationary.iter().map(|placed| (placed.id(), endpoints(placed))).collect();
    let mut closest: Option<(PlacementId, PlacementId, f64)> = None;
    for ((moving_id, moving_points), (stationary_id, stationary_points)) in
        iproduct!(&moving, &stationary)
    {
        if let Some((_, _, distance)) = closest_points(moving_points, stationary_points) {
            if closest.map_or(true, |(_, _, min)| distance < min) {
                closest = Some((*moving_id, *stationary_id, distance));
            }
        }
    }
    closest.map(|(moving_id, stationary_id, _distance)| (moving_id, stationary_id))
}

/// Correction aligning a moved placement with a stationary one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snap {
    /// The matched connection of the stationary placement, in layout coordinates.
    pub target: Vector,
    /// Translation moving the matched connection of the moved placement onto `target`.
    pub offset: Vector,
    /// Rotation around `target` making both tangents antiparallel.
    pub rotation: Angle,
}

impl Snap {
    /// Translate by `offset`, then rotate by `rotation` around `target`.
    #[must_use]
    // Like f64: worst case is a loss of precision.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn correction(&self) -> AffineTransform {
        AffineTransform::identity()
            .translate_by(self.target)
            .rotate(self.rotation)
            .translate_by(-self.target)
            .translate_by(self.offset)
    }

    /// Apply the correction to a placement.
    pub fn apply(&self, placement: &mut Placement) {
        placement.apply_correction(&self.correction(), self.rotation);
    }
}

/// Snap `moving` to `stationary`, if their closest connections are closer than the threshold.
///
/// The matched connections coincide after the [correction](Snap::correction),
/// with the tangent of `moving` pointing in the opposite direction of the tangent of `stationary`.
#[must_use]
// Like f64: worst case is a loss of precision.
#[allow(clippy::arithmetic_side_effects)]
pub fn snap_to(moving: &Placed<'_>, stationary: &Placed<'_>, settings: &SnapSettings) -> Option<Snap> {
    let moving_connections: Vec<Connection> = moving.connections().collect();
    let stationary_connections: Vec<Connection> = stationary.connections().collect();
    let positions = |connections: &[Connection]| {
        connections.iter().map(|connection| connection.position).collect::<Vec<_>>()
    };
    let (index_moving, index_stationary, distance) =
        closest_points(&positions(&moving_connections), &positions(&stationary_connections))?;
    if distance >= settings.threshold {
        debug!(
            "No snap between {} and {}, closest connections are {distance} apart.",
            moving.id(),
            stationary.id()
        );
        return None;
    }
    let moving_connection = moving_connections.get(index_moving)?;
    let stationary_connection = stationary_connections.get(index_stationary)?;
    let target = stationary_connection.position;
    Some(Snap {
        target,
        offset: target - moving_connection.position,
        rotation: stationary_connection.direction - moving_connection.direction + PI,
    })
}
