//! Plain data records of tracks, as consumed by persistence.

use log::warn;
use nonempty::NonEmpty;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use trackplan_types::{outline::Outline, vector::Vector};

use crate::{
    path::{Circle, TrackPath},
    track::{PieceKind, Track, TrackId, TrackType},
};

/// Data record of a [`TrackPath`].
///
/// Center and radius are either both present (curved path) or both absent (straight path).
#[allow(clippy::min_ident_chars)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPathData {
    /// x coordinate of the first end point.
    pub x1: f64,
    /// y coordinate of the first end point.
    pub y1: f64,
    /// x coordinate of the second end point.
    pub x2: f64,
    /// y coordinate of the second end point.
    pub y2: f64,
    /// x coordinate of the center.
    pub xc: Option<f64>,
    /// y coordinate of the center.
    pub yc: Option<f64>,
    /// Radius.
    pub r: Option<f64>,
}

/// Data record of a [`Track`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackData {
    /// Identifier in the track library.
    pub id: TrackId,
    /// Human readable name.
    pub label: String,
    /// Exact kind of the piece.
    pub kind: PieceKind,
    /// Type of the piece, redundant to `kind`.
    #[serde(rename = "type")]
    pub track_type: TrackType,
    /// Centerlines, in order.
    pub paths: Vec<TrackPathData>,
    /// Outline of all paths.
    pub outline: Outline,
}

/// Error while reconstructing a [`Track`] from its [`TrackData`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    /// A path record has only part of the center and radius.
    #[error("Path {index} of track {id} has an incomplete arc (center and radius must be given together)!")]
    PartialArc {
        /// Identifier of the track.
        id: TrackId,
        /// Index of the path inside the track.
        index: usize,
    },
    /// A track record without any path.
    #[error("Track {0} has no paths!")]
    NoPaths(TrackId),
    /// The recorded type does not match the recorded kind.
    #[error("Track {id} of kind {kind:?} can't have type {track_type:?}!")]
    TypeMismatch {
        /// Identifier of the track.
        id: TrackId,
        /// Recorded kind.
        kind: PieceKind,
        /// Recorded type.
        track_type: TrackType,
    },
}

impl From<&TrackPath> for TrackPathData {
    fn from(path: &TrackPath) -> Self {
        TrackPathData {
            x1: path.start.x,
            y1: path.start.y,
            x2: path.end.x,
            y2: path.end.y,
            xc: path.circle.map(|circle| circle.center.x),
            yc: path.circle.map(|circle| circle.center.y),
            r: path.circle.map(|circle| circle.radius),
        }
    }
}

impl TrackPathData {
    /// Reconstruct the path, `None` if center and radius are only given partially.
    #[must_use]
    pub fn to_path(&self) -> Option<TrackPath> {
        let TrackPathData { x1, y1, x2, y2, xc, yc, r } = *self;
        let circle = match (xc, yc, r) {
            (Some(x), Some(y), Some(radius)) => Some(Circle { center: Vector { x, y }, radius }),
            (None, None, None) => None,
            _ => return None,
        };
        Some(TrackPath { start: Vector { x: x1, y: y1 }, end: Vector { x: x2, y: y2 }, circle })
    }
}

impl Track {
    /// The plain data record of this track.
    #[must_use]
    pub fn to_data(&self) -> TrackData {
        TrackData {
            id: self.id(),
            label: self.label().to_owned(),
            kind: self.kind(),
            track_type: self.track_type(),
            paths: self.paths().iter().map(TrackPathData::from).collect(),
            outline: self.outline().clone(),
        }
    }

    /// Reconstruct a track from its data record.
    ///
    /// The outline is derived from the paths again,
    /// a recorded outline that differs from it only produces a warning.
    ///
    /// ## Errors
    ///
    /// Missing paths, partial arcs or a type not matching the kind.
    pub fn from_data(data: TrackData) -> Result<Track, DataError> {
        let TrackData { id, label, kind, track_type, paths, outline } = data;
        if kind.track_type() != track_type {
            return Err(DataError::TypeMismatch { id, kind, track_type });
        }
        let paths = paths
            .iter()
            .enumerate()
            .map(|(index, path)| path.to_path().ok_or(DataError::PartialArc { id, index }))
            .collect::<Result<Vec<_>, _>>()?;
        let paths = NonEmpty::from_vec(paths).ok_or(DataError::NoPaths(id))?;
        let track = Track::from_parts(id, label, kind, paths);
        if track.outline() != &outline {
            warn!("Recorded outline of track {id} differs from its paths, using the derived one.");
        }
        Ok(track)
    }
}

#[cfg(test)]
mod test;
