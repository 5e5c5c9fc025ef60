//! Errors of layout operations.

use thiserror::Error;

use trackplan_track::{data::DataError, track::TrackId};

use crate::placement::PlacementId;

/// Error of an operation on a [`Layout`](crate::layout::Layout).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// No track with this id in the track library.
    #[error("Unknown track {0}!")]
    UnknownTrack(TrackId),
    /// No placement with this id in the layout.
    #[error("Unknown placement {0}!")]
    UnknownPlacement(PlacementId),
    /// The track is still placed in the layout.
    #[error("Track {track} is still used by {count} placement(s)!")]
    TrackInUse {
        /// The track that should be removed.
        track: TrackId,
        /// Number of placements referencing it.
        count: usize,
    },
    /// A placement record references a track missing from the library record.
    #[error("Placement {placement} references the missing track {track}!")]
    MissingTrack {
        /// The placement record.
        placement: PlacementId,
        /// The missing track.
        track: TrackId,
    },
    /// Every track id is already taken.
    #[error("No unused track id left!")]
    TrackIdsExhausted,
    /// Every placement id is already taken.
    #[error("No unused placement id left!")]
    PlacementIdsExhausted,
    /// A track record could not be reconstructed.
    #[error(transparent)]
    Data(#[from] DataError),
}
