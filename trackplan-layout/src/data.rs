//! Plain data records of placements and whole layouts.

use log::info;
use serde::{Deserialize, Serialize};

use trackplan_track::{
    data::TrackData,
    track::{Track, TrackId},
};
use trackplan_types::{angle::Angle, vector::Vector};

use crate::{
    error::LayoutError,
    layout::Layout,
    placement::{Placement, PlacementId},
};

/// Data record of a [`Placement`]. The selection is not recorded.
#[allow(clippy::min_ident_chars)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementData {
    /// Identifier in the layout.
    pub id: PlacementId,
    /// The placed library track.
    pub track: TrackId,
    /// x coordinate of the position.
    pub x: f64,
    /// y coordinate of the position.
    pub y: f64,
    /// Rotation in radians.
    pub rotation: f64,
}

impl From<&Placement> for PlacementData {
    fn from(placement: &Placement) -> Self {
        let Placement { id, track, position: Vector { x, y }, rotation: Angle(rotation), .. } =
            *placement;
        PlacementData { id, track, x, y, rotation }
    }
}

impl From<&PlacementData> for Placement {
    fn from(data: &PlacementData) -> Self {
        let PlacementData { id, track, x, y, rotation } = *data;
        Placement::new(id, track, Vector { x, y }, Angle(rotation))
    }
}

/// Data record of a [`Layout`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutData {
    /// Name of the layout.
    pub name: String,
    /// Length of the layout surface.
    pub length: f64,
    /// Width of the layout surface.
    pub width: f64,
    /// The track library.
    pub tracks: Vec<TrackData>,
    /// All placements.
    pub placements: Vec<PlacementData>,
}

impl Layout {
    /// The plain data record of this layout.
    #[must_use]
    pub fn to_data(&self) -> LayoutData {
        LayoutData {
            name: self.name().to_owned(),
            length: self.length(),
            width: self.width(),
            tracks: self.tracks().map(Track::to_data).collect(),
            placements: self.placements().map(PlacementData::from).collect(),
        }
    }

    /// Reconstruct a layout from its data record, keeping all ids.
    ///
    /// ## Errors
    ///
    /// Invalid track records, or placements referencing tracks missing from the record.
    pub fn from_data(data: LayoutData) -> Result<Layout, LayoutError> {
        let LayoutData { name, length, width, tracks, placements } = data;
        let mut layout = Layout::new(name, length, width);
        for track in tracks {
            layout.insert_track(Track::from_data(track)?);
        }
        for placement in &placements {
            if layout.track(placement.track).is_none() {
                return Err(LayoutError::MissingTrack {
                    placement: placement.id,
                    track: placement.track,
                });
            }
            layout.insert_placement(Placement::from(placement))?;
        }
        info!(
            "Loaded layout {:?} with {} track(s) and {} placement(s).",
            layout.name(),
            layout.tracks().count(),
            placements.len()
        );
        Ok(layout)
    }
}
