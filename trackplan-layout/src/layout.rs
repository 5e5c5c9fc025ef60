//! A layout: the track library and all placements of its tracks.

use std::collections::BTreeMap;

use log::{error, info};
use rstar::{
    primitives::{GeomWithData, Rectangle as RStarRectangle},
    RTree,
};

use trackplan_track::track::{Track, TrackId};
use trackplan_types::{angle::Angle, rectangle::Rectangle, vector::Vector};

use crate::{
    error::LayoutError,
    placement::{Placed, Placement, PlacementId},
    snap::{find_closest_pair, snap_to, Snap, SnapSettings},
};

/// The next unused id after `id` was taken, [`None`] if there is none left.
fn next_unused(next: Option<u32>, id: u32) -> Option<u32> {
    Some(next?.max(id.checked_add(1)?))
}

/// Bounding boxes of all placements.
type SpatialIndex = RTree<GeomWithData<RStarRectangle<Vector>, PlacementId>>;

/// A named layout surface with its track library and placements.
#[derive(Debug)]
pub struct Layout {
    /// Name of the layout.
    name: String,
    /// Length of the layout surface.
    length: f64,
    /// Width of the layout surface.
    width: f64,
    /// The track library, referenced by the placements.
    library: BTreeMap<TrackId, Track>,
    /// All placements with their cached bounding box.
    placements: BTreeMap<PlacementId, (Placement, Rectangle)>,
    // Invariant: every placement has a matching entry with its bounding box in the RTree.
    /// Spatial index of the placements.
    index: SpatialIndex,
    /// Next unused track id, [`None`] once all ids are taken.
    next_track_id: Option<u32>,
    /// Next unused placement id, [`None`] once all ids are taken.
    next_placement_id: Option<u32>,
    /// Settings of the snap engine.
    snap_settings: SnapSettings,
}

impl Layout {
    /// Create an empty layout.
    #[must_use]
    pub fn new(name: impl Into<String>, length: f64, width: f64) -> Self {
        Layout {
            name: name.into(),
            length,
            width,
            library: BTreeMap::new(),
            placements: BTreeMap::new(),
            index: SpatialIndex::new(),
            next_track_id: Some(1),
            next_placement_id: Some(1),
            snap_settings: SnapSettings::default(),
        }
    }

    /// Name of the layout.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Length of the layout surface.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Width of the layout surface.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Current snap settings.
    #[must_use]
    pub fn snap_settings(&self) -> &SnapSettings {
        &self.snap_settings
    }

    /// Replace the snap settings.
    pub fn set_snap_settings(&mut self, snap_settings: SnapSettings) {
        self.snap_settings = snap_settings;
    }

    /// Add a track to the library, assigning it a new id.
    ///
    /// ## Errors
    ///
    /// All track ids are taken.
    pub fn add_track(&mut self, mut track: Track) -> Result<TrackId, LayoutError> {
        let id = TrackId(self.next_track_id.ok_or(LayoutError::TrackIdsExhausted)?);
        self.next_track_id = next_unused(self.next_track_id, id.0);
        track.set_id(id);
        info!("Added track {id} ({}) to the library.", track.label());
        let _ = self.library.insert(id, track);
        Ok(id)
    }

    /// Insert a track keeping its id.
    pub(crate) fn insert_track(&mut self, track: Track) {
        let id = track.id();
        self.next_track_id = next_unused(self.next_track_id, id.0);
        if let Some(previous) = self.library.insert(id, track) {
            error!("Track {previous:?} with id {id} replaced!");
        }
    }

    /// A track of the library.
    #[must_use]
    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.library.get(&id)
    }

    /// All tracks of the library, ordered by id.
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.library.values()
    }

    /// Replace kind and paths of a library track, keeping id and label.
    ///
    /// Every placement of the track sees the new geometry.
    ///
    /// ## Errors
    ///
    /// Unknown track.
    pub fn edit_track(&mut self, id: TrackId, geometry: Track) -> Result<(), LayoutError> {
        let track = self.library.get_mut(&id).ok_or(LayoutError::UnknownTrack(id))?;
        track.replace_geometry(geometry);
        info!("Edited track {id}, now {:?}.", track.kind());
        let affected: Vec<PlacementId> = self
            .placements
            .values()
            .filter(|(placement, _rectangle)| placement.track == id)
            .map(|(placement, _rectangle)| placement.id)
            .collect();
        for placement_id in affected {
            self.update_placement(placement_id, |_placement| {})?;
        }
        Ok(())
    }

    /// Remove a track from the library.
    ///
    /// ## Errors
    ///
    /// Unknown track, or the track is still placed.
    pub fn remove_track(&mut self, id: TrackId) -> Result<Track, LayoutError> {
        let count =
            self.placements.values().filter(|(placement, _rectangle)| placement.track == id).count();
        if count > 0 {
            return Err(LayoutError::TrackInUse { track: id, count });
        }
        let track = self.library.remove(&id).ok_or(LayoutError::UnknownTrack(id))?;
        info!("Removed track {id} from the library.");
        Ok(track)
    }

    /// Place a library track at `position` with `rotation`.
    ///
    /// ## Errors
    ///
    /// Unknown track, or all placement ids are taken.
    pub fn place(
        &mut self,
        track: TrackId,
        position: Vector,
        rotation: Angle,
    ) -> Result<PlacementId, LayoutError> {
        let id = PlacementId(self.next_placement_id.ok_or(LayoutError::PlacementIdsExhausted)?);
        self.insert_placement(Placement::new(id, track, position, rotation))?;
        info!("Placed track {track} as {id} at {position:?}, rotated by {rotation:?}.");
        Ok(id)
    }

    /// Insert a placement keeping its id.
    ///
    /// ## Errors
    ///
    /// Unknown track.
    pub(crate) fn insert_placement(&mut self, placement: Placement) -> Result<(), LayoutError> {
        let id = placement.id;
        let track =
            self.library.get(&placement.track).ok_or(LayoutError::UnknownTrack(placement.track))?;
        let rectangle = Placed { placement: &placement, track }.bounding_box();
        let entry = GeomWithData::new(RStarRectangle::from(rectangle.clone()), id);
        self.next_placement_id = next_unused(self.next_placement_id, id.0);
        if let Some((previous, previous_rectangle)) = self.placements.insert(id, (placement, rectangle))
        {
            error!("Placement {previous:?} with id {id} replaced!");
            let _ = self.index.remove(&GeomWithData::new(RStarRectangle::from(previous_rectangle), id));
        }
        self.index.insert(entry);
        Ok(())
    }

    /// Remove a placement, the library track stays.
    ///
    /// ## Errors
    ///
    /// Unknown placement.
    pub fn remove_placement(&mut self, id: PlacementId) -> Result<Placement, LayoutError> {
        let (placement, rectangle) =
            self.placements.remove(&id).ok_or(LayoutError::UnknownPlacement(id))?;
        if self.index.remove(&GeomWithData::new(RStarRectangle::from(rectangle), id)).is_none() {
            error!("Rectangle for placement {id} could not be removed!");
        }
        info!("Removed placement {id}.");
        Ok(placement)
    }

    /// A placement of the layout.
    #[must_use]
    pub fn placement(&self, id: PlacementId) -> Option<&Placement> {
        self.placements.get(&id).map(|(placement, _rectangle)| placement)
    }

    /// All placements, ordered by id.
    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        self.placements.values().map(|(placement, _rectangle)| placement)
    }

    /// A placement together with its track.
    ///
    /// ## Errors
    ///
    /// Unknown placement, or its track is missing from the library.
    pub fn placed(&self, id: PlacementId) -> Result<Placed<'_>, LayoutError> {
        let (placement, _rectangle) =
            self.placements.get(&id).ok_or(LayoutError::UnknownPlacement(id))?;
        let track =
            self.library.get(&placement.track).ok_or(LayoutError::UnknownTrack(placement.track))?;
        Ok(Placed { placement, track })
    }

    /// All placements with their tracks, filtered by `predicate`.
    fn placed_where(&self, predicate: impl Fn(&Placement) -> bool) -> Vec<Placed<'_>> {
        self.placements
            .values()
            .filter(|(placement, _rectangle)| predicate(placement))
            .filter_map(|(placement, _rectangle)| {
                self.library.get(&placement.track).map(|track| Placed { placement, track })
            })
            .collect()
    }

    /// Cached bounding box of a placement, in layout coordinates.
    #[must_use]
    pub fn bounding_box(&self, id: PlacementId) -> Option<&Rectangle> {
        self.placements.get(&id).map(|(_placement, rectangle)| rectangle)
    }

    /// Modify a placement and refresh its entry in the RTree.
    fn update_placement(
        &mut self,
        id: PlacementId,
        change: impl FnOnce(&mut Placement),
    ) -> Result<(), LayoutError> {
        let (placement, rectangle) =
            self.placements.get_mut(&id).ok_or(LayoutError::UnknownPlacement(id))?;
        change(placement);
        let track =
            self.library.get(&placement.track).ok_or(LayoutError::UnknownTrack(placement.track))?;
        let new_rectangle = Placed { placement, track }.bounding_box();
        let result =
            self.index.remove(&GeomWithData::new(RStarRectangle::from(rectangle.clone()), id));
        if result.is_none() {
            error!("Rectangle for placement {id} could not be removed!");
        }
        self.index.insert(GeomWithData::new(RStarRectangle::from(new_rectangle.clone()), id));
        *rectangle = new_rectangle;
        Ok(())
    }

    /// Move a placement by `delta`.
    ///
    /// ## Errors
    ///
    /// Unknown placement.
    pub fn move_placement(&mut self, id: PlacementId, delta: Vector) -> Result<(), LayoutError> {
        self.update_placement(id, |placement| placement.move_by(delta))
    }

    /// Rotate a placement around its local origin.
    ///
    /// ## Errors
    ///
    /// Unknown placement.
    pub fn rotate_placement(&mut self, id: PlacementId, angle: Angle) -> Result<(), LayoutError> {
        self.update_placement(id, |placement| placement.rotate_by(angle))
    }

    /// Mutable access to a placement, for changes not affecting its bounding box.
    fn selection_mut(&mut self, id: PlacementId) -> Result<&mut Placement, LayoutError> {
        self.placements
            .get_mut(&id)
            .map(|(placement, _rectangle)| placement)
            .ok_or(LayoutError::UnknownPlacement(id))
    }

    /// Select a placement.
    ///
    /// ## Errors
    ///
    /// Unknown placement.
    pub fn select(&mut self, id: PlacementId) -> Result<(), LayoutError> {
        self.selection_mut(id).map(Placement::select)
    }

    /// Deselect a placement.
    ///
    /// ## Errors
    ///
    /// Unknown placement.
    pub fn deselect(&mut self, id: PlacementId) -> Result<(), LayoutError> {
        self.selection_mut(id).map(Placement::deselect)
    }

    /// Toggle the selection of a placement, returns the new state.
    ///
    /// ## Errors
    ///
    /// Unknown placement.
    pub fn toggle_selection(&mut self, id: PlacementId) -> Result<bool, LayoutError> {
        self.selection_mut(id).map(Placement::toggle_selection)
    }

    /// Deselect all placements.
    pub fn deselect_all(&mut self) {
        for (placement, _rectangle) in self.placements.values_mut() {
            placement.deselect();
        }
    }

    /// Ids of all selected placements, ordered by id.
    pub fn selected(&self) -> impl Iterator<Item = PlacementId> + '_ {
        self.placements()
            .filter(|placement| placement.selected)
            .map(|placement| placement.id)
    }

    /// The placement at the layout `point`, the one with the smallest id if they overlap.
    #[must_use]
    pub fn placement_at(&self, point: Vector) -> Option<PlacementId> {
        self.index
            .locate_all_at_point(&point)
            .map(|candidate| candidate.data)
            .filter(|id| self.placed(*id).is_ok_and(|placed| placed.contains(point)))
            .min()
    }

    /// Move all selected placements by `delta`, then snap them to the closest unselected one.
    ///
    /// The returned correction was applied to every selected placement.
    /// [`None`] if nothing is selected, nothing is unselected,
    /// or the closest connections are too far apart.
    pub fn commit_drag(&mut self, delta: Vector) -> Option<Snap> {
        let selected: Vec<PlacementId> = self.selected().collect();
        for id in &selected {
            if let Err(error) = self.move_placement(*id, delta) {
                error!("Moving selected placement failed: {error}");
            }
        }
        let snap = {
            let moving = self.placed_where(|placement| placement.selected);
            let stationary = self.placed_where(|placement| !placement.selected);
            let (moving_id, stationary_id) = find_closest_pair(&moving, &stationary)?;
            let moving = self.placed(moving_id).ok()?;
            let stationary = self.placed(stationary_id).ok()?;
            snap_to(&moving, &stationary, &self.snap_settings)?
        };
        info!("Snapping {} placement(s): {snap:?}", selected.len());
        for id in selected {
            if let Err(error) = self.update_placement(id, |placement| snap.apply(placement)) {
                error!("Snapping selected placement failed: {error}");
            }
        }
        Some(snap)
    }
}
