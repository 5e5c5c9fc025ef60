//! A small demo layout: standard pieces dropped next to each other and snapped together.

use itertools::Itertools;
use log::{debug, info};

use trackplan_layout::{error::LayoutError, layout::Layout, placement::PlacementId};
use trackplan_track::{
    catalog::standard_library,
    scale::{Scale, SCALE_WIDTH},
    track::{PieceKind, Track, TrackId},
};
use trackplan_types::{angle::Angle, rectangle::Rectangle, vector::Vector};

/// Offset between a free end and the dropped piece, close enough to snap.
const DROP_OFFSET: Vector = Vector { x: 3., y: 2. };

/// Pieces of the demo chain, in placement order.
const CHAIN: [PieceKind; 4] =
    [PieceKind::Straight, PieceKind::Straight, PieceKind::RightTurnout, PieceKind::Straight];

/// Find the first library track of the given kind.
fn first_of_kind(layout: &Layout, kind: PieceKind) -> Result<TrackId, LayoutError> {
    layout
        .tracks()
        .find(|track| track.kind() == kind)
        .map(Track::id)
        .ok_or(LayoutError::UnknownTrack(TrackId::default()))
}

/// The rightmost end point of a placement.
fn free_end(layout: &Layout, id: PlacementId) -> Result<Vector, LayoutError> {
    let placed = layout.placed(id)?;
    Ok(placed.endpoints().fold(Vector { x: f64::NEG_INFINITY, y: 0. }, |best, point| {
        if point.x > best.x {
            point
        } else {
            best
        }
    }))
}

/// Build a layout containing the standard library of `scale`,
/// with a chain of pieces each dropped near the free end of its predecessor and snapped to it.
///
/// ## Errors
///
/// A chain piece is missing from the standard library, or all ids are taken.
// Like f64: worst case is a loss of precision.
#[allow(clippy::arithmetic_side_effects)]
pub fn demo_layout(scale: &Scale) -> Result<Layout, LayoutError> {
    let mut layout = Layout::new("Demo", 1200., 600.);
    for track in standard_library(scale) {
        let _ = layout.add_track(track)?;
    }
    let mut previous: Option<PlacementId> = None;
    for kind in CHAIN {
        let track_id = first_of_kind(&layout, kind)?;
        let start = layout
            .track(track_id)
            .and_then(|track| track.endpoints().next())
            .ok_or(LayoutError::UnknownTrack(track_id))?;
        let position = match previous {
            Some(id) => free_end(&layout, id)? - start + DROP_OFFSET,
            None => Vector::ZERO,
        };
        let id = layout.place(track_id, position, Angle(0.))?;
        if previous.is_some() {
            layout.deselect_all();
            layout.select(id)?;
            let snap = layout.commit_drag(Vector::ZERO);
            debug!("Dropped {kind:?} as {id}, snap: {snap:?}");
        }
        previous = Some(id);
    }
    layout.deselect_all();
    info!("Demo layout with {} placement(s).", layout.placements().count());
    Ok(layout)
}

/// Render all placements of the layout as an SVG document.
#[must_use]
pub fn render_svg(layout: &Layout) -> String {
    let placed: Vec<_> =
        layout.placements().filter_map(|placement| layout.placed(placement.id).ok()).collect();
    let view_box = placed
        .iter()
        .map(|placed| placed.bounding_box())
        .reduce(|accumulated, bounding_box| accumulated.enclosing(&bounding_box))
        .unwrap_or(Rectangle { corner_a: Vector::ZERO, corner_b: Vector { x: 1., y: 1. } })
        .expanded(SCALE_WIDTH);
    let min = view_box.min_corner();
    let size = view_box.size();
    let paths = placed
        .iter()
        .map(|placed| {
            format!(
                "  <path id=\"placement-{}\" d=\"{}\" fill=\"none\" stroke=\"black\" />",
                placed.id().0,
                placed.outline()
            )
        })
        .join("\n");
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\">\n{paths}\n</svg>",
        min.x, min.y, size.x, size.y
    )
}
