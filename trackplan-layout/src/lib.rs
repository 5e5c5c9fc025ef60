//! Layouts of placed tracks: the track library, placements, snapping and drag gestures.

pub mod data;
pub mod error;
pub mod gesture;
pub mod layout;
pub mod placement;
pub mod snap;
