//! Connection points of a track.

use serde::{Deserialize, Serialize};

use trackplan_types::{angle::Angle, vector::Vector};

/// A connection point at the end of a track path.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Connection {
    /// Position of the connection.
    pub position: Vector,
    /// Tangent of the path at the connection, pointing into the path,
    /// as angle to the x axis (clockwise, y coordinates grow downwards).
    pub direction: Angle,
}
