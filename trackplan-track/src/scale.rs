//! Model scales and the fixed outline width.

use serde::{Deserialize, Serialize};

/// Width of a track outline (tie length), in layout units.
pub const SCALE_WIDTH: f64 = 8.5;

/// Half of [`SCALE_WIDTH`], distance between centerline and outline edge.
pub const HALF_SCALE_WIDTH: f64 = 4.25;

/// A model scale, given as ratio between prototype and model size.
///
/// Passed explicitly wherever model dimensions have to be converted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    /// `ratio` prototype units correspond to one model unit.
    pub ratio: f64,
}

// Scale names are conventionally single letters.
#[allow(clippy::min_ident_chars)]
impl Scale {
    /// O scale, 1:45.
    pub const O: Scale = Scale { ratio: 45. };
    /// HO scale, 1:87.
    pub const HO: Scale = Scale { ratio: 87. };
    /// N scale, 1:160.
    pub const N: Scale = Scale { ratio: 160. };

    /// All known scales with their names.
    pub const PRESETS: [(&'static str, Scale); 3] =
        [("O", Scale::O), ("HO", Scale::HO), ("N", Scale::N)];

    /// Look up a known scale by its name (case insensitive).
    #[must_use]
    pub fn by_name(name: &str) -> Option<Scale> {
        Scale::PRESETS
            .iter()
            .find(|(preset, _scale)| preset.eq_ignore_ascii_case(name))
            .map(|(_preset, scale)| *scale)
    }

    /// Convert a model length in inches into prototype feet, the unit of a layout.
    #[must_use]
    pub fn inches_to_scale_feet(&self, inches: f64) -> f64 {
        self.ratio * inches / 12.
    }
}

impl Default for Scale {
    fn default() -> Self {
        Scale::N
    }
}
