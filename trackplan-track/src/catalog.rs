//! The standard library of common sectional track pieces.

use trackplan_types::angle::{Angle, Degrees};

use crate::{
    scale::Scale,
    track::{Side, Track, TrackId},
};

/*
Dimensions in model inches, independent of the scale
Straight
    5", 10", 2.5"
Curve
    R9.75" 30°, R11" 30°, R11" 15°, R19" 15°
Turnout
    #4 5" L/R, #6 7.5" L/R
Curved turnout
    R11"/R9.75" 15° L/R
Wye
    #4 5"
Crossing
    5" 30°
*/
const STRAIGHTS: [f64; 3] = [5., 10., 2.5];
const CURVES: [(f64, f64); 4] = [(9.75, 30.), (11., 30.), (11., 15.), (19., 15.)];
const TURNOUTS: [(f64, f64); 2] = [(5., 4.), (7.5, 6.)];
const CURVED_TURNOUT: (f64, f64, f64) = (11., 9.75, 15.);
const WYE: (f64, f64) = (5., 4.);
const CROSSING: (f64, f64) = (5., 30.);

/// All standard pieces for the given `scale`, with consecutive ids starting at 1.
///
/// Lengths and radii are converted from model inches to scale feet.
#[must_use]
pub fn standard_library(scale: &Scale) -> Vec<Track> {
    let feet = |inches: f64| scale.inches_to_scale_feet(inches);
    let mut tracks = Vec::new();
    for length in STRAIGHTS {
        tracks.push(Track::straight(feet(length)).with_label(format!("Straight {length}\"")));
    }
    for (radius, degrees) in CURVES {
        tracks.push(
            Track::curve(feet(radius), Angle::from(Degrees(degrees)))
                .with_label(format!("Curve R{radius}\" {degrees}°")),
        );
    }
    for (length, number) in TURNOUTS {
        for side in [Side::Left, Side::Right] {
            tracks.push(
                Track::turnout(feet(length), number, side)
                    .with_label(format!("{side:?} turnout #{number} {length}\"")),
            );
        }
    }
    let (main_radius, branch_radius, degrees) = CURVED_TURNOUT;
    for side in [Side::Left, Side::Right] {
        tracks.push(
            Track::curve_turnout(
                feet(main_radius),
                feet(branch_radius),
                Angle::from(Degrees(degrees)),
                side,
            )
            .with_label(format!(
                "{side:?} curved turnout R{main_radius}\"/R{branch_radius}\" {degrees}°"
            )),
        );
    }
    let (length, number) = WYE;
    tracks.push(Track::wye_turnout(feet(length), number).with_label(format!("Wye #{number} {length}\"")));
    let (length, degrees) = CROSSING;
    tracks.push(
        Track::crossing(feet(length), Angle::from(Degrees(degrees)))
            .with_label(format!("Crossing {length}\" {degrees}°")),
    );
    for (id, track) in (1..).zip(tracks.iter_mut()) {
        track.set_id(TrackId(id));
    }
    tracks
}

#[cfg(test)]
mod test;
