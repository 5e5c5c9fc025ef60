//! A single centerline segment of a track: a straight line or a circular arc.

// Like f64: worst case is a loss of precision.
#![allow(clippy::arithmetic_side_effects)]

use std::f64::consts::TAU;

use log::debug;
use serde::{Deserialize, Serialize};

use trackplan_types::{
    angle::{Angle, Trigonometry, FRAC_PI_2, PI},
    outline::{ArcSweep, Builder, Outline},
    rectangle::Rectangle,
    transform::AffineTransform,
    vector::Vector,
};

use crate::{connection::Connection, scale::HALF_SCALE_WIDTH};

/// The circle a curved path lies on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center of the circle.
    pub center: Vector,
    /// Radius of the circle.
    pub radius: f64,
}

/// A single centerline segment.
///
/// Curved paths have both end points on their [`Circle`].
/// Only a positive radius makes a path curved, other values are treated as straight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackPath {
    /// First end point.
    pub start: Vector,
    /// Second end point.
    pub end: Vector,
    /// The circle of a curved path, [`None`] for straight paths.
    pub circle: Option<Circle>,
}

impl TrackPath {
    /// A straight path of the given `length` from `(-length/2, 0)` to `(length/2, 0)`.
    #[must_use]
    pub fn straight(length: f64) -> Self {
        let half_length = length / 2.;
        TrackPath {
            start: Vector::new(-half_length, 0.),
            end: Vector::new(half_length, 0.),
            circle: None,
        }
    }

    /// A curved path with center `(0, radius)`, whose end points lie symmetric
    /// to the vertical axis through the center and subtend `sweep`.
    ///
    /// A curve without sweep degenerates to the point `(0, 0)`.
    #[must_use]
    pub fn curve(radius: f64, sweep: Angle) -> Self {
        let half_sweep = sweep / 2.;
        let x = radius * half_sweep.sin();
        let y = radius - radius * half_sweep.cos();
        TrackPath {
            start: Vector::new(-x, y),
            end: Vector::new(x, y),
            circle: Some(Circle { center: Vector::new(0., radius), radius }),
        }
    }

    /// The circle, if the path is curved (has a positive radius).
    #[must_use]
    pub fn curvature(&self) -> Option<Circle> {
        self.circle.filter(|circle| circle.radius > 0.)
    }

    /// Is the path curved?
    #[must_use]
    pub fn is_curved(&self) -> bool {
        self.curvature().is_some()
    }

    /// Both end points.
    #[must_use]
    pub fn endpoints(&self) -> [Vector; 2] {
        [self.start, self.end]
    }

    /// Tangent direction at one of the end points, pointing into the path.
    ///
    /// `point` is compared by exact value with [`start`](TrackPath::start),
    /// every other point is treated as [`end`](TrackPath::end).
    #[must_use]
    pub fn angle_at_point(&self, point: Vector) -> Angle {
        let at_start = point == self.start;
        if let Some(Circle { center, .. }) = self.curvature() {
            let radial = (point - center).direction();
            if at_start {
                radial + FRAC_PI_2
            } else {
                radial - FRAC_PI_2
            }
        } else if at_start {
            (self.end - self.start).direction()
        } else {
            (self.start - self.end).direction()
        }
    }

    /// The connections at both end points.
    #[must_use]
    pub fn connections(&self) -> [Connection; 2] {
        self.endpoints()
            .map(|position| Connection { position, direction: self.angle_at_point(position) })
    }

    /// Create a new path with all points mapped through `transform`.
    ///
    /// The radius is left unchanged, `transform` must only rotate and translate.
    #[must_use]
    pub fn transformed(&self, transform: &AffineTransform) -> Self {
        TrackPath {
            start: transform.apply_to_point(self.start),
            end: transform.apply_to_point(self.end),
            circle: self.circle.map(|Circle { center, radius }| Circle {
                center: transform.apply_to_point(center),
                radius,
            }),
        }
    }

    /// Angle between both end points as seen from the center, in `[0, π]`.
    ///
    /// `0` for straight paths.
    #[must_use]
    pub fn sweep(&self) -> Angle {
        let Some(Circle { center, .. }) = self.curvature() else {
            return Angle(0.);
        };
        let difference =
            ((self.start - center).direction() - (self.end - center).direction()).abs();
        if difference > PI {
            (difference - Angle(TAU)).abs()
        } else {
            difference
        }
    }

    /// Length of the centerline.
    #[must_use]
    pub fn length(&self) -> f64 {
        match self.curvature() {
            Some(Circle { radius, .. }) => radius * self.sweep().0,
            None => self.start.distance(&self.end),
        }
    }

    /// Direction in which the arc from `start` to `end` is drawn.
    fn arc_sweep(&self, center: Vector) -> ArcSweep {
        if (self.start - center).cross(&(self.end - center)) >= 0. {
            ArcSweep::Positive
        } else {
            ArcSweep::Negative
        }
    }

    /// Is the `direction` (seen from `center`) inside the arc from `start` to `end`?
    fn arc_contains_direction(&self, center: Vector, direction: Angle) -> bool {
        let start_direction = (self.start - center).direction();
        let offset = match self.arc_sweep(center) {
            ArcSweep::Positive => direction - start_direction,
            ArcSweep::Negative => start_direction - direction,
        };
        offset.0.rem_euclid(TAU) <= self.sweep().0
    }

    /// The outline: a ribbon with half width [`HALF_SCALE_WIDTH`] around the centerline.
    #[must_use]
    pub fn outline(&self) -> Outline {
        match self.curvature() {
            Some(circle) => self.curve_outline(circle),
            None => self.straight_outline(),
        }
    }

    /// A closed rectangle around a straight centerline.
    fn straight_outline(&self) -> Outline {
        let direction = self.end - self.start;
        let half_length = direction.length() / 2.;
        let midpoint = (self.start + self.end) / 2.;
        let transform =
            AffineTransform::identity().translate_by(midpoint).rotate_from_vector(direction.x, direction.y);
        let mut builder = Builder::new();
        let _ = builder.polygon(
            [
                Vector::new(-half_length, -HALF_SCALE_WIDTH),
                Vector::new(half_length, -HALF_SCALE_WIDTH),
                Vector::new(half_length, HALF_SCALE_WIDTH),
                Vector::new(-half_length, HALF_SCALE_WIDTH),
            ]
            .map(|corner| transform.apply_to_point(corner)),
        );
        builder.build()
    }

    /// A ring segment bounded by two concentric arcs of radius `radius ± HALF_SCALE_WIDTH`,
    /// closed by straight caps at both ends.
    fn curve_outline(&self, Circle { center, radius }: Circle) -> Outline {
        let outer = radius + HALF_SCALE_WIDTH;
        let inner = radius - HALF_SCALE_WIDTH;
        let start_unit = (self.start - center).unit();
        let end_unit = (self.end - center).unit();
        let sweep = self.arc_sweep(center);
        debug!("curve outline around {center:?}, radius {radius}, {sweep:?}");
        let mut builder = Builder::new();
        let _ = builder
            .move_to(center + start_unit * outer)
            .arc_to(center, outer, center + end_unit * outer, sweep)
            .line_to(center + end_unit * inner)
            .arc_to(center, inner, center + start_unit * inner, sweep.reversed())
            .close();
        builder.build()
    }

    /// Is `point` on the ribbon around the centerline (boundary included)?
    #[must_use]
    pub fn contains(&self, point: Vector) -> bool {
        if let Some(Circle { center, radius }) = self.curvature() {
            let relative = point - center;
            (relative.length() - radius).abs() <= HALF_SCALE_WIDTH
                && self.arc_contains_direction(center, relative.direction())
        } else {
            let direction = self.end - self.start;
            let length = direction.length();
            let unit = direction / length;
            let relative = point - (self.start + self.end) / 2.;
            relative.dot(&unit).abs() <= length / 2.
                && relative.cross(&unit).abs() <= HALF_SCALE_WIDTH
        }
    }

    /// Axis aligned bounding box of the [outline](TrackPath::outline).
    #[must_use]
    pub fn bounding_box(&self) -> Rectangle {
        let outline = self.outline();
        let mut points: Vec<Vector> = outline.points().collect();
        if let Some(Circle { center, radius }) = self.curvature() {
            // extreme points of the outer arc
            let outer = radius + HALF_SCALE_WIDTH;
            for quarter in [0., 1., 2., 3.] {
                let direction = FRAC_PI_2 * quarter;
                if self.arc_contains_direction(center, direction) {
                    points.push(center + Vector::polar(outer, direction));
                }
            }
        }
        Rectangle::from_points(points.into_iter()).unwrap_or(Rectangle {
            corner_a: self.start,
            corner_b: self.end,
        })
    }
}
