//! Renderer-agnostic description of an outline as a sequence of drawing commands.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{transform::AffineTransform, vector::Vector};

/// Direction in which an arc is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArcSweep {
    /// In direction of growing angles (clockwise on screen, since the y axis grows downwards).
    Positive,
    /// In direction of shrinking angles.
    Negative,
}

impl ArcSweep {
    /// The opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            ArcSweep::Positive => ArcSweep::Negative,
            ArcSweep::Negative => ArcSweep::Positive,
        }
    }
}

/// A single drawing command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    /// Start a new sub path at the point.
    MoveTo(Vector),
    /// Draw a line from the current point to the given point.
    LineTo(Vector),
    /// Draw a circular arc from the current point to `to`.
    ///
    /// Arcs never span more than half a circle.
    Arc {
        /// Center of the circle.
        center: Vector,
        /// Radius of the circle.
        radius: f64,
        /// End point of the arc.
        to: Vector,
        /// Direction of the arc.
        sweep: ArcSweep,
    },
    /// Draw a line from the current point to the start of the current sub path.
    Close,
}

impl PathCommand {
    /// Apply `transform` to all coordinates of the command.
    ///
    /// Radii are scaled by the square root of the absolute determinant,
    /// which is exact for rotations, translations and uniform scaling.
    /// Mirroring transformations reverse the direction of arcs.
    #[must_use]
    pub fn transformed(&self, transform: &AffineTransform) -> Self {
        match self {
            PathCommand::MoveTo(point) => PathCommand::MoveTo(transform.apply_to_point(*point)),
            PathCommand::LineTo(point) => PathCommand::LineTo(transform.apply_to_point(*point)),
            PathCommand::Arc { center, radius, to, sweep } => {
                let determinant = transform.a * transform.d - transform.b * transform.c;
                PathCommand::Arc {
                    center: transform.apply_to_point(*center),
                    radius: radius * determinant.abs().sqrt(),
                    to: transform.apply_to_point(*to),
                    sweep: if determinant < 0. { sweep.reversed() } else { *sweep },
                }
            },
            PathCommand::Close => PathCommand::Close,
        }
    }
}

/// An immutable outline, described by a sequence of [`PathCommand`]s.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Outline {
    /// The commands, in drawing order.
    commands: Vec<PathCommand>,
}

impl Outline {
    /// The drawing commands.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Is the outline empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All explicitly named points (sub path starts, line and arc end points, arc centers excluded).
    pub fn points(&self) -> impl Iterator<Item = Vector> + '_ {
        self.commands.iter().filter_map(|command| match command {
            PathCommand::MoveTo(point) | PathCommand::LineTo(point) => Some(*point),
            PathCommand::Arc { to, .. } => Some(*to),
            PathCommand::Close => None,
        })
    }

    /// Apply `transform` to all commands.
    #[must_use]
    pub fn transformed(&self, transform: &AffineTransform) -> Self {
        Outline { commands: self.commands.iter().map(|command| command.transformed(transform)).collect() }
    }

    /// Append all commands of `other`.
    pub fn append(&mut self, other: Outline) {
        self.commands.extend(other.commands);
    }
}

impl FromIterator<Outline> for Outline {
    fn from_iter<T: IntoIterator<Item = Outline>>(iter: T) -> Self {
        let mut outline = Outline::default();
        for part in iter {
            outline.append(part);
        }
        outline
    }
}

/// SVG path data, e.g. `M -40 -4.25 L 40 -4.25 L 40 4.25 L -40 4.25 Z`.
impl Display for Outline {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let mut separator = "";
        for command in &self.commands {
            write!(formatter, "{separator}")?;
            separator = " ";
            match command {
                PathCommand::MoveTo(Vector { x, y }) => write!(formatter, "M {x} {y}")?,
                PathCommand::LineTo(Vector { x, y }) => write!(formatter, "L {x} {y}")?,
                PathCommand::Arc { radius, to: Vector { x, y }, sweep, .. } => {
                    let flag = match sweep {
                        ArcSweep::Positive => 1,
                        ArcSweep::Negative => 0,
                    };
                    write!(formatter, "A {radius} {radius} 0 0 {flag} {x} {y}")?;
                },
                PathCommand::Close => write!(formatter, "Z")?,
            }
        }
        Ok(())
    }
}

/// Builder for an [`Outline`].
#[derive(Debug, Default)]
pub struct Builder {
    /// The commands collected so far.
    commands: Vec<PathCommand>,
}

impl Builder {
    /// Create a new, empty [`Builder`].
    #[must_use]
    pub fn new() -> Self {
        Builder::default()
    }

    /// Finalise and create the immutable outline.
    #[must_use]
    pub fn build(self) -> Outline {
        Outline { commands: self.commands }
    }

    /// Start a new sub path at `point`.
    pub fn move_to(&mut self, point: Vector) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(point));
        self
    }

    /// Draw a line from the current point to `target`.
    pub fn line_to(&mut self, target: Vector) -> &mut Self {
        self.commands.push(PathCommand::LineTo(target));
        self
    }

    /// Draw an arc around `center` from the current point to `target`.
    pub fn arc_to(&mut self, center: Vector, radius: f64, target: Vector, sweep: ArcSweep) -> &mut Self {
        self.commands.push(PathCommand::Arc { center, radius, to: target, sweep });
        self
    }

    /// Draw a line from the current point to the start of the current sub path.
    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Draw a closed polygon through all `corners`.
    ///
    /// Does nothing for an empty iterator.
    pub fn polygon(&mut self, corners: impl IntoIterator<Item = Vector>) -> &mut Self {
        let mut corners = corners.into_iter();
        if let Some(first) = corners.next() {
            let _ = self.move_to(first);
            for corner in corners {
                let _ = self.line_to(corner);
            }
            let _ = self.close();
        }
        self
    }
}
