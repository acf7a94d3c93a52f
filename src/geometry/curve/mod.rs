mod arc;
mod line;
mod poly_curve;

pub use arc::Arc;
pub use line::LineSegment;
pub use poly_curve::PolyCurve;

use crate::math::{Point3, TOLERANCE};

/// Trait for bounded curves that can take part in a curve network.
///
/// Topology construction only needs the two endpoints and the length;
/// path reconstruction additionally needs to flip a curve so that it runs
/// in the direction of travel.
pub trait Curve {
    /// Returns the point where the curve starts.
    fn start_point(&self) -> Point3;

    /// Returns the point where the curve ends.
    fn end_point(&self) -> Point3;

    /// Returns the arc length of the curve.
    fn length(&self) -> f64;

    /// Returns a copy of this curve running from its end to its start.
    #[must_use]
    fn reversed(&self) -> Self
    where
        Self: Sized;

    /// Returns whether the curve can be used as a network edge: finite
    /// endpoints and a finite, non-zero length.
    fn is_valid(&self) -> bool {
        let start = self.start_point();
        let end = self.end_point();
        let length = self.length();
        start.iter().chain(end.iter()).all(|c| c.is_finite())
            && length.is_finite()
            && length > TOLERANCE
    }
}

/// A network curve: either a straight segment or a circular arc.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeCurve {
    /// A line segment.
    Line(LineSegment),
    /// A circular arc.
    Arc(Arc),
}

impl Curve for EdgeCurve {
    fn start_point(&self) -> Point3 {
        match self {
            Self::Line(line) => line.start_point(),
            Self::Arc(arc) => arc.start_point(),
        }
    }

    fn end_point(&self) -> Point3 {
        match self {
            Self::Line(line) => line.end_point(),
            Self::Arc(arc) => arc.end_point(),
        }
    }

    fn length(&self) -> f64 {
        match self {
            Self::Line(line) => line.length(),
            Self::Arc(arc) => arc.length(),
        }
    }

    fn reversed(&self) -> Self {
        match self {
            Self::Line(line) => Self::Line(line.reversed()),
            Self::Arc(arc) => Self::Arc(arc.reversed()),
        }
    }
}

impl From<LineSegment> for EdgeCurve {
    fn from(line: LineSegment) -> Self {
        Self::Line(line)
    }
}

impl From<Arc> for EdgeCurve {
    fn from(arc: Arc) -> Self {
        Self::Arc(arc)
    }
}
