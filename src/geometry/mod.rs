pub mod curve;

pub use curve::{Arc, Curve, EdgeCurve, LineSegment, PolyCurve};
