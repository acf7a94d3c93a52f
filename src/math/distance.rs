//! Point distance utilities shared by endpoint welding and the A* heuristic.
use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use super::Point3;

/// Outcome of comparing a candidate point against a weld seed.
///
/// Candidates are visited in ascending X order, so a candidate whose X lies
/// beyond the tolerance ends the sweep for that seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceState {
    /// Within tolerance: weld to the seed.
    InTolerance,
    /// Too far away, but later candidates may still be close.
    OutOfToleranceAndContinue,
    /// Too far away in X; no later candidate can be within tolerance.
    OutOfToleranceAndStop,
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point3, b: &Point3) -> f64 {
    nalgebra::distance(a, b)
}

/// Tests whether `candidate` lies within `tolerance` of `seed`.
///
/// Rejects on the X gap first, then the Y gap, and only then compares the
/// squared 3D distance against `sq_tolerance`. `candidate` must not sort
/// before `seed` in X.
#[must_use]
pub fn points_in_tolerance(
    seed: &Point3,
    candidate: &Point3,
    tolerance: f64,
    sq_tolerance: f64,
) -> ToleranceState {
    let dx = candidate.x - seed.x;
    if dx > tolerance {
        return ToleranceState::OutOfToleranceAndStop;
    }
    let dy = candidate.y - seed.y;
    if dy.abs() > tolerance {
        return ToleranceState::OutOfToleranceAndContinue;
    }
    let dz = candidate.z - seed.z;
    if dx * dx + dy * dy + dz * dz <= sq_tolerance {
        ToleranceState::InTolerance
    } else {
        ToleranceState::OutOfToleranceAndContinue
    }
}

/// Orders points lexicographically by X, then Y, then Z.
///
/// `-0.0` and `0.0` compare equal, so exactly coincident points always
/// end up adjacent after sorting.
#[must_use]
pub fn lexicographic_cmp(a: &Point3, b: &Point3) -> Ordering {
    let key = |p: &Point3| (OrderedFloat(p.x), OrderedFloat(p.y), OrderedFloat(p.z));
    key(a).cmp(&key(b))
}
