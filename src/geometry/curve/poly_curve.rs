use crate::error::{GeometryError, Result};
use crate::math::distance::distance;
use crate::math::Point3;

use super::Curve;

/// A chain of curves where each segment starts where the previous one ends.
///
/// Produced by joining the curves of a walk in travel order.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyCurve<C> {
    segments: Vec<C>,
}

impl<C: Curve> PolyCurve<C> {
    /// Joins `curves` into one continuous chain.
    ///
    /// Each curve must start within `tolerance` of the end of the curve
    /// before it. Curves are not reoriented; flip them before joining.
    ///
    /// # Errors
    ///
    /// Returns an error if `curves` is empty or two consecutive curves are
    /// further apart than `tolerance`.
    pub fn by_joined_curves(curves: Vec<C>, tolerance: f64) -> Result<Self> {
        if curves.is_empty() {
            return Err(GeometryError::EmptyJoin.into());
        }

        for (index, pair) in curves.windows(2).enumerate() {
            let gap = distance(&pair[0].end_point(), &pair[1].start_point());
            if gap > tolerance {
                return Err(GeometryError::JoinGap {
                    index: index + 1,
                    gap,
                    tolerance,
                }
                .into());
            }
        }

        Ok(Self { segments: curves })
    }

    /// Returns the joined segments in travel order.
    #[must_use]
    pub fn segments(&self) -> &[C] {
        &self.segments
    }

    /// Returns the number of joined segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Consumes the chain and returns its segments.
    #[must_use]
    pub fn into_segments(self) -> Vec<C> {
        self.segments
    }
}

impl<C: Curve> Curve for PolyCurve<C> {
    // `by_joined_curves` guarantees at least one segment.
    fn start_point(&self) -> Point3 {
        self.segments
            .first()
            .map_or_else(Point3::origin, C::start_point)
    }

    fn end_point(&self) -> Point3 {
        self.segments
            .last()
            .map_or_else(Point3::origin, C::end_point)
    }

    fn length(&self) -> f64 {
        self.segments.iter().map(C::length).sum()
    }

    fn reversed(&self) -> Self {
        Self {
            segments: self.segments.iter().rev().map(C::reversed).collect(),
        }
    }
}
