use crate::error::Result;
use crate::geometry::curve::Curve;
use crate::math::JOIN_TOLERANCE;
use crate::topology::{Topology, VertexId};

use super::cancel::CancelToken;
use super::frontier::best_first;
use super::weights::EdgeWeights;
use super::{check_weight_count, CameFrom, PathMethod};

/// Dijkstra's shortest path over a curve topology.
///
/// Works with any non-negative weights. With [`Dijkstra::hops`] it finds
/// the walk crossing the fewest edges.
#[derive(Debug, Clone)]
pub struct Dijkstra<'a, C> {
    topology: &'a Topology<C>,
    weights: EdgeWeights,
    join_tolerance: f64,
}

impl<'a, C: Curve + Clone> Dijkstra<'a, C> {
    /// Creates a search over `topology` with explicit edge weights.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::InvalidArgument` unless there is exactly one
    /// weight per edge.
    pub fn new(topology: &'a Topology<C>, weights: EdgeWeights) -> Result<Self> {
        check_weight_count(topology, &weights)?;
        Ok(Self {
            topology,
            weights,
            join_tolerance: JOIN_TOLERANCE,
        })
    }

    /// Creates a search where every edge costs one.
    #[must_use]
    pub fn hops(topology: &'a Topology<C>) -> Self {
        Self {
            topology,
            weights: EdgeWeights::hops(topology.edge_count()),
            join_tolerance: JOIN_TOLERANCE,
        }
    }

    /// Creates a search where every edge costs `value`.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::InvalidArgument` if `value` is negative or not finite.
    pub fn with_fixed(topology: &'a Topology<C>, value: f64) -> Result<Self> {
        Self::new(topology, EdgeWeights::fixed(value, topology.edge_count())?)
    }

    /// Sets the maximum gap tolerated when joining the walk's curves.
    #[must_use]
    pub fn with_join_tolerance(mut self, join_tolerance: f64) -> Self {
        self.join_tolerance = join_tolerance;
        self
    }
}

impl<C: Curve + Clone> PathMethod<C> for Dijkstra<'_, C> {
    fn topology(&self) -> &Topology<C> {
        self.topology
    }

    fn weights(&self) -> &EdgeWeights {
        &self.weights
    }

    fn join_tolerance(&self) -> f64 {
        self.join_tolerance
    }

    fn search(
        &self,
        from: VertexId,
        to: VertexId,
        cancel: Option<&CancelToken>,
    ) -> Result<Option<CameFrom>> {
        best_first(self.topology, &self.weights, from, to, |_| 0.0, cancel)
    }
}
