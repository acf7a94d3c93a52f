use tracing::{debug, warn};

use crate::error::Result;
use crate::geometry::curve::Curve;
use crate::math::{Point3, JOIN_TOLERANCE};
use crate::search::{AStar, Dijkstra, EdgeWeights, PathMethod, SearchMethod, Walk};
use crate::topology::Topology;

/// Parameters for [`ShortestWalk`].
#[derive(Debug, Clone, Copy)]
pub struct ShortestWalkParams {
    /// Distance within which curve endpoints are welded into one vertex.
    pub weld_tolerance: f64,
    /// Maximum gap tolerated when joining a walk's curves.
    pub join_tolerance: f64,
}

impl Default for ShortestWalkParams {
    fn default() -> Self {
        Self {
            weld_tolerance: 0.001,
            join_tolerance: JOIN_TOLERANCE,
        }
    }
}

/// Solves a batch of shortest walks over one curve network.
///
/// `lengths` chooses the edge weights:
/// - empty: each curve's length, searched with A*
/// - one value: that value for every edge, searched with Dijkstra
/// - several values: repeated (or cut) to the edge count; A* when no value
///   is shorter than its edge's chord, Dijkstra otherwise
///
/// Each query is a pair of points resolved to their closest vertices.
#[derive(Debug, Clone)]
pub struct ShortestWalk<C> {
    curves: Vec<C>,
    lengths: Vec<f64>,
    queries: Vec<(Point3, Point3)>,
    params: ShortestWalkParams,
}

impl<C: Curve + Clone> ShortestWalk<C> {
    /// Creates a new `ShortestWalk` operation with default parameters.
    #[must_use]
    pub fn new(curves: Vec<C>, lengths: Vec<f64>, queries: Vec<(Point3, Point3)>) -> Self {
        Self {
            curves,
            lengths,
            queries,
            params: ShortestWalkParams::default(),
        }
    }

    /// Replaces the parameters.
    #[must_use]
    pub fn with_params(mut self, params: ShortestWalkParams) -> Self {
        self.params = params;
        self
    }

    /// Builds the search the configured lengths call for.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::InvalidArgument` if a length is negative or not
    /// finite.
    pub fn search_method<'a>(&self, topology: &'a Topology<C>) -> Result<SearchMethod<'a, C>> {
        let method = match self.lengths.as_slice() {
            [] => SearchMethod::AStar(AStar::by_curve_length(topology)?),
            [value] => SearchMethod::Dijkstra(Dijkstra::with_fixed(topology, *value)?),
            values => {
                let weights = EdgeWeights::pattern(values.to_vec(), topology.edge_count())?;
                let admissible = weights
                    .iter()
                    .zip(topology.measure_edge_linear_distances())
                    .all(|(weight, chord)| weight >= chord);
                if admissible {
                    SearchMethod::AStar(AStar::new(topology, weights)?)
                } else {
                    warn!("edge lengths shorter than their chord, falling back to Dijkstra");
                    SearchMethod::Dijkstra(Dijkstra::new(topology, weights)?)
                }
            }
        };
        Ok(method.with_join_tolerance(self.params.join_tolerance))
    }

    /// Executes the operation, returning one slot per query.
    ///
    /// A slot is `None` when both points resolve to the same vertex or the
    /// two vertices are not connected.
    ///
    /// # Errors
    ///
    /// Returns an error if the network cannot be built (no curves, an
    /// invalid curve, a bad tolerance), a length is invalid, or a walk's
    /// curves cannot be joined.
    pub fn execute(&self) -> Result<Vec<Option<Walk<C>>>> {
        let topology = Topology::new(self.curves.clone(), self.params.weld_tolerance)?;
        let method = self.search_method(&topology)?;

        let mut walks = Vec::with_capacity(self.queries.len());
        for (index, (start, end)) in self.queries.iter().enumerate() {
            let from = topology.closest_vertex(start);
            let to = topology.closest_vertex(end);
            if from == to {
                debug!(query = index, vertex = %from, "query endpoints share a vertex");
                walks.push(None);
                continue;
            }
            walks.push(method.cross(from, to)?);
        }
        Ok(walks)
    }
}
