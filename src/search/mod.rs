mod astar;
mod cancel;
mod dijkstra;
mod frontier;
mod mode;
mod reconstruct;
mod weights;

pub use astar::AStar;
pub use cancel::CancelToken;
pub use dijkstra::Dijkstra;
pub use mode::{SearchMethod, SearchMode};
pub use weights::EdgeWeights;

use tracing::debug;

use crate::error::{Result, SearchError};
use crate::geometry::curve::{Curve, PolyCurve};
use crate::math::Point3;
use crate::topology::{EdgeId, Topology, VertexId};

use reconstruct::reconstruct_path;

/// Predecessor of each vertex on the best known route from the source.
pub type CameFrom = Vec<Option<VertexId>>;

/// A shortest walk through a curve network.
#[derive(Debug, Clone, PartialEq)]
pub struct Walk<C> {
    /// The walk's curves joined in travel order.
    pub curve: PolyCurve<C>,
    /// Visited vertices, source first and target last.
    pub nodes: Vec<VertexId>,
    /// Traversed edges; `edges[i]` links `nodes[i]` to `nodes[i + 1]`.
    pub edges: Vec<EdgeId>,
    /// Whether each edge is traversed along its curve (start → end).
    pub forward: Vec<bool>,
    /// Sum of the traversed edges' weights.
    pub length: f64,
}

/// Shortest-walk search over a [`Topology`] with one weight per edge.
///
/// Implementors only provide [`search`](Self::search); argument checks and
/// walk reconstruction are shared. Searches never mutate the topology, so a
/// method can serve concurrent `cross` calls.
pub trait PathMethod<C: Curve + Clone> {
    /// Returns the topology being searched.
    fn topology(&self) -> &Topology<C>;

    /// Returns the edge weights.
    fn weights(&self) -> &EdgeWeights;

    /// Returns the maximum gap tolerated when joining the walk's curves.
    ///
    /// Reconstruction widens it to twice the topology's weld tolerance when
    /// that is larger.
    fn join_tolerance(&self) -> f64;

    /// Runs the search and returns the predecessor array, or `None` if `to`
    /// cannot be reached from `from`.
    ///
    /// # Errors
    ///
    /// Returns an error if a vertex is out of range or the search is cancelled.
    fn search(
        &self,
        from: VertexId,
        to: VertexId,
        cancel: Option<&CancelToken>,
    ) -> Result<Option<CameFrom>>;

    /// Finds the shortest walk from `from` to `to`.
    ///
    /// Returns `Ok(None)` when the two vertices are not connected.
    ///
    /// # Errors
    ///
    /// - `SearchError::OutOfRange` if either vertex does not exist
    /// - `SearchError::InvalidArgument` if `from == to`
    /// - `GeometryError::JoinGap` if the walk's curves cannot be joined
    fn cross(&self, from: VertexId, to: VertexId) -> Result<Option<Walk<C>>> {
        cross_impl(self, from, to, None)
    }

    /// Like [`cross`](Self::cross), polling `cancel` before each vertex is
    /// expanded.
    ///
    /// # Errors
    ///
    /// As [`cross`](Self::cross), plus `SearchError::Cancelled`.
    fn cross_with_cancel(
        &self,
        from: VertexId,
        to: VertexId,
        cancel: &CancelToken,
    ) -> Result<Option<Walk<C>>> {
        cross_impl(self, from, to, Some(cancel))
    }

    /// Finds the shortest walk between the vertices closest to two points.
    ///
    /// # Errors
    ///
    /// As [`cross`](Self::cross); both points resolving to the same vertex
    /// is `SearchError::InvalidArgument`.
    fn cross_points(&self, from: &Point3, to: &Point3) -> Result<Option<Walk<C>>> {
        let topology = self.topology();
        let (from, to) = (topology.closest_vertex(from), topology.closest_vertex(to));
        self.cross(from, to)
    }
}

fn cross_impl<C, M>(
    method: &M,
    from: VertexId,
    to: VertexId,
    cancel: Option<&CancelToken>,
) -> Result<Option<Walk<C>>>
where
    C: Curve + Clone,
    M: PathMethod<C> + ?Sized,
{
    check_vertices(method.topology().vertex_count(), from, to)?;
    let Some(came_from) = method.search(from, to, cancel)? else {
        debug!(%from, %to, "no walk between vertices");
        return Ok(None);
    };
    reconstruct_path(
        method.topology(),
        method.weights(),
        &came_from,
        to,
        method.join_tolerance(),
    )
    .map(Some)
}

/// Checks that both vertices exist and differ.
pub(crate) fn check_vertices(
    vertex_count: usize,
    from: VertexId,
    to: VertexId,
) -> std::result::Result<(), SearchError> {
    for (what, id) in [("from", from), ("to", to)] {
        if id.index() >= vertex_count {
            return Err(SearchError::OutOfRange {
                what,
                index: id.index(),
                len: vertex_count,
            });
        }
    }
    if from == to {
        return Err(SearchError::InvalidArgument(
            "walking indices from and to are the same".to_owned(),
        ));
    }
    Ok(())
}

/// Checks that `weights` holds exactly one value per edge of `topology`.
pub(crate) fn check_weight_count<C: Curve>(
    topology: &Topology<C>,
    weights: &EdgeWeights,
) -> std::result::Result<(), SearchError> {
    if weights.len() == topology.edge_count() {
        Ok(())
    } else {
        Err(SearchError::InvalidArgument(format!(
            "one distance per edge required: got {} for {} edges",
            weights.len(),
            topology.edge_count()
        )))
    }
}
