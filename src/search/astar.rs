use crate::error::Result;
use crate::geometry::curve::Curve;
use crate::math::distance::distance;
use crate::math::JOIN_TOLERANCE;
use crate::topology::{Topology, VertexId};

use super::cancel::CancelToken;
use super::frontier::best_first;
use super::weights::EdgeWeights;
use super::{check_weight_count, CameFrom, PathMethod};

/// A* search guided by the straight-line distance to the target.
///
/// The heuristic only keeps the result optimal when no edge weighs less
/// than the distance between its two vertices, which holds for curve
/// lengths and chord lengths. For arbitrary weights use [`Dijkstra`].
///
/// [`Dijkstra`]: super::Dijkstra
#[derive(Debug, Clone)]
pub struct AStar<'a, C> {
    topology: &'a Topology<C>,
    weights: EdgeWeights,
    join_tolerance: f64,
}

impl<'a, C: Curve + Clone> AStar<'a, C> {
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

    /// Creates a search weighted by each edge's curve length.
    ///
    /// # Errors
    ///
    /// Returns an error if a curve reports a non-finite length.
    pub fn by_curve_length(topology: &'a Topology<C>) -> Result<Self> {
        Self::new(topology, EdgeWeights::per_edge(topology.measure_edge_lengths())?)
    }

    /// Creates a search weighted by the straight-line span of each edge.
    ///
    /// # Errors
    ///
    /// Returns an error if a vertex position is not finite.
    pub fn by_linear_distance(topology: &'a Topology<C>) -> Result<Self> {
        Self::new(
            topology,
            EdgeWeights::per_edge(topology.measure_edge_linear_distances())?,
        )
    }

    /// Sets the maximum gap tolerated when joining the walk's curves.
    #[must_use]
    pub fn with_join_tolerance(mut self, join_tolerance: f64) -> Self {
        self.join_tolerance = join_tolerance;
        self
    }
}

impl<C: Curve + Clone> PathMethod<C> for AStar<'_, C> {
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
        let target = *self.topology.point(to)?;
        let vertices = self.topology.vertices();
        let heuristic = |v: VertexId| distance(&vertices[v.index()].point, &target);
        best_first(self.topology, &self.weights, from, to, heuristic, cancel)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::{Arc, EdgeCurve, LineSegment};
    use crate::math::Point3;
    use crate::search::Dijkstra;
    use crate::topology::EdgeId;

    fn line(a: [f64; 3], b: [f64; 3]) -> EdgeCurve {
        LineSegment::new(Point3::from(a), Point3::from(b))
            .unwrap()
            .into()
    }

    fn vertex(top: &Topology<EdgeCurve>, x: f64, y: f64) -> VertexId {
        top.vertex_index_of(&Point3::new(x, y, 0.0)).unwrap()
    }

    /// 4x4 grid of unit links with the middle row knocked out between
    /// x = 1 and x = 2.
    fn grid() -> Topology<EdgeCurve> {
        let mut curves = Vec::new();
        for y in 0..4 {
            for x in 0..3 {
                if y == 1 && x == 1 {
                    continue;
                }
                let (x, y) = (f64::from(x), f64::from(y));
                curves.push(line([x, y, 0.0], [x + 1.0, y, 0.0]));
            }
        }
        for x in 0..4 {
            for y in 0..3 {
                let (x, y) = (f64::from(x), f64::from(y));
                curves.push(line([x, y, 0.0], [x, y + 1.0, 0.0]));
            }
        }
        Topology::new(curves, 0.0).unwrap()
    }

    #[test]
    fn matches_dijkstra_on_grid() {
        let top = grid();
        let lengths = EdgeWeights::per_edge(top.measure_edge_lengths()).unwrap();
        let astar = AStar::new(&top, lengths.clone()).unwrap();
        let dijkstra = Dijkstra::new(&top, lengths).unwrap();

        for from in 0..top.vertex_count() {
            for to in 0..top.vertex_count() {
                if from == to {
                    continue;
                }
                let (from, to) = (VertexId::new(from), VertexId::new(to));
                let a = astar.cross(from, to).unwrap().unwrap();
                let d = dijkstra.cross(from, to).unwrap().unwrap();
                assert!((a.length - d.length).abs() < 1e-9, "{from} -> {to}");
            }
        }
    }

    #[test]
    fn curve_length_prefers_straight_over_bulging_arc() {
        let arc = Arc::through_points(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        )
        .unwrap();
        let top = Topology::new(
            vec![
                arc.into(),
                line([0.0, 0.0, 0.0], [1.0, -0.5, 0.0]),
                line([1.0, -0.5, 0.0], [2.0, 0.0, 0.0]),
            ],
            1e-6,
        )
        .unwrap();
        let from = vertex(&top, 0.0, 0.0);
        let to = vertex(&top, 2.0, 0.0);

        let by_length = AStar::by_curve_length(&top).unwrap();
        let walk = by_length.cross(from, to).unwrap().unwrap();
        assert_eq!(walk.edges, vec![EdgeId::new(1), EdgeId::new(2)]);
        assert!((walk.length - 2.0 * 1.25_f64.sqrt()).abs() < 1e-9);

        // Measured by chord the arc is the shortest link.
        let by_chord = AStar::by_linear_distance(&top).unwrap();
        let walk = by_chord.cross(from, to).unwrap().unwrap();
        assert_eq!(walk.edges, vec![EdgeId::new(0)]);
        assert!((walk.length - 2.0).abs() < 1e-9);
        assert!((walk.curve.length() - std::f64::consts::PI).abs() < 1e-9);
    }

    #[test]
    fn unreachable_target_has_no_path() {
        let top = Topology::new(
            vec![
                line([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
                line([1.0, 0.0, 0.0], [1.0, 1.0, 0.0]),
                line([9.0, 0.0, 0.0], [9.0, 1.0, 0.0]),
            ],
            0.0,
        )
        .unwrap();
        let search = AStar::by_curve_length(&top).unwrap();
        let result = search
            .cross(vertex(&top, 0.0, 0.0), vertex(&top, 9.0, 1.0))
            .unwrap();
        assert!(result.is_none());
    }
}
