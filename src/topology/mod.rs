pub mod builder;
pub mod edge;
pub mod vertex;
pub mod weld;

pub use builder::TopologyBuilder;
pub use edge::{EdgeData, EdgeId, IncidentEdge};
pub use vertex::{VertexData, VertexId};

use crate::error::TopologyError;
use crate::geometry::curve::Curve;
use crate::math::distance::distance;
use crate::math::Point3;

/// Vertex/edge graph over a welded curve network.
///
/// Read-only once built. Vertices and edges are addressed by dense indices;
/// edge `i` always comes from input curve `i`. The adjacency of every vertex
/// is a contiguous slice of one flattened array holding each edge twice,
/// once per endpoint.
#[derive(Debug, Clone)]
pub struct Topology<C> {
    pub(crate) tolerance: f64,
    pub(crate) curves: Vec<C>,
    pub(crate) vertices: Vec<VertexData>,
    pub(crate) edges: Vec<EdgeData>,
    pub(crate) vertex_edges: Vec<EdgeId>,
    pub(crate) vertex_edges_forward: Vec<bool>,
}

impl<C: Curve> Topology<C> {
    /// Builds a topology welding endpoints within `tolerance`.
    ///
    /// # Errors
    ///
    /// See [`TopologyBuilder::build`].
    pub fn new(curves: Vec<C>, tolerance: f64) -> crate::error::Result<Self> {
        TopologyBuilder::new().with_tolerance(tolerance).build(curves)
    }

    /// Returns the weld tolerance used to build this topology.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the number of welded vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges (equal to the number of input curves).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns all vertices in index order.
    #[must_use]
    pub fn vertices(&self) -> &[VertexData] {
        &self.vertices
    }

    /// Returns all edges in index order.
    #[must_use]
    pub fn edges(&self) -> &[EdgeData] {
        &self.edges
    }

    /// Returns the input curves in their original order.
    #[must_use]
    pub fn curves(&self) -> &[C] {
        &self.curves
    }

    /// Returns the vertex data, or an error if the index is out of range.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::OutOfRange` for an unknown vertex.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id.index())
            .ok_or(TopologyError::OutOfRange {
                what: "vertex",
                index: id.index(),
                len: self.vertices.len(),
            })
    }

    /// Returns the position of a vertex.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::OutOfRange` for an unknown vertex.
    pub fn point(&self, id: VertexId) -> Result<&Point3, TopologyError> {
        self.vertex(id).map(|v| &v.point)
    }

    /// Returns the edge data, or an error if the index is out of range.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::OutOfRange` for an unknown edge.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, TopologyError> {
        self.edges.get(id.index()).ok_or(TopologyError::OutOfRange {
            what: "edge",
            index: id.index(),
            len: self.edges.len(),
        })
    }

    /// Returns the source curve of an edge.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::OutOfRange` for an unknown edge.
    pub fn curve(&self, id: EdgeId) -> Result<&C, TopologyError> {
        let edge = self.edge(id)?;
        self.curves.get(edge.curve).ok_or(TopologyError::OutOfRange {
            what: "curve",
            index: edge.curve,
            len: self.curves.len(),
        })
    }

    /// Iterates the edge ends meeting at `id`.
    ///
    /// A loop edge shows up twice: once forward, once backward.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::OutOfRange` for an unknown vertex.
    pub fn incident_edges(
        &self,
        id: VertexId,
    ) -> Result<impl Iterator<Item = IncidentEdge> + '_, TopologyError> {
        let slots = self.vertex(id)?.slots();
        Ok(slots.map(move |slot| IncidentEdge {
            edge: self.vertex_edges[slot],
            forward: self.vertex_edges_forward[slot],
        }))
    }

    /// Returns the total number of adjacency slots (twice the edge count).
    #[must_use]
    pub fn adjacency_len(&self) -> usize {
        self.vertex_edges.len()
    }

    /// Finds the first vertex within the weld tolerance of `position`.
    ///
    /// With a zero tolerance only an exactly coincident vertex matches.
    #[must_use]
    pub fn vertex_index_of(&self, position: &Point3) -> Option<VertexId> {
        self.vertices
            .iter()
            .position(|v| distance(&v.point, position) <= self.tolerance)
            .map(VertexId::new)
    }

    /// Returns the vertex closest to `position`. Ties go to the lower index.
    #[must_use]
    pub fn closest_vertex(&self, position: &Point3) -> VertexId {
        let mut best = 0;
        let mut best_distance = f64::INFINITY;
        for (index, vertex) in self.vertices.iter().enumerate() {
            let d = distance(&vertex.point, position);
            if d < best_distance {
                best = index;
                best_distance = d;
            }
        }
        VertexId::new(best)
    }

    /// Straight-line distance between the two vertices of an edge.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::OutOfRange` for an unknown edge.
    pub fn linear_distance_at(&self, id: EdgeId) -> Result<f64, TopologyError> {
        let edge = self.edge(id)?;
        Ok(distance(self.point(edge.a)?, self.point(edge.b)?))
    }

    /// Measures the curve length of every edge, in edge order.
    #[must_use]
    pub fn measure_edge_lengths(&self) -> Vec<f64> {
        self.edges
            .iter()
            .map(|e| self.curves[e.curve].length())
            .collect()
    }

    /// Measures the straight-line distance spanned by every edge, in edge order.
    #[must_use]
    pub fn measure_edge_linear_distances(&self) -> Vec<f64> {
        self.edges
            .iter()
            .map(|e| {
                distance(
                    &self.vertices[e.a.index()].point,
                    &self.vertices[e.b.index()].point,
                )
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::geometry::curve::{Arc, EdgeCurve, LineSegment};

    fn line(a: [f64; 3], b: [f64; 3]) -> EdgeCurve {
        LineSegment::new(Point3::from(a), Point3::from(b))
            .unwrap()
            .into()
    }

    fn triangle() -> Topology<EdgeCurve> {
        Topology::new(
            vec![
                line([0.0, 0.0, 0.0], [3.0, 0.0, 0.0]),
                line([0.0, 0.0, 0.0], [0.0, 4.0, 0.0]),
                line([3.0, 0.0, 0.0], [0.0, 4.0, 0.0]),
            ],
            0.0,
        )
        .unwrap()
    }

    #[test]
    fn adjacency_holds_every_edge_twice() {
        let top = triangle();
        assert_eq!(top.adjacency_len(), 2 * top.edge_count());
        let total: usize = top.vertices().iter().map(|v| v.edge_count).sum();
        assert_eq!(total, 2 * top.edge_count());
        for index in 0..top.vertex_count() {
            let id = VertexId::new(index);
            for incident in top.incident_edges(id).unwrap() {
                let edge = top.edge(incident.edge).unwrap();
                assert!(edge.a == id || edge.b == id);
                assert_eq!(incident.forward, edge.a == id);
            }
        }
    }

    #[test]
    fn vertex_lookup_exact() {
        let top = triangle();
        assert!(top.vertex_index_of(&Point3::new(3.0, 0.0, 0.0)).is_some());
        assert!(top.vertex_index_of(&Point3::new(3.0, 0.0, 1e-12)).is_none());
    }

    #[test]
    fn vertex_lookup_within_tolerance() {
        let top = Topology::new(vec![line([0.0, 0.0, 0.0], [1.0, 0.0, 0.0])], 0.01).unwrap();
        let found = top.vertex_index_of(&Point3::new(1.005, 0.0, 0.0)).unwrap();
        assert_eq!(top.point(found).unwrap(), &Point3::new(1.0, 0.0, 0.0));
        assert!(top.vertex_index_of(&Point3::new(1.02, 0.0, 0.0)).is_none());
    }

    #[test]
    fn closest_vertex_picks_nearest() {
        let top = triangle();
        let id = top.closest_vertex(&Point3::new(2.5, 0.4, 0.0));
        assert_eq!(top.point(id).unwrap(), &Point3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn measures_lengths_and_chords() {
        let arc = Arc::through_points(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        )
        .unwrap();
        let top = Topology::new(
            vec![line([0.0, 0.0, 0.0], [2.0, 0.0, 0.0]), arc.into()],
            0.0001,
        )
        .unwrap();
        let lengths = top.measure_edge_lengths();
        let chords = top.measure_edge_linear_distances();
        assert_relative_eq!(lengths[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(lengths[1], std::f64::consts::PI, epsilon = 1e-9);
        assert_relative_eq!(chords[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(chords[1], 2.0, epsilon = 1e-9);
        assert_relative_eq!(top.linear_distance_at(EdgeId::new(1)).unwrap(), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn out_of_range_lookups_fail() {
        let top = triangle();
        assert!(top.vertex(VertexId::new(3)).is_err());
        assert!(top.edge(EdgeId::new(3)).is_err());
        assert!(top.incident_edges(VertexId::new(9)).is_err());
        assert!(top.curve(EdgeId::new(2)).is_ok());
    }
}
