use tracing::debug;

use crate::error::{Result, TopologyError};
use crate::geometry::curve::Curve;

use super::edge::{EdgeData, EdgeId};
use super::vertex::{VertexData, VertexId};
use super::weld::{weld_exact, weld_within, Welding};
use super::Topology;

/// Builds a [`Topology`] from an unordered list of curves.
///
/// Curve endpoints are welded into shared vertices (exactly when the
/// tolerance is zero, within the tolerance otherwise), one edge is created
/// per curve, and the vertex-to-edge adjacency is flattened into a single
/// array holding every edge twice.
#[derive(Debug, Clone, Copy)]
pub struct TopologyBuilder {
    tolerance: f64,
}

impl Default for TopologyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TopologyBuilder {
    /// Creates a builder that only welds exactly coincident endpoints.
    #[must_use]
    pub fn new() -> Self {
        Self { tolerance: 0.0 }
    }

    /// Sets the weld tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns the weld tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Builds the topology, taking ownership of the curves.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::InvalidArgument` if the tolerance is negative
    /// or not finite, if `curves` is empty, or if any curve is degenerate.
    pub fn build<C: Curve>(&self, curves: Vec<C>) -> Result<Topology<C>> {
        if !(self.tolerance >= 0.0 && self.tolerance.is_finite()) {
            return Err(TopologyError::InvalidArgument(format!(
                "tolerance must be a non-negative number, got {}",
                self.tolerance
            ))
            .into());
        }
        if curves.is_empty() {
            return Err(TopologyError::InvalidArgument(
                "there are 0 curves in the topology".to_owned(),
            )
            .into());
        }
        if let Some(index) = curves.iter().position(|c| !c.is_valid()) {
            return Err(TopologyError::InvalidArgument(format!(
                "curve {index} is degenerate or not finite"
            ))
            .into());
        }

        let endpoints: Vec<_> = curves
            .iter()
            .flat_map(|c| [c.start_point(), c.end_point()])
            .collect();

        let welding = if self.tolerance == 0.0 {
            weld_exact(&endpoints)
        } else {
            weld_within(&endpoints, self.tolerance)
        };

        let edges: Vec<EdgeData> = (0..curves.len())
            .map(|i| EdgeData {
                a: VertexId::new(welding.vertex_of[2 * i]),
                b: VertexId::new(welding.vertex_of[2 * i + 1]),
                curve: i,
            })
            .collect();

        let (vertices, vertex_edges, vertex_edges_forward) = build_adjacency(&welding, &edges);

        debug!(
            curves = curves.len(),
            vertices = vertices.len(),
            tolerance = self.tolerance,
            "built curve topology"
        );

        Ok(Topology {
            tolerance: self.tolerance,
            curves,
            vertices,
            edges,
            vertex_edges,
            vertex_edges_forward,
        })
    }
}

/// Lays out each vertex's incident edges contiguously.
///
/// Slots for vertex `v` start at the sum of the endpoint counts of all
/// vertices before it. A slot is marked forward when `v` is the edge's `a`.
fn build_adjacency(
    welding: &Welding,
    edges: &[EdgeData],
) -> (Vec<VertexData>, Vec<EdgeId>, Vec<bool>) {
    let mut vertices = Vec::with_capacity(welding.vertex_count());
    let mut start = 0;
    for (point, count) in welding.positions.iter().zip(&welding.counts) {
        vertices.push(VertexData::new(*point, start));
        start += count;
    }

    let mut vertex_edges = vec![EdgeId::new(0); edges.len() * 2];
    let mut vertex_edges_forward = vec![false; edges.len() * 2];

    for (index, edge) in edges.iter().enumerate() {
        for (vertex, forward) in [(edge.a, true), (edge.b, false)] {
            let data = &mut vertices[vertex.index()];
            let slot = data.edge_start + data.edge_count;
            vertex_edges[slot] = EdgeId::new(index);
            vertex_edges_forward[slot] = forward;
            data.edge_count += 1;
        }
    }

    (vertices, vertex_edges, vertex_edges_forward)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::{Arc, EdgeCurve, LineSegment};
    use crate::math::Point3;

    fn line(a: [f64; 3], b: [f64; 3]) -> EdgeCurve {
        LineSegment::new(Point3::from(a), Point3::from(b))
            .unwrap()
            .into()
    }

    /// Test-only curve that may be degenerate.
    #[derive(Debug, Clone)]
    struct RawCurve(Point3, Point3);

    impl Curve for RawCurve {
        fn start_point(&self) -> Point3 {
            self.0
        }
        fn end_point(&self) -> Point3 {
            self.1
        }
        fn length(&self) -> f64 {
            (self.1 - self.0).norm()
        }
        fn reversed(&self) -> Self {
            Self(self.1, self.0)
        }
    }

    #[test]
    fn square_shares_corners() {
        let curves = vec![
            line([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
            line([1.0, 0.0, 0.0], [1.0, 1.0, 0.0]),
            line([1.0, 1.0, 0.0], [0.0, 1.0, 0.0]),
            line([0.0, 1.0, 0.0], [0.0, 0.0, 0.0]),
        ];
        let top = TopologyBuilder::new().build(curves).unwrap();
        assert_eq!(top.vertex_count(), 4);
        assert_eq!(top.edge_count(), 4);
        for vertex in top.vertices() {
            assert_eq!(vertex.edge_count, 2);
        }
    }

    #[test]
    fn edge_slots_follow_curve_orientation() {
        let curves = vec![
            line([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
            line([2.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
        ];
        let top = TopologyBuilder::new().build(curves).unwrap();
        let middle = top.vertex_index_of(&Point3::new(1.0, 0.0, 0.0)).unwrap();
        let incident: Vec<_> = top.incident_edges(middle).unwrap().collect();
        assert_eq!(incident.len(), 2);
        // Both curves end at the middle vertex.
        assert!(incident.iter().all(|i| !i.forward));

        let left = top.vertex_index_of(&Point3::origin()).unwrap();
        let incident: Vec<_> = top.incident_edges(left).unwrap().collect();
        assert_eq!(incident.len(), 1);
        assert!(incident[0].forward);
        assert_eq!(incident[0].edge, EdgeId::new(0));
    }

    #[test]
    fn tolerance_welds_gapped_network() {
        let curves = vec![
            line([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
            line([1.0004, 0.0, 0.0], [2.0, 0.0, 0.0]),
        ];
        let exact = TopologyBuilder::new().build(curves.clone()).unwrap();
        assert_eq!(exact.vertex_count(), 4);

        let welded = TopologyBuilder::new()
            .with_tolerance(0.001)
            .build(curves)
            .unwrap();
        assert_eq!(welded.vertex_count(), 3);
        assert_eq!(
            welded.edge(EdgeId::new(0)).unwrap().b,
            welded.edge(EdgeId::new(1)).unwrap().a
        );
    }

    #[test]
    fn closed_arc_becomes_loop_edge() {
        let arc = Arc::new(
            Point3::origin(),
            1.0,
            crate::math::Vector3::z(),
            crate::math::Vector3::x(),
            0.0,
            std::f64::consts::TAU,
        )
        .unwrap();
        let top = TopologyBuilder::new()
            .with_tolerance(1e-9)
            .build(vec![EdgeCurve::from(arc)])
            .unwrap();
        assert_eq!(top.vertex_count(), 1);
        assert!(top.edge(EdgeId::new(0)).unwrap().is_loop());
        assert_eq!(top.vertices()[0].edge_count, 2);
    }

    #[test]
    fn empty_curves_fail() {
        let result = TopologyBuilder::new().build(Vec::<EdgeCurve>::new());
        assert!(result.is_err());
    }

    #[test]
    fn negative_tolerance_fails() {
        let curves = vec![line([0.0, 0.0, 0.0], [1.0, 0.0, 0.0])];
        assert!(TopologyBuilder::new()
            .with_tolerance(-0.1)
            .build(curves.clone())
            .is_err());
        assert!(TopologyBuilder::new()
            .with_tolerance(f64::NAN)
            .build(curves)
            .is_err());
    }

    #[test]
    fn degenerate_curve_fails() {
        let p = Point3::new(1.0, 1.0, 0.0);
        let curves = vec![RawCurve(Point3::origin(), p), RawCurve(p, p)];
        let err = TopologyBuilder::new().build(curves).unwrap_err();
        assert!(err.to_string().contains("curve 1"));
    }

    #[test]
    fn nan_curve_fails() {
        let curves = vec![RawCurve(Point3::origin(), Point3::new(f64::NAN, 0.0, 0.0))];
        assert!(TopologyBuilder::new().build(curves).is_err());
    }
}
