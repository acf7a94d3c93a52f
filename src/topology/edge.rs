use std::fmt;

use super::vertex::VertexId;

/// Index of an edge in a [`Topology`](super::Topology). Edge `i` is built
/// from input curve `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(usize);

impl EdgeId {
    /// Wraps a raw edge index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw edge index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl From<usize> for EdgeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Data associated with a topological edge.
///
/// An edge connects the welded vertices at the start (`a`) and end (`b`)
/// of its source curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeData {
    /// Vertex at the start of the source curve.
    pub a: VertexId,
    /// Vertex at the end of the source curve.
    pub b: VertexId,
    /// Index of the source curve in the input list.
    pub curve: usize,
}

impl EdgeData {
    /// Returns the vertex at the requested end of the source curve.
    #[must_use]
    pub fn endpoint(&self, start: bool) -> VertexId {
        if start {
            self.a
        } else {
            self.b
        }
    }

    /// Returns the vertex across the edge from `vertex`, or `None` if
    /// `vertex` is not one of its endpoints.
    #[must_use]
    pub fn other_vertex(&self, vertex: VertexId) -> Option<VertexId> {
        if vertex == self.a {
            Some(self.b)
        } else if vertex == self.b {
            Some(self.a)
        } else {
            None
        }
    }

    /// Returns whether both ends of the edge weld to the same vertex.
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }
}

/// An edge end as seen from one of its vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncidentEdge {
    /// The edge identifier.
    pub edge: EdgeId,
    /// If `true`, the vertex is the edge's start, so leaving the vertex along
    /// this edge follows the curve's natural direction (start → end).
    pub forward: bool,
}
