use std::fmt;

use crate::math::Point3;

/// Index of a welded vertex in a [`Topology`](super::Topology).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
    /// Wraps a raw vertex index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw vertex index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Data associated with a welded vertex.
///
/// `edge_start..edge_start + edge_count` is this vertex's slice of the
/// topology's flattened vertex-to-edge index.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// The 3D position of the vertex.
    pub point: Point3,
    /// First slot of this vertex in the flattened adjacency.
    pub edge_start: usize,
    /// Number of edge ends meeting at this vertex.
    pub edge_count: usize,
}

impl VertexData {
    /// Creates a vertex at the given point with an empty adjacency slice
    /// starting at `edge_start`.
    #[must_use]
    pub fn new(point: Point3, edge_start: usize) -> Self {
        Self {
            point,
            edge_start,
            edge_count: 0,
        }
    }

    /// Returns the range of adjacency slots owned by this vertex.
    #[must_use]
    pub fn slots(&self) -> std::ops::Range<usize> {
        self.edge_start..self.edge_start + self.edge_count
    }
}
