use thiserror::Error;

/// Top-level error type for curve-network construction and search.
#[derive(Debug, Error)]
pub enum CurvenetError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Errors related to curve geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("cannot join an empty curve list")]
    EmptyJoin,

    #[error("curve {index} starts {gap} away from the previous end (tolerance {tolerance})")]
    JoinGap {
        index: usize,
        gap: f64,
        tolerance: f64,
    },
}

/// Errors related to building and querying a curve topology.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{what} index {index} is out of range (length {len})")]
    OutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// Two consecutive path vertices share no edge. Only a corrupted
    /// topology can produce this.
    #[error("vertex {from} is not linked to vertex {to}")]
    EdgeNotFound { from: usize, to: usize },
}

/// Errors related to shortest-walk searches.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{what} index {index} is out of range (length {len})")]
    OutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("search was cancelled")]
    Cancelled,
}

/// Convenience type alias for results using [`CurvenetError`].
pub type Result<T> = std::result::Result<T, CurvenetError>;
