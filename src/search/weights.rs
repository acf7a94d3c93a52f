use crate::error::{Result, SearchError};
use crate::topology::EdgeId;

/// Per-edge traversal cost fed to a search.
///
/// Every weight is finite and non-negative, and a pattern is never empty.
/// The constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeWeights(Repr);

#[derive(Debug, Clone, PartialEq)]
enum Repr {
    /// The same value for each of `count` edges.
    Fixed { value: f64, count: usize },
    /// One explicit value per edge.
    PerEdge(Vec<f64>),
    /// `values` repeated cyclically to cover `count` edges.
    Pattern { values: Vec<f64>, count: usize },
}

fn check_weight(value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SearchError::InvalidArgument(format!(
            "edge weights must be finite and non-negative, got {value}"
        ))
        .into())
    }
}

impl EdgeWeights {
    /// Unit weights: every edge costs one hop.
    #[must_use]
    pub fn hops(count: usize) -> Self {
        Self(Repr::Fixed { value: 1.0, count })
    }

    /// The same `value` for each of `count` edges.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::InvalidArgument` if `value` is negative or not finite.
    pub fn fixed(value: f64, count: usize) -> Result<Self> {
        check_weight(value)?;
        Ok(Self(Repr::Fixed { value, count }))
    }

    /// One explicit weight per edge.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::InvalidArgument` if any weight is negative or not finite.
    pub fn per_edge(values: Vec<f64>) -> Result<Self> {
        values.iter().try_for_each(|&v| check_weight(v))?;
        Ok(Self(Repr::PerEdge(values)))
    }

    /// Repeats `values` cyclically until `count` edges are covered.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::InvalidArgument` if `values` is empty or holds a
    /// negative or non-finite weight.
    pub fn pattern(values: Vec<f64>, count: usize) -> Result<Self> {
        if values.is_empty() {
            return Err(
                SearchError::InvalidArgument("weight pattern must not be empty".to_owned()).into(),
            );
        }
        values.iter().try_for_each(|&v| check_weight(v))?;
        Ok(Self(Repr::Pattern { values, count }))
    }

    /// Returns the number of edges covered.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.0 {
            Repr::Fixed { count, .. } | Repr::Pattern { count, .. } => *count,
            Repr::PerEdge(values) => values.len(),
        }
    }

    /// Returns whether no edge is covered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the weight of `edge`.
    ///
    /// # Panics
    ///
    /// Panics if `edge` is not below [`len`](Self::len) for per-edge weights.
    /// Search methods check the length against the topology up front.
    #[must_use]
    pub fn weight(&self, edge: EdgeId) -> f64 {
        match &self.0 {
            Repr::Fixed { value, .. } => *value,
            Repr::PerEdge(values) => values[edge.index()],
            Repr::Pattern { values, .. } => values[edge.index() % values.len()],
        }
    }

    /// Iterates the weights in edge order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(|i| self.weight(EdgeId::new(i)))
    }
}
