use std::fmt;

use crate::error::{Result, SearchError};
use crate::geometry::curve::Curve;
use crate::topology::{Topology, VertexId};

use super::astar::AStar;
use super::cancel::CancelToken;
use super::dijkstra::Dijkstra;
use super::weights::EdgeWeights;
use super::{CameFrom, PathMethod};

/// How edges are weighed when searching for a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchMode {
    /// A* over the length of each edge's curve.
    #[default]
    CurveLength,
    /// A* over the straight-line span of each edge.
    LinearDistance,
    /// Dijkstra counting edges crossed.
    Links,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CurveLength => "curve length",
            Self::LinearDistance => "linear distance",
            Self::Links => "links",
        };
        f.write_str(name)
    }
}

/// A search method chosen at runtime.
#[derive(Debug, Clone)]
pub enum SearchMethod<'a, C> {
    /// A* search.
    AStar(AStar<'a, C>),
    /// Dijkstra search.
    Dijkstra(Dijkstra<'a, C>),
}

impl<'a, C: Curve + Clone> SearchMethod<'a, C> {
    /// Builds the search for `mode`.
    ///
    /// `distances`, when given, replaces the measured weights of the
    /// weighted modes and must hold one value per edge.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::InvalidArgument` if `distances` is given for
    /// [`SearchMode::Links`], has the wrong length, or holds a negative or
    /// non-finite value.
    pub fn from_mode(
        mode: SearchMode,
        topology: &'a Topology<C>,
        distances: Option<Vec<f64>>,
    ) -> Result<Self> {
        let method = match (mode, distances) {
            (SearchMode::Links, Some(_)) => {
                return Err(SearchError::InvalidArgument(
                    "links mode takes no distance override".to_owned(),
                )
                .into());
            }
            (SearchMode::Links, None) => Self::Dijkstra(Dijkstra::hops(topology)),
            (SearchMode::CurveLength, None) => Self::AStar(AStar::by_curve_length(topology)?),
            (SearchMode::LinearDistance, None) => {
                Self::AStar(AStar::by_linear_distance(topology)?)
            }
            (SearchMode::CurveLength | SearchMode::LinearDistance, Some(values)) => {
                Self::AStar(AStar::new(topology, EdgeWeights::per_edge(values)?)?)
            }
        };
        Ok(method)
    }

    /// Sets the maximum gap tolerated when joining the walk's curves.
    #[must_use]
    pub fn with_join_tolerance(self, join_tolerance: f64) -> Self {
        match self {
            Self::AStar(m) => Self::AStar(m.with_join_tolerance(join_tolerance)),
            Self::Dijkstra(m) => Self::Dijkstra(m.with_join_tolerance(join_tolerance)),
        }
    }
}

impl<C: Curve + Clone> PathMethod<C> for SearchMethod<'_, C> {
    fn topology(&self) -> &Topology<C> {
        match self {
            Self::AStar(m) => m.topology(),
            Self::Dijkstra(m) => m.topology(),
        }
    }

    fn weights(&self) -> &EdgeWeights {
        match self {
            Self::AStar(m) => m.weights(),
            Self::Dijkstra(m) => m.weights(),
        }
    }

    fn join_tolerance(&self) -> f64 {
        match self {
            Self::AStar(m) => m.join_tolerance(),
            Self::Dijkstra(m) => m.join_tolerance(),
        }
    }

    fn search(
        &self,
        from: VertexId,
        to: VertexId,
        cancel: Option<&CancelToken>,
    ) -> Result<Option<CameFrom>> {
        match self {
            Self::AStar(m) => m.search(from, to, cancel),
            Self::Dijkstra(m) => m.search(from, to, cancel),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CurvenetError;
    use crate::geometry::curve::{EdgeCurve, LineSegment};
    use crate::math::Point3;

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
    fn modes_pick_their_method() {
        let top = triangle();
        let method = SearchMethod::from_mode(SearchMode::CurveLength, &top, None).unwrap();
        assert!(matches!(method, SearchMethod::AStar(_)));
        let weights: Vec<f64> = method.weights().iter().collect();
        assert_eq!(weights, vec![3.0, 4.0, 5.0]);

        let method = SearchMethod::from_mode(SearchMode::Links, &top, None).unwrap();
        assert!(matches!(method, SearchMethod::Dijkstra(_)));
        assert!(method.weights().iter().all(|w| (w - 1.0).abs() < f64::EPSILON));
    }

    #[test]
    fn links_reject_distance_override() {
        let top = triangle();
        let err = SearchMethod::from_mode(SearchMode::Links, &top, Some(vec![1.0; 3])).unwrap_err();
        assert!(matches!(
            err,
            CurvenetError::Search(SearchError::InvalidArgument(_))
        ));
    }

    #[test]
    fn override_must_match_edge_count() {
        let top = triangle();
        let result = SearchMethod::from_mode(SearchMode::CurveLength, &top, Some(vec![1.0; 2]));
        assert!(result.is_err());
    }

    #[test]
    fn override_replaces_measured_lengths() {
        let top = triangle();
        let method =
            SearchMethod::from_mode(SearchMode::LinearDistance, &top, Some(vec![3.0, 40.0, 5.0]))
                .unwrap();
        let from = top.vertex_index_of(&Point3::origin()).unwrap();
        let to = top.vertex_index_of(&Point3::new(0.0, 4.0, 0.0)).unwrap();
        let walk = method.cross(from, to).unwrap().unwrap();
        assert_eq!(walk.nodes.len(), 3);
        assert!((walk.length - 8.0).abs() < 1e-12);
    }

    #[test]
    fn default_mode_is_curve_length() {
        assert_eq!(SearchMode::default(), SearchMode::CurveLength);
        assert_eq!(SearchMode::Links.to_string(), "links");
    }
}
