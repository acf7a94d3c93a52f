use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;
use tracing::trace;

use crate::error::{Result, SearchError};
use crate::geometry::curve::Curve;
use crate::topology::{Topology, VertexId};

use super::cancel::CancelToken;
use super::weights::EdgeWeights;
use super::{check_vertices, CameFrom};

/// Search state of a vertex. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VertexState {
    Unvisited,
    Open,
    Closed,
}

/// Open vertices ordered by score, lowest vertex index first on ties.
///
/// Improving a vertex pushes a new entry; the superseded entry is skipped
/// when it surfaces.
#[derive(Debug, Default)]
struct OpenSet {
    heap: BinaryHeap<Reverse<(OrderedFloat<f64>, usize)>>,
}

impl OpenSet {
    fn push(&mut self, score: f64, vertex: usize) {
        self.heap.push(Reverse((OrderedFloat(score), vertex)));
    }

    fn pop(&mut self) -> Option<(f64, usize)> {
        self.heap
            .pop()
            .map(|Reverse((OrderedFloat(score), vertex))| (score, vertex))
    }
}

/// Best-first search from `from` to `to`.
///
/// Selects the open vertex with the lowest `g + h`, where `g` is the
/// accumulated weight and `h = heuristic(vertex)` is computed once when the
/// vertex is first opened. A zero heuristic gives Dijkstra's algorithm.
/// Returns the predecessor array once `to` is selected, or `None` when the
/// open set runs dry first.
pub(crate) fn best_first<C: Curve>(
    topology: &Topology<C>,
    weights: &EdgeWeights,
    from: VertexId,
    to: VertexId,
    heuristic: impl Fn(VertexId) -> f64,
    cancel: Option<&CancelToken>,
) -> Result<Option<CameFrom>> {
    let n = topology.vertex_count();
    check_vertices(n, from, to)?;
    let mut state = vec![VertexState::Unvisited; n];
    let mut g_score = vec![f64::INFINITY; n];
    let mut h_score = vec![0.0; n];
    let mut f_score = vec![f64::INFINITY; n];
    let mut came_from: CameFrom = vec![None; n];
    let mut open = OpenSet::default();

    let source = from.index();
    state[source] = VertexState::Open;
    g_score[source] = 0.0;
    h_score[source] = heuristic(from);
    f_score[source] = h_score[source];
    open.push(f_score[source], source);

    let mut expanded = 0_usize;
    while let Some((score, current)) = open.pop() {
        if state[current] != VertexState::Open || score > f_score[current] {
            continue;
        }
        if cancel.is_some_and(CancelToken::is_cancelled) {
            return Err(SearchError::Cancelled.into());
        }
        if current == to.index() {
            trace!(%from, %to, expanded, "walk target reached");
            return Ok(Some(came_from));
        }

        state[current] = VertexState::Closed;
        expanded += 1;

        let current_id = VertexId::new(current);
        for incident in topology.incident_edges(current_id)? {
            let neighbor = topology.edge(incident.edge)?.endpoint(!incident.forward);
            let next = neighbor.index();
            if state[next] == VertexState::Closed {
                continue;
            }
            if state[next] == VertexState::Unvisited {
                state[next] = VertexState::Open;
                h_score[next] = heuristic(neighbor);
            }
            let tentative = g_score[current] + weights.weight(incident.edge);
            if tentative < g_score[next] {
                g_score[next] = tentative;
                f_score[next] = tentative + h_score[next];
                came_from[next] = Some(current_id);
                open.push(f_score[next], next);
            }
        }
    }

    trace!(%from, %to, expanded, "open set exhausted");
    Ok(None)
}
