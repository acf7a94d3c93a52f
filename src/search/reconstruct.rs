use crate::error::{Result, TopologyError};
use crate::geometry::curve::{Curve, PolyCurve};
use crate::topology::{EdgeId, Topology, VertexId};

use super::weights::EdgeWeights;
use super::Walk;

/// Rebuilds the walk ending at `to` from a predecessor array.
///
/// Between each pair of consecutive vertices the cheapest connecting edge is
/// used. Curves stored against the direction of travel are reversed before
/// joining. The walk length is the sum of the chosen weights, not the
/// measured length of the joined curve.
///
/// Endpoints welded into one vertex may lie up to twice the weld tolerance
/// apart, so the join accepts gaps up to that much even when
/// `join_tolerance` is smaller.
pub(crate) fn reconstruct_path<C: Curve + Clone>(
    topology: &Topology<C>,
    weights: &EdgeWeights,
    came_from: &[Option<VertexId>],
    to: VertexId,
    join_tolerance: f64,
) -> Result<Walk<C>> {
    let mut nodes = vec![to];
    let mut current = to;
    while let Some(previous) = came_from[current.index()] {
        nodes.push(previous);
        current = previous;
    }
    nodes.reverse();

    let hops = nodes.len().saturating_sub(1);
    let mut edges = Vec::with_capacity(hops);
    let mut forward = Vec::with_capacity(hops);
    let mut curves = Vec::with_capacity(hops);
    let mut length = 0.0;

    for pair in nodes.windows(2) {
        let (edge, is_forward) = find_edge(topology, weights, pair[0], pair[1])?;
        let curve = topology.curve(edge)?;
        curves.push(if is_forward {
            curve.clone()
        } else {
            curve.reversed()
        });
        length += weights.weight(edge);
        edges.push(edge);
        forward.push(is_forward);
    }

    let join_tolerance = join_tolerance.max(2.0 * topology.tolerance());
    let curve = PolyCurve::by_joined_curves(curves, join_tolerance)?;

    Ok(Walk {
        curve,
        nodes,
        edges,
        forward,
        length,
    })
}

/// Finds the cheapest edge leading from `from` to `to`, and whether it is
/// traversed along its curve (start → end).
///
/// Parallel edges of equal weight resolve to the lowest edge index.
///
/// # Errors
///
/// Returns `TopologyError::EdgeNotFound` if no edge links the two vertices,
/// which only happens with a corrupted topology or predecessor array.
pub(crate) fn find_edge<C: Curve>(
    topology: &Topology<C>,
    weights: &EdgeWeights,
    from: VertexId,
    to: VertexId,
) -> Result<(EdgeId, bool)> {
    let mut best: Option<(EdgeId, bool, f64)> = None;
    for incident in topology.incident_edges(from)? {
        if topology.edge(incident.edge)?.endpoint(!incident.forward) != to {
            continue;
        }
        let weight = weights.weight(incident.edge);
        if best.map_or(true, |(_, _, best_weight)| weight < best_weight) {
            best = Some((incident.edge, incident.forward, weight));
        }
    }

    best.map(|(edge, forward, _)| (edge, forward)).ok_or_else(|| {
        TopologyError::EdgeNotFound {
            from: from.index(),
            to: to.index(),
        }
        .into()
    })
}
