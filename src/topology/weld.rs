use crate::math::distance::{lexicographic_cmp, points_in_tolerance, ToleranceState};
use crate::math::Point3;

/// Result of merging curve endpoints into shared vertices.
#[derive(Debug, Clone)]
pub struct Welding {
    /// Vertex assigned to each endpoint. Endpoint `2 * i` is the start of
    /// curve `i`, endpoint `2 * i + 1` its end.
    pub vertex_of: Vec<usize>,
    /// Position of each welded vertex.
    pub positions: Vec<Point3>,
    /// Number of endpoints merged into each vertex.
    pub counts: Vec<usize>,
}

impl Welding {
    /// Returns the number of welded vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

/// Endpoint indices ordered by position (X, then Y, then Z).
fn sorted_endpoints(endpoints: &[Point3]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..endpoints.len()).collect();
    order.sort_by(|&l, &r| lexicographic_cmp(&endpoints[l], &endpoints[r]));
    order
}

/// Welds endpoints whose coordinates are exactly equal.
///
/// After sorting, coincident endpoints form contiguous runs; each run becomes
/// one vertex. Points that differ only in the last bit stay distinct.
#[must_use]
pub fn weld_exact(endpoints: &[Point3]) -> Welding {
    let order = sorted_endpoints(endpoints);
    let mut vertex_of = vec![0; endpoints.len()];
    let mut positions = Vec::new();
    let mut counts: Vec<usize> = Vec::new();

    let mut previous: Option<&Point3> = None;
    for &endpoint in &order {
        let point = &endpoints[endpoint];
        if previous != Some(point) {
            positions.push(*point);
            counts.push(0);
            previous = Some(point);
        }
        let vertex = positions.len() - 1;
        vertex_of[endpoint] = vertex;
        counts[vertex] += 1;
    }

    Welding {
        vertex_of,
        positions,
        counts,
    }
}

/// Welds endpoints lying within `tolerance` of each other.
///
/// Endpoints are visited in sorted order. Each endpoint not yet welded seeds
/// a new vertex and absorbs every later unwelded endpoint within `tolerance`
/// of the seed. The seed's position becomes the vertex position. Distances
/// are measured from the seed only, so a chain of points spaced just under
/// `tolerance` is split once it drifts further than `tolerance` from the seed.
#[must_use]
pub fn weld_within(endpoints: &[Point3], tolerance: f64) -> Welding {
    let order = sorted_endpoints(endpoints);
    let sq_tolerance = tolerance * tolerance;
    let mut assigned: Vec<Option<usize>> = vec![None; order.len()];
    let mut positions = Vec::new();
    let mut counts = Vec::new();

    for i in 0..order.len() {
        if assigned[i].is_some() {
            continue;
        }
        let vertex = positions.len();
        let seed = endpoints[order[i]];
        assigned[i] = Some(vertex);
        let mut count = 1;

        for j in i + 1..order.len() {
            if assigned[j].is_some() {
                continue;
            }
            match points_in_tolerance(&seed, &endpoints[order[j]], tolerance, sq_tolerance) {
                ToleranceState::InTolerance => {
                    assigned[j] = Some(vertex);
                    count += 1;
                }
                ToleranceState::OutOfToleranceAndContinue => {}
                ToleranceState::OutOfToleranceAndStop => break,
            }
        }

        positions.push(seed);
        counts.push(count);
    }

    let mut vertex_of = vec![0; endpoints.len()];
    for (sorted, vertex) in assigned.into_iter().enumerate() {
        // Every sorted slot is assigned by the loop above.
        vertex_of[order[sorted]] = vertex.unwrap_or_default();
    }

    Welding {
        vertex_of,
        positions,
        counts,
    }
}
