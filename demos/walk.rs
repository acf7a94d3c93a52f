//! Shortest walks over a small corridor network.
//!
//! Usage:
//! ```text
//! cargo run --example walk
//! RUST_LOG=curvenet=trace cargo run --example walk
//! ```

use curvenet::geometry::curve::{Arc, Curve, EdgeCurve, LineSegment};
use curvenet::math::Point3;
use curvenet::operations::{ShortestWalk, ShortestWalkParams};
use curvenet::search::{PathMethod, SearchMethod, SearchMode};
use curvenet::topology::TopologyBuilder;
use curvenet::Result;
use tracing::info;

fn line(a: [f64; 3], b: [f64; 3]) -> Result<EdgeCurve> {
    Ok(LineSegment::new(Point3::from(a), Point3::from(b))?.into())
}

/// A 3x2 corridor grid with a curved bypass between (0,0) and (2,0).
fn corridors() -> Result<Vec<EdgeCurve>> {
    let mut curves = Vec::new();
    for y in [0.0, 1.0] {
        curves.push(line([0.0, y, 0.0], [1.0, y, 0.0])?);
        curves.push(line([1.0, y, 0.0], [2.0, y, 0.0])?);
    }
    for x in [0.0, 1.0, 2.0] {
        curves.push(line([x, 0.0, 0.0], [x, 1.0, 0.0])?);
    }
    let bypass = Arc::through_points(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, -0.4, 0.0),
        Point3::new(2.0, 0.0, 0.0),
    )?;
    curves.push(bypass.into());
    Ok(curves)
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for curvenet.
    // Override with RUST_LOG env var (e.g. RUST_LOG=curvenet=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("walk=info".parse().unwrap_or_default())
        .add_directive("curvenet=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let topology = TopologyBuilder::new().build(corridors()?)?;
    info!(
        vertices = topology.vertex_count(),
        edges = topology.edge_count(),
        "network built"
    );

    let from = Point3::new(0.0, 1.0, 0.0);
    let to = Point3::new(2.0, 0.0, 0.0);
    for mode in [SearchMode::CurveLength, SearchMode::LinearDistance, SearchMode::Links] {
        let method = SearchMethod::from_mode(mode, &topology, None)?;
        match method.cross_points(&from, &to)? {
            Some(walk) => info!(
                %mode,
                links = walk.edges.len(),
                weight = walk.length,
                curve_length = walk.curve.length(),
                "walk found"
            ),
            None => info!(%mode, "no walk"),
        }
    }

    // Batch solve with a weight pattern shorter than the chords.
    let walks = ShortestWalk::new(corridors()?, vec![0.5, 2.0], vec![(from, to), (to, from)])
        .with_params(ShortestWalkParams::default())
        .execute()?;
    for (index, walk) in walks.iter().enumerate() {
        if let Some(walk) = walk {
            let nodes: Vec<String> = walk.nodes.iter().map(ToString::to_string).collect();
            info!(query = index, path = nodes.join(" -> "), weight = walk.length, "batch walk");
        }
    }
    Ok(())
}
