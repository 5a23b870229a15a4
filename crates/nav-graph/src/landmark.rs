//! Visibility-graph construction from hand-placed landmarks.
//!
//! The alternative graph source: instead of a dense uniform grid, a small
//! curated set of positions — typically a few per region, placed where they
//! can see around corners.  Every pair of mutually visible landmarks is
//! linked, producing a sparse graph whose paths hug obstacle corners.

use nav_core::Vec2;

use crate::error::{GraphError, GraphResult};
use crate::graph::{NavGraph, NavGraphBuilder};
use crate::oracle::SpatialOracle;

/// Build a visibility graph over `landmarks`.
///
/// Each landmark is assigned the region the oracle reports at its position
/// (probed with `probe_half_extents`); a landmark outside every region is a
/// configuration error — landmarks are hand-placed, so a miss means the
/// placement data is wrong, not that the request should degrade.
///
/// For every ordered pair of distinct landmarks the oracle's obstruction
/// query is consulted with `clearance`; unobstructed pairs get a directed
/// edge each way, weighted by Euclidean distance.  O(L²) obstruction
/// queries — fine for the intended handful of landmarks.
pub fn build_landmark_graph<O: SpatialOracle>(
    oracle: &O,
    landmarks: &[Vec2],
    probe_half_extents: Vec2,
    clearance: f32,
    region_count: usize,
) -> GraphResult<NavGraph> {
    let mut b =
        NavGraphBuilder::with_capacity(region_count, landmarks.len(), landmarks.len().pow(2));

    for &pos in landmarks {
        let region = oracle
            .region_of_box(pos, probe_half_extents)
            .ok_or(GraphError::LandmarkOutsideRegions(pos))?;
        b.add_node(pos, true, region);
    }

    for (i, &from) in landmarks.iter().enumerate() {
        for (j, &to) in landmarks.iter().enumerate() {
            if i == j {
                continue;
            }
            if !oracle.is_obstructed(from, to, clearance) {
                b.add_directed_edge(nav_core::NodeId(i as u32), nav_core::NodeId(j as u32));
            }
        }
    }

    Ok(b.build())
}
