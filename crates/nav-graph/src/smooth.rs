//! Line-of-sight path smoothing.
//!
//! Grid-quantised paths zig-zag: most intermediate waypoints are visible
//! from their predecessors and add nothing.  The smoother keeps only the
//! waypoints where visibility actually breaks.

use nav_core::Vec2;

use crate::oracle::SpatialOracle;

/// Prune `path` to the waypoints that matter, preserving clearance.
///
/// Greedy forward scan: the output starts with the first position; each raw
/// position from two ahead of the last accepted point onward is tested for
/// a clear capsule (radius `clearance`) back to the last accepted point,
/// and on obstruction the *previous* raw position is accepted, forcing the
/// bend at the last spot known to be visible.  The final position is always
/// appended.  Starting two ahead keeps the immediate next hop as a safety
/// margin, so the output can never cut a corner tighter than the raw path
/// did.
///
/// The result never has more points than `path`, and always keeps the first
/// and last.  Paths of two or fewer points are returned unchanged.
pub fn smooth_path<O: SpatialOracle>(oracle: &O, path: &[Vec2], clearance: f32) -> Vec<Vec2> {
    if path.len() <= 2 {
        return path.to_vec();
    }

    let mut smoothed = vec![path[0]];
    for i in 2..path.len() - 1 {
        let anchor = smoothed[smoothed.len() - 1];
        if oracle.is_obstructed(anchor, path[i], clearance) {
            smoothed.push(path[i - 1]);
        }
    }
    smoothed.push(path[path.len() - 1]);
    smoothed
}
