//! The spatial occupancy/obstruction query contract.
//!
//! The engine never inspects world geometry directly.  Everything it needs
//! to know about the world — which region covers a point, whether a box is
//! blocked by an obstacle, whether a thickened segment is clear — goes
//! through this trait, so the collision backend (a physics engine, a static
//! box soup, a test fixture) stays swappable.

use nav_core::{RegionId, Vec2};

/// Occupancy and line-of-sight queries over world geometry.
///
/// # Pluggability
///
/// Graph builders and the planner are generic over `O: SpatialOracle`;
/// implementations must be `Send + Sync` so the lookup-table precompute can
/// share the oracle across Rayon worker threads under the `parallel`
/// feature.
///
/// # Coordinate model
///
/// All queries are planar: boxes are axis-aligned rectangles given by
/// `center` and `half_extents`, segments are thickened into capsules by
/// `clearance`.
pub trait SpatialOracle: Send + Sync {
    /// The region covering the axis-aligned box at `center`, if any.
    ///
    /// `None` means no region is present — the position is off the
    /// navigable plane entirely.
    fn region_of_box(&self, center: Vec2, half_extents: Vec2) -> Option<RegionId>;

    /// Whether an obstacle overlaps the axis-aligned box at `center`.
    ///
    /// A position can be inside a region and still blocked (a wall standing
    /// on the plane); builders must check both.
    fn is_blocked(&self, center: Vec2, half_extents: Vec2) -> bool;

    /// Whether any obstacle intersects the capsule of radius `clearance`
    /// swept from `from` to `to`.
    ///
    /// Used for visibility-graph edges and path smoothing.
    fn is_obstructed(&self, from: Vec2, to: Vec2, clearance: f32) -> bool;
}
