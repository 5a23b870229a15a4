//! Uniform-grid graph construction.
//!
//! Samples the plane on a fixed step and asks the [`SpatialOracle`] about
//! each sample.  A sample outside every region, or overlapped by an
//! obstacle, becomes an invalid node; everything else becomes a valid node
//! tagged with the region the oracle reported.  Adjacency is the 8
//! surrounding cells, so edges only ever join immediate grid neighbours and
//! never cross an invalid cell.

use nav_core::{NodeId, RegionId, Vec2};

use crate::graph::{NavGraph, NavGraphBuilder};
use crate::oracle::SpatialOracle;

/// Parameters for uniform-grid sampling.
///
/// The reference configuration is a 10×10 plane centred on the origin with a
/// 0.3 step and 6 regions.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// Minimum corner of the sampled plane.
    pub origin: Vec2,

    /// Extent of the sampled plane along each axis.
    pub size: Vec2,

    /// Distance between adjacent sample centres.  Also sets the occupancy
    /// probe's half-extent (`step / 2`), so samples tile the plane exactly.
    pub step: f32,

    /// Number of region ids the oracle may report.
    pub region_count: usize,
}

impl GridConfig {
    /// Cells per axis: `ceil(size / step)`.
    ///
    /// The last row/column of samples may fall past the plane edge; the
    /// oracle reports no region there and those nodes are simply invalid.
    pub fn cells(&self) -> (usize, usize) {
        (
            (self.size.x / self.step).ceil() as usize,
            (self.size.y / self.step).ceil() as usize,
        )
    }

    /// Centre position of the sample at grid coordinates `(ix, iy)`.
    #[inline]
    pub fn sample_pos(&self, ix: usize, iy: usize) -> Vec2 {
        Vec2::new(
            self.origin.x + self.step * 0.5 + ix as f32 * self.step,
            self.origin.y + self.step * 0.5 + iy as f32 * self.step,
        )
    }
}

impl Default for GridConfig {
    /// The reference 10×10 / 0.3-step / 6-region configuration.
    fn default() -> Self {
        Self {
            origin: Vec2::new(-5.0, -5.0),
            size: Vec2::new(10.0, 10.0),
            step: 0.3,
            region_count: 6,
        }
    }
}

/// Sample the plane per `config` and wire 8-neighbour adjacency.
///
/// One node is produced per sample, valid or not, in row-major order
/// (`iy * cols + ix`), so callers can recover grid coordinates from a
/// `NodeId` if they need to.
pub fn build_grid_graph<O: SpatialOracle>(oracle: &O, config: &GridConfig) -> NavGraph {
    let (cols, rows) = config.cells();
    let half = Vec2::splat(config.step * 0.5);

    let mut b = NavGraphBuilder::with_capacity(config.region_count, cols * rows, cols * rows * 8);

    // ── Nodes: one occupancy + one obstacle query per sample ──────────────
    for iy in 0..rows {
        for ix in 0..cols {
            let pos = config.sample_pos(ix, iy);
            match oracle.region_of_box(pos, half) {
                None => {
                    b.add_node(pos, false, RegionId::NONE);
                }
                Some(region) => {
                    let valid = !oracle.is_blocked(pos, half);
                    b.add_node(pos, valid, region);
                }
            }
        }
    }

    // ── Edges: 8-neighbour scan, bounds-checked, valid endpoints only ─────
    //
    // Each ordered pair is visited once from each side, so the reciprocal
    // directed records arise from the scan itself.
    for iy in 0..rows {
        for ix in 0..cols {
            let node = NodeId((iy * cols + ix) as u32);
            if !b.is_valid(node) {
                continue;
            }
            for ny in iy.saturating_sub(1)..=(iy + 1).min(rows - 1) {
                for nx in ix.saturating_sub(1)..=(ix + 1).min(cols - 1) {
                    if nx == ix && ny == iy {
                        continue;
                    }
                    let neighbour = NodeId((ny * cols + nx) as u32);
                    if b.is_valid(neighbour) {
                        b.add_directed_edge(node, neighbour);
                    }
                }
            }
        }
    }

    b.build()
}
