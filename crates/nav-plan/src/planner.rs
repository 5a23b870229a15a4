//! The `Navigator` — one front door for path requests.

use std::fmt;
use std::path::Path;

use nav_core::Vec2;
use nav_graph::{
    Heuristic, NavGraph, NavPath, RegionTable, SearchScratch, SpatialOracle, TableObserver,
    a_star, build_region_table, reconstruct_path, smooth_path,
};

use crate::error::{PlanError, PlanResult};

// ── Request enums ─────────────────────────────────────────────────────────────

/// Which graph source a request runs against.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GraphKind {
    /// The dense uniform-grid graph.
    Grid,
    /// The sparse hand-placed visibility graph.
    Landmark,
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GraphKind::Grid => "grid",
            GraphKind::Landmark => "landmark",
        })
    }
}

/// Which remaining-cost estimator a request uses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeuristicKind {
    /// Dijkstra — optimal, explores the most.
    Null,
    /// Straight-line distance — optimal here, explores less.
    Euclidean,
    /// Precomputed inter-region estimate — fastest on long routes, may
    /// trade away optimality (see
    /// [`Heuristic::RegionTable`][nav_graph::Heuristic::RegionTable]).
    RegionTable,
}

// ── Navigator ─────────────────────────────────────────────────────────────────

/// One configured graph source with its private search scratch and optional
/// lookup table.
pub(crate) struct GraphSlot {
    pub(crate) graph: NavGraph,
    pub(crate) scratch: SearchScratch,
    pub(crate) table: Option<RegionTable>,
}

impl GraphSlot {
    pub(crate) fn new(graph: NavGraph) -> Self {
        let scratch = SearchScratch::new(graph.node_count());
        Self { graph, scratch, table: None }
    }
}

/// Owns the spatial oracle, the configured graphs, and their lookup tables;
/// answers path requests.
///
/// Dependency-injected: everything the navigator consults comes in through
/// [`NavigatorBuilder`][crate::NavigatorBuilder], nothing is global.  Each
/// graph carries exactly one search scratch and `find_path` takes
/// `&mut self`, so at most one search per graph is ever in flight.
pub struct Navigator<O: SpatialOracle> {
    pub(crate) oracle: O,
    pub(crate) probe_half_extents: Vec2,
    pub(crate) smoothing_clearance: f32,
    pub(crate) grid: Option<GraphSlot>,
    pub(crate) landmark: Option<GraphSlot>,
}

impl<O: SpatialOracle> Navigator<O> {
    // ── Introspection ─────────────────────────────────────────────────────

    /// The graph behind `kind`, if configured.
    pub fn graph(&self, kind: GraphKind) -> Option<&NavGraph> {
        self.slot(kind).map(|s| &s.graph)
    }

    /// The lookup table attached to `kind`'s graph, if any.
    pub fn table(&self, kind: GraphKind) -> Option<&RegionTable> {
        self.slot(kind).and_then(|s| s.table.as_ref())
    }

    // ── Lookup-table lifecycle ────────────────────────────────────────────

    /// Precompute the inter-region table for `kind`'s graph and attach it.
    ///
    /// The exhaustive offline step — run once, then [`save_table`] and
    /// [`load_table`] on later startups.
    ///
    /// [`save_table`]: Self::save_table
    /// [`load_table`]: Self::load_table
    pub fn compute_table<T: TableObserver>(
        &mut self,
        kind: GraphKind,
        observer: &mut T,
    ) -> PlanResult<()> {
        let slot = self.slot_mut(kind)?;
        slot.table = Some(build_region_table(&slot.graph, observer));
        Ok(())
    }

    /// Load a previously saved table for `kind`'s graph from `path`.
    ///
    /// The expected region count comes from the graph; a mismatched or
    /// malformed file is a fatal configuration error.
    pub fn load_table(&mut self, kind: GraphKind, path: &Path) -> PlanResult<()> {
        let slot = self.slot_mut(kind)?;
        slot.table = Some(RegionTable::load(path, slot.graph.region_count())?);
        Ok(())
    }

    /// Persist `kind`'s table to `path`.
    pub fn save_table(&self, kind: GraphKind, path: &Path) -> PlanResult<()> {
        let slot = self.slot(kind).ok_or(PlanError::GraphNotConfigured(kind))?;
        let table = slot.table.as_ref().ok_or(PlanError::TableNotLoaded(kind))?;
        table.save(path)?;
        Ok(())
    }

    // ── Path requests ─────────────────────────────────────────────────────

    /// Compute a path from `start` to `goal`.
    ///
    /// Both endpoints are resolved to regions through the oracle and
    /// snapped to the nearest navigable node of their own region on the
    /// chosen graph.  With `smooth`, the reconstructed path is pruned by
    /// line-of-sight before being returned.
    ///
    /// # Errors
    ///
    /// Recoverable, per-request: [`PlanError::OutsideRegions`] when an
    /// endpoint maps to no region, [`PlanError::EmptyRegion`] when its
    /// region has no nodes on this graph, and
    /// [`PlanError::Graph`]`(NoPath)` when the regions don't connect.
    /// The navigator stays fully usable after any of them.
    pub fn find_path(
        &mut self,
        start: Vec2,
        goal: Vec2,
        heuristic: HeuristicKind,
        graph: GraphKind,
        smooth: bool,
    ) -> PlanResult<NavPath> {
        let start_region = self
            .oracle
            .region_of_box(start, self.probe_half_extents)
            .ok_or(PlanError::OutsideRegions(start))?;
        let goal_region = self
            .oracle
            .region_of_box(goal, self.probe_half_extents)
            .ok_or(PlanError::OutsideRegions(goal))?;

        let slot = match graph {
            GraphKind::Grid => self.grid.as_mut(),
            GraphKind::Landmark => self.landmark.as_mut(),
        }
        .ok_or(PlanError::GraphNotConfigured(graph))?;

        let start_node = slot
            .graph
            .nearest_node_in_region(start, start_region)
            .ok_or(PlanError::EmptyRegion(start_region))?;
        let goal_node = slot
            .graph
            .nearest_node_in_region(goal, goal_region)
            .ok_or(PlanError::EmptyRegion(goal_region))?;

        let chosen = match heuristic {
            HeuristicKind::Null => Heuristic::Null,
            HeuristicKind::Euclidean => Heuristic::Euclidean,
            HeuristicKind::RegionTable => Heuristic::RegionTable(
                slot.table.as_ref().ok_or(PlanError::TableNotLoaded(graph))?,
            ),
        };

        slot.scratch.reset();
        let cost = a_star(&slot.graph, &mut slot.scratch, start_node, goal_node, chosen)?;
        let mut points = reconstruct_path(&slot.graph, &slot.scratch, start_node, goal_node)?;

        if smooth {
            points = smooth_path(&self.oracle, &points, self.smoothing_clearance);
        }

        Ok(NavPath { points, cost })
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn slot(&self, kind: GraphKind) -> Option<&GraphSlot> {
        match kind {
            GraphKind::Grid => self.grid.as_ref(),
            GraphKind::Landmark => self.landmark.as_ref(),
        }
    }

    fn slot_mut(&mut self, kind: GraphKind) -> PlanResult<&mut GraphSlot> {
        match kind {
            GraphKind::Grid => self.grid.as_mut(),
            GraphKind::Landmark => self.landmark.as_mut(),
        }
        .ok_or(PlanError::GraphNotConfigured(kind))
    }
}
