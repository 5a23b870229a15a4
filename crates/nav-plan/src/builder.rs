//! Fluent builder for constructing a [`Navigator`].

use nav_core::Vec2;
use nav_graph::{GridConfig, SpatialOracle, build_grid_graph, build_landmark_graph};

use crate::error::{PlanError, PlanResult};
use crate::planner::{GraphSlot, Navigator};

/// Fluent builder for [`Navigator<O>`].
///
/// # Required inputs
///
/// - the spatial oracle
/// - at least one graph source: [`grid`](Self::grid) and/or
///   [`landmarks`](Self::landmarks)
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                                  |
/// |--------------------------|------------------------------------------|
/// | `.probe_half_extents(v)` | `Vec2::splat(0.25)`                      |
/// | `.landmark_clearance(r)` | `0.2`                                    |
/// | `.smoothing_clearance(r)`| `0.2`                                    |
/// | `.region_count(n)`       | `6` (landmark graph only; the grid graph |
/// |                          | takes its count from its `GridConfig`)   |
///
/// # Example
///
/// ```rust,ignore
/// let mut nav = NavigatorBuilder::new(world)
///     .grid(GridConfig::default())
///     .landmarks(landmark_positions)
///     .build()?;
/// nav.compute_table(GraphKind::Grid, &mut NoopTableObserver)?;
/// ```
pub struct NavigatorBuilder<O: SpatialOracle> {
    oracle: O,
    grid: Option<GridConfig>,
    landmarks: Option<Vec<Vec2>>,
    region_count: usize,
    probe_half_extents: Vec2,
    landmark_clearance: f32,
    smoothing_clearance: f32,
}

impl<O: SpatialOracle> NavigatorBuilder<O> {
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            grid: None,
            landmarks: None,
            region_count: 6,
            probe_half_extents: Vec2::splat(0.25),
            landmark_clearance: 0.2,
            smoothing_clearance: 0.2,
        }
    }

    /// Configure the uniform-grid graph source.
    pub fn grid(mut self, config: GridConfig) -> Self {
        self.grid = Some(config);
        self
    }

    /// Configure the landmark (visibility) graph source.
    pub fn landmarks(mut self, landmarks: Vec<Vec2>) -> Self {
        self.landmarks = Some(landmarks);
        self
    }

    /// Region count for the landmark graph's buckets and table.
    pub fn region_count(mut self, count: usize) -> Self {
        self.region_count = count;
        self
    }

    /// Half-extents of the box probed when resolving a query point (or a
    /// landmark) to a region.
    pub fn probe_half_extents(mut self, half: Vec2) -> Self {
        self.probe_half_extents = half;
        self
    }

    /// Capsule radius for landmark-to-landmark visibility tests.
    pub fn landmark_clearance(mut self, clearance: f32) -> Self {
        self.landmark_clearance = clearance;
        self
    }

    /// Capsule radius for path smoothing.
    pub fn smoothing_clearance(mut self, clearance: f32) -> Self {
        self.smoothing_clearance = clearance;
        self
    }

    /// Build the configured graphs and return a ready [`Navigator`].
    ///
    /// # Errors
    ///
    /// [`PlanError::NoGraphSource`] when neither source was configured,
    /// [`PlanError::NoLandmarks`] for an empty landmark list, and any
    /// landmark-placement [`GraphError`][nav_graph::GraphError] — all
    /// fatal at startup: the engine cannot run on a malformed static world.
    pub fn build(self) -> PlanResult<Navigator<O>> {
        if self.grid.is_none() && self.landmarks.is_none() {
            return Err(PlanError::NoGraphSource);
        }

        let grid = self
            .grid
            .map(|config| GraphSlot::new(build_grid_graph(&self.oracle, &config)));

        let landmark = match self.landmarks {
            None => None,
            Some(points) if points.is_empty() => return Err(PlanError::NoLandmarks),
            Some(points) => Some(GraphSlot::new(build_landmark_graph(
                &self.oracle,
                &points,
                self.probe_half_extents,
                self.landmark_clearance,
                self.region_count,
            )?)),
        };

        Ok(Navigator {
            oracle: self.oracle,
            probe_half_extents: self.probe_half_extents,
            smoothing_clearance: self.smoothing_clearance,
            grid,
            landmark,
        })
    }
}
