//! Unit tests for nav-plan.
//!
//! The fixture world mirrors the nav-graph test fixtures: a 6×6 plane split
//! into two regions by x = 0, with a wall along the split that leaves a gap
//! at the top.

#[cfg(test)]
mod helpers {
    use nav_core::{RegionId, Vec2};
    use nav_graph::{GridConfig, SpatialOracle};

    #[derive(Copy, Clone)]
    pub struct Rect {
        pub center: Vec2,
        pub half: Vec2,
    }

    impl Rect {
        pub fn new(cx: f32, cy: f32, hx: f32, hy: f32) -> Self {
            Self { center: Vec2::new(cx, cy), half: Vec2::new(hx, hy) }
        }

        fn overlaps(&self, center: Vec2, half: Vec2) -> bool {
            (self.center.x - center.x).abs() < self.half.x + half.x
                && (self.center.y - center.y).abs() < self.half.y + half.y
        }
    }

    pub struct BoxWorld {
        pub regions: Vec<(Rect, RegionId)>,
        pub obstacles: Vec<Rect>,
    }

    impl SpatialOracle for BoxWorld {
        fn region_of_box(&self, center: Vec2, half: Vec2) -> Option<RegionId> {
            self.regions
                .iter()
                .find(|(r, _)| r.overlaps(center, half))
                .map(|&(_, id)| id)
        }

        fn is_blocked(&self, center: Vec2, half: Vec2) -> bool {
            self.obstacles.iter().any(|r| r.overlaps(center, half))
        }

        fn is_obstructed(&self, from: Vec2, to: Vec2, clearance: f32) -> bool {
            let steps = (from.distance(to) / clearance).ceil().max(1.0) as usize;
            (0..=steps).any(|i| {
                let t = i as f32 / steps as f32;
                self.is_blocked(from + (to - from) * t, Vec2::splat(clearance))
            })
        }
    }

    /// Two regions split at x = 0; wall from the bottom up to y = 2 leaves a
    /// gap along the top row of the sampled grid.
    pub fn walled_world() -> BoxWorld {
        BoxWorld {
            regions: vec![
                (Rect::new(-1.5, 0.0, 1.5, 3.0), RegionId(0)),
                (Rect::new(1.5, 0.0, 1.5, 3.0), RegionId(1)),
            ],
            obstacles: vec![Rect::new(0.0, -0.5, 0.1, 2.5)],
        }
    }

    /// As `walled_world`, but the wall spans the full height — the regions
    /// cannot be connected on the sampled grid.
    pub fn split_world() -> BoxWorld {
        let mut world = walled_world();
        world.obstacles[0] = Rect::new(0.0, 0.0, 0.1, 3.0);
        world
    }

    pub fn test_grid() -> GridConfig {
        GridConfig {
            origin: Vec2::new(-3.0, -3.0),
            size: Vec2::new(6.0, 6.0),
            step: 1.0,
            region_count: 2,
        }
    }

    /// Two landmarks per region: one below the gap, one level with it.
    pub fn landmarks() -> Vec<Vec2> {
        vec![
            Vec2::new(-2.0, -2.0),
            Vec2::new(-2.0, 2.5),
            Vec2::new(2.0, 2.5),
            Vec2::new(2.0, -2.0),
        ]
    }
}

#[cfg(test)]
mod builder {
    use super::helpers::{landmarks, test_grid, walled_world};
    use crate::{GraphKind, NavigatorBuilder, PlanError};

    #[test]
    fn needs_at_least_one_graph_source() {
        let result = NavigatorBuilder::new(walled_world()).build();
        assert!(matches!(result, Err(PlanError::NoGraphSource)));
    }

    #[test]
    fn empty_landmark_list_is_rejected() {
        let result = NavigatorBuilder::new(walled_world()).landmarks(vec![]).build();
        assert!(matches!(result, Err(PlanError::NoLandmarks)));
    }

    #[test]
    fn builds_both_graph_sources() {
        let nav = NavigatorBuilder::new(walled_world())
            .grid(test_grid())
            .landmarks(landmarks())
            .region_count(2)
            .build()
            .unwrap();

        let grid = nav.graph(GraphKind::Grid).unwrap();
        assert_eq!(grid.node_count(), 36);
        assert_eq!(grid.valid_count(), 26);

        let lm = nav.graph(GraphKind::Landmark).unwrap();
        assert_eq!(lm.node_count(), 4);
        assert_eq!(lm.valid_count(), 4);
    }

    #[test]
    fn misplaced_landmark_fails_the_build() {
        let mut points = landmarks();
        points.push(nav_core::Vec2::new(40.0, 40.0));
        let result = NavigatorBuilder::new(walled_world())
            .landmarks(points)
            .region_count(2)
            .build();
        assert!(matches!(result, Err(PlanError::Graph(_))));
    }
}

#[cfg(test)]
mod requests {
    use nav_core::{RegionId, Vec2};
    use nav_graph::GraphError;

    use super::helpers::{Rect, landmarks, split_world, test_grid, walled_world};
    use crate::{GraphKind, HeuristicKind, Navigator, NavigatorBuilder, PlanError};

    fn grid_navigator() -> Navigator<super::helpers::BoxWorld> {
        NavigatorBuilder::new(walled_world()).grid(test_grid()).build().unwrap()
    }

    fn full_navigator() -> Navigator<super::helpers::BoxWorld> {
        NavigatorBuilder::new(walled_world())
            .grid(test_grid())
            .landmarks(landmarks())
            .region_count(2)
            .build()
            .unwrap()
    }

    #[test]
    fn same_region_path_snaps_both_endpoints() {
        let mut nav = grid_navigator();
        let path = nav
            .find_path(
                Vec2::new(-2.4, -2.4),
                Vec2::new(-2.3, 2.4),
                HeuristicKind::Euclidean,
                GraphKind::Grid,
                false,
            )
            .unwrap();

        // Endpoints snapped to the nearest grid sample centres.
        assert_eq!(path.points.first(), Some(&Vec2::new(-2.5, -2.5)));
        assert_eq!(path.points.last(), Some(&Vec2::new(-2.5, 2.5)));
        assert!(path.cost > 0.0);
    }

    #[test]
    fn null_and_euclidean_agree_across_regions() {
        let mut nav = grid_navigator();
        let start = Vec2::new(-2.5, -2.5);
        let goal = Vec2::new(2.5, -2.5);

        let a = nav.find_path(start, goal, HeuristicKind::Null, GraphKind::Grid, false).unwrap();
        let b = nav
            .find_path(start, goal, HeuristicKind::Euclidean, GraphKind::Grid, false)
            .unwrap();

        // Both heuristics are admissible, so both costs are optimal.  The
        // waypoint sequences may differ (ties break differently); the
        // endpoints may not.
        assert!((a.cost - b.cost).abs() < 1e-4);
        assert_eq!(a.points.first(), b.points.first());
        assert_eq!(a.points.last(), b.points.last());
    }

    #[test]
    fn point_outside_every_region_is_rejected() {
        let mut nav = grid_navigator();
        let result = nav.find_path(
            Vec2::new(40.0, 0.0),
            Vec2::new(2.5, 2.5),
            HeuristicKind::Euclidean,
            GraphKind::Grid,
            false,
        );
        assert!(matches!(result, Err(PlanError::OutsideRegions(_))));
    }

    #[test]
    fn region_with_no_nodes_is_rejected() {
        // A third region the grid never samples.
        let mut world = walled_world();
        world.regions.push((Rect::new(10.0, 0.0, 1.0, 1.0), RegionId(2)));
        let mut nav = NavigatorBuilder::new(world).grid(test_grid()).build().unwrap();

        let result = nav.find_path(
            Vec2::new(10.0, 0.0),
            Vec2::new(-2.5, -2.5),
            HeuristicKind::Euclidean,
            GraphKind::Grid,
            false,
        );
        assert!(matches!(result, Err(PlanError::EmptyRegion(RegionId(2)))));
    }

    #[test]
    fn unconfigured_graph_kind_is_rejected() {
        let mut nav = grid_navigator();
        let result = nav.find_path(
            Vec2::new(-2.5, -2.5),
            Vec2::new(2.5, -2.5),
            HeuristicKind::Euclidean,
            GraphKind::Landmark,
            false,
        );
        assert!(matches!(result, Err(PlanError::GraphNotConfigured(GraphKind::Landmark))));
    }

    #[test]
    fn table_heuristic_requires_a_table() {
        let mut nav = grid_navigator();
        let result = nav.find_path(
            Vec2::new(-2.5, -2.5),
            Vec2::new(2.5, -2.5),
            HeuristicKind::RegionTable,
            GraphKind::Grid,
            false,
        );
        assert!(matches!(result, Err(PlanError::TableNotLoaded(GraphKind::Grid))));
    }

    #[test]
    fn unreachable_goal_reports_no_path_and_navigator_survives() {
        let mut nav = NavigatorBuilder::new(split_world()).grid(test_grid()).build().unwrap();

        let blocked = nav.find_path(
            Vec2::new(-2.5, 0.0),
            Vec2::new(2.5, 0.0),
            HeuristicKind::Euclidean,
            GraphKind::Grid,
            false,
        );
        assert!(matches!(blocked, Err(PlanError::Graph(GraphError::NoPath { .. }))));

        // A later same-region request still works: scratch is reset per call.
        let ok = nav.find_path(
            Vec2::new(-2.5, -2.5),
            Vec2::new(-2.5, 2.5),
            HeuristicKind::Euclidean,
            GraphKind::Grid,
            false,
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn landmark_path_walks_the_visibility_chain() {
        let mut nav = full_navigator();
        let path = nav
            .find_path(
                Vec2::new(-2.2, -2.2),
                Vec2::new(2.2, -2.2),
                HeuristicKind::Euclidean,
                GraphKind::Landmark,
                false,
            )
            .unwrap();

        // Around the wall: both gap-level landmarks are on the path.
        let expected = landmarks();
        assert_eq!(path.points, expected);
    }

    #[test]
    fn smoothing_prunes_grid_waypoints() {
        let mut nav = grid_navigator();
        let start = Vec2::new(-2.5, -2.5);
        let goal = Vec2::new(2.5, -2.5);

        let raw = nav.find_path(start, goal, HeuristicKind::Euclidean, GraphKind::Grid, false)
            .unwrap();
        let smoothed = nav
            .find_path(start, goal, HeuristicKind::Euclidean, GraphKind::Grid, true)
            .unwrap();

        assert!(smoothed.points.len() <= raw.points.len());
        assert!(smoothed.points.len() >= 2);
        assert_eq!(smoothed.points.first(), raw.points.first());
        assert_eq!(smoothed.points.last(), raw.points.last());
    }
}

#[cfg(test)]
mod tables {
    use std::path::PathBuf;

    use nav_core::{RegionId, Vec2};
    use nav_graph::NoopTableObserver;

    use super::helpers::{landmarks, test_grid, walled_world};
    use crate::{GraphKind, HeuristicKind, NavigatorBuilder, PlanError};

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("rust_nav_plan_{}_{name}", std::process::id()))
    }

    #[test]
    fn computed_table_enables_the_table_heuristic() {
        let mut nav = NavigatorBuilder::new(walled_world()).grid(test_grid()).build().unwrap();
        nav.compute_table(GraphKind::Grid, &mut NoopTableObserver).unwrap();

        let table = nav.table(GraphKind::Grid).unwrap();
        assert_eq!(table.get(RegionId(0), RegionId(1)), table.get(RegionId(1), RegionId(0)));

        let path = nav
            .find_path(
                Vec2::new(-2.5, -2.5),
                Vec2::new(2.5, -2.5),
                HeuristicKind::RegionTable,
                GraphKind::Grid,
                false,
            )
            .unwrap();
        assert_eq!(path.points.first(), Some(&Vec2::new(-2.5, -2.5)));
        assert_eq!(path.points.last(), Some(&Vec2::new(2.5, -2.5)));
    }

    #[test]
    fn save_then_load_reproduces_the_table() {
        let path = temp_file("grid_table.txt");

        let mut nav = NavigatorBuilder::new(walled_world()).grid(test_grid()).build().unwrap();
        nav.compute_table(GraphKind::Grid, &mut NoopTableObserver).unwrap();
        nav.save_table(GraphKind::Grid, &path).unwrap();

        let mut fresh = NavigatorBuilder::new(walled_world()).grid(test_grid()).build().unwrap();
        fresh.load_table(GraphKind::Grid, &path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(fresh.table(GraphKind::Grid), nav.table(GraphKind::Grid));
    }

    #[test]
    fn saving_before_computing_is_an_error() {
        let nav = NavigatorBuilder::new(walled_world()).grid(test_grid()).build().unwrap();
        let result = nav.save_table(GraphKind::Grid, &temp_file("never_written.txt"));
        assert!(matches!(result, Err(PlanError::TableNotLoaded(GraphKind::Grid))));
    }

    #[test]
    fn tables_attach_per_graph_kind() {
        let mut nav = NavigatorBuilder::new(walled_world())
            .grid(test_grid())
            .landmarks(landmarks())
            .region_count(2)
            .build()
            .unwrap();

        nav.compute_table(GraphKind::Landmark, &mut NoopTableObserver).unwrap();
        assert!(nav.table(GraphKind::Landmark).is_some());
        assert!(nav.table(GraphKind::Grid).is_none());
    }
}
