//! patrol — demo for the rust_nav hierarchical pathfinding engine.
//!
//! Builds a six-room walled world, constructs both graph sources, loads the
//! inter-region lookup tables (computing and caching them on first run —
//! the grid table is the deliberate one-off offline step and takes a while
//! in debug builds), then answers a patrol request with every heuristic and
//! drives the steering controller along the smoothed path to arrival.

mod world;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use nav_core::{RegionId, Vec2};
use nav_graph::{GridConfig, TableObserver};
use nav_plan::{GraphKind, HeuristicKind, Navigator, NavigatorBuilder};
use nav_steer::{AgentMotion, SteeringConfig, SteeringController};

use world::{BoxWorld, build_world, landmarks};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const GRID_STEP: f32 = 0.5;
const REGION_COUNT: usize = 6;
const TICK_SECS: f32 = 1.0 / 60.0;
const MAX_TICKS: usize = 100_000;

/// Patrol posts the request endpoints are drawn from (three rooms).
const POSTS: [Vec2; 3] =
    [Vec2::new(3.9, 4.3), Vec2::new(4.45, -3.4), Vec2::new(-3.3, -1.0)];

// ── Table progress printer ────────────────────────────────────────────────────

struct PrintProgress;

impl TableObserver for PrintProgress {
    fn on_pair_done(&mut self, a: RegionId, b: RegionId, cost: f32) {
        println!("  {a} ↔ {b}: {cost:.3}");
    }
    fn on_table_done(&mut self, region_count: usize) {
        println!("  table complete ({region_count}×{region_count})");
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn table_path(dir: &Path, kind: GraphKind) -> PathBuf {
    dir.join(format!("{kind}_table.txt"))
}

/// Load the cached lookup table for `kind`, or compute and cache it.
fn load_or_compute_table(nav: &mut Navigator<BoxWorld>, kind: GraphKind, dir: &Path) -> Result<()> {
    let path = table_path(dir, kind);
    if path.exists() {
        nav.load_table(kind, &path)?;
        println!("{kind} table: loaded from {}", path.display());
    } else {
        println!("{kind} table: computing (cached for later runs)…");
        let t0 = Instant::now();
        nav.compute_table(kind, &mut PrintProgress)?;
        nav.save_table(kind, &path)?;
        println!("{kind} table: computed in {:.2} s", t0.elapsed().as_secs_f64());
    }
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== patrol — rust_nav hierarchical pathfinding ===");
    println!("Seed: {SEED}  |  Grid step: {GRID_STEP}  |  Regions: {REGION_COUNT}");
    println!();

    // 1. Build the world and the navigator with both graph sources.
    let grid_config = GridConfig {
        origin: Vec2::new(-5.0, -5.0),
        size: Vec2::new(10.0, 10.0),
        step: GRID_STEP,
        region_count: REGION_COUNT,
    };
    let mut nav = NavigatorBuilder::new(build_world())
        .grid(grid_config)
        .landmarks(landmarks())
        .region_count(REGION_COUNT)
        .build()?;

    for kind in [GraphKind::Grid, GraphKind::Landmark] {
        let g = nav.graph(kind).expect("both sources configured");
        println!(
            "{kind} graph: {} nodes ({} valid), {} edges",
            g.node_count(),
            g.valid_count(),
            g.edge_count()
        );
    }
    println!();

    // 2. Lookup tables: load the cached files or run the offline precompute.
    let cache_dir = PathBuf::from("output/patrol");
    std::fs::create_dir_all(&cache_dir)?;
    load_or_compute_table(&mut nav, GraphKind::Landmark, &cache_dir)?;
    load_or_compute_table(&mut nav, GraphKind::Grid, &cache_dir)?;
    println!();

    // 3. Pick a patrol request: two distinct posts.
    let mut rng = SmallRng::seed_from_u64(SEED);
    let start_post = rng.gen_range(0..POSTS.len());
    let goal_post = loop {
        let g = rng.gen_range(0..POSTS.len());
        if g != start_post {
            break g;
        }
    };
    let (start, goal) = (POSTS[start_post], POSTS[goal_post]);
    println!("Patrol request: {start} → {goal}");
    println!();

    // 4. Answer it with every heuristic on both graphs.
    println!("{:<10} {:<12} {:>8} {:>10}", "Graph", "Heuristic", "Cost", "Waypoints");
    println!("{}", "-".repeat(44));
    let heuristics =
        [HeuristicKind::Null, HeuristicKind::Euclidean, HeuristicKind::RegionTable];
    for kind in [GraphKind::Grid, GraphKind::Landmark] {
        for h in heuristics {
            // Smoothing is what makes the dense grid output followable; the
            // sparse landmark paths are already corner-to-corner.
            let smooth = kind == GraphKind::Grid;
            let path = nav.find_path(start, goal, h, kind, smooth)?;
            println!(
                "{:<10} {:<12} {:>8.3} {:>10}",
                kind.to_string(),
                format!("{h:?}"),
                path.cost,
                path.points.len()
            );
        }
    }
    println!();

    // 5. Follow the smoothed grid path to arrival.
    let path = nav.find_path(start, goal, HeuristicKind::Euclidean, GraphKind::Grid, true)?;
    let goal_pos = *path.points.last().expect("paths are never empty");

    let motion = AgentMotion::at(path.points[0], 0.0);
    let mut agent = SteeringController::new(SteeringConfig::default(), motion);
    agent.set_path(path.points.clone());

    let mut peak_speed = 0.0_f32;
    let mut ticks = 0usize;
    while agent.is_following() && ticks < MAX_TICKS {
        agent.advance(TICK_SECS);
        peak_speed = peak_speed.max(agent.normalized_speed());
        ticks += 1;
    }

    // 6. Summary.
    println!("Steering: {} waypoints in {ticks} ticks ({:.2} s simulated)", path.points.len(), ticks as f32 * TICK_SECS);
    println!("  peak normalized speed : {peak_speed:.2}");
    println!("  final distance to goal: {:.3}", agent.motion.position.distance(goal_pos));
    println!("  idle again            : {}", !agent.is_following());

    Ok(())
}
