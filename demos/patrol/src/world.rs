//! Synthetic walled world for the patrol demo.
//!
//! A 10×10 plane divided into six rooms (3 columns × 2 rows), each room one
//! region.  Interior walls carry doorways so every room connects to its
//! neighbours; the doorway layout forces real detours, which is what makes
//! the heuristic comparison interesting.
//!
//! ```text
//! +-------+--+----+--+-------+        regions (room = region):
//! |   3   |  | 4  |  |   5   |           3 | 4 | 5    (y > 0)
//! +--+ +--+  +-+ +-+  +--+ +-+           0 | 1 | 2    (y < 0)
//! |  | |  |  | | | |  |  | | |
//! |   0   |  | 1  |  |   2   |
//! +-------+--+----+--+-------+
//! ```

use nav_core::{RegionId, Vec2};
use nav_graph::SpatialOracle;

const WALL_X: f32 = 5.0 / 3.0; // interior vertical walls at ±WALL_X
const ROOM_HALF_W: f32 = 5.0 / 3.0;
const ROOM_HALF_H: f32 = 2.5;

/// Axis-aligned rectangle.
#[derive(Copy, Clone)]
pub struct Rect {
    pub center: Vec2,
    pub half: Vec2,
}

impl Rect {
    fn new(cx: f32, cy: f32, hx: f32, hy: f32) -> Self {
        Self { center: Vec2::new(cx, cy), half: Vec2::new(hx, hy) }
    }

    fn overlaps(&self, center: Vec2, half: Vec2) -> bool {
        (self.center.x - center.x).abs() < self.half.x + half.x
            && (self.center.y - center.y).abs() < self.half.y + half.y
    }
}

/// Rectangle-soup implementation of [`SpatialOracle`]: six room regions and
/// a list of wall segments, with the capsule query sampled as a chain of
/// overlapping boxes.
pub struct BoxWorld {
    regions: Vec<(Rect, RegionId)>,
    obstacles: Vec<Rect>,
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

/// Build the six-room world.
pub fn build_world() -> BoxWorld {
    // Rooms, bottom row then top row, left to right.
    let mut regions = Vec::new();
    for row in 0..2 {
        for col in 0..3 {
            let cx = -10.0 / 3.0 + col as f32 * (10.0 / 3.0);
            let cy = if row == 0 { -2.5 } else { 2.5 };
            regions.push((
                Rect::new(cx, cy, ROOM_HALF_W, ROOM_HALF_H),
                RegionId((row * 3 + col) as u16),
            ));
        }
    }

    // Interior walls, 0.1 half-thickness, with doorway gaps.
    let mut obstacles = Vec::new();
    for x in [-WALL_X, WALL_X] {
        // Vertical wall; doorways at y ∈ [-3, -2] and y ∈ [2, 3].
        obstacles.push(Rect::new(x, -4.0, 0.1, 1.0));
        obstacles.push(Rect::new(x, 0.0, 0.1, 2.0));
        obstacles.push(Rect::new(x, 4.0, 0.1, 1.0));
    }
    // Horizontal wall at y = 0; doorways at x ∈ [-4, -3], [-0.5, 0.5], [3, 4].
    obstacles.push(Rect::new(-4.5, 0.0, 0.5, 0.1));
    obstacles.push(Rect::new(-1.75, 0.0, 1.25, 0.1));
    obstacles.push(Rect::new(1.75, 0.0, 1.25, 0.1));
    obstacles.push(Rect::new(4.5, 0.0, 0.5, 0.1));

    BoxWorld { regions, obstacles }
}

/// Hand-placed visibility landmarks: each room's centre plus a point in
/// every doorway, so the sparse graph can see around every corner.
pub fn landmarks() -> Vec<Vec2> {
    vec![
        // Room centres.
        Vec2::new(-10.0 / 3.0, -2.5),
        Vec2::new(0.0, -2.5),
        Vec2::new(10.0 / 3.0, -2.5),
        Vec2::new(-10.0 / 3.0, 2.5),
        Vec2::new(0.0, 2.5),
        Vec2::new(10.0 / 3.0, 2.5),
        // Doorways in the vertical walls.
        Vec2::new(-WALL_X, -2.5),
        Vec2::new(WALL_X, -2.5),
        Vec2::new(-WALL_X, 2.5),
        Vec2::new(WALL_X, 2.5),
        // Doorways in the horizontal wall.
        Vec2::new(-3.5, 0.0),
        Vec2::new(0.0, 0.0),
        Vec2::new(3.5, 0.0),
    ]
}
