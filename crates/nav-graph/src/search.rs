//! Best-first search (A*/Dijkstra) over a [`NavGraph`].
//!
//! # Scratch state
//!
//! Per-search mutable state lives in a [`SearchScratch`] arena indexed by
//! `NodeId`, not on the graph, so the graph stays shareable and read-only.
//! A cost-so-far of `0.0` is the *unvisited sentinel*: edge costs are
//! strictly positive (nodes are never co-located), so no reachable node
//! other than the start can legitimately have cost 0.  The scratch must be
//! [`reset`](SearchScratch::reset) before every search.
//!
//! # Termination
//!
//! The search stops early once the goal has been reached *and* the popped
//! node's `f = cost_so_far + h` exceeds the goal's recorded cost — the
//! standard A* optimality cutoff, valid whenever `h` never overestimates.
//! The [`Heuristic::RegionTable`] variant can overestimate (see its docs),
//! trading optimality for pruning on long inter-region routes.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use nav_core::{NodeId, RegionId, Vec2};

use crate::error::{GraphError, GraphResult};
use crate::graph::NavGraph;
use crate::lookup::RegionTable;

// ── Scratch arena ─────────────────────────────────────────────────────────────

/// Diagnostic tag recording how far the search got with each node.
/// Purely observational — the algorithm never branches on it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum NodeMark {
    #[default]
    Untouched,
    /// Entered the open list at least once.
    Opened,
}

/// Per-search mutable state, indexed by `NodeId`.
///
/// One scratch serves one graph at a time; concurrent searches over the
/// same graph each need their own instance.
pub struct SearchScratch {
    /// Cumulative cost from the start node.  `0.0` = unvisited sentinel.
    pub cost_so_far: Vec<f32>,

    /// Predecessor on the cheapest known path.  `NodeId::INVALID` = none.
    pub prev: Vec<NodeId>,

    /// Diagnostic visitation tags (see [`NodeMark`]).
    pub mark: Vec<NodeMark>,
}

impl SearchScratch {
    /// Scratch sized for a graph of `node_count` nodes, in reset state.
    pub fn new(node_count: usize) -> Self {
        Self {
            cost_so_far: vec![0.0; node_count],
            prev: vec![NodeId::INVALID; node_count],
            mark: vec![NodeMark::default(); node_count],
        }
    }

    /// Restore the unvisited sentinel state.  Required before every search.
    pub fn reset(&mut self) {
        self.cost_so_far.fill(0.0);
        self.prev.fill(NodeId::INVALID);
        self.mark.fill(NodeMark::default());
    }

    /// How many nodes entered the open list in the last search (diagnostic).
    pub fn opened_count(&self) -> usize {
        self.mark.iter().filter(|&&m| m == NodeMark::Opened).count()
    }
}

// ── Heuristic ─────────────────────────────────────────────────────────────────

/// Remaining-cost estimator, selected per request.
///
/// A tagged enum rather than a closure parameter: the three strategies are
/// fixed, and dispatching through one `match` keeps call sites free of
/// higher-order lifetime plumbing.
#[derive(Copy, Clone)]
pub enum Heuristic<'a> {
    /// `h ≡ 0` — degrades the search to Dijkstra's algorithm.  Globally
    /// optimal, maximal exploration.
    Null,

    /// Straight-line distance to the goal.  Admissible here (every edge is
    /// at least as long as the straight line between its endpoints), so
    /// paths stay optimal with far less expansion than [`Null`](Self::Null).
    Euclidean,

    /// Precomputed minimum inter-region cost between the candidate's region
    /// and the goal's region; falls back to Euclidean when start and goal
    /// share a region.
    ///
    /// **Not guaranteed admissible**: the table holds a minimum over
    /// sampled node pairs, not a geometric lower bound, so it can
    /// overestimate for candidates far from the sampled minimum and the
    /// early-exit may then return a slightly suboptimal path.  Accepted
    /// behaviour — the payoff is large pruning on long inter-region routes.
    RegionTable(&'a RegionTable),
}

impl Heuristic<'_> {
    /// Estimate remaining cost from `node` to `goal`.
    ///
    /// `start_region` is the region of the *request's* start node; the
    /// table variant only engages when it differs from the goal's region.
    fn estimate(&self, graph: &NavGraph, node: NodeId, goal: NodeId, start_region: RegionId) -> f32 {
        match self {
            Heuristic::Null => 0.0,
            Heuristic::Euclidean => euclidean(graph, node, goal),
            Heuristic::RegionTable(table) => {
                let goal_region = graph.node_region[goal.index()];
                if start_region == goal_region {
                    euclidean(graph, node, goal)
                } else {
                    table.get(graph.node_region[node.index()], goal_region)
                }
            }
        }
    }
}

#[inline]
fn euclidean(graph: &NavGraph, node: NodeId, goal: NodeId) -> f32 {
    graph.node_pos[node.index()].distance(graph.node_pos[goal.index()])
}

// ── Open list entry ───────────────────────────────────────────────────────────

/// Min-heap entry ordered by ascending `f`, ties broken by `NodeId` so runs
/// are deterministic (tie order is otherwise a documented non-requirement).
struct OpenEntry {
    f: f32,
    node: NodeId,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the smallest f on top.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.node.cmp(&self.node))
    }
}
impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

/// Run best-first search from `start` to `goal`.
///
/// Precondition: `scratch` is reset (all cost-so-far at the 0.0 sentinel)
/// and sized for `graph`.  On success returns the goal's cost; the path is
/// then read out of `scratch.prev` via [`reconstruct_path`].
///
/// # Errors
///
/// [`GraphError::NoPath`] when the frontier exhausts without reaching the
/// goal — the scratch then holds no usable predecessor chain for `goal`
/// and callers must not walk it.
pub fn a_star(
    graph: &NavGraph,
    scratch: &mut SearchScratch,
    start: NodeId,
    goal: NodeId,
    heuristic: Heuristic<'_>,
) -> GraphResult<f32> {
    debug_assert_eq!(scratch.cost_so_far.len(), graph.node_count());

    if start == goal {
        return Ok(0.0);
    }

    let start_region = graph.node_region[start.index()];
    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    open.push(OpenEntry { f: 0.0, node: start });
    scratch.mark[start.index()] = NodeMark::Opened;

    while let Some(OpenEntry { node: current, .. }) = open.pop() {
        let current_cost = scratch.cost_so_far[current.index()];

        // Optimality cutoff: the goal has been reached and every remaining
        // frontier entry estimates at least as expensive.  Recomputed from
        // the latest cost-so-far — the popped entry itself may be stale.
        let goal_cost = scratch.cost_so_far[goal.index()];
        if goal_cost != 0.0
            && current_cost + heuristic.estimate(graph, current, goal, start_region) > goal_cost
        {
            break;
        }

        // The goal is never expanded; its neighbours were relaxed when it
        // was discovered.
        if current == goal {
            continue;
        }

        for edge in graph.out_edges(current) {
            let neighbour = graph.edge_to[edge.index()];
            let new_cost = current_cost + graph.edge_cost[edge.index()];

            // Relax: first visit (sentinel) or a strictly cheaper route.
            let known = scratch.cost_so_far[neighbour.index()];
            if known == 0.0 || new_cost < known {
                scratch.cost_so_far[neighbour.index()] = new_cost;
                scratch.prev[neighbour.index()] = current;
                scratch.mark[neighbour.index()] = NodeMark::Opened;
                open.push(OpenEntry {
                    f: new_cost + heuristic.estimate(graph, neighbour, goal, start_region),
                    node: neighbour,
                });
            }
        }
    }

    let goal_cost = scratch.cost_so_far[goal.index()];
    if goal_cost == 0.0 {
        return Err(GraphError::NoPath { from: start, to: goal });
    }
    Ok(goal_cost)
}

/// Walk the predecessor chain left in `scratch` by a successful [`a_star`]
/// call, yielding positions from `start` through `goal`.
///
/// # Errors
///
/// [`GraphError::NoPath`] if the goal was never reached (cost still at the
/// sentinel) or the chain is broken — never panics on a dangling
/// predecessor.
pub fn reconstruct_path(
    graph: &NavGraph,
    scratch: &SearchScratch,
    start: NodeId,
    goal: NodeId,
) -> GraphResult<Vec<Vec2>> {
    if start != goal && scratch.cost_so_far[goal.index()] == 0.0 {
        return Err(GraphError::NoPath { from: start, to: goal });
    }

    let mut points = Vec::new();
    let mut current = goal;
    while current != start {
        points.push(graph.node_pos[current.index()]);
        current = scratch.prev[current.index()];
        if current == NodeId::INVALID {
            return Err(GraphError::NoPath { from: start, to: goal });
        }
    }
    points.push(graph.node_pos[start.index()]);
    points.reverse();
    Ok(points)
}

// ── NavPath ───────────────────────────────────────────────────────────────────

/// A completed path request: positions from start to goal, plus the graph
/// cost the search reported.
///
/// Positions, not node references — the follower owns its path outright and
/// outlives any particular graph.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavPath {
    /// Waypoints in travel order, snapped start position first, snapped
    /// goal position last.
    pub points: Vec<Vec2>,

    /// Goal cost-so-far from the search (graph distance, not smoothed
    /// length).
    pub cost: f32,
}
