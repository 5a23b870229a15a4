//! Inter-region minimum-cost lookup table.
//!
//! For every pair of distinct regions, the table holds the cheapest path
//! cost the search ever found between any node of one region and any node
//! of the other.  [`Heuristic::RegionTable`][crate::Heuristic::RegionTable]
//! consults it to estimate long-range remaining cost without exploring.
//!
//! # Lifecycle
//!
//! The exhaustive precompute is O(regions² × nodes-per-region²) searches —
//! deliberately a run-once, offline step.  [`RegionTable::save`] persists
//! the result so later runs [`RegionTable::load`] it instead.
//!
//! # Persisted format
//!
//! Plain text: one value per line, row-major over the R×R matrix, no
//! header.  The reader must know R in advance; a file with the wrong value
//! count or an unparsable line is a fatal configuration error.

use std::path::Path;

use nav_core::RegionId;

use crate::error::{GraphError, GraphResult};
use crate::graph::NavGraph;
use crate::search::{Heuristic, SearchScratch, a_star};

// ── RegionTable ───────────────────────────────────────────────────────────────

/// Symmetric R×R matrix of minimum observed inter-region path costs.
///
/// The diagonal is stored as 0.0 but never consulted (same-region queries
/// fall back to the Euclidean heuristic).  Region pairs with no connecting
/// path hold `f32::INFINITY`.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionTable {
    region_count: usize,
    /// Row-major values, length `region_count²`.
    values: Vec<f32>,
}

impl RegionTable {
    /// An all-zero table for `region_count` regions (used by the builder;
    /// loaders and precompute produce filled tables).
    pub fn zeroed(region_count: usize) -> Self {
        Self { region_count, values: vec![0.0; region_count * region_count] }
    }

    pub fn region_count(&self) -> usize {
        self.region_count
    }

    /// Minimum observed cost between regions `a` and `b`.
    #[inline]
    pub fn get(&self, a: RegionId, b: RegionId) -> f32 {
        self.values[a.index() * self.region_count + b.index()]
    }

    /// Set both `(a, b)` and `(b, a)` — the table is symmetric by
    /// construction.
    pub fn set_symmetric(&mut self, a: RegionId, b: RegionId, cost: f32) {
        self.values[a.index() * self.region_count + b.index()] = cost;
        self.values[b.index() * self.region_count + a.index()] = cost;
    }

    // ── Persistence ───────────────────────────────────────────────────────

    /// Write the table to `path`: one value per line, row-major.
    ///
    /// Values are formatted with Rust's shortest round-trip float notation,
    /// so `load` reproduces the matrix bit-exactly.
    pub fn save(&self, path: &Path) -> GraphResult<()> {
        let text: String = self.values.iter().map(|v| format!("{v}\n")).collect();
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Read a table for `region_count` regions back from `path`.
    ///
    /// # Errors
    ///
    /// [`GraphError::TableSize`] when the file does not hold exactly
    /// `region_count²` values, [`GraphError::TableValue`] on an unparsable
    /// line — both fatal configuration errors by design.
    pub fn load(path: &Path, region_count: usize) -> GraphResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let expected = region_count * region_count;

        let mut values = Vec::with_capacity(expected);
        for (i, line) in text.lines().enumerate() {
            let v: f32 = line.trim().parse().map_err(|_| GraphError::TableValue {
                line: i + 1,
                value: line.to_string(),
            })?;
            values.push(v);
        }

        if values.len() != expected {
            return Err(GraphError::TableSize { expected, got: values.len() });
        }
        Ok(Self { region_count, values })
    }
}

// ── Progress observer ─────────────────────────────────────────────────────────

/// Callbacks fired by [`build_region_table`] so long precomputes can report
/// progress.  All methods default to no-ops.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl TableObserver for Progress {
///     fn on_pair_done(&mut self, a: RegionId, b: RegionId, cost: f32) {
///         println!("{a} ↔ {b}: {cost}");
///     }
/// }
/// ```
pub trait TableObserver {
    /// Called once per unordered region pair, after its minimum is known.
    ///
    /// Under the `parallel` feature the pairs are computed concurrently but
    /// these callbacks still fire sequentially, after the join.
    fn on_pair_done(&mut self, _a: RegionId, _b: RegionId, _cost: f32) {}

    /// Called once after the whole table is filled.
    fn on_table_done(&mut self, _region_count: usize) {}
}

/// A [`TableObserver`] that does nothing.
pub struct NoopTableObserver;

impl TableObserver for NoopTableObserver {}

// ── Precompute ────────────────────────────────────────────────────────────────

/// Exhaustively compute the inter-region table for `graph`.
///
/// Every unordered pair of distinct regions is measured by running the full
/// Euclidean-heuristic search between every node pair drawn from the two
/// region buckets, resetting the scratch between runs.  Searches that find
/// no path contribute nothing; a pair with no successful search at all
/// stays at `f32::INFINITY`.
///
/// With the `parallel` feature the pairs fan out on Rayon, one private
/// [`SearchScratch`] per task — the shared graph is only ever read.
pub fn build_region_table<O: TableObserver>(graph: &NavGraph, observer: &mut O) -> RegionTable {
    let region_count = graph.region_count();

    let pairs: Vec<(RegionId, RegionId)> = (0..region_count)
        .flat_map(|i| ((i + 1)..region_count).map(move |j| (RegionId(i as u16), RegionId(j as u16))))
        .collect();

    #[cfg(feature = "parallel")]
    let costs: Vec<f32> = {
        use rayon::prelude::*;
        pairs.par_iter().map(|&(a, b)| min_pair_cost(graph, a, b)).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let costs: Vec<f32> = pairs.iter().map(|&(a, b)| min_pair_cost(graph, a, b)).collect();

    let mut table = RegionTable::zeroed(region_count);
    for (&(a, b), &cost) in pairs.iter().zip(&costs) {
        table.set_symmetric(a, b, cost);
        observer.on_pair_done(a, b, cost);
    }
    observer.on_table_done(region_count);
    table
}

/// Minimum search cost over all node pairs drawn from two region buckets.
fn min_pair_cost(graph: &NavGraph, a: RegionId, b: RegionId) -> f32 {
    let mut scratch = SearchScratch::new(graph.node_count());
    let mut min = f32::INFINITY;

    for &start in &graph.regions[a.index()] {
        for &goal in &graph.regions[b.index()] {
            scratch.reset();
            if let Ok(cost) = a_star(graph, &mut scratch, start, goal, Heuristic::Euclidean) {
                if cost < min {
                    min = cost;
                }
            }
        }
    }
    min
}
