//! `nav-graph` — navigation graph, builders, search, lookup table, smoothing.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`oracle`]   | `SpatialOracle` — occupancy / obstruction query contract      |
//! | [`graph`]    | `NavGraph` (CSR + region buckets + R-tree), `NavGraphBuilder` |
//! | [`grid`]     | `GridConfig`, uniform-grid graph construction                 |
//! | [`landmark`] | visibility-graph construction from curated landmarks          |
//! | [`search`]   | `SearchScratch`, `Heuristic`, `a_star`, path reconstruction   |
//! | [`lookup`]   | `RegionTable` precompute / persistence, `TableObserver`       |
//! | [`smooth`]   | line-of-sight waypoint pruning                                |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                                |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                        |
//! |------------|---------------------------------------------------------------|
//! | `parallel` | Rayon fan-out of the lookup-table precompute (one search      |
//! |            | scratch per region-pair task).                                |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public config types.     |

pub mod error;
pub mod graph;
pub mod grid;
pub mod landmark;
pub mod lookup;
pub mod oracle;
pub mod search;
pub mod smooth;


pub use error::{GraphError, GraphResult};
pub use graph::{NavGraph, NavGraphBuilder};
pub use grid::{GridConfig, build_grid_graph};
pub use landmark::build_landmark_graph;
pub use lookup::{NoopTableObserver, RegionTable, TableObserver, build_region_table};
pub use oracle::SpatialOracle;
pub use search::{Heuristic, NavPath, SearchScratch, a_star, reconstruct_path};
pub use smooth::smooth_path;
