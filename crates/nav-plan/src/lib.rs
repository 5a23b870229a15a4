//! `nav-plan` — the path-request entrypoint.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`planner`] | `Navigator<O>` — `find_path` over grid/landmark graphs    |
//! | [`builder`] | `NavigatorBuilder` — assemble graphs, attach lookup tables |
//! | [`error`]   | `PlanError`, `PlanResult<T>`                               |
//!
//! # Request flow
//!
//! A [`find_path`][planner::Navigator::find_path] call resolves both
//! endpoints to regions via the spatial oracle, snaps them onto the chosen
//! graph, runs the search with the chosen heuristic, reconstructs the
//! position path, and optionally smooths it.  Construction errors (bad
//! landmark data, malformed lookup tables) surface from the builder and
//! loaders at startup; per-request failures (endpoint outside all regions,
//! unreachable goal) come back as recoverable [`PlanError`]s and never
//! poison the navigator.

pub mod builder;
pub mod error;
pub mod planner;

#[cfg(test)]
mod tests;

pub use builder::NavigatorBuilder;
pub use error::{PlanError, PlanResult};
pub use planner::{GraphKind, HeuristicKind, Navigator};
