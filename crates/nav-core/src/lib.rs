//! `nav-core` — foundational types for the `rust_nav` pathfinding engine.
//!
//! This crate is a dependency of every other `nav-*` crate.  It intentionally
//! has no `nav-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                  |
//! |----------|-------------------------------------------|
//! | [`ids`]  | `NodeId`, `EdgeId`, `RegionId`            |
//! | [`vec2`] | `Vec2` planar vector math                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod vec2;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{EdgeId, NodeId, RegionId};
pub use vec2::Vec2;
