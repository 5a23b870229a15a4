//! `nav-steer` — waypoint-following steering with arrival behaviour.
//!
//! # Crate layout
//!
//! | Module         | Contents                                            |
//! |----------------|-----------------------------------------------------|
//! | [`state`]      | `AgentMotion` — position, heading, velocity         |
//! | [`controller`] | `SteeringConfig`, `SteeringController::advance(dt)` |
//!
//! # Movement model
//!
//! The controller is fed an ordered waypoint list ([`set_path`]) and driven
//! by an external scheduler calling [`advance`] once per simulation tick
//! with the elapsed time.  Each call is O(1) arithmetic and never errors —
//! an empty path is a no-op, not a failure.  The core makes no assumption
//! about wall-clock framing beyond the elapsed-time value it is handed.
//!
//! [`set_path`]: controller::SteeringController::set_path
//! [`advance`]: controller::SteeringController::advance

pub mod controller;
pub mod state;


pub use controller::{SteeringConfig, SteeringController};
pub use state::AgentMotion;
