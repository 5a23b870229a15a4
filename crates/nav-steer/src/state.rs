//! Agent motion state.

use nav_core::Vec2;

/// The kinematic state of a single steered agent.
///
/// Mutated in place by
/// [`SteeringController::advance`][crate::SteeringController::advance] every
/// tick while a path is active; readable at any time by rendering or
/// animation collaborators.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentMotion {
    /// Position on the navigation plane.
    pub position: Vec2,

    /// Facing angle in radians, counter-clockwise from +x.  Rotated toward
    /// the travel direction at a bounded rate, so it lags the velocity.
    pub heading: f32,

    /// Current velocity.  Persists across paths — a new path picks up
    /// whatever momentum the last one left.
    pub velocity: Vec2,
}

impl AgentMotion {
    /// At rest at `position`, facing `heading`.
    pub fn at(position: Vec2, heading: f32) -> Self {
        Self { position, heading, velocity: Vec2::ZERO }
    }

    /// Current speed (velocity magnitude).
    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

impl Default for AgentMotion {
    fn default() -> Self {
        Self::at(Vec2::ZERO, 0.0)
    }
}
