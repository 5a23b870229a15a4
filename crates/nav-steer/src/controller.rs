//! The steering controller: arrival behaviour over a waypoint queue.

use std::collections::VecDeque;

use nav_core::vec2::rotate_toward;
use nav_core::Vec2;

use crate::state::AgentMotion;

// ── Config ────────────────────────────────────────────────────────────────────

/// Tuning parameters for the arrival law.
///
/// Defaults are the reference values: stop at 0.1, slow from 5.0, cruise at
/// 7.0, accelerate at up to 10.0, turn up to 10° per tick.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteeringConfig {
    /// Within this distance a waypoint counts as reached and is consumed.
    pub stopping_radius: f32,

    /// Within this distance the target speed scales down linearly with the
    /// remaining distance (the deceleration ramp).
    pub slowing_radius: f32,

    /// Speed ceiling; also the denominator of the normalized speed.
    pub max_speed: f32,

    /// Acceleration magnitude ceiling per second.
    pub max_accel: f32,

    /// Maximum heading change in radians **per `advance` call**, not per
    /// second — a coarse tick rate turns more slowly in wall time.
    pub max_turn: f32,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            stopping_radius: 0.1,
            slowing_radius: 5.0,
            max_speed: 7.0,
            max_accel: 10.0,
            max_turn: 10.0_f32.to_radians(),
        }
    }
}

// ── Controller ────────────────────────────────────────────────────────────────

/// Drives one agent's [`AgentMotion`] along a waypoint queue.
///
/// Two states: **idle** (queue empty — `advance` is a no-op and the
/// normalized speed reads 0.0) and **following** (queue non-empty — each
/// `advance` applies the arrival law toward the front waypoint).  Consuming
/// the last waypoint returns the controller to idle; there is no error
/// state by design.
pub struct SteeringController {
    pub config: SteeringConfig,
    pub motion: AgentMotion,
    waypoints: VecDeque<Vec2>,
}

impl SteeringController {
    /// An idle controller for an agent in the given kinematic state.
    pub fn new(config: SteeringConfig, motion: AgentMotion) -> Self {
        Self { config, motion, waypoints: VecDeque::new() }
    }

    /// Replace the active path with `points`, switching to following.
    ///
    /// An empty sequence is ignored — the controller stays on whatever it
    /// was doing (idle, or following the previous path).
    pub fn set_path<I: IntoIterator<Item = Vec2>>(&mut self, points: I) {
        let replacement: VecDeque<Vec2> = points.into_iter().collect();
        if !replacement.is_empty() {
            self.waypoints = replacement;
        }
    }

    /// Whether a path is currently being followed.
    #[inline]
    pub fn is_following(&self) -> bool {
        !self.waypoints.is_empty()
    }

    /// The waypoint currently steered toward, if any.
    #[inline]
    pub fn current_waypoint(&self) -> Option<Vec2> {
        self.waypoints.front().copied()
    }

    /// Remaining waypoints, including the current one.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.waypoints.len()
    }

    /// Speed as a fraction of `max_speed` in `[0, 1]` — the value handed to
    /// the animation collaborator.  Reads 0.0 while idle regardless of any
    /// leftover velocity.
    pub fn normalized_speed(&self) -> f32 {
        if self.waypoints.is_empty() {
            0.0
        } else {
            self.motion.speed() / self.config.max_speed
        }
    }

    /// Advance the arrival behaviour by `dt` seconds.
    ///
    /// While following: consume the front waypoint if inside the stopping
    /// radius (skipping motion this tick); otherwise accelerate toward it,
    /// ramping the target speed down linearly inside the slowing radius,
    /// with acceleration and speed clamped, then integrate position and
    /// turn the heading toward the travel direction.  Idle calls return
    /// immediately.
    pub fn advance(&mut self, dt: f32) {
        let Some(&target) = self.waypoints.front() else {
            return;
        };

        let to_target = target - self.motion.position;
        let distance = to_target.length();

        if distance < self.config.stopping_radius {
            // Waypoint reached: advance the queue, skip motion this tick.
            self.waypoints.pop_front();
            return;
        }

        // Linear deceleration ramp inside the slowing radius.
        let target_speed = if distance < self.config.slowing_radius {
            self.config.max_speed * distance / self.config.slowing_radius
        } else {
            self.config.max_speed
        };

        // normalized_or_zero: with a zero stopping radius the agent can sit
        // exactly on the waypoint, and a 0/0 here would poison the state.
        let desired_velocity = to_target.normalized_or_zero() * target_speed;
        let acceleration = (desired_velocity - self.motion.velocity).clamped(self.config.max_accel);

        self.motion.velocity =
            (self.motion.velocity + acceleration * dt).clamped(self.config.max_speed);
        self.motion.position += self.motion.velocity * dt;

        // Turn toward where we are actually going.  Skipped when sitting
        // exactly on the waypoint (no defined direction) or not yet moving.
        if distance > 0.0 && self.motion.velocity != Vec2::ZERO {
            self.motion.heading = rotate_toward(
                self.motion.heading,
                self.motion.velocity.heading(),
                self.config.max_turn,
            );
        }
    }
}
