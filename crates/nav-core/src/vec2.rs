//! Planar vector type.
//!
//! The engine models a single horizontal plane, so positions, velocities, and
//! accelerations are all `Vec2`s in world units.  `f32` keeps node storage
//! compact; edge costs are short distances, far from f32 precision limits.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A 2-D point or vector on the navigation plane.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Both components set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Squared length — cheaper than [`length`](Self::length) for comparisons.
    #[inline]
    pub fn length_sq(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    /// Unit vector in the same direction, or `ZERO` for the zero vector.
    pub fn normalized_or_zero(self) -> Vec2 {
        let len = self.length();
        if len > 0.0 { self * (1.0 / len) } else { Vec2::ZERO }
    }

    /// Clamp the length to at most `max`, preserving direction.
    pub fn clamped(self, max: f32) -> Vec2 {
        let len = self.length();
        if len > max { self * (max / len) } else { self }
    }

    /// Heading angle in radians, measured counter-clockwise from +x.
    ///
    /// Undefined (returns 0.0) for the zero vector; callers steering by
    /// heading must guard against zero velocity themselves.
    #[inline]
    pub fn heading(self) -> f32 {
        if self == Vec2::ZERO { 0.0 } else { self.y.atan2(self.x) }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// Rotate `current` toward `target` by at most `max_step` radians.
///
/// Both angles are in radians; the result takes the shorter arc and never
/// overshoots.  Used by the steering controller's per-tick turn.
pub fn rotate_toward(current: f32, target: f32, max_step: f32) -> f32 {
    use std::f32::consts::PI;
    let mut delta = (target - current) % (2.0 * PI);
    if delta > PI {
        delta -= 2.0 * PI;
    } else if delta < -PI {
        delta += 2.0 * PI;
    }
    current + delta.clamp(-max_step, max_step)
}
