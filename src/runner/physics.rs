//! Vertical motion of the player under gravity.
//!
//! Grounding is geometric: a body is on the ground when its top edge is at or
//! below `ground_level - sprite_height`. Velocity is rederived from ground
//! contact every frame, so it never drifts while standing.

use super::geometry::Vec2;

/// Position and vertical velocity of a body, in pixels and pixels/second.
/// Negative velocity moves upward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhysicsBody {
    pub position: Vec2,
    pub vertical_velocity: f64,
}

impl PhysicsBody {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            vertical_velocity: 0.0,
        }
    }

    /// Body standing on the ground at horizontal position `x`.
    pub fn grounded_at(x: f64, ground_level: f64, sprite_height: f64) -> Self {
        Self::new(Vec2::new(x, ground_level - sprite_height))
    }

    pub fn is_grounded(&self, ground_level: f64, sprite_height: f64) -> bool {
        self.position.y >= ground_level - sprite_height
    }

    /// Zero the velocity on the ground, otherwise accumulate gravity.
    pub fn apply_gravity(
        &mut self,
        delta_time: f64,
        gravity: f64,
        ground_level: f64,
        sprite_height: f64,
    ) {
        if self.is_grounded(ground_level, sprite_height) {
            self.vertical_velocity = 0.0;
        } else {
            self.vertical_velocity += gravity * delta_time;
        }
    }

    /// Move by the current velocity, then clamp to the ground so a landing
    /// never leaves the body below ground level.
    pub fn advance_position(&mut self, delta_time: f64, ground_level: f64, sprite_height: f64) {
        self.position.y += self.vertical_velocity * delta_time;

        let ground_y = ground_level - sprite_height;
        if self.position.y >= ground_y {
            self.position.y = ground_y;
            self.vertical_velocity = 0.0;
        }
    }

    /// One physics step: [`apply_gravity`](Self::apply_gravity) followed by
    /// [`advance_position`](Self::advance_position).
    pub fn integrate(
        &mut self,
        delta_time: f64,
        gravity: f64,
        ground_level: f64,
        sprite_height: f64,
    ) {
        self.apply_gravity(delta_time, gravity, ground_level, sprite_height);
        self.advance_position(delta_time, ground_level, sprite_height);
    }

    /// Add `jump_velocity` (negative = upward) if the body is on the ground.
    /// Returns false, leaving the body untouched, when airborne.
    pub fn jump(&mut self, jump_velocity: f64, ground_level: f64, sprite_height: f64) -> bool {
        if !self.is_grounded(ground_level, sprite_height) {
            return false;
        }
        self.vertical_velocity += jump_velocity;
        true
    }
}
