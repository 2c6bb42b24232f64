//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Position and facing of an entity in the play field.
/// x grows to the right (enemies enter from +x), y grows up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec2,
    /// Facing angle in radians, 0 = +x.
    pub rotation: f32,
}

impl Transform {
    pub fn new(position: Vec2, rotation: f32) -> Self {
        Self { position, rotation }
    }

    /// Unit vector the entity is facing.
    pub fn forward(&self) -> Vec2 {
        Vec2::from_angle(self.rotation)
    }
}

/// Axis-aligned play field. Entities outside it are retired.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl PlayBounds {
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

impl Default for PlayBounds {
    fn default() -> Self {
        use crate::constants::{ENEMY_DESPAWN_X, FIELD_HALF_HEIGHT, FIELD_RIGHT_X};
        Self {
            min: Vec2::new(ENEMY_DESPAWN_X, -FIELD_HALF_HEIGHT),
            max: Vec2::new(FIELD_RIGHT_X, FIELD_HALF_HEIGHT),
        }
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Normalize a direction, falling back to `fallback` for a zero vector.
pub fn direction_or(direction: Vec2, fallback: Vec2) -> Vec2 {
    direction.try_normalize().unwrap_or(fallback)
}
