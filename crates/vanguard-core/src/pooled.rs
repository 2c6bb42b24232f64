//! The per-activation contract every poolable entity state implements.

use glam::Vec2;

use crate::components::{Enemy, Projectile};

/// Reinitializes per-life state on acquire.
///
/// The pool calls `on_spawn` exactly once per acquire, after the transform is
/// applied and before any system sees the entity. Construction alone never
/// calls it. Nothing from a previous activation may survive the call.
pub trait PooledEntity {
    fn on_spawn(&mut self, position: Vec2);
}

impl PooledEntity for Enemy {
    fn on_spawn(&mut self, _position: Vec2) {
        self.direction = Vec2::NEG_X;
        self.speed = self.base_speed;
        self.health = self.max_health;
        self.fire_interval = self.base_fire_interval;
        self.fire_cooldown = self.base_fire_interval;
        self.projectile_speed_multiplier = 1.0;
    }
}

impl PooledEntity for Projectile {
    fn on_spawn(&mut self, _position: Vec2) {
        self.speed = self.base_speed;
        self.age = 0.0;
        self.spent = false;
    }
}
