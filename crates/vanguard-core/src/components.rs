//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in systems; the only
//! behaviour here is the per-activation reset from [`crate::pooled`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::direction_or;

/// Marks an entity as owned by the entity pool.
///
/// Pooled entities are never despawned. `active == false` means the entity
/// sits in its pool's inactive queue and every per-tick system skips it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolMember {
    /// Archetype tag the entity was built from and returns to.
    pub tag: String,
    pub active: bool,
}

/// The player ship.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Player;

/// Per-life enemy state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    /// Unit travel direction assigned by the formation.
    pub direction: Vec2,
    pub speed: f32,
    pub health: i32,
    pub max_health: i32,
    /// Seconds between shots after wave modifiers.
    pub fire_interval: f32,
    /// Seconds until the next shot.
    pub fire_cooldown: f32,
    pub projectile_speed_multiplier: f32,
    /// Archetype defaults restored on every activation.
    pub base_speed: f32,
    pub base_fire_interval: f32,
}

impl Enemy {
    pub fn new(kind: EnemyKind, max_health: i32, base_speed: f32, base_fire_interval: f32) -> Self {
        Self {
            kind,
            direction: Vec2::NEG_X,
            speed: base_speed,
            health: max_health,
            max_health,
            fire_interval: base_fire_interval,
            fire_cooldown: base_fire_interval,
            projectile_speed_multiplier: 1.0,
            base_speed,
            base_fire_interval,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Apply formation and wave parameters after a pool acquire.
    pub fn initialize_in_formation(&mut self, init: &FormationInit) {
        self.direction = direction_or(init.direction, Vec2::NEG_X);
        self.speed = init.speed;
        self.health = ((self.max_health as f32 * init.health_multiplier).round() as i32).max(1);
        self.fire_interval = if init.fire_rate_multiplier > 0.0 {
            self.base_fire_interval / init.fire_rate_multiplier
        } else {
            self.base_fire_interval
        };
        self.fire_cooldown = self.fire_interval;
        self.projectile_speed_multiplier = init.projectile_speed_multiplier;
    }
}

/// Per-spawn parameters the wave director hands a freshly acquired enemy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormationInit {
    pub direction: Vec2,
    pub speed: f32,
    pub health_multiplier: f32,
    pub fire_rate_multiplier: f32,
    pub projectile_speed_multiplier: f32,
}

/// Per-life projectile state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub kind: ProjectileKind,
    /// Archetype speed before any multiplier.
    pub base_speed: f32,
    pub speed: f32,
    pub damage: i32,
    pub lifetime: f32,
    /// Seconds since activation.
    pub age: f32,
    /// Set once the projectile has hit something this life.
    pub spent: bool,
}

impl Projectile {
    pub fn new(kind: ProjectileKind, speed: f32, damage: i32, lifetime: f32) -> Self {
        Self {
            kind,
            base_speed: speed,
            speed,
            damage,
            lifetime,
            age: 0.0,
            spent: false,
        }
    }

    pub fn expired(&self) -> bool {
        self.spent || self.age >= self.lifetime
    }
}

/// Weapon-attached satellite (shield orb or option pod).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Companion {
    pub kind: CompanionKind,
    /// Zero-based slot. Slot 0 is created first and removed last.
    pub index: u8,
    /// Orbit phase in radians (orbs) or trailing distance (pods).
    pub offset: f32,
    /// Armed orbs damage enemies they touch.
    pub armed: bool,
}
