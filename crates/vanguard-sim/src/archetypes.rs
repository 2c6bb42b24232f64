//! Archetype blueprints registered in the entity pool, plus the player ship.

use glam::Vec2;
use hecs::{Entity, World};

use vanguard_behavior::{build_behavior, get_profile};
use vanguard_core::components::{Enemy, Player, Projectile};
use vanguard_core::constants::*;
use vanguard_core::enums::{EnemyKind, ProjectileKind};
use vanguard_core::types::Transform;

use crate::pool::{Archetype, EntityPool};

/// Enemy blueprint: profile stats plus the archetype's behaviour variant.
pub struct EnemyArchetype {
    pub kind: EnemyKind,
}

impl Archetype for EnemyArchetype {
    fn construct(&self, world: &mut World) -> Entity {
        let profile = get_profile(self.kind);
        world.spawn((
            Enemy::new(
                self.kind,
                profile.max_health,
                profile.base_speed,
                profile.fire_interval,
            ),
            build_behavior(self.kind),
        ))
    }
}

pub struct ProjectileArchetype {
    pub kind: ProjectileKind,
}

impl ProjectileArchetype {
    /// (speed, damage, lifetime)
    fn stats(&self) -> (f32, i32, f32) {
        match self.kind {
            ProjectileKind::Basic | ProjectileKind::Twin | ProjectileKind::Double => {
                (PLAYER_PROJECTILE_SPEED, 1, PLAYER_PROJECTILE_LIFETIME)
            }
            ProjectileKind::Missile => (MISSILE_SPEED, 2, MISSILE_LIFETIME),
            ProjectileKind::Enemy => (ENEMY_PROJECTILE_SPEED, 1, ENEMY_PROJECTILE_LIFETIME),
        }
    }
}

impl Archetype for ProjectileArchetype {
    fn construct(&self, world: &mut World) -> Entity {
        let (speed, damage, lifetime) = self.stats();
        world.spawn((Projectile::new(self.kind, speed, damage, lifetime),))
    }
}

/// Register every enemy and projectile archetype under its pool tag.
pub fn register_defaults(pool: &mut EntityPool) {
    for kind in EnemyKind::ALL {
        pool.register(kind.pool_tag(), EnemyArchetype { kind });
    }
    for kind in ProjectileKind::ALL {
        pool.register(kind.pool_tag(), ProjectileArchetype { kind });
    }
}

/// Spawn the player ship at its start position.
pub fn spawn_player(world: &mut World) -> Entity {
    world.spawn((
        Player,
        Transform::new(Vec2::new(PLAYER_START_X, PLAYER_START_Y), 0.0),
    ))
}
