//! Enemy firing: behaviours decide when, the pool supplies the projectile.

use glam::Vec2;
use hecs::World;
use tracing::error;

use vanguard_behavior::steer::heading;
use vanguard_behavior::{BehaviorContext, EnemyBehavior, Shot};
use vanguard_core::components::{Enemy, PoolMember, Projectile};
use vanguard_core::enums::ProjectileKind;
use vanguard_core::types::Transform;

use crate::pool::EntityPool;

pub fn run(world: &mut World, pool: &mut EntityPool, dt: f32, player: Option<Vec2>) {
    let ctx = BehaviorContext { dt, player };
    let mut shots: Vec<Shot> = Vec::new();
    for (_entity, (member, transform, enemy, behavior)) in world.query_mut::<(
        &PoolMember,
        &Transform,
        &mut Enemy,
        &mut Box<dyn EnemyBehavior>,
    )>() {
        if !member.active {
            continue;
        }
        if let Some(shot) = behavior.attempt_fire(transform.position, enemy, &ctx) {
            shots.push(shot);
        }
    }

    let tag = ProjectileKind::Enemy.pool_tag();
    for shot in shots {
        let transform = Transform::new(shot.origin, heading(shot.direction));
        match pool.acquire(world, tag, transform) {
            Ok(entity) => {
                if let Ok(mut projectile) = world.get::<&mut Projectile>(entity) {
                    projectile.speed = projectile.base_speed * shot.speed_multiplier;
                }
            }
            Err(err) => error!(%err, "enemy shot dropped"),
        }
    }
}
