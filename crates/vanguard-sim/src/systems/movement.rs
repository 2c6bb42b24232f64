//! Enemy behaviour stepping and projectile flight.

use glam::Vec2;
use hecs::World;

use vanguard_behavior::steer::{heading, turn_toward};
use vanguard_behavior::{BehaviorContext, EnemyBehavior};
use vanguard_core::components::{Enemy, PoolMember, Projectile};
use vanguard_core::constants::{MISSILE_ARM_DELAY_SECS, MISSILE_DETECTION_RANGE, MISSILE_TURN_RATE_DEG};
use vanguard_core::enums::ProjectileKind;
use vanguard_core::types::Transform;

/// Move every active enemy through its behaviour variant.
pub fn run_enemies(world: &mut World, dt: f32, player: Option<Vec2>) {
    let ctx = BehaviorContext { dt, player };
    for (_entity, (member, transform, enemy, behavior)) in world.query_mut::<(
        &PoolMember,
        &mut Transform,
        &mut Enemy,
        &mut Box<dyn EnemyBehavior>,
    )>() {
        if !member.active {
            continue;
        }
        transform.position = behavior.advance(transform.position, enemy, &ctx);
        transform.rotation = heading(enemy.direction);
    }
}

/// Age and fly every active projectile. Armed missiles turn toward the
/// nearest enemy in detection range.
pub fn run_projectiles(world: &mut World, dt: f32) {
    let targets: Vec<Vec2> = world
        .query::<(&PoolMember, &Transform, &Enemy)>()
        .iter()
        .filter(|(_, (m, _, _))| m.active)
        .map(|(_, (_, t, _))| t.position)
        .collect();

    let max_turn = MISSILE_TURN_RATE_DEG.to_radians() * dt;
    for (_entity, (member, transform, projectile)) in
        world.query_mut::<(&PoolMember, &mut Transform, &mut Projectile)>()
    {
        if !member.active {
            continue;
        }
        projectile.age += dt;

        if projectile.kind == ProjectileKind::Missile && projectile.age >= MISSILE_ARM_DELAY_SECS {
            let pos = transform.position;
            let nearest = targets
                .iter()
                .filter(|t| t.distance(pos) <= MISSILE_DETECTION_RANGE)
                .min_by(|a, b| a.distance_squared(pos).total_cmp(&b.distance_squared(pos)));
            if let Some(desired) = nearest.and_then(|t| (*t - pos).try_normalize()) {
                transform.rotation = heading(turn_toward(transform.forward(), desired, max_turn));
            }
        }

        transform.position += transform.forward() * projectile.speed * dt;
    }
}
