//! Cleanup: find enemies to retire and return finished projectiles to the pool.

use hecs::{Entity, World};
use tracing::debug;

use vanguard_core::components::{Enemy, PoolMember, Projectile};
use vanguard_core::enums::EnemyKind;
use vanguard_core::types::{PlayBounds, Transform};

use crate::pool::EntityPool;

/// Why an enemy leaves play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retirement {
    Killed,
    LeftBounds,
}

/// Collect active enemies with no health left or past the left or
/// vertical edges. Enemies entering from the right are never culled.
pub fn collect_enemies(world: &World, bounds: &PlayBounds, buffer: &mut Vec<(Entity, EnemyKind, Retirement)>) {
    buffer.clear();
    for (entity, (member, transform, enemy)) in world.query::<(&PoolMember, &Transform, &Enemy)>().iter() {
        if !member.active {
            continue;
        }
        let p = transform.position;
        if enemy.is_dead() {
            buffer.push((entity, enemy.kind, Retirement::Killed));
        } else if p.x < bounds.min.x || p.y < bounds.min.y || p.y > bounds.max.y {
            buffer.push((entity, enemy.kind, Retirement::LeftBounds));
        }
    }
}

/// Release spent, expired and out-of-bounds projectiles. Returns the count.
pub fn release_projectiles(world: &mut World, pool: &mut EntityPool, bounds: &PlayBounds) -> usize {
    let finished: Vec<Entity> = world
        .query::<(&PoolMember, &Transform, &Projectile)>()
        .iter()
        .filter(|(_, (m, t, p))| m.active && (p.expired() || !bounds.contains(t.position)))
        .map(|(entity, _)| entity)
        .collect();

    let count = finished.len();
    for entity in finished {
        // Refusals are logged by the pool.
        let _ = pool.release_member(world, entity);
    }
    if count > 0 {
        debug!(count, "projectiles returned to pool");
    }
    count
}
