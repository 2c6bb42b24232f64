//! Player weapons fire through the pool while the trigger is held.

use glam::Vec2;
use hecs::World;
use tracing::error;

use vanguard_core::components::Companion;
use vanguard_core::enums::CompanionKind;
use vanguard_core::types::Transform;

use crate::pool::EntityPool;
use crate::weapons::firing::Armory;
use crate::weapons::progression::WeaponProgression;

pub fn run(
    world: &mut World,
    pool: &mut EntityPool,
    armory: &mut Armory,
    weapons: &WeaponProgression,
    origin: Vec2,
    firing: bool,
    dt: f32,
) {
    if !firing {
        armory.idle(dt);
        return;
    }

    let pods: Vec<Vec2> = world
        .query::<(&Companion, &Transform)>()
        .iter()
        .filter(|(_, (c, _))| c.kind == CompanionKind::OptionPod)
        .map(|(_, (_, t))| t.position)
        .collect();

    for shot in armory.fire(weapons, origin, &pods, dt) {
        if let Err(err) = pool.acquire(world, shot.kind.pool_tag(), Transform::new(shot.position, shot.rotation)) {
            error!(%err, "player shot dropped");
        }
    }
}
