//! Companion motion: orbs orbit the player, pods ease toward their slot.

use hecs::World;

use vanguard_core::components::Companion;
use vanguard_core::constants::{OPTION_POD_FOLLOW_RATE, SHIELD_ORBIT_SPEED_DEG};
use vanguard_core::enums::CompanionKind;
use vanguard_core::types::Transform;

use crate::weapons::companions::{companion_position, player_position};

pub fn run(world: &mut World, dt: f32) {
    let player = player_position(world);
    let orbit_step = SHIELD_ORBIT_SPEED_DEG.to_radians() * dt;
    let follow = (OPTION_POD_FOLLOW_RATE * dt).min(1.0);

    for (_entity, (companion, transform)) in world.query_mut::<(&mut Companion, &mut Transform)>() {
        match companion.kind {
            CompanionKind::ShieldOrb => {
                companion.offset = (companion.offset + orbit_step).rem_euclid(std::f32::consts::TAU);
                transform.position = companion_position(companion, player);
            }
            CompanionKind::OptionPod => {
                let slot = companion_position(companion, player);
                transform.position += (slot - transform.position) * follow;
            }
        }
    }
}
