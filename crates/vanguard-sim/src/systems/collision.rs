//! Circle-overlap collision between projectiles, enemies, companions and the
//! player.
//!
//! Damage and `spent` flags are written here; retiring dead enemies and
//! spent projectiles is left to the cleanup pass.

use glam::Vec2;
use hecs::{Entity, World};

use vanguard_core::components::{Companion, Enemy, PoolMember, Projectile};
use vanguard_core::constants::*;
use vanguard_core::enums::CompanionKind;
use vanguard_core::types::Transform;

/// What the player ship ran into this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionOutcome {
    pub player_hit: bool,
    pub enemy_hits: u32,
}

fn overlaps(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance_squared(b) <= (ra + rb) * (ra + rb)
}

pub fn run(world: &mut World, player: Option<Vec2>) -> CollisionOutcome {
    let mut outcome = CollisionOutcome::default();

    let enemies: Vec<(Entity, Vec2)> = world
        .query::<(&PoolMember, &Transform, &Enemy)>()
        .iter()
        .filter(|(_, (m, _, e))| m.active && !e.is_dead())
        .map(|(entity, (_, t, _))| (entity, t.position))
        .collect();
    let projectiles: Vec<(Entity, Vec2, bool, i32)> = world
        .query::<(&PoolMember, &Transform, &Projectile)>()
        .iter()
        .filter(|(_, (m, _, p))| m.active && !p.expired())
        .map(|(entity, (_, t, p))| (entity, t.position, p.kind.is_hostile(), p.damage))
        .collect();
    let orbs: Vec<(Vec2, bool)> = world
        .query::<(&Companion, &Transform)>()
        .iter()
        .filter(|(_, (c, _))| c.kind == CompanionKind::ShieldOrb)
        .map(|(_, (c, t))| (t.position, c.armed))
        .collect();

    // Player shots against enemies. A shot hits at most one enemy.
    for &(shot, pos, hostile, damage) in &projectiles {
        if hostile {
            continue;
        }
        for &(target, enemy_pos) in &enemies {
            if !overlaps(pos, PROJECTILE_RADIUS, enemy_pos, ENEMY_RADIUS) {
                continue;
            }
            if damage_enemy(world, target, damage) {
                mark_spent(world, shot);
                outcome.enemy_hits += 1;
                break;
            }
        }
    }

    // Orbs absorb hostile shots; armed orbs grind down enemies they touch.
    for &(orb_pos, armed) in &orbs {
        for &(shot, pos, hostile, _) in &projectiles {
            if hostile && overlaps(pos, PROJECTILE_RADIUS, orb_pos, SHIELD_ORB_RADIUS) {
                mark_spent(world, shot);
            }
        }
        if armed {
            for &(target, enemy_pos) in &enemies {
                if overlaps(orb_pos, SHIELD_ORB_RADIUS, enemy_pos, ENEMY_RADIUS) {
                    damage_enemy(world, target, 1);
                }
            }
        }
    }

    let Some(player) = player else {
        return outcome;
    };
    for &(_, enemy_pos) in &enemies {
        if overlaps(player, PLAYER_RADIUS, enemy_pos, ENEMY_RADIUS) {
            outcome.player_hit = true;
        }
    }
    for &(shot, pos, hostile, _) in &projectiles {
        if hostile && overlaps(player, PLAYER_RADIUS, pos, PROJECTILE_RADIUS) && !is_spent(world, shot) {
            mark_spent(world, shot);
            outcome.player_hit = true;
        }
    }
    outcome
}

/// Subtract health from a living enemy. Returns false if it was already dead.
pub fn damage_enemy(world: &mut World, entity: Entity, amount: i32) -> bool {
    match world.get::<&mut Enemy>(entity) {
        Ok(mut enemy) if !enemy.is_dead() => {
            enemy.health -= amount;
            true
        }
        _ => false,
    }
}

fn mark_spent(world: &mut World, entity: Entity) {
    if let Ok(mut projectile) = world.get::<&mut Projectile>(entity) {
        projectile.spent = true;
    }
}

fn is_spent(world: &World, entity: Entity) -> bool {
    world
        .get::<&Projectile>(entity)
        .map(|p| p.spent)
        .unwrap_or(true)
}
