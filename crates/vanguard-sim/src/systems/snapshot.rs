//! Snapshot builder: collects ECS state into the display snapshot.

use hecs::World;

use vanguard_core::components::{Companion, Enemy, Player, PoolMember, Projectile};
use vanguard_core::enums::GamePhase;
use vanguard_core::events::GameEvent;
use vanguard_core::state::*;
use vanguard_core::types::{SimTime, Transform};

use crate::director::WaveDirector;
use crate::pool::EntityPool;
use crate::scoring::ClearanceFeed;

/// Read-only inputs that live outside the world.
pub struct SnapshotInputs<'a> {
    pub time: SimTime,
    pub phase: GamePhase,
    pub firing: bool,
    pub director: &'a WaveDirector,
    pub feed: &'a ClearanceFeed,
    pub pool: &'a EntityPool,
}

pub fn build_snapshot(world: &World, inputs: SnapshotInputs<'_>, events: Vec<GameEvent>) -> GameStateSnapshot {
    let player = world
        .query::<(&Player, &Transform)>()
        .iter()
        .map(|(_, (_, t))| PlayerView {
            position: t.position,
            firing: inputs.firing,
        })
        .next()
        .unwrap_or_default();

    let enemies = world
        .query::<(&PoolMember, &Transform, &Enemy)>()
        .iter()
        .filter(|(_, (m, _, _))| m.active)
        .map(|(_, (_, t, e))| EnemyView {
            kind: e.kind,
            position: t.position,
            health: e.health,
        })
        .collect();

    let projectile_count = world
        .query::<(&PoolMember, &Projectile)>()
        .iter()
        .filter(|(_, (m, _))| m.active)
        .count() as u32;

    let mut companions: Vec<CompanionView> = world
        .query::<(&Companion, &Transform)>()
        .iter()
        .map(|(_, (c, t))| CompanionView {
            kind: c.kind,
            index: c.index,
            position: t.position,
            armed: c.armed,
        })
        .collect();
    companions.sort_by_key(|c| (c.kind as u8, c.index));

    GameStateSnapshot {
        time: inputs.time,
        phase: inputs.phase,
        director: inputs.director.phase(),
        wave_index: inputs.director.wave_index(),
        wave_count: inputs.director.wave_count(),
        score: inputs.feed.scoreboard.view(inputs.director.roster().len()),
        player,
        enemies,
        projectile_count,
        weapons: inputs.feed.weapons.views(),
        companions,
        pool: inputs.pool.stats(),
        events,
    }
}
