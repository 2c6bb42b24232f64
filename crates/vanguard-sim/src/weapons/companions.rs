//! Companion-count sync for satellite weapons.
//!
//! Companions are plain hecs entities, spawned and despawned directly (they
//! are not pooled). A sync keeps every companion whose index is still below
//! the target count, despawns the rest, and creates the missing indices.

use glam::Vec2;
use hecs::{Entity, World};
use tracing::debug;

use vanguard_core::components::{Companion, Player};
use vanguard_core::constants::*;
use vanguard_core::enums::{CompanionKind, WeaponType};
use vanguard_core::types::Transform;

/// Outcome of one sync.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub created: u32,
    pub removed: u32,
}

/// Sync the companions of `weapon` to `level`, if it has any.
pub fn sync_for_weapon(world: &mut World, weapon: WeaponType, level: u8, max_level: u8) -> SyncReport {
    match weapon.companion() {
        Some(kind) => sync(world, kind, level, max_level),
        None => SyncReport::default(),
    }
}

/// Reconcile the live `kind` companions to `target` entities.
pub fn sync(world: &mut World, kind: CompanionKind, target: u8, max_level: u8) -> SyncReport {
    let mut report = SyncReport::default();
    let armed = kind == CompanionKind::ShieldOrb && target >= max_level;

    let mut present = Vec::new();
    let mut excess: Vec<Entity> = Vec::new();
    for (entity, companion) in world.query_mut::<&mut Companion>() {
        if companion.kind != kind {
            continue;
        }
        if companion.index >= target {
            excess.push(entity);
        } else {
            companion.armed = armed;
            present.push(companion.index);
        }
    }

    for entity in excess {
        let _ = world.despawn(entity);
        report.removed += 1;
    }

    let anchor = player_position(world);
    for index in (0..target).filter(|i| !present.contains(i)) {
        let offset = initial_offset(kind, index);
        let companion = Companion {
            kind,
            index,
            offset,
            armed,
        };
        let position = companion_position(&companion, anchor);
        world.spawn((companion, Transform::new(position, 0.0)));
        report.created += 1;
    }

    if report.created > 0 || report.removed > 0 {
        debug!(?kind, target, created = report.created, removed = report.removed, "companions synced");
    }
    report
}

/// Orbit phase in radians for orbs, trailing distance for pods.
pub fn initial_offset(kind: CompanionKind, index: u8) -> f32 {
    match kind {
        CompanionKind::ShieldOrb => (index as f32 * SHIELD_PHASE_STEP_DEG).to_radians(),
        CompanionKind::OptionPod => (index as f32 + 1.0) * OPTION_POD_SPACING,
    }
}

/// Where a companion sits relative to the player.
pub fn companion_position(companion: &Companion, player: Vec2) -> Vec2 {
    match companion.kind {
        CompanionKind::ShieldOrb => player + Vec2::from_angle(companion.offset) * SHIELD_ORBIT_RADIUS,
        CompanionKind::OptionPod => player - Vec2::new(companion.offset, 0.0),
    }
}

pub(crate) fn player_position(world: &World) -> Vec2 {
    world
        .query::<(&Player, &Transform)>()
        .iter()
        .map(|(_, (_, t))| t.position)
        .next()
        .unwrap_or(Vec2::new(PLAYER_START_X, PLAYER_START_Y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetypes::spawn_player;

    fn companions(world: &World, kind: CompanionKind) -> Vec<(Entity, u8, f32, bool)> {
        let mut out: Vec<_> = world
            .query::<&Companion>()
            .iter()
            .filter(|(_, c)| c.kind == kind)
            .map(|(e, c)| (e, c.index, c.offset, c.armed))
            .collect();
        out.sort_by_key(|c| c.1);
        out
    }

    #[test]
    fn test_sync_grows_without_touching_existing() {
        let mut world = World::new();
        spawn_player(&mut world);
        let report = sync(&mut world, CompanionKind::ShieldOrb, 1, 3);
        assert_eq!(report, SyncReport { created: 1, removed: 0 });
        let first = companions(&world, CompanionKind::ShieldOrb)[0].0;

        sync(&mut world, CompanionKind::ShieldOrb, 2, 3);
        let orbs = companions(&world, CompanionKind::ShieldOrb);
        assert_eq!(orbs.len(), 2);
        assert_eq!(orbs[0].0, first, "index 0 keeps its entity");
        assert!((orbs[1].2 - 120f32.to_radians()).abs() < 1e-5);
    }

    #[test]
    fn test_sync_shrinks_from_highest_index() {
        let mut world = World::new();
        spawn_player(&mut world);
        sync(&mut world, CompanionKind::OptionPod, 3, 3);
        let report = sync(&mut world, CompanionKind::OptionPod, 1, 3);
        assert_eq!(report, SyncReport { created: 0, removed: 2 });
        let pods = companions(&world, CompanionKind::OptionPod);
        assert_eq!(pods.len(), 1);
        assert_eq!(pods[0].1, 0);
        assert_eq!(pods[0].2, OPTION_POD_SPACING);
    }

    #[test]
    fn test_orbs_arm_at_max_level() {
        let mut world = World::new();
        spawn_player(&mut world);
        sync(&mut world, CompanionKind::ShieldOrb, 2, 3);
        assert!(companions(&world, CompanionKind::ShieldOrb).iter().all(|c| !c.3));
        sync(&mut world, CompanionKind::ShieldOrb, 3, 3);
        assert!(companions(&world, CompanionKind::ShieldOrb).iter().all(|c| c.3));
    }

    #[test]
    fn test_non_companion_weapon_is_noop() {
        let mut world = World::new();
        let report = sync_for_weapon(&mut world, WeaponType::Twin, 3, 3);
        assert_eq!(report, SyncReport::default());
        assert_eq!(world.len(), 0);
    }
}
