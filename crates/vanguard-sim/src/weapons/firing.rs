//! Player firing geometry per weapon and level.

use glam::Vec2;

use vanguard_core::constants::*;
use vanguard_core::enums::{ProjectileKind, WeaponType};

use super::progression::WeaponProgression;

/// One projectile to acquire from the pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotPlan {
    pub kind: ProjectileKind,
    pub position: Vec2,
    /// Radians, 0 = +x.
    pub rotation: f32,
}

impl ShotPlan {
    fn new(kind: ProjectileKind, position: Vec2, rotation_deg: f32) -> Self {
        Self {
            kind,
            position,
            rotation: rotation_deg.to_radians(),
        }
    }
}

/// Seconds between volleys, or None for weapons that never fire.
pub fn fire_interval(weapon: WeaponType) -> Option<f32> {
    match weapon {
        WeaponType::Basic => Some(BASIC_FIRE_INTERVAL),
        WeaponType::Twin => Some(TWIN_FIRE_INTERVAL),
        WeaponType::Double => Some(DOUBLE_FIRE_INTERVAL),
        WeaponType::Missile => Some(MISSILE_FIRE_INTERVAL),
        WeaponType::Shield | WeaponType::Option => None,
    }
}

/// Shots one volley of `weapon` at `level` produces from `origin`.
pub fn volley(weapon: WeaponType, level: u8, origin: Vec2) -> Vec<ShotPlan> {
    let up = Vec2::Y * TWIN_SEPARATION;
    let a = DOUBLE_ANGLE_DEG;
    let m = MISSILE_SPREAD_DEG;
    match (weapon, level) {
        (_, 0) => Vec::new(),
        (WeaponType::Basic, _) => vec![ShotPlan::new(ProjectileKind::Basic, origin, 0.0)],
        (WeaponType::Twin, 1) => [origin + up / 2.0, origin - up / 2.0]
            .map(|p| ShotPlan::new(ProjectileKind::Twin, p, 0.0))
            .to_vec(),
        (WeaponType::Twin, 2) => [origin + up, origin, origin - up]
            .map(|p| ShotPlan::new(ProjectileKind::Twin, p, 0.0))
            .to_vec(),
        (WeaponType::Twin, _) => [origin + up, origin + up / 2.0, origin - up / 2.0, origin - up]
            .map(|p| ShotPlan::new(ProjectileKind::Twin, p, 0.0))
            .to_vec(),
        (WeaponType::Double, _) => {
            let angles: &[f32] = match level {
                1 => &[a, -a],
                2 => &[a, -a, a / 2.0, -a / 2.0],
                _ => &[a, -a, a / 2.0, -a / 2.0, a / 3.0, -a / 3.0],
            };
            angles
                .iter()
                .map(|deg| ShotPlan::new(ProjectileKind::Double, origin, *deg))
                .collect()
        }
        (WeaponType::Missile, _) => {
            let angles: &[f32] = match level {
                1 => &[0.0],
                2 => &[m, -m],
                _ => &[0.0, m, -m],
            };
            angles
                .iter()
                .map(|deg| ShotPlan::new(ProjectileKind::Missile, origin, *deg))
                .collect()
        }
        (WeaponType::Shield | WeaponType::Option, _) => Vec::new(),
    }
}

/// Per-weapon fire cooldowns for the player ship.
#[derive(Debug, Clone, Default)]
pub struct Armory {
    cooldowns: [f32; WeaponType::ALL.len()],
}

impl Armory {
    /// Tick cooldowns and collect the shots every ready, unlocked weapon
    /// fires. Option pods mirror each Basic volley from their own position.
    pub fn fire(
        &mut self,
        weapons: &WeaponProgression,
        origin: Vec2,
        pods: &[Vec2],
        dt: f32,
    ) -> Vec<ShotPlan> {
        let mut shots = Vec::new();
        for (slot, weapon) in WeaponType::ALL.iter().enumerate() {
            let Some(interval) = fire_interval(*weapon) else {
                continue;
            };
            let cooldown = &mut self.cooldowns[slot];
            *cooldown = (*cooldown - dt).max(0.0);
            if *cooldown > 0.0 || !weapons.is_unlocked(*weapon) {
                continue;
            }
            *cooldown = interval;
            let level = weapons.level(*weapon);
            shots.extend(volley(*weapon, level, origin));
            if *weapon == WeaponType::Basic {
                for pod in pods {
                    shots.extend(volley(WeaponType::Basic, level, *pod));
                }
            }
        }
        shots
    }

    /// Cool down without firing.
    pub fn idle(&mut self, dt: f32) {
        for cooldown in &mut self.cooldowns {
            *cooldown = (*cooldown - dt).max(0.0);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
