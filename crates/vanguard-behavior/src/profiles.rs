//! Archetype-specific behavioural profiles.
//!
//! Consolidates per-archetype parameters so the pool's factories and the
//! scoring feed read from one table.

use vanguard_core::enums::EnemyKind;

use crate::patterns::{Circular, EnemyBehavior, Homing, SineWave, StraightLine};

/// Behavioural profile for an enemy archetype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    /// Default speed when a formation point gives no override.
    pub base_speed: f32,
    /// Seconds between shots before wave modifiers.
    pub fire_interval: f32,
    pub max_health: i32,
    /// Base score before the wave multiplier.
    pub score_value: u64,
}

/// Get the behavioural profile for a given archetype.
pub fn get_profile(kind: EnemyKind) -> EnemyProfile {
    match kind {
        EnemyKind::StraightLine => EnemyProfile {
            base_speed: 5.0,
            fire_interval: 1.0,
            max_health: 1,
            score_value: kind.score_value(),
        },
        EnemyKind::FastPattern => EnemyProfile {
            base_speed: 8.0,
            fire_interval: 1.5,
            max_health: 1,
            score_value: kind.score_value(),
        },
        EnemyKind::SlowPattern => EnemyProfile {
            base_speed: 3.0,
            fire_interval: 2.0,
            max_health: 1,
            score_value: kind.score_value(),
        },
        EnemyKind::Seeker => EnemyProfile {
            base_speed: 4.0,
            fire_interval: 2.5,
            max_health: 2,
            score_value: kind.score_value(),
        },
    }
}

/// Build the behaviour variant for an archetype. Called once per pooled
/// instance at construction; reuse goes through `reset`.
pub fn build_behavior(kind: EnemyKind) -> Box<dyn EnemyBehavior> {
    match kind {
        EnemyKind::StraightLine => Box::new(StraightLine),
        EnemyKind::FastPattern => Box::new(SineWave::new(2.0, 2.0)),
        EnemyKind::SlowPattern => Box::new(Circular::new(2.0, 1.0)),
        EnemyKind::Seeker => Box::new(Homing::new(90f32.to_radians())),
    }
}
