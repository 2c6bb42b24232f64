//! Events emitted by the simulation for HUD and message feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Per-tick event feed. Drained into every snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A wave began (wave numbers start at 1).
    WaveStarted { wave: u32, name: String },
    /// An enemy was acquired from the pool and placed in formation.
    EnemySpawned { wave: u32, pool_tag: String },
    /// An enemy on the roster was destroyed or left the field.
    EnemyDestroyed { kind: EnemyKind, score_awarded: u64 },
    /// The active roster emptied while the director awaited clearance.
    GroupCleared { groups_cleared: u32 },
    /// A clearance milestone unlocked or upgraded a weapon.
    WeaponGranted {
        weapon: WeaponType,
        level: u8,
        unlocked: bool,
    },
    /// Every group of the wave was spawned and cleared.
    WaveCompleted { wave: u32 },
    Victory,
    Defeat,
}
