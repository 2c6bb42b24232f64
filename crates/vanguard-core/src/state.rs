//! Game state snapshot: the read-only view display collaborators pull each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete game state returned after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub director: DirectorPhase,
    /// Current wave number (1-based, 0 before the first wave).
    pub wave_index: u32,
    pub wave_count: u32,
    pub score: ScoreView,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    /// Live projectiles (player and hostile).
    pub projectile_count: u32,
    pub weapons: Vec<WeaponView>,
    pub companions: Vec<CompanionView>,
    pub pool: PoolView,
    pub events: Vec<GameEvent>,
}

/// Running score for the HUD and game-over screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u64,
    pub play_time_secs: f64,
    pub groups_cleared: u32,
    /// Clearance events until the next grant.
    pub groups_until_grant: u32,
    /// Size of the director's active roster.
    pub active_enemies: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub firing: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub kind: EnemyKind,
    pub position: Vec2,
    pub health: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponView {
    pub weapon: WeaponType,
    pub unlocked: bool,
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanionView {
    pub kind: CompanionKind,
    pub index: u8,
    pub position: Vec2,
    pub armed: bool,
}

/// Entity pool statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PoolView {
    /// Instances ever constructed (the pool never shrinks).
    pub constructed: u32,
    /// Instances currently parked in inactive queues.
    pub inactive: u32,
}
