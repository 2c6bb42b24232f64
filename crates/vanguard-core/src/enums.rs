//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Weapon types the player can carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WeaponType {
    /// Baseline forward shot, always available.
    #[default]
    Basic,
    /// Parallel shots.
    Twin,
    /// Angled shots.
    Double,
    /// Homing missiles.
    Missile,
    /// Orbiting shield orbs.
    Shield,
    /// Trailing option pods that mirror the basic shot.
    Option,
}

impl WeaponType {
    /// Every weapon type, in display order.
    pub const ALL: [WeaponType; 6] = [
        WeaponType::Basic,
        WeaponType::Twin,
        WeaponType::Double,
        WeaponType::Missile,
        WeaponType::Shield,
        WeaponType::Option,
    ];

    /// Weapons that clearance milestones may unlock or upgrade.
    pub const GRANTABLE: [WeaponType; 5] = [
        WeaponType::Twin,
        WeaponType::Double,
        WeaponType::Missile,
        WeaponType::Shield,
        WeaponType::Option,
    ];

    /// Companion representation attached to this weapon, if any.
    pub fn companion(self) -> Option<CompanionKind> {
        match self {
            WeaponType::Shield => Some(CompanionKind::ShieldOrb),
            WeaponType::Option => Some(CompanionKind::OptionPod),
            _ => None,
        }
    }
}

/// Satellite entities whose count tracks a weapon level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanionKind {
    /// Orbits the player, absorbs shots, damages enemies at max level.
    ShieldOrb,
    /// Trails the player and mirrors its basic shot.
    OptionPod,
}

/// Enemy archetypes. Each maps to a stable pool tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Flies straight along its formation direction.
    StraightLine,
    /// Fast, weaving on a sine wave.
    FastPattern,
    /// Slow, looping on a circle.
    SlowPattern,
    /// Turns toward the player while the player is ahead.
    Seeker,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 4] = [
        EnemyKind::StraightLine,
        EnemyKind::FastPattern,
        EnemyKind::SlowPattern,
        EnemyKind::Seeker,
    ];

    pub fn pool_tag(self) -> &'static str {
        match self {
            EnemyKind::StraightLine => "StraightEnemy",
            EnemyKind::FastPattern => "FastEnemy",
            EnemyKind::SlowPattern => "SlowEnemy",
            EnemyKind::Seeker => "SeekerEnemy",
        }
    }

    /// Base score before the wave multiplier.
    pub fn score_value(self) -> u64 {
        match self {
            EnemyKind::StraightLine => 50,
            EnemyKind::FastPattern => 150,
            EnemyKind::SlowPattern => 100,
            EnemyKind::Seeker => 120,
        }
    }
}

/// Projectile archetypes. Each maps to a stable pool tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    Basic,
    Twin,
    Double,
    Missile,
    /// Fired by enemies at the player.
    Enemy,
}

impl ProjectileKind {
    pub const ALL: [ProjectileKind; 5] = [
        ProjectileKind::Basic,
        ProjectileKind::Twin,
        ProjectileKind::Double,
        ProjectileKind::Missile,
        ProjectileKind::Enemy,
    ];

    pub fn pool_tag(self) -> &'static str {
        match self {
            ProjectileKind::Basic => "BasicProjectile",
            ProjectileKind::Twin => "TwinProjectile",
            ProjectileKind::Double => "DoubleProjectile",
            ProjectileKind::Missile => "MissileProjectile",
            ProjectileKind::Enemy => "EnemyProjectile",
        }
    }

    pub fn is_hostile(self) -> bool {
        matches!(self, ProjectileKind::Enemy)
    }
}

/// Wave director state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectorPhase {
    /// Not started.
    #[default]
    Idle,
    /// Waiting out the current wave's pre-wave delay.
    PreWaveDelay,
    /// Walking a group's formation points and spawning.
    SpawningGroup,
    /// Polling the active roster until it empties.
    AwaitingClearance,
    /// Current wave finished; next one (if any) starts on the next step.
    WaveComplete,
    /// No waves remain.
    AllWavesComplete,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Ready,
    Active,
    Paused,
    Victory,
    Defeat,
}

impl GamePhase {
    /// Whether the run has ended, either way.
    pub fn is_finished(self) -> bool {
        matches!(self, GamePhase::Victory | GamePhase::Defeat)
    }
}
