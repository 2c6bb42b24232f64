//! Session configuration.
//!
//! Every field has a default, so a JSON config only needs the keys it
//! overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{read_to_string, LoadError};
use crate::types::PlayBounds;

/// Wave director tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectorTuning {
    pub base_health_multiplier: f32,
    /// Added to the health scale once per wave number.
    pub health_increase_per_wave: f32,
    /// Seconds between roster sweeps while awaiting clearance.
    pub clearance_poll_interval_secs: f64,
}

impl Default for DirectorTuning {
    fn default() -> Self {
        Self {
            base_health_multiplier: BASE_HEALTH_MULTIPLIER,
            health_increase_per_wave: HEALTH_INCREASE_PER_WAVE,
            clearance_poll_interval_secs: CLEARANCE_POLL_INTERVAL_SECS,
        }
    }
}

impl DirectorTuning {
    /// `base × (1 + increment × wave) × wave modifier × group modifier`.
    pub fn health_multiplier(&self, wave_index: u32, wave_modifier: f32, group_modifier: f32) -> f32 {
        self.base_health_multiplier
            * (1.0 + self.health_increase_per_wave * wave_index as f32)
            * wave_modifier
            * group_modifier
    }
}

/// Configuration for starting a new session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// RNG seed for grant selection. Same seed, same grants.
    pub seed: u64,
    /// Fixed simulation rate (Hz).
    pub tick_rate: u32,
    pub director: DirectorTuning,
    /// Clearance events per weapon grant.
    pub groups_per_grant: u32,
    pub max_weapon_level: u8,
    pub bounds: PlayBounds,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_rate: TICK_RATE,
            director: DirectorTuning::default(),
            groups_per_grant: DEFAULT_GROUPS_PER_GRANT,
            max_weapon_level: MAX_WEAPON_LEVEL,
            bounds: PlayBounds::default(),
        }
    }
}

impl SessionConfig {
    /// Seconds per tick.
    pub fn dt(&self) -> f64 {
        1.0 / self.tick_rate.max(1) as f64
    }

    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::from_json_str(&read_to_string(path.as_ref())?)
    }
}
