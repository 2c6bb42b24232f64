//! Clearance and scoring feed.
//!
//! Destruction notifications add `base value × wave index` to the running
//! score. Every roster clearance bumps the groups-cleared counter, and every
//! `groups_per_grant`-th clearance fires a weapon grant.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use vanguard_core::events::GameEvent;
use vanguard_core::state::ScoreView;

use crate::weapons::companions;
use crate::weapons::progression::WeaponProgression;

/// Running score and clearance counters.
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    score: u64,
    play_time_secs: f64,
    groups_cleared: u32,
    enemies_destroyed: u32,
    groups_per_grant: u32,
}

impl Scoreboard {
    pub fn new(groups_per_grant: u32) -> Self {
        Self {
            groups_per_grant,
            ..Default::default()
        }
    }

    /// Returns the points awarded.
    pub fn record_destruction(&mut self, base_value: u64, wave_index: u32) -> u64 {
        let awarded = base_value * wave_index as u64;
        self.score += awarded;
        self.enemies_destroyed += 1;
        awarded
    }

    /// Count one clearance. Returns true when a grant milestone is reached.
    pub fn record_clearance(&mut self) -> bool {
        self.groups_cleared += 1;
        self.groups_per_grant > 0 && self.groups_cleared % self.groups_per_grant == 0
    }

    pub fn add_play_time(&mut self, dt: f64) {
        self.play_time_secs += dt;
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn play_time_secs(&self) -> f64 {
        self.play_time_secs
    }

    pub fn groups_cleared(&self) -> u32 {
        self.groups_cleared
    }

    pub fn enemies_destroyed(&self) -> u32 {
        self.enemies_destroyed
    }

    /// Clearances left before the next grant.
    pub fn groups_until_grant(&self) -> u32 {
        if self.groups_per_grant == 0 {
            return 0;
        }
        self.groups_per_grant - self.groups_cleared % self.groups_per_grant
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.groups_per_grant);
    }

    pub fn view(&self, active_enemies: usize) -> ScoreView {
        ScoreView {
            score: self.score,
            play_time_secs: self.play_time_secs,
            groups_cleared: self.groups_cleared,
            groups_until_grant: self.groups_until_grant(),
            active_enemies: active_enemies as u32,
        }
    }
}

/// Receives roster clearances from the wave director.
pub trait ClearanceSink {
    fn on_clearance(&mut self, world: &mut World, events: &mut Vec<GameEvent>);
}

/// Scoreboard and weapon progression, joined by the grant milestone.
pub struct ClearanceFeed {
    pub scoreboard: Scoreboard,
    pub weapons: WeaponProgression,
    rng: ChaCha8Rng,
    seed: u64,
}

impl ClearanceFeed {
    pub fn new(groups_per_grant: u32, max_weapon_level: u8, seed: u64) -> Self {
        Self {
            scoreboard: Scoreboard::new(groups_per_grant),
            weapons: WeaponProgression::new(max_weapon_level),
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Restore the start-of-run state, reseeding the grant RNG.
    pub fn reset(&mut self) {
        self.scoreboard.reset();
        self.weapons.reset();
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
    }
}

impl ClearanceSink for ClearanceFeed {
    fn on_clearance(&mut self, world: &mut World, events: &mut Vec<GameEvent>) {
        let grant_due = self.scoreboard.record_clearance();
        let groups_cleared = self.scoreboard.groups_cleared();
        info!(groups_cleared, grant_due, "roster cleared");
        events.push(GameEvent::GroupCleared { groups_cleared });
        if !grant_due {
            return;
        }

        match self.weapons.grant(&mut self.rng) {
            Some(grant) => {
                info!(weapon = ?grant.weapon, level = grant.level, unlocked = grant.unlocked, "weapon granted");
                companions::sync_for_weapon(world, grant.weapon, grant.level, self.weapons.max_level());
                events.push(GameEvent::WeaponGranted {
                    weapon: grant.weapon,
                    level: grant.level,
                    unlocked: grant.unlocked,
                });
            }
            None => info!("grant milestone reached with every weapon maxed"),
        }
    }
}
