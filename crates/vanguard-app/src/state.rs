//! Messages and results shared between the loop thread and its owner.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use vanguard_core::commands::PlayerCommand;
use vanguard_core::enums::GamePhase;
use vanguard_core::error::LoadError;

/// Commands sent to the game loop thread.
#[derive(Debug, Clone)]
pub enum GameLoopCommand {
    PlayerCommand(PlayerCommand),
    Shutdown,
}

/// How the loop paces and reports.
#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
    /// Sleep to hold the configured tick rate instead of running flat out.
    pub realtime: bool,
    /// Stop after this many ticks. 0 means no limit.
    pub max_ticks: u64,
    /// Emit every n-th snapshot. Snapshots carrying events are always emitted.
    pub snapshot_every: u64,
    /// Stop once the run reaches Victory or Defeat.
    pub stop_when_finished: bool,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            realtime: false,
            max_ticks: 0,
            snapshot_every: 1,
            stop_when_finished: true,
        }
    }
}

/// Final state reported when the loop exits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub phase: GamePhase,
    pub wave_index: u32,
    pub wave_count: u32,
    pub score: u64,
    pub play_time_secs: f64,
    pub groups_cleared: u32,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("game loop thread panicked")]
    LoopPanicked,
}
