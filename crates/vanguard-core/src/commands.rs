//! Player commands sent from the runner to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player and session actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Begin the first wave.
    StartRun,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Restart from scratch: score, waves, pool, weapons.
    Reset,
    /// Move the player ship (input is polled outside the simulation).
    SetPlayerPosition { x: f32, y: f32 },
    /// Hold or release the fire button.
    SetFiring { held: bool },
}
