//! Command-line flags.

use std::path::PathBuf;

use clap::Parser;

use crate::state::LoopOptions;

#[derive(Parser, Debug)]
#[command(name = "vanguard")]
#[command(about = "Headless VANGUARD runner: streams game snapshots as JSON lines")]
pub struct Cli {
    /// Wave set JSON. Defaults to the built-in campaign.
    #[arg(long)]
    pub waves: Option<PathBuf>,
    /// Session config JSON. Missing keys take their defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Override the config seed.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Stop after this many ticks (0 = until the run finishes).
    #[arg(long, default_value_t = 0)]
    pub max_ticks: u64,
    /// Emit every n-th snapshot.
    #[arg(long, default_value_t = 1)]
    pub every: u64,
    /// Pace ticks in real time instead of running flat out.
    #[arg(long)]
    pub realtime: bool,
    /// Read JSON-line player commands from stdin.
    #[arg(long)]
    pub stdin: bool,
    /// Start the run and hold fire without waiting for commands.
    #[arg(long)]
    pub autostart: bool,
    /// Print only the final summary.
    #[arg(long)]
    pub quiet: bool,
}

impl Cli {
    pub fn loop_options(&self) -> LoopOptions {
        LoopOptions {
            realtime: self.realtime,
            max_ticks: self.max_ticks,
            snapshot_every: self.every.max(1),
            stop_when_finished: true,
        }
    }
}
