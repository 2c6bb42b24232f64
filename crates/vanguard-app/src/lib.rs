//! VANGUARD headless runner.
//!
//! Wires the simulation crates to a fixed-tick game loop thread. Commands
//! arrive over an mpsc channel; snapshots leave over another.

pub mod cli;
pub mod game_loop;
pub mod input;
pub mod state;

pub use vanguard_core as core;
