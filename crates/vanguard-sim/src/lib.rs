//! Simulation engine for VANGUARD.
//!
//! Owns the hecs ECS world, the entity pool and the wave director, runs the
//! systems at a fixed tick rate and produces `GameStateSnapshot`s for
//! display collaborators.

pub mod archetypes;
pub mod director;
pub mod engine;
pub mod pool;
pub mod roster;
pub mod scoring;
pub mod systems;
pub mod weapons;

pub use engine::GameSession;
pub use vanguard_core as core;
