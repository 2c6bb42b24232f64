//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World`. Pooled entities whose
//! `PoolMember` is inactive are skipped everywhere.

pub mod cleanup;
pub mod collision;
pub mod companions;
pub mod enemy_fire;
pub mod movement;
pub mod player_fire;
pub mod snapshot;
