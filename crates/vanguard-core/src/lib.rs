//! Core types and definitions for the VANGUARD simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, authored wave data, commands, events, state snapshots,
//! errors and constants. It has no dependency on the ECS or any runtime
//! framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod formation;
pub mod pooled;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
