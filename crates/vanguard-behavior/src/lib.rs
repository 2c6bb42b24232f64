//! Enemy behaviour for VANGUARD.
//!
//! Each enemy archetype carries one [`EnemyBehavior`] variant chosen at
//! construction: how it moves each tick and when it fires. The simulation
//! only supplies per-spawn direction, speed and multipliers.

pub mod patterns;
pub mod profiles;
pub mod steer;

pub use patterns::{BehaviorContext, Circular, EnemyBehavior, Homing, Shot, SineWave, StraightLine};
pub use profiles::{build_behavior, get_profile, EnemyProfile};
pub use vanguard_core as core;

#[cfg(test)]
mod tests;
