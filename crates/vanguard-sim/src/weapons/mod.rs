//! Player weapons: unlock and level state, attached companions, and the
//! per-level firing geometry.

pub mod companions;
pub mod firing;
pub mod progression;
