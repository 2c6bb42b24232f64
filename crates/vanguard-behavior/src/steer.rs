//! Heading helpers shared by homing enemies and missiles.

use std::f32::consts::{PI, TAU};

use glam::Vec2;

/// Angle of `v` in radians, 0 = +x.
pub fn heading(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}

/// Wrap an angle into (-PI, PI].
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Rotate unit vector `current` toward `desired` by at most `max_turn` radians.
pub fn turn_toward(current: Vec2, desired: Vec2, max_turn: f32) -> Vec2 {
    let from = heading(current);
    let delta = wrap_angle(heading(desired) - from);
    Vec2::from_angle(from + delta.clamp(-max_turn, max_turn))
}
