//! Movement and firing variants.
//!
//! Behaviours are plain structs with no ECS dependency. Per-life state (a
//! sine phase, a circle centre) lives in the behaviour and is cleared by
//! [`EnemyBehavior::reset`] on every activation.

use glam::Vec2;

use vanguard_core::components::Enemy;
use vanguard_core::pooled::PooledEntity;

use crate::steer::turn_toward;

/// What a behaviour may read about the world this tick.
#[derive(Debug, Clone, Copy)]
pub struct BehaviorContext {
    /// Seconds in this tick.
    pub dt: f32,
    /// Player ship position, if the player is alive.
    pub player: Option<Vec2>,
}

/// A shot request. The simulation turns it into a pooled projectile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    pub origin: Vec2,
    /// Unit direction.
    pub direction: Vec2,
    pub speed_multiplier: f32,
}

/// Capability every enemy archetype implements.
pub trait EnemyBehavior: Send + Sync {
    /// Clear per-life state. `origin` is the spawn position.
    fn reset(&mut self, origin: Vec2);

    /// Move one tick. Returns the new position. May steer `enemy.direction`.
    fn advance(&mut self, position: Vec2, enemy: &mut Enemy, ctx: &BehaviorContext) -> Vec2;

    /// Count down the fire timer and aim at the player when it expires.
    fn attempt_fire(&mut self, position: Vec2, enemy: &mut Enemy, ctx: &BehaviorContext) -> Option<Shot> {
        enemy.fire_cooldown -= ctx.dt;
        if enemy.fire_cooldown > 0.0 {
            return None;
        }
        let target = ctx.player?;
        enemy.fire_cooldown = enemy.fire_interval;
        Some(Shot {
            origin: position,
            direction: (target - position).try_normalize().unwrap_or(Vec2::NEG_X),
            speed_multiplier: enemy.projectile_speed_multiplier,
        })
    }
}

impl PooledEntity for Box<dyn EnemyBehavior> {
    fn on_spawn(&mut self, position: Vec2) {
        self.reset(position);
    }
}

/// Constant-velocity flight along the formation direction.
#[derive(Debug, Clone, Default)]
pub struct StraightLine;

impl EnemyBehavior for StraightLine {
    fn reset(&mut self, _origin: Vec2) {}

    fn advance(&mut self, position: Vec2, enemy: &mut Enemy, ctx: &BehaviorContext) -> Vec2 {
        position + enemy.direction * enemy.speed * ctx.dt
    }
}

/// Travels along the formation direction while weaving across it.
#[derive(Debug, Clone)]
pub struct SineWave {
    pub amplitude: f32,
    /// Radians per second.
    pub frequency: f32,
    time: f32,
    /// Un-weaved position along the travel line.
    base: Vec2,
}

impl SineWave {
    pub fn new(amplitude: f32, frequency: f32) -> Self {
        Self {
            amplitude,
            frequency,
            time: 0.0,
            base: Vec2::ZERO,
        }
    }
}

impl EnemyBehavior for SineWave {
    fn reset(&mut self, origin: Vec2) {
        self.time = 0.0;
        self.base = origin;
    }

    fn advance(&mut self, _position: Vec2, enemy: &mut Enemy, ctx: &BehaviorContext) -> Vec2 {
        self.time += ctx.dt;
        self.base += enemy.direction * enemy.speed * ctx.dt;
        self.base + enemy.direction.perp() * self.amplitude * (self.time * self.frequency).sin()
    }
}

/// Loops around a centre that itself drifts along the formation direction.
#[derive(Debug, Clone)]
pub struct Circular {
    pub radius: f32,
    /// Radians per second.
    pub angular_speed: f32,
    angle: f32,
    center: Vec2,
}

impl Circular {
    pub fn new(radius: f32, angular_speed: f32) -> Self {
        Self {
            radius,
            angular_speed,
            angle: 0.0,
            center: Vec2::ZERO,
        }
    }
}

impl EnemyBehavior for Circular {
    fn reset(&mut self, origin: Vec2) {
        self.angle = 0.0;
        // Angle 0 sits at +x of the centre, so the loop starts at the spawn point.
        self.center = origin - Vec2::new(self.radius, 0.0);
    }

    fn advance(&mut self, _position: Vec2, enemy: &mut Enemy, ctx: &BehaviorContext) -> Vec2 {
        self.center += enemy.direction * enemy.speed * ctx.dt;
        self.angle += self.angular_speed * ctx.dt;
        self.center + Vec2::from_angle(self.angle) * self.radius
    }
}

/// Turns toward the player while the player is still ahead (to the left).
#[derive(Debug, Clone)]
pub struct Homing {
    /// Radians per second.
    pub turn_rate: f32,
}

impl Homing {
    pub fn new(turn_rate: f32) -> Self {
        Self { turn_rate }
    }
}

impl EnemyBehavior for Homing {
    fn reset(&mut self, _origin: Vec2) {}

    fn advance(&mut self, position: Vec2, enemy: &mut Enemy, ctx: &BehaviorContext) -> Vec2 {
        if let Some(player) = ctx.player {
            if player.x < position.x {
                if let Some(desired) = (player - position).try_normalize() {
                    enemy.direction = turn_toward(enemy.direction, desired, self.turn_rate * ctx.dt);
                }
            }
        }
        position + enemy.direction * enemy.speed * ctx.dt
    }
}
