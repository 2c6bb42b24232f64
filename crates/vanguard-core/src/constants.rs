//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Play field ---

/// Half the visible play field height (world units).
pub const FIELD_HALF_HEIGHT: f32 = 8.0;

/// Right edge of the play field. Formation anchors sit here.
pub const FIELD_RIGHT_X: f32 = 14.0;

/// Default x of formation anchors (just off-screen right).
pub const DEFAULT_SPAWN_X: f32 = 12.0;

/// Enemies crossing this x have left the play field.
pub const ENEMY_DESPAWN_X: f32 = -12.0;

/// Player start position.
pub const PLAYER_START_X: f32 = -8.0;
pub const PLAYER_START_Y: f32 = 0.0;

// --- Wave director ---

/// Base health multiplier applied to every spawn.
pub const BASE_HEALTH_MULTIPLIER: f32 = 1.0;

/// Health multiplier growth per wave number.
pub const HEALTH_INCREASE_PER_WAVE: f32 = 0.1;

/// Interval between roster sweeps while awaiting clearance (seconds).
pub const CLEARANCE_POLL_INTERVAL_SECS: f64 = 0.5;

/// Clearance events needed for one weapon grant.
pub const DEFAULT_GROUPS_PER_GRANT: u32 = 3;

// --- Weapons ---

/// Highest level any weapon can reach.
pub const MAX_WEAPON_LEVEL: u8 = 3;

pub const BASIC_FIRE_INTERVAL: f32 = 0.2;
pub const TWIN_FIRE_INTERVAL: f32 = 0.25;
pub const DOUBLE_FIRE_INTERVAL: f32 = 0.3;
pub const MISSILE_FIRE_INTERVAL: f32 = 0.5;

/// Vertical spacing between parallel twin shots.
pub const TWIN_SEPARATION: f32 = 0.3;

/// Widest double-shot angle (degrees).
pub const DOUBLE_ANGLE_DEG: f32 = 30.0;

/// Missile spread for multi-missile volleys (degrees).
pub const MISSILE_SPREAD_DEG: f32 = 15.0;

/// Missiles fly straight for this long before steering.
pub const MISSILE_ARM_DELAY_SECS: f32 = 0.5;

/// Missiles only acquire enemies within this range.
pub const MISSILE_DETECTION_RANGE: f32 = 5.0;

/// Missile turn rate (degrees per second).
pub const MISSILE_TURN_RATE_DEG: f32 = 200.0;

// --- Companions ---

/// Shield orb orbit radius around the player.
pub const SHIELD_ORBIT_RADIUS: f32 = 1.5;

/// Shield orb angular speed (degrees per second).
pub const SHIELD_ORBIT_SPEED_DEG: f32 = 180.0;

/// Angular spacing between consecutive shield orb indices (degrees).
pub const SHIELD_PHASE_STEP_DEG: f32 = 120.0;

/// Trailing distance per option pod index.
pub const OPTION_POD_SPACING: f32 = 1.0;

/// Option pod catch-up rate (fraction of the gap closed per second).
pub const OPTION_POD_FOLLOW_RATE: f32 = 10.0;

// --- Collision radii ---

pub const PLAYER_RADIUS: f32 = 0.4;
pub const ENEMY_RADIUS: f32 = 0.5;
pub const PROJECTILE_RADIUS: f32 = 0.15;
pub const SHIELD_ORB_RADIUS: f32 = 0.3;

// --- Projectiles ---

pub const PLAYER_PROJECTILE_SPEED: f32 = 10.0;
pub const PLAYER_PROJECTILE_LIFETIME: f32 = 3.0;
pub const MISSILE_SPEED: f32 = 8.0;
pub const MISSILE_LIFETIME: f32 = 5.0;
pub const ENEMY_PROJECTILE_SPEED: f32 = 6.0;
pub const ENEMY_PROJECTILE_LIFETIME: f32 = 4.0;
