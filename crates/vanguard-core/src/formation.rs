//! Authored wave data: formations, enemy groups, waves.
//!
//! This data is immutable at runtime. Formations are declared once per
//! [`WaveSet`] and referenced by name from enemy groups, so one formation can
//! drive any number of groups.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SPAWN_X;
use crate::error::{read_to_string, DataError, LoadError};

/// One spawn slot in a formation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormationPoint {
    /// Offset from the group's anchor.
    pub relative_position: Vec2,
    /// Seconds to wait after the previous point (additive, not absolute).
    #[serde(default)]
    pub spawn_delay: f64,
    /// Initial travel direction. Normalized at spawn time.
    #[serde(default = "default_direction")]
    pub move_direction: Vec2,
    /// Overrides the archetype's base speed when present.
    #[serde(default)]
    pub move_speed: Option<f32>,
}

/// Ordered, timed spawn pattern. Points are processed in array order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formation {
    pub name: String,
    pub points: Vec<FormationPoint>,
}

impl Formation {
    /// Sum of all spawn delays for one pass.
    pub fn pass_duration(&self) -> f64 {
        self.points.iter().map(|p| p.spawn_delay.max(0.0)).sum()
    }
}

/// One coordinated group of enemies within a wave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyGroup {
    /// Pool tag of the enemy archetype to spawn.
    pub pool_tag: String,
    /// Name of a formation in the owning [`WaveSet`].
    pub formation: String,
    /// Formation anchor in world space.
    #[serde(default = "default_anchor")]
    pub anchor: Vec2,
    /// Full passes through the formation.
    #[serde(default = "default_repeat")]
    pub repeat_count: u32,
    #[serde(default = "default_multiplier")]
    pub health_multiplier: f32,
    /// Hold the wave until this group's spawns (and everything else alive)
    /// are cleared. Spawning of the group itself is never delayed.
    #[serde(default)]
    pub wait_for_clearance: bool,
}

/// Multipliers applied uniformly to every entity a wave spawns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveModifiers {
    pub health_multiplier: f32,
    pub speed_multiplier: f32,
    pub fire_rate_multiplier: f32,
    pub projectile_speed_multiplier: f32,
}

impl Default for WaveModifiers {
    fn default() -> Self {
        Self {
            health_multiplier: 1.0,
            speed_multiplier: 1.0,
            fire_rate_multiplier: 1.0,
            projectile_speed_multiplier: 1.0,
        }
    }
}

/// An ordered sequence of enemy groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wave {
    pub name: String,
    /// Seconds to wait before the first group starts.
    #[serde(default)]
    pub pre_wave_delay: f64,
    pub groups: Vec<EnemyGroup>,
    #[serde(default)]
    pub modifiers: WaveModifiers,
}

/// The complete authored campaign: shared formations plus ordered waves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveSet {
    #[serde(default)]
    pub formations: Vec<Formation>,
    pub waves: Vec<Wave>,
}

fn default_direction() -> Vec2 {
    Vec2::NEG_X
}

fn default_anchor() -> Vec2 {
    Vec2::new(DEFAULT_SPAWN_X, 0.0)
}

fn default_repeat() -> u32 {
    1
}

fn default_multiplier() -> f32 {
    1.0
}

impl WaveSet {
    /// Parse a wave set from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a wave set from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::from_json_str(&read_to_string(path.as_ref())?)
    }

    /// Look up a formation by name.
    pub fn formation(&self, name: &str) -> Option<&Formation> {
        self.formations.iter().find(|f| f.name == name)
    }

    /// Total spawns a group produces, or 0 if its formation is missing.
    pub fn group_spawn_count(&self, group: &EnemyGroup) -> usize {
        self.formation(&group.formation)
            .map(|f| f.points.len() * group.repeat_count as usize)
            .unwrap_or(0)
    }

    /// Structural checks. Every problem is reported; nothing short-circuits.
    pub fn validate(&self) -> Vec<DataError> {
        self.validate_with(|_| true)
    }

    /// Structural checks plus a pool-tag check against `is_known_tag`.
    pub fn validate_with(&self, is_known_tag: impl Fn(&str) -> bool) -> Vec<DataError> {
        let mut errors = Vec::new();

        for (wave_idx, wave) in self.waves.iter().enumerate() {
            if wave.pre_wave_delay < 0.0 {
                errors.push(DataError::NegativePreWaveDelay {
                    wave: wave_idx,
                    delay: wave.pre_wave_delay,
                });
            }
            if wave.groups.is_empty() {
                errors.push(DataError::NoGroups {
                    wave: wave_idx,
                    name: wave.name.clone(),
                });
            }
            for (group_idx, group) in wave.groups.iter().enumerate() {
                if let Err(err) = self.check_group(wave_idx, group_idx, group) {
                    errors.push(err);
                } else if !is_known_tag(&group.pool_tag) {
                    errors.push(DataError::UnknownPoolTag {
                        wave: wave_idx,
                        group: group_idx,
                        tag: group.pool_tag.clone(),
                    });
                }
                if let Some(formation) = self.formation(&group.formation) {
                    for (point_idx, point) in formation.points.iter().enumerate() {
                        if point.spawn_delay < 0.0 {
                            errors.push(DataError::NegativeSpawnDelay {
                                wave: wave_idx,
                                group: group_idx,
                                point: point_idx,
                                delay: point.spawn_delay,
                            });
                        }
                    }
                }
            }
        }

        errors
    }

    /// The check the director runs before spawning a group. A group that
    /// fails it is skipped.
    pub fn check_group(&self, wave: usize, group: usize, data: &EnemyGroup) -> Result<(), DataError> {
        if data.pool_tag.trim().is_empty() {
            return Err(DataError::EmptyPoolTag { wave, group });
        }
        let formation = self
            .formation(&data.formation)
            .ok_or_else(|| DataError::MissingFormation {
                wave,
                group,
                formation: data.formation.clone(),
            })?;
        if formation.points.is_empty() {
            return Err(DataError::EmptyFormation {
                wave,
                group,
                formation: formation.name.clone(),
            });
        }
        if data.repeat_count == 0 {
            return Err(DataError::ZeroRepeat { wave, group });
        }
        Ok(())
    }

    /// Built-in three-wave campaign with escalating difficulty.
    pub fn default_campaign() -> Self {
        let point = |x: f32, y: f32, delay: f64| FormationPoint {
            relative_position: Vec2::new(x, y),
            spawn_delay: delay,
            move_direction: Vec2::NEG_X,
            move_speed: None,
        };
        let group = |tag: &str, formation: &str, y: f32, repeat: u32, wait: bool| EnemyGroup {
            pool_tag: tag.to_string(),
            formation: formation.to_string(),
            anchor: Vec2::new(DEFAULT_SPAWN_X, y),
            repeat_count: repeat,
            health_multiplier: 1.0,
            wait_for_clearance: wait,
        };

        Self {
            formations: vec![
                Formation {
                    name: "line".into(),
                    points: vec![point(0.0, 0.0, 0.0), point(0.0, 0.0, 0.4), point(0.0, 0.0, 0.4)],
                },
                Formation {
                    name: "vee".into(),
                    points: vec![
                        point(0.0, 0.0, 0.0),
                        point(1.0, 1.0, 0.2),
                        point(1.0, -1.0, 0.0),
                        point(2.0, 2.0, 0.2),
                        point(2.0, -2.0, 0.0),
                    ],
                },
                Formation {
                    name: "column".into(),
                    points: vec![
                        point(0.0, 3.0, 0.0),
                        point(0.0, 1.0, 0.1),
                        point(0.0, -1.0, 0.1),
                        point(0.0, -3.0, 0.1),
                    ],
                },
            ],
            waves: vec![
                Wave {
                    name: "Scouts".into(),
                    pre_wave_delay: 2.0,
                    groups: vec![
                        group("StraightEnemy", "line", 2.0, 1, false),
                        group("StraightEnemy", "line", -2.0, 1, true),
                        group("FastEnemy", "vee", 0.0, 1, false),
                    ],
                    modifiers: WaveModifiers::default(),
                },
                Wave {
                    name: "Pincer".into(),
                    pre_wave_delay: 3.0,
                    groups: vec![
                        group("SlowEnemy", "column", 0.0, 1, true),
                        group("FastEnemy", "line", 4.0, 2, false),
                        group("FastEnemy", "line", -4.0, 2, true),
                        group("SeekerEnemy", "vee", 0.0, 1, false),
                    ],
                    modifiers: WaveModifiers {
                        speed_multiplier: 1.1,
                        ..WaveModifiers::default()
                    },
                },
                Wave {
                    name: "Onslaught".into(),
                    pre_wave_delay: 3.0,
                    groups: vec![
                        group("SeekerEnemy", "column", 0.0, 2, false),
                        group("SlowEnemy", "vee", 2.0, 1, true),
                        group("FastEnemy", "vee", -2.0, 2, false),
                        group("StraightEnemy", "column", 0.0, 3, true),
                    ],
                    modifiers: WaveModifiers {
                        health_multiplier: 1.5,
                        speed_multiplier: 1.2,
                        fire_rate_multiplier: 1.25,
                        projectile_speed_multiplier: 1.2,
                    },
                },
            ],
        }
    }
}
