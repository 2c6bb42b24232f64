//! Wave director: sequences waves and formation groups against a per-tick
//! clock.
//!
//! Every suspension point is a countdown decremented by `dt` once per tick.
//! A countdown at zero resolves immediately and the next step runs in the
//! same tick; a wait that starts mid-tick begins counting on the next tick.
//! Leftover time never carries into the next wait, so authored delays are
//! lower bounds.

use glam::Vec2;
use hecs::{Entity, World};
use tracing::{debug, error, info, warn};

use vanguard_core::components::{Enemy, FormationInit};
use vanguard_core::config::DirectorTuning;
use vanguard_core::enums::DirectorPhase;
use vanguard_core::error::DataError;
use vanguard_core::events::GameEvent;
use vanguard_core::formation::WaveSet;
use vanguard_core::types::{direction_or, Transform};

use vanguard_behavior::steer::heading;

use crate::pool::EntityPool;
use crate::roster::ActiveRoster;
use crate::scoring::ClearanceSink;

/// Smallest clearance poll, so a zero interval cannot spin within a tick.
const MIN_POLL_SECS: f64 = 1e-6;

/// Everything the director touches while advancing.
pub struct DirectorContext<'a> {
    pub world: &'a mut World,
    pub pool: &'a mut EntityPool,
    pub events: &'a mut Vec<GameEvent>,
    pub sink: &'a mut dyn ClearanceSink,
}

pub struct WaveDirector {
    waves: WaveSet,
    tuning: DirectorTuning,
    phase: DirectorPhase,
    /// Zero-based position in `waves.waves`.
    wave_cursor: usize,
    /// One-based wave number exposed to scoring and the HUD; 0 before start.
    wave_index: u32,
    group_cursor: usize,
    pass: u32,
    point_cursor: usize,
    timer: f64,
    roster: ActiveRoster,
}

impl WaveDirector {
    pub fn new(waves: WaveSet, tuning: DirectorTuning) -> Self {
        Self {
            waves,
            tuning,
            phase: DirectorPhase::Idle,
            wave_cursor: 0,
            wave_index: 0,
            group_cursor: 0,
            pass: 0,
            point_cursor: 0,
            timer: 0.0,
            roster: ActiveRoster::default(),
        }
    }

    pub fn phase(&self) -> DirectorPhase {
        self.phase
    }

    pub fn wave_index(&self) -> u32 {
        self.wave_index
    }

    pub fn wave_count(&self) -> u32 {
        self.waves.waves.len() as u32
    }

    pub fn waves(&self) -> &WaveSet {
        &self.waves
    }

    pub fn roster(&self) -> &ActiveRoster {
        &self.roster
    }

    pub fn is_complete(&self) -> bool {
        self.phase == DirectorPhase::AllWavesComplete
    }

    /// Idle → first wave. Ignored unless idle.
    pub fn start(&mut self, events: &mut Vec<GameEvent>) {
        if self.phase == DirectorPhase::Idle {
            self.begin_wave(0, events);
        }
    }

    /// Back to Idle with an empty roster and no wave started.
    pub fn reset(&mut self) {
        self.phase = DirectorPhase::Idle;
        self.wave_cursor = 0;
        self.wave_index = 0;
        self.group_cursor = 0;
        self.pass = 0;
        self.point_cursor = 0;
        self.timer = 0.0;
        self.roster.clear();
    }

    /// Destruction entry point. Returns false (and logs) if the entity was
    /// not on the roster, which means a double notification.
    pub fn on_entity_destroyed(&mut self, entity: Entity) -> bool {
        if self.roster.remove(entity) {
            debug!(remaining = self.roster.len(), "enemy left roster");
            true
        } else {
            warn!(entity = entity.to_bits().get(), "destruction notice for an enemy not on the roster");
            false
        }
    }

    /// Run the state machine for one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64, ctx: &mut DirectorContext) {
        let mut elapsed = dt;
        loop {
            if matches!(self.phase, DirectorPhase::Idle | DirectorPhase::AllWavesComplete) {
                return;
            }
            if self.timer > 0.0 {
                self.timer -= elapsed;
                if self.timer > 0.0 {
                    return;
                }
            }
            self.step(ctx);
            elapsed = 0.0;
        }
    }

    /// Resolve the expired wait of the current phase.
    fn step(&mut self, ctx: &mut DirectorContext) {
        match self.phase {
            DirectorPhase::PreWaveDelay => self.enter_group(0, ctx),
            DirectorPhase::SpawningGroup => self.spawn_next(ctx),
            DirectorPhase::AwaitingClearance => self.poll_clearance(ctx),
            DirectorPhase::WaveComplete => self.begin_wave(self.wave_cursor + 1, ctx.events),
            DirectorPhase::Idle | DirectorPhase::AllWavesComplete => {}
        }
    }

    fn begin_wave(&mut self, cursor: usize, events: &mut Vec<GameEvent>) {
        let Some(wave) = self.waves.waves.get(cursor) else {
            info!(waves = self.waves.waves.len(), "all waves complete");
            self.phase = DirectorPhase::AllWavesComplete;
            self.timer = 0.0;
            return;
        };
        self.wave_cursor = cursor;
        self.wave_index = cursor as u32 + 1;
        self.phase = DirectorPhase::PreWaveDelay;
        self.timer = wave.pre_wave_delay.max(0.0);
        info!(wave = self.wave_index, name = %wave.name, delay = self.timer, "wave started");
        events.push(GameEvent::WaveStarted {
            wave: self.wave_index,
            name: wave.name.clone(),
        });
    }

    fn finish_wave(&mut self, events: &mut Vec<GameEvent>) {
        info!(wave = self.wave_index, "wave complete");
        events.push(GameEvent::WaveCompleted {
            wave: self.wave_index,
        });
        self.phase = DirectorPhase::WaveComplete;
        self.timer = 0.0;
    }

    fn enter_group(&mut self, group: usize, ctx: &mut DirectorContext) {
        self.group_cursor = group;
        self.pass = 0;
        self.point_cursor = 0;

        let wave = &self.waves.waves[self.wave_cursor];
        let Some(data) = wave.groups.get(group) else {
            let err = DataError::NoGroups {
                wave: self.wave_cursor,
                name: wave.name.clone(),
            };
            error!(%err, "skipping wave");
            self.finish_wave(ctx.events);
            return;
        };

        let checked = self
            .waves
            .check_group(self.wave_cursor, group, data)
            .and_then(|()| {
                if ctx.pool.is_registered(&data.pool_tag) {
                    Ok(())
                } else {
                    Err(DataError::UnknownPoolTag {
                        wave: self.wave_cursor,
                        group,
                        tag: data.pool_tag.clone(),
                    })
                }
            });

        match checked {
            Ok(()) => {
                let first_delay = self
                    .waves
                    .formation(&data.formation)
                    .and_then(|f| f.points.first())
                    .map(|p| p.spawn_delay.max(0.0))
                    .unwrap_or(0.0);
                info!(
                    wave = self.wave_index,
                    group,
                    tag = %data.pool_tag,
                    formation = %data.formation,
                    repeats = data.repeat_count,
                    "spawning group"
                );
                self.phase = DirectorPhase::SpawningGroup;
                self.timer = first_delay;
            }
            Err(err) => {
                error!(%err, "skipping enemy group");
                self.finish_group(ctx);
            }
        }
    }

    /// Gate on clearance for waited or last groups; otherwise start the next
    /// group right away while this group's enemies are still live.
    fn finish_group(&mut self, ctx: &mut DirectorContext) {
        let groups = &self.waves.waves[self.wave_cursor].groups;
        let last = self.group_cursor + 1 >= groups.len();
        let wait = groups
            .get(self.group_cursor)
            .map(|g| g.wait_for_clearance)
            .unwrap_or(false);
        if wait || last {
            debug!(group = self.group_cursor, last, "awaiting clearance");
            self.phase = DirectorPhase::AwaitingClearance;
            self.timer = 0.0;
        } else {
            self.enter_group(self.group_cursor + 1, ctx);
        }
    }

    fn spawn_next(&mut self, ctx: &mut DirectorContext) {
        let wave = &self.waves.waves[self.wave_cursor];
        let group = &wave.groups[self.group_cursor];
        let Some(formation) = self.waves.formation(&group.formation) else {
            self.finish_group(ctx);
            return;
        };
        let Some(point) = formation.points.get(self.point_cursor) else {
            self.finish_group(ctx);
            return;
        };

        let position = group.anchor + point.relative_position;
        let direction = direction_or(point.move_direction, Vec2::NEG_X);
        let health_multiplier = self.tuning.health_multiplier(
            self.wave_index,
            wave.modifiers.health_multiplier,
            group.health_multiplier,
        );
        let modifiers = wave.modifiers;
        let speed_override = point.move_speed;
        let tag = group.pool_tag.clone();
        let points = formation.points.len();
        let repeats = group.repeat_count;

        match ctx
            .pool
            .acquire(ctx.world, &tag, Transform::new(position, heading(direction)))
        {
            Ok(entity) => {
                if let Ok(mut enemy) = ctx.world.get::<&mut Enemy>(entity) {
                    let speed = speed_override.unwrap_or(enemy.base_speed) * modifiers.speed_multiplier;
                    enemy.initialize_in_formation(&FormationInit {
                        direction,
                        speed,
                        health_multiplier,
                        fire_rate_multiplier: modifiers.fire_rate_multiplier,
                        projectile_speed_multiplier: modifiers.projectile_speed_multiplier,
                    });
                }
                self.roster.add(entity);
                debug!(tag = %tag, x = position.x, y = position.y, health_multiplier, "enemy spawned");
                ctx.events.push(GameEvent::EnemySpawned {
                    wave: self.wave_index,
                    pool_tag: tag,
                });
            }
            Err(err) => error!(%err, "spawn failed; skipping formation point"),
        }

        self.point_cursor += 1;
        if self.point_cursor >= points {
            self.point_cursor = 0;
            self.pass += 1;
        }
        if self.pass >= repeats {
            self.finish_group(ctx);
            return;
        }
        self.timer = self
            .waves
            .formation(&self.waves.waves[self.wave_cursor].groups[self.group_cursor].formation)
            .and_then(|f| f.points.get(self.point_cursor))
            .map(|p| p.spawn_delay.max(0.0))
            .unwrap_or(0.0);
    }

    fn poll_clearance(&mut self, ctx: &mut DirectorContext) {
        let swept = self.roster.sweep(ctx.world);
        if swept > 0 {
            debug!(swept, "dropped stale roster entries");
        }
        if !self.roster.is_empty() {
            self.timer = self.tuning.clearance_poll_interval_secs.max(MIN_POLL_SECS);
            return;
        }

        ctx.sink.on_clearance(ctx.world, ctx.events);
        let groups = self.waves.waves[self.wave_cursor].groups.len();
        if self.group_cursor + 1 >= groups {
            self.finish_wave(ctx.events);
        } else {
            self.enter_group(self.group_cursor + 1, ctx);
        }
    }
}
