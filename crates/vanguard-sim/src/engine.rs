//! Game session: the process-scoped context that owns the world, the pool,
//! the wave director and the clearance feed.
//!
//! `GameSession` processes player commands, runs all systems at a fixed
//! tick and produces `GameStateSnapshot`s. It is completely headless, so a
//! whole run can be driven deterministically from tests.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::{Entity, World};
use tracing::{debug, error, info, warn};

use vanguard_core::commands::PlayerCommand;
use vanguard_core::components::Enemy;
use vanguard_core::config::SessionConfig;
use vanguard_core::enums::{EnemyKind, GamePhase, ProjectileKind, WeaponType};
use vanguard_core::events::GameEvent;
use vanguard_core::formation::WaveSet;
use vanguard_core::state::GameStateSnapshot;
use vanguard_core::types::{SimTime, Transform};

use crate::archetypes;
use crate::director::{DirectorContext, WaveDirector};
use crate::pool::EntityPool;
use crate::scoring::{ClearanceFeed, Scoreboard};
use crate::systems;
use crate::systems::cleanup::Retirement;
use crate::weapons::companions;
use crate::weapons::firing::Armory;
use crate::weapons::progression::WeaponProgression;

/// Player shots kept ready before the first volley.
const PREWARM_SHOTS: usize = 16;

pub struct GameSession {
    config: SessionConfig,
    world: World,
    pool: EntityPool,
    director: WaveDirector,
    feed: ClearanceFeed,
    armory: Armory,
    player: Entity,
    time: SimTime,
    phase: GamePhase,
    firing: bool,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
    retire_buffer: Vec<(Entity, EnemyKind, Retirement)>,
}

impl GameSession {
    /// Build a session for `waves`. Data errors are logged, not fatal: the
    /// director skips whatever it cannot spawn.
    pub fn new(config: SessionConfig, waves: WaveSet) -> Self {
        let mut pool = EntityPool::new();
        archetypes::register_defaults(&mut pool);

        for err in waves.validate_with(|tag| pool.is_registered(tag)) {
            error!(%err, "wave data error");
        }

        let mut world = World::new();
        let player = archetypes::spawn_player(&mut world);
        let mut session = Self {
            director: WaveDirector::new(waves, config.director),
            feed: ClearanceFeed::new(config.groups_per_grant, config.max_weapon_level, config.seed),
            config,
            world,
            pool,
            armory: Armory::default(),
            player,
            time: SimTime::default(),
            phase: GamePhase::Ready,
            firing: false,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            retire_buffer: Vec::new(),
        };
        session.prewarm();
        session
    }

    /// Session over the built-in campaign with default tuning.
    pub fn with_default_campaign() -> Self {
        Self::new(SessionConfig::default(), WaveSet::default_campaign())
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            let dt = self.config.dt();
            self.run_systems(dt);
            self.time.advance(dt);
            self.feed.scoreboard.add_play_time(dt);
        }

        self.snapshot()
    }

    /// Build a snapshot without advancing. Drains pending events.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            systems::snapshot::SnapshotInputs {
                time: self.time,
                phase: self.phase,
                firing: self.firing,
                director: &self.director,
                feed: &self.feed,
                pool: &self.pool,
            },
            events,
        )
    }

    /// Full-game restart: world, pool contents, roster, wave index, score
    /// and weapon state all go back to their start-of-run values together.
    pub fn reset(&mut self) {
        self.world.clear();
        self.pool.clear();
        self.director.reset();
        self.feed.reset();
        self.armory.reset();
        self.player = archetypes::spawn_player(&mut self.world);
        self.time = SimTime::default();
        self.phase = GamePhase::Ready;
        self.firing = false;
        self.events.clear();
        self.prewarm();
        info!("session reset");
    }

    /// Destruction entry point: removes the enemy from the roster and
    /// scores it. Does not release it; see [`Self::retire_enemy`].
    pub fn on_entity_destroyed(&mut self, entity: Entity) -> bool {
        if !self.director.on_entity_destroyed(entity) {
            return false;
        }
        let kind = self.world.get::<&Enemy>(entity).map(|e| e.kind).ok();
        if let Some(kind) = kind {
            let score_awarded = self
                .feed
                .scoreboard
                .record_destruction(kind.score_value(), self.director.wave_index());
            self.events.push(GameEvent::EnemyDestroyed { kind, score_awarded });
        }
        true
    }

    /// Notify destruction, then return the enemy to its pool.
    pub fn retire_enemy(&mut self, entity: Entity) {
        self.on_entity_destroyed(entity);
        // Refusals are logged by the pool.
        let _ = self.pool.release_member(&mut self.world, entity);
    }

    /// Apply damage to a live enemy. It is retired by the next tick's
    /// cleanup once its health reaches zero.
    pub fn damage_enemy(&mut self, entity: Entity, amount: i32) -> bool {
        systems::collision::damage_enemy(&mut self.world, entity, amount)
    }

    /// Unlock a weapon outside the grant flow, syncing its companions.
    pub fn unlock_weapon(&mut self, weapon: WeaponType) -> Option<u8> {
        let level = self.feed.weapons.unlock(weapon)?;
        companions::sync_for_weapon(&mut self.world, weapon, level, self.feed.weapons.max_level());
        Some(level)
    }

    /// Upgrade a weapon outside the grant flow, syncing its companions.
    pub fn upgrade_weapon(&mut self, weapon: WeaponType) -> Option<u8> {
        let level = self.feed.weapons.upgrade(weapon)?;
        companions::sync_for_weapon(&mut self.world, weapon, level, self.feed.weapons.max_level());
        Some(level)
    }

    pub fn is_weapon_unlocked(&self, weapon: WeaponType) -> bool {
        self.feed.weapons.is_unlocked(weapon)
    }

    pub fn weapon_level(&self, weapon: WeaponType) -> u8 {
        self.feed.weapons.level(weapon)
    }

    pub fn weapons(&self) -> &WeaponProgression {
        &self.feed.weapons
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.feed.scoreboard
    }

    pub fn director(&self) -> &WaveDirector {
        &self.director
    }

    pub fn pool(&self) -> &EntityPool {
        &self.pool
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Enemies currently on the director's roster.
    pub fn active_enemies(&self) -> Vec<Entity> {
        self.director.roster().iter().collect()
    }

    pub fn player_position(&self) -> Vec2 {
        self.world
            .get::<&Transform>(self.player)
            .map(|t| t.position)
            .unwrap_or_default()
    }

    fn prewarm(&mut self) {
        for kind in [ProjectileKind::Basic, ProjectileKind::Enemy] {
            if let Err(err) = self.pool.prewarm(&mut self.world, kind.pool_tag(), PREWARM_SHOTS) {
                error!(%err, "prewarm failed");
            }
        }
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartRun => {
                if self.phase == GamePhase::Ready {
                    self.phase = GamePhase::Active;
                    self.director.start(&mut self.events);
                    info!(waves = self.director.wave_count(), "run started");
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::Reset => self.reset(),
            PlayerCommand::SetPlayerPosition { x, y } => {
                let bounds = self.config.bounds;
                let position = Vec2::new(x, y).clamp(bounds.min, bounds.max);
                if let Ok(mut transform) = self.world.get::<&mut Transform>(self.player) {
                    transform.position = position;
                }
            }
            PlayerCommand::SetFiring { held } => self.firing = held,
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        let dt32 = dt as f32;

        // 1. Wave director (spawns, clearance, grants)
        self.director.advance(
            dt,
            &mut DirectorContext {
                world: &mut self.world,
                pool: &mut self.pool,
                events: &mut self.events,
                sink: &mut self.feed,
            },
        );

        let player_pos = self.player_position();
        let player = Some(player_pos);
        // 2. Enemy behaviour
        systems::movement::run_enemies(&mut self.world, dt32, player);
        // 3. Enemy fire
        systems::enemy_fire::run(&mut self.world, &mut self.pool, dt32, player);
        // 4. Player fire
        systems::player_fire::run(
            &mut self.world,
            &mut self.pool,
            &mut self.armory,
            &self.feed.weapons,
            player_pos,
            self.firing,
            dt32,
        );
        // 5. Projectile flight
        systems::movement::run_projectiles(&mut self.world, dt32);
        // 6. Companions
        systems::companions::run(&mut self.world, dt32);
        // 7. Collision
        let outcome = systems::collision::run(&mut self.world, player);
        // 8. Retire enemies, then projectiles
        let mut retiring = std::mem::take(&mut self.retire_buffer);
        systems::cleanup::collect_enemies(&self.world, &self.config.bounds, &mut retiring);
        for &(entity, kind, reason) in &retiring {
            if reason == Retirement::LeftBounds {
                debug!(?kind, "enemy left the play field");
            }
            self.retire_enemy(entity);
        }
        self.retire_buffer = retiring;
        systems::cleanup::release_projectiles(&mut self.world, &mut self.pool, &self.config.bounds);

        // 9. Outcome
        if outcome.player_hit {
            warn!(score = self.feed.scoreboard.score(), "player destroyed");
            self.phase = GamePhase::Defeat;
            self.events.push(GameEvent::Defeat);
        } else if self.director.is_complete() {
            info!(score = self.feed.scoreboard.score(), "victory");
            self.phase = GamePhase::Victory;
            self.events.push(GameEvent::Victory);
        }
    }
}
