#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::PlayerCommand;
    use crate::components::{Enemy, FormationInit, Projectile};
    use crate::config::{DirectorTuning, SessionConfig};
    use crate::enums::*;
    use crate::error::DataError;
    use crate::events::GameEvent;
    use crate::formation::*;
    use crate::pooled::PooledEntity;
    use crate::state::GameStateSnapshot;
    use crate::types::{direction_or, PlayBounds};

    const AUTHORED_CAMPAIGN: &str = include_str!("../../../data/campaign.json");

    // ---- Health scaling ----

    #[test]
    fn test_health_multiplier_formula() {
        let tuning = DirectorTuning {
            base_health_multiplier: 1.0,
            health_increase_per_wave: 0.1,
            ..Default::default()
        };
        let m = tuning.health_multiplier(2, 1.0, 1.0);
        assert!((m - 1.2).abs() < 1e-6, "b=1 i=0.1 w=2 should give 1.2, got {m}");

        let m = tuning.health_multiplier(3, 1.5, 2.0);
        assert!((m - 1.3 * 1.5 * 2.0).abs() < 1e-5, "got {m}");
    }

    // ---- Authored data ----

    #[test]
    fn test_default_campaign_is_clean() {
        let set = WaveSet::default_campaign();
        assert_eq!(set.waves.len(), 3);
        let errors = set.validate_with(|tag| EnemyKind::ALL.iter().any(|k| k.pool_tag() == tag));
        assert!(errors.is_empty(), "default campaign has data errors: {errors:?}");
    }

    #[test]
    fn test_authored_campaign_parses_with_defaults() {
        let set = WaveSet::from_json_str(AUTHORED_CAMPAIGN).unwrap();
        assert_eq!(set.waves.len(), 2);
        assert!(set.validate().is_empty());

        let opening = &set.waves[0];
        assert_eq!(opening.modifiers, WaveModifiers::default());
        let first = &opening.groups[0];
        assert_eq!(first.repeat_count, 1);
        assert_eq!(first.health_multiplier, 1.0);
        assert!(!first.wait_for_clearance);

        let pair = set.formation("pair").unwrap();
        assert_eq!(pair.points[0].move_direction, Vec2::NEG_X);
        assert_eq!(pair.points[0].move_speed, None);
        assert!((pair.pass_duration() - 0.5).abs() < 1e-9);

        let crossfire = &set.waves[1];
        assert!((crossfire.modifiers.speed_multiplier - 1.1).abs() < 1e-6);
        assert_eq!(crossfire.modifiers.health_multiplier, 1.0);
        assert_eq!(set.group_spawn_count(&crossfire.groups[1]), 6);
    }

    #[test]
    fn test_validate_reports_every_problem() {
        let set = WaveSet {
            formations: vec![Formation {
                name: "empty".into(),
                points: Vec::new(),
            }],
            waves: vec![
                Wave {
                    name: "broken".into(),
                    pre_wave_delay: -1.0,
                    groups: vec![
                        EnemyGroup {
                            pool_tag: "".into(),
                            formation: "empty".into(),
                            anchor: Vec2::ZERO,
                            repeat_count: 1,
                            health_multiplier: 1.0,
                            wait_for_clearance: false,
                        },
                        EnemyGroup {
                            pool_tag: "StraightEnemy".into(),
                            formation: "nowhere".into(),
                            anchor: Vec2::ZERO,
                            repeat_count: 1,
                            health_multiplier: 1.0,
                            wait_for_clearance: false,
                        },
                        EnemyGroup {
                            pool_tag: "StraightEnemy".into(),
                            formation: "empty".into(),
                            anchor: Vec2::ZERO,
                            repeat_count: 1,
                            health_multiplier: 1.0,
                            wait_for_clearance: false,
                        },
                    ],
                    modifiers: WaveModifiers::default(),
                },
                Wave {
                    name: "hollow".into(),
                    pre_wave_delay: 0.0,
                    groups: Vec::new(),
                    modifiers: WaveModifiers::default(),
                },
            ],
        };

        let errors = set.validate();
        assert!(errors.contains(&DataError::NegativePreWaveDelay { wave: 0, delay: -1.0 }));
        assert!(errors.contains(&DataError::EmptyPoolTag { wave: 0, group: 0 }));
        assert!(errors.contains(&DataError::MissingFormation {
            wave: 0,
            group: 1,
            formation: "nowhere".into(),
        }));
        assert!(errors.contains(&DataError::EmptyFormation {
            wave: 0,
            group: 2,
            formation: "empty".into(),
        }));
        assert!(errors.contains(&DataError::NoGroups {
            wave: 1,
            name: "hollow".into(),
        }));
        assert_eq!(errors.len(), 5, "unexpected errors: {errors:?}");
    }

    #[test]
    fn test_unknown_tag_reported_only_with_registry() {
        let mut set = WaveSet::default_campaign();
        set.waves[0].groups[0].pool_tag = "GhostEnemy".into();
        assert!(set.validate().is_empty());

        let errors = set.validate_with(|tag| tag != "GhostEnemy");
        assert_eq!(
            errors,
            vec![DataError::UnknownPoolTag {
                wave: 0,
                group: 0,
                tag: "GhostEnemy".into(),
            }]
        );
    }

    #[test]
    fn test_zero_repeat_is_a_group_error() {
        let mut set = WaveSet::default_campaign();
        set.waves[1].groups[2].repeat_count = 0;
        let group = set.waves[1].groups[2].clone();
        assert_eq!(
            set.check_group(1, 2, &group),
            Err(DataError::ZeroRepeat { wave: 1, group: 2 })
        );
        assert_eq!(set.group_spawn_count(&group), 0);
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = WaveSet::from_json_str("{ \"waves\": [ { \"name\": 3 } ] }").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse JSON"), "got: {err}");
    }

    // ---- Config ----

    #[test]
    fn test_session_config_partial_json() {
        let config = SessionConfig::from_json_str(r#"{ "seed": 7, "director": { "health_increase_per_wave": 0.25 } }"#)
            .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.groups_per_grant, 3);
        assert_eq!(config.max_weapon_level, 3);
        assert!((config.director.health_increase_per_wave - 0.25).abs() < 1e-6);
        assert!((config.director.clearance_poll_interval_secs - 0.5).abs() < 1e-9);
        assert!((config.dt() - 1.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_play_bounds_default() {
        let bounds = PlayBounds::default();
        assert!(bounds.contains(Vec2::new(12.0, 0.0)));
        assert!(!bounds.contains(Vec2::new(-12.5, 0.0)));
        assert!(!bounds.contains(Vec2::new(0.0, 8.5)));
    }

    // ---- Pooled entity contract ----

    #[test]
    fn test_enemy_on_spawn_clears_previous_life() {
        let mut enemy = Enemy::new(EnemyKind::SlowPattern, 3, 3.0, 2.0);
        enemy.health = -4;
        enemy.speed = 11.0;
        enemy.direction = Vec2::Y;
        enemy.fire_cooldown = 0.01;
        enemy.fire_interval = 0.5;
        enemy.projectile_speed_multiplier = 3.0;

        enemy.on_spawn(Vec2::new(12.0, 0.0));

        assert_eq!(enemy.health, 3);
        assert_eq!(enemy.speed, 3.0);
        assert_eq!(enemy.direction, Vec2::NEG_X);
        assert_eq!(enemy.fire_interval, 2.0);
        assert_eq!(enemy.fire_cooldown, 2.0);
        assert_eq!(enemy.projectile_speed_multiplier, 1.0);
    }

    #[test]
    fn test_projectile_on_spawn_clears_age() {
        let mut shot = Projectile::new(ProjectileKind::Enemy, 6.0, 1, 4.0);
        shot.age = 10.0;
        shot.spent = true;
        shot.speed = 9.0;
        assert!(shot.expired());

        shot.on_spawn(Vec2::ZERO);
        assert!(!shot.expired());
        assert_eq!(shot.speed, 6.0);
    }

    // ---- Vocabulary ----

    #[test]
    fn test_pool_tags_are_unique() {
        let mut tags: Vec<&str> = EnemyKind::ALL.iter().map(|k| k.pool_tag()).collect();
        tags.extend(ProjectileKind::ALL.iter().map(|k| k.pool_tag()));
        let count = tags.len();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), count, "pool tags must not be shared between archetypes");
    }

    #[test]
    fn test_companion_weapons() {
        assert_eq!(WeaponType::Shield.companion(), Some(CompanionKind::ShieldOrb));
        assert_eq!(WeaponType::Option.companion(), Some(CompanionKind::OptionPod));
        assert!(WeaponType::GRANTABLE.iter().all(|w| *w != WeaponType::Basic));
    }

    #[test]
    fn test_direction_fallback() {
        assert_eq!(direction_or(Vec2::ZERO, Vec2::NEG_X), Vec2::NEG_X);
        let d = direction_or(Vec2::new(-3.0, 4.0), Vec2::NEG_X);
        assert!((d.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_command_and_event_wire_format() {
        let json = serde_json::to_string(&PlayerCommand::SetFiring { held: true }).unwrap();
        assert_eq!(json, r#"{"type":"SetFiring","held":true}"#);

        let event = GameEvent::WeaponGranted {
            weapon: WeaponType::Shield,
            level: 2,
            unlocked: false,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"WeaponGranted""#), "got {json}");
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains(r#""phase":"Ready""#));
        assert!(json.contains(r#""director":"Idle""#));
    }

    #[test]
    fn test_initialize_in_formation_scales_health_and_fire_rate() {
        let mut enemy = Enemy::new(EnemyKind::Seeker, 2, 4.0, 2.5);
        enemy.on_spawn(Vec2::ZERO);
        enemy.initialize_in_formation(&FormationInit {
            direction: Vec2::new(-2.0, 0.0),
            speed: 6.0,
            health_multiplier: 1.3,
            fire_rate_multiplier: 2.0,
            projectile_speed_multiplier: 1.5,
        });
        assert_eq!(enemy.direction, Vec2::NEG_X);
        assert_eq!(enemy.speed, 6.0);
        // round(2 * 1.3) = 3
        assert_eq!(enemy.health, 3);
        assert_eq!(enemy.max_health, 2, "archetype max survives");
        assert!((enemy.fire_interval - 1.25).abs() < 1e-6);
        assert_eq!(enemy.fire_cooldown, enemy.fire_interval);
        assert_eq!(enemy.projectile_speed_multiplier, 1.5);
    }

    #[test]
    fn test_initialize_in_formation_keeps_one_health() {
        let mut enemy = Enemy::new(EnemyKind::StraightLine, 1, 5.0, 1.0);
        enemy.initialize_in_formation(&FormationInit {
            direction: Vec2::ZERO,
            speed: 5.0,
            health_multiplier: 0.1,
            fire_rate_multiplier: 0.0,
            projectile_speed_multiplier: 1.0,
        });
        assert_eq!(enemy.health, 1);
        assert_eq!(enemy.direction, Vec2::NEG_X, "zero direction falls back to -x");
        assert_eq!(enemy.fire_interval, 1.0, "non-positive fire rate is ignored");
    }
}
