#[cfg(test)]
mod tests {
    use glam::Vec2;
    use vanguard_core::components::Enemy;
    use vanguard_core::enums::EnemyKind;
    use vanguard_core::pooled::PooledEntity;

    use crate::patterns::{BehaviorContext, EnemyBehavior, Homing, SineWave};
    use crate::profiles::{build_behavior, get_profile};
    use crate::steer::{heading, turn_toward, wrap_angle};

    const DT: f32 = 1.0 / 60.0;

    fn make_enemy(kind: EnemyKind) -> Enemy {
        let p = get_profile(kind);
        Enemy::new(kind, p.max_health, p.base_speed, p.fire_interval)
    }

    fn ctx(player: Option<Vec2>) -> BehaviorContext {
        BehaviorContext { dt: DT, player }
    }

    #[test]
    fn test_straight_line_moves_along_direction() {
        let mut enemy = make_enemy(EnemyKind::StraightLine);
        let mut behavior = build_behavior(EnemyKind::StraightLine);
        let start = Vec2::new(12.0, 1.0);
        behavior.reset(start);
        let mut pos = start;
        for _ in 0..60 {
            pos = behavior.advance(pos, &mut enemy, &ctx(None));
        }
        // 5 units/s for one second
        assert!((pos.x - 7.0).abs() < 1e-3, "x = {}", pos.x);
        assert!((pos.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_sine_wave_weaves_around_travel_line() {
        let mut enemy = make_enemy(EnemyKind::FastPattern);
        let mut behavior = SineWave::new(2.0, 2.0);
        let start = Vec2::new(12.0, 0.0);
        behavior.reset(start);
        let mut pos = start;
        let mut max_offset: f32 = 0.0;
        for _ in 0..240 {
            pos = behavior.advance(pos, &mut enemy, &ctx(None));
            max_offset = max_offset.max(pos.y.abs());
        }
        assert!(max_offset > 1.5 && max_offset <= 2.0 + 1e-4, "offset {max_offset}");
        assert!(pos.x < start.x);
    }

    #[test]
    fn test_sine_wave_reset_uses_new_origin() {
        // A recycled weaver must weave around its new spawn point, not its first one.
        let mut enemy = make_enemy(EnemyKind::FastPattern);
        let mut behavior = build_behavior(EnemyKind::FastPattern);
        behavior.reset(Vec2::new(12.0, 5.0));
        for _ in 0..30 {
            behavior.advance(Vec2::ZERO, &mut enemy, &ctx(None));
        }
        behavior.on_spawn(Vec2::new(12.0, -3.0));
        let pos = behavior.advance(Vec2::ZERO, &mut enemy, &ctx(None));
        assert!((pos.y + 3.0).abs() < 0.2, "y = {}", pos.y);
    }

    #[test]
    fn test_circular_starts_at_spawn_point() {
        let mut enemy = make_enemy(EnemyKind::SlowPattern);
        let mut behavior = build_behavior(EnemyKind::SlowPattern);
        let start = Vec2::new(10.0, 2.0);
        behavior.reset(start);
        let pos = behavior.advance(start, &mut enemy, &ctx(None));
        assert!(pos.distance(start) < 0.1, "first step jumped to {pos}");
    }

    #[test]
    fn test_homing_turns_toward_player_ahead() {
        let mut enemy = make_enemy(EnemyKind::Seeker);
        let mut behavior = Homing::new(90f32.to_radians());
        let pos = Vec2::new(5.0, 0.0);
        behavior.advance(pos, &mut enemy, &ctx(Some(Vec2::new(0.0, 5.0))));
        assert!(enemy.direction.y > 0.0, "should turn up toward the player");
        // One tick at 90 deg/s turns at most 1.5 degrees.
        let turned = wrap_angle(heading(enemy.direction) - heading(Vec2::NEG_X)).abs();
        assert!(turned <= 1.5f32.to_radians() + 1e-4);
    }

    #[test]
    fn test_homing_ignores_player_behind() {
        let mut enemy = make_enemy(EnemyKind::Seeker);
        let mut behavior = Homing::new(90f32.to_radians());
        behavior.advance(Vec2::new(-2.0, 0.0), &mut enemy, &ctx(Some(Vec2::new(0.0, 3.0))));
        assert_eq!(enemy.direction, Vec2::NEG_X);
    }

    #[test]
    fn test_fire_waits_for_interval_and_aims_at_player() {
        let mut enemy = make_enemy(EnemyKind::StraightLine);
        let mut behavior = build_behavior(EnemyKind::StraightLine);
        let pos = Vec2::new(5.0, 0.0);
        let player = Vec2::new(-5.0, 0.0);
        let mut shots = Vec::new();
        for _ in 0..59 {
            if let Some(s) = behavior.attempt_fire(pos, &mut enemy, &ctx(Some(player))) {
                shots.push(s);
            }
        }
        assert!(shots.is_empty(), "fired before 1s interval");
        for _ in 0..2 {
            if let Some(s) = behavior.attempt_fire(pos, &mut enemy, &ctx(Some(player))) {
                shots.push(s);
            }
        }
        assert_eq!(shots.len(), 1);
        assert!((shots[0].direction - Vec2::NEG_X).length() < 1e-5);
    }

    #[test]
    fn test_fire_holds_without_player() {
        let mut enemy = make_enemy(EnemyKind::StraightLine);
        let mut behavior = build_behavior(EnemyKind::StraightLine);
        for _ in 0..120 {
            assert!(behavior.attempt_fire(Vec2::ZERO, &mut enemy, &ctx(None)).is_none());
        }
    }

    #[test]
    fn test_profiles_match_score_table() {
        for kind in EnemyKind::ALL {
            let p = get_profile(kind);
            assert_eq!(p.score_value, kind.score_value());
            assert!(p.max_health >= 1);
            assert!(p.base_speed > 0.0 && p.fire_interval > 0.0);
        }
        assert_eq!(get_profile(EnemyKind::Seeker).max_health, 2);
    }

    #[test]
    fn test_turn_toward_clamps_and_wraps() {
        let d = turn_toward(Vec2::X, Vec2::NEG_X, 0.1);
        assert!((d.length() - 1.0).abs() < 1e-5);
        assert!(heading(d).abs() <= 0.1 + 1e-5);
        let d = turn_toward(Vec2::X, Vec2::Y, 10.0);
        assert!((d - Vec2::Y).length() < 1e-5);
        assert!((wrap_angle(1.5 * std::f32::consts::PI) + 0.5 * std::f32::consts::PI).abs() < 1e-4);
    }
}
