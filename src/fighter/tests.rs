//! Fighter domain: unit tests for actions, ticking and invariants.

use bevy::prelude::{Rect, Vec2};

use super::{Controller, Fighter, FighterSpawn, FighterState, FighterTuning};
use crate::combat::AttackKind;
use crate::movement::Facing;
use crate::sprites::{AnimationKey, AnimationSet};

fn spawn(x: f32, y: f32) -> FighterSpawn {
    FighterSpawn {
        name: "The Boat Man".to_string(),
        character_id: "boat_man".to_string(),
        position: Vec2::new(x, y),
        facing: Facing::Right,
        controller: Controller::Human,
    }
}

fn fighter_with(x: f32, tuning: FighterTuning) -> Fighter {
    let floor = tuning.arena.floor_line();
    Fighter::new(spawn(x, floor), tuning, AnimationSet::placeholder())
}

fn fighter_at(x: f32) -> Fighter {
    fighter_with(x, FighterTuning::default())
}

fn sheet_set() -> AnimationSet {
    let frame = |i: f32| Rect::new(i * 100.0, 0.0, i * 100.0 + 100.0, 120.0);
    AnimationSet::new("boat_man", 1.5)
        .with_clip(AnimationKey::Idle, vec![frame(0.0), frame(1.0)])
        .with_clip(AnimationKey::Walking, vec![frame(2.0), frame(3.0), frame(4.0)])
}

// -----------------------------------------------------------------------------
// Construction
// -----------------------------------------------------------------------------

#[test]
fn test_new_fighter_rests_on_floor_idle_with_full_health() {
    let fighter = fighter_at(200.0);
    assert!(fighter.is_grounded());
    assert_eq!(*fighter.state(), FighterState::Idle);
    assert_eq!(fighter.health().current, 45);
    assert_eq!(fighter.health().max, 45);
    assert_eq!(fighter.cooldown(), 0);
    assert!(fighter.attack_hitbox().is_none());
}

#[test]
fn test_spawn_below_floor_is_snapped_up() {
    let tuning = FighterTuning::default();
    let fighter = Fighter::new(
        spawn(300.0, tuning.arena.height),
        tuning,
        AnimationSet::placeholder(),
    );
    assert_eq!(fighter.position().y, tuning.arena.floor_line());
    assert!(fighter.is_grounded());
}

#[test]
fn test_spawn_in_air_starts_jumping_and_falls() {
    let tuning = FighterTuning::default();
    let mut fighter = Fighter::new(spawn(300.0, 200.0), tuning, AnimationSet::placeholder());
    assert!(!fighter.is_grounded());
    assert_eq!(*fighter.state(), FighterState::Jumping);

    for _ in 0..200 {
        fighter.update();
    }
    assert!(fighter.is_grounded());
    assert_eq!(*fighter.state(), FighterState::Idle);
}

#[test]
fn test_placeholder_render_rect_is_square_at_feet() {
    let fighter = fighter_at(300.0);
    let rect = fighter.render_rect();
    assert_eq!(rect.size(), Vec2::splat(150.0));
    assert_eq!(rect.max.y, fighter.position().y);
    assert_eq!(rect.center().x, 300.0);
    assert_eq!(fighter.display_frame().region, None);
}

#[test]
fn test_render_rect_follows_scaled_frame_size() {
    let tuning = FighterTuning::default();
    let fighter = Fighter::new(spawn(300.0, tuning.arena.floor_line()), tuning, sheet_set());
    assert_eq!(fighter.render_rect().size(), Vec2::new(150.0, 180.0));
}

// -----------------------------------------------------------------------------
// Movement
// -----------------------------------------------------------------------------

#[test]
fn test_scenario_walk_one_tick() {
    let mut fighter = fighter_at(100.0);
    fighter.walk(1);
    fighter.update();

    assert_eq!(fighter.position().x, 105.0);
    assert_eq!(*fighter.state(), FighterState::Walking);
    assert_eq!(fighter.facing(), Facing::Right);
}

#[test]
fn test_walk_uses_sign_only_and_ignores_zero() {
    let mut fighter = fighter_at(300.0);
    fighter.walk(-7);
    assert_eq!(fighter.velocity().x, -5.0);

    fighter.stop();
    fighter.walk(0);
    assert_eq!(fighter.velocity().x, 0.0);
    assert_eq!(*fighter.state(), FighterState::Idle);
}

#[test]
fn test_stop_returns_to_idle_and_keeps_facing() {
    let mut fighter = fighter_at(300.0);
    fighter.walk(-1);
    fighter.update();
    fighter.stop();
    fighter.update();

    assert_eq!(fighter.velocity().x, 0.0);
    assert_eq!(*fighter.state(), FighterState::Idle);
    assert_eq!(fighter.facing(), Facing::Left);
    assert!(fighter.display_frame().flip_x);
}

#[test]
fn test_horizontal_clamp_for_any_speed_and_start() {
    let mut tuning = FighterTuning::default();
    tuning.movement.walk_speed = 37.0;
    let width = tuning.arena.width;

    for start in [40.0, 41.0, 100.0, 500.0, 930.0, 959.0, 960.0] {
        for direction in [-1, 1] {
            let mut fighter = fighter_with(start, tuning);
            fighter.walk(direction);
            for _ in 0..40 {
                fighter.update();
                let body = fighter.body();
                assert!(body.min.x >= 0.0, "left edge {} escaped", body.min.x);
                assert!(body.max.x <= width, "right edge {} escaped", body.max.x);
            }
        }
    }
}

#[test]
fn test_drawn_rect_stays_inside_arena_at_both_walls() {
    let mut tuning = FighterTuning::default();
    tuning.movement.walk_speed = 23.0;
    let width = tuning.arena.width;

    // Walking frames are wider than idle ones, so the frame swap itself can push
    // the drawing past a wall
    let wide = |i: f32| Rect::new(i * 140.0, 0.0, i * 140.0 + 140.0, 120.0);
    let widening = sheet_set().with_clip(AnimationKey::Walking, vec![wide(0.0), wide(1.0)]);
    let floor = tuning.arena.floor_line();

    for set in [AnimationSet::placeholder(), sheet_set(), widening] {
        for direction in [-1, 1] {
            let mut fighter = Fighter::new(spawn(500.0, floor), tuning, set.clone());
            fighter.walk(direction);
            for _ in 0..200 {
                fighter.update();
                let drawn = fighter.render_rect();
                let body = fighter.body();
                assert!(drawn.min.x >= 0.0, "drawn left edge {} escaped", drawn.min.x);
                assert!(drawn.max.x <= width, "drawn right edge {} escaped", drawn.max.x);
                assert!(body.min.x >= 0.0 && body.max.x <= width);
            }
        }
    }
}

#[test]
fn test_spawn_against_wall_is_pushed_in_by_drawn_width() {
    let fighter = fighter_at(10.0);
    assert_eq!(fighter.render_rect().min.x, 0.0);
    assert_eq!(fighter.position().x, 75.0);
    assert_eq!(fighter.body().center().x, 75.0);
}

#[test]
fn test_hitting_the_wall_zeroes_velocity() {
    let mut fighter = fighter_at(78.0);
    fighter.walk(-1);
    fighter.update();
    assert_eq!(fighter.render_rect().min.x, 0.0);
    assert_eq!(fighter.position().x, 75.0);
    assert_eq!(fighter.velocity().x, 0.0);
}

// -----------------------------------------------------------------------------
// Jumping and gravity
// -----------------------------------------------------------------------------

#[test]
fn test_scenario_jump_and_land() {
    let mut fighter = fighter_at(300.0);
    let tuning = *fighter.tuning();
    fighter.jump();

    assert_eq!(fighter.velocity().y, tuning.movement.jump_velocity);
    assert!(!fighter.is_grounded());
    assert_eq!(*fighter.state(), FighterState::Jumping);

    let mut ticks = 0;
    while !fighter.is_grounded() {
        fighter.update();
        ticks += 1;
        assert!(ticks < 500, "fighter never landed");
    }

    assert_eq!(fighter.velocity().y, 0.0);
    assert_eq!(fighter.position().y, tuning.arena.floor_line());
    assert_eq!(*fighter.state(), FighterState::Idle);
}

#[test]
fn test_gravity_accumulates_until_capped() {
    let mut fighter = fighter_at(300.0);
    let movement = fighter.tuning().movement;
    fighter.jump();

    let mut previous = fighter.velocity().y;
    loop {
        fighter.update();
        if fighter.is_grounded() {
            assert_eq!(fighter.velocity().y, 0.0);
            break;
        }
        let expected = (previous + movement.gravity).min(movement.max_fall_speed);
        assert_eq!(fighter.velocity().y, expected);
        assert!(fighter.velocity().y > previous || previous == movement.max_fall_speed);
        previous = fighter.velocity().y;
    }
}

#[test]
fn test_jump_while_airborne_is_ignored() {
    let mut fighter = fighter_at(300.0);
    fighter.jump();
    fighter.update();
    let vy = fighter.velocity().y;

    fighter.jump();
    assert_eq!(fighter.velocity().y, vy);
}

#[test]
fn test_landing_while_walking_resumes_walk() {
    let mut fighter = fighter_at(300.0);
    fighter.walk(1);
    fighter.jump();
    while !fighter.is_grounded() {
        fighter.update();
    }
    assert_eq!(*fighter.state(), FighterState::Walking);
}

// -----------------------------------------------------------------------------
// Attacking
// -----------------------------------------------------------------------------

#[test]
fn test_scenario_attack_cooldown_expires_on_sixtieth_tick() {
    let mut fighter = fighter_at(300.0);
    assert_eq!(fighter.attack(AttackKind::Basic), Some(3));
    assert!(fighter.attack_hitbox().is_some());

    for _ in 0..59 {
        fighter.update();
    }
    assert!(fighter.is_attacking());
    assert_eq!(fighter.cooldown(), 1);

    fighter.update();
    assert!(!fighter.is_attacking());
    assert_eq!(fighter.cooldown(), 0);
    assert!(fighter.attack_hitbox().is_none());
    assert_eq!(*fighter.state(), FighterState::Idle);
}

#[test]
fn test_attack_while_attacking_changes_nothing() {
    let mut fighter = fighter_at(300.0);
    fighter.attack(AttackKind::Basic);
    fighter.update();
    let before = *fighter.state();

    assert_eq!(fighter.attack(AttackKind::Super), None);
    assert_eq!(fighter.attack(AttackKind::Basic), None);
    assert_eq!(*fighter.state(), before);
}

#[test]
fn test_attack_restarts_animation_on_attack_clip() {
    let tuning = FighterTuning::default();
    let mut fighter = Fighter::new(spawn(300.0, tuning.arena.floor_line()), tuning, sheet_set());
    fighter.walk(1);
    for _ in 0..7 {
        fighter.update();
    }
    assert_eq!(fighter.animation_frame(), 1);

    fighter.attack(AttackKind::Basic);
    assert_eq!(fighter.animation_key(), AnimationKey::Attack(AttackKind::Basic));
    assert_eq!(fighter.animation_frame(), 0);

    // No basic clip in the sheet: the idle frame is shown instead
    fighter.update();
    assert_eq!(
        fighter.display_frame().region,
        fighter.animations().frames(AnimationKey::Idle).first().copied()
    );
}

#[test]
fn test_damage_values_increase_by_tier() {
    let tuning = FighterTuning::default();
    let basic = tuning.attacks.damage(AttackKind::Basic);
    let mid = tuning.attacks.damage(AttackKind::Mid);
    let special = tuning.attacks.damage(AttackKind::Super);
    assert!(basic < mid && mid < special);
}

#[test]
fn test_hitbox_sits_beyond_leading_edge() {
    let mut fighter = fighter_at(300.0);
    let shape = fighter.tuning().attacks.basic.hitbox.expect("basic has a hitbox");

    fighter.attack(AttackKind::Basic);
    let hitbox = fighter.attack_hitbox().expect("hitbox while attacking");
    assert_eq!(hitbox.min.x, fighter.body().max.x + shape.offset);
    assert_eq!(hitbox.width(), shape.width);
    assert_eq!(hitbox.height(), shape.height);

    let mut left = fighter_at(600.0);
    left.walk(-1);
    left.update();
    left.stop();
    left.attack(AttackKind::Basic);
    let hitbox = left.attack_hitbox().expect("hitbox while attacking");
    assert_eq!(hitbox.max.x, left.body().min.x - shape.offset);
}

#[test]
fn test_hitbox_tracks_movement_during_attack() {
    let mut fighter = fighter_at(300.0);
    fighter.attack(AttackKind::Basic);
    let before = fighter.attack_hitbox().expect("hitbox");

    // Walking does not cancel the attack
    fighter.walk(1);
    assert!(fighter.is_attacking());
    fighter.update();

    let after = fighter.attack_hitbox().expect("hitbox");
    assert_eq!(after.min.x - before.min.x, 5.0);
    assert_eq!(
        fighter.animation_key(),
        AnimationKey::Attack(AttackKind::Basic)
    );
}

#[test]
fn test_attack_without_hitbox_shape() {
    let mut tuning = FighterTuning::default();
    tuning.attacks.mid.hitbox = None;
    let mut fighter = fighter_with(300.0, tuning);

    assert_eq!(fighter.attack(AttackKind::Mid), Some(tuning.attacks.mid.damage));
    assert!(fighter.is_attacking());
    assert!(fighter.attack_hitbox().is_none());
}

#[test]
fn test_zero_cooldown_config_still_attacks_for_one_tick() {
    let mut tuning = FighterTuning::default();
    tuning.attacks.basic.cooldown_ticks = 0;
    let mut fighter = fighter_with(300.0, tuning);

    fighter.attack(AttackKind::Basic);
    assert_eq!(fighter.cooldown(), 1);
    fighter.update();
    assert!(!fighter.is_attacking());
}

#[test]
fn test_attack_expiring_in_the_air_settles_to_jumping() {
    let mut tuning = FighterTuning::default();
    tuning.attacks.basic.cooldown_ticks = 5;
    let mut fighter = fighter_with(300.0, tuning);

    fighter.jump();
    fighter.attack(AttackKind::Basic);
    for _ in 0..5 {
        fighter.update();
    }
    assert!(!fighter.is_grounded());
    assert_eq!(*fighter.state(), FighterState::Jumping);
}

#[test]
fn test_jump_during_attack_keeps_the_attack() {
    let mut fighter = fighter_at(300.0);
    fighter.attack(AttackKind::Basic);
    fighter.jump();

    assert!(!fighter.is_grounded());
    assert!(fighter.is_attacking());
}

#[test]
fn test_has_hit_resets_with_each_new_attack() {
    let mut fighter = fighter_at(300.0);
    fighter.attack(AttackKind::Basic);
    assert!(!fighter.has_dealt_hit());
    fighter.register_hit();
    assert!(fighter.has_dealt_hit());
    assert!(!fighter.can_land_hit());

    for _ in 0..60 {
        fighter.update();
    }
    assert!(!fighter.has_dealt_hit());

    fighter.attack(AttackKind::Basic);
    assert!(!fighter.has_dealt_hit());
    assert!(fighter.can_land_hit());
}

#[test]
fn test_register_hit_outside_attack_is_ignored() {
    let mut fighter = fighter_at(300.0);
    fighter.register_hit();
    assert_eq!(fighter.hit_count(), 0);
}

#[test]
fn test_stronger_attacks_unlock_and_consume_charge() {
    let mut fighter = fighter_at(300.0);
    assert!(fighter.is_unlocked(AttackKind::Basic));
    assert!(!fighter.is_unlocked(AttackKind::Mid));

    for _ in 0..10 {
        fighter.attack(AttackKind::Basic);
        fighter.register_hit();
        for _ in 0..60 {
            fighter.update();
        }
    }
    assert_eq!(fighter.hit_count(), 10);
    assert!(fighter.is_unlocked(AttackKind::Mid));
    assert!(fighter.is_unlocked(AttackKind::Super));

    assert_eq!(fighter.attack(AttackKind::Super), Some(15));
    assert_eq!(fighter.hit_count(), 0);
    assert!(!fighter.is_unlocked(AttackKind::Mid));
}

// -----------------------------------------------------------------------------
// Damage
// -----------------------------------------------------------------------------

#[test]
fn test_scenario_damage_then_attack_immunity() {
    let mut fighter = fighter_at(300.0);
    assert!(fighter.take_damage(5));
    assert_eq!(fighter.health().current, 40);

    fighter.attack(AttackKind::Basic);
    assert!(!fighter.take_damage(5));
    assert_eq!(fighter.health().current, 40);
}

#[test]
fn test_attacking_blocks_even_lethal_damage() {
    let mut fighter = fighter_at(300.0);
    fighter.attack(AttackKind::Basic);
    for amount in [0, 1, 45, 1000, u32::MAX] {
        assert!(!fighter.take_damage(amount));
    }
    assert_eq!(fighter.health().current, 45);
}

#[test]
fn test_health_stays_within_bounds() {
    let mut fighter = fighter_at(300.0);
    for amount in [7, 0, 13, 30, 1, u32::MAX, 4] {
        fighter.take_damage(amount);
        let health = fighter.health();
        assert!(health.current <= health.max);
    }
    assert_eq!(fighter.health().current, 0);
    assert!(fighter.health().is_dead());
}
