//! Movement domain: unit tests for kinematic integration and key sampling.

use bevy::prelude::{ButtonInput, KeyCode, Vec2};

use super::physics::{apply_gravity, clamp_to_arena, integrate, resolve_floor, update_facing};
use super::systems::input::move_inputs;
use super::{ArenaBounds, Facing, Kinematics, MovementTuning};
use crate::bout::BoutInput;

#[test]
fn test_facing_follows_velocity_sign() {
    let mut kin = Kinematics::at(Vec2::new(100.0, 650.0));
    kin.velocity.x = -3.0;
    update_facing(&mut kin);
    assert_eq!(kin.facing, Facing::Left);

    kin.velocity.x = 0.0;
    update_facing(&mut kin);
    assert_eq!(kin.facing, Facing::Left, "zero velocity keeps facing");

    kin.velocity.x = 2.0;
    update_facing(&mut kin);
    assert_eq!(kin.facing, Facing::Right);
}

#[test]
fn test_gravity_is_capped_and_ignored_on_ground() {
    let tuning = MovementTuning::default();
    let mut kin = Kinematics::at(Vec2::new(100.0, 100.0));
    kin.velocity.y = 9.5;

    apply_gravity(&mut kin, &tuning);
    assert_eq!(kin.velocity.y, tuning.max_fall_speed);

    kin.grounded = true;
    kin.velocity.y = 0.0;
    apply_gravity(&mut kin, &tuning);
    assert_eq!(kin.velocity.y, 0.0);
}

#[test]
fn test_floor_snaps_and_reports_landing_once() {
    let arena = ArenaBounds::default();
    let mut kin = Kinematics::at(Vec2::new(100.0, arena.floor_line() - 3.0));
    kin.velocity.y = 8.0;
    integrate(&mut kin);

    assert!(resolve_floor(&mut kin, &arena));
    assert_eq!(kin.position.y, arena.floor_line());
    assert_eq!(kin.velocity.y, 0.0);
    assert!(kin.grounded);

    assert!(!resolve_floor(&mut kin, &arena), "already grounded");
}

#[test]
fn test_clamp_keeps_body_inside_arena() {
    let arena = ArenaBounds::default();
    let mut kin = Kinematics::at(Vec2::new(-40.0, 650.0));
    kin.velocity.x = -5.0;
    clamp_to_arena(&mut kin, 40.0, &arena);
    assert_eq!(kin.position.x, 40.0);
    assert_eq!(kin.velocity.x, 0.0);

    kin.position.x = arena.width + 10.0;
    kin.velocity.x = 5.0;
    clamp_to_arena(&mut kin, 40.0, &arena);
    assert_eq!(kin.position.x, arena.width - 40.0);
    assert_eq!(kin.velocity.x, 0.0);
}

#[test]
fn test_rect_is_anchored_at_feet() {
    let kin = Kinematics::at(Vec2::new(200.0, 650.0));
    let rect = kin.rect_of_size(Vec2::new(80.0, 140.0));
    assert_eq!(rect.min, Vec2::new(160.0, 510.0));
    assert_eq!(rect.max, Vec2::new(240.0, 650.0));
}

#[test]
fn test_both_walk_keys_on_one_frame_are_queued_in_order() {
    let mut keyboard = ButtonInput::<KeyCode>::default();
    keyboard.press(KeyCode::KeyS);
    keyboard.press(KeyCode::KeyA);

    assert_eq!(
        move_inputs(&keyboard),
        vec![BoutInput::Walk(-1), BoutInput::Walk(1)]
    );
}

#[test]
fn test_walk_key_release_is_queued() {
    let mut keyboard = ButtonInput::<KeyCode>::default();
    keyboard.press(KeyCode::KeyA);
    keyboard.clear();
    keyboard.release(KeyCode::KeyA);

    assert_eq!(move_inputs(&keyboard), vec![BoutInput::Release(-1)]);
}
