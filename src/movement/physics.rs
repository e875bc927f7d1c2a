//! Movement domain: per-tick kinematic integration against the arena.
//!
//! These are plain functions over [`Kinematics`] so the fighter update can run
//! them in a fixed order without a physics engine or a live `World`.

use crate::movement::{ArenaBounds, Facing, Kinematics, MovementTuning};

/// Facing follows the sign of horizontal velocity; standing still keeps it.
pub fn update_facing(kin: &mut Kinematics) {
    if kin.velocity.x > 0.0 {
        kin.facing = Facing::Right;
    } else if kin.velocity.x < 0.0 {
        kin.facing = Facing::Left;
    }
}

pub fn apply_gravity(kin: &mut Kinematics, tuning: &MovementTuning) {
    if kin.grounded {
        return;
    }
    kin.velocity.y = (kin.velocity.y + tuning.gravity).min(tuning.max_fall_speed);
}

pub fn integrate(kin: &mut Kinematics) {
    kin.position += kin.velocity;
}

/// Snaps the feet onto the floor line. Returns true when this call ended an
/// airborne phase.
pub fn resolve_floor(kin: &mut Kinematics, arena: &ArenaBounds) -> bool {
    let floor = arena.floor_line();
    if kin.position.y < floor {
        return false;
    }

    let landed = !kin.grounded;
    kin.position.y = floor;
    kin.velocity.y = 0.0;
    kin.grounded = true;
    landed
}

/// Keeps a body of `half_width` inside `[0, arena.width]`, zeroing horizontal
/// velocity whenever an edge is hit.
pub fn clamp_to_arena(kin: &mut Kinematics, half_width: f32, arena: &ArenaBounds) {
    if kin.position.x - half_width < 0.0 {
        kin.position.x = half_width;
        kin.velocity.x = 0.0;
    }
    if kin.position.x + half_width > arena.width {
        kin.position.x = arena.width - half_width;
        kin.velocity.x = 0.0;
    }
}
