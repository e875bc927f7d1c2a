//! Movement domain: kinematics, arena bounds and locomotion input.

mod components;
pub mod physics;
mod resources;
mod systems;

pub use components::{Facing, Kinematics};
pub use resources::{ArenaBounds, MovementTuning};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::systems::read_move_input;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            read_move_input.run_if(in_state(GameState::Fight)),
        );
    }
}

#[cfg(test)]
mod tests;
