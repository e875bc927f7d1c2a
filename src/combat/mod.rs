//! Combat domain: attacks, health, hit resolution and the opponent AI.

pub mod ai;
mod attacks;
mod components;
mod events;
pub mod hits;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use attacks::{AttackKind, HitboxShape, overlaps, strike_region};
pub use components::Health;
pub use events::HitLanded;
pub use resources::{AiTuning, AttackConfig, AttackTuning};

use bevy::prelude::*;

use crate::combat::systems::{log_hits, read_combat_input};
use crate::core::GameState;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<HitLanded>().add_systems(
            Update,
            (read_combat_input, log_hits).run_if(in_state(GameState::Fight)),
        );
    }
}
