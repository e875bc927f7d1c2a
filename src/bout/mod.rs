//! Bout domain: one match between the player and the computer opponent.
//!
//! The match loop itself ([`Bout`]) is plain data with no Bevy dependencies
//! beyond logging, stepped from `FixedUpdate` at 60 Hz. Input is collected in
//! `Update` into [`PendingInput`] and consumed by the next fixed tick.

mod input;
mod resources;
mod state;
mod systems;

pub use input::{BoutInput, PendingInput};
pub use resources::{BoutTuning, MatchRng};
pub use state::{Bout, BoutOutcome, BoutPhase, TickReport};
pub use systems::build_bout;
pub(crate) use systems::start_bout;

use bevy::prelude::*;

use crate::bout::systems::{advance_bout, apply_tick_rate, end_bout};
use crate::core::GameState;

pub struct BoutPlugin;

impl Plugin for BoutPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PendingInput>()
            .init_resource::<MatchRng>()
            .add_systems(Startup, apply_tick_rate)
            .add_systems(OnEnter(GameState::Fight), start_bout)
            .add_systems(
                FixedUpdate,
                advance_bout.run_if(in_state(GameState::Fight)),
            )
            .add_systems(OnExit(GameState::Fight), end_bout);
    }
}
