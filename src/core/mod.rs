//! Core domain: game states, screen flow and arena presentation.

mod events;
pub mod presentation;
mod resources;
mod state;
mod systems;
mod ui;


pub use events::{BoutResolved, NavigationSignal};
pub use presentation::{BoutEntity, FighterSprite, arena_to_world, rect_to_world, side_color};
pub use resources::LastOutcome;
pub use state::GameState;

use bevy::prelude::*;

use crate::bout::start_bout;
use crate::core::presentation::{cleanup_arena, spawn_arena, sync_fighter_sprites};
use crate::core::systems::{finish_boot, handle_bout_resolved, handle_navigation, setup_camera};
use crate::core::ui::countdown::{spawn_countdown_overlay, update_countdown_overlay};
use crate::core::ui::winner::{cleanup_winner_screen, handle_winner_input, spawn_winner_screen};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<LastOutcome>()
            .add_message::<BoutResolved>()
            .add_message::<NavigationSignal>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, finish_boot.run_if(in_state(GameState::Boot)))
            .add_systems(
                OnEnter(GameState::Fight),
                (spawn_arena, spawn_countdown_overlay).after(start_bout),
            )
            .add_systems(
                Update,
                (sync_fighter_sprites, update_countdown_overlay)
                    .run_if(in_state(GameState::Fight)),
            )
            .add_systems(OnExit(GameState::Fight), cleanup_arena)
            .add_systems(OnEnter(GameState::Winner), spawn_winner_screen)
            .add_systems(
                Update,
                handle_winner_input.run_if(in_state(GameState::Winner)),
            )
            .add_systems(OnExit(GameState::Winner), cleanup_winner_screen)
            .add_systems(Update, (handle_bout_resolved, handle_navigation));
    }
}
