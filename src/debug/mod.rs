//! Debug domain: dev-only overlays for tuning fights.
//!
//! Features:
//! - Toggle body and attack hitbox overlays (F1)
//! - Per-fighter state, cooldown and charge readout (F2)
//! - Restart the bout (Ctrl+R)

mod state;
mod systems;
mod ui;

pub use state::DebugState;

use bevy::prelude::*;

use crate::bout::start_bout;
use crate::core::GameState;
use crate::debug::systems::{
    handle_debug_hotkeys, respawn_hitbox_overlays, sync_hitbox_overlays,
    update_debug_info_overlay, update_status_message,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                OnEnter(GameState::Fight),
                respawn_hitbox_overlays.after(start_bout),
            )
            .add_systems(
                Update,
                (
                    handle_debug_hotkeys.run_if(in_state(GameState::Fight)),
                    update_status_message,
                    sync_hitbox_overlays,
                    update_debug_info_overlay,
                )
                    .chain(),
            );
    }
}
