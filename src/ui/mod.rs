//! UI domain: in-bout HUD elements.

mod hud_fighter;


pub use hud_fighter::{FighterHealthBarFill, FighterHealthBarUI, FighterHealthLabel};

use bevy::prelude::*;

use crate::bout::start_bout;
use crate::core::GameState;
use crate::ui::hud_fighter::{spawn_fighter_healthbars, update_fighter_healthbars};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(GameState::Fight),
            spawn_fighter_healthbars.after(start_bout),
        )
        .add_systems(
            Update,
            update_fighter_healthbars.run_if(in_state(GameState::Fight)),
        );
    }
}
