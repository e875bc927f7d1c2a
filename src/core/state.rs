//! Core domain: top-level screens of the game.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Content and sprites are loading.
    #[default]
    Boot,
    /// A bout is running (countdown included).
    Fight,
    /// Winner announcement after a knockout.
    Winner,
}
