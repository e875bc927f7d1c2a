//! Core domain: screen flow between boot, fight and winner.

use bevy::app::AppExit;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::bout::Bout;
use crate::core::events::{BoutResolved, NavigationSignal};
use crate::core::resources::LastOutcome;
use crate::core::state::GameState;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Content is loaded synchronously at startup, so the first frame can fight.
pub(crate) fn finish_boot(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Fight);
}

/// Hand the winner's name to the winner screen.
pub(crate) fn handle_bout_resolved(
    mut events: MessageReader<BoutResolved>,
    mut last_outcome: ResMut<LastOutcome>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    for event in events.read() {
        info!("{} wins the bout ({:?})", event.winner_name, event.winner_side);
        last_outcome.record(event.winner_name.clone(), event.winner_side);
        game_state.set(GameState::Winner);
    }
}

pub(crate) fn handle_navigation(
    mut signals: MessageReader<NavigationSignal>,
    bout: Option<ResMut<Bout>>,
    mut last_outcome: ResMut<LastOutcome>,
    mut game_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
) {
    let Some(signal) = signals.read().last().copied() else {
        return;
    };

    if let Some(mut bout) = bout {
        bout.exit();
    }

    match signal {
        NavigationSignal::LevelSelect => {
            info!("Returning to level select, starting a new bout");
            last_outcome.clear();
            game_state.set(GameState::Fight);
        }
        NavigationSignal::Quit => {
            info!("Quitting");
            exit.write(AppExit::Success);
        }
    }
}
