//! Movement domain: keyboard sampling for walking, jumping and quitting.

use bevy::prelude::*;

use crate::bout::{BoutInput, PendingInput};

/// Walk keys and their direction, in the order same-frame presses are queued.
const WALK_KEYS: [(KeyCode, i32); 2] = [(KeyCode::KeyA, -1), (KeyCode::KeyS, 1)];

/// Every movement input this frame's key changes produce, in dispatch order.
pub(crate) fn move_inputs(keyboard: &ButtonInput<KeyCode>) -> Vec<BoutInput> {
    let mut inputs = Vec::new();

    if keyboard.just_pressed(KeyCode::KeyQ) {
        inputs.push(BoutInput::Quit);
    }

    for (key, direction) in WALK_KEYS {
        if keyboard.just_pressed(key) {
            inputs.push(BoutInput::Walk(direction));
        }
    }

    if keyboard.just_pressed(KeyCode::Space) {
        inputs.push(BoutInput::Jump);
    }

    // Releasing a direction only stops the fighter if it is still moving that way
    for (key, direction) in WALK_KEYS {
        if keyboard.just_released(key) {
            inputs.push(BoutInput::Release(direction));
        }
    }

    inputs
}

pub(crate) fn read_move_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut pending: ResMut<PendingInput>,
) {
    for input in move_inputs(&keyboard) {
        pending.push(input);
    }
}
