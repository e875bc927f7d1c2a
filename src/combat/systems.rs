//! Combat domain: attack input sampling and hit reporting.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::bout::{BoutInput, PendingInput};
use crate::combat::attacks::AttackKind;
use crate::combat::events::HitLanded;

pub(crate) fn read_combat_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut pending: ResMut<PendingInput>,
) {
    if keyboard.just_pressed(KeyCode::KeyJ) || mouse.just_pressed(MouseButton::Left) {
        pending.push(BoutInput::Attack(AttackKind::Basic));
    }
    // Locked tiers are filtered when the bout dispatches the input
    if keyboard.just_pressed(KeyCode::KeyW) {
        pending.push(BoutInput::Attack(AttackKind::Mid));
    }
    if keyboard.just_pressed(KeyCode::KeyE) {
        pending.push(BoutInput::Attack(AttackKind::Super));
    }
}

pub(crate) fn log_hits(mut hits: MessageReader<HitLanded>) {
    for hit in hits.read() {
        debug!(
            "{:?} landed {} on {:?} for {} ({} HP left)",
            hit.attacker,
            hit.kind.name(),
            hit.defender,
            hit.damage,
            hit.remaining
        );
    }
}
