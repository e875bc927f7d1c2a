//! Debug domain: hotkeys and overlay updates.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::bout::Bout;
use crate::core::{NavigationSignal, rect_to_world};
use crate::debug::state::{DebugState, OverlayShape};
use crate::debug::ui::{
    DebugInfoOverlay, HitboxOverlay, spawn_debug_info_overlay, spawn_hitbox_overlays,
};
use crate::fighter::Fighter;

/// F1 hitboxes, F2 info overlay, Ctrl+R restart the bout
pub(crate) fn handle_debug_hotkeys(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    overlays: Query<Entity, With<HitboxOverlay>>,
    mut navigation: MessageWriter<NavigationSignal>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_hitboxes = !debug_state.show_hitboxes;
        if debug_state.show_hitboxes {
            spawn_hitbox_overlays(&mut commands);
        } else {
            for entity in &overlays {
                commands.entity(entity).despawn();
            }
        }
        let msg = if debug_state.show_hitboxes {
            "Hitboxes ON"
        } else {
            "Hitboxes OFF"
        };
        debug_state.set_message(msg, 2.0);
        info!("[DEBUG] {}", msg);
    }

    if keyboard.just_pressed(KeyCode::F2) {
        debug_state.show_info = !debug_state.show_info;
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if ctrl && keyboard.just_pressed(KeyCode::KeyR) {
        info!("[DEBUG] Restarting bout");
        navigation.write(NavigationSignal::LevelSelect);
    }
}

/// Hitbox overlays are bout entities; bring them back for a new bout.
pub(crate) fn respawn_hitbox_overlays(mut commands: Commands, debug_state: Res<DebugState>) {
    if debug_state.show_hitboxes {
        spawn_hitbox_overlays(&mut commands);
    }
}

pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    if let Some((_, ref mut duration)) = debug_state.status_message {
        *duration -= time.delta_secs();
        if *duration <= 0.0 {
            debug_state.status_message = None;
        }
    }
}

pub(crate) fn sync_hitbox_overlays(
    bout: Option<Res<Bout>>,
    mut overlays: Query<(&HitboxOverlay, &mut Transform, &mut Sprite, &mut Visibility)>,
) {
    let Some(bout) = bout else {
        return;
    };

    for (overlay, mut transform, mut sprite, mut visibility) in &mut overlays {
        let fighter = bout.fighter(overlay.side);
        let rect = match overlay.shape {
            OverlayShape::Body => Some(fighter.body()),
            OverlayShape::Attack => fighter.attack_hitbox(),
        };
        let Some(rect) = rect else {
            *visibility = Visibility::Hidden;
            continue;
        };

        let center = rect_to_world(rect, &fighter.tuning().arena);
        transform.translation.x = center.x;
        transform.translation.y = center.y;
        sprite.custom_size = Some(rect.size());
        *visibility = Visibility::Visible;
    }
}

pub(crate) fn describe_fighter(fighter: &Fighter) -> String {
    let position = fighter.position();
    let velocity = fighter.velocity();
    format!(
        "{} [{}, {:?}]: {:?} #{}\n  HP {}/{}  cd {}{}  hits {}\n  pos ({:.0}, {:.0})  vel ({:.1}, {:.1})",
        fighter.name(),
        fighter.character_id(),
        fighter.controller(),
        fighter.animation_key(),
        fighter.animation_frame(),
        fighter.health().current,
        fighter.health().max,
        fighter.cooldown(),
        if fighter.has_dealt_hit() { " (landed)" } else { "" },
        fighter.hit_count(),
        position.x,
        position.y,
        velocity.x,
        velocity.y,
    )
}

pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    bout: Option<Res<Bout>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    let Ok(mut text) = overlay_query.single_mut() else {
        return;
    };
    let mut lines = match bout {
        Some(bout) => format!(
            "Tick: {}\nPhase: {:?} (countdown {})\n{}\n{}",
            bout.tick(),
            bout.phase(),
            bout.countdown_ticks(),
            describe_fighter(bout.player()),
            describe_fighter(bout.opponent()),
        ),
        None => "No bout".to_string(),
    };
    if let Some((message, _)) = &debug_state.status_message {
        lines.push('\n');
        lines.push_str(message);
    }
    **text = lines;
}
