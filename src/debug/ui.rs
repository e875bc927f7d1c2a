//! Debug domain: overlay entities.

use bevy::prelude::*;

use crate::core::BoutEntity;
use crate::debug::state::OverlayShape;
use crate::fighter::FighterSide;
use crate::sprites::SpriteLayer;

/// Marker for debug info overlay (tick, state, cooldowns)
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

/// Translucent rectangle tracking one fighter rectangle
#[derive(Component, Debug)]
pub struct HitboxOverlay {
    pub side: FighterSide,
    pub shape: OverlayShape,
}

pub(crate) fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

pub(crate) fn spawn_hitbox_overlays(commands: &mut Commands) {
    for side in [FighterSide::Player, FighterSide::Opponent] {
        for shape in [OverlayShape::Body, OverlayShape::Attack] {
            let color = match shape {
                OverlayShape::Body => Color::srgba(0.2, 0.9, 0.3, 0.3),
                OverlayShape::Attack => Color::srgba(1.0, 0.1, 0.1, 0.45),
            };
            commands.spawn((
                BoutEntity,
                HitboxOverlay { side, shape },
                Sprite::from_color(color, Vec2::ONE),
                Transform::from_xyz(0.0, 0.0, SpriteLayer::Hitbox.z_index()),
                Visibility::Hidden,
            ));
        }
    }
}
