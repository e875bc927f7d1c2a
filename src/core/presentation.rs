//! Core domain: arena sprites mirroring the running bout.
//!
//! The bout works in arena pixels (origin top-left, y down). Everything here
//! converts to Bevy world space around a centred 2D camera.

use bevy::prelude::*;

use crate::bout::Bout;
use crate::fighter::{Fighter, FighterSide};
use crate::movement::ArenaBounds;
use crate::sprites::{SpriteLayer, SpriteManifest};

/// Marker for everything spawned for one bout; despawned when it ends.
#[derive(Component, Debug)]
pub struct BoutEntity;

/// Sprite drawing one fighter.
#[derive(Component, Debug)]
pub struct FighterSprite {
    pub side: FighterSide,
    /// Drawn as a flat coloured square.
    pub placeholder: bool,
}

/// Side colour: blue for the human, red for the computer.
pub fn side_color(side: FighterSide) -> Color {
    match side {
        FighterSide::Player => Color::srgb(0.2, 0.4, 0.9),
        FighterSide::Opponent => Color::srgb(0.85, 0.2, 0.2),
    }
}

/// Arena pixel coordinates to world coordinates.
pub fn arena_to_world(point: Vec2, arena: &ArenaBounds) -> Vec2 {
    Vec2::new(point.x - arena.width * 0.5, arena.height * 0.5 - point.y)
}

/// World-space centre of an arena rectangle.
pub fn rect_to_world(rect: Rect, arena: &ArenaBounds) -> Vec2 {
    arena_to_world(rect.center(), arena)
}

pub(crate) fn spawn_arena(
    mut commands: Commands,
    bout: Option<Res<Bout>>,
    manifest: Res<SpriteManifest>,
) {
    let Some(bout) = bout else {
        warn!("No bout to draw");
        return;
    };
    let arena = bout.player().tuning().arena;

    // Sky and floor
    commands.spawn((
        BoutEntity,
        Sprite::from_color(
            Color::srgb(0.55, 0.75, 0.9),
            Vec2::new(arena.width, arena.height),
        ),
        Transform::from_xyz(0.0, 0.0, SpriteLayer::Backdrop.z_index()),
    ));
    let floor = Rect::new(0.0, arena.floor_line(), arena.width, arena.height);
    let floor_center = rect_to_world(floor, &arena);
    commands.spawn((
        BoutEntity,
        Sprite::from_color(Color::srgb(0.35, 0.28, 0.2), floor.size()),
        Transform::from_xyz(
            floor_center.x,
            floor_center.y,
            SpriteLayer::Backdrop.z_index() + 0.001,
        ),
    ));

    for side in [FighterSide::Player, FighterSide::Opponent] {
        spawn_fighter_sprite(&mut commands, bout.fighter(side), side, &manifest);
    }
}

fn spawn_fighter_sprite(
    commands: &mut Commands,
    fighter: &Fighter,
    side: FighterSide,
    manifest: &SpriteManifest,
) {
    let texture = fighter
        .animations()
        .sheet
        .as_deref()
        .and_then(|sheet| manifest.get_texture(sheet));
    let rect = fighter.render_rect();
    let center = rect_to_world(rect, &fighter.tuning().arena);
    let transform = Transform::from_xyz(center.x, center.y, SpriteLayer::Fighter.z_index());

    match texture {
        Some(image) if !fighter.animations().is_placeholder() => {
            let frame = fighter.display_frame();
            commands.spawn((
                BoutEntity,
                FighterSprite {
                    side,
                    placeholder: false,
                },
                Sprite {
                    image,
                    rect: frame.region,
                    flip_x: frame.flip_x,
                    custom_size: Some(rect.size()),
                    ..default()
                },
                transform,
            ));
        }
        _ => {
            warn!("Drawing '{}' as a placeholder", fighter.name());
            commands
                .spawn((
                    BoutEntity,
                    FighterSprite {
                        side,
                        placeholder: true,
                    },
                    Sprite::from_color(side_color(side), rect.size()),
                    transform,
                ))
                .with_children(|parent| {
                    parent.spawn((
                        Text2d::new("NO IMG"),
                        TextFont {
                            font_size: 24.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                        Transform::from_xyz(
                            0.0,
                            0.0,
                            SpriteLayer::Label.z_index() - SpriteLayer::Fighter.z_index(),
                        ),
                    ));
                });
        }
    }
}

pub(crate) fn sync_fighter_sprites(
    bout: Option<Res<Bout>>,
    mut sprites: Query<(&FighterSprite, &mut Transform, &mut Sprite)>,
) {
    let Some(bout) = bout else {
        return;
    };

    for (marker, mut transform, mut sprite) in &mut sprites {
        let fighter = bout.fighter(marker.side);
        let rect = fighter.render_rect();
        let center = rect_to_world(rect, &fighter.tuning().arena);
        transform.translation.x = center.x;
        transform.translation.y = center.y;
        sprite.custom_size = Some(rect.size());

        if !marker.placeholder {
            let frame = fighter.display_frame();
            sprite.rect = frame.region;
            sprite.flip_x = frame.flip_x;
        }
    }
}

pub(crate) fn cleanup_arena(mut commands: Commands, query: Query<Entity, With<BoutEntity>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
