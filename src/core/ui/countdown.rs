//! Core domain: pre-fight countdown and controls overlay.

use bevy::prelude::*;

use crate::bout::Bout;
use crate::core::presentation::BoutEntity;

#[derive(Component, Debug)]
pub struct CountdownOverlay;

#[derive(Component, Debug)]
pub struct CountdownNumber;

const CONTROLS: [&str; 5] = [
    "A / S - move left / right",
    "Space - jump",
    "J or left click - basic attack",
    "W - mid attack (5 hits)   E - super attack (10 hits)",
    "Q - back to level select",
];

pub(crate) fn spawn_countdown_overlay(mut commands: Commands) {
    let gold = Color::srgb(1.0, 0.84, 0.0);
    let text_color = Color::srgb(0.9, 0.9, 0.9);

    commands
        .spawn((
            BoutEntity,
            CountdownOverlay,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                CountdownNumber,
                Text::new(""),
                TextFont {
                    font_size: 96.0,
                    ..default()
                },
                TextColor(gold),
                Node {
                    margin: UiRect::bottom(Val::Px(30.0)),
                    ..default()
                },
            ));

            for line in CONTROLS {
                parent.spawn((
                    Text::new(line),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(text_color),
                    Node {
                        margin: UiRect::bottom(Val::Px(6.0)),
                        ..default()
                    },
                ));
            }
        });
}

/// Shows the seconds left and drops the overlay once the fight starts.
pub(crate) fn update_countdown_overlay(
    mut commands: Commands,
    bout: Option<Res<Bout>>,
    overlay: Query<Entity, With<CountdownOverlay>>,
    mut number: Query<&mut Text, With<CountdownNumber>>,
) {
    let Some(bout) = bout else {
        return;
    };

    if bout.is_counting_down() {
        if let Ok(mut text) = number.single_mut() {
            **text = bout.countdown_seconds().to_string();
        }
        return;
    }

    for entity in overlay.iter() {
        commands.entity(entity).despawn();
    }
}
