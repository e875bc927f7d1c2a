//! Core domain: winner screen UI and input handling.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::presentation::side_color;
use crate::core::{LastOutcome, NavigationSignal};

/// Marker for winner screen UI root
#[derive(Component, Debug)]
pub struct WinnerScreenUI;

pub(crate) fn spawn_winner_screen(mut commands: Commands, last_outcome: Res<LastOutcome>) {
    let bg_color = Color::srgba(0.02, 0.05, 0.1, 0.98);
    let muted_text = Color::srgb(0.6, 0.6, 0.7);

    let (title, title_color) = match &last_outcome.winner {
        Some((name, side)) => (format!("{} Wins!", name), side_color(*side)),
        None => ("Bout Over".to_string(), Color::srgb(0.9, 0.9, 0.9)),
    };

    commands
        .spawn((
            WinnerScreenUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(bg_color),
            ZIndex(200),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(title),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("Press any key to continue..."),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(muted_text),
            ));
        });
}

pub(crate) fn cleanup_winner_screen(
    mut commands: Commands,
    query: Query<Entity, With<WinnerScreenUI>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Escape quits; any other key goes back to the level select.
pub(crate) fn handle_winner_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut navigation: MessageWriter<NavigationSignal>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        navigation.write(NavigationSignal::Quit);
    } else if keyboard.get_just_pressed().next().is_some() {
        navigation.write(NavigationSignal::LevelSelect);
    }
}
