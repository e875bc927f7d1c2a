mod bout;
mod combat;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod fighter;
mod movement;
mod sprites;
mod ui;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Zoo-Jacked".to_string(),
            resolution: (1000, 700).into(),
            resizable: false,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        sprites::SpritesPlugin,
        movement::MovementPlugin,
        combat::CombatPlugin,
        bout::BoutPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
