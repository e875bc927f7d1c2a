//! Sprites module for fighter animation data.
//!
//! This module handles:
//! - Loading the sprite manifest from JSON
//! - Animation sets per character and frame playback
//! - Render ordering for arena sprites

pub mod animation;
pub mod layers;
pub mod manifest;

use bevy::prelude::*;
use std::path::Path;

pub use animation::*;
pub use animation::AnimationPlayer;
pub use layers::*;
pub use manifest::*;

pub const ASSETS_ROOT: &str = "assets";
pub const MANIFEST_PATH: &str = "sprites/manifest.json";

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpriteManifest>()
            .add_systems(Startup, load_sprite_manifest);
    }
}

/// System to load the sprite manifest at startup.
fn load_sprite_manifest(mut manifest: ResMut<SpriteManifest>, asset_server: Res<AssetServer>) {
    manifest.load_from_file(Path::new(ASSETS_ROOT), MANIFEST_PATH, &asset_server);
}
