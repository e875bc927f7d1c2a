//! Sprite manifest loading and asset management.
//!
//! The manifest JSON maps a sheet key to an image path and the frame
//! rectangles of every animation clip cut from that sheet. Sheets whose image
//! is missing are left out of the texture table so fighters using them fall
//! back to placeholders instead of drawing an unloaded handle.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::{AnimationKey, AnimationSet};

/// Resource containing all loaded sprite sheet definitions.
#[derive(Resource, Default)]
pub struct SpriteManifest {
    /// Version of the manifest schema.
    pub version: u32,
    /// Sheet definitions keyed by sheet key.
    pub sheets: HashMap<String, SheetDef>,
    /// Texture handles for sheets whose image exists on disk.
    pub textures: HashMap<String, Handle<Image>>,
}

/// Definition of one sprite sheet.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetDef {
    /// Path to the sheet image, relative to assets/.
    pub path: String,
    /// Multiplier from sheet pixels to arena pixels.
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Frame rectangles per clip name ("idle", "walking", "basic", ...).
    #[serde(default)]
    pub clips: HashMap<String, Vec<FrameDef>>,
}

fn default_scale() -> f32 {
    1.0
}

/// A frame rectangle in sheet pixels.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FrameDef {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl From<FrameDef> for Rect {
    fn from(f: FrameDef) -> Self {
        Rect::new(f.x, f.y, f.x + f.w, f.y + f.h)
    }
}

/// Raw manifest JSON structure.
#[derive(Debug, Deserialize)]
pub struct ManifestJson {
    pub version: u32,
    pub sheets: HashMap<String, SheetDef>,
}

#[derive(Debug)]
pub struct ManifestError {
    pub message: String,
}

impl std::fmt::Display for ManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid sprite manifest: {}", self.message)
    }
}

pub fn parse_manifest(contents: &str) -> Result<ManifestJson, ManifestError> {
    serde_json::from_str(contents).map_err(|e| ManifestError {
        message: e.to_string(),
    })
}

impl SheetDef {
    /// Build the animation set for this sheet. Unknown clip names are skipped.
    pub fn to_animation_set(&self, key: &str) -> AnimationSet {
        let mut set = AnimationSet::new(key, self.scale);
        for (clip_name, frames) in &self.clips {
            let Some(anim_key) = AnimationKey::from_name(clip_name) else {
                warn!("Sheet '{}' has unknown clip '{}'", key, clip_name);
                continue;
            };
            set = set.with_clip(anim_key, frames.iter().copied().map(Rect::from).collect());
        }
        set
    }
}

impl SpriteManifest {
    /// Load the manifest from a JSON file under `assets_root`.
    pub fn load_from_file(&mut self, assets_root: &Path, path: &str, asset_server: &AssetServer) {
        let manifest_path = assets_root.join(path);

        if !manifest_path.exists() {
            warn!(
                "Sprite manifest not found at {:?}, fighters will use placeholders",
                manifest_path
            );
            return;
        }

        let contents = match fs::read_to_string(&manifest_path) {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to read sprite manifest: {}", e);
                return;
            }
        };

        let manifest_json = match parse_manifest(&contents) {
            Ok(m) => m,
            Err(e) => {
                error!("{}", e);
                return;
            }
        };

        self.version = manifest_json.version;
        self.sheets = manifest_json.sheets;

        for (key, def) in &self.sheets {
            if !assets_root.join(&def.path).exists() {
                warn!("Sheet image '{}' for '{}' is missing", def.path, key);
                continue;
            }
            let handle = asset_server.load(def.path.clone());
            self.textures.insert(key.clone(), handle);
        }

        info!(
            "Loaded sprite manifest v{} with {} sheets ({} textures)",
            self.version,
            self.sheets.len(),
            self.textures.len()
        );
    }

    /// Animation set for a sheet key, or a placeholder set when the sheet or
    /// its image is unavailable.
    pub fn animation_set(&self, key: &str) -> AnimationSet {
        match (self.sheets.get(key), self.textures.contains_key(key)) {
            (Some(def), true) => def.to_animation_set(key),
            _ => {
                warn!("Sprite sheet '{}' unavailable, using placeholder", key);
                AnimationSet::placeholder()
            }
        }
    }

    /// Get a texture handle by sheet key.
    pub fn get_texture(&self, key: &str) -> Option<Handle<Image>> {
        self.textures.get(key).cloned()
    }
}
