//! Data definitions for all RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. The ContentRegistry provides lookup by id.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bout::BoutTuning;
use crate::combat::AiTuning;
use crate::fighter::FighterTuning;

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Fighters (fighters.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FighterDef {
    pub id: String,
    /// Display name shown on the HUD and winner screen.
    pub name: String,
    /// Key into the sprite manifest.
    pub sheet: String,
    /// Id of the character fought when this one is picked.
    pub rival: Option<String>,
}

// ============================================================================
// Gameplay defaults (gameplay_defaults.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameplayDefaults {
    pub schema_version: u32,
    /// Character the human plays; the opponent is its rival.
    pub player_character: String,
    /// Fixed seed for the opponent's random jumps.
    pub seed: Option<u64>,
    pub fighter: FighterTuning,
    pub ai: AiTuning,
    pub bout: BoutTuning,
}

impl Default for GameplayDefaults {
    fn default() -> Self {
        Self {
            schema_version: 1,
            player_character: "boat_man".to_string(),
            seed: None,
            fighter: FighterTuning::default(),
            ai: AiTuning::default(),
            bout: BoutTuning::default(),
        }
    }
}
