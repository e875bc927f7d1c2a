//! Fighter domain: configuration injected into every fighter at spawn.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::AttackTuning;
use crate::movement::{ArenaBounds, MovementTuning};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FighterTuning {
    pub movement: MovementTuning,
    pub arena: ArenaBounds,
    pub attacks: AttackTuning,
    pub max_health: u32,
    /// Damage-receiving body, anchored at the feet.
    pub body_width: f32,
    pub body_height: f32,
    /// Edge length of the square drawn when no frame is available.
    pub placeholder_size: f32,
    /// Fixed ticks each animation frame stays on screen.
    pub ticks_per_frame: u32,
}

impl Default for FighterTuning {
    fn default() -> Self {
        Self {
            movement: MovementTuning::default(),
            arena: ArenaBounds::default(),
            attacks: AttackTuning::default(),
            max_health: 45,
            body_width: 80.0,
            body_height: 140.0,
            placeholder_size: 150.0,
            ticks_per_frame: 6,
        }
    }
}

impl FighterTuning {
    pub fn body_size(&self) -> Vec2 {
        Vec2::new(self.body_width, self.body_height)
    }
}
