//! Movement domain: locomotion tuning and arena bounds.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Horizontal pixels per tick while walking.
    pub walk_speed: f32,
    /// Vertical velocity applied on jump. Negative is upward.
    pub jump_velocity: f32,
    pub gravity: f32,
    pub max_fall_speed: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            jump_velocity: -20.0,
            gravity: 0.8,
            max_fall_speed: 10.0,
        }
    }
}

/// Horizontal extent and floor of the fighting arena.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ArenaBounds {
    pub width: f32,
    pub height: f32,
    /// Distance from the bottom of the arena to the floor line.
    pub ground_height: f32,
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 700.0,
            ground_height: 50.0,
        }
    }
}

impl ArenaBounds {
    pub fn floor_line(&self) -> f32 {
        self.height - self.ground_height
    }
}
