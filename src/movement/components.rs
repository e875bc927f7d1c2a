//! Movement domain: facing and kinematic state for a fighter.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn is_left(self) -> bool {
        self == Facing::Left
    }
}

/// Continuous physics state of a fighter in arena pixels.
///
/// `position` is the mid-bottom point of the body (the feet). The arena uses
/// screen orientation: y grows downward, so an upward launch is a negative `vy`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub position: Vec2,
    pub velocity: Vec2,
    pub facing: Facing,
    pub grounded: bool,
}

impl Kinematics {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            facing: Facing::Right,
            grounded: false,
        }
    }

    /// Axis-aligned rectangle of the given size anchored at the feet.
    pub fn rect_of_size(&self, size: Vec2) -> Rect {
        let min = Vec2::new(self.position.x - size.x * 0.5, self.position.y - size.y);
        Rect::from_corners(min, min + size)
    }
}
