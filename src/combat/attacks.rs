//! Combat domain: attack kinds and hitbox placement.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::Facing;

/// The three attack tiers. Shared by human input and the opponent AI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum AttackKind {
    Basic,
    Mid,
    Super,
}

impl AttackKind {
    pub fn name(self) -> &'static str {
        match self {
            AttackKind::Basic => "basic",
            AttackKind::Mid => "mid",
            AttackKind::Super => "super",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "basic" => Some(AttackKind::Basic),
            "mid" => Some(AttackKind::Mid),
            "super" => Some(AttackKind::Super),
            _ => None,
        }
    }

    /// Mid and super spend the charge earned by landed basics.
    pub fn consumes_charge(self) -> bool {
        !matches!(self, AttackKind::Basic)
    }
}

/// Size and gap of a forward attack hitbox.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct HitboxShape {
    /// Gap between the body's leading edge and the hitbox.
    pub offset: f32,
    pub width: f32,
    pub height: f32,
}

impl HitboxShape {
    /// Place the hitbox just beyond the leading edge of `body`, vertically
    /// centred on it.
    pub fn place(&self, body: Rect, facing: Facing) -> Rect {
        let min_x = match facing {
            Facing::Right => body.max.x + self.offset,
            Facing::Left => body.min.x - self.offset - self.width,
        };
        let min_y = body.center().y - self.height * 0.5;
        Rect::new(min_x, min_y, min_x + self.width, min_y + self.height)
    }
}

/// Body rectangle stretched `reach` pixels toward `facing`.
pub fn strike_region(body: Rect, facing: Facing, reach: f32) -> Rect {
    match facing {
        Facing::Right => Rect::new(body.min.x, body.min.y, body.max.x + reach, body.max.y),
        Facing::Left => Rect::new(body.min.x - reach, body.min.y, body.max.x, body.max.y),
    }
}

/// Strict overlap: rectangles that only share an edge do not collide.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    !a.intersect(b).is_empty()
}
