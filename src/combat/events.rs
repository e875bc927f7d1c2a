//! Combat domain: combat-related messages.

use bevy::ecs::message::Message;

use crate::combat::attacks::AttackKind;
use crate::fighter::FighterSide;

/// A swing connected and the defender lost health.
#[derive(Debug, Clone, PartialEq)]
pub struct HitLanded {
    pub attacker: FighterSide,
    pub defender: FighterSide,
    pub kind: AttackKind,
    pub damage: u32,
    /// Defender health after the hit.
    pub remaining: u32,
}

impl Message for HitLanded {}
