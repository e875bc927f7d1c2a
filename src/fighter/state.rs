//! Fighter domain: control source, spawn parameters and the tagged state.

use bevy::prelude::*;

use crate::combat::AttackKind;
use crate::movement::Facing;
use crate::sprites::AnimationKey;

/// Who drives a fighter's discrete actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    Ai,
}

/// Which corner of the bout a fighter stands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FighterSide {
    Player,
    Opponent,
}

impl FighterSide {
    pub fn other(self) -> Self {
        match self {
            FighterSide::Player => FighterSide::Opponent,
            FighterSide::Opponent => FighterSide::Player,
        }
    }
}

/// Everything needed to place a new fighter in the arena.
#[derive(Debug, Clone)]
pub struct FighterSpawn {
    pub name: String,
    pub character_id: String,
    /// Feet position in arena pixels.
    pub position: Vec2,
    pub facing: Facing,
    pub controller: Controller,
}

/// Discrete behaviour state. Position and velocity live beside it in
/// [`crate::movement::Kinematics`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FighterState {
    #[default]
    Idle,
    Walking,
    Jumping,
    Attacking {
        kind: AttackKind,
        /// Ticks until the attack clears. Always > 0 while in this state.
        ticks_remaining: u32,
        /// Set once this swing has landed, so it cannot land again.
        has_hit: bool,
        /// Damage-dealing region in front of the fighter, if the kind has one.
        hitbox: Option<Rect>,
    },
}

impl FighterState {
    pub fn animation_key(&self) -> AnimationKey {
        match self {
            FighterState::Idle => AnimationKey::Idle,
            FighterState::Walking => AnimationKey::Walking,
            FighterState::Jumping => AnimationKey::Jumping,
            FighterState::Attacking { kind, .. } => AnimationKey::Attack(*kind),
        }
    }

    pub fn is_attacking(&self) -> bool {
        matches!(self, FighterState::Attacking { .. })
    }
}
