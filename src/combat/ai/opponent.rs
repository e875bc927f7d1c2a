//! Combat domain: distance-band controller for the computer opponent.

use bevy::prelude::*;

use crate::combat::attacks::AttackKind;
use crate::combat::resources::AiTuning;
use crate::fighter::Fighter;

/// What the controller needs to know about the fighter it is facing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpponentView {
    pub body: Rect,
    pub attacking: bool,
}

impl OpponentView {
    pub fn of(fighter: &Fighter) -> Self {
        Self {
            body: fighter.body(),
            attacking: fighter.is_attacking(),
        }
    }
}

/// Horizontal plan for this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiIntent {
    /// Stop and throw the given attack.
    Strike(AttackKind),
    /// Walk toward the opponent (-1 or +1).
    Approach(i32),
    /// Close enough; stand still.
    Hold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiDecision {
    pub intent: AiIntent,
    /// Random hop, rolled independently of the intent.
    pub jump: bool,
}

/// Pick this tick's action for `me`.
///
/// Returns `None` for human-controlled or attacking fighters. `jump_roll` is a
/// uniform sample in `[0, 1)` supplied by the caller.
pub fn decide(
    me: &Fighter,
    opponent: &OpponentView,
    tuning: &AiTuning,
    jump_roll: f32,
) -> Option<AiDecision> {
    if me.is_human() || me.is_attacking() {
        return None;
    }

    let body = me.body();
    let dx = opponent.body.center().x - body.center().x;
    let distance = dx.abs();

    // Gap between my leading edge and the near edge of the opponent
    let edge_gap = if dx >= 0.0 {
        opponent.body.min.x - body.max.x
    } else {
        body.min.x - opponent.body.max.x
    };

    let intent = if distance <= tuning.super_range && me.is_unlocked(AttackKind::Super) {
        AiIntent::Strike(AttackKind::Super)
    } else if distance <= tuning.mid_range && me.is_unlocked(AttackKind::Mid) {
        AiIntent::Strike(AttackKind::Mid)
    } else if distance <= tuning.basic_range
        && edge_gap <= tuning.edge_slack
        && !opponent.attacking
    {
        AiIntent::Strike(AttackKind::Basic)
    } else if distance > tuning.approach_threshold() {
        AiIntent::Approach(if dx >= 0.0 { 1 } else { -1 })
    } else {
        AiIntent::Hold
    };

    Some(AiDecision {
        intent,
        jump: me.is_grounded() && jump_roll < tuning.jump_chance,
    })
}

/// Carry out a decision through the fighter's own mutators. Returns the
/// damage of a started attack.
pub fn apply(me: &mut Fighter, decision: AiDecision) -> Option<u32> {
    let damage = match decision.intent {
        AiIntent::Strike(kind) => {
            me.stop();
            me.attack(kind)
        }
        AiIntent::Approach(direction) => {
            me.walk(direction);
            None
        }
        AiIntent::Hold => {
            me.stop();
            None
        }
    };
    if decision.jump {
        me.jump();
    }
    damage
}
