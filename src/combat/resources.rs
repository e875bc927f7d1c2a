//! Combat domain: attack and opponent AI tuning.

use serde::{Deserialize, Serialize};

use crate::combat::attacks::{AttackKind, HitboxShape};

/// Per-attack-kind configuration
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct AttackConfig {
    pub damage: u32,
    /// Ticks the fighter stays in the attack (animation plus recovery).
    pub cooldown_ticks: u32,
    /// Forward hitbox, if this attack spawns one.
    pub hitbox: Option<HitboxShape>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AttackTuning {
    pub basic: AttackConfig,
    pub mid: AttackConfig,
    #[serde(rename = "super")]
    pub super_attack: AttackConfig,
    /// Landed hits needed before mid becomes available.
    pub mid_threshold: u32,
    /// Landed hits needed before super becomes available.
    pub super_threshold: u32,
    /// How far the strike region extends past the body's leading edge.
    pub reach: f32,
}

impl Default for AttackTuning {
    fn default() -> Self {
        Self {
            basic: AttackConfig {
                damage: 3,
                cooldown_ticks: 60,
                hitbox: Some(HitboxShape {
                    offset: 5.0,
                    width: 45.0,
                    height: 35.0,
                }),
            },
            mid: AttackConfig {
                damage: 8,
                cooldown_ticks: 75,
                hitbox: Some(HitboxShape {
                    offset: 5.0,
                    width: 60.0,
                    height: 45.0,
                }),
            },
            super_attack: AttackConfig {
                damage: 15,
                cooldown_ticks: 90,
                hitbox: Some(HitboxShape {
                    offset: 5.0,
                    width: 80.0,
                    height: 60.0,
                }),
            },
            mid_threshold: 5,
            super_threshold: 10,
            reach: 50.0,
        }
    }
}

impl AttackTuning {
    pub fn config(&self, kind: AttackKind) -> &AttackConfig {
        match kind {
            AttackKind::Basic => &self.basic,
            AttackKind::Mid => &self.mid,
            AttackKind::Super => &self.super_attack,
        }
    }

    pub fn damage(&self, kind: AttackKind) -> u32 {
        self.config(kind).damage
    }

    pub fn threshold(&self, kind: AttackKind) -> u32 {
        match kind {
            AttackKind::Basic => 0,
            AttackKind::Mid => self.mid_threshold,
            AttackKind::Super => self.super_threshold,
        }
    }
}

/// Range bands and randomness for the opponent controller.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AiTuning {
    /// Max centre distance at which a charged super is thrown.
    pub super_range: f32,
    /// Max centre distance at which a charged mid is thrown.
    pub mid_range: f32,
    /// Max centre distance for a basic attack.
    pub basic_range: f32,
    /// Max gap between the leading edge and the opponent's near edge for a basic.
    pub edge_slack: f32,
    /// Chance per grounded tick of a random jump.
    pub jump_chance: f32,
}

impl Default for AiTuning {
    fn default() -> Self {
        Self {
            super_range: 220.0,
            mid_range: 160.0,
            basic_range: 100.0,
            edge_slack: 20.0,
            jump_chance: 0.005,
        }
    }
}

impl AiTuning {
    /// Beyond this centre distance the controller closes in.
    pub fn approach_threshold(&self) -> f32 {
        self.basic_range * 0.5
    }
}
