//! Bout domain: human input queued between fixed ticks.

use bevy::prelude::*;

use crate::combat::AttackKind;

/// One discrete input from the human player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoutInput {
    /// Key down for a direction (-1 left, +1 right).
    Walk(i32),
    /// Key up for a direction. Stops only if still moving that way.
    Release(i32),
    Jump,
    Attack(AttackKind),
    Quit,
}

/// Inputs sampled in `Update`, drained by the next fixed tick in arrival order.
#[derive(Resource, Debug, Default)]
pub struct PendingInput {
    queue: Vec<BoutInput>,
}

impl PendingInput {
    pub fn push(&mut self, input: BoutInput) {
        self.queue.push(input);
    }

    pub fn drain(&mut self) -> Vec<BoutInput> {
        std::mem::take(&mut self.queue)
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
