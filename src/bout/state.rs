//! Bout domain: the match loop over two fighters.
//!
//! [`Bout`] is plain data stepped once per fixed tick. It gates gameplay
//! behind the countdown, feeds human input and AI decisions into the fighters,
//! runs the hit pass and settles the outcome. Rendering reads it afterwards.

use bevy::prelude::*;
use rand::Rng;

use crate::bout::input::BoutInput;
use crate::bout::resources::BoutTuning;
use crate::combat::ai::{self, OpponentView};
use crate::combat::hits::resolve_hits;
use crate::combat::{AiTuning, HitLanded};
use crate::fighter::{Fighter, FighterSide};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoutOutcome {
    PlayerWon,
    OpponentWon,
    /// Quit before anyone was knocked out.
    Aborted,
}

impl BoutOutcome {
    pub fn winner(self) -> Option<FighterSide> {
        match self {
            BoutOutcome::PlayerWon => Some(FighterSide::Player),
            BoutOutcome::OpponentWon => Some(FighterSide::Opponent),
            BoutOutcome::Aborted => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoutPhase {
    /// Pre-fight countdown; fighters only animate and every input is dropped.
    Countdown,
    Active,
    /// A fighter is down; waiting for the winner screen.
    Resolved(BoutOutcome),
    Exited,
}

/// What happened during one [`Bout::step`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// The countdown ran out on this tick.
    pub started: bool,
    pub hits: Vec<HitLanded>,
    /// Set on the tick the bout resolves or is quit.
    pub outcome: Option<BoutOutcome>,
}

#[derive(Resource, Debug, Clone)]
pub struct Bout {
    player: Fighter,
    opponent: Fighter,
    ai: AiTuning,
    phase: BoutPhase,
    countdown_ticks: u32,
    ticks_per_second: u32,
    tick: u64,
}

impl Bout {
    pub fn new(player: Fighter, opponent: Fighter, ai: AiTuning, tuning: &BoutTuning) -> Self {
        let countdown_ticks = tuning.countdown_ticks();
        Self {
            player,
            opponent,
            ai,
            phase: if countdown_ticks == 0 {
                BoutPhase::Active
            } else {
                BoutPhase::Countdown
            },
            countdown_ticks,
            ticks_per_second: tuning.ticks_per_second.max(1),
            tick: 0,
        }
    }

    pub fn player(&self) -> &Fighter {
        &self.player
    }

    pub fn opponent(&self) -> &Fighter {
        &self.opponent
    }

    pub fn fighter(&self, side: FighterSide) -> &Fighter {
        match side {
            FighterSide::Player => &self.player,
            FighterSide::Opponent => &self.opponent,
        }
    }

    pub fn phase(&self) -> BoutPhase {
        self.phase
    }

    pub fn is_counting_down(&self) -> bool {
        self.phase == BoutPhase::Countdown
    }

    pub fn outcome(&self) -> Option<BoutOutcome> {
        match self.phase {
            BoutPhase::Resolved(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn countdown_ticks(&self) -> u32 {
        self.countdown_ticks
    }

    /// Whole seconds left on the countdown, rounded up.
    pub fn countdown_seconds(&self) -> u32 {
        self.countdown_ticks.div_ceil(self.ticks_per_second)
    }

    /// Fixed ticks stepped so far, countdown included.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Leave the bout after the winner screen has been dismissed.
    pub fn exit(&mut self) {
        self.phase = BoutPhase::Exited;
    }

    /// Advance one fixed tick.
    pub fn step<R: Rng>(&mut self, inputs: &[BoutInput], rng: &mut R) -> TickReport {
        let mut report = TickReport::default();
        if matches!(self.phase, BoutPhase::Resolved(_) | BoutPhase::Exited) {
            return report;
        }
        self.tick += 1;

        if self.phase == BoutPhase::Countdown {
            self.player.tick_idle_animation();
            self.opponent.tick_idle_animation();
            self.countdown_ticks = self.countdown_ticks.saturating_sub(1);
            if self.countdown_ticks == 0 {
                info!(
                    "Fight! {} vs {}",
                    self.player.name(),
                    self.opponent.name()
                );
                self.phase = BoutPhase::Active;
                report.started = true;
            }
            return report;
        }

        if inputs.contains(&BoutInput::Quit) {
            info!("Bout quit on tick {}", self.tick);
            self.phase = BoutPhase::Exited;
            report.outcome = Some(BoutOutcome::Aborted);
            return report;
        }

        for input in inputs {
            dispatch(&mut self.player, *input);
        }

        self.player.update();
        self.opponent.update();

        let roll: f32 = rng.random();
        let view = OpponentView::of(&self.player);
        if let Some(decision) = ai::decide(&self.opponent, &view, &self.ai, roll) {
            ai::apply(&mut self.opponent, decision);
        }

        report.hits = resolve_hits(&mut self.player, &mut self.opponent);

        let outcome = if self.opponent.health().is_dead() {
            Some(BoutOutcome::PlayerWon)
        } else if self.player.health().is_dead() {
            Some(BoutOutcome::OpponentWon)
        } else {
            None
        };
        if let Some(outcome) = outcome {
            self.phase = BoutPhase::Resolved(outcome);
            report.outcome = Some(outcome);
        }

        report
    }
}

/// Route one human input to the player's mutators.
fn dispatch(player: &mut Fighter, input: BoutInput) {
    match input {
        BoutInput::Walk(direction) => player.walk(direction),
        BoutInput::Release(direction) => {
            if player.velocity().x * direction as f32 > 0.0 {
                player.stop();
            }
        }
        BoutInput::Jump => player.jump(),
        BoutInput::Attack(kind) => {
            if player.is_unlocked(kind) {
                player.attack(kind);
            }
        }
        BoutInput::Quit => {}
    }
}
