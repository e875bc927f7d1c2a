//! Combat domain: AI for the computer-controlled fighter.

pub mod opponent;

pub use opponent::{AiDecision, AiIntent, OpponentView, apply, decide};
