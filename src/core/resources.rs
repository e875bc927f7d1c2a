//! Core domain: results carried between screens.

use bevy::prelude::*;

use crate::fighter::FighterSide;

/// Winner of the most recent bout, read by the winner screen.
#[derive(Resource, Debug, Clone, Default)]
pub struct LastOutcome {
    pub winner: Option<(String, FighterSide)>,
}

impl LastOutcome {
    pub fn record(&mut self, name: impl Into<String>, side: FighterSide) {
        self.winner = Some((name.into(), side));
    }

    pub fn clear(&mut self) {
        self.winner = None;
    }
}
