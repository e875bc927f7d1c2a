//! Bout domain: match tuning and the seeded random source.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BoutTuning {
    /// Length of the pre-fight countdown.
    pub countdown_seconds: u32,
    /// Fixed simulation rate; also drives the `FixedUpdate` timestep.
    pub ticks_per_second: u32,
    /// Spawn x of each side as a fraction of arena width.
    pub player_spawn: f32,
    pub opponent_spawn: f32,
}

impl Default for BoutTuning {
    fn default() -> Self {
        Self {
            countdown_seconds: 10,
            ticks_per_second: 60,
            player_spawn: 0.2,
            opponent_spawn: 0.8,
        }
    }
}

impl BoutTuning {
    pub fn countdown_ticks(&self) -> u32 {
        self.countdown_seconds * self.ticks_per_second.max(1)
    }

    /// Wall-clock length of one fixed tick.
    pub fn fixed_timestep(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.ticks_per_second.max(1)))
    }
}

/// Random source for the opponent controller. Seeded from the gameplay
/// defaults when a seed is configured so bouts can be replayed.
#[derive(Resource, Debug, Clone)]
pub struct MatchRng(pub ChaCha8Rng);

impl MatchRng {
    pub fn from_seed(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        debug!("Match rng seed: {}", seed);
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for MatchRng {
    fn default() -> Self {
        Self::from_seed(None)
    }
}
