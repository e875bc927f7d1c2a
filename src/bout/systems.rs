//! Bout domain: setup, fixed-tick advance and teardown.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::bout::input::PendingInput;
use crate::bout::resources::MatchRng;
use crate::bout::state::{Bout, BoutOutcome};
use crate::combat::HitLanded;
use crate::content::{ContentRegistry, FighterDef, GameplayDefaults};
use crate::core::{BoutResolved, NavigationSignal};
use crate::fighter::{Controller, Fighter, FighterSpawn};
use crate::movement::Facing;
use crate::sprites::SpriteManifest;

/// Build a fresh bout: the configured character against its rival.
pub fn build_bout(
    registry: &ContentRegistry,
    defaults: &GameplayDefaults,
    manifest: &SpriteManifest,
) -> Bout {
    let player_def = match registry.fighter(&defaults.player_character) {
        Some(def) => def.clone(),
        None => {
            warn!(
                "Unknown player character '{}', fighting as an unnamed stand-in",
                defaults.player_character
            );
            FighterDef {
                id: defaults.player_character.clone(),
                name: defaults.player_character.clone(),
                sheet: defaults.player_character.clone(),
                rival: None,
            }
        }
    };
    let opponent_def = registry
        .rival_of(&player_def.id)
        .cloned()
        .unwrap_or_else(|| player_def.clone());

    let tuning = defaults.fighter;
    let floor = tuning.arena.floor_line();
    let spawn = |def: &FighterDef, fraction: f32, facing: Facing, controller: Controller| {
        Fighter::new(
            FighterSpawn {
                name: def.name.clone(),
                character_id: def.id.clone(),
                position: Vec2::new(tuning.arena.width * fraction, floor),
                facing,
                controller,
            },
            tuning,
            manifest.animation_set(&def.sheet),
        )
    };

    // Both start facing the centre of the arena
    let player = spawn(
        &player_def,
        defaults.bout.player_spawn,
        Facing::Right,
        Controller::Human,
    );
    let opponent = spawn(
        &opponent_def,
        defaults.bout.opponent_spawn,
        Facing::Left,
        Controller::Ai,
    );
    Bout::new(player, opponent, defaults.ai, &defaults.bout)
}

/// Run `FixedUpdate` at the configured bout rate.
pub(crate) fn apply_tick_rate(defaults: Res<GameplayDefaults>, mut fixed: ResMut<Time<Fixed>>) {
    let timestep = defaults.bout.fixed_timestep();
    info!(
        "Bout runs at {} ticks per second",
        defaults.bout.ticks_per_second.max(1)
    );
    fixed.set_timestep(timestep);
}

pub(crate) fn start_bout(
    mut commands: Commands,
    registry: Res<ContentRegistry>,
    defaults: Res<GameplayDefaults>,
    manifest: Res<SpriteManifest>,
    mut pending: ResMut<PendingInput>,
) {
    let bout = build_bout(&registry, &defaults, &manifest);
    info!(
        "Bout starting: {} vs {} ({}s countdown)",
        bout.player().name(),
        bout.opponent().name(),
        bout.countdown_seconds()
    );

    pending.clear();
    commands.insert_resource(MatchRng::from_seed(defaults.seed));
    commands.insert_resource(bout);
}

pub(crate) fn advance_bout(
    bout: Option<ResMut<Bout>>,
    mut pending: ResMut<PendingInput>,
    mut rng: ResMut<MatchRng>,
    mut hits: MessageWriter<HitLanded>,
    mut resolved: MessageWriter<BoutResolved>,
    mut navigation: MessageWriter<NavigationSignal>,
) {
    let Some(mut bout) = bout else {
        return;
    };

    let inputs = pending.drain();
    let report = bout.step(&inputs, &mut rng.0);

    if report.started {
        debug!("Countdown over on tick {}", bout.tick());
    }

    for hit in report.hits {
        hits.write(hit);
    }

    if let Some(signal) = report.outcome.and_then(leave_signal) {
        info!("Leaving the bout after {} ticks", bout.tick());
        navigation.write(signal);
    }

    if let Some(side) = report.outcome.and_then(BoutOutcome::winner) {
        let winner = bout.fighter(side);
        info!(
            "{} wins after {} ticks with {} HP left",
            winner.name(),
            bout.tick(),
            winner.health().current
        );
        resolved.write(BoutResolved {
            winner_name: winner.name().to_string(),
            winner_side: side,
        });
    }
}

/// Where an outcome sends the game without a winner screen. Leaving a bout
/// returns to the level select; closing the window is what quits.
pub(crate) fn leave_signal(outcome: BoutOutcome) -> Option<NavigationSignal> {
    match outcome {
        BoutOutcome::Aborted => Some(NavigationSignal::LevelSelect),
        BoutOutcome::PlayerWon | BoutOutcome::OpponentWon => None,
    }
}

pub(crate) fn end_bout(mut commands: Commands, mut pending: ResMut<PendingInput>) {
    pending.clear();
    commands.remove_resource::<Bout>();
}
