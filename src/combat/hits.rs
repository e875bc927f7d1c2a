//! Combat domain: pairwise hit detection and damage resolution.
//!
//! Run once per tick after both fighters have updated. Each side gets one
//! chance to land its running swing on the other; a swing lands at most once
//! because `register_hit` closes it.

use crate::combat::attacks::{overlaps, strike_region};
use crate::combat::events::HitLanded;
use crate::fighter::{Fighter, FighterSide};

/// Resolve both attacker roles, player first.
pub fn resolve_hits(player: &mut Fighter, opponent: &mut Fighter) -> Vec<HitLanded> {
    let mut hits = Vec::new();
    if let Some(hit) = try_land(player, FighterSide::Player, opponent) {
        hits.push(hit);
    }
    if let Some(hit) = try_land(opponent, FighterSide::Opponent, player) {
        hits.push(hit);
    }
    hits
}

/// Land `attacker`'s open swing on `defender` if their geometry allows it.
pub fn try_land(
    attacker: &mut Fighter,
    side: FighterSide,
    defender: &mut Fighter,
) -> Option<HitLanded> {
    let kind = attacker.attack_kind()?;
    if !attacker.can_land_hit() || defender.is_attacking() {
        return None;
    }

    let region = strike_region(
        attacker.body(),
        attacker.facing(),
        attacker.tuning().attacks.reach,
    );
    if !overlaps(region, defender.body()) {
        return None;
    }

    let damage = attacker.tuning().attacks.damage(kind);
    if !defender.take_damage(damage) {
        return None;
    }
    attacker.register_hit();

    Some(HitLanded {
        attacker: side,
        defender: side.other(),
        kind,
        damage,
        remaining: defender.health().current,
    })
}
