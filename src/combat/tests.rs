//! Combat domain: unit tests for hit resolution, health and the opponent AI.

use bevy::prelude::{Rect, Vec2};

use super::ai::{AiDecision, AiIntent, OpponentView, apply, decide};
use super::hits::{resolve_hits, try_land};
use super::*;
use crate::fighter::{Controller, Fighter, FighterSide, FighterSpawn, FighterTuning};
use crate::movement::Facing;
use crate::sprites::AnimationSet;

fn fighter(x: f32, facing: Facing, controller: Controller) -> Fighter {
    let tuning = FighterTuning::default();
    Fighter::new(
        FighterSpawn {
            name: format!("fighter@{x}"),
            character_id: "test".to_string(),
            position: Vec2::new(x, tuning.arena.floor_line()),
            facing,
            controller,
        },
        tuning,
        AnimationSet::placeholder(),
    )
}

/// Land `hits` basic attacks to build up the charge for stronger tiers.
fn charge(fighter: &mut Fighter, hits: u32) {
    for _ in 0..hits {
        fighter.attack(AttackKind::Basic);
        fighter.register_hit();
        while fighter.is_attacking() {
            fighter.update();
        }
    }
}

// -----------------------------------------------------------------------------
// Geometry helpers
// -----------------------------------------------------------------------------

#[test]
fn test_strike_region_extends_forward_only() {
    let body = Rect::new(60.0, 510.0, 140.0, 650.0);

    let right = strike_region(body, Facing::Right, 50.0);
    assert_eq!(right, Rect::new(60.0, 510.0, 190.0, 650.0));

    let left = strike_region(body, Facing::Left, 50.0);
    assert_eq!(left, Rect::new(10.0, 510.0, 140.0, 650.0));
}

#[test]
fn test_touching_edges_do_not_overlap() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(!overlaps(a, Rect::new(10.0, 0.0, 20.0, 10.0)));
    assert!(overlaps(a, Rect::new(9.0, 0.0, 20.0, 10.0)));
}

#[test]
fn test_health_percent_and_clamp() {
    let mut health = Health::new(45);
    assert_eq!(health.take_damage(15), 15);
    assert_eq!(health.percent(), 30.0 / 45.0);
    assert_eq!(health.take_damage(100), 30);
    assert_eq!(health.current, 0);
    assert_eq!(Health::new(0).percent(), 0.0);
}

// -----------------------------------------------------------------------------
// Hit resolution
// -----------------------------------------------------------------------------

#[test]
fn test_scenario_single_hit_despite_sustained_overlap() {
    // 40 px gap between bodies, reach 50
    let mut attacker = fighter(100.0, Facing::Right, Controller::Human);
    let mut defender = fighter(220.0, Facing::Left, Controller::Human);
    assert_eq!(defender.body().min.x - attacker.body().max.x, 40.0);

    attacker.attack(AttackKind::Basic);
    let first = resolve_hits(&mut attacker, &mut defender);
    assert_eq!(first.len(), 1);
    assert_eq!(
        first[0],
        HitLanded {
            attacker: FighterSide::Player,
            defender: FighterSide::Opponent,
            kind: AttackKind::Basic,
            damage: 3,
            remaining: 42,
        }
    );

    for _ in 0..10 {
        attacker.update();
        defender.update();
        assert!(resolve_hits(&mut attacker, &mut defender).is_empty());
    }
    assert_eq!(defender.health().current, 42);
    assert!(attacker.has_dealt_hit());
    assert_eq!(attacker.hit_count(), 1);
}

#[test]
fn test_out_of_reach_does_not_hit() {
    let mut attacker = fighter(100.0, Facing::Right, Controller::Human);
    // Bodies 50 px apart: the strike region only touches the defender
    let mut defender = fighter(230.0, Facing::Left, Controller::Human);

    attacker.attack(AttackKind::Basic);
    assert!(resolve_hits(&mut attacker, &mut defender).is_empty());
    assert_eq!(defender.health().current, 45);
}

#[test]
fn test_facing_away_does_not_hit() {
    let mut attacker = fighter(100.0, Facing::Left, Controller::Human);
    let mut defender = fighter(220.0, Facing::Left, Controller::Human);

    attacker.attack(AttackKind::Basic);
    assert!(try_land(&mut attacker, FighterSide::Player, &mut defender).is_none());
    assert!(attacker.can_land_hit());
}

#[test]
fn test_attacking_defender_takes_no_damage() {
    let mut player = fighter(100.0, Facing::Right, Controller::Human);
    let mut opponent = fighter(220.0, Facing::Left, Controller::Ai);

    player.attack(AttackKind::Basic);
    opponent.attack(AttackKind::Basic);
    let hits = resolve_hits(&mut player, &mut opponent);

    assert!(hits.is_empty());
    assert_eq!(player.health().current, 45);
    assert_eq!(opponent.health().current, 45);
    // Neither swing is spent by the clash
    assert!(player.can_land_hit());
    assert!(opponent.can_land_hit());
}

#[test]
fn test_opponent_role_is_resolved_too() {
    let mut player = fighter(100.0, Facing::Right, Controller::Human);
    let mut opponent = fighter(220.0, Facing::Left, Controller::Ai);

    opponent.attack(AttackKind::Mid);
    let hits = resolve_hits(&mut player, &mut opponent);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].attacker, FighterSide::Opponent);
    assert_eq!(hits[0].defender, FighterSide::Player);
    assert_eq!(player.health().current, 37);
}

// -----------------------------------------------------------------------------
// Opponent AI
// -----------------------------------------------------------------------------

#[test]
fn test_ai_never_drives_a_human() {
    let human = fighter(300.0, Facing::Right, Controller::Human);
    let target = OpponentView::of(&fighter(800.0, Facing::Left, Controller::Human));
    assert_eq!(decide(&human, &target, &AiTuning::default(), 0.0), None);
}

#[test]
fn test_ai_waits_out_its_own_attack() {
    let mut ai = fighter(300.0, Facing::Right, Controller::Ai);
    let target = OpponentView::of(&fighter(390.0, Facing::Left, Controller::Human));
    ai.attack(AttackKind::Basic);

    for _ in 0..59 {
        ai.update();
        assert_eq!(decide(&ai, &target, &AiTuning::default(), 0.0), None);
    }
    ai.update();
    assert!(decide(&ai, &target, &AiTuning::default(), 0.0).is_some());
}

#[test]
fn test_ai_approaches_from_either_side() {
    let tuning = AiTuning::default();
    let left = fighter(200.0, Facing::Right, Controller::Ai);
    let right = fighter(800.0, Facing::Left, Controller::Ai);

    let at_right = OpponentView::of(&right);
    let at_left = OpponentView::of(&left);
    assert_eq!(
        decide(&left, &at_right, &tuning, 1.0).map(|d| d.intent),
        Some(AiIntent::Approach(1))
    );
    assert_eq!(
        decide(&right, &at_left, &tuning, 1.0).map(|d| d.intent),
        Some(AiIntent::Approach(-1))
    );
}

#[test]
fn test_ai_basic_needs_adjacency_and_an_open_target() {
    let tuning = AiTuning::default();
    let ai = fighter(300.0, Facing::Right, Controller::Ai);
    let mut target = fighter(390.0, Facing::Left, Controller::Human);

    assert_eq!(
        decide(&ai, &OpponentView::of(&target), &tuning, 1.0).map(|d| d.intent),
        Some(AiIntent::Strike(AttackKind::Basic))
    );

    target.attack(AttackKind::Basic);
    assert_eq!(
        decide(&ai, &OpponentView::of(&target), &tuning, 1.0).map(|d| d.intent),
        Some(AiIntent::Approach(1))
    );
}

#[test]
fn test_ai_basic_range_without_edge_contact_keeps_walking() {
    let tuning = AiTuning {
        basic_range: 150.0,
        ..AiTuning::default()
    };
    let ai = fighter(300.0, Facing::Right, Controller::Ai);
    // Centres 130 apart, edges 50 apart
    let target = OpponentView::of(&fighter(430.0, Facing::Left, Controller::Human));

    assert_eq!(
        decide(&ai, &target, &tuning, 1.0).map(|d| d.intent),
        Some(AiIntent::Approach(1))
    );
}

#[test]
fn test_ai_holds_when_close_and_target_attacking() {
    let ai = fighter(400.0, Facing::Right, Controller::Ai);
    let mut target = fighter(440.0, Facing::Left, Controller::Human);
    target.attack(AttackKind::Basic);

    assert_eq!(
        decide(&ai, &OpponentView::of(&target), &AiTuning::default(), 1.0).map(|d| d.intent),
        Some(AiIntent::Hold)
    );
}

#[test]
fn test_ai_prefers_strongest_unlocked_tier_in_range() {
    let tuning = AiTuning::default();
    let mut ai = fighter(300.0, Facing::Right, Controller::Ai);
    let near = OpponentView::of(&fighter(450.0, Facing::Left, Controller::Human));
    let far = OpponentView::of(&fighter(500.0, Facing::Left, Controller::Human));

    charge(&mut ai, 5);
    assert_eq!(
        decide(&ai, &near, &tuning, 1.0).map(|d| d.intent),
        Some(AiIntent::Strike(AttackKind::Mid))
    );
    // 200 px is outside mid range
    assert_eq!(
        decide(&ai, &far, &tuning, 1.0).map(|d| d.intent),
        Some(AiIntent::Approach(1))
    );

    charge(&mut ai, 5);
    assert_eq!(
        decide(&ai, &far, &tuning, 1.0).map(|d| d.intent),
        Some(AiIntent::Strike(AttackKind::Super))
    );
    assert_eq!(
        decide(&ai, &near, &tuning, 1.0).map(|d| d.intent),
        Some(AiIntent::Strike(AttackKind::Super))
    );
}

#[test]
fn test_ai_jump_roll_only_while_grounded() {
    let tuning = AiTuning::default();
    let mut ai = fighter(200.0, Facing::Right, Controller::Ai);
    let target = OpponentView::of(&fighter(800.0, Facing::Left, Controller::Human));

    assert!(decide(&ai, &target, &tuning, 0.0).is_some_and(|d| d.jump));
    assert!(decide(&ai, &target, &tuning, 0.5).is_some_and(|d| !d.jump));

    ai.jump();
    ai.update();
    assert!(decide(&ai, &target, &tuning, 0.0).is_some_and(|d| !d.jump));
}

#[test]
fn test_apply_strike_stops_and_attacks() {
    let mut ai = fighter(300.0, Facing::Right, Controller::Ai);
    ai.walk(1);

    let damage = apply(
        &mut ai,
        AiDecision {
            intent: AiIntent::Strike(AttackKind::Basic),
            jump: false,
        },
    );
    assert_eq!(damage, Some(3));
    assert_eq!(ai.velocity().x, 0.0);
    assert!(ai.is_attacking());
}

#[test]
fn test_apply_move_and_jump() {
    let mut ai = fighter(300.0, Facing::Right, Controller::Ai);
    let damage = apply(
        &mut ai,
        AiDecision {
            intent: AiIntent::Approach(-1),
            jump: true,
        },
    );
    assert_eq!(damage, None);
    assert_eq!(ai.velocity().x, -5.0);
    assert!(!ai.is_grounded());

    apply(
        &mut ai,
        AiDecision {
            intent: AiIntent::Hold,
            jump: false,
        },
    );
    assert_eq!(ai.velocity().x, 0.0);
}
