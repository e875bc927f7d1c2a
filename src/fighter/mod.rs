//! Fighter domain: the per-character state machine.
//!
//! A [`Fighter`] owns its kinematics, health, attack state and animation
//! cursor. Discrete actions (`walk`, `stop`, `jump`, `attack`, `take_damage`)
//! mutate it between ticks; [`Fighter::update`] advances it by one fixed tick.
//! Actions that the current state disallows are silent no-ops.

mod state;
mod tuning;

pub use state::{Controller, FighterSide, FighterSpawn, FighterState};
pub use tuning::FighterTuning;

use bevy::prelude::*;

use crate::combat::{AttackKind, Health};
use crate::movement::physics::{
    apply_gravity, clamp_to_arena, integrate, resolve_floor, update_facing,
};
use crate::movement::{Facing, Kinematics};
use crate::sprites::{AnimationKey, AnimationPlayer, AnimationSet, DisplayFrame};

#[derive(Debug, Clone)]
pub struct Fighter {
    name: String,
    character_id: String,
    controller: Controller,
    kinematics: Kinematics,
    state: FighterState,
    health: Health,
    /// Landed hits since the last mid/super; unlocks the stronger attacks.
    hit_count: u32,
    body: Rect,
    animation: AnimationPlayer,
    animations: AnimationSet,
    tuning: FighterTuning,
}

impl Fighter {
    pub fn new(spawn: FighterSpawn, tuning: FighterTuning, animations: AnimationSet) -> Self {
        let floor = tuning.arena.floor_line();
        let mut kinematics = Kinematics::at(spawn.position);
        kinematics.facing = spawn.facing;
        if kinematics.position.y >= floor {
            kinematics.position.y = floor;
            kinematics.grounded = true;
        }

        let state = if kinematics.grounded {
            FighterState::Idle
        } else {
            FighterState::Jumping
        };

        let mut animation = AnimationPlayer::default();
        animation.restart(state.animation_key(), &animations);
        animation.select(&animations, kinematics.facing.is_left());

        if animations.is_placeholder() {
            warn!(
                "Fighter '{}' has no idle frames, drawing a placeholder",
                spawn.name
            );
        }

        let mut fighter = Self {
            body: kinematics.rect_of_size(tuning.body_size()),
            name: spawn.name,
            character_id: spawn.character_id,
            controller: spawn.controller,
            kinematics,
            state,
            health: Health::new(tuning.max_health),
            hit_count: 0,
            animation,
            animations,
            tuning,
        };
        fighter.keep_inside_arena();
        fighter
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn character_id(&self) -> &str {
        &self.character_id
    }

    pub fn controller(&self) -> Controller {
        self.controller
    }

    pub fn is_human(&self) -> bool {
        self.controller == Controller::Human
    }

    pub fn position(&self) -> Vec2 {
        self.kinematics.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.kinematics.velocity
    }

    pub fn facing(&self) -> Facing {
        self.kinematics.facing
    }

    pub fn is_grounded(&self) -> bool {
        self.kinematics.grounded
    }

    pub fn state(&self) -> &FighterState {
        &self.state
    }

    pub fn health(&self) -> Health {
        self.health
    }

    pub fn hit_count(&self) -> u32 {
        self.hit_count
    }

    pub fn tuning(&self) -> &FighterTuning {
        &self.tuning
    }

    pub fn is_attacking(&self) -> bool {
        self.state.is_attacking()
    }

    /// Ticks until the current attack clears, 0 when not attacking.
    pub fn cooldown(&self) -> u32 {
        match self.state {
            FighterState::Attacking {
                ticks_remaining, ..
            } => ticks_remaining,
            _ => 0,
        }
    }

    pub fn attack_kind(&self) -> Option<AttackKind> {
        match self.state {
            FighterState::Attacking { kind, .. } => Some(kind),
            _ => None,
        }
    }

    pub fn has_dealt_hit(&self) -> bool {
        matches!(self.state, FighterState::Attacking { has_hit: true, .. })
    }

    /// Attacking with a swing that has not landed yet.
    pub fn can_land_hit(&self) -> bool {
        matches!(self.state, FighterState::Attacking { has_hit: false, .. })
    }

    pub fn attack_hitbox(&self) -> Option<Rect> {
        match self.state {
            FighterState::Attacking { hitbox, .. } => hitbox,
            _ => None,
        }
    }

    /// Damage-receiving rectangle.
    pub fn body(&self) -> Rect {
        self.body
    }

    /// On-screen rectangle of the current frame (or placeholder), feet-anchored.
    pub fn render_rect(&self) -> Rect {
        let size = match self.animation.shown.region {
            Some(region) => region.size() * self.animations.scale,
            None => Vec2::splat(self.tuning.placeholder_size),
        };
        self.kinematics.rect_of_size(size)
    }

    pub fn display_frame(&self) -> DisplayFrame {
        self.animation.shown
    }

    pub fn animation_key(&self) -> AnimationKey {
        self.animation.key
    }

    pub fn animation_frame(&self) -> usize {
        self.animation.frame
    }

    pub fn animations(&self) -> &AnimationSet {
        &self.animations
    }

    /// Whether enough hits have landed to use `kind`.
    pub fn is_unlocked(&self, kind: AttackKind) -> bool {
        self.hit_count >= self.tuning.attacks.threshold(kind)
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    /// Walk toward the sign of `direction`. Zero is ignored.
    pub fn walk(&mut self, direction: i32) {
        let sign = direction.signum();
        if sign == 0 {
            return;
        }
        self.kinematics.velocity.x = sign as f32 * self.tuning.movement.walk_speed;
        if self.kinematics.grounded && !self.is_attacking() {
            self.set_state(FighterState::Walking);
        }
    }

    pub fn stop(&mut self) {
        self.kinematics.velocity.x = 0.0;
        if self.kinematics.grounded && !self.is_attacking() {
            self.set_state(FighterState::Idle);
        }
    }

    pub fn jump(&mut self) {
        if !self.kinematics.grounded {
            return;
        }
        self.kinematics.velocity.y = self.tuning.movement.jump_velocity;
        self.kinematics.grounded = false;
        // An attack in progress keeps its state; it settles to Jumping when it clears
        if !self.is_attacking() {
            self.set_state(FighterState::Jumping);
        }
    }

    /// Start an attack. Returns its damage, or `None` if an attack is already
    /// running.
    pub fn attack(&mut self, kind: AttackKind) -> Option<u32> {
        if self.is_attacking() {
            return None;
        }

        let config = *self.tuning.attacks.config(kind);
        let hitbox = config
            .hitbox
            .map(|shape| shape.place(self.body, self.kinematics.facing));

        if kind.consumes_charge() {
            self.hit_count = 0;
        }

        self.state = FighterState::Attacking {
            kind,
            ticks_remaining: config.cooldown_ticks.max(1),
            has_hit: false,
            hitbox,
        };
        self.animation
            .restart(AnimationKey::Attack(kind), &self.animations);

        debug!(
            "{} starts {} attack (damage={}, cooldown={})",
            self.name,
            kind.name(),
            config.damage,
            config.cooldown_ticks
        );
        Some(config.damage)
    }

    /// Apply damage. Fails (returns false, health untouched) while attacking.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        if self.is_attacking() {
            return false;
        }
        self.health.take_damage(amount);
        true
    }

    /// Record that the running attack landed.
    pub(crate) fn register_hit(&mut self) {
        if let FighterState::Attacking { has_hit, .. } = &mut self.state {
            *has_hit = true;
            self.hit_count += 1;
        }
    }

    // ------------------------------------------------------------------
    // Ticking
    // ------------------------------------------------------------------

    /// Advance one fixed tick: physics, attack cooldown, geometry, animation.
    pub fn update(&mut self) {
        let tuning = self.tuning;

        update_facing(&mut self.kinematics);
        apply_gravity(&mut self.kinematics, &tuning.movement);
        integrate(&mut self.kinematics);

        resolve_floor(&mut self.kinematics, &tuning.arena);
        if self.kinematics.grounded && self.state == FighterState::Jumping {
            self.settle_state();
        }

        let half_width = self.clamp_half_width();
        clamp_to_arena(&mut self.kinematics, half_width, &tuning.arena);

        self.tick_cooldown();
        self.sync_geometry();

        self.animation.tick(
            &self.animations,
            tuning.ticks_per_frame,
            self.kinematics.facing.is_left(),
        );
        // The new frame may be wider than the one clamped against
        self.keep_inside_arena();
    }

    /// Countdown-phase tick: animation only, no physics or actions.
    pub fn tick_idle_animation(&mut self) {
        self.animation.tick(
            &self.animations,
            self.tuning.ticks_per_frame,
            self.kinematics.facing.is_left(),
        );
        self.keep_inside_arena();
    }

    /// Half of the wider of the body and the drawn rectangle.
    fn clamp_half_width(&self) -> f32 {
        self.tuning.body_width.max(self.render_rect().width()) * 0.5
    }

    fn keep_inside_arena(&mut self) {
        let before = self.kinematics.position.x;
        let half_width = self.clamp_half_width();
        clamp_to_arena(&mut self.kinematics, half_width, &self.tuning.arena);
        if self.kinematics.position.x != before {
            self.sync_geometry();
        }
    }

    /// Rebuild the body and attack hitbox from the current position.
    fn sync_geometry(&mut self) {
        self.body = self.kinematics.rect_of_size(self.tuning.body_size());
        if let FighterState::Attacking {
            kind,
            hitbox: Some(hitbox),
            ..
        } = &mut self.state
        {
            if let Some(shape) = self.tuning.attacks.config(*kind).hitbox {
                *hitbox = shape.place(self.body, self.kinematics.facing);
            }
        }
    }

    fn tick_cooldown(&mut self) {
        let expired = match &mut self.state {
            FighterState::Attacking {
                ticks_remaining, ..
            } => {
                *ticks_remaining = ticks_remaining.saturating_sub(1);
                *ticks_remaining == 0
            }
            _ => false,
        };
        if expired {
            self.settle_state();
        }
    }

    /// Pick the locomotion state that matches current velocity and ground contact.
    fn settle_state(&mut self) {
        let next = if !self.kinematics.grounded {
            FighterState::Jumping
        } else if self.kinematics.velocity.x != 0.0 {
            FighterState::Walking
        } else {
            FighterState::Idle
        };
        self.set_state(next);
    }

    fn set_state(&mut self, state: FighterState) {
        self.state = state;
        self.animation
            .play(state.animation_key(), &self.animations);
    }
}

#[cfg(test)]
mod tests;
