//! Animation sets and frame playback.
//!
//! An [`AnimationSet`] is a flat list of sheet regions per animation key.
//! [`AnimationPlayer`] is the playback cursor a fighter owns; it advances one
//! frame every `ticks_per_frame` fixed ticks and never fails a lookup: a key
//! with no frames falls back to the first idle frame, and a set without idle
//! frames yields a placeholder.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::combat::AttackKind;

/// Animation states a fighter can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationKey {
    #[default]
    Idle,
    Walking,
    Jumping,
    Attack(AttackKind),
}

impl AnimationKey {
    /// Name used for clips in the sprite manifest.
    pub fn name(self) -> &'static str {
        match self {
            AnimationKey::Idle => "idle",
            AnimationKey::Walking => "walking",
            AnimationKey::Jumping => "jumping",
            AnimationKey::Attack(kind) => kind.name(),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "idle" => Some(AnimationKey::Idle),
            "walking" => Some(AnimationKey::Walking),
            "jumping" => Some(AnimationKey::Jumping),
            other => AttackKind::from_name(other).map(AnimationKey::Attack),
        }
    }
}

/// Frames for every animation of one character, all cut from a single sheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationSet {
    /// Manifest key of the sheet, `None` for a placeholder-only set.
    pub sheet: Option<String>,
    /// Multiplier from sheet pixels to arena pixels.
    pub scale: f32,
    clips: HashMap<AnimationKey, Vec<Rect>>,
}

impl AnimationSet {
    pub fn new(sheet: impl Into<String>, scale: f32) -> Self {
        Self {
            sheet: Some(sheet.into()),
            scale,
            clips: HashMap::new(),
        }
    }

    /// A set with no sheet and no frames. Every lookup resolves to the placeholder.
    pub fn placeholder() -> Self {
        Self {
            sheet: None,
            scale: 1.0,
            clips: HashMap::new(),
        }
    }

    pub fn with_clip(mut self, key: AnimationKey, frames: Vec<Rect>) -> Self {
        self.clips.insert(key, frames);
        self
    }

    pub fn frames(&self, key: AnimationKey) -> &[Rect] {
        self.clips.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn frame_count(&self, key: AnimationKey) -> usize {
        self.frames(key).len()
    }

    /// True when not even an idle frame is available.
    pub fn is_placeholder(&self) -> bool {
        self.sheet.is_none() || self.frame_count(AnimationKey::Idle) == 0
    }
}

/// What the presentation layer should draw for a fighter this tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DisplayFrame {
    /// Region of the sheet, or `None` to draw the generated placeholder.
    pub region: Option<Rect>,
    /// Mirror horizontally (fighter faces left).
    pub flip_x: bool,
}

/// Playback cursor over an [`AnimationSet`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationPlayer {
    pub key: AnimationKey,
    pub frame: usize,
    /// Ticks since the last frame advance.
    pub timer: u32,
    pub shown: DisplayFrame,
}

impl AnimationPlayer {
    /// Switch to `key`, restarting from frame 0 only if the key changed.
    pub fn play(&mut self, key: AnimationKey, set: &AnimationSet) {
        if self.key != key {
            self.restart(key, set);
        }
    }

    /// Switch to `key` and always restart from frame 0.
    pub fn restart(&mut self, key: AnimationKey, set: &AnimationSet) {
        if key != AnimationKey::Idle && set.frame_count(key) == 0 {
            debug!("No frames for '{}', falling back to idle", key.name());
        }
        self.key = key;
        self.frame = 0;
        self.timer = 0;
    }

    /// Advance the timer by one tick and reselect the displayed frame.
    pub fn tick(&mut self, set: &AnimationSet, ticks_per_frame: u32, flip_x: bool) {
        self.timer += 1;
        if self.timer >= ticks_per_frame.max(1) {
            self.timer = 0;
            let count = set.frame_count(self.key);
            self.frame = if count == 0 { 0 } else { (self.frame + 1) % count };
        }
        self.select(set, flip_x);
    }

    /// Reselect the displayed frame without advancing time.
    pub fn select(&mut self, set: &AnimationSet, flip_x: bool) {
        self.shown = DisplayFrame {
            region: self.resolve(set),
            flip_x,
        };
    }

    /// Current sheet region with idle fallback. `None` means placeholder.
    pub fn resolve(&self, set: &AnimationSet) -> Option<Rect> {
        let frames = set.frames(self.key);
        if let Some(frame) = frames.get(self.frame % frames.len().max(1)) {
            return Some(*frame);
        }
        set.frames(AnimationKey::Idle).first().copied()
    }
}
