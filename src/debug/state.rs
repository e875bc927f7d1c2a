//! Debug domain: toggles for the dev overlays.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Draw body and attack rectangles over the fighters
    pub show_hitboxes: bool,
    /// Whether to show the per-fighter info overlay
    pub show_info: bool,
    /// Message to display temporarily in the info overlay
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }
}

/// Which rectangle a hitbox overlay sprite follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayShape {
    Body,
    Attack,
}
