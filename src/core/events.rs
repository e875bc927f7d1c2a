//! Core domain: messages crossing the bout boundary.

use bevy::ecs::message::Message;

use crate::fighter::FighterSide;

/// A bout ended by knockout.
#[derive(Debug, Clone)]
pub struct BoutResolved {
    pub winner_name: String,
    pub winner_side: FighterSide,
}

impl Message for BoutResolved {}

/// Where to go once a bout is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationSignal {
    /// Back to the level select; starts a fresh bout.
    LevelSelect,
    Quit,
}

impl Message for NavigationSignal {}
