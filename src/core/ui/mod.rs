//! Core domain: full-screen overlays around a bout.

pub(crate) mod countdown;
pub(crate) mod winner;
