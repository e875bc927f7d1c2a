//! ContentRegistry resource providing HashMap lookups for all loaded content.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::*;

/// Central registry for all loaded game content.
#[derive(Resource, Debug, Default)]
pub struct ContentRegistry {
    pub fighters: HashMap<String, FighterDef>,
}

impl ContentRegistry {
    pub fn from_fighters(items: Vec<FighterDef>) -> Self {
        let mut registry = Self::default();
        for item in items {
            registry.fighters.insert(item.id.clone(), item);
        }
        registry
    }

    /// Roster used when fighters.ron cannot be read.
    pub fn builtin() -> Self {
        Self::from_fighters(vec![
            FighterDef {
                id: "boat_man".to_string(),
                name: "The Boat Man".to_string(),
                sheet: "boat_man".to_string(),
                rival: Some("log_lady".to_string()),
            },
            FighterDef {
                id: "log_lady".to_string(),
                name: "The Log Lady".to_string(),
                sheet: "log_lady".to_string(),
                rival: Some("boat_man".to_string()),
            },
        ])
    }

    pub fn fighter(&self, id: &str) -> Option<&FighterDef> {
        self.fighters.get(id)
    }

    /// The character `id` is matched against. Falls back to any other roster
    /// entry when no rival is set, then to `id` itself (mirror match).
    pub fn rival_of(&self, id: &str) -> Option<&FighterDef> {
        let own = self.fighters.get(id)?;
        if let Some(rival) = own.rival.as_deref().and_then(|r| self.fighters.get(r)) {
            return Some(rival);
        }
        let mut others: Vec<&FighterDef> =
            self.fighters.values().filter(|def| def.id != id).collect();
        others.sort_by(|a, b| a.id.cmp(&b.id));
        Some(others.first().copied().unwrap_or(own))
    }

    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        let mut names: Vec<&str> = self.fighters.values().map(|def| def.name.as_str()).collect();
        names.sort_unstable();
        format!(
            "ContentRegistry loaded:\n\
             - Fighters: {} ({})",
            self.fighters.len(),
            names.join(", "),
        )
    }
}
