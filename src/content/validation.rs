//! Validation for cross-references between content definitions.

use super::data::*;
use super::registry::ContentRegistry;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub field: &'static str,
    pub target_type: &'static str,
    pub missing_id: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' references missing {} '{}' in field '{}'",
            self.source_type, self.source_id, self.target_type, self.missing_id, self.field
        )
    }
}

/// Helper macro for checking a reference exists
macro_rules! check_ref {
    ($errors:expr, $registry_map:expr, $source_type:expr, $source_id:expr, $field:expr, $target_type:expr, $ref_id:expr) => {
        if !$registry_map.contains_key($ref_id) {
            $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: $field,
                target_type: $target_type,
                missing_id: $ref_id.to_string(),
            });
        }
    };
}

/// Validate all cross-references in the registry and the gameplay defaults.
/// Returns a list of validation errors, empty if all references are valid.
pub fn validate_content(
    registry: &ContentRegistry,
    defaults: &GameplayDefaults,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (id, fighter) in &registry.fighters {
        if let Some(rival) = &fighter.rival {
            check_ref!(
                errors,
                registry.fighters,
                "Fighter",
                id,
                "rival",
                "Fighter",
                rival
            );
        }
    }

    check_ref!(
        errors,
        registry.fighters,
        "GameplayDefaults",
        "gameplay_defaults",
        "player_character",
        "Fighter",
        &defaults.player_character
    );

    errors
}
