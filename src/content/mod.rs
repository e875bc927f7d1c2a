//! Content domain: data-driven roster and gameplay tuning.
//!
//! Loaded synchronously at startup from `assets/data`. Any file that fails to
//! load is replaced by built-in defaults so a bout can always start.

mod data;
mod loader;
mod registry;
mod validation;

pub use data::{DataFile, FighterDef, GameplayDefaults};
pub use loader::{ContentLoadError, load_all_content, parse_data_file, parse_single_file};
pub use registry::ContentRegistry;
pub use validation::{ValidationError, validate_content};

use bevy::prelude::*;
use std::path::Path;

pub(crate) const DATA_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentRegistry>()
            .init_resource::<GameplayDefaults>()
            .add_systems(PreStartup, load_content);
    }
}

fn load_content(mut commands: Commands) {
    let (registry, defaults, errors) = load_all_content(Path::new(DATA_DIR));

    for error in &errors {
        error!("{}", error);
    }
    if !errors.is_empty() {
        warn!(
            "{} content file(s) failed to load, using built-in defaults for them",
            errors.len()
        );
    }

    for error in validate_content(&registry, &defaults) {
        warn!("Content validation: {}", error);
    }

    info!("{}", registry.summary());
    commands.insert_resource(registry);
    commands.insert_resource(defaults);
}
