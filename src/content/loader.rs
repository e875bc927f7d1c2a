//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use super::registry::ContentRegistry;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Parse the contents of a RON file containing a DataFile<T> wrapper.
pub fn parse_data_file<T>(file: &str, contents: &str) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data: DataFile<T> = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    Ok(data.items)
}

/// Parse the contents of a single RON struct (not wrapped in DataFile).
pub fn parse_single_file<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load all content from assets/data/*.ron.
///
/// Each file falls back to built-in defaults on failure; the errors are
/// returned alongside so the caller can log them.
pub fn load_all_content(
    base_path: &Path,
) -> (ContentRegistry, GameplayDefaults, Vec<ContentLoadError>) {
    let mut errors = Vec::new();

    let fighters_path = base_path.join("fighters.ron");
    let registry = match read_file(&fighters_path).and_then(|contents| {
        parse_data_file::<FighterDef>(&fighters_path.display().to_string(), &contents)
    }) {
        Ok(items) => ContentRegistry::from_fighters(items),
        Err(e) => {
            errors.push(e);
            ContentRegistry::builtin()
        }
    };

    let defaults_path = base_path.join("gameplay_defaults.ron");
    let gameplay_defaults = match read_file(&defaults_path).and_then(|contents| {
        parse_single_file::<GameplayDefaults>(&defaults_path.display().to_string(), &contents)
    }) {
        Ok(defaults) => defaults,
        Err(e) => {
            errors.push(e);
            GameplayDefaults::default()
        }
    };

    (registry, gameplay_defaults, errors)
}
