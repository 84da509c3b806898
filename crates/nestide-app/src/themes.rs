//! Theme catalog
//!
//! Enumerates the theme identifiers a nested instance can be started with,
//! by scanning the host's resource directories. The catalog is advisory --
//! it populates a selection UI, but the profile accepts any theme string.

use std::path::Path;

use nestide_core::prelude::*;

/// File extension of theme definition files under `<resources>/themes/`.
pub const THEME_FILE_EXTENSION: &str = "theme";

/// Name of the theme every installation ships with.
pub const DEFAULT_THEME: &str = "default";

/// List available themes: built-in themes first (with `default` moved to
/// the front), then user-installed themes. A missing directory contributes
/// nothing.
pub fn available_themes(resource_dir: &Path, user_resource_dir: &Path) -> Vec<String> {
    let mut themes = themes_in(resource_dir);

    if let Some(default_index) = themes.iter().position(|t| t == DEFAULT_THEME) {
        let default = themes.remove(default_index);
        themes.insert(0, default);
    } else {
        warn!(
            "\"{}\" theme not found in resource path {:?}",
            DEFAULT_THEME, resource_dir
        );
    }

    themes.extend(themes_in(user_resource_dir));
    themes
}

/// Stems of `*.theme` files in `<root>/themes`, sorted by name.
fn themes_in(resource_root: &Path) -> Vec<String> {
    let themes_dir = resource_root.join("themes");
    let Ok(entries) = std::fs::read_dir(&themes_dir) else {
        debug!("No themes directory at {:?}", themes_dir);
        return Vec::new();
    };

    let mut themes: Vec<String> = entries
        .flatten()
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| {
            let path = entry.path();
            let ext = path.extension()?;
            if !ext.eq_ignore_ascii_case(THEME_FILE_EXTENSION) {
                return None;
            }
            Some(path.file_stem()?.to_string_lossy().into_owned())
        })
        .collect();
    themes.sort();
    themes
}
