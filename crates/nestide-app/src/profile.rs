//! Launch profile for a nested-IDE run target
//!
//! A [`LaunchProfile`] holds the three aspects a run target configures: the
//! working directory, the optional alternative settings directory, and the
//! theme. It is a plain value; all mutation policy (validation, commit
//! rules) lives in the controller.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::host::SettingsStore;

/// Flat settings keys, one per persisted aspect.
pub const WORKING_DIRECTORY_KEY: &str = "nestide.runConfig.workingDirectory";
pub const SETTINGS_PATH_KEY: &str = "nestide.runConfig.settingsPath";
pub const USE_SETTINGS_PATH_KEY: &str = "nestide.runConfig.useSettingsPath";
pub const THEME_KEY: &str = "nestide.runConfig.theme";

/// The persistent state of one nested-IDE run target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LaunchProfile {
    /// Directory the nested process starts in. Defaults to the host
    /// project's directory.
    pub working_directory: PathBuf,

    /// Whether the nested instance uses an alternative settings directory.
    #[serde(default)]
    pub use_alternate_settings: bool,

    /// Alternative settings directory. Only meaningful while
    /// `use_alternate_settings` is true; a stale or invalid value is
    /// tolerated (and never passed downstream) while the toggle is off.
    #[serde(default)]
    pub alternate_settings_path: PathBuf,

    /// Theme identifier. Empty means "use the host's default theme".
    #[serde(default)]
    pub theme: String,
}

impl LaunchProfile {
    /// Default profile for a run target configured inside `project_dir`.
    pub fn for_project(project_dir: &Path) -> Self {
        Self {
            working_directory: project_dir.to_path_buf(),
            use_alternate_settings: false,
            alternate_settings_path: PathBuf::new(),
            theme: String::new(),
        }
    }

    /// Restore a profile from flat store values. Missing keys fall back to
    /// the defaults of [`for_project`](Self::for_project).
    pub fn load(store: &dyn SettingsStore, project_dir: &Path) -> Self {
        let mut profile = Self::for_project(project_dir);
        if let Some(wd) = store.get(WORKING_DIRECTORY_KEY) {
            profile.working_directory = PathBuf::from(wd);
        }
        if let Some(path) = store.get(SETTINGS_PATH_KEY) {
            profile.alternate_settings_path = PathBuf::from(path);
        }
        profile.use_alternate_settings = store
            .get(USE_SETTINGS_PATH_KEY)
            .map(|v| v == "true")
            .unwrap_or(false);
        if let Some(theme) = store.get(THEME_KEY) {
            profile.theme = theme;
        }
        profile
    }

    /// Persist the profile as flat store values.
    ///
    /// Values equal to their defaults are removed rather than written, so a
    /// freshly created run target leaves no trace in the store.
    pub fn save(&self, store: &mut dyn SettingsStore, project_dir: &Path) {
        if self.working_directory == project_dir {
            store.remove(WORKING_DIRECTORY_KEY);
        } else {
            store.set(
                WORKING_DIRECTORY_KEY,
                &self.working_directory.to_string_lossy(),
            );
        }

        if self.alternate_settings_path.as_os_str().is_empty() {
            store.remove(SETTINGS_PATH_KEY);
        } else {
            store.set(
                SETTINGS_PATH_KEY,
                &self.alternate_settings_path.to_string_lossy(),
            );
        }

        if self.use_alternate_settings {
            store.set(USE_SETTINGS_PATH_KEY, "true");
        } else {
            store.remove(USE_SETTINGS_PATH_KEY);
        }

        if self.theme.is_empty() {
            store.remove(THEME_KEY);
        } else {
            store.set(THEME_KEY, &self.theme);
        }
    }
}
