//! Collaborator interfaces provided by the host IDE
//!
//! The core never touches the host's plugin registry, dialog machinery or
//! process supervisor directly. Everything it needs from the host comes in
//! through these narrow traits, injected at controller construction.

use std::path::{Path, PathBuf};

use nestide_core::prelude::*;
use nestide_core::validate::PathRuleSet;

use crate::command::LaunchSpec;

/// Opaque handle to a spawned nested-IDE process. The core never inspects
/// process lifetime; the pid is carried for logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessHandle {
    pub pid: Option<u32>,
}

/// Modal file chooser. `None` means the user cancelled, which is a normal
/// outcome rather than an error.
pub trait FileChooser {
    fn choose(&self, starting_path: &Path, rules: &PathRuleSet) -> Option<PathBuf>;
}

/// Spawns the nested process described by a [`LaunchSpec`].
pub trait ProcessLauncher {
    fn launch(&self, spec: &LaunchSpec) -> Result<ProcessHandle>;
}

/// Flat key/value persistence for run-configuration fields. The host owns
/// the on-disk format; the core only reads and writes field-level strings.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Supplies per-target launch inputs: the host IDE's own executable, the
/// configured target's name, and the test-subject identifiers the target
/// exposes. All of these are opaque strings to the core.
pub trait TargetCatalog {
    fn host_executable(&self) -> PathBuf;
    fn target_name(&self) -> String;
    fn test_subjects(&self) -> Vec<String>;
}
