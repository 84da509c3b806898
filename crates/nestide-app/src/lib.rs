//! # nestide-app - Run-Configuration State and Orchestration
//!
//! Everything between the host IDE's UI events and the launch of a nested
//! IDE instance:
//!
//! - [`field`] - validating path inputs ([`PathInputField`])
//! - [`profile`] - the persistent launch profile ([`LaunchProfile`])
//! - [`command`] - pure launch-spec construction ([`LaunchSpec`], [`build`])
//! - [`controller`] - event orchestration ([`RunConfigurationController`])
//! - [`host`] - collaborator traits the host injects
//! - [`store`] - settings-store adapters
//! - [`themes`] - theme catalog scanning
//!
//! The split between the pure command builder and the stateful controller
//! keeps the argument policy testable without any filesystem or UI
//! dependency.

pub mod command;
pub mod controller;
pub mod field;
pub mod host;
pub mod profile;
pub mod store;
pub mod themes;

pub use command::{build, test_subject_from_target, LaunchSpec, SETTINGS_FLAG, TEST_FLAG, THEME_FLAG};
pub use controller::RunConfigurationController;
pub use field::PathInputField;
pub use host::{FileChooser, ProcessHandle, ProcessLauncher, SettingsStore, TargetCatalog};
pub use profile::{
    LaunchProfile, SETTINGS_PATH_KEY, THEME_KEY, USE_SETTINGS_PATH_KEY, WORKING_DIRECTORY_KEY,
};
pub use store::{MemorySettingsStore, TomlSettingsStore};
pub use themes::{available_themes, DEFAULT_THEME, THEME_FILE_EXTENSION};
