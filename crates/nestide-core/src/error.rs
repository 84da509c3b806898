//! Error types for the nested-IDE run-target core

use thiserror::Error;

use crate::validate::Permission;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Ambient error type for fallible infrastructure operations
/// (settings store IO, logging setup, theme scanning).
///
/// Validation failures are deliberately NOT part of this enum: they are
/// expected, user-correctable states carried by [`ValidationError`] and
/// never propagate as errors past the input field that produced them.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to launch nested IDE: {reason}")]
    LaunchFailed { reason: String },
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn launch_failed(reason: impl Into<String>) -> Self {
        Self::LaunchFailed {
            reason: reason.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Validation Taxonomy
// ─────────────────────────────────────────────────────────────────

/// Why a candidate path was rejected by the validation engine.
///
/// Exactly one of these is attached to an invalid verdict: checks run in a
/// fixed order (existence, kind, extension, permissions) and the first
/// failure wins. Display text is user-facing and shown verbatim next to the
/// offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("File \"{0}\" does not exist")]
    NotFound(String),

    #[error("Regular files are not accepted")]
    RegularFileRejected,

    #[error("Directories are not accepted")]
    DirectoryRejected,

    #[error("File does not have one of the required extensions")]
    ExtensionMismatch,

    #[error("File must be {}", .0.adjective())]
    PermissionMissing(Permission),
}

/// Which run-configuration field a refusal points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    WorkingDirectory,
    SettingsPath,
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldId::WorkingDirectory => write!(f, "working directory"),
            FieldId::SettingsPath => write!(f, "alternative settings path"),
        }
    }
}

/// Returned by a run request when the profile is not launchable.
///
/// Shown verbatim to whoever triggered the run or test action; never
/// silently dropped, never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaunchRefused {
    #[error("Cannot launch: {field} is invalid: {error}")]
    InvalidField {
        field: FieldId,
        error: ValidationError,
    },
}
