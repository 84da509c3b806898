//! # nestide-core - Core Domain Types
//!
//! Foundation crate for Nestide, a run-target toolkit for launching a nested
//! instance of the host IDE. Provides the path-validation engine, the
//! user-facing error taxonomy, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (thiserror, tracing and its subscriber stack, dirs,
//! libc on unix).
//!
//! ## Public API
//!
//! ### Validation (`validate`)
//! - [`PathRuleSet`] - immutable acceptance rules for one path input
//! - [`PathKind`], [`Permission`] - filesystem object kinds and permission bits
//! - [`Verdict`] - Valid, or Invalid with exactly one message
//! - [`validate()`] - ordered classification of a candidate path
//!
//! ### Error Handling (`error`)
//! - [`Error`] - ambient error enum for infrastructure operations
//! - [`Result`] - type alias for `std::result::Result<T, Error>`
//! - [`ValidationError`] - why a candidate path was rejected
//! - [`LaunchRefused`] - why a run request was refused, naming the field
//!
//! ### Logging (`logging`)
//! - [`logging::init()`] - rolling file subscriber controlled by `NESTIDE_LOG`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use nestide_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod validate;

/// Prelude for common imports used throughout all Nestide crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, FieldId, LaunchRefused, Result, ValidationError};
pub use validate::{validate, PathKind, PathRuleSet, Permission, Verdict};
