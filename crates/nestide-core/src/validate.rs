//! Path classification against a configurable rule set
//!
//! This module provides:
//! - [`PathRuleSet`] - immutable acceptance rules for one input field
//! - [`Verdict`] - the single authoritative validity state of a candidate
//! - [`validate()`] - the ordered classification function
//!
//! Checks run in a fixed order (existence, kind, extension, permissions) and
//! the first failure determines the verdict. The only side effects are
//! read-only filesystem metadata probes.

use std::fs;
use std::path::Path;

use crate::error::ValidationError;

/// Filesystem object kind relevant to acceptance rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    RegularFile,
    Directory,
}

/// A permission bit an input field may require on the candidate path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Read,
    Write,
    Execute,
}

impl Permission {
    /// Fixed probe order. Required permissions are always checked in this
    /// order, regardless of the order they were requested in.
    pub const CHECK_ORDER: [Permission; 3] =
        [Permission::Read, Permission::Write, Permission::Execute];

    /// Adjective used in user-facing messages ("File must be {adjective}").
    pub fn adjective(&self) -> &'static str {
        match self {
            Permission::Read => "readable",
            Permission::Write => "writable",
            Permission::Execute => "executable",
        }
    }
}

/// Acceptance rules for one path input field.
///
/// Constructed once when the field is set up and immutable thereafter.
/// The default rule set accepts any text: no existence requirement, both
/// object kinds, any extension, no permission requirements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRuleSet {
    require_existing: bool,
    accept_files: bool,
    accept_directories: bool,
    required_extensions: Vec<String>,
    required_permissions: Vec<Permission>,
}

impl Default for PathRuleSet {
    fn default() -> Self {
        Self {
            require_existing: false,
            accept_files: true,
            accept_directories: true,
            required_extensions: Vec::new(),
            required_permissions: Vec::new(),
        }
    }
}

impl PathRuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rule set for an existing, traversable directory: the path must exist,
    /// be a directory, and be readable and executable. Used for working
    /// directories and alternative settings directories.
    pub fn existing_directory() -> Self {
        Self::new()
            .require_existing(true)
            .accept_files(false)
            .require_permissions([Permission::Read, Permission::Execute])
    }

    pub fn require_existing(mut self, required: bool) -> Self {
        self.require_existing = required;
        self
    }

    pub fn accept_files(mut self, accept: bool) -> Self {
        self.accept_files = accept;
        self
    }

    pub fn accept_directories(mut self, accept: bool) -> Self {
        self.accept_directories = accept;
        self
    }

    /// Restrict acceptance to paths carrying one of the given extensions.
    ///
    /// Matching is ASCII case-insensitive and considers the component after
    /// the last dot of the file name, so `"json"` accepts `x.json` and
    /// `x.JSON` but not `x.yaml`. An empty list accepts any extension.
    pub fn with_required_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn require_permissions(mut self, permissions: impl IntoIterator<Item = Permission>) -> Self {
        self.required_permissions = permissions.into_iter().collect();
        self
    }

    pub fn allows_kind(&self, kind: PathKind) -> bool {
        match kind {
            PathKind::RegularFile => self.accept_files,
            PathKind::Directory => self.accept_directories,
        }
    }

    pub fn requires_permission(&self, permission: Permission) -> bool {
        self.required_permissions.contains(&permission)
    }

    fn extension_accepted(&self, path: &Path) -> bool {
        if self.required_extensions.is_empty() {
            return true;
        }
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.required_extensions
            .iter()
            .any(|required| required.eq_ignore_ascii_case(ext))
    }
}

/// Validity outcome of one classification, with at most one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(ValidationError),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(err) => Some(err),
        }
    }

    /// The user-facing message. Set iff the verdict is invalid.
    pub fn message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }
}

/// Classify a candidate path against a rule set.
///
/// Checks apply in strict order; the first failure wins and later checks are
/// not evaluated:
/// 1. existence (when required),
/// 2. object kind,
/// 3. extension,
/// 4. permissions in the order Read, Write, Execute.
///
/// Never panics and never returns an ambient error: empty or unresolvable
/// text (including symlink cycles, which the platform resolver reports as an
/// error) counts as "does not exist". A candidate that does not resolve to
/// an existing object is only subjected to the extension check, which is a
/// pure string operation.
pub fn validate(candidate: &str, rules: &PathRuleSet) -> Verdict {
    let path = Path::new(candidate);

    // fs::metadata follows symlinks with kernel-bounded resolution; any
    // failure (missing, ELOOP, empty text) is treated as non-existence.
    let metadata = if candidate.is_empty() {
        None
    } else {
        fs::metadata(path).ok()
    };

    let Some(metadata) = metadata else {
        if rules.require_existing {
            return Verdict::Invalid(ValidationError::NotFound(candidate.to_string()));
        }
        if !candidate.is_empty() && !rules.extension_accepted(path) {
            return Verdict::Invalid(ValidationError::ExtensionMismatch);
        }
        return Verdict::Valid;
    };

    if metadata.is_file() && !rules.allows_kind(PathKind::RegularFile) {
        return Verdict::Invalid(ValidationError::RegularFileRejected);
    }
    if metadata.is_dir() && !rules.allows_kind(PathKind::Directory) {
        return Verdict::Invalid(ValidationError::DirectoryRejected);
    }

    if !rules.extension_accepted(path) {
        return Verdict::Invalid(ValidationError::ExtensionMismatch);
    }

    for permission in Permission::CHECK_ORDER {
        if rules.requires_permission(permission) && !permission_granted(path, permission) {
            return Verdict::Invalid(ValidationError::PermissionMissing(permission));
        }
    }

    Verdict::Valid
}

/// Probe one permission bit on an existing path.
#[cfg(unix)]
fn permission_granted(path: &Path, permission: Permission) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(cpath) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    let mode = match permission {
        Permission::Read => libc::R_OK,
        Permission::Write => libc::W_OK,
        Permission::Execute => libc::X_OK,
    };
    // access(2) checks against the real uid/gid, matching what the user
    // could do from a shell.
    unsafe { libc::access(cpath.as_ptr(), mode) == 0 }
}

#[cfg(not(unix))]
fn permission_granted(path: &Path, permission: Permission) -> bool {
    match permission {
        Permission::Write => fs::metadata(path)
            .map(|m| !m.permissions().readonly())
            .unwrap_or(false),
        // Read and execute bits are not modeled by std on this platform;
        // an existing path is assumed probe-able.
        Permission::Read | Permission::Execute => path.exists(),
    }
}
