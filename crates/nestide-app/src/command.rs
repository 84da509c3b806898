//! Launch spec construction
//!
//! [`build`] deterministically derives the command-line invocation for the
//! nested IDE (or its test runner) from a [`LaunchProfile`]. It is pure:
//! no filesystem, no host collaborators, no hidden state, so the argument
//! policy can be tested in isolation from the controller.

use std::path::{Path, PathBuf};

use crate::profile::LaunchProfile;

/// Flag consumed by the nested instance to select a settings directory.
pub const SETTINGS_FLAG: &str = "-settings";
/// Flag consumed by the nested instance to select a theme.
pub const THEME_FLAG: &str = "-theme";
/// Flag consumed by the nested instance to run one test subject and exit.
pub const TEST_FLAG: &str = "-test";

/// Fully resolved invocation of the nested process. Ephemeral: produced per
/// run request, handed to the host's process launcher, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    pub executable_path: PathBuf,
    pub arguments: Vec<String>,
    pub working_directory: PathBuf,
    pub display_label: String,
}

impl LaunchSpec {
    /// Render the invocation as one shell-displayable line.
    ///
    /// Arguments containing spaces are quoted and embedded quotes escaped.
    /// Display only -- the authoritative form stays the argument vector.
    pub fn command_line(&self) -> String {
        let mut parts = vec![quote_for_display(&self.executable_path.to_string_lossy())];
        parts.extend(self.arguments.iter().map(|arg| quote_for_display(arg)));
        parts.join(" ")
    }
}

/// Derive the launch spec for `profile`.
///
/// Argument order is fixed: the settings flag pair when the alternative
/// settings toggle is on, then the theme flag pair when a theme is selected,
/// then the test flag pair when `test_subject` is present. The working
/// directory is passed through verbatim; defaulting happened at profile
/// creation. Callers must have confirmed launchability first.
pub fn build(
    profile: &LaunchProfile,
    host_executable: &Path,
    target_name: &str,
    test_subject: Option<&str>,
) -> LaunchSpec {
    let mut arguments = Vec::new();

    if profile.use_alternate_settings {
        arguments.push(SETTINGS_FLAG.to_string());
        arguments.push(profile.alternate_settings_path.to_string_lossy().into_owned());
    }

    if !profile.theme.is_empty() {
        arguments.push(THEME_FLAG.to_string());
        arguments.push(profile.theme.clone());
    }

    if let Some(subject) = test_subject {
        arguments.push(TEST_FLAG.to_string());
        arguments.push(subject.to_string());
    }

    let display_label = match test_subject {
        Some(subject) => format!("Run nested IDE tests \"{}\"", subject),
        None => format!("Run nested IDE with \"{}\"", target_name),
    };

    LaunchSpec {
        executable_path: host_executable.to_path_buf(),
        arguments,
        working_directory: profile.working_directory.clone(),
        display_label,
    }
}

/// Derive the test-subject identifier from a plugin library file name:
/// strip the `lib` prefix and everything from the first dot on, so
/// `libMyPlugin.so` becomes `MyPlugin`.
pub fn test_subject_from_target(target_file_name: &str) -> String {
    let name = target_file_name
        .strip_prefix("lib")
        .unwrap_or(target_file_name);
    name.split('.').next().unwrap_or(name).to_string()
}

fn quote_for_display(arg: &str) -> String {
    let escaped = arg.replace('"', "\\\"");
    if escaped.contains(' ') {
        format!("\"{}\"", escaped)
    } else {
        escaped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> LaunchProfile {
        LaunchProfile::for_project(Path::new("/work/project"))
    }

    #[test]
    fn test_default_profile_produces_no_arguments() {
        let spec = build(&profile(), Path::new("/opt/ide/bin/ide"), "MyPlugin", None);
        assert_eq!(spec.executable_path, PathBuf::from("/opt/ide/bin/ide"));
        assert!(spec.arguments.is_empty());
        assert_eq!(spec.working_directory, PathBuf::from("/work/project"));
        assert_eq!(spec.display_label, "Run nested IDE with \"MyPlugin\"");
    }

    #[test]
    fn test_full_argument_order() {
        // Scenario D: -settings, then -theme, then -test, in that order.
        let mut profile = profile();
        profile.use_alternate_settings = true;
        profile.alternate_settings_path = PathBuf::from("/etc/qtc-alt");
        profile.theme = "Dark".to_string();

        let spec = build(
            &profile,
            Path::new("/opt/ide/bin/ide"),
            "MyPlugin",
            Some("MyTests"),
        );
        assert_eq!(
            spec.arguments,
            vec!["-settings", "/etc/qtc-alt", "-theme", "Dark", "-test", "MyTests"]
        );
        assert_eq!(spec.display_label, "Run nested IDE tests \"MyTests\"");
    }

    #[test]
    fn test_inactive_settings_path_is_never_emitted() {
        // Scenario C: a stale settings path is ignored while the toggle is off.
        let mut profile = profile();
        profile.use_alternate_settings = false;
        profile.alternate_settings_path = PathBuf::from("/no/such/dir");
        profile.theme = "Dark".to_string();

        let spec = build(&profile, Path::new("/opt/ide/bin/ide"), "MyPlugin", None);
        assert_eq!(spec.arguments, vec!["-theme", "Dark"]);
        assert!(!spec.arguments.iter().any(|a| a == "/no/such/dir"));
    }

    #[test]
    fn test_working_directory_passed_through_verbatim() {
        let mut profile = profile();
        profile.working_directory = PathBuf::from("relative/dir");

        let spec = build(&profile, Path::new("/opt/ide/bin/ide"), "MyPlugin", None);
        assert_eq!(spec.working_directory, PathBuf::from("relative/dir"));
    }

    #[test]
    fn test_build_is_pure() {
        let mut profile = profile();
        profile.theme = "Flat".to_string();

        let first = build(&profile, Path::new("/opt/ide/bin/ide"), "P", Some("T"));
        let second = build(&profile, Path::new("/opt/ide/bin/ide"), "P", Some("T"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_command_line_quotes_spaces_and_escapes_quotes() {
        let mut profile = profile();
        profile.use_alternate_settings = true;
        profile.alternate_settings_path = PathBuf::from("/home/user/my settings");

        let spec = build(&profile, Path::new("/opt/ide/bin/ide"), "MyPlugin", None);
        assert_eq!(
            spec.command_line(),
            "/opt/ide/bin/ide -settings \"/home/user/my settings\""
        );

        let mut quoted = profile.clone();
        quoted.alternate_settings_path = PathBuf::from("/odd/\"dir\"");
        let spec = build(&quoted, Path::new("/opt/ide/bin/ide"), "MyPlugin", None);
        assert_eq!(
            spec.command_line(),
            "/opt/ide/bin/ide -settings /odd/\\\"dir\\\""
        );
    }

    #[test]
    fn test_test_subject_from_target() {
        assert_eq!(test_subject_from_target("libMyPlugin.so"), "MyPlugin");
        assert_eq!(test_subject_from_target("libMyPlugin.so.1.0"), "MyPlugin");
        assert_eq!(test_subject_from_target("MyPlugin.dll"), "MyPlugin");
        assert_eq!(test_subject_from_target("MyPlugin"), "MyPlugin");
    }
}
