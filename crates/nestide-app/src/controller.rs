//! Run-configuration controller
//!
//! Mediates every mutation of a [`LaunchProfile`] in response to discrete
//! UI events: working-directory edits, the alternative-settings toggle and
//! path, and theme selection. Each event is handled to completion before
//! the next one -- validation is a bounded synchronous probe, so there is
//! no background revalidation and nothing to cancel.
//!
//! The controller owns one profile and two validating path fields; the host
//! collaborators (chooser, settings store, target catalog) are injected,
//! never looked up in a global registry.

use std::path::{Path, PathBuf};

use nestide_core::error::{FieldId, LaunchRefused};
use nestide_core::prelude::*;
use nestide_core::validate::{PathRuleSet, Verdict};

use crate::command::{self, LaunchSpec};
use crate::field::PathInputField;
use crate::host::{FileChooser, SettingsStore, TargetCatalog};
use crate::profile::LaunchProfile;

/// Controller for one configured nested-IDE run target.
///
/// Commit policy: a setter that receives an invalid verdict still updates
/// the field text (so the UI can show the message) but withholds the value
/// from the profile, and the target stays unlaunchable until the offending
/// active field turns valid.
pub struct RunConfigurationController {
    project_dir: PathBuf,
    profile: LaunchProfile,
    working_directory_field: PathInputField,
    settings_path_field: PathInputField,
    catalog: Box<dyn TargetCatalog>,
}

impl RunConfigurationController {
    /// Create a controller for a run target configured inside `project_dir`.
    ///
    /// Both path fields validate against the existing-traversable-directory
    /// rule set; the working directory defaults to the project directory.
    pub fn new(project_dir: impl Into<PathBuf>, catalog: Box<dyn TargetCatalog>) -> Self {
        let project_dir = project_dir.into();
        let profile = LaunchProfile::for_project(&project_dir);
        let working_directory_field = PathInputField::with_text(
            PathRuleSet::existing_directory(),
            profile.working_directory.to_string_lossy().into_owned(),
        );
        let settings_path_field = PathInputField::new(PathRuleSet::existing_directory());
        Self {
            project_dir,
            profile,
            working_directory_field,
            settings_path_field,
            catalog,
        }
    }

    pub fn profile(&self) -> &LaunchProfile {
        &self.profile
    }

    pub fn working_directory_field(&self) -> &PathInputField {
        &self.working_directory_field
    }

    pub fn settings_path_field(&self) -> &PathInputField {
        &self.settings_path_field
    }

    // ─────────────────────────────────────────────────────────────
    // Mutation events
    // ─────────────────────────────────────────────────────────────

    pub fn set_working_directory(&mut self, text: impl Into<String>) -> &Verdict {
        if self.working_directory_field.set_text(text).is_valid() {
            self.profile.working_directory = PathBuf::from(self.working_directory_field.text());
            debug!(value = %self.profile.working_directory.display(), "working directory committed");
        }
        self.working_directory_field.verdict()
    }

    pub fn set_use_alternate_settings(&mut self, use_alternate: bool) {
        self.profile.use_alternate_settings = use_alternate;
        debug!(value = use_alternate, "alternative settings toggled");
    }

    pub fn set_alternate_settings_path(&mut self, text: impl Into<String>) -> &Verdict {
        if self.settings_path_field.set_text(text).is_valid() {
            self.profile.alternate_settings_path = PathBuf::from(self.settings_path_field.text());
            debug!(value = %self.profile.alternate_settings_path.display(), "settings path committed");
        }
        self.settings_path_field.verdict()
    }

    pub fn set_theme(&mut self, theme: impl Into<String>) {
        self.profile.theme = theme.into();
        debug!(value = %self.profile.theme, "theme selected");
    }

    /// Propose a working directory via the host's file chooser. Returns
    /// whether a path was chosen; a chosen valid path is committed.
    pub fn browse_working_directory(&mut self, chooser: &dyn FileChooser) -> bool {
        let chosen = self.working_directory_field.browse(chooser);
        if chosen && self.working_directory_field.is_valid() {
            self.profile.working_directory = PathBuf::from(self.working_directory_field.text());
        }
        chosen
    }

    /// Propose an alternative settings path via the host's file chooser.
    pub fn browse_alternate_settings_path(&mut self, chooser: &dyn FileChooser) -> bool {
        let chosen = self.settings_path_field.browse(chooser);
        if chosen && self.settings_path_field.is_valid() {
            self.profile.alternate_settings_path = PathBuf::from(self.settings_path_field.text());
        }
        chosen
    }

    // ─────────────────────────────────────────────────────────────
    // Launch requests
    // ─────────────────────────────────────────────────────────────

    /// Whether every active path field is valid. The settings-path field
    /// only counts while the alternative-settings toggle is on.
    pub fn is_launchable(&self) -> bool {
        self.first_invalid_field().is_none()
    }

    /// Materialize the launch spec for a normal run, or refuse with the
    /// first offending field.
    pub fn request_run(&self) -> std::result::Result<LaunchSpec, LaunchRefused> {
        self.ensure_launchable()?;
        Ok(command::build(
            &self.profile,
            &self.catalog.host_executable(),
            &self.catalog.target_name(),
            None,
        ))
    }

    /// Materialize the launch spec for a test run of `subject`.
    pub fn request_test_run(
        &self,
        subject: &str,
    ) -> std::result::Result<LaunchSpec, LaunchRefused> {
        self.ensure_launchable()?;
        Ok(command::build(
            &self.profile,
            &self.catalog.host_executable(),
            &self.catalog.target_name(),
            Some(subject),
        ))
    }

    fn ensure_launchable(&self) -> std::result::Result<(), LaunchRefused> {
        match self.first_invalid_field() {
            Some(refused) => {
                info!(%refused, "run request refused");
                Err(refused)
            }
            None => Ok(()),
        }
    }

    /// First offending field in field order: working directory, then the
    /// settings path (when active).
    fn first_invalid_field(&self) -> Option<LaunchRefused> {
        if let Some(error) = self.working_directory_field.verdict().error() {
            return Some(LaunchRefused::InvalidField {
                field: FieldId::WorkingDirectory,
                error: error.clone(),
            });
        }
        if self.profile.use_alternate_settings {
            if let Some(error) = self.settings_path_field.verdict().error() {
                return Some(LaunchRefused::InvalidField {
                    field: FieldId::SettingsPath,
                    error: error.clone(),
                });
            }
        }
        None
    }

    // ─────────────────────────────────────────────────────────────
    // Persistence
    // ─────────────────────────────────────────────────────────────

    /// Restore the profile from the host's settings store and resync both
    /// path fields to the restored values.
    pub fn load(&mut self, store: &dyn SettingsStore) {
        self.profile = LaunchProfile::load(store, &self.project_dir);
        self.working_directory_field
            .set_text(self.profile.working_directory.to_string_lossy().into_owned());
        self.settings_path_field.set_text(
            self.profile
                .alternate_settings_path
                .to_string_lossy()
                .into_owned(),
        );
    }

    /// Persist the profile to the host's settings store.
    pub fn save(&self, store: &mut dyn SettingsStore) {
        self.profile.save(store, &self.project_dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{ProcessHandle, ProcessLauncher};
    use crate::store::MemorySettingsStore;
    use nestide_core::error::ValidationError;
    use std::cell::RefCell;
    use tempfile::TempDir;

    struct FakeCatalog;

    impl TargetCatalog for FakeCatalog {
        fn host_executable(&self) -> PathBuf {
            PathBuf::from("/opt/ide/bin/ide")
        }

        fn target_name(&self) -> String {
            "MyPlugin".to_string()
        }

        fn test_subjects(&self) -> Vec<String> {
            vec!["MyTests".to_string()]
        }
    }

    struct FakeChooser {
        answer: Option<PathBuf>,
    }

    impl FileChooser for FakeChooser {
        fn choose(&self, _starting_path: &Path, _rules: &PathRuleSet) -> Option<PathBuf> {
            self.answer.clone()
        }
    }

    fn controller(project: &Path) -> RunConfigurationController {
        RunConfigurationController::new(project, Box::new(FakeCatalog))
    }

    #[test]
    fn test_new_controller_is_launchable_for_existing_project() {
        let project = TempDir::new().unwrap();
        let controller = controller(project.path());
        assert!(controller.is_launchable());
        assert_eq!(
            controller.profile().working_directory,
            project.path().to_path_buf()
        );
    }

    #[test]
    fn test_invalid_working_directory_blocks_launch_but_keeps_text() {
        let project = TempDir::new().unwrap();
        let mut controller = controller(project.path());

        let verdict = controller.set_working_directory("/tmp/nestide-missing").clone();
        assert!(!verdict.is_valid());
        // Text updated for display, profile untouched.
        assert_eq!(controller.working_directory_field().text(), "/tmp/nestide-missing");
        assert_eq!(
            controller.profile().working_directory,
            project.path().to_path_buf()
        );

        let refused = controller.request_run().unwrap_err();
        assert_eq!(
            refused,
            LaunchRefused::InvalidField {
                field: FieldId::WorkingDirectory,
                error: ValidationError::NotFound("/tmp/nestide-missing".to_string()),
            }
        );
    }

    #[test]
    fn test_inactive_invalid_settings_path_still_launchable() {
        // Scenario C
        let project = TempDir::new().unwrap();
        let mut controller = controller(project.path());

        controller.set_use_alternate_settings(false);
        let verdict = controller.set_alternate_settings_path("/no/such/dir").clone();
        assert!(!verdict.is_valid());

        assert!(controller.is_launchable());
        let spec = controller.request_run().unwrap();
        assert!(!spec.arguments.iter().any(|a| a == "-settings"));
    }

    #[test]
    fn test_active_invalid_settings_path_refuses_run() {
        let project = TempDir::new().unwrap();
        let mut controller = controller(project.path());

        controller.set_use_alternate_settings(true);
        controller.set_alternate_settings_path("/no/such/dir");

        assert!(!controller.is_launchable());
        let refused = controller.request_run().unwrap_err();
        assert_eq!(
            refused,
            LaunchRefused::InvalidField {
                field: FieldId::SettingsPath,
                error: ValidationError::NotFound("/no/such/dir".to_string()),
            }
        );
    }

    #[test]
    fn test_refusal_names_first_offending_field() {
        let project = TempDir::new().unwrap();
        let mut controller = controller(project.path());

        controller.set_working_directory("/tmp/nestide-missing");
        controller.set_use_alternate_settings(true);
        controller.set_alternate_settings_path("/no/such/dir");

        let refused = controller.request_run().unwrap_err();
        assert!(matches!(
            refused,
            LaunchRefused::InvalidField {
                field: FieldId::WorkingDirectory,
                ..
            }
        ));
    }

    #[test]
    fn test_test_run_appends_test_flag_after_settings_and_theme() {
        // Scenario D
        let project = TempDir::new().unwrap();
        let settings_dir = TempDir::new().unwrap();
        let mut controller = controller(project.path());

        controller.set_use_alternate_settings(true);
        let verdict = controller
            .set_alternate_settings_path(settings_dir.path().to_str().unwrap())
            .clone();
        assert!(verdict.is_valid());
        controller.set_theme("Dark");

        let spec = controller.request_test_run("MyTests").unwrap();
        assert_eq!(
            spec.arguments,
            vec![
                "-settings",
                settings_dir.path().to_str().unwrap(),
                "-theme",
                "Dark",
                "-test",
                "MyTests"
            ]
        );
        assert_eq!(spec.working_directory, project.path().to_path_buf());
        assert_eq!(spec.display_label, "Run nested IDE tests \"MyTests\"");
    }

    #[test]
    fn test_browse_commits_valid_chosen_directory() {
        let project = TempDir::new().unwrap();
        let chosen = TempDir::new().unwrap();
        let mut controller = controller(project.path());

        let chooser = FakeChooser {
            answer: Some(chosen.path().to_path_buf()),
        };
        assert!(controller.browse_working_directory(&chooser));
        assert_eq!(
            controller.profile().working_directory,
            chosen.path().to_path_buf()
        );

        let cancelled = FakeChooser { answer: None };
        assert!(!controller.browse_working_directory(&cancelled));
        assert_eq!(
            controller.profile().working_directory,
            chosen.path().to_path_buf()
        );
    }

    #[test]
    fn test_save_load_round_trip_resyncs_fields() {
        let project = TempDir::new().unwrap();
        let settings_dir = TempDir::new().unwrap();
        let mut controller = controller(project.path());

        controller.set_use_alternate_settings(true);
        controller.set_alternate_settings_path(settings_dir.path().to_str().unwrap());
        controller.set_theme("Dark");

        let mut store = MemorySettingsStore::new();
        controller.save(&mut store);

        let mut restored = RunConfigurationController::new(project.path(), Box::new(FakeCatalog));
        restored.load(&store);

        assert_eq!(restored.profile(), controller.profile());
        assert_eq!(
            restored.settings_path_field().text(),
            settings_dir.path().to_str().unwrap()
        );
        assert!(restored.is_launchable());
    }

    /// Launcher that records the spec it was handed.
    #[derive(Default)]
    struct FakeLauncher {
        launched: RefCell<Vec<LaunchSpec>>,
    }

    impl ProcessLauncher for FakeLauncher {
        fn launch(&self, spec: &LaunchSpec) -> nestide_core::Result<ProcessHandle> {
            self.launched.borrow_mut().push(spec.clone());
            Ok(ProcessHandle { pid: Some(4242) })
        }
    }

    #[test]
    fn test_materialized_spec_is_handed_to_launcher() {
        let project = TempDir::new().unwrap();
        let controller = controller(project.path());
        let launcher = FakeLauncher::default();

        let spec = controller.request_run().unwrap();
        let handle = launcher.launch(&spec).unwrap();

        assert_eq!(handle.pid, Some(4242));
        let launched = launcher.launched.borrow();
        assert_eq!(launched.len(), 1);
        assert_eq!(launched[0], spec);
    }

    #[test]
    fn test_run_and_test_labels_differ() {
        let project = TempDir::new().unwrap();
        let controller = controller(project.path());

        let run = controller.request_run().unwrap();
        let test = controller.request_test_run("MyTests").unwrap();
        assert_eq!(run.display_label, "Run nested IDE with \"MyPlugin\"");
        assert_eq!(test.display_label, "Run nested IDE tests \"MyTests\"");
        assert_ne!(run.display_label, test.display_label);
    }
}
