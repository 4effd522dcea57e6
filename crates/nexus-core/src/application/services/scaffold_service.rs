//! Scaffold Service - main application orchestrator.
//!
//! One run is strictly sequential:
//! 1. Resolve options into a `ProjectConfig`
//! 2. Validate the target directory
//! 3. Dispatch to the generators (fan-out + manifest merge)
//! 4. Optionally install dependencies; failure here is only a warning
//!
//! It implements the driving use case and uses the driven ports.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, info_span, warn};
use uuid::Uuid;

use crate::{
    application::{
        ApplicationError,
        ports::{
            Filesystem, InstallOutput, NoProgress, PackageInstaller, ProgressReporter, Prompter,
        },
        services::{
            ArchitectureRegistry, DirectoryPolicy, DirectoryValidator, DispatchOutcome,
            FrontendCatalog, GeneratorDispatcher, OptionResolver, RawOptions, RegistryEntry,
            ResolutionMode,
        },
    },
    domain::{Collision, Manifest, ProjectConfig},
    error::{NexusError, NexusResult},
};

/// Everything a front end hands over for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub options: RawOptions,
    /// `--yes`
    pub auto_confirm: bool,
    /// `--force`
    pub force: bool,
    /// `false` with `--no-install`
    pub install: bool,
    /// Stream the package manager's output instead of capturing it.
    pub verbose_install: bool,
}

/// Result of the optional install step.
#[derive(Debug, Clone, PartialEq)]
pub enum InstallOutcome {
    Skipped,
    Installed,
    /// Recoverable: the project exists, only installation failed.
    Failed {
        error: ApplicationError,
        manual_command: String,
    },
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldReport {
    pub run_id: Uuid,
    pub mode: ResolutionMode,
    pub config: ProjectConfig,
    pub manifest: Manifest,
    pub collisions: Vec<Collision>,
    pub nested_manifest: Option<PathBuf>,
    pub install: InstallOutcome,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    registry: Arc<ArchitectureRegistry>,
    frontends: Arc<FrontendCatalog>,
    installer: Box<dyn PackageInstaller>,
    prompter: Option<Box<dyn Prompter>>,
    progress: Box<dyn ProgressReporter>,
}

impl ScaffoldService {
    /// Create a service with no prompter and no progress display.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        registry: Arc<ArchitectureRegistry>,
        frontends: Arc<FrontendCatalog>,
        installer: Box<dyn PackageInstaller>,
    ) -> Self {
        Self {
            filesystem,
            registry,
            frontends,
            installer,
            prompter: None,
            progress: Box::new(NoProgress),
        }
    }

    pub fn with_prompter(mut self, prompter: Box<dyn Prompter>) -> Self {
        self.prompter = Some(prompter);
        self
    }

    pub fn with_progress(mut self, progress: Box<dyn ProgressReporter>) -> Self {
        self.progress = progress;
        self
    }

    /// Registered architectures, for listings.
    pub fn architectures(&self) -> Vec<RegistryEntry> {
        self.registry.list()
    }

    /// Run one resolve → validate → dispatch → install pass.
    pub fn scaffold(&self, request: ScaffoldRequest) -> NexusResult<ScaffoldReport> {
        let run_id = Uuid::new_v4();
        let span = info_span!("scaffold", %run_id);
        let _guard = span.enter();

        let prompter = self.prompter.as_deref();

        // 1. Resolve
        let resolution = OptionResolver::new(&self.registry, &self.frontends)
            .resolve(&request.options, prompter)?;
        let mode = resolution.mode;

        // 2. Validate directory. Direct mode never blocks on a prompt.
        let policy = DirectoryPolicy {
            auto_confirm: request.auto_confirm || mode.is_direct(),
            force: request.force,
        };
        let directory = DirectoryValidator::new(self.filesystem.as_ref(), prompter)
            .validate(&resolution.config.directory, policy)?;
        let config = resolution.config.with_directory(directory);

        info!(
            project = %config.project_name,
            project_type = %config.project_type,
            directory = %config.directory.display(),
            "Generating project"
        );

        // 3. Dispatch
        let outcome = {
            let progress = self.progress.start(&format!(
                "Generating {} project in {}...",
                config.project_type,
                config.directory.display()
            ));
            let outcome = GeneratorDispatcher::new(
                self.filesystem.as_ref(),
                &self.registry,
                &self.frontends,
            )
            .dispatch(&config)?;
            progress.finish("Project files generated");
            outcome
        };
        let DispatchOutcome {
            manifest,
            collisions,
            nested_manifest,
        } = outcome;

        // 4. Install (root only; the nested frontend shares the root install)
        let install = if request.install {
            self.install(&config, request.verbose_install)
        } else {
            info!("Skipping dependency installation (--no-install)");
            InstallOutcome::Skipped
        };

        info!("Scaffold completed successfully");
        Ok(ScaffoldReport {
            run_id,
            mode,
            config,
            manifest,
            collisions,
            nested_manifest,
            install,
        })
    }

    fn install(&self, config: &ProjectConfig, verbose: bool) -> InstallOutcome {
        let manager = config.package_manager;
        let output = if verbose {
            InstallOutput::Inherit
        } else {
            InstallOutput::Captured
        };
        let manual_command = format!(
            "cd {} && {}",
            config.directory.display(),
            manager.install_command()
        );

        let progress = self
            .progress
            .start(&format!("Installing dependencies with {manager}..."));
        match self.installer.install(manager, &config.directory, output) {
            Ok(()) => {
                progress.finish("Dependencies installed");
                InstallOutcome::Installed
            }
            Err(err) => {
                // Dropping the handle clears the indicator.
                drop(progress);
                let error = match err {
                    NexusError::Application(e @ ApplicationError::Install { .. }) => e,
                    other => ApplicationError::Install {
                        command: manager.install_command(),
                        reason: other.to_string(),
                    },
                };
                warn!(%error, "Dependency installation failed; project is still usable");
                InstallOutcome::Failed {
                    error,
                    manual_command,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::application::ports::{
        ArchitectureStrategy, MockArchitectureStrategy, MockFilesystem, MockPackageInstaller,
        MockProgressReporter, MockPrompter, ProgressHandle,
    };
    use crate::domain::{Flag, PackageManager};

    fn registry() -> Arc<ArchitectureRegistry> {
        let mut s = MockArchitectureStrategy::new();
        s.expect_generate()
            .returning(|_, _, _| Ok(Manifest::new("shop", "1.0.0")));
        let mut r = ArchitectureRegistry::new();
        r.register("mvc", Arc::new(s) as Arc<dyn ArchitectureStrategy>);
        Arc::new(r)
    }

    /// Filesystem where the target exists and is not empty.
    fn busy_fs() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_is_dir().return_const(true);
        fs.expect_is_dir_empty().returning(|_| Ok(false));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_structure().returning(|_, _| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs
    }

    fn direct_request(install: bool) -> ScaffoldRequest {
        ScaffoldRequest {
            options: RawOptions {
                project_type: Flag::explicit("backend".into()),
                name: Flag::explicit("shop".into()),
                directory: Flag::explicit(PathBuf::from("/work/shop")),
                ..RawOptions::default()
            },
            install,
            ..ScaffoldRequest::default()
        }
    }

    fn service(installer: MockPackageInstaller) -> ScaffoldService {
        ScaffoldService::new(
            Box::new(busy_fs()),
            registry(),
            Arc::new(FrontendCatalog::new()),
            Box::new(installer),
        )
    }

    #[test]
    fn direct_mode_auto_confirms_non_empty_directory() {
        let mut prompter = MockPrompter::new();
        prompter.expect_confirm().never();

        let report = service(MockPackageInstaller::new())
            .with_prompter(Box::new(prompter))
            .scaffold(direct_request(false))
            .unwrap();

        assert_eq!(report.mode, ResolutionMode::Direct);
        assert_eq!(report.config.directory, PathBuf::from("/work/shop"));
        assert_eq!(report.install, InstallOutcome::Skipped);
    }

    #[test]
    fn install_runs_in_root_with_captured_output() {
        let mut installer = MockPackageInstaller::new();
        installer
            .expect_install()
            .withf(|pm, dir, output| {
                *pm == PackageManager::Npm
                    && dir == std::path::Path::new("/work/shop")
                    && *output == InstallOutput::Captured
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let report = service(installer).scaffold(direct_request(true)).unwrap();
        assert_eq!(report.install, InstallOutcome::Installed);
    }

    #[test]
    fn install_failure_is_downgraded_to_outcome() {
        let mut installer = MockPackageInstaller::new();
        installer.expect_install().returning(|_, _, _| {
            Err(ApplicationError::Install {
                command: "npm install".into(),
                reason: "exit status: 1".into(),
            }
            .into())
        });

        let report = service(installer).scaffold(direct_request(true)).unwrap();
        match report.install {
            InstallOutcome::Failed { manual_command, .. } => {
                assert_eq!(manual_command, "cd /work/shop && npm install");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn validation_errors_happen_before_any_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file().never();
        fs.expect_write_structure().never();
        fs.expect_create_dir_all().never();

        let svc = ScaffoldService::new(
            Box::new(fs),
            registry(),
            Arc::new(FrontendCatalog::new()),
            Box::new(MockPackageInstaller::new()),
        );
        let mut request = direct_request(false);
        request.options.name = Flag::explicit("NOPE".into());

        let err = svc.scaffold(request).unwrap_err();
        assert!(err.is_pre_write());
    }

    struct Recorder(Arc<Mutex<Vec<String>>>);

    impl ProgressHandle for Recorder {
        fn finish(self: Box<Self>, message: &str) {
            self.0.lock().unwrap().push(format!("finish:{message}"));
        }
    }

    impl Drop for Recorder {
        fn drop(&mut self) {
            self.0.lock().unwrap().push("drop".into());
        }
    }

    #[test]
    fn progress_handle_is_released_on_failure() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let mut progress = MockProgressReporter::new();
        let sink = Arc::clone(&events);
        progress
            .expect_start()
            .returning(move |_| -> Box<dyn ProgressHandle> {
                Box::new(Recorder(Arc::clone(&sink)))
            });

        let mut s = MockArchitectureStrategy::new();
        s.expect_generate().returning(|_, _, _| {
            Err(ApplicationError::generation("mvc", "template missing").into())
        });
        let mut r = ArchitectureRegistry::new();
        r.register("mvc", Arc::new(s));

        let svc = ScaffoldService::new(
            Box::new(busy_fs()),
            Arc::new(r),
            Arc::new(FrontendCatalog::new()),
            Box::new(MockPackageInstaller::new()),
        )
        .with_progress(Box::new(progress));

        assert!(svc.scaffold(direct_request(false)).is_err());
        assert_eq!(*events.lock().unwrap(), vec!["drop".to_string()]);
    }
}
