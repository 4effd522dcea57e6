//! End-to-end runs of `ScaffoldService` through the public API only, with
//! hand-written port implementations.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use nexus_core::prelude::*;

#[derive(Clone, Default)]
struct TreeFs {
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
    dirs: Arc<Mutex<BTreeSet<PathBuf>>>,
}

impl TreeFs {
    fn read(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(Path::new(path)).cloned()
    }
}

impl Filesystem for TreeFs {
    fn create_dir_all(&self, path: &Path) -> NexusResult<()> {
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in path.ancestors() {
            dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> NexusResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> NexusResult<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| ApplicationError::filesystem(path, "missing").into())
    }

    fn set_permissions(&self, _path: &Path, _executable: bool) -> NexusResult<()> {
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path) || self.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(path)
    }

    fn is_dir_empty(&self, path: &Path) -> NexusResult<bool> {
        let files = self.files.lock().unwrap();
        let dirs = self.dirs.lock().unwrap();
        Ok(!files.keys().any(|p| p.parent() == Some(path))
            && !dirs.iter().any(|p| p.parent() == Some(path)))
    }
}

struct Layered;

impl ArchitectureStrategy for Layered {
    fn descriptor(&self) -> StrategyDescriptor {
        StrategyDescriptor {
            name: "mvc",
            display_name: "Layered",
            description: "test strategy",
            features: &[],
        }
    }

    fn directories(&self) -> Vec<&'static str> {
        vec!["src/models", "src/controllers"]
    }

    fn manifest(&self, config: &ProjectConfig) -> Manifest {
        Manifest::new(config.project_name.clone(), "1.0.0")
            .with_script("dev", "nodemon src/server.js")
            .with_dependency("express", "^4.18.2")
            .with_dependency("axios", "^1.5.0")
    }

    fn files(&self, _config: &ProjectConfig, ctx: &RenderContext) -> NexusResult<ProjectStructure> {
        let readme = format!("# {}\n", ctx.get("PROJECT_NAME").unwrap_or_default());
        Ok(ProjectStructure::new().with_file(RelativePath::try_new("README.md")?, readme))
    }
}

struct Spa;

impl FrontendGenerator for Spa {
    fn framework(&self) -> FrontendFramework {
        FrontendFramework::React
    }

    fn display_name(&self) -> &'static str {
        "React"
    }

    fn manifest(&self, config: &ProjectConfig) -> Manifest {
        Manifest::new(format!("{}-client", config.project_name), "0.1.0")
            .with_script("dev", "vite")
            .with_dependency("react", "^18.2.0")
            .with_dependency("axios", "^1.6.0")
    }

    fn files(&self, _config: &ProjectConfig, _ctx: &RenderContext) -> NexusResult<ProjectStructure> {
        Ok(ProjectStructure::new().with_file(RelativePath::try_new("index.html")?, "<div></div>"))
    }
}

struct NoInstall;

impl PackageInstaller for NoInstall {
    fn install(&self, _: PackageManager, _: &Path, _: InstallOutput) -> NexusResult<()> {
        Ok(())
    }
}

fn service(fs: &TreeFs) -> ScaffoldService {
    let mut registry = ArchitectureRegistry::new();
    registry.register("mvc", Arc::new(Layered));
    let mut frontends = FrontendCatalog::new();
    frontends.register(Arc::new(Spa));

    ScaffoldService::new(
        Box::new(fs.clone()),
        Arc::new(registry),
        Arc::new(frontends),
        Box::new(NoInstall),
    )
}

fn direct(project_type: &str) -> ScaffoldRequest {
    ScaffoldRequest {
        options: RawOptions {
            project_type: Flag::explicit(project_type.into()),
            name: Flag::explicit("shop".into()),
            directory: Flag::explicit(PathBuf::from("/work/shop")),
            ..RawOptions::default()
        },
        ..ScaffoldRequest::default()
    }
}

#[test]
fn backend_run_writes_manifest_and_env() {
    let fs = TreeFs::default();
    let mut request = direct("backend");
    request.options.database = Flag::explicit("mongodb".into());

    let report = service(&fs).scaffold(request).unwrap();

    assert_eq!(report.mode, ResolutionMode::Direct);
    assert_eq!(report.install, InstallOutcome::Skipped);
    assert!(report.manifest.dependencies.contains_key("mongodb"));

    let written = Manifest::from_json(&fs.read("/work/shop/package.json").unwrap()).unwrap();
    assert_eq!(written, report.manifest);
    assert_eq!(fs.read("/work/shop/README.md").as_deref(), Some("# shop\n"));
    assert!(fs.read("/work/shop/.env").is_some());
    assert!(fs.is_dir(Path::new("/work/shop/src/controllers")));
}

#[test]
fn fullstack_run_merges_frontend_manifest() {
    let fs = TreeFs::default();
    let mut request = direct("fullstack");
    request.options.frontend = Flag::explicit("react".into());

    let report = service(&fs).scaffold(request).unwrap();

    let nested = report.nested_manifest.clone().unwrap();
    assert_eq!(nested, PathBuf::from("/work/shop/src/frontend/package.json"));
    assert!(fs.read(nested.to_str().unwrap()).is_some());

    let m = &report.manifest;
    assert_eq!(m.name, "shop");
    assert_eq!(m.scripts["dev"], "nodemon src/server.js");
    assert_eq!(m.scripts["frontend:dev"], "vite");
    assert_eq!(m.dependencies["axios"], "^1.6.0");
    assert_eq!(report.collisions.len(), 1);
    assert_eq!(report.collisions[0].key, "axios");
}

#[test]
fn misspelled_architecture_is_a_validation_error() {
    let fs = TreeFs::default();
    let mut request = direct("backend");
    request.options.model = Flag::explicit("onion".into());

    let err = service(&fs).scaffold(request).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Validation);
    assert!(err.is_pre_write());
    assert!(fs.files.lock().unwrap().is_empty());
}

#[test]
fn known_but_unregistered_architecture_is_not_found() {
    let fs = TreeFs::default();
    let mut request = direct("backend");
    request.options.model = Flag::explicit("clean".into());

    let err = service(&fs).scaffold(request).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::NotFound);
    assert!(fs.files.lock().unwrap().is_empty());
}

#[test]
fn interactive_run_without_prompter_is_a_configuration_error() {
    let fs = TreeFs::default();
    let err = service(&fs)
        .scaffold(ScaffoldRequest::default())
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Configuration);
}
