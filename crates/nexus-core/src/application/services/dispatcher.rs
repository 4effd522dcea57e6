//! Generator Dispatcher - routes one resolved config to its generators.
//!
//! | project type | work done                                                |
//! |--------------|----------------------------------------------------------|
//! | backend      | base layout, architecture strategy, DB driver, env files |
//! | frontend     | frontend generator against the root                      |
//! | fullstack    | backend path, then frontend nested in `src/frontend`,    |
//! |              | then the nested manifest is merged into the root one     |
//!
//! A failing sub-generator aborts the run. Files it already wrote stay on
//! disk; there is no rollback.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::application::{
    ApplicationError,
    ports::{Filesystem, MANIFEST_FILE},
    services::{ArchitectureRegistry, FrontendCatalog},
};
use crate::domain::{
    Collision, Manifest, ProjectConfig, ProjectStructure, ProjectType, RelativePath,
    merge_manifests,
};
use crate::error::{NexusError, NexusResult};

/// Where a fullstack project embeds its frontend, relative to the root.
pub const EMBEDDED_FRONTEND_DIR: &str = "src/frontend";

/// Directories every backend gets before its architecture strategy runs.
pub const BASE_LAYOUT: [&str; 10] = [
    "src",
    "public/css",
    "public/js",
    "public/images",
    "tests/unit",
    "tests/integration",
    "tests/e2e",
    "docs",
    "logs",
    "scripts",
];

pub const ENV_EXAMPLE_FILE: &str = ".env.example";
pub const ENV_FILE: &str = ".env";

/// What one dispatch produced.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchOutcome {
    /// The manifest written at the project root.
    pub manifest: Manifest,
    /// Dependency keys where the nested frontend overrode the backend.
    pub collisions: Vec<Collision>,
    /// Path of the embedded frontend's own manifest (fullstack only).
    pub nested_manifest: Option<PathBuf>,
}

pub struct GeneratorDispatcher<'a> {
    fs: &'a dyn Filesystem,
    registry: &'a ArchitectureRegistry,
    frontends: &'a FrontendCatalog,
}

impl<'a> GeneratorDispatcher<'a> {
    pub fn new(
        fs: &'a dyn Filesystem,
        registry: &'a ArchitectureRegistry,
        frontends: &'a FrontendCatalog,
    ) -> Self {
        Self {
            fs,
            registry,
            frontends,
        }
    }

    /// Run the generators for `config.project_type` into `config.directory`.
    #[instrument(
        skip_all,
        fields(
            project_type = %config.project_type,
            root = %config.directory.display()
        )
    )]
    pub fn dispatch(&self, config: &ProjectConfig) -> NexusResult<DispatchOutcome> {
        let root = config.directory.as_path();

        match config.project_type {
            ProjectType::Backend => {
                let manifest = self.generate_backend(root, config)?;
                self.write_manifest(root, &manifest)?;
                Ok(DispatchOutcome {
                    manifest,
                    collisions: Vec::new(),
                    nested_manifest: None,
                })
            }
            ProjectType::Frontend => {
                // The frontend generator writes its own package.json.
                let manifest = self.generate_frontend(root, config)?;
                Ok(DispatchOutcome {
                    manifest,
                    collisions: Vec::new(),
                    nested_manifest: None,
                })
            }
            ProjectType::Fullstack => self.generate_fullstack(root, config),
        }
    }

    fn generate_fullstack(
        &self,
        root: &Path,
        config: &ProjectConfig,
    ) -> NexusResult<DispatchOutcome> {
        let backend_manifest = self.generate_backend(root, config)?;

        let nested_root = root.join(EMBEDDED_FRONTEND_DIR);
        self.fs.create_dir_all(&nested_root)?;
        let nested_config = config.embedded_frontend(&nested_root);
        self.generate_frontend(&nested_root, &nested_config)?;

        // Merge what is on disk, so the nested manifest is exactly the file
        // the embedded frontend builds with.
        let nested_path = nested_root.join(MANIFEST_FILE);
        let raw = self.fs.read_file(&nested_path)?;
        let nested_manifest = Manifest::from_json(&raw)
            .map_err(|e| ApplicationError::generation("manifest-merge", e.to_string()))?;

        let report = merge_manifests(backend_manifest, &nested_manifest);
        for c in &report.collisions {
            warn!(
                section = c.section.as_str(),
                key = %c.key,
                backend = %c.root_value,
                frontend = %c.nested_value,
                "Frontend manifest overrides backend entry"
            );
        }

        self.write_manifest(root, &report.manifest)?;
        info!(
            dependencies = report.manifest.dependencies.len(),
            scripts = report.manifest.scripts.len(),
            "Merged frontend manifest into root"
        );

        Ok(DispatchOutcome {
            manifest: report.manifest,
            collisions: report.collisions,
            nested_manifest: Some(nested_path),
        })
    }

    /// Base layout, strategy output, DB driver and env files. The manifest is
    /// returned unwritten.
    fn generate_backend(&self, root: &Path, config: &ProjectConfig) -> NexusResult<Manifest> {
        let name = config.architecture.as_str();
        let strategy = self
            .registry
            .get(name)
            .ok_or_else(|| ApplicationError::ArchitectureNotRecognized { name: name.into() })?;

        let mut base = ProjectStructure::new();
        for dir in BASE_LAYOUT {
            base.add_directory(RelativePath::try_new(dir)?);
        }
        self.fs
            .write_structure(root, &base)
            .map_err(|e| as_generation_error("base-layout", e))?;

        info!(architecture = name, "Running architecture strategy");
        let mut manifest = strategy
            .generate(self.fs, root, config)
            .map_err(|e| as_generation_error(name, e))?;

        if manifest.inject_database_driver(config.database) {
            debug!(database = %config.database, "Injected database driver");
        }

        let env = env_template(config);
        self.fs.write_file(&root.join(ENV_EXAMPLE_FILE), &env)?;
        let env_path = root.join(ENV_FILE);
        if self.fs.exists(&env_path) {
            debug!("Keeping existing .env");
        } else {
            self.fs.write_file(&env_path, &env)?;
        }

        Ok(manifest)
    }

    fn generate_frontend(&self, target: &Path, config: &ProjectConfig) -> NexusResult<Manifest> {
        let framework = config.frontend_framework.ok_or_else(|| {
            ApplicationError::generation("frontend", "no frontend framework was resolved")
        })?;
        let generator = self.frontends.get(framework).ok_or_else(|| {
            ApplicationError::FrontendNotRecognized {
                name: framework.to_string(),
            }
        })?;

        info!(
            %framework,
            layout = %config.frontend_architecture,
            embedded = config.embed_in_root,
            "Running frontend generator"
        );
        generator
            .generate(self.fs, target, config)
            .map_err(|e| as_generation_error(framework.as_str(), e))
    }

    fn write_manifest(&self, root: &Path, manifest: &Manifest) -> NexusResult<()> {
        let json = manifest
            .to_json_pretty()
            .map_err(|e| ApplicationError::generation("manifest", e.to_string()))?;
        self.fs.write_file(&root.join(MANIFEST_FILE), &json)
    }
}

/// Environment template: server defaults plus the database connection keys.
pub fn env_template(config: &ProjectConfig) -> String {
    let mut lines = vec![
        "# Server".to_string(),
        "PORT=3000".to_string(),
        "NODE_ENV=development".to_string(),
    ];
    let db = config.database.env_lines(&config.project_name);
    if !db.is_empty() {
        lines.push(String::new());
        lines.extend(db);
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Filesystem failures inside a generator become generation errors; errors
/// that already say what went wrong pass through.
fn as_generation_error(generator: &str, err: NexusError) -> NexusError {
    match err {
        NexusError::Application(ApplicationError::Filesystem { path, reason }) => {
            ApplicationError::generation(generator, format!("{}: {}", path.display(), reason))
                .into()
        }
        other => other,
    }
}
