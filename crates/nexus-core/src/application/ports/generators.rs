//! Generator strategy ports.
//!
//! Architecture strategies and frontend generators are independent tagged
//! implementations behind one capability set each. The dispatcher only ever
//! calls `generate`; the finer-grained capabilities exist so listings and
//! tests can inspect a strategy without touching a filesystem.

use std::path::Path;

use serde::Serialize;

use crate::application::{ApplicationError, ports::output::Filesystem};
use crate::domain::{
    FrontendFramework, Manifest, ProjectConfig, ProjectStructure, RelativePath, RenderContext,
};
use crate::error::NexusResult;

/// Name of the manifest file every generator emits.
pub const MANIFEST_FILE: &str = "package.json";

/// Static description of an architecture strategy, used by `nexus list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyDescriptor {
    pub name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

/// A backend architecture style (MVC, Clean, Hexagonal, ...).
#[cfg_attr(test, mockall::automock)]
pub trait ArchitectureStrategy: Send + Sync {
    fn descriptor(&self) -> StrategyDescriptor;

    /// Directories this style adds under the project root.
    fn directories(&self) -> Vec<&'static str>;

    /// The style's own manifest fragment.
    fn manifest(&self, config: &ProjectConfig) -> Manifest;

    /// Boilerplate files, rendered for `ctx`.
    fn files(&self, config: &ProjectConfig, ctx: &RenderContext) -> NexusResult<ProjectStructure>;

    /// Write directories and files under `target` and return the manifest
    /// fragment. The manifest itself is not written; the dispatcher owns the
    /// root `package.json`.
    fn generate(
        &self,
        fs: &dyn Filesystem,
        target: &Path,
        config: &ProjectConfig,
    ) -> NexusResult<Manifest> {
        let ctx = RenderContext::from_config(config);

        let mut structure = ProjectStructure::new();
        for dir in self.directories() {
            structure.add_directory(RelativePath::try_new(dir)?);
        }
        structure.extend(self.files(config, &ctx)?);
        structure.validate()?;

        fs.write_structure(target, &structure)?;
        Ok(self.manifest(config))
    }
}

/// A frontend framework generator (React, Vue, Angular, ...).
#[cfg_attr(test, mockall::automock)]
pub trait FrontendGenerator: Send + Sync {
    fn framework(&self) -> FrontendFramework;

    fn display_name(&self) -> &'static str;

    fn manifest(&self, config: &ProjectConfig) -> Manifest;

    /// Framework files plus the `frontend_architecture` folder layout.
    fn files(&self, config: &ProjectConfig, ctx: &RenderContext) -> NexusResult<ProjectStructure>;

    /// Write the frontend under `target`, including its own `package.json`,
    /// so an embedded frontend stays independently buildable.
    fn generate(
        &self,
        fs: &dyn Filesystem,
        target: &Path,
        config: &ProjectConfig,
    ) -> NexusResult<Manifest> {
        let ctx = RenderContext::from_config(config);

        let mut structure = self.files(config, &ctx)?;
        for folder in config.frontend_architecture.folders() {
            structure.add_directory(RelativePath::try_new("src")?.join(folder)?);
        }
        structure.validate()?;
        fs.write_structure(target, &structure)?;

        let manifest = self.manifest(config);
        let json = manifest
            .to_json_pretty()
            .map_err(|e| ApplicationError::generation(self.framework().as_str(), e.to_string()))?;
        fs.write_file(&target.join(MANIFEST_FILE), &json)?;

        Ok(manifest)
    }
}
