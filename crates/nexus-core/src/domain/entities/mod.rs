pub mod common;
pub mod manifest;
pub mod project_config;
pub mod project_structure;
pub mod render_context;

pub use common::RelativePath;
pub use manifest::{Collision, Manifest, ManifestSection, MergeReport};
pub use project_config::ProjectConfig;
pub use project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure};
pub use render_context::RenderContext;
