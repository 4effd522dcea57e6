// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Nexus.
//!
//! Pure data and rules: the resolved [`ProjectConfig`], the closed choice
//! sets it is built from, flag provenance, the dependency [`Manifest`] and
//! its merge rule. Everything that touches the disk, a terminal or a child
//! process lives behind ports in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: no filesystem, network or process calls
//! - **No logging**: results such as merge collisions are returned as data
//! - **Small dependency set**: std, thiserror, serde/serde_json for the
//!   manifest model, chrono for the template year
//! - **Immutable values**: all domain objects are `Clone + PartialEq`

pub mod entities;
pub mod error;
pub mod provenance;
pub mod value_objects;

pub use entities::{
    Collision, DirectoryToCreate, FileToWrite, FsEntry, Manifest, ManifestSection, MergeReport,
    ProjectConfig, ProjectStructure, RelativePath, RenderContext,
    manifest::merge as merge_manifests,
    project_config::{
        DEFAULT_AUTHOR, DEFAULT_DESCRIPTION, DEFAULT_PROJECT_NAME, RESERVED_NAMES,
        validate_project_name,
    },
};

pub use error::{DomainError, FieldViolation};

pub use provenance::{Flag, FlagName, FlagProvenance, Provenance};

pub use value_objects::{
    Architecture, BackendRuntime, CssTool, Database, FrontendArchitecture, FrontendFramework,
    PackageManager, ProjectType,
};
