//! Nexus Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Nexus
//! Node.js project generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            nexus-cli (CLI)              │
//! │   flags + provenance, prompts, output   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  OptionResolver → DirectoryValidator →  │
//! │  GeneratorDispatcher → install          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │  Filesystem, Prompter, Installer,       │
//! │  Progress, ArchitectureStrategy,        │
//! │  FrontendGenerator                      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     nexus-adapters (Infrastructure)     │
//! │  LocalFilesystem, MVC/Clean/Hexagonal,  │
//! │  React/Vue/Angular, ProcessInstaller    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  ProjectConfig, Manifest + merge,       │
//! │  value objects, flag provenance         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nexus_core::prelude::*;
//!
//! let service = ScaffoldService::new(filesystem, registry, frontends, installer);
//! let report = service.scaffold(ScaffoldRequest {
//!     options: RawOptions {
//!         project_type: Flag::explicit("backend".into()),
//!         ..RawOptions::default()
//!     },
//!     ..ScaffoldRequest::default()
//! })?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, ArchitectureRegistry, FrontendCatalog, InstallOutcome, RawOptions,
        ResolutionMode, ScaffoldReport, ScaffoldRequest, ScaffoldService,
        ports::{
            ArchitectureStrategy, Choice, Filesystem, FrontendGenerator, InstallOutput,
            PackageInstaller, ProgressHandle, ProgressReporter, Prompter, StrategyDescriptor,
        },
    };
    pub use crate::domain::{
        Architecture, BackendRuntime, CssTool, Database, Flag, FrontendArchitecture,
        FrontendFramework, Manifest, PackageManager, ProjectConfig, ProjectStructure, ProjectType,
        Provenance, RelativePath, RenderContext,
    };
    pub use crate::error::{ErrorCategory, NexusError, NexusResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
