//! Application layer for Nexus.
//!
//! This layer contains:
//! - **Services**: the resolve → validate → dispatch → install pipeline
//! - **Ports**: interface definitions (traits) for everything external
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but holds no business
//! rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ArchitectureRegistry, FrontendCatalog, InstallOutcome, OptionResolver, RawOptions,
    ResolutionMode, ScaffoldReport, ScaffoldRequest, ScaffoldService,
};

pub use ports::{
    ArchitectureStrategy, Choice, Filesystem, FrontendGenerator, InstallOutput, PackageInstaller,
    ProgressHandle, ProgressReporter, Prompter,
};

pub use error::{ApplicationError, CANCELLED_BY_USER};
