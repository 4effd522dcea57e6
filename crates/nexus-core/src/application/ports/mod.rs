//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `nexus-adapters` and the CLI
//! implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the application
//!   - `Filesystem`: file operations
//!   - `Prompter`: interactive questions
//!   - `PackageInstaller`: `<pm> install`
//!   - `ProgressReporter`: scoped progress indicators
//!
//! - **Strategy Ports**: pluggable generators looked up by the dispatcher
//!   - `ArchitectureStrategy`
//!   - `FrontendGenerator`

pub mod generators;
pub mod output;

pub use generators::{ArchitectureStrategy, FrontendGenerator, MANIFEST_FILE, StrategyDescriptor};
pub use output::{
    Choice, Filesystem, InstallOutput, NoProgress, PackageInstaller, ProgressHandle,
    ProgressReporter, Prompter,
};

#[cfg(test)]
pub use generators::{MockArchitectureStrategy, MockFrontendGenerator};
#[cfg(test)]
pub use output::{MockFilesystem, MockPackageInstaller, MockProgressReporter, MockPrompter};
