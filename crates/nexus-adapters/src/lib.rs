//! Infrastructure adapters for Nexus.
//!
//! This crate implements the ports defined in `nexus_core::application::ports`:
//! filesystems, the built-in architecture and frontend generators, a scripted
//! prompter and the package-manager installer. All I/O lives here or in the
//! binary.

pub mod filesystem;
pub mod generators;
pub mod installer;
pub mod prompter;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use generators::{builtin_frontends, builtin_registry};
pub use installer::ProcessInstaller;
pub use prompter::ScriptedPrompter;
