//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! The `nexus-adapters` crate and the `nexus` binary provide implementations.

use std::path::Path;

use crate::domain::{FsEntry, PackageManager, ProjectStructure};
use crate::error::NexusResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `nexus_adapters::filesystem::LocalFilesystem` (production)
/// - `nexus_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> NexusResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> NexusResult<()>;

    /// Read a whole file as UTF-8.
    fn read_file(&self, path: &Path) -> NexusResult<String>;

    /// Mark a file executable (no-op where unsupported).
    fn set_permissions(&self, path: &Path, executable: bool) -> NexusResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Whether a directory has no entries. Errors if it cannot be listed.
    fn is_dir_empty(&self, path: &Path) -> NexusResult<bool>;

    /// Materialise a generator's structure under `root`, in entry order.
    ///
    /// Stops at the first failure and leaves whatever was written.
    fn write_structure(&self, root: &Path, structure: &ProjectStructure) -> NexusResult<()> {
        self.create_dir_all(root)?;

        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    self.create_dir_all(&root.join(&dir.path))?;
                }
                FsEntry::File(file) => {
                    let path = root.join(&file.path);
                    if let Some(parent) = path.parent() {
                        self.create_dir_all(parent)?;
                    }
                    self.write_file(&path, &file.content)?;
                    if file.executable {
                        self.set_permissions(&path, true)?;
                    }
                }
            }
        }

        Ok(())
    }
}

/// One option offered by [`Prompter::select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Port for interactive questions.
///
/// Every question carries a stable `key` so scripted prompters can answer by
/// key and tests can assert which questions were asked.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Pick one of `choices`; returns the chosen `value`.
    fn select(
        &self,
        key: &str,
        message: &str,
        choices: &[Choice],
        default: usize,
    ) -> NexusResult<String>;

    /// Free-text answer; an empty answer yields `default`.
    fn input(&self, key: &str, message: &str, default: &str) -> NexusResult<String>;

    /// Yes/no answer.
    fn confirm(&self, key: &str, message: &str, default: bool) -> NexusResult<bool>;
}

/// How the package manager's own output is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutput {
    /// Stream straight to the user's terminal.
    Inherit,
    /// Capture and only report on failure.
    Captured,
}

/// Port for running `<package manager> install`.
#[cfg_attr(test, mockall::automock)]
pub trait PackageInstaller: Send + Sync {
    fn install(
        &self,
        manager: PackageManager,
        directory: &Path,
        output: InstallOutput,
    ) -> NexusResult<()>;
}

/// A running progress indicator owned by one operation.
///
/// Dropping the handle without calling [`finish`](Self::finish) must clear the
/// indicator, so it disappears on every exit path.
pub trait ProgressHandle {
    /// Mark the operation as successful and release the indicator.
    fn finish(self: Box<Self>, message: &str);
}

/// Port for starting scoped progress indicators.
#[cfg_attr(test, mockall::automock)]
pub trait ProgressReporter: Send + Sync {
    fn start(&self, message: &str) -> Box<dyn ProgressHandle>;
}

/// Reporter that shows nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

struct NoProgressHandle;

impl ProgressHandle for NoProgressHandle {
    fn finish(self: Box<Self>, _message: &str) {}
}

impl ProgressReporter for NoProgress {
    fn start(&self, _message: &str) -> Box<dyn ProgressHandle> {
        Box::new(NoProgressHandle)
    }
}
