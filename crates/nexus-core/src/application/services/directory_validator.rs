//! Directory Validator - decides whether generation may write into a target.
//!
//! Read-only: it resolves and inspects the path but never creates it.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::application::{
    ApplicationError, CANCELLED_BY_USER,
    ports::{Filesystem, Prompter},
};
use crate::error::NexusResult;

/// Key of the overwrite confirmation question.
pub const CONFIRM_NON_EMPTY_KEY: &str = "confirm-non-empty";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectoryPolicy {
    /// Proceed into a non-empty directory without asking.
    pub auto_confirm: bool,
    /// Skip the non-empty check entirely.
    pub force: bool,
}

pub struct DirectoryValidator<'a> {
    fs: &'a dyn Filesystem,
    prompter: Option<&'a dyn Prompter>,
}

impl<'a> DirectoryValidator<'a> {
    pub fn new(fs: &'a dyn Filesystem, prompter: Option<&'a dyn Prompter>) -> Self {
        Self { fs, prompter }
    }

    /// Resolve `target` to an absolute path and check it is safe to write.
    ///
    /// A missing or empty directory always passes. A non-empty one passes
    /// with `force`, then with `auto_confirm`, otherwise only if the user
    /// confirms.
    #[instrument(skip_all, fields(target = %target.display()))]
    pub fn validate(&self, target: &Path, policy: DirectoryPolicy) -> NexusResult<PathBuf> {
        let path = std::path::absolute(target)
            .map_err(|e| ApplicationError::directory(target, e.to_string()))?;

        if !self.fs.exists(&path) {
            return Ok(path);
        }
        if !self.fs.is_dir(&path) {
            return Err(ApplicationError::directory(&path, "exists and is not a directory").into());
        }
        if self.fs.is_dir_empty(&path)? {
            return Ok(path);
        }

        if policy.force {
            info!("Target is not empty; continuing because of --force");
            return Ok(path);
        }
        if policy.auto_confirm {
            info!("Target is not empty; continuing because of --yes");
            return Ok(path);
        }

        let Some(prompter) = self.prompter else {
            return Err(ApplicationError::directory(
                &path,
                "directory is not empty (pass --yes or --force to continue)",
            )
            .into());
        };

        let message = format!(
            "Directory {} is not empty. Continue and write into it?",
            path.display()
        );
        if prompter.confirm(CONFIRM_NON_EMPTY_KEY, &message, false)? {
            Ok(path)
        } else {
            Err(ApplicationError::directory(&path, CANCELLED_BY_USER).into())
        }
    }
}
