//! Application layer errors.
//!
//! These errors represent failures in orchestration: the target directory,
//! a generator strategy, a port adapter or the install step. Business rule
//! violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Reason recorded when the user declines the non-empty-directory prompt.
pub const CANCELLED_BY_USER: &str = "generation cancelled by user";

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Target directory is unsafe to write into and nobody agreed to proceed.
    #[error("Directory {path}: {reason}")]
    Directory { path: PathBuf, reason: String },

    /// A generator strategy failed mid-write. Partial output stays on disk.
    #[error("Generator '{generator}' failed: {reason}")]
    Generation { generator: String, reason: String },

    /// Dependency installation failed. Recoverable: the scaffold is valid.
    #[error("'{command}' failed: {reason}")]
    Install { command: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// No strategy registered under this architecture name.
    #[error("Architecture '{name}' is not recognized")]
    ArchitectureNotRecognized { name: String },

    /// No generator registered for this frontend framework.
    #[error("Frontend framework '{name}' has no generator")]
    FrontendNotRecognized { name: String },

    /// Reading an interactive answer failed.
    #[error("Prompt '{key}' failed: {reason}")]
    Prompt { key: String, reason: String },

    /// Interactive mode was required but no interactive prompter exists.
    #[error("Interactive prompts are not available: {reason}")]
    InteractiveUnavailable { reason: String },
}

impl ApplicationError {
    pub fn directory(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Directory {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn generation(generator: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Generation {
            generator: generator.into(),
            reason: reason.into(),
        }
    }

    pub fn filesystem(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Filesystem {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// True for the user-declined directory prompt.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Directory { reason, .. } if reason == CANCELLED_BY_USER)
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Directory { path, .. } => vec![
                format!("Target directory: {}", path.display()),
                "Use --yes to confirm writing into a non-empty directory".into(),
                "Use --force to skip the check entirely".into(),
                "Or choose another location with --directory".into(),
            ],
            Self::Generation { generator, .. } => vec![
                format!("The '{}' generator stopped part-way through", generator),
                "Files written before the failure were left on disk".into(),
                "Remove the partial output and run again".into(),
            ],
            Self::Install { command, .. } => vec![
                "The project was created; only dependency installation failed".into(),
                format!("Run manually: {}", command),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ArchitectureNotRecognized { .. } => vec![
                "Valid architectures: mvc, clean, hexagonal (alias: hexa)".into(),
                "Try: nexus list".into(),
            ],
            Self::FrontendNotRecognized { .. } => {
                vec!["Valid frontend frameworks: react, vue, angular".into()]
            }
            Self::Prompt { .. } => vec![
                "Run in a terminal, or pass flags such as --type to skip prompts".into(),
            ],
            Self::InteractiveUnavailable { .. } => vec![
                "Pass --type (or --model) to run without prompts".into(),
                "Or build with the 'interactive' feature enabled".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Directory { .. } if self.is_cancellation() => ErrorCategory::Cancelled,
            Self::Directory { .. } => ErrorCategory::Validation,
            Self::ArchitectureNotRecognized { .. } | Self::FrontendNotRecognized { .. } => {
                ErrorCategory::NotFound
            }
            Self::InteractiveUnavailable { .. } => ErrorCategory::Configuration,
            Self::Prompt { .. } => ErrorCategory::Cancelled,
            Self::Generation { .. } | Self::Install { .. } | Self::Filesystem { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}
