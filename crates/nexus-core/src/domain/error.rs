// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use std::fmt;
use thiserror::Error;

use crate::error::ErrorCategory;

/// One field of a [`ProjectConfig`](crate::domain::ProjectConfig) that failed
/// its constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Root domain error type.
///
/// Both variants are raised before any filesystem side effect, so failing
/// with them is always safe.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid project configuration ({} problem(s)): {}", .violations.len(), join(.violations))]
    ConfigValidation { violations: Vec<FieldViolation> },

    #[error("unrecognized {field} '{value}' (expected one of: {})", .allowed.join(", "))]
    UnrecognizedValue {
        field: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },
}

fn join(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigValidation { violations } => {
                let mut out: Vec<String> = violations
                    .iter()
                    .map(|v| format!("Fix {}: {}", v.field, v.message))
                    .collect();
                if violations.iter().any(|v| v.field == "projectName") {
                    out.push(
                        "Project names use lowercase letters, digits and hyphens (3-50 chars)"
                            .into(),
                    );
                }
                out
            }
            Self::UnrecognizedValue { field, allowed, .. } => vec![
                format!("Valid values for --{}: {}", field, allowed.join(", ")),
                "Try: nexus list".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigValidation { .. } | Self::UnrecognizedValue { .. } => {
                ErrorCategory::Validation
            }
        }
    }

    /// The violated fields, in the order they were found.
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            Self::ConfigValidation { violations } => violations,
            Self::UnrecognizedValue { .. } => &[],
        }
    }
}
