use std::path::PathBuf;

use crate::domain::{
    error::{DomainError, FieldViolation},
    provenance::{FlagName, FlagProvenance},
    value_objects::{
        Architecture, BackendRuntime, CssTool, Database, FrontendArchitecture, FrontendFramework,
        PackageManager, ProjectType,
    },
};

/// Names that would shadow tooling or conventional folders.
pub const RESERVED_NAMES: [&str; 10] = [
    "node", "npm", "yarn", "pnpm", "package", "module", "test", "src", "dist", "build",
];

pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 50;
pub const DESCRIPTION_MAX_LEN: usize = 500;

pub const DEFAULT_PROJECT_NAME: &str = "my-nexus-project";
pub const DEFAULT_DESCRIPTION: &str = "Node.js project generated with Nexus CLI";
pub const DEFAULT_AUTHOR: &str = "Nexus Developer";

/// The single resolved configuration passed through one generation run.
///
/// Built once by the option resolver. The only derived copy is the one
/// [`embedded_frontend`](Self::embedded_frontend) makes for the nested
/// frontend of a fullstack project.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectConfig {
    pub project_name: String,
    pub description: String,
    pub author: String,
    pub package_manager: PackageManager,
    pub project_type: ProjectType,
    pub architecture: Architecture,
    pub backend: BackendRuntime,
    pub frontend_framework: Option<FrontendFramework>,
    pub css_tool: CssTool,
    pub database: Database,
    pub frontend_architecture: FrontendArchitecture,
    pub directory: PathBuf,
    pub flag_provenance: FlagProvenance,
    /// Set on the derived copy handed to a frontend nested in a backend root.
    pub embed_in_root: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.into(),
            description: DEFAULT_DESCRIPTION.into(),
            author: DEFAULT_AUTHOR.into(),
            package_manager: PackageManager::default(),
            project_type: ProjectType::default(),
            architecture: Architecture::default(),
            backend: BackendRuntime::default(),
            frontend_framework: None,
            css_tool: CssTool::default(),
            database: Database::default(),
            frontend_architecture: FrontendArchitecture::default(),
            directory: PathBuf::from("."),
            flag_provenance: FlagProvenance::default(),
            embed_in_root: false,
        }
    }
}

impl ProjectConfig {
    /// Check every field constraint and report all failures together.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut violations = validate_project_name(&self.project_name);

        if self.description.trim().is_empty() {
            violations.push(FieldViolation::new("description", "must not be empty"));
        }
        if self.author.trim().is_empty() {
            violations.push(FieldViolation::new("author", "must not be empty"));
        }
        if self.description.chars().count() > DESCRIPTION_MAX_LEN {
            violations.push(FieldViolation::new(
                "description",
                format!("must be at most {DESCRIPTION_MAX_LEN} characters"),
            ));
        }

        match (self.project_type.has_frontend(), self.frontend_framework) {
            (true, None) => violations.push(FieldViolation::new(
                "frontendFramework",
                format!(
                    "a {} project needs a frontend framework (react, vue or angular)",
                    self.project_type
                ),
            )),
            (false, Some(fw)) => violations.push(FieldViolation::new(
                "frontendFramework",
                format!("'{fw}' is not allowed for a backend project"),
            )),
            _ => {}
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(DomainError::ConfigValidation { violations })
        }
    }

    /// Derived copy for the frontend nested inside a fullstack root.
    ///
    /// The frontend layout follows the backend architecture unless the caller
    /// chose one explicitly.
    pub fn embedded_frontend(&self, directory: impl Into<PathBuf>) -> Self {
        let frontend_architecture = if self
            .flag_provenance
            .is_explicit(FlagName::FrontendArchitecture)
        {
            self.frontend_architecture
        } else {
            FrontendArchitecture::from(self.architecture)
        };

        Self {
            directory: directory.into(),
            frontend_architecture,
            embed_in_root: true,
            ..self.clone()
        }
    }

    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }
}

/// Name rules: `^[a-z0-9-]+$`, 3-50 characters, not a reserved word.
pub fn validate_project_name(name: &str) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    let len = name.chars().count();

    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
        violations.push(FieldViolation::new(
            "projectName",
            format!("must be between {NAME_MIN_LEN} and {NAME_MAX_LEN} characters (got {len})"),
        ));
    }
    if name.is_empty()
        || !name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        violations.push(FieldViolation::new(
            "projectName",
            "may only contain lowercase letters, digits and hyphens",
        ));
    }
    if RESERVED_NAMES.contains(&name) {
        violations.push(FieldViolation::new(
            "projectName",
            format!("'{name}' is a reserved name"),
        ));
    }

    violations
}
