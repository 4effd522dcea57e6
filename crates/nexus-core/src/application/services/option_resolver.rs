//! Option Resolver - one canonical `ProjectConfig` from raw input.
//!
//! Two modes:
//!
//! - **Direct**: some v2-surface flag (`type`, `frontend`, `backend`,
//!   `database`) was typed explicitly, or the legacy `--model` was given.
//!   Every field comes from its flag or a fixed default; nothing is asked.
//! - **Interactive**: questions are asked in order: project type, the
//!   stack-specific questions, then project metadata. Explicit non-surface
//!   flags (say `--name`) answer their own question and skip it.
//!
//! A flag carrying a tool default (`Provenance::Default`) never selects
//! direct mode; it only pre-selects the default answer of its question.

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::{debug, info, instrument, warn};

use crate::application::{
    ApplicationError,
    ports::{Choice, Prompter},
    services::{ArchitectureRegistry, FrontendCatalog},
};
use crate::domain::{
    Architecture, BackendRuntime, CssTool, DEFAULT_AUTHOR, DEFAULT_DESCRIPTION,
    DEFAULT_PROJECT_NAME, Database, DomainError, Flag, FlagName, FlagProvenance,
    FrontendArchitecture, FrontendFramework, PackageManager, ProjectConfig, ProjectType,
    Provenance,
};
use crate::error::NexusResult;

/// Raw option values with their provenance, as handed over by a front end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOptions {
    pub model: Flag<String>,
    pub project_type: Flag<String>,
    pub frontend: Flag<String>,
    pub css: Flag<String>,
    pub frontend_architecture: Flag<String>,
    pub backend: Flag<String>,
    pub database: Flag<String>,
    pub name: Flag<String>,
    pub description: Flag<String>,
    pub author: Flag<String>,
    pub package_manager: Flag<String>,
    pub directory: Flag<PathBuf>,
}

impl RawOptions {
    pub fn provenance(&self) -> FlagProvenance {
        let mut p = FlagProvenance::new();
        p.set(FlagName::Model, self.model.provenance);
        p.set(FlagName::Type, self.project_type.provenance);
        p.set(FlagName::Frontend, self.frontend.provenance);
        p.set(FlagName::Css, self.css.provenance);
        p.set(FlagName::FrontendArchitecture, self.frontend_architecture.provenance);
        p.set(FlagName::Backend, self.backend.provenance);
        p.set(FlagName::Database, self.database.provenance);
        p.set(FlagName::Name, self.name.provenance);
        p.set(FlagName::Description, self.description.provenance);
        p.set(FlagName::Author, self.author.provenance);
        p.set(FlagName::PackageManager, self.package_manager.provenance);
        p.set(FlagName::Directory, self.directory.provenance);
        p
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionMode {
    Direct,
    Interactive,
}

impl ResolutionMode {
    /// Only explicit flags take part in this decision.
    pub fn select(raw: &RawOptions) -> Self {
        if raw.provenance().any_v2_explicit() || raw.model.explicit_value().is_some() {
            Self::Direct
        } else {
            Self::Interactive
        }
    }

    pub const fn is_direct(self) -> bool {
        matches!(self, Self::Direct)
    }
}

/// Resolved configuration and the mode that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub mode: ResolutionMode,
    pub config: ProjectConfig,
}

pub struct OptionResolver<'a> {
    registry: &'a ArchitectureRegistry,
    frontends: &'a FrontendCatalog,
}

impl<'a> OptionResolver<'a> {
    pub fn new(registry: &'a ArchitectureRegistry, frontends: &'a FrontendCatalog) -> Self {
        Self {
            registry,
            frontends,
        }
    }

    /// Resolve and validate.
    ///
    /// Unrecognized enum values fail first; field validation then reports
    /// every violated field at once.
    #[instrument(skip_all)]
    pub fn resolve(
        &self,
        raw: &RawOptions,
        prompter: Option<&dyn Prompter>,
    ) -> NexusResult<Resolution> {
        let mode = ResolutionMode::select(raw);
        info!(?mode, "Resolving project options");

        let config = match mode {
            ResolutionMode::Direct => self.resolve_direct(raw)?,
            ResolutionMode::Interactive => {
                let prompter = prompter.ok_or_else(|| ApplicationError::InteractiveUnavailable {
                    reason: "no flags selected direct mode and no prompter is configured".into(),
                })?;
                self.resolve_interactive(raw, prompter)?
            }
        };

        config.validate()?;
        debug!(?config, "Resolved configuration");
        Ok(Resolution { mode, config })
    }

    // -------------------------------------------------------------------------
    // Direct mode
    // -------------------------------------------------------------------------

    fn resolve_direct(&self, raw: &RawOptions) -> NexusResult<ProjectConfig> {
        let project_type = parse_or(&raw.project_type, ProjectType::Backend)?;

        let architecture = match raw.model.value.as_deref() {
            Some(model) => self.canonical_architecture(model)?,
            None => Architecture::Mvc,
        };

        let frontend_framework = if project_type.has_frontend() {
            raw.frontend
                .value
                .as_deref()
                .map(str::parse::<FrontendFramework>)
                .transpose()?
        } else {
            if let Some(frontend) = raw.frontend.explicit_value() {
                warn!(%frontend, "Ignoring --frontend for a backend project");
            }
            None
        };

        Ok(ProjectConfig {
            project_name: text_or(&raw.name, DEFAULT_PROJECT_NAME),
            description: text_or(&raw.description, DEFAULT_DESCRIPTION),
            author: text_or(&raw.author, DEFAULT_AUTHOR),
            package_manager: parse_or(&raw.package_manager, PackageManager::Npm)?,
            project_type,
            architecture,
            backend: parse_or(&raw.backend, BackendRuntime::Node)?,
            frontend_framework,
            css_tool: parse_or(&raw.css, CssTool::None)?,
            database: parse_or(&raw.database, Database::None)?,
            frontend_architecture: parse_or(
                &raw.frontend_architecture,
                FrontendArchitecture::Default,
            )?,
            directory: directory_of(raw),
            flag_provenance: raw.provenance(),
            embed_in_root: false,
        })
    }

    // -------------------------------------------------------------------------
    // Interactive mode
    // -------------------------------------------------------------------------

    fn resolve_interactive(
        &self,
        raw: &RawOptions,
        prompter: &dyn Prompter,
    ) -> NexusResult<ProjectConfig> {
        let mut asked = Questionnaire {
            prompter,
            provenance: raw.provenance(),
        };

        let project_type = asked.choose(
            FlagName::Type,
            &raw.project_type,
            "What kind of project do you want to create?",
            &ProjectType::ALL,
            ProjectType::Backend,
            |t| match t {
                ProjectType::Backend => "Backend (Node.js API)".into(),
                ProjectType::Frontend => "Frontend (single-page app)".into(),
                ProjectType::Fullstack => "Fullstack (backend + embedded frontend)".into(),
            },
        )?;

        let mut architecture = Architecture::Mvc;
        let mut frontend_framework = None;
        let mut css_tool = parse_or(&raw.css, CssTool::None)?;
        let mut database = parse_or(&raw.database, Database::None)?;
        let mut frontend_architecture =
            parse_or(&raw.frontend_architecture, FrontendArchitecture::Default)?;

        match project_type {
            ProjectType::Backend => {
                database = asked.choose_database(raw)?;
                architecture = self.choose_architecture(&mut asked, raw)?;
            }
            ProjectType::Frontend => {
                frontend_framework = Some(self.choose_framework(&mut asked, raw)?);
                css_tool = asked.choose_css(raw)?;
                frontend_architecture = asked.choose(
                    FlagName::FrontendArchitecture,
                    &raw.frontend_architecture,
                    "Which folder layout for the frontend?",
                    &FrontendArchitecture::ALL,
                    FrontendArchitecture::Default,
                    |a| match a {
                        FrontendArchitecture::Default => "Default (framework layout only)".into(),
                        other => format!("{} folders: {}", other, other.folders().join(", ")),
                    },
                )?;
            }
            ProjectType::Fullstack => {
                frontend_framework = Some(self.choose_framework(&mut asked, raw)?);
                css_tool = asked.choose_css(raw)?;
                database = asked.choose_database(raw)?;
                architecture = self.choose_architecture(&mut asked, raw)?;
                if !asked.provenance.is_explicit(FlagName::FrontendArchitecture) {
                    frontend_architecture = FrontendArchitecture::from(architecture);
                }
            }
        }

        let project_name = asked.text(
            FlagName::Name,
            &raw.name,
            "Project name",
            DEFAULT_PROJECT_NAME,
        )?;
        let description = asked.text(
            FlagName::Description,
            &raw.description,
            "Description",
            DEFAULT_DESCRIPTION,
        )?;
        let author = asked.text(FlagName::Author, &raw.author, "Author", DEFAULT_AUTHOR)?;
        let package_manager = asked.choose(
            FlagName::PackageManager,
            &raw.package_manager,
            "Which package manager?",
            &PackageManager::ALL,
            PackageManager::Npm,
            |pm| pm.to_string(),
        )?;

        Ok(ProjectConfig {
            project_name,
            description,
            author,
            package_manager,
            project_type,
            architecture,
            backend: parse_or(&raw.backend, BackendRuntime::Node)?,
            frontend_framework,
            css_tool,
            database,
            frontend_architecture,
            directory: directory_of(raw),
            flag_provenance: asked.provenance,
            embed_in_root: false,
        })
    }

    fn choose_architecture(
        &self,
        asked: &mut Questionnaire<'_>,
        raw: &RawOptions,
    ) -> NexusResult<Architecture> {
        if let Some(model) = raw.model.explicit_value() {
            return self.canonical_architecture(model);
        }

        let entries = self.registry.list();
        let choices: Vec<Choice> = entries
            .iter()
            .map(|e| {
                Choice::new(
                    e.descriptor.name,
                    format!("{} - {}", e.descriptor.display_name, e.descriptor.description),
                )
            })
            .collect();
        if choices.is_empty() {
            return Err(ApplicationError::ArchitectureNotRecognized {
                name: "<none registered>".into(),
            }
            .into());
        }
        let default = choices
            .iter()
            .position(|c| c.value == Architecture::Mvc.as_str())
            .unwrap_or(0);

        let answer = asked.prompter.select(
            "architecture",
            "Which backend architecture?",
            &choices,
            default,
        )?;
        asked.provenance.set(FlagName::Model, Provenance::Explicit);
        self.canonical_architecture(&answer)
    }

    fn choose_framework(
        &self,
        asked: &mut Questionnaire<'_>,
        raw: &RawOptions,
    ) -> NexusResult<FrontendFramework> {
        let registered = self.frontends.frameworks();
        let options = if registered.is_empty() {
            FrontendFramework::ALL.to_vec()
        } else {
            registered
        };

        asked.choose(
            FlagName::Frontend,
            &raw.frontend,
            "Which frontend framework?",
            &options,
            FrontendFramework::React,
            |f| match f {
                FrontendFramework::React => "React (Vite)".into(),
                FrontendFramework::Vue => "Vue 3 (Vite)".into(),
                FrontendFramework::Angular => "Angular".into(),
            },
        )
    }

    /// Map any accepted architecture name onto its canonical variant.
    fn canonical_architecture(&self, name: &str) -> NexusResult<Architecture> {
        match self.registry.canonical_name(name) {
            Some(canonical) => Ok(canonical.parse()?),
            // Known style with no registered strategy vs. a plain typo.
            None => match name.parse::<Architecture>() {
                Ok(_) => Err(ApplicationError::ArchitectureNotRecognized {
                    name: name.trim().to_string(),
                }
                .into()),
                Err(e) => Err(e.into()),
            },
        }
    }
}

/// Interactive question state: the prompter plus provenance updated as
/// answers come in.
struct Questionnaire<'p> {
    prompter: &'p dyn Prompter,
    provenance: FlagProvenance,
}

impl Questionnaire<'_> {
    fn choose<T>(
        &mut self,
        flag: FlagName,
        raw: &Flag<String>,
        message: &str,
        options: &[T],
        fallback: T,
        label: impl Fn(&T) -> String,
    ) -> NexusResult<T>
    where
        T: Copy + PartialEq + Display + FromStr<Err = DomainError>,
    {
        if let Some(value) = raw.explicit_value() {
            return Ok(value.parse()?);
        }

        let default_value = raw
            .value
            .as_deref()
            .map(str::parse::<T>)
            .transpose()?
            .unwrap_or(fallback);
        let choices: Vec<Choice> = options
            .iter()
            .map(|o| Choice::new(o.to_string(), label(o)))
            .collect();
        let default = options
            .iter()
            .position(|o| *o == default_value)
            .unwrap_or(0);

        let answer = self
            .prompter
            .select(flag.as_str(), message, &choices, default)?;
        self.provenance.set(flag, Provenance::Explicit);
        Ok(answer.parse()?)
    }

    fn choose_database(&mut self, raw: &RawOptions) -> NexusResult<Database> {
        self.choose(
            FlagName::Database,
            &raw.database,
            "Which database?",
            &Database::ALL,
            Database::None,
            |d| match d {
                Database::Postgres => "PostgreSQL".into(),
                Database::Mysql => "MySQL".into(),
                Database::Mongodb => "MongoDB".into(),
                Database::Sqlite => "SQLite".into(),
                Database::None => "None".into(),
            },
        )
    }

    fn choose_css(&mut self, raw: &RawOptions) -> NexusResult<CssTool> {
        self.choose(
            FlagName::Css,
            &raw.css,
            "Which CSS tooling?",
            &CssTool::ALL,
            CssTool::None,
            |c| match c {
                CssTool::Tailwind => "Tailwind CSS".into(),
                CssTool::None => "Plain CSS".into(),
            },
        )
    }

    fn text(
        &mut self,
        flag: FlagName,
        raw: &Flag<String>,
        message: &str,
        fallback: &str,
    ) -> NexusResult<String> {
        if let Some(value) = raw.explicit_value() {
            return Ok(value.trim().to_string());
        }

        let default = raw.value.as_deref().unwrap_or(fallback);
        let answer = self.prompter.input(flag.as_str(), message, default)?;
        self.provenance.set(flag, Provenance::Explicit);

        let answer = answer.trim();
        Ok(if answer.is_empty() { default } else { answer }.to_string())
    }
}

fn parse_or<T>(flag: &Flag<String>, default: T) -> Result<T, DomainError>
where
    T: FromStr<Err = DomainError>,
{
    flag.value.as_deref().map_or(Ok(default), str::parse)
}

fn text_or(flag: &Flag<String>, default: &str) -> String {
    flag.value
        .as_deref()
        .map(str::trim)
        .unwrap_or(default)
        .to_string()
}

fn directory_of(raw: &RawOptions) -> PathBuf {
    raw.directory
        .value
        .clone()
        .unwrap_or_else(|| PathBuf::from("."))
}
