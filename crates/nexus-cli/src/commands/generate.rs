//! The default action: generate a project.
//!
//! Responsibility: turn flags (plus config defaults) into `RawOptions` with
//! provenance, wire the adapters into a `ScaffoldService`, and display the
//! report. No business logic lives here.

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, instrument};

use nexus_adapters::{LocalFilesystem, ProcessInstaller, builtin_frontends, builtin_registry};
use nexus_core::{
    application::ports::{NoProgress, ProgressReporter},
    domain::FlagName,
    prelude::*,
};

use crate::{
    cli::{ExplicitFlags, GenerateArgs, GlobalArgs, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    progress::SpinnerReporter,
    prompt::terminal_prompter,
};

/// Execute a generation run.
///
/// 1. Build `RawOptions` (explicit flag > config default > absent)
/// 2. Pick direct or interactive mode from the explicit flags
/// 3. Attach a prompter when interactive and a terminal is available
/// 4. Scaffold, then print the summary
#[instrument(skip_all, fields(directory = %args.directory.display()))]
pub fn execute(
    args: GenerateArgs,
    explicit: &ExplicitFlags,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let options = raw_options(&args, explicit, config);
    let mode = ResolutionMode::select(&options);
    debug!(?mode, "Resolution mode selected");

    let mut service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Arc::new(builtin_registry()),
        Arc::new(builtin_frontends()),
        Box::new(ProcessInstaller::new()),
    )
    .with_progress(progress_reporter(output));

    // Without a terminal the core reports that interactive input is missing.
    if mode == ResolutionMode::Interactive && io::stdin().is_terminal() {
        output.banner()?;
        service = service.with_prompter(terminal_prompter()?);
    }

    let request = ScaffoldRequest {
        options,
        auto_confirm: args.yes,
        force: args.force,
        install: !args.no_install,
        verbose_install: global.verbose > 0,
    };

    let report = service.scaffold(request)?;
    info!(
        run_id = %report.run_id,
        project = %report.config.project_name,
        "Project generated"
    );

    if output.format() == OutputFormat::Json {
        output.json(&report_json(&report))?;
    } else {
        print_summary(&report, output)?;
    }
    Ok(())
}

// ── Option assembly ───────────────────────────────────────────────────────────

fn flag(
    explicit: &ExplicitFlags,
    name: FlagName,
    value: Option<String>,
    fallback: Option<&String>,
) -> Flag<String> {
    match value {
        Some(v) if explicit.contains(name) => Flag::explicit(v),
        Some(v) => Flag::defaulted(v),
        None => fallback.map_or_else(Flag::absent, |v| Flag::defaulted(v.clone())),
    }
}

/// Config-file values only ever become defaults.
fn raw_options(args: &GenerateArgs, explicit: &ExplicitFlags, config: &AppConfig) -> RawOptions {
    let defaults = &config.defaults;
    let a = args.clone();

    RawOptions {
        model: flag(explicit, FlagName::Model, a.model, None),
        project_type: flag(explicit, FlagName::Type, a.project_type, None),
        frontend: flag(explicit, FlagName::Frontend, a.frontend, None),
        css: flag(explicit, FlagName::Css, a.css, None),
        frontend_architecture: flag(
            explicit,
            FlagName::FrontendArchitecture,
            a.frontend_architecture,
            None,
        ),
        backend: flag(explicit, FlagName::Backend, a.backend, None),
        database: flag(explicit, FlagName::Database, a.database, None),
        name: flag(explicit, FlagName::Name, a.name, defaults.project_name.as_ref()),
        description: flag(
            explicit,
            FlagName::Description,
            a.description,
            defaults.description.as_ref(),
        ),
        author: flag(explicit, FlagName::Author, a.author, defaults.author.as_ref()),
        package_manager: flag(
            explicit,
            FlagName::PackageManager,
            a.package_manager,
            defaults.package_manager.as_ref(),
        ),
        directory: if explicit.contains(FlagName::Directory) {
            Flag::explicit(a.directory)
        } else {
            Flag::defaulted(PathBuf::from("."))
        },
    }
}

fn progress_reporter(output: &OutputManager) -> Box<dyn ProgressReporter> {
    if output.is_quiet() || !io::stderr().is_terminal() {
        Box::new(NoProgress)
    } else {
        Box::new(SpinnerReporter)
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn print_summary(report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    let config = &report.config;

    output.success(&format!(
        "Created {} project '{}' in {}",
        config.project_type,
        config.project_name,
        config.directory.display()
    ))?;
    output.print("")?;
    output.header("Summary")?;

    match config.project_type {
        ProjectType::Backend => {
            output.print(&format!("  Architecture:  {}", config.architecture))?;
            output.print(&format!("  Runtime:       {}", config.backend))?;
            output.print(&format!("  Database:      {}", config.database))?;
        }
        ProjectType::Frontend => {
            print_frontend(config, output)?;
        }
        ProjectType::Fullstack => {
            output.print(&format!("  Architecture:  {}", config.architecture))?;
            output.print(&format!("  Database:      {}", config.database))?;
            print_frontend(config, output)?;
            if let Some(nested) = &report.nested_manifest {
                output.print(&format!("  Frontend app:  {}", nested.display()))?;
            }
        }
    }
    output.print(&format!("  Package mgr:   {}", config.package_manager))?;

    for c in &report.collisions {
        output.warning(&format!(
            "{} '{}': kept frontend value {} over {}",
            c.section.as_str(),
            c.key,
            c.nested_value,
            c.root_value
        ))?;
    }

    let manager = config.package_manager;
    match &report.install {
        InstallOutcome::Installed => output.success("Dependencies installed")?,
        InstallOutcome::Skipped => {
            output.info(&format!("Skipped install; run `{}` later", manager.install_command()))?;
        }
        InstallOutcome::Failed {
            error,
            manual_command,
        } => {
            output.warning(&format!("{error}"))?;
            output.warning(&format!("Install manually with: {manual_command}"))?;
        }
    }

    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", config.directory.display()))?;
    output.print(&format!("  {manager} run dev"))?;
    Ok(())
}

fn print_frontend(config: &ProjectConfig, output: &OutputManager) -> CliResult<()> {
    let framework = config
        .frontend_framework
        .map_or_else(|| "none".to_string(), |f| f.to_string());
    output.print(&format!("  Frontend:      {framework}"))?;
    output.print(&format!("  CSS:           {}", config.css_tool))?;
    output.print(&format!("  Layout:        {}", config.frontend_architecture))?;
    Ok(())
}

fn report_json(report: &ScaffoldReport) -> serde_json::Value {
    let config = &report.config;
    let (install, manual) = match &report.install {
        InstallOutcome::Skipped => ("skipped", None),
        InstallOutcome::Installed => ("installed", None),
        InstallOutcome::Failed { manual_command, .. } => ("failed", Some(manual_command.clone())),
    };

    json!({
        "runId": report.run_id.to_string(),
        "mode": if report.mode.is_direct() { "direct" } else { "interactive" },
        "projectName": config.project_name,
        "projectType": config.project_type,
        "architecture": config.architecture.to_string(),
        "frontend": config.frontend_framework,
        "css": config.css_tool,
        "database": config.database,
        "packageManager": config.package_manager,
        "directory": config.directory,
        "nestedManifest": report.nested_manifest,
        "collisions": report.collisions.iter().map(|c| json!({
            "section": c.section.as_str(),
            "key": c.key,
            "root": c.root_value,
            "nested": c.nested_value,
        })).collect::<Vec<_>>(),
        "install": install,
        "manualInstall": manual,
    })
}
