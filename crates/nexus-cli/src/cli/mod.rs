//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases
//! and help text. Enumerated values (`--type`, `--model`, ...) stay plain
//! strings here; `nexus-core` parses them so every unrecognized value is
//! reported the same way whether it came from a flag or a prompt.

use std::collections::HashSet;
use std::path::PathBuf;

use clap::{
    ArgMatches, Args, CommandFactory, Parser, Subcommand, ValueEnum, error::ErrorKind,
    parser::ValueSource,
};

use nexus_core::domain::FlagName;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Without a subcommand `nexus` generates a project: directly when any of
/// `--model`, `--type`, `--frontend`, `--backend` or `--database` is given,
/// interactively otherwise.
#[derive(Debug, Parser)]
#[command(
    name    = "nexus",
    bin_name = "nexus",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Node.js project scaffolding",
    long_about = "Nexus generates backend, frontend and fullstack Node.js projects \
                  with MVC, Clean or Hexagonal architecture.",
    after_help = "EXAMPLES:\n\
        \x20 nexus                                         # interactive\n\
        \x20 nexus --type backend --model clean --database postgres -d ./api\n\
        \x20 nexus --type fullstack --frontend react --css tailwind -d ./shop\n\
        \x20 nexus list\n\
        \x20 nexus completions bash > /usr/share/bash-completion/completions/nexus",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Project generation flags (used when no subcommand is given).
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List registered architectures.
    #[command(
        visible_alias = "ls",
        about = "List available architectures",
        after_help = "EXAMPLES:\n\
            \x20 nexus list\n\
            \x20 nexus list --format json"
    )]
    List(ListArgs),

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 nexus init                         # platform config dir\n\
            \x20 nexus --config ./nexus.toml init   # explicit location"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 nexus completions bash > ~/.local/share/bash-completion/completions/nexus\n\
            \x20 nexus completions zsh  > ~/.zfunc/_nexus\n\
            \x20 nexus completions fish > ~/.config/fish/completions/nexus.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Flags of the default (generate) action.
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Backend architecture.
    #[arg(
        short = 'm',
        long = "model",
        value_name = "ARCH",
        help = "Backend architecture: mvc, clean, hexagonal (alias: hexa)"
    )]
    pub model: Option<String>,

    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        help = "Project type: backend, frontend, fullstack"
    )]
    pub project_type: Option<String>,

    #[arg(
        long = "frontend",
        value_name = "FRAMEWORK",
        help = "Frontend framework: react, vue, angular"
    )]
    pub frontend: Option<String>,

    #[arg(long = "css", value_name = "TOOL", help = "CSS tool: tailwind, none")]
    pub css: Option<String>,

    #[arg(
        long = "frontend-architecture",
        value_name = "LAYOUT",
        help = "Frontend folder layout: default, mvc, clean, hexa"
    )]
    pub frontend_architecture: Option<String>,

    #[arg(long = "backend", value_name = "RUNTIME", help = "Backend runtime: node")]
    pub backend: Option<String>,

    #[arg(
        long = "database",
        visible_alias = "db",
        value_name = "DB",
        help = "Database: postgres, mysql, mongodb, sqlite, none"
    )]
    pub database: Option<String>,

    /// Target directory. Created if missing.
    #[arg(
        short = 'd',
        long = "directory",
        value_name = "DIR",
        default_value = ".",
        help = "Target directory"
    )]
    pub directory: PathBuf,

    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    #[arg(long = "description", value_name = "TEXT", help = "Project description")]
    pub description: Option<String>,

    #[arg(long = "author", value_name = "AUTHOR", help = "Project author")]
    pub author: Option<String>,

    #[arg(
        long = "package-manager",
        visible_alias = "pm",
        value_name = "PM",
        help = "Package manager: npm, yarn, pnpm"
    )]
    pub package_manager: Option<String>,

    /// Continue into a non-empty directory without asking.
    #[arg(short = 'y', long = "yes", help = "Assume yes to confirmations")]
    pub yes: bool,

    /// Skip the non-empty directory check entirely.
    #[arg(long = "force", help = "Write into a non-empty directory")]
    pub force: bool,

    #[arg(long = "no-install", help = "Skip dependency installation")]
    pub no_install: bool,
}

/// Clap argument ids of [`GenerateArgs`] paired with their flag names.
const FLAG_IDS: [(&str, FlagName); 12] = [
    ("model", FlagName::Model),
    ("project_type", FlagName::Type),
    ("frontend", FlagName::Frontend),
    ("css", FlagName::Css),
    ("frontend_architecture", FlagName::FrontendArchitecture),
    ("backend", FlagName::Backend),
    ("database", FlagName::Database),
    ("directory", FlagName::Directory),
    ("name", FlagName::Name),
    ("description", FlagName::Description),
    ("author", FlagName::Author),
    ("package_manager", FlagName::PackageManager),
];

/// Generate-only switches, with their long names.
const SWITCH_IDS: [(&str, &str); 3] = [
    ("yes", "yes"),
    ("force", "force"),
    ("no_install", "no-install"),
];

/// Reject generate flags combined with a subcommand.
///
/// Global flags (`-v`, `--config`, ...) stay valid in front of a subcommand.
pub fn check_subcommand_usage(cli: &Cli, matches: &ArgMatches) -> Result<(), clap::Error> {
    if cli.command.is_none() {
        return Ok(());
    }

    let typed = FLAG_IDS
        .iter()
        .map(|(id, flag)| (*id, flag.as_str()))
        .chain(SWITCH_IDS)
        .find(|(id, _)| matches!(matches.value_source(id), Some(ValueSource::CommandLine)));

    match typed {
        Some((_, long)) => Err(Cli::command().error(
            ErrorKind::ArgumentConflict,
            format!("'--{long}' generates a project and cannot be combined with a subcommand"),
        )),
        None => Ok(()),
    }
}

/// Which generate flags the user actually typed.
///
/// Clap fills defaults silently; `value_source` is the only place that still
/// knows the difference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplicitFlags(HashSet<FlagName>);

impl ExplicitFlags {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let set = FLAG_IDS
            .iter()
            .filter(|(id, _)| {
                matches!(
                    matches.value_source(id),
                    Some(ValueSource::CommandLine | ValueSource::EnvVariable)
                )
            })
            .map(|(_, flag)| *flag)
            .collect();
        Self(set)
    }

    pub fn contains(&self, flag: FlagName) -> bool {
        self.0.contains(&flag)
    }

    #[cfg(test)]
    pub fn of(flags: &[FlagName]) -> Self {
        Self(flags.iter().copied().collect())
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::FromArgMatches;

    fn parse(args: &[&str]) -> (Cli, ExplicitFlags) {
        let matches = Cli::command().try_get_matches_from(args).unwrap();
        let cli = Cli::from_arg_matches(&matches).unwrap();
        (cli, ExplicitFlags::from_matches(&matches))
    }

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_has_no_subcommand() {
        let (cli, explicit) = parse(&["nexus"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.generate.directory, PathBuf::from("."));
        assert!(!explicit.contains(FlagName::Directory));
    }

    #[test]
    fn typed_flags_are_explicit() {
        let (cli, explicit) = parse(&["nexus", "-t", "backend", "--db", "postgres", "-d", "api"]);
        assert_eq!(cli.generate.project_type.as_deref(), Some("backend"));
        assert_eq!(cli.generate.database.as_deref(), Some("postgres"));
        assert!(explicit.contains(FlagName::Type));
        assert!(explicit.contains(FlagName::Database));
        assert!(explicit.contains(FlagName::Directory));
        assert!(!explicit.contains(FlagName::Model));
    }

    fn subcommand_usage(args: &[&str]) -> Result<(), clap::Error> {
        let matches = Cli::command().try_get_matches_from(args)?;
        let cli = Cli::from_arg_matches(&matches)?;
        check_subcommand_usage(&cli, &matches)
    }

    #[test]
    fn generate_flags_conflict_with_subcommands() {
        let err = subcommand_usage(&["nexus", "--type", "backend", "list"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
        assert!(err.to_string().contains("--type"));

        let err = subcommand_usage(&["nexus", "--no-install", "init"]).unwrap_err();
        assert!(err.to_string().contains("--no-install"));
    }

    #[test]
    fn global_flags_precede_subcommands() {
        for args in [
            &["nexus", "--config", "x.toml", "init"][..],
            &["nexus", "-v", "list"],
            &["nexus", "--output-format", "json", "list"],
            &["nexus", "--no-color", "completions", "bash"],
        ] {
            assert!(subcommand_usage(args).is_ok(), "{args:?}");
        }

        let (cli, _) = parse(&["nexus", "--config", "x.toml", "init"]);
        assert_eq!(cli.global.config, Some(PathBuf::from("x.toml")));
        assert!(matches!(cli.command, Some(Commands::Init(_))));
    }

    #[test]
    fn bare_generate_flags_are_accepted() {
        assert!(subcommand_usage(&["nexus", "--type", "backend", "--yes"]).is_ok());
    }

    #[test]
    fn parse_list_command() {
        let (cli, _) = parse(&["nexus", "list", "--format", "json"]);
        match cli.command {
            Some(Commands::List(args)) => assert_eq!(args.format, ListFormat::Json),
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["nexus", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
