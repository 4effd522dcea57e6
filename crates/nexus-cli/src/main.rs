//! # Nexus CLI
//!
//! Node.js project scaffolding.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + env + defaults).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the generate action or a subcommand.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                         |
//! |------|---------------------------------|
//! |  0   | Success (install may have failed) |
//! |  1   | Internal / system error         |
//! |  2   | User / input error, cancelled   |
//! |  3   | Resource not found              |
//! |  4   | Configuration error             |

use std::process::ExitCode;

use clap::{CommandFactory, FromArgMatches};
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands, ExplicitFlags, check_subcommand_usage},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod progress;
mod prompt;

fn main() -> ExitCode {
    // Missing .env is fine.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    // `--help` and `--version` arrive here as errors with exit code 0.
    let matches = match Cli::command().try_get_matches() {
        Ok(m) => m,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(2);
        }
    };
    if let Err(e) = check_subcommand_usage(&cli, &matches) {
        let _ = e.print();
        return ExitCode::from(2);
    }
    let explicit = ExplicitFlags::from_matches(&matches);

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Load configuration ─────────────────────────────────────────────
    // `init` creates the file `--config` points at, so it must not require it.
    let config = if matches!(cli.command, Some(Commands::Init(_))) {
        AppConfig::default()
    } else {
        match AppConfig::load(cli.global.config.as_ref()) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Failed to load configuration: {e:#}");
                tracing::error!("Failed to load configuration: {e:#}");
                return ExitCode::from(4);
            }
        }
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);
    let verbose = cli.global.verbose > 0;
    let color = output.supports_color() && std::io::IsTerminal::is_terminal(&std::io::stderr());

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, &explicit, &config, &output) {
        Ok(()) => {
            info!("Nexus completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, color),
    }
}

#[instrument(skip_all)]
fn run(
    cli: Cli,
    explicit: &ExplicitFlags,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    match cli.command {
        None => commands::generate::execute(cli.generate, explicit, &cli.global, config, output),
        Some(Commands::List(cmd)) => commands::list::execute(cmd, output),
        Some(Commands::Init(cmd)) => commands::init::execute(cmd, &cli.global, output),
        Some(Commands::Completions(cmd)) => commands::completions::execute(cmd),
    }
}

/// Translate a `CliError` into a user message and an exit code.
fn handle_error(err: CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();

    // stderr, so the message survives a redirected stdout.
    let msg = if color {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cli_has_author() {
        assert!(Cli::command().get_author().is_some());
    }
}
