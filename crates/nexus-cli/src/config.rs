//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it. Values from here only
//! ever become *default* answers: they never switch generation into direct
//! mode and never skip an interactive question.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables `NEXUS_<SECTION>__<KEY>`, e.g.
//!    `NEXUS_DEFAULTS__AUTHOR`
//! 3. Config file (`--config`, else the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

/// Project metadata defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub project_name: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub package_manager: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// `config_file` is the path the user passed via `--config`; it must exist.
    /// Without it the platform config file is used if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path.as_path()).required(true),
            None => File::from(Self::config_path().as_path()).required(false),
        };

        Config::builder()
            .add_source(
                Config::try_from(&Self::default()).context("Failed to encode built-in defaults")?,
            )
            .add_source(file)
            .add_source(Environment::with_prefix("NEXUS").separator("__"))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.nexus.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "nexus", "nexus")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".nexus.toml"))
    }

    /// Target of `nexus init`: `--config` if given, else [`Self::config_path`].
    pub fn init_path(config_file: Option<&Path>) -> PathBuf {
        config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path)
    }

    /// Contents written by `nexus init`: the built-in metadata defaults.
    pub fn starter() -> Self {
        use nexus_core::domain::{DEFAULT_AUTHOR, DEFAULT_DESCRIPTION, DEFAULT_PROJECT_NAME};

        Self {
            defaults: Defaults {
                project_name: Some(DEFAULT_PROJECT_NAME.into()),
                description: Some(DEFAULT_DESCRIPTION.into()),
                author: Some(DEFAULT_AUTHOR.into()),
                package_manager: Some("npm".into()),
            },
            output: OutputConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_has_no_metadata() {
        let cfg = AppConfig::default();
        assert!(cfg.defaults.author.is_none());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn explicit_file_is_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nexus.toml");
        std::fs::write(
            &path,
            "[defaults]\nauthor = \"Ada\"\npackage_manager = \"pnpm\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.author.as_deref(), Some("Ada"));
        assert_eq!(cfg.defaults.package_manager.as_deref(), Some("pnpm"));
        assert!(cfg.defaults.description.is_none());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn starter_round_trips_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::starter()).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, AppConfig::starter());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
