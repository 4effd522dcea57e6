//! Package-manager installer backed by `std::process::Command`.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use nexus_core::{
    application::{
        ApplicationError,
        ports::{InstallOutput, PackageInstaller},
    },
    domain::PackageManager,
    error::NexusResult,
};

/// Lines of captured stderr kept in the error.
const STDERR_TAIL_LINES: usize = 10;

/// Runs `<manager> install` as a child process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessInstaller;

impl ProcessInstaller {
    pub fn new() -> Self {
        Self
    }
}

fn program(manager: PackageManager) -> String {
    if cfg!(windows) {
        format!("{}.cmd", manager.as_str())
    } else {
        manager.as_str().to_string()
    }
}

impl PackageInstaller for ProcessInstaller {
    #[instrument(skip_all, fields(manager = %manager, directory = %directory.display()))]
    fn install(
        &self,
        manager: PackageManager,
        directory: &Path,
        output: InstallOutput,
    ) -> NexusResult<()> {
        let command = manager.install_command();
        let mut cmd = Command::new(program(manager));
        cmd.arg("install").current_dir(directory);

        let failure = |reason: String| ApplicationError::Install {
            command: command.clone(),
            reason,
        };

        match output {
            InstallOutput::Inherit => {
                let status = cmd
                    .stdin(Stdio::null())
                    .status()
                    .map_err(|e| failure(format!("could not start: {e}")))?;
                if !status.success() {
                    return Err(failure(format!("exited with {status}")).into());
                }
            }
            InstallOutput::Captured => {
                let out = cmd
                    .stdin(Stdio::null())
                    .output()
                    .map_err(|e| failure(format!("could not start: {e}")))?;
                if !out.status.success() {
                    let stderr = String::from_utf8_lossy(&out.stderr);
                    return Err(failure(format!(
                        "exited with {}{}",
                        out.status,
                        stderr_tail(&stderr)
                    ))
                    .into());
                }
                debug!(bytes = out.stdout.len(), "install output captured");
            }
        }

        Ok(())
    }
}

fn stderr_tail(stderr: &str) -> String {
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() {
        return String::new();
    }
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    format!("\n{}", lines[start..].join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stderr_tail_keeps_last_lines() {
        let stderr: String = (0..20).map(|i| format!("line {i}\n")).collect();
        let tail = stderr_tail(&stderr);
        assert!(tail.contains("line 19"));
        assert!(tail.contains("line 10"));
        assert!(!tail.contains("line 9\n"));
        assert_eq!(stderr_tail("\n  \n"), "");
    }

    #[test]
    fn missing_directory_is_an_install_error() {
        let err = ProcessInstaller::new()
            .install(
                PackageManager::Npm,
                Path::new("/definitely/not/here/nexus"),
                InstallOutput::Captured,
            )
            .unwrap_err();
        assert!(err.to_string().contains("npm install"));
    }
}
