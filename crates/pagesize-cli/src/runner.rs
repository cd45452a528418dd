//! Shell command execution for the install, build and diagnostic steps.
//!
//! Commands run through the platform shell in the workspace directory with
//! stdout/stderr inherited, so their output lands in the CI log as-is. Each
//! command is awaited to completion; a non-zero exit is fatal.

use crate::error::CommandError;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// Runs shell commands inside one working directory.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    cwd: PathBuf,
}

impl CommandRunner {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }

    /// Run `command` for pipeline step `step` and wait for it to finish.
    ///
    /// # Errors
    ///
    /// - [`CommandError::Empty`] if the command string is blank
    /// - [`CommandError::Spawn`] if the shell could not be started
    /// - [`CommandError::Failed`] if the command exits non-zero
    pub async fn run(&self, step: &'static str, command: &str) -> Result<(), CommandError> {
        let command = command.trim();
        if command.is_empty() {
            return Err(CommandError::Empty { step });
        }

        info!("$ {}", command);
        debug!("Working directory: {}", self.cwd.display());

        let status = shell(command)
            .current_dir(&self.cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| CommandError::Spawn {
                command: command.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(CommandError::Failed {
                command: command.to_string(),
                status,
            });
        }

        debug!("{} finished: {}", step, status);
        Ok(())
    }
}

#[cfg(not(target_os = "windows"))]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(target_os = "windows")]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_run_success_in_cwd() {
        let temp = TempDir::new().unwrap();
        let runner = CommandRunner::new(temp.path());

        runner.run("build", "echo built > out.txt").await.unwrap();

        let out = std::fs::read_to_string(temp.path().join("out.txt")).unwrap();
        assert_eq!(out.trim(), "built");
    }

    #[tokio::test]
    async fn test_run_non_zero_exit() {
        let temp = TempDir::new().unwrap();
        let runner = CommandRunner::new(temp.path());

        let err = runner.run("build", "exit 3").await.unwrap_err();

        match err {
            CommandError::Failed { command, status } => {
                assert_eq!(command, "exit 3");
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_run_empty_command() {
        let runner = CommandRunner::new(".");
        let err = runner.run("install", "   ").await.unwrap_err();
        assert!(matches!(err, CommandError::Empty { step: "install" }));
    }

    #[tokio::test]
    async fn test_run_missing_cwd() {
        let runner = CommandRunner::new("/definitely/not/a/dir");
        let err = runner.run("build", "true").await.unwrap_err();
        assert!(matches!(err, CommandError::Spawn { .. }));
    }
}
