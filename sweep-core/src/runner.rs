//! # Git Command Runner
//!
//! Every interaction with the repository goes through [`CommandRunner`]. The
//! sweep logic only ever sees text coming back from git, which keeps it
//! testable with a scripted runner and leaves process handling in one place.

use std::fmt;
use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;
use tracing::{debug, trace};

use crate::consts;

/// A git invocation, described by its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCommand {
  args: Vec<String>,
  ignore_stderr: bool,
}

impl GitCommand {
  /// Build a command from its arguments (without the leading `git`).
  pub fn new<I, S>(args: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      args: args.into_iter().map(Into::into).collect(),
      ignore_stderr: false,
    }
  }

  /// Do not treat output on stderr as a failure when the command exits
  /// successfully.
  pub fn ignoring_stderr(mut self) -> Self {
    self.ignore_stderr = true;
    self
  }

  pub fn args(&self) -> &[String] {
    &self.args
  }

  pub fn ignores_stderr(&self) -> bool {
    self.ignore_stderr
  }

  /// `git remote show <remote>`, which reports the remote's HEAD branch.
  pub fn remote_show(remote: &str) -> Self {
    Self::new(["remote", "show", remote])
  }

  /// `git branch`, one local branch per line with the current one marked.
  pub fn list_local_branches() -> Self {
    Self::new(["branch"])
  }

  /// `git branch -r`, one remote-tracking branch per line.
  pub fn list_remote_branches() -> Self {
    Self::new(["branch", "-r"])
  }

  /// `git fetch -p`. Fetch reports progress on stderr, so it is ignored.
  pub fn fetch_prune() -> Self {
    Self::new(["fetch", "-p"]).ignoring_stderr()
  }

  /// `git branch -d <name>`, or `-D` when `force` is set.
  pub fn delete_branch(name: &str, force: bool) -> Self {
    let flag = if force { "-D" } else { "-d" };
    Self::new(["branch", flag, name])
  }
}

impl fmt::Display for GitCommand {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "git")?;
    for arg in &self.args {
      write!(f, " {arg}")?;
    }
    Ok(())
  }
}

/// Errors produced while running a git command.
#[derive(Debug, Error)]
pub enum RunError {
  /// The git process could not be started at all.
  #[error("failed to execute `{command}`: {source}")]
  Spawn {
    command: String,
    #[source]
    source: std::io::Error,
  },
  /// git exited with a non-zero status.
  #[error("`{command}` failed: {stderr}")]
  Failed { command: String, stderr: String },
  /// git exited successfully but wrote to stderr.
  #[error("`{command}` reported: {stderr}")]
  Diagnostic { command: String, stderr: String },
}

impl RunError {
  /// The diagnostic text behind this error.
  pub fn diagnostic(&self) -> String {
    match self {
      RunError::Spawn { source, .. } => source.to_string(),
      RunError::Failed { stderr, .. } | RunError::Diagnostic { stderr, .. } => stderr.clone(),
    }
  }
}

/// Executes git commands and hands back their standard output.
pub trait CommandRunner {
  fn run(&self, command: &GitCommand) -> Result<String, RunError>;
}

/// [`CommandRunner`] that spawns the git executable inside a repository.
#[derive(Debug, Clone)]
pub struct GitRunner {
  repo_path: PathBuf,
}

impl GitRunner {
  pub fn new(repo_path: impl Into<PathBuf>) -> Self {
    Self {
      repo_path: repo_path.into(),
    }
  }
}

impl CommandRunner for GitRunner {
  fn run(&self, command: &GitCommand) -> Result<String, RunError> {
    debug!("Running {command} in {}", self.repo_path.display());

    let output = Command::new(consts::GIT_EXECUTABLE)
      .args(command.args())
      .current_dir(&self.repo_path)
      .output()
      .map_err(|source| RunError::Spawn {
        command: command.to_string(),
        source,
      })?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    trace!("{command} exited with {}", output.status);

    if !output.status.success() {
      // Some git failures only explain themselves on stdout.
      let stderr = if stderr.is_empty() {
        stdout.trim().to_string()
      } else {
        stderr
      };
      return Err(RunError::Failed {
        command: command.to_string(),
        stderr,
      });
    }

    if !stderr.is_empty() && !command.ignores_stderr() {
      return Err(RunError::Diagnostic {
        command: command.to_string(),
        stderr,
      });
    }

    Ok(stdout)
  }
}
