//! Scripted [`CommandRunner`] used by the unit tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::runner::{CommandRunner, GitCommand, RunError};

enum Response {
  Stdout(String),
  Failed(String),
  Diagnostic(String),
}

/// Replays canned responses keyed by the rendered command and records every
/// command it was asked to run. Unscripted commands succeed with no output.
#[derive(Default)]
pub struct ScriptedRunner {
  responses: HashMap<String, Response>,
  issued: RefCell<Vec<String>>,
}

impl ScriptedRunner {
  pub fn new() -> Self {
    Self::default()
  }

  /// Script a successful response for `command` (e.g. `"git branch -r"`).
  pub fn ok(mut self, command: &str, stdout: &str) -> Self {
    self.responses.insert(command.to_string(), Response::Stdout(stdout.to_string()));
    self
  }

  /// Script a failing response carrying `stderr` for `command`.
  pub fn fail(mut self, command: &str, stderr: &str) -> Self {
    self.responses.insert(command.to_string(), Response::Failed(stderr.to_string()));
    self
  }

  /// Script `command` to exit successfully while writing `stderr`.
  pub fn diagnose(mut self, command: &str, stderr: &str) -> Self {
    self.responses.insert(command.to_string(), Response::Diagnostic(stderr.to_string()));
    self
  }

  /// A runner scripted for a repository on `main` with the given listings.
  pub fn repository(local: &str, remote: &str) -> Self {
    Self::new()
      .ok("git remote show origin", REMOTE_SHOW_MAIN)
      .ok("git branch", local)
      .ok("git branch -r", remote)
  }

  pub fn issued(&self) -> Vec<String> {
    self.issued.borrow().clone()
  }

  pub fn deletions(&self) -> Vec<String> {
    self
      .issued()
      .into_iter()
      .filter(|command| command.starts_with("git branch -d") || command.starts_with("git branch -D"))
      .collect()
  }
}

impl CommandRunner for ScriptedRunner {
  fn run(&self, command: &GitCommand) -> Result<String, RunError> {
    let rendered = command.to_string();
    self.issued.borrow_mut().push(rendered.clone());

    match self.responses.get(&rendered) {
      Some(Response::Stdout(stdout)) => Ok(stdout.clone()),
      Some(Response::Failed(stderr)) => Err(RunError::Failed {
        command: rendered,
        stderr: stderr.clone(),
      }),
      Some(Response::Diagnostic(stderr)) if !command.ignores_stderr() => Err(RunError::Diagnostic {
        command: rendered,
        stderr: stderr.clone(),
      }),
      Some(Response::Diagnostic(_)) | None => Ok(String::new()),
    }
  }
}

/// `git remote show origin` output captured from git 2.43.
pub const REMOTE_SHOW_MAIN: &str = "* remote origin
  Fetch URL: git@github.com:eddieland/git-sweep.git
  Push  URL: git@github.com:eddieland/git-sweep.git
  HEAD branch: main
  Remote branches:
    feature-a tracked
    main      tracked
  Local branch configured for 'git pull':
    main merges with remote main
  Local ref configured for 'git push':
    main pushes to main (up to date)
";
