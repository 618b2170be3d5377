//! Errors that stop a sweep before any branch is deleted.

use thiserror::Error;

use crate::runner::RunError;

/// Hard stops for a sweep run.
#[derive(Debug, Error)]
pub enum SweepError {
  /// The remote metadata did not name a HEAD branch.
  #[error("could not detect the main branch of remote '{remote}'")]
  MainBranchUnresolved { remote: String },
  /// The checked-out branch is not the main branch.
  #[error("the current branch is '{}', not the main branch '{main}'", .current.as_deref().unwrap_or("(none)"))]
  NotOnMainBranch { current: Option<String>, main: String },
  /// A git command failed outside the per-branch deletions.
  #[error(transparent)]
  Command(#[from] RunError),
}

impl SweepError {
  /// What the user can do about it.
  pub fn hint(&self) -> String {
    match self {
      SweepError::MainBranchUnresolved { .. } => {
        "Pass the main branch explicitly with --head <branch>, or check out the main branch and make sure the remote is reachable."
          .to_string()
      }
      SweepError::NotOnMainBranch { main, .. } => {
        format!("Switch to '{main}' before cleaning up branches: git checkout {main}")
      }
      SweepError::Command(_) => {
        "Check that the remote is reachable and that no other git process holds the repository lock, then try again."
          .to_string()
      }
    }
  }
}
