//! Repository state checks that gate a sweep.

use tracing::debug;

use crate::branches::current_branch;
use crate::error::SweepError;

/// Require the checked-out branch to be the main branch.
///
/// `local` is the parsed `git branch` listing. A repository with no marked
/// branch (unborn or detached HEAD) never passes.
pub fn ensure_on_main_branch(local: &[String], main_branch: &str) -> Result<(), SweepError> {
  let current = current_branch(local);
  debug!("Checked-out branch: {current:?}, main branch: {main_branch}");

  if current == Some(main_branch) {
    Ok(())
  } else {
    Err(SweepError::NotOnMainBranch {
      current: current.map(str::to_string),
      main: main_branch.to_string(),
    })
  }
}
