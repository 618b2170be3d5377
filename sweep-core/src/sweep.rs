//! # Sweep
//!
//! Runs a full cleanup: resolve the main branch, make sure it is checked out,
//! prune remote-tracking refs, work out which local branches are stale and
//! delete them. Everything before the deletions is a hard stop; nothing is
//! touched until the checks pass.

use tracing::info;

use crate::branches::{parse_branch_list, stale_branches};
use crate::consts::DEFAULT_REMOTE;
use crate::delete::{DeletionReport, delete_branches};
use crate::error::SweepError;
use crate::output::{format_branch, pluralize, print_info};
use crate::resolve::resolve_main_branch;
use crate::runner::{CommandRunner, GitCommand};
use crate::validate::ensure_on_main_branch;

/// Settings for a single run, fixed once the command line has been read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepOptions {
  /// Report what would be deleted without deleting anything.
  pub dry_run: bool,
  /// Delete with `-D`, skipping git's merged check.
  pub force: bool,
  /// Main branch to use instead of asking the remote.
  pub head_branch: Option<String>,
  /// Remote whose HEAD names the main branch.
  pub remote: String,
}

impl Default for SweepOptions {
  fn default() -> Self {
    Self {
      dry_run: false,
      force: false,
      head_branch: None,
      remote: DEFAULT_REMOTE.to_string(),
    }
  }
}

/// How a sweep that passed its checks ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepOutcome {
  /// Every local branch still has a remote counterpart.
  NothingToDelete { main_branch: String },
  /// Stale branches were processed.
  Swept {
    main_branch: String,
    report: DeletionReport,
  },
}

/// Run the cleanup against the repository behind `runner`.
pub fn run_sweep(runner: &dyn CommandRunner, options: &SweepOptions) -> Result<SweepOutcome, SweepError> {
  let main_branch = resolve_main_branch(runner, options)?;

  let local = parse_branch_list(&runner.run(&GitCommand::list_local_branches())?);
  ensure_on_main_branch(&local, &main_branch)?;

  info!("Pruning remote-tracking branches");
  runner.run(&GitCommand::fetch_prune())?;

  let remote = parse_branch_list(&runner.run(&GitCommand::list_remote_branches())?);
  let stale = stale_branches(&local, &remote, &main_branch);
  info!("{} local, {} remote, {} stale", local.len(), remote.len(), stale.len());

  if stale.is_empty() {
    print_info("No stale branches to delete.");
    return Ok(SweepOutcome::NothingToDelete { main_branch });
  }

  print_info(&format!(
    "Found {} without a remote counterpart:",
    pluralize(stale.len(), "branch", "branches")
  ));
  for branch in &stale {
    print_info(&format!("  • {}", format_branch(branch)));
  }

  let report = delete_branches(runner, &stale, &main_branch, options);
  Ok(SweepOutcome::Swept { main_branch, report })
}
