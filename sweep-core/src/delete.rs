//! # Branch Deletion
//!
//! Deletes stale branches one at a time. Each `git branch -d` runs to
//! completion before the next starts, and a failed deletion is recorded in
//! the [`DeletionReport`] instead of stopping the batch.

use tracing::{debug, warn};

use crate::consts::NOT_FULLY_MERGED;
use crate::output::{format_branch, format_command, pluralize, print_error, print_info, print_success};
use crate::runner::{CommandRunner, GitCommand};
use crate::sweep::SweepOptions;

/// A branch git refused to delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionFailure {
  pub branch: String,
  pub message: String,
}

/// Tally of one pass over the deletion candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionReport {
  /// Number of branches the pass was asked to delete.
  pub candidates: usize,
  /// Branches left alone because of a dry run.
  pub skipped: Vec<String>,
  pub failures: Vec<DeletionFailure>,
}

impl DeletionReport {
  fn new(candidates: usize) -> Self {
    Self {
      candidates,
      ..Self::default()
    }
  }

  /// Branches actually deleted.
  pub fn deleted(&self) -> usize {
    self.candidates - self.skipped.len() - self.failures.len()
  }

  /// One-line summary, e.g. `Deleted 1 branch`.
  pub fn summary(&self) -> String {
    format!("Deleted {}", pluralize(self.deleted(), "branch", "branches"))
  }
}

/// Turn git's diagnostic for a failed deletion into something actionable.
pub fn failure_message(branch: &str, diagnostic: &str, main_branch: &str) -> String {
  if diagnostic.contains(NOT_FULLY_MERGED) {
    format!(
      "The branch '{branch}' is not fully merged into '{main_branch}'. Run `git pull` on '{main_branch}' and try again, or rerun with --force to delete it anyway."
    )
  } else {
    diagnostic.to_string()
  }
}

/// Delete `candidates` in order, honoring dry-run and force.
pub fn delete_branches(
  runner: &dyn CommandRunner,
  candidates: &[String],
  main_branch: &str,
  options: &SweepOptions,
) -> DeletionReport {
  let mut report = DeletionReport::new(candidates.len());

  for branch in candidates {
    print_info(&format!("Deleting {}", format_branch(branch)));
    let command = GitCommand::delete_branch(branch, options.force);

    if options.dry_run {
      print_info(&format!("Would run {}", format_command(&command.to_string())));
      report.skipped.push(branch.clone());
      continue;
    }

    match runner.run(&command) {
      Ok(_) => {
        debug!("Deleted {branch}");
        print_success(&format!("Deleted {}", format_branch(branch)));
      }
      Err(e) => {
        warn!("{command} failed: {e}");
        let message = failure_message(branch, &e.diagnostic(), main_branch);
        print_error(&message);
        report.failures.push(DeletionFailure {
          branch: branch.clone(),
          message,
        });
      }
    }
  }

  let summary = report.summary();
  if report.deleted() > 0 {
    print_success(&summary);
  } else {
    print_info(&summary);
  }

  report
}
