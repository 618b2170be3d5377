//! # Main Branch Resolution
//!
//! The main branch is either given explicitly or read from the `HEAD branch:`
//! line that `git remote show <remote>` prints. That line is the only contract
//! with git here; if git ever changes the wording, detection fails and the
//! user is told to pass `--head` instead.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::SweepError;
use crate::output::{format_branch, print_info};
use crate::runner::{CommandRunner, GitCommand};
use crate::sweep::SweepOptions;

static HEAD_BRANCH_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"HEAD branch: (.+)").expect("Failed to compile HEAD branch regex"));

/// Extract the head branch name from `git remote show` output.
pub fn parse_head_branch(remote_info: &str) -> Option<String> {
  HEAD_BRANCH_PATTERN
    .captures(remote_info)
    .map(|captures| captures[1].trim().to_string())
    .filter(|name| !name.is_empty())
}

/// Determine the main branch for this run.
///
/// An explicit `head_branch` wins without touching the repository. Otherwise
/// the remote is queried and its HEAD branch is used.
pub fn resolve_main_branch(runner: &dyn CommandRunner, options: &SweepOptions) -> Result<String, SweepError> {
  if let Some(head) = &options.head_branch {
    print_info(&format!("Using {} as the main branch", format_branch(head)));
    return Ok(head.clone());
  }

  let remote_info = runner.run(&GitCommand::remote_show(&options.remote))?;
  let Some(main_branch) = parse_head_branch(&remote_info) else {
    debug!("No HEAD branch line in remote info:\n{remote_info}");
    return Err(SweepError::MainBranchUnresolved {
      remote: options.remote.clone(),
    });
  };

  print_info(&format!("Detected main branch {}", format_branch(&main_branch)));
  Ok(main_branch)
}
