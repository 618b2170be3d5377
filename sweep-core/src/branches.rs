//! # Branch Listings
//!
//! Normalizes `git branch` output into tokens and works out which local
//! branches have lost their remote counterpart.

use crate::consts::CURRENT_BRANCH_MARKER;

/// Split raw `git branch` output into branch tokens.
///
/// Every whitespace character is removed from each line and empty lines are
/// dropped, so the checked-out branch shows up as `*main`. Order is kept.
pub fn parse_branch_list(raw: &str) -> Vec<String> {
  raw
    .lines()
    .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<String>())
    .filter(|token| !token.is_empty())
    .collect()
}

/// Name of the checked-out branch, taken from the marked token.
pub fn current_branch(tokens: &[String]) -> Option<&str> {
  tokens
    .iter()
    .find_map(|token| token.strip_prefix(CURRENT_BRANCH_MARKER))
}

/// Local branches with no remote-tracking counterpart, in listing order.
///
/// A local branch counts as present on the remote when any remote branch name
/// ends with it. This is a suffix match, so `fix` is kept alive by
/// `origin/hotfix` as well as by `origin/fix`. The marked main branch is never
/// returned.
pub fn stale_branches(local: &[String], remote: &[String], main_branch: &str) -> Vec<String> {
  let marked_main = format!("{CURRENT_BRANCH_MARKER}{main_branch}");

  local
    .iter()
    .filter(|branch| **branch != marked_main)
    .filter(|branch| !remote.iter().any(|remote_branch| remote_branch.ends_with(branch.as_str())))
    .cloned()
    .collect()
}
