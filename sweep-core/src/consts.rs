//! Constants for git-sweep
//!
//! Executable names, default values, and the marker strings git uses in the
//! output we parse.

/// Platform-specific Git executable name
#[cfg(windows)]
pub const GIT_EXECUTABLE: &str = "git.exe";

/// Platform-specific Git executable name
#[cfg(not(windows))]
pub const GIT_EXECUTABLE: &str = "git";

/// Remote queried for the head branch and pruned when no config says otherwise
pub const DEFAULT_REMOTE: &str = "origin";

/// Prefix `git branch` puts in front of the checked-out branch
pub const CURRENT_BRANCH_MARKER: char = '*';

/// Substring of the diagnostic `git branch -d` prints for unmerged branches
pub const NOT_FULLY_MERGED: &str = "not fully merged";

/// Name of the config file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";
