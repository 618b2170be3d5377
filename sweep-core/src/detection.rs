//! Repository discovery helpers.

use std::env;
use std::path::{Path, PathBuf};

use git2::Repository;

/// Detect if the current directory or any parent directory is a Git repository.
pub fn detect_repository() -> Option<PathBuf> {
  let current_dir = env::current_dir().ok()?;
  detect_repository_from_path(&current_dir)
}

/// Work tree root of the repository containing `path`, if any.
///
/// Bare repositories have no work tree and yield `None`.
pub fn detect_repository_from_path<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
  match Repository::discover(path.as_ref()) {
    Ok(repo) => repo.workdir().map(Path::to_path_buf),
    Err(_) => None,
  }
}
