//! Git repository fixtures for testing
//!
//! [`RemoteRepoFixture`] lays out a bare `origin` repository next to a working
//! repository that tracks it, both with `main` as their initial branch. That
//! is enough for `git remote show origin` to report a HEAD branch and for
//! `git fetch -p` to prune.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use git2::{BranchType, Repository, RepositoryInitOptions, Signature};
use tempfile::TempDir;

/// Initial branch of every fixture repository
pub const MAIN_BRANCH: &str = "main";

/// A bare `origin` plus a working repository with `origin` configured.
pub struct RemoteRepoFixture {
  /// Holds both repositories; removed on drop
  pub temp_dir: TempDir,
  /// The working repository
  pub repo: Repository,
  origin_path: PathBuf,
}

impl RemoteRepoFixture {
  /// Create both repositories, commit once on `main`, and push it.
  pub fn new() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let origin_path = temp_dir.path().join("origin.git");
    let work_path = temp_dir.path().join("work");

    let mut origin_opts = RepositoryInitOptions::new();
    origin_opts.bare(true).initial_head(MAIN_BRANCH);
    Repository::init_opts(&origin_path, &origin_opts).expect("Failed to initialize origin repository");

    let mut work_opts = RepositoryInitOptions::new();
    work_opts.initial_head(MAIN_BRANCH);
    let repo = Repository::init_opts(&work_path, &work_opts).expect("Failed to initialize working repository");

    {
      let mut config = repo.config().expect("Failed to get repository config");
      config
        .set_str("user.name", "Sweep Test User")
        .expect("Failed to set user.name");
      config
        .set_str("user.email", "sweep-test@example.com")
        .expect("Failed to set user.email");
    }

    let origin_url = origin_path.to_str().expect("Temporary path is not valid UTF-8");
    repo.remote("origin", origin_url).expect("Failed to add origin remote");

    create_commit(&repo, "README.md", "hello", "initial commit").expect("Failed to create initial commit");
    push_branch(&repo, MAIN_BRANCH).expect("Failed to push main");

    Self {
      temp_dir,
      repo,
      origin_path,
    }
  }

  /// Path of the working repository
  pub fn path(&self) -> &Path {
    self.repo.workdir().expect("Fixture repository has a work tree")
  }

  /// Path of the bare origin repository
  pub fn origin_path(&self) -> &Path {
    &self.origin_path
  }

  /// Whether a local branch with this name exists
  pub fn has_local_branch(&self, name: &str) -> bool {
    self.repo.find_branch(name, BranchType::Local).is_ok()
  }

  /// Delete a branch on origin, leaving the local branch and its
  /// remote-tracking ref behind until the next `git fetch -p`.
  pub fn delete_on_origin(&self, name: &str) -> Result<()> {
    let origin = Repository::open_bare(&self.origin_path)?;
    origin
      .find_branch(name, BranchType::Local)
      .with_context(|| format!("Branch '{name}' not found on origin"))?
      .delete()?;
    Ok(())
  }
}

impl Default for RemoteRepoFixture {
  fn default() -> Self {
    Self::new()
  }
}

/// Helper function to create a commit on the current branch
pub fn create_commit(repo: &Repository, file_name: &str, content: &str, message: &str) -> Result<()> {
  let workdir = repo.workdir().context("Repository has no work tree")?;
  fs::write(workdir.join(file_name), content)?;

  let mut index = repo.index()?;
  index.add_path(Path::new(file_name))?;
  index.write()?;

  let tree_id = index.write_tree()?;
  let tree = repo.find_tree(tree_id)?;
  let signature = Signature::now("Test User", "test@example.com")?;

  let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
  match parent {
    Some(parent) => repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &[&parent])?,
    None => repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &[])?,
  };

  Ok(())
}

/// Helper function to create a branch at the current HEAD
pub fn create_branch(repo: &Repository, branch_name: &str) -> Result<()> {
  let head = repo.head()?.peel_to_commit()?;
  repo.branch(branch_name, &head, false)?;
  Ok(())
}

/// Helper function to checkout a branch
pub fn checkout_branch(repo: &Repository, branch_name: &str) -> Result<()> {
  let obj = repo
    .revparse_single(&format!("refs/heads/{branch_name}"))?
    .peel_to_commit()?;

  repo.checkout_tree(&obj.into_object(), None)?;
  repo.set_head(&format!("refs/heads/{branch_name}"))?;

  Ok(())
}

/// Push a local branch to `origin` under the same name
pub fn push_branch(repo: &Repository, branch_name: &str) -> Result<()> {
  let mut remote = repo.find_remote("origin")?;
  let refspec = format!("refs/heads/{branch_name}:refs/heads/{branch_name}");
  remote
    .push(&[refspec.as_str()], None)
    .with_context(|| format!("Failed to push '{branch_name}' to origin"))?;
  Ok(())
}
