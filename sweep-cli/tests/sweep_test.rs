use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use sweep_test_utils::{RemoteRepoFixture, checkout_branch, create_branch, create_commit, push_branch};
use tempfile::TempDir;

/// `git-sweep` running inside `dir` with an empty config directory.
fn sweep(dir: &std::path::Path, config_home: &TempDir) -> Command {
  let mut cmd = cargo_bin_cmd!("git-sweep");
  cmd
    .current_dir(dir)
    .env("XDG_CONFIG_HOME", config_home.path())
    .env_remove("RUST_LOG");
  cmd
}

#[test]
fn short_help_lists_flags() {
  cargo_bin_cmd!("git-sweep")
    .arg("-h")
    .assert()
    .success()
    .stdout(predicate::str::contains("Delete local branches whose remote branch is gone"))
    .stdout(predicate::str::contains("--dry-run"))
    .stdout(predicate::str::contains("--force"))
    .stdout(predicate::str::contains("--head"));
}

#[test]
fn long_help_works_outside_a_repository() {
  let not_a_repo = TempDir::new().unwrap();
  let config_home = TempDir::new().unwrap();

  sweep(not_a_repo.path(), &config_home)
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains(
      "Delete local branches that no longer have a remote-tracking counterpart.",
    ))
    .stdout(predicate::str::contains("--dry-run"))
    .stderr(predicate::str::contains("Not in a git repository").not());
}

#[test]
fn fails_outside_a_repository() {
  let not_a_repo = TempDir::new().unwrap();
  let config_home = TempDir::new().unwrap();

  sweep(not_a_repo.path(), &config_home)
    .assert()
    .failure()
    .stderr(predicate::str::contains("Not in a git repository"))
    .stderr(predicate::str::contains("inside a git work tree"));
}

#[test]
fn deletes_branch_removed_from_origin() {
  let fixture = RemoteRepoFixture::new();
  let config_home = TempDir::new().unwrap();
  create_branch(&fixture.repo, "feature-a").unwrap();
  create_branch(&fixture.repo, "feature-b").unwrap();
  push_branch(&fixture.repo, "feature-a").unwrap();
  push_branch(&fixture.repo, "feature-b").unwrap();
  fixture.delete_on_origin("feature-a").unwrap();

  sweep(fixture.path(), &config_home)
    .assert()
    .success()
    .stdout(predicate::str::contains("main"))
    .stdout(predicate::str::contains("Deleted 1 branch"));

  assert!(!fixture.has_local_branch("feature-a"));
  assert!(fixture.has_local_branch("feature-b"));
  assert!(fixture.has_local_branch("main"));
}

#[test]
fn nothing_to_delete_when_everything_is_pushed() {
  let fixture = RemoteRepoFixture::new();
  let config_home = TempDir::new().unwrap();
  create_branch(&fixture.repo, "feature-a").unwrap();
  push_branch(&fixture.repo, "feature-a").unwrap();

  sweep(fixture.path(), &config_home)
    .assert()
    .success()
    .stdout(predicate::str::contains("No stale branches to delete."));

  assert!(fixture.has_local_branch("feature-a"));
}

#[test]
fn dry_run_keeps_branches() {
  let fixture = RemoteRepoFixture::new();
  let config_home = TempDir::new().unwrap();
  create_branch(&fixture.repo, "feature-a").unwrap();

  sweep(fixture.path(), &config_home)
    .arg("--dry-run")
    .assert()
    .success()
    .stdout(predicate::str::contains("Would run"))
    .stdout(predicate::str::contains("git branch -d feature-a"))
    .stdout(predicate::str::contains("Deleted 0 branches"));

  assert!(fixture.has_local_branch("feature-a"));
}

#[test]
fn unknown_flags_are_ignored() {
  let fixture = RemoteRepoFixture::new();
  let config_home = TempDir::new().unwrap();
  create_branch(&fixture.repo, "feature-a").unwrap();

  sweep(fixture.path(), &config_home)
    .args(["--bogus", "stray", "-n"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Deleted 0 branches"));

  assert!(fixture.has_local_branch("feature-a"));
}

#[test]
fn refuses_to_run_off_the_main_branch() {
  let fixture = RemoteRepoFixture::new();
  let config_home = TempDir::new().unwrap();
  create_branch(&fixture.repo, "feature-a").unwrap();
  create_branch(&fixture.repo, "feature-b").unwrap();
  checkout_branch(&fixture.repo, "feature-a").unwrap();

  sweep(fixture.path(), &config_home)
    .assert()
    .failure()
    .stderr(predicate::str::contains("not the main branch 'main'"))
    .stdout(predicate::str::contains("git checkout main"));

  assert!(fixture.has_local_branch("feature-b"));
}

#[test]
fn unmerged_branch_needs_force() {
  let fixture = RemoteRepoFixture::new();
  let config_home = TempDir::new().unwrap();
  create_branch(&fixture.repo, "wip").unwrap();
  checkout_branch(&fixture.repo, "wip").unwrap();
  create_commit(&fixture.repo, "wip.txt", "half done", "wip").unwrap();
  checkout_branch(&fixture.repo, "main").unwrap();

  sweep(fixture.path(), &config_home)
    .assert()
    .success()
    .stderr(predicate::str::contains("not fully merged into 'main'"))
    .stdout(predicate::str::contains("Deleted 0 branches"));
  assert!(fixture.has_local_branch("wip"));

  sweep(fixture.path(), &config_home)
    .arg("--force")
    .assert()
    .success()
    .stdout(predicate::str::contains("Deleted 1 branch"));
  assert!(!fixture.has_local_branch("wip"));
}

#[test]
fn head_override_names_the_main_branch() {
  let fixture = RemoteRepoFixture::new();
  let config_home = TempDir::new().unwrap();
  create_branch(&fixture.repo, "feature-a").unwrap();

  sweep(fixture.path(), &config_home)
    .args(["--head", "main", "--dry-run"])
    .assert()
    .success()
    .stdout(predicate::str::contains("as the main branch"));
}

#[cfg(target_os = "linux")]
#[test]
fn head_from_config_file() {
  let fixture = RemoteRepoFixture::new();
  let config_home = TempDir::new().unwrap();
  let config_dir = config_home.path().join("git-sweep");
  std::fs::create_dir_all(&config_dir).unwrap();
  std::fs::write(config_dir.join("config.toml"), "head_branch = \"develop\"\n").unwrap();

  // The configured main branch is not checked out, so nothing may be touched.
  create_branch(&fixture.repo, "feature-a").unwrap();
  sweep(fixture.path(), &config_home)
    .assert()
    .failure()
    .stderr(predicate::str::contains("not the main branch 'develop'"));

  assert!(fixture.has_local_branch("feature-a"));
}
