//! Test utilities shared across the git-sweep workspace
//!
//! Fixtures that build real repositories with `git2`, so end-to-end tests can
//! run the `git-sweep` binary against an `origin` that branches disappear
//! from.
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod git;

pub use git::{MAIN_BRANCH, RemoteRepoFixture, checkout_branch, create_branch, create_commit, push_branch};
