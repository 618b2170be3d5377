//! # git-sweep core
//!
//! Finds local branches whose remote-tracking counterpart is gone and deletes
//! them, keeping the main branch safe. All git access goes through
//! [`CommandRunner`], so the whole sweep can run against a scripted runner.

pub mod branches;
pub mod config;
pub mod consts;
pub mod delete;
pub mod detection;
pub mod error;
pub mod output;
pub mod resolve;
pub mod runner;
pub mod sweep;
pub mod validate;

#[cfg(test)]
mod testing;

pub use branches::{current_branch, parse_branch_list, stale_branches};
pub use config::{ConfigDirs, SweepConfig, get_config_dirs};
pub use delete::{DeletionFailure, DeletionReport, delete_branches};
pub use detection::{detect_repository, detect_repository_from_path};
pub use error::SweepError;
pub use output::{ColorMode, print_error, print_info, print_success, print_warning};
pub use resolve::resolve_main_branch;
pub use runner::{CommandRunner, GitCommand, GitRunner, RunError};
pub use sweep::{SweepOptions, SweepOutcome, run_sweep};
pub use validate::ensure_on_main_branch;
