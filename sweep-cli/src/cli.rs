//! # Command Line Interface
//!
//! Flag definitions for `git-sweep` and the glue from parsed flags to a sweep
//! run.

use std::ffi::OsString;

use anyhow::{Context, Result};
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, CommandFactory, Parser};
use sweep_core::{ColorMode, GitRunner, SweepConfig, SweepOptions, SweepOutcome, detect_repository, get_config_dirs, run_sweep};
use tracing::debug;

/// Top-level CLI command for git-sweep
#[derive(Parser, Debug)]
#[command(name = "git-sweep")]
#[command(display_name = "🧹 git-sweep")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Delete local branches whose remote branch is gone")]
#[command(
  long_about = "Delete local branches that no longer have a remote-tracking counterpart.\n\n\
        git-sweep detects the main branch from the remote, checks that it is checked out,\n\
        prunes remote-tracking branches and then deletes every local branch that has no\n\
        matching remote branch. The main branch is never deleted."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Show which branches would be deleted without deleting them
  #[arg(short = 'n', long = "dry-run")]
  pub dry_run: bool,

  /// Delete with `git branch -D`, even if a branch is not fully merged
  #[arg(short = 'f', long = "force")]
  pub force: bool,

  /// Use this branch as the main branch instead of asking the remote
  #[arg(long = "head", value_name = "BRANCH")]
  pub head: Option<String>,
}

impl Cli {
  /// Parse the process arguments, dropping anything git-sweep does not know.
  pub fn parse_lenient() -> Self {
    Self::parse_from(retain_known_args(std::env::args_os()))
  }

  /// Combine the flags with the config file defaults.
  pub fn options(&self, config: &SweepConfig) -> SweepOptions {
    let base = config.options();
    SweepOptions {
      dry_run: self.dry_run,
      force: self.force,
      head_branch: self.head.clone().or(base.head_branch),
      remote: base.remote,
    }
  }
}

/// Filter raw arguments down to the flags [`Cli`] defines.
///
/// Unknown flags and stray positional tokens are dropped instead of being
/// rejected. The first element (the program name) is always kept.
pub fn retain_known_args<I>(args: I) -> Vec<OsString>
where
  I: IntoIterator<Item = OsString>,
{
  let mut command = Cli::command();
  command.build();

  let mut args = args.into_iter();
  let mut kept: Vec<OsString> = args.next().into_iter().collect();

  while let Some(raw) = args.next() {
    let Some(token) = raw.to_str() else {
      debug!("Ignoring non UTF-8 argument {raw:?}");
      continue;
    };

    if let Some(long) = token.strip_prefix("--") {
      let (name, inline_value) = match long.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (long, None),
      };
      match command.get_arguments().find(|arg| arg.get_long() == Some(name)) {
        Some(arg) => {
          kept.push(raw.clone());
          if arg.get_action().takes_values() && inline_value.is_none() {
            kept.extend(args.next());
          }
        }
        None => debug!("Ignoring unrecognized argument {token}"),
      }
    } else if let Some(shorts) = token.strip_prefix('-').filter(|s| !s.is_empty()) {
      // Every short flag is a switch, so clusters never carry a value.
      let mut cluster = String::from("-");
      for c in shorts.chars() {
        if command.get_arguments().any(|arg| arg.get_short() == Some(c)) {
          cluster.push(c);
        } else {
          debug!("Ignoring unrecognized flag -{c}");
        }
      }
      if cluster.len() > 1 {
        kept.push(OsString::from(cluster));
      }
    } else {
      debug!("Ignoring unrecognized argument {token}");
    }
  }

  kept
}

/// Run a sweep in the repository containing the current directory.
pub fn handle_cli(cli: Cli) -> Result<()> {
  cli.colors.apply();

  let repo_path = detect_repository().context("Not in a git repository. Run git-sweep inside a git work tree.")?;
  let config = get_config_dirs()?.load_config()?;
  let options = cli.options(&config);
  debug!("Sweeping {} with {options:?}", repo_path.display());

  let runner = GitRunner::new(repo_path);
  match run_sweep(&runner, &options)? {
    SweepOutcome::NothingToDelete { main_branch } => debug!("Nothing to delete besides {main_branch}"),
    SweepOutcome::Swept { report, .. } => debug!("Sweep finished: {report:?}"),
  }

  Ok(())
}
