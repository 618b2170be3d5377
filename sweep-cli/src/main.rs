//! # git-sweep Entry Point
//!
//! Deletes local branches whose remote branch is gone.

use sweep_cli::cli::{Cli, handle_cli};
use sweep_core::{SweepError, print_error, print_warning};
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
  let cmd = Cli::parse_lenient();

  let level = match cmd.verbose {
    0 => tracing::Level::WARN,  // Default: warnings and errors
    1 => tracing::Level::INFO,  // -v: info, warnings, and errors
    2 => tracing::Level::DEBUG, // -vv: debug, info, warnings, and errors
    _ => tracing::Level::TRACE, // -vvv or more: trace and everything else
  };

  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  debug!("Tracing initialized with level: {}", level);

  if let Err(e) = handle_cli(cmd) {
    print_error(&format!("{e:#}"));
    if let Some(hint) = e.downcast_ref::<SweepError>().map(SweepError::hint) {
      print_warning(&hint);
    }
    std::process::exit(1);
  }
}
