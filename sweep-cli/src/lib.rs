//! # git-sweep CLI Library
//!
//! Argument handling for the `git-sweep` binary, exposed as a library so the
//! flag filtering can be tested on its own.

pub mod cli;
