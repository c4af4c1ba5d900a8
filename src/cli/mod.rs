//! CLI module for the calculator.
//!
//! Provides command-line argument parsing and dispatch to the calculator.

pub mod args;
pub mod commands;
pub mod exit_code;

pub use args::{Cli, USAGE};
pub use exit_code::ExitCode;
