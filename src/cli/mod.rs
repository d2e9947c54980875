//! Command-line interface for moosup.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, DetectArgs, InstallArgs, ListArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
