//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// moosup - MOOS-IvP build dependency installer.
#[derive(Debug, Parser)]
#[command(name = "moosup")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Install flags, usable without the `install` subcommand.
    #[command(flatten)]
    pub install: InstallArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install MOOS-IvP build dependencies (default if no command specified)
    Install(InstallArgs),

    /// Detect the current Linux distribution
    Detect(DetectArgs),

    /// List the packages that would be installed
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    /// Skip GUI libraries (headless build)
    #[arg(short, long)]
    pub minimal: bool,

    /// Preview commands without executing
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Skip detection and use this distro id (e.g. ubuntu, fedora)
    #[arg(short = 'f', long, value_name = "ID")]
    pub force_distro: Option<String>,

    /// Answer yes to all prompts, including the package manager's
    #[arg(short = 'y', long = "yes")]
    pub assume_yes: bool,

    /// Skip the package cache refresh
    #[arg(long)]
    pub skip_refresh: bool,

    /// Write the install log to this file instead of the default
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Arguments for the `detect` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DetectArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// List packages for this distro id instead of detecting
    #[arg(short = 'f', long = "force-distro", value_name = "ID")]
    pub distro: Option<String>,

    /// Omit GUI libraries
    #[arg(short, long)]
    pub minimal: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
