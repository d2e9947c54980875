//! moosup - Build-dependency installer for MOOS-IvP.
//!
//! moosup replaces the ad-hoc install shell script shipped with the MOOS-IvP
//! robotics middleware: it detects the Linux distribution, maps it to a
//! package manager, and installs the build dependencies in three categories
//! (core toolchain, MOOS libraries, GUI libraries).
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`distro`] - Linux distribution detection (os-release parsing)
//! - [`error`] - Error types and result aliases
//! - [`installer`] - Install pipeline orchestration
//! - [`logfile`] - Append-only install log
//! - [`packages`] - Package catalog per distro family and category
//! - [`pm`] - Package-manager command tables
//! - [`shell`] - Shell command execution
//! - [`ui`] - Prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use moosup::distro::Distro;
//! use moosup::pm::PackageManager;
//!
//! // Every supported distro maps to exactly one package manager.
//! assert_eq!(Distro::Ubuntu.package_manager(), PackageManager::AptGet);
//! assert_eq!(Distro::Arch.package_manager(), PackageManager::Pacman);
//! ```

pub mod cli;
pub mod distro;
pub mod error;
pub mod installer;
pub mod logfile;
pub mod packages;
pub mod pm;
pub mod shell;
pub mod ui;

pub use error::{MoosupError, Result};
