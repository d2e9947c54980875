//! Install command implementation.
//!
//! The `moosup install` command (also the default when no subcommand is
//! given) runs the full pipeline: detect the distro, pick its package
//! manager, build the package plan, confirm, then hand off to
//! [`crate::installer`].

use std::str::FromStr;

use crate::cli::args::InstallArgs;
use crate::distro::{detect_distro, Distro};
use crate::error::{MoosupError, Result};
use crate::installer::{self, InstallOptions, PhaseStatus};
use crate::logfile::{InstallLog, LogLevel};
use crate::ui::{Confirmation, OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand {
    args: InstallArgs,
}

impl InstallCommand {
    /// Create a new install command.
    pub fn new(args: InstallArgs) -> Self {
        Self { args }
    }
}

/// Resolve the target distro: honour a forced id, otherwise detect.
pub(crate) fn resolve_distro(forced: Option<&str>) -> Result<Distro> {
    match forced {
        Some(id) => Distro::from_str(id).map_err(|_| MoosupError::UnsupportedDistro {
            id: id.to_string(),
        }),
        None => detect_distro(),
    }
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let distro = resolve_distro(self.args.force_distro.as_deref())?;
        let mapped = distro.package_manager();
        let plan = crate::packages::install_plan(distro, self.args.minimal);
        let package_count: usize = plan.iter().map(|p| p.packages.len()).sum();

        ui.show_header("MOOS-IvP dependency setup");
        ui.message(&format!("Distribution:    {}", distro));
        ui.message(&format!("Package manager: {}", mapped));
        ui.message(&format!(
            "Packages:        {}{}",
            package_count,
            if self.args.minimal { " (minimal)" } else { "" }
        ));
        if ui.output_mode() == OutputMode::Verbose {
            for phase in &plan {
                ui.message(&format!(
                    "  {}: {}",
                    phase.category.label(),
                    phase.packages.join(" ")
                ));
            }
        }

        if !self.args.assume_yes && !self.args.dry_run {
            let question = format!("Install {} packages on {}?", package_count, distro);
            // Headless runs must opt in explicitly (--yes or an env
            // override); only an interactive prompt defaults to yes.
            let confirmation = Confirmation::new("install", question, ui.is_interactive());
            if !ui.confirm(&confirmation)? {
                ui.message("Aborted.");
                if !ui.is_interactive() {
                    ui.message(
                        "Pass --yes (or set MOOSUP_CONFIRM_INSTALL=yes) to install without a prompt.",
                    );
                }
                return Ok(CommandResult::failure(1));
            }
        }

        let ctx = installer::default_context();

        // A dry run prints commands for the mapped manager even when it is
        // not installed; a real run verifies it is on PATH first.
        let manager = if self.args.dry_run {
            mapped
        } else {
            installer::resolve_manager(distro, &ctx)?
        };

        let log = match &self.args.log_file {
            Some(path) => InstallLog::new(path.clone()),
            None => InstallLog::open_default(),
        };
        let options = InstallOptions {
            dry_run: self.args.dry_run,
            assume_yes: self.args.assume_yes,
            skip_refresh: self.args.skip_refresh,
        };

        let report = installer::run_install(manager, &plan, &options, &ctx, ui, &log)?;
        for phase in &report.phases {
            if phase.status == PhaseStatus::Failed {
                tracing::warn!("phase failed: {}", phase.label);
            }
        }

        if options.dry_run {
            ui.success("Dry run complete; no commands were executed.");
            return Ok(CommandResult::success());
        }

        let failed = report.failed();
        if failed.is_empty() {
            log.append(LogLevel::Info, "install finished: all phases ok");
            ui.success(&format!(
                "All packages installed. Log: {}",
                log.path().display()
            ));
            Ok(CommandResult::success())
        } else {
            log.append(
                LogLevel::Error,
                &format!("install finished: failed phases: {}", failed.join(", ")),
            );
            ui.error(&format!(
                "{} of {} phases failed: {}. See {}",
                failed.len(),
                report.phases.len(),
                failed.join(", "),
                log.path().display()
            ));
            Ok(CommandResult::failure(5))
        }
    }
}
