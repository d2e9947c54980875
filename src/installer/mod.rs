//! Install pipeline orchestration.
//!
//! Runs the phases of an install: privilege check, package cache refresh,
//! then one install per package category. Phase failures are counted and
//! reported but never stop later phases; the caller turns a non-empty
//! failure list into exit code 5.
//!
//! External effects (running commands, probing privileges and package
//! managers) are injected through [`InstallContext`] so tests can assert,
//! among other things, that dry-run never invokes the real package manager.

use crate::distro::Distro;
use crate::error::{MoosupError, Result};
use crate::logfile::{InstallLog, LogLevel};
use crate::packages::PlannedPhase;
use crate::pm::PackageManager;
use crate::shell::{OutputCallback, OutputLine};
use crate::ui::{live_output_callback, OutputMode, UserInterface};

/// Options controlling an install run.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstallOptions {
    /// Print commands without executing anything.
    pub dry_run: bool,

    /// Pass the package manager's own assume-yes flag.
    pub assume_yes: bool,

    /// Skip the package cache refresh phase.
    pub skip_refresh: bool,
}

/// Injectable dependencies for the installer.
pub struct InstallContext<'a> {
    /// Run a shell command, returning true on success. When a callback is
    /// given, output is streamed to it line by line.
    pub run_command: &'a dyn Fn(&str, Option<OutputCallback>) -> bool,

    /// Check whether the process has effective root privileges.
    pub is_elevated: &'a dyn Fn() -> bool,

    /// Check whether sudo is usable.
    pub has_sudo: &'a dyn Fn() -> bool,

    /// Check whether a package manager binary is on PATH.
    pub manager_available: &'a dyn Fn(PackageManager) -> bool,
}

/// Build the default `InstallContext` for production use.
///
/// With a callback the command's output is streamed to it (usually into a
/// spinner's ring buffer); without one the output is captured so quiet
/// modes stay quiet.
pub fn default_context() -> InstallContext<'static> {
    InstallContext {
        run_command: &|cmd, callback| {
            let options = crate::shell::CommandOptions {
                capture_stdout: callback.is_none(),
                capture_stderr: callback.is_none(),
                ..Default::default()
            };
            let result = match callback {
                Some(cb) => crate::shell::execute_streaming(cmd, &options, cb),
                None => crate::shell::execute(cmd, &options),
            };
            result.map(|r| r.success).unwrap_or(false)
        },
        is_elevated: &crate::shell::is_elevated,
        has_sudo: &|| crate::shell::execute_check("sudo --version", None),
        manager_available: &|pm| pm.is_available(),
    }
}

/// Outcome of a single phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseStatus {
    /// Phase ran and succeeded.
    Completed,
    /// Phase ran and failed.
    Failed,
    /// Nothing to do (e.g. empty GUI list under --minimal).
    Skipped,
    /// Dry run: command printed, not executed.
    Planned,
}

/// Result of one phase of the install.
#[derive(Debug, Clone)]
pub struct PhaseResult {
    /// Phase label ("package cache" or a category label).
    pub label: String,

    /// The command line, when one was built.
    pub command: Option<String>,

    /// How the phase ended.
    pub status: PhaseStatus,
}

/// Summary of a whole install run.
#[derive(Debug, Clone, Default)]
pub struct InstallReport {
    /// Per-phase outcomes, in execution order.
    pub phases: Vec<PhaseResult>,
}

impl InstallReport {
    /// Labels of failed phases.
    pub fn failed(&self) -> Vec<&str> {
        self.phases
            .iter()
            .filter(|p| p.status == PhaseStatus::Failed)
            .map(|p| p.label.as_str())
            .collect()
    }

    /// Whether every attempted phase succeeded.
    pub fn success(&self) -> bool {
        self.failed().is_empty()
    }

    fn push(&mut self, label: &str, command: Option<String>, status: PhaseStatus) {
        self.phases.push(PhaseResult {
            label: label.to_string(),
            command,
            status,
        });
    }
}

/// Pick the package manager for a distro, verifying it is installed.
///
/// CentOS/RHEL systems that predate dnf fall back to yum. A distro whose
/// manager (and fallback) is missing is fatal with exit code 4.
pub fn resolve_manager(distro: Distro, ctx: &InstallContext<'_>) -> Result<PackageManager> {
    let preferred = distro.package_manager();
    if (ctx.manager_available)(preferred) {
        return Ok(preferred);
    }

    if preferred == PackageManager::Dnf && (ctx.manager_available)(PackageManager::Yum) {
        tracing::debug!("dnf not found, falling back to yum");
        return Ok(PackageManager::Yum);
    }

    Err(MoosupError::PackageManagerNotFound {
        manager: preferred.binary().to_string(),
    })
}

/// Determine the command prefix needed to run the package manager.
///
/// Root runs directly; a non-root user needs sudo on PATH. Dry runs need
/// no privileges at all.
pub fn privilege_prefix(options: &InstallOptions, ctx: &InstallContext<'_>) -> Result<String> {
    if options.dry_run || (ctx.is_elevated)() {
        return Ok(String::new());
    }

    if (ctx.has_sudo)() {
        return Ok("sudo ".to_string());
    }

    Err(MoosupError::MissingPrivileges {
        message: "package installation requires root; re-run as root or install sudo".to_string(),
    })
}

/// Run the install pipeline.
///
/// The plan comes from [`crate::packages::install_plan`]. Every phase
/// outcome is appended to the install log, except under dry-run, which
/// writes nothing anywhere.
pub fn run_install(
    manager: PackageManager,
    plan: &[PlannedPhase],
    options: &InstallOptions,
    ctx: &InstallContext<'_>,
    ui: &mut dyn UserInterface,
    log: &InstallLog,
) -> Result<InstallReport> {
    let prefix = privilege_prefix(options, ctx)?;
    let mut report = InstallReport::default();

    let total = plan.len() + usize::from(!options.skip_refresh);
    let mut current = 0;

    // Logged only once the run is actually going ahead, so a privilege
    // failure leaves no dangling start entry.
    if !options.dry_run {
        log.append(
            LogLevel::Info,
            &format!("install started: manager={} phases={}", manager, total),
        );
    }

    if !options.skip_refresh {
        current += 1;
        ui.show_progress(current, total);
        let command = format!("{}{}", prefix, manager.refresh_command());
        run_phase(
            "package cache",
            &command,
            None,
            options,
            ctx,
            ui,
            log,
            &mut report,
        );
    }

    for phase in plan {
        current += 1;
        ui.show_progress(current, total);
        let label = phase.category.label();

        if phase.packages.is_empty() {
            ui.warning(&format!("{}: nothing to install", label));
            report.push(label, None, PhaseStatus::Skipped);
            continue;
        }

        let command = format!(
            "{}{}",
            prefix,
            manager.install_command(&phase.packages, options.assume_yes)
        );
        run_phase(
            label,
            &command,
            Some(phase.packages.len()),
            options,
            ctx,
            ui,
            log,
            &mut report,
        );
    }

    Ok(report)
}

#[allow(clippy::too_many_arguments)]
fn run_phase(
    label: &str,
    command: &str,
    package_count: Option<usize>,
    options: &InstallOptions,
    ctx: &InstallContext<'_>,
    ui: &mut dyn UserInterface,
    log: &InstallLog,
    report: &mut InstallReport,
) {
    if options.dry_run {
        ui.message(&format!("[dry-run] would run: {}", command));
        report.push(label, Some(command.to_string()), PhaseStatus::Planned);
        return;
    }

    let spinner_msg = match package_count {
        Some(n) => format!("Installing {} ({} packages)", label, n),
        None => format!("Refreshing {}", label),
    };
    let output_mode = ui.output_mode();
    let mut spinner = ui.start_spinner(&spinner_msg);

    // Live output: spinner ring buffer when interactive, direct print when
    // verbose without a spinner, captured otherwise.
    let output_callback = spinner
        .progress_bar()
        .and_then(|bar| {
            let max_lines = match output_mode {
                OutputMode::Verbose => 3,
                OutputMode::Normal => 2,
                _ => return None,
            };
            Some(live_output_callback(bar, spinner_msg.clone(), max_lines))
        })
        .or_else(|| {
            if output_mode == OutputMode::Verbose {
                let cb: OutputCallback = Box::new(|line: OutputLine| {
                    let text = match &line {
                        OutputLine::Stdout(s) => s.trim_end(),
                        OutputLine::Stderr(s) => s.trim_end(),
                    };
                    if !text.is_empty() {
                        println!("  {text}");
                    }
                });
                Some(cb)
            } else {
                None
            }
        });

    tracing::debug!("Running: {}", command);
    if (ctx.run_command)(command, output_callback) {
        spinner.finish_success(label);
        log.append(LogLevel::Info, &format!("{}: ok ({})", label, command));
        report.push(label, Some(command.to_string()), PhaseStatus::Completed);
    } else {
        spinner.finish_error(&format!("{} failed", label));
        log.append(LogLevel::Error, &format!("{}: failed ({})", label, command));
        report.push(label, Some(command.to_string()), PhaseStatus::Failed);
    }
}
