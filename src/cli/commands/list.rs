//! List command implementation.
//!
//! The `moosup list` command prints the packages an install would cover,
//! grouped by category, without touching the system.

use serde_json::json;

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::packages::install_plan;
use crate::ui::theme::MoosupTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::install::resolve_distro;

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let distro = resolve_distro(self.args.distro.as_deref())?;
        let manager = distro.package_manager();
        let plan = install_plan(distro, self.args.minimal);

        if self.args.json {
            let payload = json!({
                "distro": distro.id(),
                "package_manager": manager,
                "phases": plan,
            });
            let output = serde_json::to_string_pretty(&payload).map_err(anyhow::Error::from)?;
            ui.message(&output);
            return Ok(CommandResult::success());
        }

        let theme = MoosupTheme::new();
        ui.message(&format!(
            "Packages for {} (via {}):",
            theme.highlight.apply_to(distro.to_string()),
            theme.command.apply_to(manager.to_string())
        ));
        for phase in &plan {
            ui.message(&format!("  {}", theme.header.apply_to(phase.category.label())));
            if phase.packages.is_empty() {
                ui.message(&format!("    {}", theme.dim.apply_to("(skipped)")));
                continue;
            }
            for pkg in &phase.packages {
                ui.message(&format!("    {}", pkg));
            }
        }
        Ok(CommandResult::success())
    }
}
