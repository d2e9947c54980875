//! Detect command implementation.
//!
//! The `moosup detect` command reports the detected distribution and its
//! package manager without installing anything.

use serde_json::json;

use crate::cli::args::DetectArgs;
use crate::distro::detect_distro;
use crate::error::Result;
use crate::ui::theme::MoosupTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The detect command implementation.
pub struct DetectCommand {
    args: DetectArgs,
}

impl DetectCommand {
    /// Create a new detect command.
    pub fn new(args: DetectArgs) -> Self {
        Self { args }
    }
}

impl Command for DetectCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let distro = detect_distro()?;
        let manager = distro.package_manager();

        if self.args.json {
            let payload = json!({
                "distro": distro.id(),
                "name": distro.to_string(),
                "package_manager": manager,
            });
            let output = serde_json::to_string_pretty(&payload).map_err(anyhow::Error::from)?;
            ui.message(&output);
            return Ok(CommandResult::success());
        }

        let theme = MoosupTheme::new();
        ui.message(&format!(
            "Detected {} (package manager: {})",
            theme.highlight.apply_to(distro.to_string()),
            theme.command.apply_to(manager.to_string())
        ));
        Ok(CommandResult::success())
    }
}
