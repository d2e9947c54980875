//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::Result;

use super::theme::MoosupTheme;
use super::{Confirmation, OutputMode, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Confirmations cannot block on a TTY here: the answer comes from a
/// `MOOSUP_CONFIRM_<KEY>` environment variable when set, otherwise from the
/// confirmation's default.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with("MOOSUP_CONFIRM_"))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn confirm(&mut self, confirmation: &Confirmation) -> Result<bool> {
        let env_key = format!("MOOSUP_CONFIRM_{}", confirmation.key.to_uppercase());
        if let Some(value) = self.env_overrides.get(&env_key) {
            let answer = matches!(value.to_lowercase().as_str(), "true" | "yes" | "y" | "1");
            return Ok(answer);
        }

        Ok(confirmation.default)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        if self.mode.shows_status() {
            println!("[{}/{}]", current, total);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that prints only final status lines (for non-interactive mode).
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        let theme = MoosupTheme::plain();
        println!("{}", theme.format_success(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        let theme = MoosupTheme::plain();
        println!("{}", theme.format_error(msg));
    }

    fn finish_skipped(&mut self, msg: &str) {
        let theme = MoosupTheme::plain();
        println!("{}", theme.format_skipped(msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_is_not_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn confirm_uses_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());

        let yes = Confirmation::new("proceed", "Continue?", true);
        let no = Confirmation::new("proceed", "Continue?", false);

        assert!(ui.confirm(&yes).unwrap());
        assert!(!ui.confirm(&no).unwrap());
    }

    #[test]
    fn confirm_uses_env_override() {
        let mut overrides = HashMap::new();
        overrides.insert("MOOSUP_CONFIRM_PROCEED".to_string(), "no".to_string());

        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
        let confirmation = Confirmation::new("proceed", "Continue?", true);

        assert!(!ui.confirm(&confirmation).unwrap());
    }

    #[test]
    fn confirm_override_accepts_yes_spellings() {
        for value in ["true", "yes", "y", "1"] {
            let mut overrides = HashMap::new();
            overrides.insert("MOOSUP_CONFIRM_PROCEED".to_string(), value.to_string());

            let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
            let confirmation = Confirmation::new("proceed", "Continue?", false);

            assert!(ui.confirm(&confirmation).unwrap(), "value: {}", value);
        }
    }

    #[test]
    fn output_mode_preserved() {
        let ui = NonInteractiveUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn noop_spinner_methods() {
        let mut spinner = NoopSpinner;
        spinner.set_message("test");
        spinner.finish_success("done");
        spinner.finish_error("failed");
        spinner.finish_skipped("skipped");
    }
}
