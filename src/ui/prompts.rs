//! Interactive prompts.

use console::Term;
use dialoguer::Confirm;

use crate::error::{MoosupError, Result};

use super::Confirmation;

/// Convert dialoguer errors to MoosupError.
fn map_dialoguer_err(e: dialoguer::Error) -> MoosupError {
    MoosupError::Io(e.into())
}

/// Ask the user a yes/no question on the terminal.
pub fn confirm_user(confirmation: &Confirmation, term: &Term) -> Result<bool> {
    Confirm::new()
        .with_prompt(&confirmation.question)
        .default(confirmation.default)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_defaults_are_carried() {
        let c = Confirmation::new("proceed", "Continue?", false);
        assert!(!c.default);
    }

    #[test]
    fn dialoguer_error_maps_to_io() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "tty closed");
        let err = map_dialoguer_err(dialoguer::Error::IO(io));
        assert!(matches!(err, MoosupError::Io(_)));
    }
}
