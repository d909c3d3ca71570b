use dialoguer::Confirm;
use patchmail_operations::traits::{Confirmation, ConfirmationProvider, SendEmailCommand};
use patchmail_operations::{OperationError, Result};
use tracing::warn;

use crate::environment::NonInteractiveReason;

/// Shows the pending `git send-email` command and asks on the terminal.
pub struct TerminalConfirmation;

impl ConfirmationProvider for TerminalConfirmation {
    fn confirm_send(&self, command: &SendEmailCommand) -> Result<Confirmation> {
        let to = command.values_of("--to").count();
        let cc = command.values_of("--cc").count();

        // Same stream as the dialoguer prompt.
        eprintln!();
        eprintln!("{command}");
        eprintln!();
        eprintln!("Recipients: {to} to, {cc} cc");

        let answer = Confirm::new()
            .with_prompt("do you want to send it?")
            .default(false)
            .interact_opt()
            .map_err(|e| match e {
                dialoguer::Error::IO(io_err) => OperationError::Io(io_err),
            })?;

        match answer {
            Some(true) => Ok(Confirmation::Proceed),
            Some(false) | None => Ok(Confirmation::Decline),
        }
    }
}

/// Used when no terminal is available: refuses instead of sending unconfirmed.
pub struct NonInteractiveConfirmation {
    reason: NonInteractiveReason,
}

impl NonInteractiveConfirmation {
    #[must_use]
    pub fn new(reason: NonInteractiveReason) -> Self {
        Self { reason }
    }
}

impl ConfirmationProvider for NonInteractiveConfirmation {
    fn confirm_send(&self, command: &SendEmailCommand) -> Result<Confirmation> {
        warn!(reason = %self.reason, %command, "cannot ask for confirmation");
        Err(OperationError::InteractionRequired)
    }
}
