use crate::Result;
use crate::traits::SendEmailCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Proceed,
    Decline,
}

pub trait ConfirmationProvider: Send + Sync {
    /// Shows the pending command to the operator and asks whether to send it.
    ///
    /// # Errors
    ///
    /// Returns an error if the interaction cannot be completed.
    fn confirm_send(&self, command: &SendEmailCommand) -> Result<Confirmation>;
}
