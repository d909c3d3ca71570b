use std::process::Command;
use std::time::Duration;

use crate::Result;
use crate::error::OperationError;
use crate::providers::process::run_inherited;
use crate::traits::{MailSender, SendEmailCommand};

/// Hands the series to `git send-email` on the operator's terminal.
pub struct GitSendEmail {
    timeout: Option<Duration>,
}

impl GitSendEmail {
    #[must_use]
    pub fn new() -> Self {
        Self { timeout: None }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for GitSendEmail {
    fn default() -> Self {
        Self::new()
    }
}

impl MailSender for GitSendEmail {
    fn send(&self, command: &SendEmailCommand) -> Result<i32> {
        let mut process = Command::new(&command.program);
        process.args(&command.args);

        let status = run_inherited(process, self.timeout)?;

        status.code().ok_or_else(|| OperationError::ToolFailed {
            program: command.program.to_string_lossy().into_owned(),
            status,
            stderr: String::new(),
        })
    }
}
