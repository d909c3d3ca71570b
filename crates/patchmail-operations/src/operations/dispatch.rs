use std::ffi::{OsStr, OsString};

use patchmail_core::{RecipientRole, SendRequest};
use tracing::{debug, info};

use crate::Result;
use crate::traits::{Confirmation, ConfirmationProvider, MailSender, SendEmailCommand};

/// How a dispatch ended.
///
/// `Declined` and `Sent` are the two ways out of waiting for confirmation;
/// `DryRun` never asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Declined,
    Sent { exit_code: i32 },
    DryRun,
}

impl DispatchOutcome {
    /// The process exit code this outcome maps to.
    #[must_use]
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Sent { exit_code } => exit_code,
            Self::Declined | Self::DryRun => 0,
        }
    }
}

/// Assembles the `git send-email` invocation for `request`.
#[must_use]
pub fn build_send_email_command(git: &OsStr, request: &SendRequest) -> SendEmailCommand {
    let option = |name: &str, value: &str| OsString::from(format!("{name}={value}"));

    let mut args = vec![OsString::from("send-email"), OsString::from("--no-thread")];
    args.push(option("--smtp-server", &request.smtp_server));
    args.push(option("--from", &request.from));

    for role in [RecipientRole::To, RecipientRole::Cc] {
        let flag = format!("--{role}");
        for address in request.recipients.get(role) {
            args.push(option(&flag, address));
        }
    }

    if let Some(reply_to) = &request.reply_to {
        args.push(option("--in-reply-to", reply_to));
    }

    args.push(request.patch_path.clone().into_os_string());

    SendEmailCommand {
        program: git.to_os_string(),
        args,
    }
}

pub struct DispatchOperation<S, C> {
    sender: S,
    confirmation: C,
    git: OsString,
}

impl<S, C> DispatchOperation<S, C>
where
    S: MailSender,
    C: ConfirmationProvider,
{
    pub fn new(sender: S, confirmation: C) -> Self {
        Self {
            sender,
            confirmation,
            git: OsString::from("git"),
        }
    }

    #[must_use]
    pub fn with_git(mut self, git: impl Into<OsString>) -> Self {
        self.git = git.into();
        self
    }

    #[must_use]
    pub fn prepare(&self, request: &SendRequest) -> SendEmailCommand {
        debug!(from = %request.from, to = ?request.recipients.to(), cc = ?request.recipients.cc(), "preparing send");
        build_send_email_command(&self.git, request)
    }

    /// Asks for confirmation and, only if given, runs the command.
    ///
    /// # Errors
    ///
    /// Returns an error if the confirmation cannot be obtained or the send
    /// tool cannot be run to completion.
    pub fn execute(&self, command: &SendEmailCommand) -> Result<DispatchOutcome> {
        match self.confirmation.confirm_send(command)? {
            Confirmation::Decline => {
                info!("send declined, nothing was sent");
                Ok(DispatchOutcome::Declined)
            }
            Confirmation::Proceed => {
                let exit_code = self.sender.send(command)?;
                info!(exit_code, "git send-email finished");
                Ok(DispatchOutcome::Sent { exit_code })
            }
        }
    }
}
