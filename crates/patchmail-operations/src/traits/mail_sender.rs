use std::ffi::OsString;
use std::fmt;

use crate::Result;

/// A fully assembled `git send-email` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendEmailCommand {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl SendEmailCommand {
    /// Arguments that start with `flag=`, with the prefix removed.
    pub fn values_of<'a>(&'a self, flag: &'a str) -> impl Iterator<Item = String> + 'a {
        self.args.iter().filter_map(move |arg| {
            arg.to_str()
                .and_then(|arg| arg.strip_prefix(flag))
                .and_then(|rest| rest.strip_prefix('='))
                .map(str::to_string)
        })
    }
}

impl fmt::Display for SendEmailCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

pub trait MailSender: Send + Sync {
    /// Runs the command and returns the tool's exit code.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool cannot be started, is killed by a signal or
    /// times out.
    fn send(&self, command: &SendEmailCommand) -> Result<i32>;
}
